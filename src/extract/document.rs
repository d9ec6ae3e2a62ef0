//! Narrow accessor over the credits page markup
//!
//! Every structural assumption about the upstream markup lives in this file:
//! the `data-testid` markers and the exact class lists the credits page
//! currently renders. The upstream schema is class- and position-fragile;
//! when it drifts, this accessor is the thing that breaks.

use crate::extract::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// Marker on the page subtitle carrying the title name
const SUBTITLE: &str = r#"h2[data-testid="subtitle"]"#;

/// Marker on the section block enumerating cast rows
const CAST_SECTION: &str = r#"div[data-testid="sub-section-cast"]"#;

/// Compound signature of one actor-credit row
const CAST_ROW: &str =
    "li.ipc-metadata-list-summary-item.sc-2578cde7-0.gSIobG.full-credits-page-list-item";

/// Link holding the actor's display name
const ACTOR_LINK: &str =
    "a.ipc-link.ipc-link--base.name-credits--title-text.name-credits--title-text-big";

/// Link holding the character's display name; its href embeds the actor id
const CHARACTER_LINK: &str = "a.ipc-link.ipc-link--base.ipc-link--inherit-color";

/// Compiled selectors for the five structural markers
struct Selectors {
    subtitle: Selector,
    cast_section: Selector,
    cast_row: Selector,
    actor_link: Selector,
    character_link: Selector,
}

impl Selectors {
    fn compile() -> Result<Self, ExtractError> {
        Ok(Self {
            subtitle: compile_one(SUBTITLE)?,
            cast_section: compile_one(CAST_SECTION)?,
            cast_row: compile_one(CAST_ROW)?,
            actor_link: compile_one(ACTOR_LINK)?,
            character_link: compile_one(CHARACTER_LINK)?,
        })
    }
}

fn compile_one(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector(e.to_string()))
}

/// A parsed credits page
pub struct CreditsDocument {
    html: Html,
    selectors: Selectors,
}

impl CreditsDocument {
    /// Parses the raw markup. Malformed HTML does not fail here; the parser
    /// recovers the way a browser would, and structural absences surface
    /// through the accessors instead.
    pub fn parse(markup: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            html: Html::parse_document(markup),
            selectors: Selectors::compile()?,
        })
    }

    /// Text of the first subtitle element, trimmed of surrounding whitespace
    pub fn subtitle(&self) -> Option<String> {
        self.html
            .select(&self.selectors.subtitle)
            .next()
            .map(element_text)
    }

    /// Cast rows inside the first cast section, in document order
    ///
    /// Returns `None` when the page has no cast section at all; a present
    /// but empty section yields an empty vector.
    pub fn cast_rows(&self) -> Option<Vec<CastRow<'_>>> {
        let section = self.html.select(&self.selectors.cast_section).next()?;

        Some(
            section
                .select(&self.selectors.cast_row)
                .map(|element| CastRow {
                    element,
                    selectors: &self.selectors,
                })
                .collect(),
        )
    }
}

/// One actor-credit row of the cast section
pub struct CastRow<'a> {
    element: ElementRef<'a>,
    selectors: &'a Selectors,
}

impl<'a> CastRow<'a> {
    /// The actor's display name, trimmed
    pub fn actor_name(&self) -> Option<String> {
        self.element
            .select(&self.selectors.actor_link)
            .next()
            .map(element_text)
    }

    /// The character's display name, trimmed
    pub fn character_name(&self) -> Option<String> {
        self.element
            .select(&self.selectors.character_link)
            .next()
            .map(element_text)
    }

    /// The character link's href attribute, verbatim
    pub fn character_href(&self) -> Option<&'a str> {
        self.element
            .select(&self.selectors.character_link)
            .next()?
            .value()
            .attr("href")
    }
}

/// Collects an element's text nodes and trims the result
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
