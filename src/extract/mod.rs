//! Extraction pipeline: credits markup in, one `TitleRecord` out
//!
//! The pipeline walks the page through the [`document`] accessor: resolve
//! the title from the subtitle marker, find the cast section, convert the
//! first `limit` cast rows into [`CastMember`]s. Anything structurally
//! missing aborts extraction for the one title under processing; callers
//! are expected to log and move on.

pub mod document;

use crate::record::{CastMember, TitleRecord};
use document::CreditsDocument;
use thiserror::Error;

/// Errors that can occur while extracting a cast list from markup
///
/// All of these are scoped to a single title; none of them should abort a
/// run over several titles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no subtitle element in document")]
    MissingTitle,

    #[error("no cast section in document")]
    MissingCastSection,

    #[error("cast row {index} is missing the actor name link")]
    MissingActorName { index: usize },

    #[error("cast row {index} is missing the character link")]
    MissingCharacterLink { index: usize },

    #[error("cast row {index} character link has no href")]
    MissingHref { index: usize },

    #[error("no actor id segment in href '{href}'")]
    MissingIdSegment { href: String },

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Extracts the capped cast list for one title from its credits markup
///
/// # Arguments
///
/// * `markup` - The credits page document
/// * `catalog_id` - The identifier the page was requested under
/// * `limit` - Maximum number of cast rows converted to members; rows past
///   the cap are silently dropped
///
/// # Returns
///
/// * `Ok(TitleRecord)` - Title name, catalog id, and up to `limit` members
///   in document order
/// * `Err(ExtractError)` - The document is missing a structural element;
///   no partial record is produced
pub fn extract_title_record(
    markup: &str,
    catalog_id: &str,
    limit: usize,
) -> Result<TitleRecord, ExtractError> {
    let document = CreditsDocument::parse(markup)?;

    let title_name = document.subtitle().ok_or(ExtractError::MissingTitle)?;
    let rows = document.cast_rows().ok_or(ExtractError::MissingCastSection)?;

    let mut members = Vec::new();
    for (index, row) in rows.into_iter().take(limit).enumerate() {
        let actor_name = row
            .actor_name()
            .ok_or(ExtractError::MissingActorName { index })?;

        let character_name = row
            .character_name()
            .ok_or(ExtractError::MissingCharacterLink { index })?;

        let href = row.character_href().ok_or(ExtractError::MissingHref { index })?;

        let actor_id = actor_id_from_href(href).ok_or_else(|| ExtractError::MissingIdSegment {
            href: href.to_string(),
        })?;

        members.push(CastMember::new(actor_name, character_name, actor_id));
    }

    Ok(TitleRecord::new(
        title_name,
        catalog_id.to_string(),
        members,
    ))
}

/// Pulls the actor id out of a character link href
///
/// Hrefs currently look like `/title/tt7366338/characters/nm0397171`, so the
/// id sits in the fourth path segment. The split is purely positional: a
/// href with a different layout but enough segments yields whatever occupies
/// that position, not an error.
fn actor_id_from_href(href: &str) -> Option<String> {
    href.split('/').nth(4).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds one well-formed cast row
    fn cast_row(actor: &str, character: &str, href: &str) -> String {
        format!(
            concat!(
                r#"<li class="ipc-metadata-list-summary-item sc-2578cde7-0 gSIobG full-credits-page-list-item">"#,
                r#"<a class="ipc-link ipc-link--base name-credits--title-text name-credits--title-text-big">{actor}</a>"#,
                r#"<span><a class="ipc-link ipc-link--base ipc-link--inherit-color" href="{href}">{character}</a></span>"#,
                "</li>"
            ),
            actor = actor,
            character = character,
            href = href,
        )
    }

    /// Builds a full credits page around the given row markup
    fn credits_page(title: &str, rows_markup: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html><head><title>Full cast</title></head><body>
<h2 data-testid="subtitle">{title}</h2>
<div data-testid="sub-section-cast"><ul>{rows}</ul></div>
</body></html>"#,
            title = title,
            rows = rows_markup,
        )
    }

    fn chernobyl_page(row_count: usize) -> String {
        let rows: String = (0..row_count)
            .map(|i| {
                cast_row(
                    &format!("Actor {}", i),
                    &format!("Character {}", i),
                    &format!("/title/tt7366338/characters/nm000{}", i),
                )
            })
            .collect();
        credits_page("Chernobyl", &rows)
    }

    #[test]
    fn test_extracts_title_and_members() {
        let record = extract_title_record(&chernobyl_page(3), "tt7366338", 10).unwrap();

        assert_eq!(record.title_name, "Chernobyl");
        assert_eq!(record.catalog_id, "tt7366338");
        assert_eq!(record.members.len(), 3);
        assert_eq!(record.members[0].actor_name, "Actor 0");
        assert_eq!(record.members[0].character_name, "Character 0");
        assert_eq!(record.members[0].actor_id, "nm0000");
    }

    #[test]
    fn test_members_follow_document_order() {
        let record = extract_title_record(&chernobyl_page(5), "tt7366338", 10).unwrap();

        let ids: Vec<&str> = record.members.iter().map(|m| m.actor_id.as_str()).collect();
        assert_eq!(ids, vec!["nm0000", "nm0001", "nm0002", "nm0003", "nm0004"]);
    }

    #[test]
    fn test_limit_caps_member_count() {
        let record = extract_title_record(&chernobyl_page(5), "tt7366338", 2).unwrap();

        assert_eq!(record.members.len(), 2);
        assert_eq!(record.members[1].actor_id, "nm0001");
    }

    #[test]
    fn test_fewer_rows_than_limit_yields_all_rows() {
        let record = extract_title_record(&chernobyl_page(2), "tt7366338", 10).unwrap();
        assert_eq!(record.members.len(), 2);
    }

    #[test]
    fn test_limit_zero_yields_empty_members() {
        let record = extract_title_record(&chernobyl_page(5), "tt7366338", 0).unwrap();
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_names_are_trimmed() {
        let row = cast_row(
            "  Jared Harris  ",
            "\n  Valery Legasov  \n",
            "/title/tt7366338/characters/nm0362766",
        );
        let record =
            extract_title_record(&credits_page("  Chernobyl  ", &row), "tt7366338", 10).unwrap();

        assert_eq!(record.title_name, "Chernobyl");
        assert_eq!(record.members[0].actor_name, "Jared Harris");
        assert_eq!(record.members[0].character_name, "Valery Legasov");
    }

    #[test]
    fn test_missing_subtitle_fails() {
        let markup = r#"<html><body>
            <div data-testid="sub-section-cast"><ul></ul></div>
        </body></html>"#;

        assert_eq!(
            extract_title_record(markup, "tt7366338", 10),
            Err(ExtractError::MissingTitle)
        );
    }

    #[test]
    fn test_missing_cast_section_fails() {
        let markup = r#"<html><body>
            <h2 data-testid="subtitle">Chernobyl</h2>
        </body></html>"#;

        assert_eq!(
            extract_title_record(markup, "tt7366338", 10),
            Err(ExtractError::MissingCastSection)
        );
    }

    #[test]
    fn test_empty_cast_section_yields_empty_record() {
        let record = extract_title_record(&chernobyl_page(0), "tt7366338", 10).unwrap();
        assert!(record.members.is_empty());
    }

    #[test]
    fn test_row_without_actor_link_fails() {
        let row = concat!(
            r#"<li class="ipc-metadata-list-summary-item sc-2578cde7-0 gSIobG full-credits-page-list-item">"#,
            r#"<span><a class="ipc-link ipc-link--base ipc-link--inherit-color" href="/title/tt1/characters/nm1">C</a></span>"#,
            "</li>"
        );

        assert_eq!(
            extract_title_record(&credits_page("T", row), "tt1", 10),
            Err(ExtractError::MissingActorName { index: 0 })
        );
    }

    #[test]
    fn test_row_without_character_link_fails() {
        let row = concat!(
            r#"<li class="ipc-metadata-list-summary-item sc-2578cde7-0 gSIobG full-credits-page-list-item">"#,
            r#"<a class="ipc-link ipc-link--base name-credits--title-text name-credits--title-text-big">A</a>"#,
            "</li>"
        );

        assert_eq!(
            extract_title_record(&credits_page("T", row), "tt1", 10),
            Err(ExtractError::MissingCharacterLink { index: 0 })
        );
    }

    #[test]
    fn test_character_link_without_href_fails() {
        let row = concat!(
            r#"<li class="ipc-metadata-list-summary-item sc-2578cde7-0 gSIobG full-credits-page-list-item">"#,
            r#"<a class="ipc-link ipc-link--base name-credits--title-text name-credits--title-text-big">A</a>"#,
            r#"<span><a class="ipc-link ipc-link--base ipc-link--inherit-color">C</a></span>"#,
            "</li>"
        );

        assert_eq!(
            extract_title_record(&credits_page("T", row), "tt1", 10),
            Err(ExtractError::MissingHref { index: 0 })
        );
    }

    #[test]
    fn test_bad_row_fails_whole_title() {
        // One malformed row poisons the title even when earlier rows are fine
        let rows = format!(
            "{}{}",
            cast_row("A", "X", "/title/tt1/characters/nm1"),
            concat!(
                r#"<li class="ipc-metadata-list-summary-item sc-2578cde7-0 gSIobG full-credits-page-list-item">"#,
                r#"<span><a class="ipc-link ipc-link--base ipc-link--inherit-color" href="/title/tt1/characters/nm2">C</a></span>"#,
                "</li>"
            ),
        );

        assert_eq!(
            extract_title_record(&credits_page("T", &rows), "tt1", 10),
            Err(ExtractError::MissingActorName { index: 1 })
        );
    }

    #[test]
    fn test_short_href_is_out_of_range() {
        let row = cast_row("A", "X", "/name/nm1");

        assert_eq!(
            extract_title_record(&credits_page("T", row.as_str()), "tt1", 10),
            Err(ExtractError::MissingIdSegment {
                href: "/name/nm1".to_string()
            })
        );
    }

    #[test]
    fn test_unexpected_href_shape_extracts_wrong_value() {
        // Positional split, no shape validation: enough segments of the
        // wrong layout silently yield the wrong id
        let row = cast_row("A", "X", "/search/name/popular/results?x=1");
        let record = extract_title_record(&credits_page("T", row.as_str()), "tt1", 10).unwrap();

        assert_eq!(record.members[0].actor_id, "results?x=1");
    }

    #[test]
    fn test_query_suffix_rides_along_with_id() {
        let row = cast_row("A", "X", "/title/tt1/characters/nm1?ref_=ttfc");
        let record = extract_title_record(&credits_page("T", row.as_str()), "tt1", 10).unwrap();

        assert_eq!(record.members[0].actor_id, "nm1?ref_=ttfc");
    }

    #[test]
    fn test_extract_is_idempotent() {
        let markup = chernobyl_page(4);

        let first = extract_title_record(&markup, "tt7366338", 3).unwrap();
        let second = extract_title_record(&markup, "tt7366338", 3).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_actor_id_from_href_positions() {
        assert_eq!(
            actor_id_from_href("/title/tt7366338/characters/nm0397171"),
            Some("nm0397171".to_string())
        );
        assert_eq!(actor_id_from_href("/name/nm0397171"), None);
        assert_eq!(actor_id_from_href(""), None);
    }
}
