//! Value types produced by the extraction pipeline
//!
//! Records are built once during extraction and never mutated afterwards;
//! they live only for the duration of one run.

/// One cast credit: an actor, the character they play, and the actor's
/// catalog identifier as embedded in the credits markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMember {
    /// Actor display name
    pub actor_name: String,

    /// Character display name
    pub character_name: String,

    /// Catalog identifier of the actor, e.g. "nm0397171"
    pub actor_id: String,
}

impl CastMember {
    pub fn new(actor_name: String, character_name: String, actor_id: String) -> Self {
        Self {
            actor_name,
            character_name,
            actor_id,
        }
    }
}

/// The extracted cast list for one title
///
/// `title_name` is resolved from the markup and may differ from the
/// configured label; `catalog_id` is the externally supplied identifier.
/// `members` holds at most the configured actor limit, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    /// Title name as rendered on the credits page
    pub title_name: String,

    /// Catalog identifier the page was requested under, e.g. "tt7366338"
    pub catalog_id: String,

    /// Cast members in document order, capped at the actor limit
    pub members: Vec<CastMember>,
}

impl TitleRecord {
    pub fn new(title_name: String, catalog_id: String, members: Vec<CastMember>) -> Self {
        Self {
            title_name,
            catalog_id,
            members,
        }
    }
}
