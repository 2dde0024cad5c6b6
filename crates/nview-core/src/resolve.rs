//! Display name → catalog identifiers.
//!
//! Every scan walks the catalog in array order and stops at the first hit, so
//! duplicate names or multiply-listed performers resolve deterministically.

use crate::catalog::{Catalog, Group};
use crate::locale::display_name;
use crate::ResolveError;

/// Group id used when no group lists the performer.
pub const INDIE_GROUP_ID: &str = "indie";

/// Catch-all group id the API uses for unaffiliated performers.
const OTHERS_GROUP_ID: &str = "others";

/// Label shown for performers without a group.
pub const INDIE_LABEL: &str = "Indie";

/// Catalog identifiers behind one display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub performer_id: String,
    /// Owned channel ids in catalog order. Never empty.
    pub channel_ids: Vec<String>,
    /// Owning group id, or [`INDIE_GROUP_ID`].
    pub group_id: String,
}

impl ResolvedIdentity {
    #[must_use]
    pub fn is_indie(&self) -> bool {
        self.group_id == INDIE_GROUP_ID
    }
}

/// Resolves a display name to its performer, channels, and group.
///
/// # Errors
///
/// - [`ResolveError::PerformerNotFound`] if no performer's display name
///   equals `name` exactly, or the first match has no id.
/// - [`ResolveError::ChannelNotFound`] if the performer owns no channels.
pub fn resolve(name: &str, catalog: &Catalog) -> Result<ResolvedIdentity, ResolveError> {
    let performer = catalog
        .performers
        .iter()
        .find(|p| display_name(*p) == name)
        .filter(|p| !p.id.is_empty())
        .ok_or_else(|| ResolveError::PerformerNotFound {
            name: name.to_string(),
        })?;
    let performer_id = performer.id.as_str();

    let channel_ids: Vec<String> = catalog
        .channels
        .iter()
        .filter(|c| c.owner_id.as_deref() == Some(performer_id))
        .map(|c| c.id.clone())
        .collect();
    if channel_ids.is_empty() {
        return Err(ResolveError::ChannelNotFound {
            name: name.to_string(),
        });
    }

    let group_id = match catalog
        .groups
        .iter()
        .find(|g| g.lists_performer(performer_id))
    {
        Some(group) => group.id.clone(),
        None => {
            tracing::info!(performer = performer_id, "no group lists performer, treating as indie");
            INDIE_GROUP_ID.to_string()
        }
    };

    tracing::debug!(
        performer = performer_id,
        channels = channel_ids.len(),
        group = %group_id,
        "resolved identity"
    );

    Ok(ResolvedIdentity {
        performer_id: performer_id.to_string(),
        channel_ids,
        group_id,
    })
}

/// Returns the affiliation label for a group id.
///
/// The catch-all `others` group, the indie sentinel, and ids missing from the
/// catalog all map to [`INDIE_LABEL`].
#[must_use]
pub fn affiliation(catalog: &Catalog, group_id: &str) -> String {
    if group_id == OTHERS_GROUP_ID || group_id == INDIE_GROUP_ID {
        return INDIE_LABEL.to_string();
    }
    catalog
        .groups
        .iter()
        .find(|g| g.id == group_id)
        .map_or_else(|| INDIE_LABEL.to_string(), |g: &Group| display_name(g).to_string())
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
