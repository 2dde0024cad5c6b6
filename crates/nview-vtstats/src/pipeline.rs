//! Profile pipeline orchestration.
//!
//! Stages run strictly in sequence: aggregation needs the channel ids that
//! resolution produces, so nothing here can be issued concurrently.

use nview_core::{affiliation, resolve, Catalog, Profile, ViewerMetrics};

use crate::client::VtStatsClient;
use crate::error::VtStatsError;

/// Fetches ended streams for `channel_ids` and computes CCV and NView.
///
/// An empty id list short-circuits to zero metrics without a request.
///
/// # Errors
///
/// Returns [`VtStatsError::Http`] or [`VtStatsError::Deserialize`] from the
/// ended-streams request.
pub async fn aggregate(
    client: &VtStatsClient,
    channel_ids: &[String],
) -> Result<ViewerMetrics, VtStatsError> {
    if channel_ids.is_empty() {
        tracing::debug!("no channel ids, skipping ended-streams request");
        return Ok(ViewerMetrics::default());
    }

    let records = client.fetch_ended_streams(channel_ids).await?;
    let metrics = ViewerMetrics::from_records(&records);
    tracing::debug!(
        streams = records.len(),
        ccv = metrics.ccv,
        n_view = metrics.n_view,
        "aggregated viewer metrics"
    );
    Ok(metrics)
}

/// Builds a [`Profile`] for `name` from an already-fetched catalog.
///
/// 1. Resolve the name to performer, channels, and group.
/// 2. Look up the affiliation label.
/// 3. Aggregate viewer metrics over the channels.
///
/// Any failure aborts; no partial profile is returned.
///
/// # Errors
///
/// Returns [`VtStatsError::Resolve`] when the name or its channels cannot be
/// found, or the errors of [`aggregate`].
pub async fn assemble(
    client: &VtStatsClient,
    name: &str,
    catalog: &Catalog,
) -> Result<Profile, VtStatsError> {
    let identity = resolve(name, catalog)?;
    let affiliation = affiliation(catalog, &identity.group_id);
    let metrics = aggregate(client, &identity.channel_ids).await?;
    Ok(Profile::new(name, affiliation, identity, metrics))
}

/// Fetches the catalog, then assembles the profile for `name`.
///
/// # Errors
///
/// Returns the first error from [`VtStatsClient::fetch_catalog`] or
/// [`assemble`].
pub async fn fetch_profile(client: &VtStatsClient, name: &str) -> Result<Profile, VtStatsError> {
    tracing::info!("fetching catalog");
    let catalog = client.fetch_catalog().await?;
    tracing::info!("catalog fetched");
    assemble(client, name, &catalog).await
}
