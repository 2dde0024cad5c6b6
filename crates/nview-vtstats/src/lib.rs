pub mod client;
pub mod error;
pub mod pipeline;

pub use client::VtStatsClient;
pub use error::VtStatsError;
pub use pipeline::{aggregate, assemble, fetch_profile};
