//! Metrics data API.
//!
//! The dashboard never computes metrics itself; it asks the data API for a
//! series between two sets of stop ids on a service date. The live client
//! talks HTTP; the mock client serves JSON fixtures for development.

mod client;
mod error;
mod mock;

pub use client::{DataClient, DataConfig, SingleDayParams};
pub use error::DataError;
pub use mock::MockDataClient;

use std::sync::Arc;

use crate::cache::CachedDataClient;
use crate::domain::HeadwayRecord;

/// Where headway series come from.
#[derive(Clone)]
pub enum HeadwaySource {
    /// The live data API, behind a response cache.
    Live(Arc<CachedDataClient>),
    /// JSON fixtures on disk.
    Mock(MockDataClient),
}

impl HeadwaySource {
    /// Get headways for a station pair on one service date.
    pub async fn get_headways(
        &self,
        params: &SingleDayParams,
    ) -> Result<Arc<Vec<HeadwayRecord>>, DataError> {
        match self {
            HeadwaySource::Live(client) => client.get_headways(params).await,
            HeadwaySource::Mock(client) => client.get_headways(params).await.map(Arc::new),
        }
    }
}
