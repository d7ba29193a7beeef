//! Mock data client for development without API access.
//!
//! Loads headway series from JSON files and serves them as if they were
//! live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::HeadwayRecord;

use super::client::SingleDayParams;
use super::error::DataError;

/// Mock data client that serves headways from JSON files.
#[derive(Clone)]
pub struct MockDataClient {
    /// Pre-loaded headway series, keyed by origin stop id.
    headways: Arc<RwLock<HashMap<String, Vec<HeadwayRecord>>>>,
}

impl MockDataClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{stop_id}.json` (e.g., `70067.json`), each a
    /// JSON array of headway records.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let data_dir = data_dir.as_ref();
        let mut headways = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|source| DataError::Io {
            message: format!("Failed to read mock data directory {:?}", data_dir),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DataError::Io {
                message: format!("Failed to read entry in {:?}", data_dir),
                source,
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(stop_id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let stop_id = stop_id.to_string();

            let json = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
                message: format!("Failed to read {:?}", path),
                source,
            })?;

            let series: Vec<HeadwayRecord> =
                serde_json::from_str(&json).map_err(|e| DataError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            headways.insert(stop_id, series);
        }

        if headways.is_empty() {
            return Err(DataError::NoData(format!(
                "no mock headway files in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            headways: Arc::new(RwLock::new(headways)),
        })
    }

    /// Get headways for a station pair.
    ///
    /// Mimics `DataClient::get_headways`. The series is chosen by the first
    /// origin stop id that has a file; destination and date are ignored.
    pub async fn get_headways(
        &self,
        params: &SingleDayParams,
    ) -> Result<Vec<HeadwayRecord>, DataError> {
        let headways = self.headways.read().await;

        params
            .from_stops
            .iter()
            .find_map(|stop| headways.get(stop))
            .cloned()
            .ok_or_else(|| DataError::NoData(format!("stops {:?}", params.from_stops)))
    }

    /// Stop ids with mock data.
    pub async fn available_stops(&self) -> Vec<String> {
        let headways = self.headways.read().await;
        let mut stops: Vec<_> = headways.keys().cloned().collect();
        stops.sort();
        stops
    }
}
