//! Application state for the web layer.

use std::sync::Arc;

use crate::data::HeadwaySource;
use crate::stations::ReferenceTables;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station reference tables, loaded once at startup
    pub tables: Arc<ReferenceTables>,

    /// Headway series provider (live API or fixtures)
    pub headways: HeadwaySource,
}

impl AppState {
    /// Create a new app state.
    pub fn new(tables: ReferenceTables, headways: HeadwaySource) -> Self {
        Self {
            tables: Arc::new(tables),
            headways,
        }
    }
}
