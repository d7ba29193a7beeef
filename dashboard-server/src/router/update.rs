//! Date-range changes to the current query.
//!
//! A date picker reports partial changes. They are normalized, merged into
//! the full query and handed to the navigation layer, but only when the
//! result actually differs from where the user already is: repeated picker
//! events must not pile up history entries or refetch data.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::offset_date;

use super::query::{END_DATE, START_DATE, encode_pairs};

/// Full query bag of the current location, including route parameters.
pub type QueryBag = BTreeMap<String, String>;

/// Route parameter that must be present for a navigation to happen.
pub const LINE_PARAM: &str = "line";

/// Keys of the query bag carried in the path rather than the query string.
const ROUTE_PARAMS: [&str; 1] = [LINE_PARAM];

/// A partial date-range change as reported by a date picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeUpdate {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// The navigation layer.
pub trait Navigator {
    /// Move to `path` with `query`. Every value in `query` is defined.
    fn navigate(&mut self, path: &str, query: &QueryBag);
}

/// Applies date-range changes in single-date or range mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryUpdater {
    range: bool,
}

impl QueryUpdater {
    /// `range` enables the end date; in single-date mode any end date is
    /// dropped from the query.
    pub fn new(range: bool) -> Self {
        Self { range }
    }

    pub fn is_range(&self) -> bool {
        self.range
    }

    /// The query that `update` leads to, or `None` if no navigation is
    /// warranted.
    ///
    /// No-op when there is no update, when the start date is missing or
    /// not a recognizable date, when the result equals `current`, or when
    /// the result has no line.
    pub fn updated_query(
        &self,
        current: &QueryBag,
        update: Option<&DateRangeUpdate>,
    ) -> Option<QueryBag> {
        let update = update?;
        let start_date = offset_date(update.start_date.as_deref()?)?;

        let mut merged: BTreeMap<String, Option<String>> = current
            .iter()
            .map(|(k, v)| (k.clone(), Some(v.clone())))
            .collect();

        merged.insert(START_DATE.to_string(), Some(start_date));
        if self.range {
            if let Some(end_date) = update.end_date.as_deref().and_then(offset_date) {
                merged.insert(END_DATE.to_string(), Some(end_date));
            }
        } else {
            merged.insert(END_DATE.to_string(), None);
        }

        if !matches!(merged.get(LINE_PARAM), Some(Some(_))) {
            return None;
        }

        let next: QueryBag = merged
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();

        (next != *current).then_some(next)
    }

    /// Apply `update` and navigate if the query changed.
    ///
    /// Returns whether a navigation happened. At most one navigation per
    /// call.
    pub fn update_query<N: Navigator>(
        &self,
        navigator: &mut N,
        path: &str,
        current: &QueryBag,
        update: Option<&DateRangeUpdate>,
    ) -> bool {
        match self.updated_query(current, update) {
            Some(query) => {
                debug!(path, ?query, "navigating to updated query");
                navigator.navigate(path, &query);
                true
            }
            None => {
                debug!(path, ?update, "date update is a no-op");
                false
            }
        }
    }
}

/// The URL for a navigation: route parameters are part of `path` and are
/// left out of the query string.
pub fn navigation_href(path: &str, query: &QueryBag) -> String {
    let query_string = encode_pairs(
        query
            .iter()
            .filter(|(k, _)| !ROUTE_PARAMS.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query_string}")
    }
}
