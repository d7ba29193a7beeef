//! Current-view resolution from a URL.

use serde::Serialize;

use crate::domain::{DataPage, Line};

use super::query::{QueryParams, RawQuery};

/// Bus route assumed when the URL names none.
///
/// Provisional: bus pages currently need some route to show anything.
/// Resolver logic only reads this constant, so dropping the default is a
/// one-line change.
pub const DEFAULT_BUS_ROUTE: &str = "22";

/// Where the user currently is, as derived from the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteState {
    /// The line, when the first path segment names a known one.
    pub line: Option<Line>,
    /// The first path segment as given.
    pub line_path: String,
    /// The sub-page. `Some(Overview)` when the URL has no sub-page segment,
    /// `None` when it has one that isn't a known page.
    pub datapage: Option<DataPage>,
    /// Recognized query parameters.
    pub query: QueryParams,
}

impl RouteState {
    /// Short label of the current line ("Red", "Bus", ...).
    pub fn line_short(&self) -> Option<&'static str> {
        self.line.map(Line::short)
    }

    /// Resolve a full request target such as `/red/headways?startDate=2024-01-01`.
    pub fn from_target(target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        resolve_route(path, &RawQuery::parse(query))
    }
}

/// Derive the current view from a path and its query.
///
/// Never fails: an unknown line leaves `line` empty and an unknown
/// sub-page leaves `datapage` empty. Repeated query keys collapse to their
/// first value, and a missing `busLine` falls back to
/// [`DEFAULT_BUS_ROUTE`].
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::{DataPage, Line};
/// use dashboard_server::router::{RawQuery, resolve_route};
///
/// let route = resolve_route("/orange/headways", &RawQuery::parse("startDate=2024-01-01"));
/// assert_eq!(route.line, Some(Line::Orange));
/// assert_eq!(route.datapage, Some(DataPage::Headways));
/// assert_eq!(route.query.start_date.as_deref(), Some("2024-01-01"));
/// ```
pub fn resolve_route(path: &str, query: &RawQuery) -> RouteState {
    let mut segments = path.split('/').skip(1);
    let line_path = segments.next().unwrap_or_default();
    let page_segment = segments.next().unwrap_or_default();

    let datapage = if page_segment.is_empty() {
        Some(DataPage::Overview)
    } else {
        DataPage::from_segment(page_segment)
    };

    let mut params = QueryParams::from_raw(query);
    if params.bus_line.is_none() {
        params.bus_line = Some(DEFAULT_BUS_ROUTE.to_string());
    }

    RouteState {
        line: Line::from_path(line_path),
        line_path: line_path.to_string(),
        datapage,
        query: params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str, query: &str) -> RouteState {
        resolve_route(path, &RawQuery::parse(query))
    }

    #[test]
    fn known_lines() {
        for line in Line::ALL {
            let r = route(&format!("/{}", line.path()), "");
            assert_eq!(r.line, Some(line));
            assert_eq!(r.line_short(), Some(line.short()));
        }
    }

    #[test]
    fn unknown_line_is_absent() {
        let r = route("/purple/headways", "");
        assert_eq!(r.line, None);
        assert_eq!(r.line_path, "purple");
        assert_eq!(r.line_short(), None);
        assert_eq!(r.datapage, Some(DataPage::Headways));
    }

    #[test]
    fn root_path() {
        let r = route("/", "");
        assert_eq!(r.line, None);
        assert_eq!(r.line_path, "");
        assert_eq!(r.datapage, Some(DataPage::Overview));

        let r = route("", "");
        assert_eq!(r.line, None);
    }

    #[test]
    fn missing_or_empty_subpage_is_overview() {
        assert_eq!(route("/red", "").datapage, Some(DataPage::Overview));
        assert_eq!(route("/red/", "").datapage, Some(DataPage::Overview));
    }

    #[test]
    fn unknown_subpage_is_absent() {
        assert_eq!(route("/red/nonsense", "").datapage, None);
    }

    #[test]
    fn extra_segments_ignored() {
        let r = route("/green/traveltimes/extra", "");
        assert_eq!(r.line, Some(Line::Green));
        assert_eq!(r.datapage, Some(DataPage::TravelTimes));
    }

    #[test]
    fn repeated_query_values_collapse() {
        let r = route("/red", "startDate=2023-01-01&startDate=2023-05-05&endDate=2023-01-09");
        assert_eq!(r.query.start_date.as_deref(), Some("2023-01-01"));
        assert_eq!(r.query.end_date.as_deref(), Some("2023-01-09"));
    }

    #[test]
    fn bus_line_default() {
        assert_eq!(route("/bus", "").query.bus_line.as_deref(), Some(DEFAULT_BUS_ROUTE));
        assert_eq!(route("/bus", "busLine=1").query.bus_line.as_deref(), Some("1"));
    }

    #[test]
    fn from_target_splits_query() {
        let r = RouteState::from_target("/blue/headways?startDate=2024-02-02&busLine=1");
        assert_eq!(r.line, Some(Line::Blue));
        assert_eq!(r.datapage, Some(DataPage::Headways));
        assert_eq!(r.query.start_date.as_deref(), Some("2024-02-02"));
        assert_eq!(r.query.bus_line.as_deref(), Some("1"));
    }
}
