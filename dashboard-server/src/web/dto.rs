//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineMetadata, Location, Station, TravelDirection};
use crate::stations::PairStopIds;

/// A line in the line list.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Short key (e.g., "RL")
    pub key: &'static str,

    /// Short label (e.g., "Red")
    pub short: &'static str,

    /// URL path segment (e.g., "red")
    pub path: &'static str,

    /// Display name (e.g., "Red Line")
    pub name: &'static str,

    /// Hex color
    pub color: &'static str,

    /// Whether station lists need a bus route
    pub requires_sub_route: bool,
}

/// Response for the line list.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Request for a line's stations.
#[derive(Debug, Default, Deserialize)]
pub struct StationsRequest {
    /// Bus route, required on the bus line
    #[serde(rename = "busLine")]
    pub bus_line: Option<String>,
}

/// A station in API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    /// Stable station id (e.g., "place-davis")
    pub station: String,

    /// Display name
    pub stop_name: String,

    /// Position along the line
    pub order: u32,

    /// Branch labels, for branching lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,

    /// Direction 0 stop ids
    pub stops_0: Vec<String>,

    /// Direction 1 stop ids
    pub stops_1: Vec<String>,
}

/// Response for a line's stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Line key
    pub line: Line,

    /// Bus route, echoed for the bus line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus_line: Option<String>,

    pub stations: Vec<StationResult>,
}

/// Request for picker options on one end of a station pair.
#[derive(Debug, Deserialize)]
pub struct StationOptionsRequest {
    /// "from" or "to"
    pub field: String,

    /// Selected origin station id
    pub from: Option<String>,

    /// Selected destination station id
    pub to: Option<String>,

    #[serde(rename = "busLine")]
    pub bus_line: Option<String>,
}

/// Response for picker options.
#[derive(Debug, Serialize)]
pub struct StationOptionsResponse {
    pub field: &'static str,
    pub stations: Vec<StationResult>,
}

/// Request to resolve a station pair.
#[derive(Debug, Deserialize)]
pub struct PairRequest {
    /// Origin station id
    pub from: Option<String>,

    /// Destination station id
    pub to: Option<String>,

    #[serde(rename = "busLine")]
    pub bus_line: Option<String>,
}

/// A resolved station pair.
#[derive(Debug, Serialize)]
pub struct PairResponse {
    /// Stop ids to query at the origin; null until both ends resolve
    pub from_stop_ids: Option<Vec<String>>,

    /// Stop ids to query at the destination; null until both ends resolve
    pub to_stop_ids: Option<Vec<String>>,

    /// Direction of travel, when both ends resolve
    pub direction: Option<TravelDirection>,

    /// Chart caption
    pub location: Location,
}

/// Response for a stop-id lookup.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub station: StationResult,
}

/// Request for headway widget data.
#[derive(Debug, Default, Deserialize)]
pub struct HeadwaysRequest {
    /// Service date (defaults to the current service date)
    pub date: Option<String>,

    #[serde(rename = "busLine")]
    pub bus_line: Option<String>,

    /// "1" on narrow viewports, hides the chart legend
    pub narrow: Option<String>,
}

impl HeadwaysRequest {
    pub fn is_narrow(&self) -> bool {
        is_truthy(self.narrow.as_deref())
    }
}

/// Request to change the date range of the current page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateUpdateRequest {
    pub start_date: Option<String>,

    pub end_date: Option<String>,

    /// Range mode; form checkboxes send "on"
    pub range: Option<String>,

    /// Query string of the page the update was made on
    pub current: Option<String>,
}

impl DateUpdateRequest {
    pub fn is_range(&self) -> bool {
        is_truthy(self.range.as_deref())
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Form-style boolean flag: "1", "true" or "on".
pub(super) fn is_truthy(flag: Option<&str>) -> bool {
    matches!(flag, Some("1" | "true" | "on"))
}

// Conversion implementations

impl From<&LineMetadata> for LineResult {
    fn from(meta: &LineMetadata) -> Self {
        Self {
            key: meta.key,
            short: meta.short,
            path: meta.path,
            name: meta.name,
            color: meta.color,
            requires_sub_route: meta.requires_sub_route,
        }
    }
}

impl From<&Station> for StationResult {
    fn from(station: &Station) -> Self {
        Self {
            station: station.station.clone(),
            stop_name: station.stop_name.clone(),
            order: station.order,
            branches: station.branches.clone(),
            stops_0: station.stops.zero.clone(),
            stops_1: station.stops.one.clone(),
        }
    }
}

impl PairResponse {
    /// Assemble from a resolved pair.
    pub fn new(
        ids: PairStopIds<'_>,
        direction: Option<TravelDirection>,
        location: Location,
    ) -> Self {
        Self {
            from_stop_ids: ids.from_stop_ids.map(<[String]>::to_vec),
            to_stop_ids: ids.to_stop_ids.map(<[String]>::to_vec),
            direction,
            location,
        }
    }
}
