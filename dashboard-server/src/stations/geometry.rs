//! Direction and stop-id resolution for a pair of stations.

use crate::domain::{DirectionFlag, Location, Station, TravelDirection};

/// Placeholder shown for a station that hasn't resolved yet.
pub const LOADING_TEXT: &str = "Loading...";

/// Upstream stop ids for the two ends of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairStopIds<'a> {
    pub from_stop_ids: Option<&'a [String]>,
    pub to_stop_ids: Option<&'a [String]>,
}

impl PairStopIds<'_> {
    /// Whether both ends resolved.
    pub fn is_complete(&self) -> bool {
        self.from_stop_ids.is_some() && self.to_stop_ids.is_some()
    }
}

/// Direction of travel from `from` to `to`.
///
/// Travelling towards higher `order` is southbound. Equal order (the same
/// station on both ends) is northbound.
pub fn travel_direction(from: &Station, to: &Station) -> TravelDirection {
    if from.order < to.order {
        TravelDirection::Southbound
    } else {
        TravelDirection::Northbound
    }
}

/// The direction flag whose stop ids serve a trip from `from` to `to`.
///
/// One flag is shared by both stations: southbound trips board and alight
/// at direction-1 platforms, northbound trips at direction-0 platforms.
pub fn direction_flag(from: &Station, to: &Station) -> DirectionFlag {
    match travel_direction(from, to) {
        TravelDirection::Southbound => DirectionFlag::One,
        TravelDirection::Northbound => DirectionFlag::Zero,
    }
}

/// Stop ids to query for a trip between two stations.
///
/// Both ends are `None` unless both stations are present.
pub fn stop_ids_for_stations<'a>(
    from: Option<&'a Station>,
    to: Option<&'a Station>,
) -> PairStopIds<'a> {
    let (Some(from), Some(to)) = (from, to) else {
        return PairStopIds::default();
    };

    let flag = direction_flag(from, to);
    PairStopIds {
        from_stop_ids: Some(from.stops.get(flag)),
        to_stop_ids: Some(to.stops.get(flag)),
    }
}

/// Caption for a chart of a station pair.
///
/// While either station is missing the missing side reads
/// [`LOADING_TEXT`] and the direction is southbound.
pub fn location_details(
    from: Option<&Station>,
    to: Option<&Station>,
    line_short: &'static str,
) -> Location {
    match (from, to) {
        (Some(from), Some(to)) => Location {
            from: from.stop_name.clone(),
            to: to.stop_name.clone(),
            direction: travel_direction(from, to),
            line: line_short,
        },
        _ => Location {
            from: from.map_or(LOADING_TEXT, |s| s.stop_name.as_str()).to_string(),
            to: to.map_or(LOADING_TEXT, |s| s.stop_name.as_str()).to_string(),
            direction: TravelDirection::Southbound,
            line: line_short,
        },
    }
}
