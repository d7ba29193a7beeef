//! Station reference records and travel direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two physical travel directions at a station.
///
/// The upstream data source keys per-direction stop ids by `"0"` and `"1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionFlag {
    Zero,
    One,
}

impl DirectionFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionFlag::Zero => "0",
            DirectionFlag::One => "1",
        }
    }
}

/// Per-direction stop identifiers for a station.
///
/// Either side may be missing in the reference data; a missing side is an
/// empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalStops {
    #[serde(rename = "0", default)]
    pub zero: Vec<String>,
    #[serde(rename = "1", default)]
    pub one: Vec<String>,
}

impl DirectionalStops {
    /// Stop ids serving the given direction.
    pub fn get(&self, flag: DirectionFlag) -> &[String] {
        match flag {
            DirectionFlag::Zero => &self.zero,
            DirectionFlag::One => &self.one,
        }
    }

    /// Whether either direction contains `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.zero.iter().chain(self.one.iter()).any(|s| s == id)
    }
}

/// A station on a line.
///
/// Stations are immutable reference data. Within one line, `order` is
/// unique and is the only thing used to compare relative position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Stable identifier, e.g. "place-davis".
    pub station: String,
    /// Display name.
    pub stop_name: String,
    /// Position along the line.
    pub order: u32,
    /// Branches this station is on, if the line branches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    /// Upstream stop ids, keyed by direction.
    #[serde(default)]
    pub stops: DirectionalStops,
}

impl Station {
    /// Whether this station shares at least one branch with `other`.
    ///
    /// Returns `None` when either station declares no branches (absent or
    /// empty), in which case no branch constraint applies.
    pub fn shares_branch_with(&self, other: &Station) -> Option<bool> {
        let ours = self.declared_branches()?;
        let theirs = other.declared_branches()?;
        Some(ours.iter().any(|b| theirs.contains(b)))
    }

    fn declared_branches(&self) -> Option<&[String]> {
        self.branches.as_deref().filter(|b| !b.is_empty())
    }
}

/// Direction of travel between two stations on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelDirection {
    Northbound,
    Southbound,
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelDirection::Northbound => f.write_str("northbound"),
            TravelDirection::Southbound => f.write_str("southbound"),
        }
    }
}

/// Display-ready description of a station pair, used for chart captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub from: String,
    pub to: String,
    pub direction: TravelDirection,
    pub line: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, order: u32, branches: Option<&[&str]>) -> Station {
        Station {
            station: id.into(),
            stop_name: id.into(),
            order,
            branches: branches.map(|b| b.iter().map(|s| s.to_string()).collect()),
            stops: DirectionalStops::default(),
        }
    }

    #[test]
    fn deserialize_with_missing_direction() {
        let json = r#"{
            "station": "place-alfcl",
            "stop_name": "Alewife",
            "order": 1,
            "stops": { "0": ["70061"] }
        }"#;
        let s: Station = serde_json::from_str(json).unwrap();
        assert_eq!(s.stop_name, "Alewife");
        assert_eq!(s.stops.get(DirectionFlag::Zero), ["70061".to_string()]);
        assert!(s.stops.get(DirectionFlag::One).is_empty());
        assert!(s.branches.is_none());
    }

    #[test]
    fn stops_contains_either_direction() {
        let stops = DirectionalStops {
            zero: vec!["a".into()],
            one: vec!["b".into()],
        };
        assert!(stops.contains("a"));
        assert!(stops.contains("b"));
        assert!(!stops.contains("c"));
    }

    #[test]
    fn shared_branches() {
        let a = station("a", 1, Some(&["A", "B"]));
        let b = station("b", 2, Some(&["B"]));
        let c = station("c", 3, Some(&["C"]));
        let d = station("d", 4, None);
        let e = station("e", 5, Some(&[]));

        assert_eq!(a.shares_branch_with(&b), Some(true));
        assert_eq!(a.shares_branch_with(&c), Some(false));
        assert_eq!(a.shares_branch_with(&d), None);
        assert_eq!(d.shares_branch_with(&a), None);
        assert_eq!(e.shares_branch_with(&a), None);
        assert_eq!(a.shares_branch_with(&e), None);
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TravelDirection::Southbound).unwrap(),
            "\"southbound\""
        );
        assert_eq!(TravelDirection::Northbound.to_string(), "northbound");
    }

    #[test]
    fn direction_flag_keys() {
        assert_eq!(DirectionFlag::Zero.as_str(), "0");
        assert_eq!(DirectionFlag::One.as_str(), "1");
    }
}
