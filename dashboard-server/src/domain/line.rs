//! Transit line identifiers.

use std::fmt;

use serde::{Serialize, Serializer};

/// Static description of a line.
///
/// Every representation of a line the dashboard needs (URL segment, short
/// label, data key) lives here, so there is exactly one record per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineMetadata {
    /// Data key, e.g. "RL".
    pub key: &'static str,
    /// Short label, e.g. "Red". Also the key into the reference tables.
    pub short: &'static str,
    /// URL path segment, e.g. "red".
    pub path: &'static str,
    /// Display name, e.g. "Red Line".
    pub name: &'static str,
    /// Line colour as a CSS hex string.
    pub color: &'static str,
    /// Whether a sub-route (bus route number) is needed to list stations.
    pub requires_sub_route: bool,
}

/// A transit line.
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::Line;
///
/// let line = Line::from_path("orange").unwrap();
/// assert_eq!(line, Line::Orange);
/// assert_eq!(line.metadata().key, "OL");
///
/// // Unknown segments are absent, not errors
/// assert!(Line::from_path("purple").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    Red,
    Orange,
    Green,
    Blue,
    Bus,
}

const RED: LineMetadata = LineMetadata {
    key: "RL",
    short: "Red",
    path: "red",
    name: "Red Line",
    color: "#d13434",
    requires_sub_route: false,
};

const ORANGE: LineMetadata = LineMetadata {
    key: "OL",
    short: "Orange",
    path: "orange",
    name: "Orange Line",
    color: "#e66f00",
    requires_sub_route: false,
};

const GREEN: LineMetadata = LineMetadata {
    key: "GL",
    short: "Green",
    path: "green",
    name: "Green Line",
    color: "#159765",
    requires_sub_route: false,
};

const BLUE: LineMetadata = LineMetadata {
    key: "BL",
    short: "Blue",
    path: "blue",
    name: "Blue Line",
    color: "#0e3d8c",
    requires_sub_route: false,
};

const BUS: LineMetadata = LineMetadata {
    key: "BUS",
    short: "Bus",
    path: "bus",
    name: "Bus",
    color: "#ffc72c",
    requires_sub_route: true,
};

impl Line {
    /// All lines in menu order.
    pub const ALL: [Line; 5] = [Line::Red, Line::Orange, Line::Green, Line::Blue, Line::Bus];

    /// The static record for this line.
    pub fn metadata(self) -> &'static LineMetadata {
        match self {
            Line::Red => &RED,
            Line::Orange => &ORANGE,
            Line::Green => &GREEN,
            Line::Blue => &BLUE,
            Line::Bus => &BUS,
        }
    }

    /// Look up a line by its URL path segment ("red", "bus", ...).
    pub fn from_path(segment: &str) -> Option<Line> {
        Line::ALL.into_iter().find(|l| l.metadata().path == segment)
    }

    /// Look up a line by its data key ("RL", "BUS", ...).
    pub fn from_key(key: &str) -> Option<Line> {
        Line::ALL.into_iter().find(|l| l.metadata().key == key)
    }

    /// Look up a line by its short label ("Red", "Bus", ...).
    pub fn from_short(short: &str) -> Option<Line> {
        Line::ALL.into_iter().find(|l| l.metadata().short == short)
    }

    pub fn key(self) -> &'static str {
        self.metadata().key
    }

    pub fn short(self) -> &'static str {
        self.metadata().short
    }

    pub fn path(self) -> &'static str {
        self.metadata().path
    }

    pub fn requires_sub_route(self) -> bool {
        self.metadata().requires_sub_route
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metadata().name)
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_lookup() {
        assert_eq!(Line::from_path("red"), Some(Line::Red));
        assert_eq!(Line::from_path("orange"), Some(Line::Orange));
        assert_eq!(Line::from_path("green"), Some(Line::Green));
        assert_eq!(Line::from_path("blue"), Some(Line::Blue));
        assert_eq!(Line::from_path("bus"), Some(Line::Bus));
    }

    #[test]
    fn unknown_path_is_none() {
        assert_eq!(Line::from_path(""), None);
        assert_eq!(Line::from_path("Red"), None);
        assert_eq!(Line::from_path("silver"), None);
    }

    #[test]
    fn key_and_short_lookup() {
        assert_eq!(Line::from_key("RL"), Some(Line::Red));
        assert_eq!(Line::from_key("BUS"), Some(Line::Bus));
        assert_eq!(Line::from_key("rl"), None);
        assert_eq!(Line::from_short("Green"), Some(Line::Green));
        assert_eq!(Line::from_short("green"), None);
    }

    #[test]
    fn representations_roundtrip() {
        for line in Line::ALL {
            assert_eq!(Line::from_path(line.path()), Some(line));
            assert_eq!(Line::from_key(line.key()), Some(line));
            assert_eq!(Line::from_short(line.short()), Some(line));
        }
    }

    #[test]
    fn only_bus_needs_sub_route() {
        let needing: Vec<_> = Line::ALL
            .into_iter()
            .filter(|l| l.requires_sub_route())
            .collect();
        assert_eq!(needing, vec![Line::Bus]);
    }

    #[test]
    fn display_and_serialize() {
        assert_eq!(Line::Blue.to_string(), "Blue Line");
        assert_eq!(serde_json::to_string(&Line::Orange).unwrap(), "\"OL\"");
    }
}
