//! Dashboard sub-pages.

use std::fmt;

use serde::{Serialize, Serializer};

/// A sub-page of a line's dashboard.
///
/// `Overview` is the landing page of a line and has no path segment of its
/// own: `/red` is the Red Line overview, `/red/headways` its headways page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataPage {
    #[default]
    Overview,
    Trips,
    Headways,
    TravelTimes,
    Dwells,
    Speed,
    Ridership,
    SlowZones,
    Service,
}

impl DataPage {
    pub const ALL: [DataPage; 9] = [
        DataPage::Overview,
        DataPage::Trips,
        DataPage::Headways,
        DataPage::TravelTimes,
        DataPage::Dwells,
        DataPage::Speed,
        DataPage::Ridership,
        DataPage::SlowZones,
        DataPage::Service,
    ];

    /// The URL segment for this page.
    pub fn segment(self) -> &'static str {
        match self {
            DataPage::Overview => "overview",
            DataPage::Trips => "trips",
            DataPage::Headways => "headways",
            DataPage::TravelTimes => "traveltimes",
            DataPage::Dwells => "dwells",
            DataPage::Speed => "speed",
            DataPage::Ridership => "ridership",
            DataPage::SlowZones => "slowzones",
            DataPage::Service => "service",
        }
    }

    /// Parse a URL segment. Returns `None` for unknown segments.
    pub fn from_segment(segment: &str) -> Option<DataPage> {
        DataPage::ALL.into_iter().find(|p| p.segment() == segment)
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            DataPage::Overview => "Overview",
            DataPage::Trips => "Trips",
            DataPage::Headways => "Headways",
            DataPage::TravelTimes => "Travel Times",
            DataPage::Dwells => "Dwells",
            DataPage::Speed => "Speed",
            DataPage::Ridership => "Ridership",
            DataPage::SlowZones => "Slow Zones",
            DataPage::Service => "Service",
        }
    }
}

impl fmt::Display for DataPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl Serialize for DataPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_overview() {
        assert_eq!(DataPage::default(), DataPage::Overview);
    }

    #[test]
    fn segment_roundtrip() {
        for page in DataPage::ALL {
            assert_eq!(DataPage::from_segment(page.segment()), Some(page));
        }
    }

    #[test]
    fn unknown_segment() {
        assert_eq!(DataPage::from_segment(""), None);
        assert_eq!(DataPage::from_segment("Headways"), None);
        assert_eq!(DataPage::from_segment("nonsense"), None);
    }
}
