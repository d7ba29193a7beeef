//! Station reference tables.
//!
//! Two read-only tables back every station lookup:
//! - the ordering table: per line (and per bus route) station lists,
//!   sorted by `order` once at load time
//! - the directional table: per line, stations whose per-direction stop ids
//!   are scanned to resolve an upstream stop id back to a station
//!
//! Tables are loaded once at startup and passed by reference. Tests build
//! their own fixture tables with [`ReferenceTables::from_json`].

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Line, Station};

use super::error::StationError;

/// Tables shipped with the server.
const BUNDLED_TABLES: &str = include_str!("../../data/stations.json");

/// A list of stations, as stored in the tables file.
#[derive(Debug, Deserialize)]
struct StationList {
    stations: Vec<Station>,
}

/// On-disk shape of the tables file.
///
/// `stations` is keyed by line short label ("Red", ...), `bus` by route
/// id ("22", ...). `rt_stations` is optional; when absent the directional
/// table is the ordering table of each non-bus line.
#[derive(Debug, Deserialize)]
struct TablesFile {
    stations: HashMap<String, StationList>,
    #[serde(default)]
    bus: HashMap<String, StationList>,
    #[serde(default)]
    rt_stations: Option<HashMap<String, StationList>>,
}

/// Immutable station reference data.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    lines: HashMap<Line, Vec<Station>>,
    bus_routes: BTreeMap<String, Vec<Station>>,
    directional: HashMap<Line, Vec<Station>>,
}

impl ReferenceTables {
    /// Parse tables from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let file: TablesFile = serde_json::from_str(json).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

        let mut lines = HashMap::new();
        for (label, list) in file.stations {
            let line = parse_line(&label)?;
            if line.requires_sub_route() {
                return Err(StationError::SubRouteRequired(label));
            }
            lines.insert(line, sorted(label, list.stations)?);
        }

        let mut bus_routes = BTreeMap::new();
        for (route, list) in file.bus {
            let label = format!("bus route {route}");
            bus_routes.insert(route, sorted(label, list.stations)?);
        }

        let directional = match file.rt_stations {
            Some(rt) => {
                let mut directional = HashMap::new();
                for (label, list) in rt {
                    let line = parse_line(&label)?;
                    if line.requires_sub_route() {
                        return Err(StationError::SubRouteRequired(label));
                    }
                    directional.insert(line, list.stations);
                }
                directional
            }
            None => lines.clone(),
        };

        Ok(Self {
            lines,
            bus_routes,
            directional,
        })
    }

    /// Load tables from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The tables compiled into the binary.
    pub fn bundled() -> Result<Self, StationError> {
        Self::from_json(BUNDLED_TABLES)
    }

    /// Ordered stations of a line without sub-routes.
    pub fn line_stations(&self, line: Line) -> Option<&[Station]> {
        self.lines.get(&line).map(Vec::as_slice)
    }

    /// Ordered stations of one bus route.
    pub fn bus_route_stations(&self, route: &str) -> Option<&[Station]> {
        self.bus_routes.get(route).map(Vec::as_slice)
    }

    /// Known bus route ids, in lexical order.
    pub fn bus_routes(&self) -> impl Iterator<Item = &str> {
        self.bus_routes.keys().map(String::as_str)
    }

    /// Stations of a line in the directional table.
    pub fn directional_stations(&self, line: Line) -> Option<&[Station]> {
        self.directional.get(&line).map(Vec::as_slice)
    }
}

fn parse_line(label: &str) -> Result<Line, StationError> {
    Line::from_short(label).ok_or_else(|| StationError::UnknownLine(label.to_string()))
}

/// Sort a station list by order, rejecting duplicate order values.
fn sorted(list: String, mut stations: Vec<Station>) -> Result<Vec<Station>, StationError> {
    let mut seen = HashSet::new();
    for s in &stations {
        if !seen.insert(s.order) {
            return Err(StationError::DuplicateOrder {
                list,
                order: s.order,
            });
        }
    }
    stations.sort_by_key(|s| s.order);
    Ok(stations)
}
