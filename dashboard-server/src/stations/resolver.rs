//! Station lists and station lookup for a line.

use crate::domain::{Line, Station};

use super::tables::ReferenceTables;

/// Which end of a station pair a picker is choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationField {
    From,
    To,
}

impl StationField {
    pub fn parse(s: &str) -> Option<StationField> {
        match s {
            "from" => Some(StationField::From),
            "to" => Some(StationField::To),
            _ => None,
        }
    }
}

/// Ordered stations for a line.
///
/// The bus line needs a known `bus_route`; without one the result is
/// `None`. Other lines ignore `bus_route`.
pub fn options_station<'a>(
    tables: &'a ReferenceTables,
    line: Line,
    bus_route: Option<&str>,
) -> Option<&'a [Station]> {
    if line.requires_sub_route() {
        return tables.bus_route_stations(bus_route?);
    }
    tables.line_stations(line)
}

/// Candidate stations for one end of a station pair.
///
/// The `from` picker offers every station except the selected `to`. The
/// `to` picker offers every station except the selected `from`, and when
/// both the candidate and `from` declare branches, only candidates sharing
/// a branch with `from`: trips that need a branch transfer aren't offered.
pub fn options_for_field<'a>(
    tables: &'a ReferenceTables,
    field: StationField,
    line: Line,
    bus_route: Option<&str>,
    from: Option<&Station>,
    to: Option<&Station>,
) -> Option<Vec<&'a Station>> {
    let stations = options_station(tables, line, bus_route)?;

    let options = match field {
        StationField::From => stations
            .iter()
            .filter(|s| !is_same(s, to))
            .collect(),
        StationField::To => stations
            .iter()
            .filter(|s| !is_same(s, from))
            .filter(|s| match from {
                Some(from) => from.shares_branch_with(s).unwrap_or(true),
                None => true,
            })
            .collect(),
    };

    Some(options)
}

/// Find the station on `line` serving the upstream stop `id`.
///
/// Searches the directional table. Always `None` for the bus line and for
/// an empty id.
pub fn lookup_station_by_id<'a>(
    tables: &'a ReferenceTables,
    line: Line,
    id: &str,
) -> Option<&'a Station> {
    if line.requires_sub_route() || id.is_empty() {
        return None;
    }
    tables
        .directional_stations(line)?
        .iter()
        .find(|s| s.stops.contains(id))
}

/// Exchange the two ends of a station pair.
pub fn swap_stations<T>(from: Option<T>, to: Option<T>) -> (Option<T>, Option<T>) {
    (to, from)
}

/// Find a station on an ordered list by its stable id.
pub fn find_station<'a>(stations: &'a [Station], id: &str) -> Option<&'a Station> {
    stations.iter().find(|s| s.station == id)
}

fn is_same(candidate: &Station, selected: Option<&Station>) -> bool {
    selected.is_some_and(|s| s.station == candidate.station)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::DirectionalStops;
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    /// Strategy for a line of stations with distinct orders and random branch sets.
    fn line_stations() -> impl Strategy<Value = Vec<Station>> {
        proptest::collection::btree_set(0u32..1000, 2..20)
            .prop_flat_map(|orders| {
                let n = orders.len();
                (
                    Just(orders.into_iter().collect::<Vec<_>>()),
                    proptest::collection::vec(
                        proptest::option::of(subsequence(vec!["A", "B", "C"], 0..=3)),
                        n,
                    ),
                )
            })
            .prop_map(|(orders, branches)| {
                orders
                    .into_iter()
                    .zip(branches)
                    .map(|(order, branches)| Station {
                        station: format!("s{order}"),
                        stop_name: format!("Station {order}"),
                        order,
                        branches: branches
                            .map(|b| b.into_iter().map(String::from).collect()),
                        stops: DirectionalStops::default(),
                    })
                    .rev()
                    .collect()
            })
    }

    fn tables_for(stations: Vec<Station>) -> ReferenceTables {
        let json = serde_json::json!({
            "stations": { "Green": { "stations": stations } }
        });
        ReferenceTables::from_json(&json.to_string()).unwrap()
    }

    proptest! {
        /// Station lists are strictly ascending by order
        #[test]
        fn sorted_strictly_ascending(stations in line_stations()) {
            let t = tables_for(stations);
            let list = options_station(&t, Line::Green, None).unwrap();
            prop_assert!(list.windows(2).all(|w| w[0].order < w[1].order));
        }

        /// The `to` options never contain `from`, and respect shared branches
        #[test]
        fn to_options_respect_from(stations in line_stations(), pick in any::<prop::sample::Index>()) {
            let t = tables_for(stations);
            let list = options_station(&t, Line::Green, None).unwrap();
            let from = &list[pick.index(list.len())];

            let options = options_for_field(&t, StationField::To, Line::Green, None, Some(from), None).unwrap();

            prop_assert!(options.iter().all(|s| s.station != from.station));
            for s in &options {
                if let (Some(fb), Some(sb)) = (&from.branches, &s.branches) {
                    if !fb.is_empty() && !sb.is_empty() {
                        prop_assert!(sb.iter().any(|b| fb.contains(b)));
                    }
                }
            }
            if from.branches.as_ref().is_none_or(|b| b.is_empty()) {
                prop_assert_eq!(options.len(), list.len() - 1);
            }
        }
    }
}
