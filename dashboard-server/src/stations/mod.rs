//! Station reference data and station-pair resolution.
//!
//! Tables are loaded once ([`ReferenceTables`]) and every lookup borrows
//! from them. Nothing here fails at lookup time: a missing line, route,
//! station or stop id is `None`.

mod error;
mod geometry;
mod resolver;
mod tables;

pub use error::StationError;
pub use geometry::{
    LOADING_TEXT, PairStopIds, direction_flag, location_details, stop_ids_for_stations,
    travel_direction,
};
pub use resolver::{
    StationField, find_station, lookup_station_by_id, options_for_field, options_station,
    swap_stations,
};
pub use tables::ReferenceTables;
