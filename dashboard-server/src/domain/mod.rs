//! Domain types for the transit dashboard.
//!
//! Lines, pages and stations are closed sets of reference values. Parsers
//! return `Option` rather than errors: an unknown line or page in a URL is
//! an absent value the caller decides how to present.

mod data_page;
mod date;
mod headway;
mod line;
mod station;

pub use data_page::DataPage;
pub use date::{
    DATE_FORMAT, SERVICE_DAY_START_HOUR, current_service_date, format_date, offset_date,
    parse_date,
};
pub use headway::{HeadwayRecord, average_headway, longest_headway, seconds_to_minutes};
pub use line::{Line, LineMetadata};
pub use station::{DirectionFlag, DirectionalStops, Location, Station, TravelDirection};
