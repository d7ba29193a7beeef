//! URL state: the current view, query updates and line links.
//!
//! Everything here is a pure function of the URL it is given. The URL
//! itself is owned by the navigation layer (the browser, or the web
//! handlers that issue redirects).

mod link;
mod query;
mod route;
mod update;

pub use link::line_selection_href;
pub use query::{BUS_LINE, END_DATE, QueryParams, RawQuery, START_DATE, encode_pairs};
pub use route::{DEFAULT_BUS_ROUTE, RouteState, resolve_route};
pub use update::{
    DateRangeUpdate, LINE_PARAM, Navigator, QueryBag, QueryUpdater, navigation_href,
};
