//! Dashboard widgets.

mod headways;

pub use headways::{
    ChartPoint, ChartView, ERROR_TEXT, HeadwaysData, HeadwaysWidget, HeadwaysWidgetView,
    SummaryStat, pick_stations,
};
