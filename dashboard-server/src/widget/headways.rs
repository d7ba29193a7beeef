//! Headways widget shown on a line's overview page.
//!
//! The widget charts the time between trains for one fixed station pair
//! per line: the fourth station from one end to the third from the other.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::warn;

use crate::data::{HeadwaySource, SingleDayParams};
use crate::domain::{
    HeadwayRecord, Line, Location, Station, average_headway, format_date, longest_headway,
    seconds_to_minutes,
};
use crate::router::RouteState;
use crate::stations::{
    LOADING_TEXT, PairStopIds, ReferenceTables, location_details, options_station,
    stop_ids_for_stations,
};

/// Text rendered in place of the widget when the fetch failed.
pub const ERROR_TEXT: &str = "Uh oh... error";

const TITLE: &str = "Headways";
const CHART_TITLE: &str = "Time between trains (headways)";
const MINUTES: &str = "min";

/// Chart canvas size in SVG user units.
const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

/// Outcome of loading the widget's series.
#[derive(Debug, Clone)]
pub enum HeadwaysData {
    /// A station is missing, so nothing was fetched.
    Loading,
    Ready(Arc<Vec<HeadwayRecord>>),
    Error,
}

/// The headways widget for one line and service date.
#[derive(Debug, Clone)]
pub struct HeadwaysWidget<'a> {
    line: Line,
    line_path: String,
    from: Option<&'a Station>,
    to: Option<&'a Station>,
    date: NaiveDate,
}

impl<'a> HeadwaysWidget<'a> {
    /// Build the widget for the route's line. `None` when the route names
    /// no known line.
    pub fn new(tables: &'a ReferenceTables, route: &RouteState, date: NaiveDate) -> Option<Self> {
        let line = route.line?;
        let stations = options_station(tables, line, route.query.bus_line.as_deref());
        let (from, to) = stations.map_or((None, None), pick_stations);

        Some(Self::for_pair(line, &route.line_path, from, to, date))
    }

    /// The widget for an explicit station pair.
    pub fn for_pair(
        line: Line,
        line_path: &str,
        from: Option<&'a Station>,
        to: Option<&'a Station>,
        date: NaiveDate,
    ) -> Self {
        Self {
            line,
            line_path: line_path.to_string(),
            from,
            to,
            date,
        }
    }

    /// Request parameters, present only when both ends resolved to at
    /// least one stop in the direction of travel.
    pub fn params(&self) -> Option<SingleDayParams> {
        let PairStopIds {
            from_stop_ids,
            to_stop_ids,
        } = stop_ids_for_stations(self.from, self.to);
        let from_stops = from_stop_ids.filter(|ids| !ids.is_empty())?;
        let to_stops = to_stop_ids.filter(|ids| !ids.is_empty())?;
        Some(SingleDayParams {
            from_stops: from_stops.to_vec(),
            to_stops: to_stops.to_vec(),
            date: self.date,
        })
    }

    pub fn location(&self) -> Location {
        location_details(self.from, self.to, self.line.short())
    }

    /// Fetch the series. Skips the fetch while the pair is incomplete.
    pub async fn load(&self, source: &HeadwaySource) -> HeadwaysData {
        let Some(params) = self.params() else {
            return HeadwaysData::Loading;
        };

        match source.get_headways(&params).await {
            Ok(series) => HeadwaysData::Ready(series),
            Err(e) => {
                warn!(line = %self.line, error = %e, "headways fetch failed");
                HeadwaysData::Error
            }
        }
    }

    /// Presentation of the widget given the fetch outcome.
    pub fn view(&self, data: &HeadwaysData, show_legend: bool) -> HeadwaysWidgetView {
        let records: &[HeadwayRecord] = match data {
            HeadwaysData::Ready(series) => series.as_slice(),
            _ => &[],
        };
        let is_loading = !matches!(data, HeadwaysData::Ready(_))
            || self.from.is_none()
            || self.to.is_none();

        let summary = |label: &'static str, stat: fn(&[HeadwayRecord]) -> f64| match data {
            HeadwaysData::Ready(series) => SummaryStat {
                label,
                value: seconds_to_minutes(stat(series.as_slice())).to_string(),
                units: Some(MINUTES),
            },
            _ => SummaryStat {
                label,
                value: LOADING_TEXT.to_string(),
                units: None,
            },
        };

        HeadwaysWidgetView {
            title: TITLE,
            href: format!("/{}/headways", self.line_path),
            chart_id: format!("headways-widget-{}", self.line_path),
            chart_title: CHART_TITLE,
            date: format_date(self.date),
            location: self.location(),
            is_loading,
            error: matches!(data, HeadwaysData::Error).then_some(ERROR_TEXT),
            show_legend,
            chart: ChartView::from_records(records),
            summaries: vec![
                summary("Average Headway", average_headway),
                summary("Longest Headway", longest_headway),
            ],
        }
    }
}

/// The widget's station pair: index 3 and index `len - 3` of the ordered
/// list, each absent when the list is too short.
pub fn pick_stations(stations: &[Station]) -> (Option<&Station>, Option<&Station>) {
    let from = stations.get(3);
    let to = stations.len().checked_sub(3).and_then(|i| stations.get(i));
    (from, to)
}

/// Everything a template or JSON client needs to draw the widget.
#[derive(Debug, Clone, Serialize)]
pub struct HeadwaysWidgetView {
    pub title: &'static str,
    pub href: String,
    pub chart_id: String,
    pub chart_title: &'static str,
    pub date: String,
    pub location: Location,
    pub is_loading: bool,
    /// Set when the fetch failed; the widget shows only this text.
    pub error: Option<&'static str>,
    pub show_legend: bool,
    pub chart: ChartView,
    pub summaries: Vec<SummaryStat>,
}

/// One summary box under the chart.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
    pub units: Option<&'static str>,
}

impl HeadwaysWidgetView {
    pub fn error_text(&self) -> &str {
        self.error.unwrap_or_default()
    }
}

impl SummaryStat {
    pub fn units_text(&self) -> &str {
        self.units.unwrap_or_default()
    }
}

/// A single point of the headway chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    /// Departure time of day (`HH:MM`), or the raw timestamp if it
    /// doesn't parse.
    pub time: String,
    pub minutes: f64,
    pub benchmark_minutes: Option<f64>,
}

/// Line chart of headways over the day, pre-scaled to an SVG canvas.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub points: Vec<ChartPoint>,
    pub width: f64,
    pub height: f64,
    /// `points` attribute of the observed-headway polyline.
    pub metric_polyline: String,
    /// `points` attribute of the benchmark polyline; empty without benchmarks.
    pub benchmark_polyline: String,
}

impl ChartView {
    fn from_records(records: &[HeadwayRecord]) -> Self {
        let points: Vec<ChartPoint> = records
            .iter()
            .map(|r| ChartPoint {
                time: time_of_day(&r.current_dep_dt),
                minutes: r.headway_time_sec / 60.0,
                benchmark_minutes: r.benchmark_headway_time_sec.map(|b| b / 60.0),
            })
            .collect();

        let max = points
            .iter()
            .flat_map(|p| std::iter::once(p.minutes).chain(p.benchmark_minutes))
            .fold(0.0, f64::max);

        let metric_polyline = polyline(points.iter().map(|p| Some(p.minutes)), points.len(), max);
        let benchmark_polyline =
            polyline(points.iter().map(|p| p.benchmark_minutes), points.len(), max);

        Self {
            points,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            metric_polyline,
            benchmark_polyline,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn time_of_day(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Scale values to canvas coordinates. Missing values are skipped.
fn polyline(values: impl Iterator<Item = Option<f64>>, count: usize, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let step = if count > 1 {
        CHART_WIDTH / (count - 1) as f64
    } else {
        0.0
    };

    values
        .enumerate()
        .filter_map(|(i, v)| {
            let v = v?;
            let x = i as f64 * step;
            let y = CHART_HEIGHT - (v / max) * CHART_HEIGHT;
            Some(format!("{x:.1},{y:.1}"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
