//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{DataPage, Line, Station};
use crate::router::{RouteState, line_selection_href};
use crate::widget::HeadwaysWidgetView;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Landing page: line menu and one headways widget per line.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lines: Vec<LineLinkView>,
    pub widgets: Vec<HeadwaysWidgetView>,
}

/// A line's dashboard page.
#[derive(Template)]
#[template(path = "line.html")]
pub struct LinePageTemplate {
    pub lines: Vec<LineLinkView>,
    pub line_name: String,
    pub line_color: String,
    pub page_title: String,
    pub pages: Vec<PageLinkView>,
    pub date_form: DateFormView,
    /// Zero or one widget.
    pub widgets: Vec<HeadwaysWidgetView>,
    /// Station pair picker, shown on the headways page.
    pub pair: PairPickerView,
    pub show_pair: bool,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

impl ErrorTemplate {
    pub fn details_text(&self) -> &str {
        self.details.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Entry of the line menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLinkView {
    pub name: &'static str,
    pub color: &'static str,
    pub href: String,
    pub is_current: bool,
}

impl LineLinkView {
    /// The whole menu as seen from `route`.
    pub fn menu(route: &RouteState) -> Vec<LineLinkView> {
        Line::ALL
            .iter()
            .map(|line| {
                let meta = line.metadata();
                LineLinkView {
                    name: meta.name,
                    color: meta.color,
                    href: line_selection_href(meta, route),
                    is_current: route.line == Some(*line),
                }
            })
            .collect()
    }
}

/// Tab linking to a sub-page of the current line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinkView {
    pub title: &'static str,
    pub href: String,
    pub is_current: bool,
}

impl PageLinkView {
    /// Sub-page tabs for the current line. The query carries over.
    pub fn tabs(route: &RouteState) -> Vec<PageLinkView> {
        let query = route.query.to_query_string();
        DataPage::ALL
            .iter()
            .map(|page| {
                let mut href = page_path(&route.line_path, *page);
                if !query.is_empty() {
                    href.push('?');
                    href.push_str(&query);
                }
                PageLinkView {
                    title: page.title(),
                    href,
                    is_current: route.datapage == Some(*page),
                }
            })
            .collect()
    }
}

/// Path of a sub-page; the overview is the bare line path.
pub fn page_path(line_path: &str, page: DataPage) -> String {
    match page {
        DataPage::Overview => format!("/{line_path}"),
        page => format!("/{line_path}/{}", page.segment()),
    }
}

/// Date picker form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormView {
    pub action: String,
    pub start_date: String,
    pub end_date: String,
    pub range: bool,
    /// Query string of the page, sent back as the current query.
    pub current_query: String,
}

/// One `<option>` of a station picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationOptionView {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

impl StationOptionView {
    pub fn list(stations: &[&Station], selected: Option<&Station>) -> Vec<StationOptionView> {
        stations
            .iter()
            .map(|s| StationOptionView {
                id: s.station.clone(),
                name: s.stop_name.clone(),
                selected: selected.is_some_and(|sel| sel.station == s.station),
            })
            .collect()
    }
}

/// Origin and destination pickers with a swap link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairPickerView {
    pub action: String,
    pub from_options: Vec<StationOptionView>,
    pub to_options: Vec<StationOptionView>,
    pub swap_href: String,
    /// Query parameters to carry through the picker form.
    pub hidden: Vec<(String, String)>,
}
