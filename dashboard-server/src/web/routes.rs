//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tower_http::services::ServeDir;
use tracing::{debug, error, warn};

use crate::domain::{DataPage, Line, Station, current_service_date, format_date, parse_date};
use crate::router::{
    BUS_LINE, DateRangeUpdate, LINE_PARAM, Navigator, QueryBag, QueryUpdater, RawQuery,
    RouteState, encode_pairs, navigation_href, resolve_route,
};
use crate::stations::{
    StationField, find_station, location_details, lookup_station_by_id, options_for_field,
    options_station, stop_ids_for_stations, swap_stations, travel_direction,
};
use crate::widget::{HeadwaysWidget, pick_stations};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Query keys of the selected station pair on the headways page.
const FROM_PARAM: &str = "from";
const TO_PARAM: &str = "to";
/// Query key that hides chart legends on narrow viewports.
const NARROW_PARAM: &str = "narrow";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/lines", get(api_lines))
        .route("/api/:line/stations", get(api_stations))
        .route("/api/:line/stations/options", get(api_station_options))
        .route("/api/:line/pair", get(api_pair))
        .route("/api/:line/lookup/:stop_id", get(api_lookup))
        .route("/api/:line/headways", get(api_headways))
        .route("/:line", get(line_page))
        .route("/:line/:page", get(line_page))
        .route("/:line/:page/date", get(update_date))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The service date right now.
fn today() -> NaiveDate {
    current_service_date(Local::now().naive_local())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

/// Deserialize the query string into `T`, keeping the first occurrence of
/// each key.
fn query_params<T: DeserializeOwned>(uri: &Uri) -> Result<T, AppError> {
    let raw = RawQuery::parse(uri.query().unwrap_or_default());
    let mut first = Map::new();
    for (k, v) in raw.pairs() {
        first.entry(k).or_insert_with(|| Value::from(v));
    }
    serde_json::from_value(Value::Object(first)).map_err(|e| AppError::BadRequest {
        message: format!("Invalid query: {e}"),
    })
}

/// 404 as an error page for browsers, JSON otherwise.
fn not_found(headers: &HeaderMap, message: String) -> Result<Response, AppError> {
    if !accepts_html(headers) {
        return Err(AppError::NotFound { message });
    }
    debug!(%message, "page not found");
    let page = render(&ErrorTemplate {
        title: "Page not found".to_string(),
        message,
        details: None,
    })?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}

/// Landing page: line menu plus a headways widget per line.
async fn index_page(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let req: HeadwaysRequest = query_params(&uri)?;
    let date = today();
    let routes: Vec<RouteState> = Line::ALL
        .iter()
        .map(|line| RouteState::from_target(&format!("/{}", line.path())))
        .collect();
    let widgets: Vec<_> = routes
        .iter()
        .filter_map(|route| HeadwaysWidget::new(&state.tables, route, date))
        .collect();

    let data = join_all(widgets.iter().map(|w| w.load(&state.headways))).await;

    let template = IndexTemplate {
        lines: LineLinkView::menu(&RouteState::from_target("/")),
        widgets: widgets
            .iter()
            .zip(&data)
            .map(|(widget, data)| widget.view(data, !req.is_narrow()))
            .collect(),
    };
    Ok(render(&template)?.into_response())
}

/// A line's dashboard page, `/{line}` or `/{line}/{page}`.
async fn line_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, AppError> {
    let raw = RawQuery::parse(uri.query().unwrap_or_default());
    let route = resolve_route(uri.path(), &raw);

    let Some(line) = route.line else {
        return not_found(&headers, format!("No line named {:?}", route.line_path));
    };
    let Some(page) = route.datapage else {
        return not_found(&headers, format!("No page at {}", uri.path()));
    };

    let narrow = is_truthy(raw.first(NARROW_PARAM));
    let date = match route.query.start_date.as_deref() {
        Some(start) if page == DataPage::Headways => {
            parse_date(start).ok_or_else(|| AppError::BadRequest {
                message: format!("Invalid startDate: {start}"),
            })?
        }
        _ => today(),
    };

    let meta = line.metadata();
    let mut template = LinePageTemplate {
        lines: LineLinkView::menu(&route),
        line_name: meta.name.to_string(),
        line_color: meta.color.to_string(),
        page_title: page.title().to_string(),
        pages: PageLinkView::tabs(&route),
        date_form: DateFormView {
            action: format!("/{}/{}/date", route.line_path, page.segment()),
            start_date: route
                .query
                .start_date
                .clone()
                .unwrap_or_else(|| format_date(date)),
            end_date: route.query.end_date.clone().unwrap_or_default(),
            range: route.query.end_date.is_some(),
            current_query: uri.query().unwrap_or_default().to_string(),
        },
        widgets: Vec::new(),
        pair: PairPickerView::default(),
        show_pair: false,
    };

    match page {
        DataPage::Overview => {
            if let Some(widget) = HeadwaysWidget::new(&state.tables, &route, date) {
                let data = widget.load(&state.headways).await;
                template.widgets.push(widget.view(&data, !narrow));
            }
        }
        DataPage::Headways => {
            let bus_line = route.query.bus_line.as_deref();
            let stations = options_station(&state.tables, line, bus_line).unwrap_or_default();
            let (default_from, default_to) = pick_stations(stations);
            let from = selected_station(stations, &raw, FROM_PARAM).or(default_from);
            let to = selected_station(stations, &raw, TO_PARAM).or(default_to);

            template.pair = pair_picker(&state, &route, line, page, from, to);
            template.show_pair = true;

            let widget = HeadwaysWidget::for_pair(line, &route.line_path, from, to, date);
            let data = widget.load(&state.headways).await;
            template.widgets.push(widget.view(&data, !narrow));
        }
        _ => {}
    }

    Ok(render(&template)?.into_response())
}

fn selected_station<'a>(
    stations: &'a [Station],
    raw: &RawQuery,
    key: &str,
) -> Option<&'a Station> {
    raw.first(key).and_then(|id| find_station(stations, id))
}

/// Picker options for both ends plus the swap link.
fn pair_picker(
    state: &AppState,
    route: &RouteState,
    line: Line,
    page: DataPage,
    from: Option<&Station>,
    to: Option<&Station>,
) -> PairPickerView {
    let bus_line = route.query.bus_line.as_deref();
    let options = |field| {
        options_for_field(&state.tables, field, line, bus_line, from, to).unwrap_or_default()
    };

    let (swap_from, swap_to) = swap_stations(from, to);
    let mut swap_pairs: Vec<(&str, &str)> = route.query.entries().collect();
    swap_pairs.extend(swap_from.map(|s| (FROM_PARAM, s.station.as_str())));
    swap_pairs.extend(swap_to.map(|s| (TO_PARAM, s.station.as_str())));

    PairPickerView {
        action: page_path(&route.line_path, page),
        from_options: StationOptionView::list(&options(StationField::From), from),
        to_options: StationOptionView::list(&options(StationField::To), to),
        swap_href: format!(
            "{}?{}",
            page_path(&route.line_path, page),
            encode_pairs(swap_pairs)
        ),
        hidden: route
            .query
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

/// Navigator that turns a navigation into a redirect target.
#[derive(Debug, Default)]
struct RedirectNavigator {
    location: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn navigate(&mut self, path: &str, query: &QueryBag) {
        self.location = Some(navigation_href(path, query));
    }
}

/// Apply a date-picker change: 303 to the updated page, or 204 when the
/// change wouldn't move the user anywhere.
async fn update_date(
    headers: HeaderMap,
    Path((line_path, page_segment)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, AppError> {
    let req: DateUpdateRequest = query_params(&uri)?;
    let Some(line) = Line::from_path(&line_path) else {
        return not_found(&headers, format!("No line named {line_path:?}"));
    };
    let Some(page) = DataPage::from_segment(&page_segment) else {
        return not_found(&headers, format!("No page named {page_segment:?}"));
    };

    let mut current = QueryBag::new();
    for (k, v) in RawQuery::parse(req.current.as_deref().unwrap_or_default()).pairs() {
        current.entry(k.to_string()).or_insert_with(|| v.to_string());
    }
    current.insert(LINE_PARAM.to_string(), line.path().to_string());

    let update = DateRangeUpdate {
        start_date: req.start_date.clone(),
        end_date: req.end_date.clone(),
    };
    let mut navigator = RedirectNavigator::default();
    QueryUpdater::new(req.is_range()).update_query(
        &mut navigator,
        &page_path(line.path(), page),
        &current,
        Some(&update),
    );

    Ok(match navigator.location {
        Some(location) => Redirect::to(&location).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

fn parse_line(path: &str) -> Result<Line, AppError> {
    Line::from_path(path).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown line: {path}"),
    })
}

/// Ordered stations for `line`, or the reason there are none.
fn line_stations<'a>(
    state: &'a AppState,
    line: Line,
    bus_line: Option<&str>,
) -> Result<&'a [Station], AppError> {
    options_station(&state.tables, line, bus_line).ok_or_else(|| match bus_line {
        None if line.requires_sub_route() => AppError::BadRequest {
            message: format!("{BUS_LINE} is required for {line}"),
        },
        _ => AppError::NotFound {
            message: format!("No stations for {line} {}", bus_line.unwrap_or_default()),
        },
    })
}

/// Look up an optional station id on a station list.
fn station_param<'a>(
    stations: &'a [Station],
    id: Option<&str>,
) -> Result<Option<&'a Station>, AppError> {
    match id.filter(|id| !id.is_empty()) {
        None => Ok(None),
        Some(id) => find_station(stations, id)
            .map(Some)
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown station: {id}"),
            }),
    }
}

/// All lines.
async fn api_lines() -> Json<LinesResponse> {
    Json(LinesResponse {
        lines: Line::ALL
            .iter()
            .map(|line| LineResult::from(line.metadata()))
            .collect(),
    })
}

/// Ordered stations of a line.
async fn api_stations(
    State(state): State<AppState>,
    Path(line): Path<String>,
    uri: Uri,
) -> Result<Json<StationsResponse>, AppError> {
    let req: StationsRequest = query_params(&uri)?;
    let line = parse_line(&line)?;
    let stations = line_stations(&state, line, req.bus_line.as_deref())?;

    Ok(Json(StationsResponse {
        line,
        bus_line: req.bus_line.filter(|_| line.requires_sub_route()),
        stations: stations.iter().map(StationResult::from).collect(),
    }))
}

/// Picker options for one end of a station pair.
async fn api_station_options(
    State(state): State<AppState>,
    Path(line): Path<String>,
    uri: Uri,
) -> Result<Json<StationOptionsResponse>, AppError> {
    let req: StationOptionsRequest = query_params(&uri)?;
    let line = parse_line(&line)?;
    let field = StationField::parse(&req.field).ok_or_else(|| AppError::BadRequest {
        message: format!("Invalid field: {} (expected from or to)", req.field),
    })?;
    let bus_line = req.bus_line.as_deref();
    let stations = line_stations(&state, line, bus_line)?;
    let from = station_param(stations, req.from.as_deref())?;
    let to = station_param(stations, req.to.as_deref())?;

    let options = options_for_field(&state.tables, field, line, bus_line, from, to)
        .unwrap_or_default();

    Ok(Json(StationOptionsResponse {
        field: match field {
            StationField::From => "from",
            StationField::To => "to",
        },
        stations: options.into_iter().map(StationResult::from).collect(),
    }))
}

/// Stop ids and caption for a station pair.
async fn api_pair(
    State(state): State<AppState>,
    Path(line): Path<String>,
    uri: Uri,
) -> Result<Json<PairResponse>, AppError> {
    let req: PairRequest = query_params(&uri)?;
    let line = parse_line(&line)?;
    let stations = line_stations(&state, line, req.bus_line.as_deref())?;
    let from = station_param(stations, req.from.as_deref())?;
    let to = station_param(stations, req.to.as_deref())?;

    let direction = from.zip(to).map(|(from, to)| travel_direction(from, to));
    Ok(Json(PairResponse::new(
        stop_ids_for_stations(from, to),
        direction,
        location_details(from, to, line.short()),
    )))
}

/// The station serving an upstream stop id.
async fn api_lookup(
    State(state): State<AppState>,
    Path((line, stop_id)): Path<(String, String)>,
) -> Result<Json<LookupResponse>, AppError> {
    let line = parse_line(&line)?;
    let station =
        lookup_station_by_id(&state.tables, line, &stop_id).ok_or_else(|| AppError::NotFound {
            message: format!("No {line} station serves stop {stop_id}"),
        })?;

    Ok(Json(LookupResponse {
        station: StationResult::from(station),
    }))
}

/// Headways widget data for a line.
async fn api_headways(
    State(state): State<AppState>,
    Path(line): Path<String>,
    uri: Uri,
) -> Result<Response, AppError> {
    let req: HeadwaysRequest = query_params(&uri)?;
    let line = parse_line(&line)?;
    let date = match req.date.as_deref() {
        Some(date) => parse_date(date).ok_or_else(|| AppError::BadRequest {
            message: format!("Invalid date: {date}"),
        })?,
        None => today(),
    };

    let raw: RawQuery = req
        .bus_line
        .iter()
        .map(|bus| (BUS_LINE, bus.as_str()))
        .collect();
    let route = resolve_route(&format!("/{}", line.path()), &raw);

    let widget =
        HeadwaysWidget::new(&state.tables, &route, date).ok_or_else(|| AppError::Internal {
            message: format!("No widget for {line}"),
        })?;
    let data = widget.load(&state.headways).await;

    Ok(Json(widget.view(&data, !req.is_narrow())).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HeadwaySource, MockDataClient};
    use crate::stations::ReferenceTables;

    fn app() -> Router {
        let tables = ReferenceTables::bundled().unwrap();
        let headways = HeadwaySource::Mock(MockDataClient::new("data/mock_headways").unwrap());
        create_router(AppState::new(tables, headways), "static")
    }

    /// Serve the app on an ephemeral port and return its base URL.
    async fn serve() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app()).await.unwrap() });
        format!("http://{addr}")
    }

    async fn request(uri: &str, accept: Option<&str>) -> reqwest::Response {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();
        let mut request = client.get(format!("{}{uri}", serve().await));
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }
        request.send().await.unwrap()
    }

    async fn get(uri: &str) -> reqwest::Response {
        request(uri, None).await
    }

    async fn get_html(uri: &str) -> reqwest::Response {
        request(uri, Some("text/html")).await
    }

    async fn body_text(response: reqwest::Response) -> String {
        response.text().await.unwrap()
    }

    async fn body_json(response: reqwest::Response) -> serde_json::Value {
        response.json().await.unwrap()
    }

    fn location(response: &reqwest::Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn lists_lines() {
        let json = body_json(get("/api/lines").await).await;
        let keys: Vec<_> = json["lines"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, ["RL", "OL", "GL", "BL", "BUS"]);
    }

    #[tokio::test]
    async fn stations_are_ordered() {
        let json = body_json(get("/api/red/stations").await).await;
        let orders: Vec<u64> = json["stations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["order"].as_u64().unwrap())
            .collect();
        assert!(!orders.is_empty());
        assert!(orders.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn bus_stations_need_a_route() {
        assert_eq!(get("/api/bus/stations").await.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            get("/api/bus/stations?busLine=999").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get("/api/bus/stations?busLine=22").await.status(),
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn unknown_line_is_not_found() {
        let response = get("/api/purple/stations").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("purple"));
    }

    #[tokio::test]
    async fn options_exclude_the_other_end() {
        let tables = ReferenceTables::bundled().unwrap();
        let red = tables.line_stations(Line::Red).unwrap();
        let to = &red[5].station;

        let json = body_json(get(&format!("/api/red/stations/options?field=from&to={to}")).await).await;
        let ids: Vec<_> = json["stations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["station"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids.len(), red.len() - 1);
        assert!(!ids.contains(to));
    }

    #[tokio::test]
    async fn bad_options_field() {
        let response = get("/api/red/stations/options?field=via").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn pair_resolves_direction() {
        let tables = ReferenceTables::bundled().unwrap();
        let red = tables.line_stations(Line::Red).unwrap();
        let (a, b) = (&red[1], &red[6]);

        let json = body_json(
            get(&format!("/api/red/pair?from={}&to={}", a.station, b.station)).await,
        )
        .await;
        assert_eq!(json["direction"], "southbound");
        assert_eq!(json["from_stop_ids"], serde_json::json!(a.stops.one));
        assert_eq!(json["location"]["line"], "Red");

        let json = body_json(get(&format!("/api/red/pair?from={}", a.station)).await).await;
        assert!(json["from_stop_ids"].is_null());
        assert_eq!(json["location"]["to"], "Loading...");
    }

    #[tokio::test]
    async fn lookup_by_stop_id() {
        let json = body_json(get("/api/red/lookup/70067").await).await;
        assert!(json["station"]["stops_1"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("70067")));

        assert_eq!(
            get("/api/red/lookup/nope").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get("/api/bus/lookup/371").await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn headways_from_fixtures() {
        let json = body_json(get("/api/red/headways?date=2024-03-15").await).await;
        assert_eq!(json["title"], "Headways");
        assert_eq!(json["chart_id"], "headways-widget-red");
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["is_loading"], false);
        assert!(json["error"].is_null());
        assert!(json["show_legend"].as_bool().unwrap());
    }

    #[tokio::test]
    async fn headways_narrow_hides_legend() {
        let json = body_json(get("/api/orange/headways?narrow=1").await).await;
        assert_eq!(json["show_legend"], false);
    }

    #[tokio::test]
    async fn headways_bad_date() {
        let response = get("/api/red/headways?date=soon").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_query_keys_take_the_first() {
        let response = get("/api/bus/headways?busLine=22&busLine=1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["chart_id"], "headways-widget-bus");

        let json = body_json(get("/api/bus/stations?busLine=22&busLine=999").await).await;
        assert_eq!(json["bus_line"], "22");

        let response = get("/api/red/headways?date=2024-03-15&date=soon").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["date"], "2024-03-15");
    }

    #[tokio::test]
    async fn malformed_query_is_a_json_error() {
        let response = get("/api/red/stations/options?from=place-alfcl").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("field"));
    }

    #[tokio::test]
    async fn narrow_flag_matches_api() {
        let html = body_text(get_html("/red?narrow=true").await).await;
        assert!(html.contains("headways-widget-red"));
        assert!(!html.contains("class=\"legend\""));

        let html = body_text(get_html("/red").await).await;
        assert!(html.contains("class=\"legend\""));
    }

    #[tokio::test]
    async fn landing_page_renders_widgets() {
        let response = get_html("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("headways-widget-red"));
        assert!(html.contains("headways-widget-bus"));
    }

    #[tokio::test]
    async fn line_overview_renders() {
        let response = get_html("/orange").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Orange Line"));
        assert!(html.contains("headways-widget-orange"));
        assert!(html.contains("Average Headway"));
    }

    #[tokio::test]
    async fn headways_page_has_pair_picker() {
        let html = body_text(get_html("/blue/headways").await).await;
        assert!(html.contains("pair-picker"));
        assert!(html.contains("Swap"));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        assert_eq!(get_html("/purple").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(get_html("/red/nonsense").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(get("/red/nonsense").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn date_update_redirects() {
        let response = get("/red/headways/date?startDate=2024-03-01&current=busLine%3D22").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "/red/headways?busLine=22&startDate=2024-03-01"
        );
    }

    #[tokio::test]
    async fn date_update_range_keeps_end_date() {
        let response = get(
            "/red/overview/date?startDate=2024-03-01&endDate=03%2F09%2F2024&range=on",
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "/red?endDate=2024-03-09&startDate=2024-03-01"
        );
    }

    #[tokio::test]
    async fn date_update_takes_first_start_date() {
        let response =
            get("/red/headways/date?startDate=2024-03-01&startDate=2024-03-02").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/red/headways?startDate=2024-03-01");
    }

    #[tokio::test]
    async fn repeated_date_update_is_no_content() {
        let response =
            get("/red/headways/date?startDate=2024-03-01&current=startDate%3D2024-03-01").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = get("/red/headways/date?startDate=bogus").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
