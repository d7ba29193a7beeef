//! Line-selection links.

use crate::domain::{DataPage, LineMetadata};

use super::route::RouteState;

/// Where selecting `target` in the line menu should take the user.
///
/// Switching to another line keeps the current sub-page and query.
/// Selecting the line the user is already on goes back to that line's
/// overview with no query.
///
/// # Examples
///
/// ```
/// use dashboard_server::domain::Line;
/// use dashboard_server::router::{line_selection_href, RouteState};
///
/// let route = RouteState::from_target("/red/headways?startDate=2024-01-01&busLine=22");
/// assert_eq!(
///     line_selection_href(Line::Orange.metadata(), &route),
///     "/orange/headways?startDate=2024-01-01&busLine=22"
/// );
/// assert_eq!(line_selection_href(Line::Red.metadata(), &route), "/red");
/// ```
pub fn line_selection_href(target: &LineMetadata, route: &RouteState) -> String {
    let mut href = format!("/{}", target.path);

    let is_current = route.line.is_some_and(|l| l.key() == target.key);
    if is_current {
        return href;
    }

    if let Some(page) = route.datapage {
        if page != DataPage::Overview {
            href.push('/');
            href.push_str(page.segment());
        }
        let query = route.query.to_query_string();
        if !query.is_empty() {
            href.push('?');
            href.push_str(&query);
        }
    }

    href
}
