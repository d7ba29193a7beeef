//! Query-string handling.
//!
//! The transport can deliver a key more than once (`?startDate=a&startDate=b`).
//! The dashboard's query bag is single-valued: the first occurrence wins.

use serde::Serialize;
use url::form_urlencoded;

/// Query key for the start of the date range.
pub const START_DATE: &str = "startDate";
/// Query key for the end of the date range.
pub const END_DATE: &str = "endDate";
/// Query key for the selected bus route.
pub const BUS_LINE: &str = "busLine";

/// A query string as delivered, with repeated keys preserved in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pairs: Vec<(String, String)>,
}

impl RawQuery {
    /// Parse an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Every value given for `key`, in order.
    pub fn all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The first value given for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.all(key).next()
    }

    /// All pairs, in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The dashboard's recognized query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub bus_line: Option<String>,
}

impl QueryParams {
    /// Collapse a raw query into single values (first occurrence wins).
    pub fn from_raw(raw: &RawQuery) -> Self {
        Self {
            start_date: raw.first(START_DATE).map(str::to_string),
            end_date: raw.first(END_DATE).map(str::to_string),
            bus_line: raw.first(BUS_LINE).map(str::to_string),
        }
    }

    /// Defined entries in key order: startDate, endDate, busLine.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (START_DATE, &self.start_date),
            (END_DATE, &self.end_date),
            (BUS_LINE, &self.bus_line),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
    }

    /// Encode the defined entries as a query string (no leading `?`).
    ///
    /// Empty when no entry is defined.
    pub fn to_query_string(&self) -> String {
        encode_pairs(self.entries())
    }
}

/// Encode pairs the way a browser's `URLSearchParams` does.
pub fn encode_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k.as_ref(), v.as_ref());
    }
    serializer.finish()
}
