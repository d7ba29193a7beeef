//! Server configuration from environment variables.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::data::DataConfig;

/// Listen address when `DASHBOARD_ADDR` is unset.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));

/// Static assets directory when `DASHBOARD_STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "dashboard-server/static";

pub const ADDR_VAR: &str = "DASHBOARD_ADDR";
pub const DATA_API_VAR: &str = "DASHBOARD_DATA_API";
pub const STATIONS_VAR: &str = "DASHBOARD_STATIONS";
pub const MOCK_DATA_VAR: &str = "DASHBOARD_MOCK_DATA";
pub const STATIC_DIR_VAR: &str = "DASHBOARD_STATIC_DIR";
pub const DATA_TIMEOUT_VAR: &str = "DASHBOARD_DATA_TIMEOUT";
pub const DATA_CONCURRENCY_VAR: &str = "DASHBOARD_DATA_CONCURRENCY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid {var} {value:?}: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Data API client settings, defaults overridden per variable.
    pub data: DataConfig,
    /// Station tables file; the bundled tables when `None`.
    pub stations_path: Option<PathBuf>,
    /// Directory of headway fixtures. When set, the data API isn't used.
    pub mock_data: Option<PathBuf>,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            data: DataConfig::default(),
            stations_path: None,
            mock_data: None,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &'static str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let addr = match get(ADDR_VAR) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value,
                source,
            })?,
            None => defaults.addr,
        };

        let mut data = defaults.data;
        if let Some(url) = get(DATA_API_VAR) {
            data = data.with_base_url(url);
        }
        if let Some(secs) = parse_number(&get, DATA_TIMEOUT_VAR)? {
            data = data.with_timeout(secs);
        }
        if let Some(n) = parse_number(&get, DATA_CONCURRENCY_VAR)? {
            data = data.with_max_concurrent(n);
        }

        Ok(Self {
            addr,
            data,
            stations_path: get(STATIONS_VAR).map(PathBuf::from),
            mock_data: get(MOCK_DATA_VAR).map(PathBuf::from),
            static_dir: get(STATIC_DIR_VAR).unwrap_or(defaults.static_dir),
        })
    }
}

fn parse_number<T: FromStr<Err = ParseIntError>>(
    get: impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    get(var)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber { var, value, source })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| vars.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (DATA_API_VAR, "http://localhost:5000"),
            (DATA_TIMEOUT_VAR, "10"),
            (DATA_CONCURRENCY_VAR, "2"),
            (STATIONS_VAR, "/etc/stations.json"),
            (MOCK_DATA_VAR, "fixtures"),
            (STATIC_DIR_VAR, "public"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.data.base_url, "http://localhost:5000");
        assert_eq!(config.stations_path, Some(PathBuf::from("/etc/stations.json")));
        assert_eq!(config.mock_data, Some(PathBuf::from("fixtures")));
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.data.timeout_secs, 10);
        assert_eq!(config.data.max_concurrent, 2);
    }

    #[test]
    fn empty_values_are_unset() {
        let config =
            ServerConfig::from_lookup(lookup(&[(MOCK_DATA_VAR, ""), (ADDR_VAR, "  ")])).unwrap();
        assert!(config.mock_data.is_none());
        assert_eq!(config.addr, DEFAULT_ADDR);
    }

    #[test]
    fn bad_address_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains("DASHBOARD_ADDR"));
    }

    #[test]
    fn bad_number_is_an_error() {
        let err =
            ServerConfig::from_lookup(lookup(&[(DATA_TIMEOUT_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: DATA_TIMEOUT_VAR, .. }));
    }
}
