//! Reference-table error types.

/// Errors that can occur while loading station reference tables.
///
/// Lookups against loaded tables never fail; absence is an `Option`.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The tables file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The tables file is not valid JSON for the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A table is keyed by a line label that isn't a known line
    #[error("unknown line in reference tables: {0}")]
    UnknownLine(String),

    /// The bus line must be keyed by route, not listed directly
    #[error("line {0} requires a sub-route and cannot have a flat station list")]
    SubRouteRequired(String),

    /// Two stations on the same list share an order value
    #[error("duplicate station order {order} on {list}")]
    DuplicateOrder { list: String, order: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::UnknownLine("Purple".into());
        assert_eq!(err.to_string(), "unknown line in reference tables: Purple");

        let err = StationError::DuplicateOrder {
            list: "Red".into(),
            order: 4,
        };
        assert_eq!(err.to_string(), "duplicate station order 4 on Red");

        let err = StationError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }
}
