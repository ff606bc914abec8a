use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure of a single upstream fetch.
///
/// The `Display` form is the user-facing error string; the underlying cause is
/// kept alongside for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network error, timeout, or non-2xx status.
    #[error("Error fetching data from the API.")]
    Transport { detail: String },

    /// The envelope parsed but its `message` was absent or not `"Success"`.
    #[error("{context}: {reason}")]
    Rejected {
        context: &'static str,
        reason: String,
    },

    /// The body was not valid JSON or did not match the expected schema.
    #[error("An unexpected error occurred.")]
    Malformed { detail: String },
}

impl FetchError {
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Self::Transport {
            detail: err.to_string(),
        }
    }

    pub(crate) fn rejected(context: &'static str, message: Option<&str>) -> Self {
        let reason = match message {
            Some(message) => format!("upstream replied {message:?}"),
            None => "upstream reply carried no status message".to_string(),
        };
        Self::Rejected { context, reason }
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::Malformed {
            detail: detail.into(),
        }
    }

    /// The underlying cause, for logging.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::Transport { detail } | Self::Malformed { detail } => detail,
            Self::Rejected { reason, .. } => reason,
        }
    }

    /// Envelope `message` the proxy surface reports for this failure.
    #[must_use]
    pub const fn envelope_message(&self) -> &'static str {
        match self {
            Self::Transport { .. } | Self::Rejected { .. } => "Error fetching data from the API.",
            Self::Malformed { .. } => "An unexpected error occurred.",
        }
    }
}

/// Outcome of an upstream fetch: the data, or the reason it is unavailable.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
