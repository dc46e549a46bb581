use thiserror::Error;

#[derive(Error, Debug)]
pub enum LarderError {
    /// Locally detected bad input, surfaced inline where it was produced.
    #[error("{0}")]
    Validation(String),

    /// The directory has no record for the given username.
    #[error("invalid username or credentials")]
    InvalidCredentials,

    /// Transport or status failure talking to the directory or catalog.
    #[error("connection error: {0}")]
    Connectivity(String),

    /// Detail fetch for an identifier the catalog service does not know.
    #[error("recipe {0} not found")]
    RecipeNotFound(u64),

    #[error("not logged in (run `larder login <username>` first)")]
    NotLoggedIn,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LarderError>;
