use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoulMateError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("API error: {0}")]
    Api(String),
}

impl From<SeoulMateError> for String {
    fn from(err: SeoulMateError) -> Self {
        err.to_string()
    }
}
