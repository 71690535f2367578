use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}
