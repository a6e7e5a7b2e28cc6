use simple_dynamics::EvalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfError(#[from] toml::de::Error),
    #[error("Runtime error: {0}")]
    EvalError(#[from] EvalError),
    #[error("No program named `{0}`; try `simple list`")]
    UnknownProgram(String),
    #[error("Test failed:\n\t{0}")]
    TestFailed(String),
}

pub type Result<T> = std::result::Result<T, DriverError>;
