use codegen::GenerateError;
use config::ConfigError;
use derive_more::{Display, Error, From};
use storage::StoreError;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Display, Error, From)]
pub enum ToolError {
    #[display("Configuration: {}", _0)]
    #[from]
    Config(ConfigError),
    #[display("Logging: {}", _0)]
    #[from]
    Tracing(TryInitError),
    #[display("I/O: {}", _0)]
    #[from]
    Io(std::io::Error),
    #[display("Field document: {}", _0)]
    #[from]
    Json(serde_json::Error),
    #[display("Generation: {}", _0)]
    #[from]
    Generate(GenerateError),
    #[display("Store: {}", _0)]
    #[from]
    Store(StoreError),
}
