mod loader;
mod timeouts;
mod types;

pub use loader::{validate, ConfigLoader};
pub use timeouts::Timeouts;
pub use types::{Config, LoggingConfig, RemoteConfig, ServiceConfig};
