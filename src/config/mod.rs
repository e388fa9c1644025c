//! Configuration module

mod settings;

pub use settings::ServerConfig;
pub use settings::Settings;
