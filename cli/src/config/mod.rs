pub mod credentials;
pub mod settings;

pub use credentials::{env_var, Credentials};
pub use settings::{Config, ConfigManager, SelectFilter, TestEntry, UpdatePolicy};
