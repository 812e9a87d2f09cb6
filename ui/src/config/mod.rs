use config::{Config, Environment, File, FileFormat};

// Re-export all submodules
pub mod api;
pub mod app;
pub mod auth;
pub mod ui;

// Re-export main types
pub use api::ApiConfig;
pub use app::{AppConfig, LoggingConfig};
pub use auth::{AuthConfig, AuthStrategyKind};
pub use ui::UIConfig;

/// Result of loading configuration, kept so a broken config can be
/// reported once instead of panicking at first access.
#[derive(Debug, Clone)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

/// Config file path override, set from the CLI before first access.
static CONFIG_PATH: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Point configuration loading at an explicit file. Must be called before
/// the first [`get_config`]; later calls are ignored.
pub fn set_config_path(path: impl Into<String>) {
    let _ = CONFIG_PATH.set(path.into());
}

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();
    let env_source = Environment::with_prefix("MOIVON").separator("__");

    // The config file is optional: a login client is usable with nothing
    // but MOIVON__API__BASE_URL in the environment.
    let path = CONFIG_PATH
        .get()
        .map(String::as_str)
        .unwrap_or("config.toml");
    let file_source = File::new(path, FileFormat::Toml).required(false);

    let config = match Config::builder()
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

pub fn get_config_or_panic() -> &'static AppConfig {
    match get_config() {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(e) => {
            panic!("Failed to load config: {e}");
        }
        ConfigLoadResult::DeserializeError(e) => {
            panic!("Failed to deserialize config: {e}");
        }
    }
}
