//! Configuration management for the Turnstile CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (TURNSTILE_*)
//! 3. Config file (~/.config/turnstile/config.toml)
//! 4. Default values

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server host.
    #[serde(default = "default_host")]
    pub server_host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub server_port: u16,

    /// Whether CORS is enabled on the server.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
            cors: default_cors(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("TURNSTILE_"));

        match figment.extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                // Report the error clearly to the user
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                eprintln!("  To fix, edit or delete the config file:");
                eprintln!("    rm {}", config_path.display());
                eprintln!();
                Config::default()
            }
        }
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("turnstile")
            .join("config.toml")
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("Turnstile Configuration");
    println!("=======================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!("  server_host: {}", config.server_host);
    println!("  server_port: {}", config.server_port);
    println!("  cors: {}", config.cors);

    println!("\nEnvironment variables:");
    println!("  TURNSTILE_SERVER_HOST");
    println!("  TURNSTILE_SERVER_PORT");
    println!("  TURNSTILE_CORS");
}
