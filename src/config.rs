use crate::utils::time::RECORDED_AT_OFFSET_HOURS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "SENSOR_API_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const MONGO_URI_ENV: &str = "MONGO_URI";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Configs {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub ingest: IngestConfig,
}

impl Configs {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let config_content = fs::read_to_string(&path)?;
        let configs: Configs = toml::from_str(&config_content)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(configs)
    }

    /// Loads the config file (defaults when it does not exist) and applies
    /// environment overrides. `MONGO_URI` is mandatory.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());

        let mut configs = match Self::load_from_file(&path) {
            Ok(configs) => configs,
            Err(err) if is_not_found(err.as_ref()) => {
                log::info!("No config file at {}, using defaults", path);
                Configs::default()
            }
            Err(err) => return Err(format!("Invalid config file {}: {}", path, err).into()),
        };

        configs.apply_env(|key| std::env::var(key).ok())?;
        Ok(configs)
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.store.uri = lookup(MONGO_URI_ENV)
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| format!("You must set the {} environment var!", MONGO_URI_ENV))?;

        if let Some(host) = lookup("HOST") {
            self.server.host = host
                .parse()
                .map_err(|e| format!("HOST must be an IP address: {}", e))?;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| format!("PORT must be a valid port number: {}", e))?;
        }

        Ok(())
    }
}

fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == ErrorKind::NotFound)
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    #[serde(skip)]
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            database: "Sensor_ESP32_Mongo".into(),
            collection: "Datos".into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct IngestConfig {
    /// Hours subtracted from UTC when stamping a reading.
    pub recorded_at_offset_hours: i64,
}

impl IngestConfig {
    pub fn recorded_at_offset(&self) -> chrono::Duration {
        chrono::Duration::hours(self.recorded_at_offset_hours)
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            recorded_at_offset_hours: RECORDED_AT_OFFSET_HOURS,
        }
    }
}
