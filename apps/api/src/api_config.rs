use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use lpa_dashboard_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 3001;
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresRuntimeConfig {
    pub database_url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Postgres(PostgresRuntimeConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub api_host: String,
    pub api_port: u16,
    pub store: StoreConfig,
    pub seed_file: Option<PathBuf>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let first_argument = env::args().nth(1);
        Self::from_source(first_argument.as_deref(), |name| env::var(name).ok())
    }

    fn from_source(
        first_argument: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let migrate_only = first_argument == Some("migrate");

        let api_host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => value.parse::<u16>().map_err(|error| {
                AppError::Validation(format!("invalid API_PORT '{value}': {error}"))
            })?,
            None => DEFAULT_API_PORT,
        };

        let store = match lookup("DASHBOARD_STORE")
            .unwrap_or_else(|| "memory".to_owned())
            .as_str()
        {
            "memory" => StoreConfig::Memory,
            "postgres" => StoreConfig::Postgres(PostgresRuntimeConfig {
                database_url: required_non_empty(&lookup, "DATABASE_URL")?,
                max_connections: database_max_connections(&lookup)?,
            }),
            other => {
                return Err(AppError::Validation(format!(
                    "DASHBOARD_STORE must be either 'memory' or 'postgres', got '{other}'"
                )));
            }
        };

        if migrate_only && store == StoreConfig::Memory {
            return Err(AppError::Validation(
                "migrate requires DASHBOARD_STORE=postgres".to_owned(),
            ));
        }

        let seed_file = lookup("DASHBOARD_SEED_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            migrate_only,
            api_host,
            api_port,
            store,
            seed_file,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn database_max_connections(lookup: &impl Fn(&str) -> Option<String>) -> Result<u32, AppError> {
    let Some(value) = lookup("DATABASE_MAX_CONNECTIONS") else {
        return Ok(DEFAULT_DATABASE_MAX_CONNECTIONS);
    };

    match value.parse::<u32>() {
        Ok(max_connections) if max_connections > 0 => Ok(max_connections),
        Ok(_) => Err(AppError::Validation(
            "DATABASE_MAX_CONNECTIONS must be greater than zero".to_owned(),
        )),
        Err(error) => Err(AppError::Validation(format!(
            "invalid DATABASE_MAX_CONNECTIONS '{value}': {error}"
        ))),
    }
}
