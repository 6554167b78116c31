use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the Nominatim-compatible geocoding service.
    pub geocoder_base_url: String,
    /// Base URL of the OSRM-compatible routing service.
    pub osrm_base_url: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between geocoding requests during station ingest. Nominatim's
    /// usage policy allows at most one request per second.
    pub geocode_delay_ms: u64,
    /// Vehicle tank range assumed by the planner, in miles.
    pub max_range_miles: f64,
    /// Vehicle fuel economy assumed by the planner, miles per gallon.
    pub mpg: f64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("geocoder_base_url", &self.geocoder_base_url)
            .field("osrm_base_url", &self.osrm_base_url)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("geocode_delay_ms", &self.geocode_delay_ms)
            .field("max_range_miles", &self.max_range_miles)
            .field("mpg", &self.mpg)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
