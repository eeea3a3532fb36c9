use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub static_dir: String,
    pub max_body_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("APPGEN_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid APPGEN_HOST: {e}"))?;

        let port: u16 = env_or("APPGEN_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid APPGEN_PORT: {e}"))?;

        let log_level = env_or("APPGEN_LOG_LEVEL", "info");

        let static_dir = env_or("APPGEN_STATIC_DIR", "static");

        let max_body_size: usize = env_or("APPGEN_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid APPGEN_MAX_BODY_SIZE: {e}"))?;

        Ok(Config {
            host,
            port,
            log_level,
            static_dir,
            max_body_size,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            log_level: "info".to_string(),
            static_dir: "static".to_string(),
            max_body_size: 65_536,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
