use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Start the patient roster with the demo patient instead of empty.
    pub seed_demo_patient: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_demo_patient: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("CLINIC_HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("CLINIC_HOST '{}' is not an IP address, using {}", raw, defaults.host);
                defaults.host
            }),
            Err(_) => defaults.host,
        };

        let port = match env::var("CLINIC_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("CLINIC_PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => defaults.port,
        };

        let seed_demo_patient = match env::var("CLINIC_SEED_DEMO_PATIENT") {
            Ok(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("CLINIC_SEED_DEMO_PATIENT '{}' is not a boolean, using default", raw);
                defaults.seed_demo_patient
            }),
            Err(_) => defaults.seed_demo_patient,
        };

        Self {
            host,
            port,
            seed_demo_patient,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_all_interfaces_on_3000() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert!(config.seed_demo_patient);
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
