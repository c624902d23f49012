use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Coordinates of the hosted Supabase project backing the tracker.
///
/// All fields are optional at load time. The relay treats missing `url` or
/// `anon_key` as fatal at startup; the identity gate degrades to a stub.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseSettings {
    /// Base project URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: Option<String>,
    /// The public (anon) API key.
    pub anon_key: Option<String>,
    /// The privileged service-role key, used by the relay when present.
    pub service_role_key: Option<String>,
}

/// Bind address for the HTTP relay.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// The socket address the relay binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ConfigError::ValidationError(format!(
                    "invalid server address {}:{}",
                    self.host, self.port
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_settings_default_to_port_3000() {
        let server = ServerSettings::default();
        assert_eq!(server.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn bad_host_surfaces_a_validation_error() {
        let server = ServerSettings {
            host: "not a host".to_string(),
            port: 8080,
        };
        assert!(server.socket_addr().is_err());
    }
}
