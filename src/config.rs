use markbook_client::Credentials;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the records backend.
    pub base_url: String,
    /// Outbound request timeout, seconds.
    pub timeout_secs: u64,
}

/// How outbound fetches authenticate to the backend.
///
/// The credential values themselves are opaque here; they are minted out of
/// band (see the `markbook-token` binary) and supplied via the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub mode: AuthMode,
    #[serde(default)]
    pub service_token: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Machine-to-machine trust: a signed service token in a header.
    Service,
    /// A replayed user session: three cookies.
    Session,
}

impl Config {
    /// Loads `config/default.toml` (when present) layered with
    /// `MARKBOOK`-prefixed environment variables, e.g.
    /// `MARKBOOK__SERVER__PORT=8080`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("config/default.toml").exists() {
            builder = builder.add_source(config::File::with_name("config/default"));
        }

        builder = builder.add_source(config::Environment::with_prefix("MARKBOOK").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl AuthConfig {
    /// Builds the single credential variant selected by `mode`.
    ///
    /// Incomplete values are a startup error; requests never observe a
    /// half-configured credential.
    pub fn credentials(&self) -> Result<Credentials, config::ConfigError> {
        match self.mode {
            AuthMode::Service => {
                if self.service_token.is_empty() {
                    return Err(config::ConfigError::Message(
                        "auth.mode = \"service\" requires auth.service_token".to_string(),
                    ));
                }
                Ok(Credentials::ServiceBearer {
                    token: self.service_token.clone(),
                })
            }
            AuthMode::Session => {
                if self.access_token.is_empty()
                    || self.csrf_token.is_empty()
                    || self.refresh_token.is_empty()
                {
                    return Err(config::ConfigError::Message(
                        "auth.mode = \"session\" requires auth.access_token, auth.csrf_token \
                         and auth.refresh_token"
                            .to_string(),
                    ));
                }
                Ok(Credentials::SessionCookies {
                    access: self.access_token.clone(),
                    csrf: self.csrf_token.clone(),
                    refresh: self.refresh_token.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(mode: AuthMode) -> AuthConfig {
        AuthConfig {
            mode,
            service_token: String::new(),
            access_token: String::new(),
            csrf_token: String::new(),
            refresh_token: String::new(),
        }
    }

    #[test]
    fn service_mode_requires_the_token() {
        assert!(auth(AuthMode::Service).credentials().is_err());

        let mut config = auth(AuthMode::Service);
        config.service_token = "tok".to_string();
        assert!(matches!(
            config.credentials(),
            Ok(Credentials::ServiceBearer { .. })
        ));
    }

    #[test]
    fn session_mode_requires_all_three_cookies() {
        let mut config = auth(AuthMode::Session);
        config.access_token = "a".to_string();
        config.csrf_token = "c".to_string();
        assert!(config.credentials().is_err());

        config.refresh_token = "r".to_string();
        assert!(matches!(
            config.credentials(),
            Ok(Credentials::SessionCookies { .. })
        ));
    }
}
