use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Cookie donde vive el access token
    pub access_token_cookie: String,
    /// Clave de localStorage del refresh token
    pub refresh_token_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://norma.nomoreparties.space/api".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            access_token_cookie: "accessToken".to_string(),
            refresh_token_key: "refreshToken".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: option_env!("BURGER_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            access_token_cookie: option_env!("ACCESS_TOKEN_COOKIE")
                .map(str::to_string)
                .unwrap_or(defaults.access_token_cookie),
            refresh_token_key: option_env!("REFRESH_TOKEN_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.refresh_token_key),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log según configuración
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging && !self.is_production() {
            log::Level::Debug
        } else if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
