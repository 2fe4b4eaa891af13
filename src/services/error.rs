use thiserror::Error;

/// Error de una llamada a la API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// Respuesta no-2xx o `success: false`; `message` es el campo del cuerpo
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("sin mensaje"))]
    Server { status: u16, message: Option<String> },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No access token")]
    Unauthorized,
}

impl ApiError {
    /// Mensaje legible, si lo hay. `None` hace que el slice use su texto por defecto.
    pub fn message(&self) -> Option<String> {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => Some(other.to_string()),
        }
    }

    pub fn is_jwt_expired(&self) -> bool {
        matches!(self, ApiError::Server { message: Some(m), .. } if m == "jwt expired")
    }
}
