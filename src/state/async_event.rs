// ============================================================================
// ASYNC EVENT - Ciclo de vida de una operación de red
// ============================================================================

/// Fase de una operación asíncrona, entregada al reducer como una acción más
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncEvent<T> {
    Pending,
    Fulfilled(T),
    /// Mensaje del error, si lo trae
    Rejected(Option<String>),
}

impl<T> AsyncEvent<T> {
    /// Sufijo del tipo de acción (`pending`, `fulfilled`, `rejected`)
    pub fn phase(&self) -> &'static str {
        match self {
            AsyncEvent::Pending => "pending",
            AsyncEvent::Fulfilled(_) => "fulfilled",
            AsyncEvent::Rejected(_) => "rejected",
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        AsyncEvent::Rejected(Some(message.into()))
    }
}
