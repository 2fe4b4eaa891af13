pub mod error;
pub mod credentials;
pub mod api_client;

pub use error::ApiError;
pub use credentials::{BrowserCredentials, CredentialSink, MemoryCredentials};
pub use api_client::{ApiClient, BurgerApi};
