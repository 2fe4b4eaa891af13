// Utils compartidos

pub mod cookie;
pub mod i18n;
pub mod storage;

pub use i18n::{auth_error_message, t, AuthFlow, Message};
