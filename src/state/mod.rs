// ============================================================================
// STATE MODULE - Slices inmutables + store raíz con notificaciones
// ============================================================================

pub mod async_event;
pub mod ingredients_state;
pub mod constructor_state;
pub mod order_state;
pub mod user_state;
pub mod feed_state;
pub mod app_state;
pub mod reactivity;
pub mod selectors;

pub use async_event::*;
pub use ingredients_state::*;
pub use constructor_state::*;
pub use order_state::*;
pub use user_state::*;
pub use feed_state::*;
pub use app_state::*;
pub use reactivity::*;
