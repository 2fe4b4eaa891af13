pub mod catalog_viewmodel;
pub mod constructor_viewmodel;
pub mod order_viewmodel;
pub mod user_viewmodel;
pub mod feed_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
pub use constructor_viewmodel::ConstructorViewModel;
pub use order_viewmodel::{OrderAttempt, OrderViewModel};
pub use user_viewmodel::UserViewModel;
pub use feed_viewmodel::FeedViewModel;
