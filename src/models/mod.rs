pub mod ingredient;
pub mod order;
pub mod auth;

pub use ingredient::{ConstructorIngredient, Ingredient, IngredientType};
pub use order::{FeedResponse, Order, OrderResponse, OrderStatus, OrdersResponse};
pub use auth::{
    AuthResponse, Credentials, LoginData, ProfileForm, RegisterData, UpdateUserData, User,
    UserResponse,
};
