// ============================================================================
// TESTING - Fixtures compartidos + API en memoria
// ============================================================================

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::models::{
    AuthResponse, ConstructorIngredient, Credentials, FeedResponse, Ingredient, IngredientType,
    LoginData, Order, OrderResponse, OrderStatus, RegisterData, UpdateUserData, User,
};
use crate::services::{ApiError, BurgerApi};

fn ingredient(id: &str, name: &str, kind: IngredientType, price: u32) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        proteins: 80,
        fat: 24,
        carbohydrates: 53,
        calories: 420,
        price,
        image: format!("https://code.s3.yandex.net/react/code/{}.png", id),
        image_large: format!("https://code.s3.yandex.net/react/code/{}-large.png", id),
        image_mobile: format!("https://code.s3.yandex.net/react/code/{}-mobile.png", id),
    }
}

pub fn bun() -> Ingredient {
    ingredient("bun-1", "Краторная булка N-200i", IngredientType::Bun, 1255)
}

pub fn other_bun() -> Ingredient {
    ingredient("bun-2", "Флюоресцентная булка R2-D3", IngredientType::Bun, 988)
}

pub fn patty() -> Ingredient {
    ingredient("main-1", "Биокотлета из марсианской Магнолии", IngredientType::Main, 424)
}

pub fn sauce() -> Ingredient {
    ingredient("sauce-1", "Соус Spicy-X", IngredientType::Sauce, 90)
}

pub fn catalog() -> Vec<Ingredient> {
    vec![bun(), other_bun(), patty(), sauce()]
}

/// Entrada del constructor con identidad de instancia fija
pub fn item(instance_id: &str, ingredient: Ingredient) -> ConstructorIngredient {
    ConstructorIngredient {
        instance_id: instance_id.to_string(),
        ingredient,
    }
}

pub fn order_with(ids: &[&str]) -> Order {
    let created_at = Utc.with_ymd_and_hms(2024, 4, 19, 9, 3, 52).unwrap();
    Order {
        id: format!("order-{}", ids.len()),
        status: OrderStatus::Done,
        name: "Space бургер".to_string(),
        created_at,
        updated_at: created_at,
        number: 1,
        ingredients: ids.iter().map(|id| id.to_string()).collect(),
    }
}

pub fn order(number: u64) -> Order {
    Order {
        id: format!("order-{}", number),
        number,
        ..order_with(&["bun-1", "main-1", "bun-1"])
    }
}

pub fn feed() -> FeedResponse {
    FeedResponse {
        orders: vec![order(101), order(102)],
        total: 38109,
        total_today: 107,
    }
}

pub fn user() -> User {
    User {
        email: "pilot@stellar.space".to_string(),
        name: "Pilot".to_string(),
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        access_token: "Bearer access-1".to_string(),
        refresh_token: "refresh-1".to_string(),
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::Server {
        status: 403,
        message: Some(message.to_string()),
    }
}

/// `BurgerApi` en memoria: cada endpoint devuelve el resultado configurado
/// y registra la llamada
pub struct FakeApi {
    pub ingredients: RefCell<Result<Vec<Ingredient>, ApiError>>,
    pub order: RefCell<Result<OrderResponse, ApiError>>,
    pub feeds: RefCell<Result<FeedResponse, ApiError>>,
    pub user_orders: RefCell<Result<Vec<Order>, ApiError>>,
    pub order_by_number: RefCell<Result<Vec<Order>, ApiError>>,
    pub auth: RefCell<Result<AuthResponse, ApiError>>,
    pub logout: RefCell<Result<(), ApiError>>,
    pub profile: RefCell<Result<User, ApiError>>,
    pub calls: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<Vec<String>>>,
    pub updates: RefCell<Vec<UpdateUserData>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            ingredients: RefCell::new(Ok(catalog())),
            order: RefCell::new(Ok(OrderResponse {
                name: "Space бургер".to_string(),
                order: order(12345),
            })),
            feeds: RefCell::new(Ok(feed())),
            user_orders: RefCell::new(Ok(vec![order(7)])),
            order_by_number: RefCell::new(Ok(vec![order(101)])),
            auth: RefCell::new(Ok(AuthResponse {
                credentials: credentials(),
                user: user(),
            })),
            logout: RefCell::new(Ok(())),
            profile: RefCell::new(Ok(user())),
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
            updates: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BurgerApi for FakeApi {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        self.record("get_ingredients");
        self.ingredients.borrow().clone()
    }

    async fn order_burger(&self, ingredients: &[String]) -> Result<OrderResponse, ApiError> {
        self.record("order_burger");
        self.submitted.borrow_mut().push(ingredients.to_vec());
        self.order.borrow().clone()
    }

    async fn get_feeds(&self) -> Result<FeedResponse, ApiError> {
        self.record("get_feeds");
        self.feeds.borrow().clone()
    }

    async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.record("get_orders");
        self.user_orders.borrow().clone()
    }

    async fn get_order_by_number(&self, number: u64) -> Result<Vec<Order>, ApiError> {
        self.record(&format!("get_order_by_number:{}", number));
        self.order_by_number.borrow().clone()
    }

    async fn register_user(&self, _data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.record("register_user");
        self.auth.borrow().clone()
    }

    async fn login_user(&self, _data: &LoginData) -> Result<AuthResponse, ApiError> {
        self.record("login_user");
        self.auth.borrow().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout.borrow().clone()
    }

    async fn get_user(&self) -> Result<User, ApiError> {
        self.record("get_user");
        self.profile.borrow().clone()
    }

    async fn update_user(&self, data: &UpdateUserData) -> Result<User, ApiError> {
        self.record("update_user");
        self.updates.borrow_mut().push(data.clone());
        self.profile.borrow().clone()
    }
}
