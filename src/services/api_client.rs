// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// NO tiene lógica de negocio. Los viewmodels dependen del trait `BurgerApi`,
// `ApiClient` es la implementación real sobre gloo-net.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::models::{
    AuthResponse, Credentials, FeedResponse, Ingredient, LoginData, Order, OrderResponse,
    OrdersResponse, RegisterData, UpdateUserData, User, UserResponse,
};
use crate::services::{ApiError, CredentialSink};

/// Contrato de la API de Stellar Burgers que consume la capa de estado
#[async_trait(?Send)]
pub trait BurgerApi {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError>;
    async fn order_burger(&self, ingredients: &[String]) -> Result<OrderResponse, ApiError>;
    async fn get_feeds(&self) -> Result<FeedResponse, ApiError>;
    async fn get_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn get_order_by_number(&self, number: u64) -> Result<Vec<Order>, ApiError>;
    async fn register_user(&self, data: &RegisterData) -> Result<AuthResponse, ApiError>;
    async fn login_user(&self, data: &LoginData) -> Result<AuthResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn get_user(&self) -> Result<User, ApiError>;
    async fn update_user(&self, data: &UpdateUserData) -> Result<User, ApiError>;
}

#[derive(Deserialize)]
struct IngredientsResponse {
    data: Vec<Ingredient>,
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Patch,
}

/// Interpretar el cuerpo de una respuesta: error si no es 2xx o `success != true`
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok = (200..300).contains(&status);
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(ApiError::Server { status, message: None }),
        Err(e) => return Err(ApiError::Parse(e.to_string())),
    };

    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !ok || !success {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(ApiError::Server { status, message });
    }

    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Cliente API real (navegador)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    credentials: Rc<dyn CredentialSink>,
}

impl ApiClient {
    pub fn new(credentials: Rc<dyn CredentialSink>) -> Self {
        Self {
            base_url: CONFIG.api_url.clone(),
            credentials,
        }
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
        };
        builder.header("Content-Type", "application/json;charset=utf-8")
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let mut builder = self.builder(method, path);
        if authorized {
            let token = self.credentials.access_token().ok_or(ApiError::Unauthorized)?;
            builder = builder.header("authorization", &token);
        }

        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        decode_response(status, &text)
    }

    /// Petición autenticada; si el servidor responde `jwt expired`, refresca
    /// el par de tokens una vez y reintenta
    async fn send_authorized<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        match self.send(method, path, body, true).await {
            Err(e) if e.is_jwt_expired() => {
                log::info!("🔄 Access token caducado, refrescando...");
                self.refresh_token().await?;
                self.send(method, path, body, true).await
            }
            other => other,
        }
    }

    async fn refresh_token(&self) -> Result<(), ApiError> {
        let token = self.credentials.refresh_token().ok_or(ApiError::Unauthorized)?;
        let credentials: Credentials = self
            .send(Method::Post, "/auth/token", Some(&json!({ "token": token })), false)
            .await?;
        self.credentials.save(&credentials);
        log::info!("✅ Tokens refrescados");
        Ok(())
    }
}

#[async_trait(?Send)]
impl BurgerApi for ApiClient {
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ApiError> {
        let response: IngredientsResponse = self.send(Method::Get, "/ingredients", None, false).await?;
        Ok(response.data)
    }

    async fn order_burger(&self, ingredients: &[String]) -> Result<OrderResponse, ApiError> {
        let body = json!({ "ingredients": ingredients });
        self.send_authorized(Method::Post, "/orders", Some(&body)).await
    }

    async fn get_feeds(&self) -> Result<FeedResponse, ApiError> {
        self.send(Method::Get, "/orders/all", None, false).await
    }

    async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response: OrdersResponse = self.send_authorized(Method::Get, "/orders", None).await?;
        Ok(response.orders)
    }

    async fn get_order_by_number(&self, number: u64) -> Result<Vec<Order>, ApiError> {
        let path = format!("/orders/{}", number);
        let response: OrdersResponse = self.send(Method::Get, &path, None, false).await?;
        Ok(response.orders)
    }

    async fn register_user(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.send(Method::Post, "/auth/register", Some(&body), false).await
    }

    async fn login_user(&self, data: &LoginData) -> Result<AuthResponse, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.send(Method::Post, "/auth/login", Some(&body), false).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let token = self.credentials.refresh_token().ok_or(ApiError::Unauthorized)?;
        let _: Value = self
            .send(Method::Post, "/auth/logout", Some(&json!({ "token": token })), false)
            .await?;
        Ok(())
    }

    async fn get_user(&self) -> Result<User, ApiError> {
        let response: UserResponse = self.send_authorized(Method::Get, "/auth/user", None).await?;
        Ok(response.user)
    }

    async fn update_user(&self, data: &UpdateUserData) -> Result<User, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Parse(e.to_string()))?;
        let response: UserResponse = self
            .send_authorized(Method::Patch, "/auth/user", Some(&body))
            .await?;
        Ok(response.user)
    }
}
