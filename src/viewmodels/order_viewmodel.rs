// ============================================================================
// ORDER VIEWMODEL - Envío de pedidos + detalle por número
// ============================================================================
// Coordinador entre slices: comprueba pan/sesión antes de enviar, y tras un
// pedido correcto vacía el constructor y refresca el feed.
// ============================================================================

use std::rc::Rc;

use crate::models::Order;
use crate::services::BurgerApi;
use crate::state::selectors::{order_info, order_ingredient_ids, OrderInfo};
use crate::state::{AppStore, AsyncEvent, ConstructorAction, OrderAction};
use crate::utils::{t, Message};
use crate::viewmodels::FeedViewModel;

/// Resultado de pulsar "Оформить заказ"
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAttempt {
    /// Sin pan no se puede pedir
    MissingBun,
    AlreadySubmitting,
    /// La UI debe llevar al login
    LoginRequired,
    Placed(u64),
    Failed(String),
}

pub struct OrderViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
    feed: FeedViewModel,
}

impl OrderViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>) -> Self {
        let feed = FeedViewModel::new(store.clone(), api.clone());
        Self { store, api, feed }
    }

    /// Enviar `ingredients` tal cual (pan, rellenos..., pan) y registrar el ciclo de vida
    pub async fn create_order(&self, ingredients: Vec<String>) -> Result<Order, String> {
        log::info!("🧾 Enviando pedido con {} ingredientes...", ingredients.len());
        self.store
            .dispatch(OrderAction::CreateOrder(AsyncEvent::Pending));

        match self.api.order_burger(&ingredients).await {
            Ok(response) => {
                let mut order = response.order;
                if order.name.is_empty() {
                    order.name = response.name;
                }
                log::info!("✅ Pedido #{} creado: {}", order.number, order.name);
                self.store
                    .dispatch(OrderAction::CreateOrder(AsyncEvent::Fulfilled(order.clone())));
                Ok(order)
            }
            Err(e) => {
                log::error!("❌ Error creando pedido: {}", e);
                let message = e.message();
                self.store
                    .dispatch(OrderAction::CreateOrder(AsyncEvent::Rejected(message.clone())));
                Err(message.unwrap_or_else(|| t(Message::OrderCreateFailed).to_string()))
            }
        }
    }

    /// Flujo completo del botón de pedido
    pub async fn place_order(&self) -> OrderAttempt {
        let state = self.store.get_state();
        if state.order.order_request {
            log::warn!("⚠️ Ya hay un pedido en curso");
            return OrderAttempt::AlreadySubmitting;
        }
        let Some(ingredients) = order_ingredient_ids(&state.burger_constructor) else {
            return OrderAttempt::MissingBun;
        };
        if !state.user.is_auth {
            log::info!("🔐 Pedido sin sesión, redirigiendo a login");
            return OrderAttempt::LoginRequired;
        }

        match self.create_order(ingredients).await {
            Ok(order) => {
                self.store.dispatch(ConstructorAction::ClearConstructor);
                if let Err(e) = self.feed.fetch_feeds().await {
                    log::warn!("⚠️ Feed no refrescado tras el pedido: {}", e);
                }
                OrderAttempt::Placed(order.number)
            }
            Err(message) => OrderAttempt::Failed(message),
        }
    }

    /// Cerrar el modal de confirmación
    pub fn close_order_modal(&self) {
        self.store.dispatch(OrderAction::ClearOrderData);
    }

    /// Detalle de un pedido por número, expandido contra el catálogo.
    ///
    /// Busca primero en el feed y en el historial ya cargados; si no está, lo
    /// pide al servidor. `None` mientras el catálogo está vacío o si el pedido
    /// no existe. No se guarda en ningún slice.
    pub async fn load_order_info(&self, number: u64) -> Result<Option<OrderInfo>, String> {
        let state = self.store.get_state();
        if state.ingredients.ingredients.is_empty() {
            return Ok(None);
        }

        let cached = state
            .feed
            .orders
            .iter()
            .chain(state.feed.user_orders.iter())
            .find(|order| order.number == number)
            .cloned();

        let order = match cached {
            Some(order) => Some(order),
            None => {
                log::info!("🔎 Pedido #{} no está en el feed, pidiéndolo al servidor", number);
                let orders = self
                    .api
                    .get_order_by_number(number)
                    .await
                    .map_err(|e| e.to_string())?;
                orders.into_iter().next()
            }
        };

        Ok(order.and_then(|order| order_info(&order, &state.ingredients.ingredients)))
    }
}
