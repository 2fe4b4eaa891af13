// ============================================================================
// FEED VIEWMODEL - Feed público e historial del usuario
// ============================================================================

use std::rc::Rc;

use crate::services::BurgerApi;
use crate::state::{AppStore, AsyncEvent, FeedAction};
use crate::utils::{t, Message};

#[derive(Clone)]
pub struct FeedViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
}

impl FeedViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>) -> Self {
        Self { store, api }
    }

    pub async fn fetch_feeds(&self) -> Result<(), String> {
        log::info!("📰 Cargando feed de pedidos...");
        self.store.dispatch(FeedAction::FetchFeeds(AsyncEvent::Pending));

        match self.api.get_feeds().await {
            Ok(feed) => {
                log::info!("✅ Feed: {} pedidos (hoy {})", feed.total, feed.total_today);
                self.store
                    .dispatch(FeedAction::FetchFeeds(AsyncEvent::Fulfilled(feed)));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando feed: {}", e);
                let message = e.message();
                self.store
                    .dispatch(FeedAction::FetchFeeds(AsyncEvent::Rejected(message.clone())));
                Err(message.unwrap_or_else(|| t(Message::FeedLoadFailed).to_string()))
            }
        }
    }

    /// Historial propio (requiere sesión)
    pub async fn fetch_user_orders(&self) -> Result<(), String> {
        log::info!("📋 Cargando pedidos del usuario...");
        self.store
            .dispatch(FeedAction::FetchUserOrders(AsyncEvent::Pending));

        match self.api.get_orders().await {
            Ok(orders) => {
                log::info!("✅ {} pedidos del usuario", orders.len());
                self.store
                    .dispatch(FeedAction::FetchUserOrders(AsyncEvent::Fulfilled(orders)));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando pedidos del usuario: {}", e);
                let message = e.message();
                self.store.dispatch(FeedAction::FetchUserOrders(AsyncEvent::Rejected(
                    message.clone(),
                )));
                Err(message.unwrap_or_else(|| t(Message::UserOrdersLoadFailed).to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Order;
    use crate::services::ApiError;
    use crate::testing::{order, FakeApi};
    use futures::executor::block_on;

    fn numbers(orders: &[Order]) -> Vec<u64> {
        orders.iter().map(|o| o.number).collect()
    }

    #[test]
    fn both_fetches_keep_their_own_data() {
        let store = AppStore::new();
        let api = Rc::new(FakeApi::default());
        let vm = FeedViewModel::new(store.clone(), api.clone());

        block_on(vm.fetch_feeds()).unwrap();
        block_on(vm.fetch_user_orders()).unwrap();

        let feed = store.get_state().feed.clone();
        assert_eq!(numbers(&feed.orders), vec![101, 102]);
        assert_eq!(numbers(&feed.user_orders), vec![7]);
        assert_eq!(feed.total, 38109);
        assert_eq!(feed.total_today, 107);

        *api.feeds.borrow_mut() = Err(ApiError::Server { status: 500, message: None });
        let result = block_on(vm.fetch_feeds());

        assert_eq!(result, Err("Ошибка при загрузке ленты заказов".to_string()));
        let feed = store.get_state().feed.clone();
        assert_eq!(numbers(&feed.orders), vec![101, 102]);
        assert_eq!(numbers(&feed.user_orders), vec![7]);
        assert!(!feed.is_loading);
    }

    #[test]
    fn user_orders_failure_uses_shared_error() {
        let store = AppStore::new();
        let api = Rc::new(FakeApi::default());
        *api.user_orders.borrow_mut() = Err(ApiError::Unauthorized);
        let vm = FeedViewModel::new(store.clone(), api);

        assert!(block_on(vm.fetch_user_orders()).is_err());
        assert_eq!(
            store.get_state().feed.error.as_deref(),
            Some("No access token")
        );
    }

    #[test]
    fn later_response_wins() {
        let store = AppStore::new();
        let api = Rc::new(FakeApi::default());
        let vm = FeedViewModel::new(store.clone(), api.clone());

        block_on(vm.fetch_feeds()).unwrap();
        api.feeds.borrow_mut().as_mut().unwrap().orders = vec![order(300)];
        block_on(vm.fetch_feeds()).unwrap();

        assert_eq!(numbers(&store.get_state().feed.orders), vec![300]);
    }
}
