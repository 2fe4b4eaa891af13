// ============================================================================
// FEED STATE - Feed público + historial del usuario
// ============================================================================

use crate::models::{FeedResponse, Order};
use crate::state::AsyncEvent;
use crate::utils::{t, Message};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub orders: Vec<Order>,
    pub user_orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
    /// Solo refleja el fetch del feed público
    pub is_loading: bool,
    /// Compartido por ambos fetches
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    FetchFeeds(AsyncEvent<FeedResponse>),
    FetchUserOrders(AsyncEvent<Vec<Order>>),
}

impl FeedAction {
    pub fn type_name(&self) -> String {
        match self {
            FeedAction::FetchFeeds(e) => format!("feed/fetchFeeds/{}", e.phase()),
            FeedAction::FetchUserOrders(e) => format!("feed/fetchUserOrders/{}", e.phase()),
        }
    }
}

impl FeedState {
    pub fn reduce(&self, action: FeedAction) -> Self {
        let mut next = self.clone();
        match action {
            FeedAction::FetchFeeds(AsyncEvent::Pending) => {
                next.is_loading = true;
                next.error = None;
            }
            FeedAction::FetchFeeds(AsyncEvent::Fulfilled(feed)) => {
                next.is_loading = false;
                next.orders = feed.orders;
                next.total = feed.total;
                next.total_today = feed.total_today;
            }
            FeedAction::FetchFeeds(AsyncEvent::Rejected(message)) => {
                next.is_loading = false;
                next.error = Some(message.unwrap_or_else(|| t(Message::FeedLoadFailed).to_string()));
            }
            FeedAction::FetchUserOrders(AsyncEvent::Pending) => {
                next.error = None;
            }
            FeedAction::FetchUserOrders(AsyncEvent::Fulfilled(orders)) => {
                next.user_orders = orders;
            }
            FeedAction::FetchUserOrders(AsyncEvent::Rejected(message)) => {
                next.error =
                    Some(message.unwrap_or_else(|| t(Message::UserOrdersLoadFailed).to_string()));
            }
        }
        next
    }
}
