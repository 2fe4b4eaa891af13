// ============================================================================
// ORDER STATE - Último envío de pedido
// ============================================================================

use crate::models::Order;
use crate::state::AsyncEvent;
use crate::utils::{t, Message};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderState {
    pub order_request: bool,
    pub order_data: Option<Order>,
    pub error: Option<String>,
}

/// Vista de máquina de estados sobre los flags del slice
#[derive(Debug, Clone, PartialEq)]
pub enum OrderPhase {
    Idle,
    Submitting,
    Fulfilled { number: u64, name: String },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    CreateOrder(AsyncEvent<Order>),
    /// Cerrar el modal de confirmación
    ClearOrderData,
}

impl OrderAction {
    pub fn type_name(&self) -> String {
        match self {
            OrderAction::CreateOrder(event) => format!("order/createOrder/{}", event.phase()),
            OrderAction::ClearOrderData => "order/clearOrderData".to_string(),
        }
    }
}

impl OrderState {
    pub fn phase(&self) -> OrderPhase {
        if self.order_request {
            return OrderPhase::Submitting;
        }
        if let Some(order) = &self.order_data {
            return OrderPhase::Fulfilled {
                number: order.number,
                name: order.name.clone(),
            };
        }
        match &self.error {
            Some(message) => OrderPhase::Failed(message.clone()),
            None => OrderPhase::Idle,
        }
    }

    pub fn reduce(&self, action: OrderAction) -> Self {
        let mut next = self.clone();
        match action {
            OrderAction::CreateOrder(AsyncEvent::Pending) => {
                next.order_request = true;
                next.error = None;
            }
            OrderAction::CreateOrder(AsyncEvent::Fulfilled(order)) => {
                next.order_request = false;
                next.order_data = Some(order);
                next.error = None;
            }
            OrderAction::CreateOrder(AsyncEvent::Rejected(message)) => {
                next.order_request = false;
                next.error =
                    Some(message.unwrap_or_else(|| t(Message::OrderCreateFailed).to_string()));
            }
            OrderAction::ClearOrderData => {
                next.order_data = None;
                next.error = None;
            }
        }
        next
    }
}
