// ============================================================================
// APP STATE - Estado global (composición de los cinco slices)
// ============================================================================

use std::rc::Rc;

use crate::state::{
    ConstructorAction, ConstructorState, FeedAction, FeedState, IngredientsAction,
    IngredientsState, OrderAction, OrderState, UserAction, UserState,
};

/// Snapshot inmutable de toda la aplicación.
///
/// Cada slice va en su propio `Rc`: un dispatch solo reemplaza el del slice
/// afectado y el resto se comparte con el snapshot anterior.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub ingredients: Rc<IngredientsState>,
    pub burger_constructor: Rc<ConstructorState>,
    pub order: Rc<OrderState>,
    pub user: Rc<UserState>,
    pub feed: Rc<FeedState>,
}

/// Acción dirigida a un único slice
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Ingredients(IngredientsAction),
    Constructor(ConstructorAction),
    Order(OrderAction),
    User(UserAction),
    Feed(FeedAction),
}

impl AppAction {
    /// Tipo de la acción, p.ej. `order/createOrder/fulfilled` (para logs)
    pub fn type_name(&self) -> String {
        match self {
            AppAction::Ingredients(a) => a.type_name(),
            AppAction::Constructor(a) => a.type_name(),
            AppAction::Order(a) => a.type_name(),
            AppAction::User(a) => a.type_name(),
            AppAction::Feed(a) => a.type_name(),
        }
    }
}

impl From<IngredientsAction> for AppAction {
    fn from(action: IngredientsAction) -> Self {
        AppAction::Ingredients(action)
    }
}

impl From<ConstructorAction> for AppAction {
    fn from(action: ConstructorAction) -> Self {
        AppAction::Constructor(action)
    }
}

impl From<OrderAction> for AppAction {
    fn from(action: OrderAction) -> Self {
        AppAction::Order(action)
    }
}

impl From<UserAction> for AppAction {
    fn from(action: UserAction) -> Self {
        AppAction::User(action)
    }
}

impl From<FeedAction> for AppAction {
    fn from(action: FeedAction) -> Self {
        AppAction::Feed(action)
    }
}

impl RootState {
    /// Reducer raíz: delega en el slice dueño de la acción
    pub fn reduce(&self, action: AppAction) -> RootState {
        let mut next = self.clone();
        match action {
            AppAction::Ingredients(a) => next.ingredients = Rc::new(self.ingredients.reduce(a)),
            AppAction::Constructor(a) => {
                next.burger_constructor = Rc::new(self.burger_constructor.reduce(a))
            }
            AppAction::Order(a) => next.order = Rc::new(self.order.reduce(a)),
            AppAction::User(a) => next.user = Rc::new(self.user.reduce(a)),
            AppAction::Feed(a) => next.feed = Rc::new(self.feed.reduce(a)),
        }
        next
    }
}
