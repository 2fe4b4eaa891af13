// ============================================================================
// REACTIVITY - Store raíz con dispatch + subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::state::{AppAction, RootState};

type Listener = Rc<dyn Fn(&RootState)>;

/// Identificador devuelto por `subscribe`, sirve para darse de baja
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Store de la aplicación: un único punto de lectura, dispatch y suscripción.
///
/// Clonar es barato y todos los clones comparten el mismo estado.
#[derive(Clone)]
pub struct AppStore {
    state: Rc<RefCell<Rc<RootState>>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Listener)>>>,
    next_id: Rc<Cell<u64>>,
    /// Acciones despachadas desde un listener, pendientes de reducir
    queue: Rc<RefCell<VecDeque<AppAction>>>,
    dispatching: Rc<Cell<bool>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        Self {
            state: Rc::new(RefCell::new(Rc::new(state))),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
            queue: Rc::new(RefCell::new(VecDeque::new())),
            dispatching: Rc::new(Cell::new(false)),
        }
    }

    /// Snapshot actual
    pub fn get_state(&self) -> Rc<RootState> {
        self.state.borrow().clone()
    }

    /// Leer un dato derivado del snapshot actual
    pub fn select<T>(&self, selector: impl FnOnce(&RootState) -> T) -> T {
        selector(&self.get_state())
    }

    /// Reducir la acción y notificar a los subscribers con el nuevo snapshot.
    ///
    /// Un dispatch hecho desde un listener se encola y se procesa cuando todos
    /// los listeners han visto el snapshot actual, así nadie se queda con uno
    /// ya reemplazado.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        self.queue.borrow_mut().push_back(action.into());
        if self.dispatching.replace(true) {
            return;
        }

        loop {
            let Some(action) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("📨 [DISPATCH] {}", action.type_name());
            }

            let next = Rc::new(self.get_state().reduce(action));
            *self.state.borrow_mut() = next.clone();

            // Copiar la lista: un listener puede suscribirse o darse de baja
            let listeners: Vec<Listener> = self
                .subscribers
                .borrow()
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            for listener in listeners {
                listener(&next);
            }
        }

        self.dispatching.set(false);
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&RootState) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AsyncEvent, ConstructorAction, OrderAction};
    use crate::testing::{bun, order, patty};

    #[test]
    fn dispatch_replaces_snapshot() {
        let store = AppStore::new();
        let before = store.get_state();

        store.dispatch(ConstructorAction::add_ingredient(bun()));

        let after = store.get_state();
        assert!(before.burger_constructor.bun.is_none());
        assert_eq!(after.burger_constructor.bun.as_ref().unwrap().server_id(), "bun-1");
    }

    #[test]
    fn clones_share_state() {
        let store = AppStore::new();
        let other = store.clone();

        other.dispatch(ConstructorAction::add_ingredient(patty()));

        assert_eq!(store.select(|s| s.burger_constructor.ingredients.len()), 1);
    }

    #[test]
    fn subscribers_see_new_snapshot_until_unsubscribed() {
        let store = AppStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = {
            let seen = seen.clone();
            store.subscribe(move |state| seen.borrow_mut().push(state.order.order_request))
        };

        store.dispatch(OrderAction::CreateOrder(AsyncEvent::Pending));
        store.dispatch(OrderAction::CreateOrder(AsyncEvent::Fulfilled(order(12345))));
        store.unsubscribe(id);
        store.dispatch(OrderAction::ClearOrderData);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn listener_can_dispatch_reentrantly() {
        let store = AppStore::new();
        {
            let inner = store.clone();
            store.subscribe(move |state| {
                if state.order.order_data.is_some() && !state.burger_constructor.is_empty() {
                    inner.dispatch(ConstructorAction::ClearConstructor);
                }
            });
        }

        store.dispatch(ConstructorAction::add_ingredient(patty()));
        store.dispatch(OrderAction::CreateOrder(AsyncEvent::Fulfilled(order(1))));

        assert!(store.get_state().burger_constructor.is_empty());
    }

    #[test]
    fn later_listeners_end_on_the_latest_snapshot() {
        let store = AppStore::new();
        {
            let inner = store.clone();
            store.subscribe(move |state| {
                if state.order.order_data.is_some() && !state.burger_constructor.is_empty() {
                    inner.dispatch(ConstructorAction::ClearConstructor);
                }
            });
        }
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            store.subscribe(move |state| {
                seen.borrow_mut().push(state.burger_constructor.ingredients.len())
            });
        }

        store.dispatch(ConstructorAction::add_ingredient(patty()));
        store.dispatch(OrderAction::CreateOrder(AsyncEvent::Fulfilled(order(1))));

        let actual = store.get_state().burger_constructor.ingredients.len();
        assert_eq!(actual, 0);
        assert_eq!(seen.borrow().last().copied(), Some(actual));
        // añadir, pedido, vaciado: en orden
        assert_eq!(*seen.borrow(), vec![1, 1, 0]);
    }

    #[test]
    fn nested_dispatches_run_in_order() {
        let store = AppStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let inner = store.clone();
            store.subscribe(move |state| {
                if state.burger_constructor.bun.is_some() && state.burger_constructor.ingredients.is_empty() {
                    inner.dispatch(ConstructorAction::add_ingredient(patty()));
                    inner.dispatch(ConstructorAction::add_ingredient(patty()));
                }
            });
        }
        {
            let seen = seen.clone();
            store.subscribe(move |state| {
                seen.borrow_mut().push(state.burger_constructor.ingredients.len())
            });
        }

        store.dispatch(ConstructorAction::add_ingredient(bun()));

        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert_eq!(store.get_state().burger_constructor.ingredients.len(), 2);

        // el store sigue aceptando dispatch normales después
        store.dispatch(ConstructorAction::ClearConstructor);
        assert!(store.get_state().burger_constructor.is_empty());
    }

    #[test]
    fn dispatch_log_names_the_action() {
        let action: AppAction = OrderAction::CreateOrder(AsyncEvent::Pending).into();
        assert_eq!(action.type_name(), "order/createOrder/pending");

        let action: AppAction = ConstructorAction::ClearConstructor.into();
        assert_eq!(action.type_name(), "burgerConstructor/clearConstructor");
    }
}
