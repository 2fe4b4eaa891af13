// ============================================================================
// INGREDIENTS STATE - Catálogo de ingredientes
// ============================================================================

use crate::models::Ingredient;
use crate::state::AsyncEvent;
use crate::utils::{t, Message};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IngredientsState {
    pub ingredients: Vec<Ingredient>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IngredientsAction {
    FetchIngredients(AsyncEvent<Vec<Ingredient>>),
}

impl IngredientsAction {
    pub fn type_name(&self) -> String {
        match self {
            IngredientsAction::FetchIngredients(event) => {
                format!("ingredients/fetchIngredients/{}", event.phase())
            }
        }
    }
}

impl IngredientsState {
    /// Buscar un ingrediente por identidad del servidor
    pub fn find(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn reduce(&self, action: IngredientsAction) -> Self {
        let mut next = self.clone();
        match action {
            IngredientsAction::FetchIngredients(AsyncEvent::Pending) => {
                next.is_loading = true;
                next.error = None;
            }
            IngredientsAction::FetchIngredients(AsyncEvent::Fulfilled(ingredients)) => {
                next.is_loading = false;
                next.ingredients = ingredients;
            }
            IngredientsAction::FetchIngredients(AsyncEvent::Rejected(message)) => {
                next.is_loading = false;
                next.error =
                    Some(message.unwrap_or_else(|| t(Message::IngredientsLoadFailed).to_string()));
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bun, catalog};

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let state = IngredientsState {
            error: Some("old".to_string()),
            ..Default::default()
        };

        let state = state.reduce(IngredientsAction::FetchIngredients(AsyncEvent::Pending));

        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn fulfilled_replaces_catalog() {
        let state = IngredientsState {
            ingredients: vec![bun()],
            is_loading: true,
            error: None,
        };

        let state =
            state.reduce(IngredientsAction::FetchIngredients(AsyncEvent::Fulfilled(catalog())));

        assert!(!state.is_loading);
        assert_eq!(state.ingredients, catalog());
        assert!(state.find("sauce-1").is_some());
    }

    #[test]
    fn rejected_keeps_server_message() {
        let state = IngredientsState::default().reduce(IngredientsAction::FetchIngredients(
            AsyncEvent::rejected("Failed to fetch"),
        ));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn rejected_without_message_uses_fallback() {
        let state = IngredientsState::default()
            .reduce(IngredientsAction::FetchIngredients(AsyncEvent::Rejected(None)));

        assert_eq!(state.error.as_deref(), Some("Ошибка при загрузке ингредиентов"));
    }
}
