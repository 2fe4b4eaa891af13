// ============================================================================
// CATALOG VIEWMODEL - Carga del catálogo de ingredientes
// ============================================================================

use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{Ingredient, IngredientType};
use crate::services::BurgerApi;
use crate::state::selectors::ingredient_counts;
use crate::state::{AppStore, AsyncEvent, IngredientsAction};
use crate::utils::{t, Message};

pub struct CatalogViewModel {
    store: AppStore,
    api: Rc<dyn BurgerApi>,
}

impl CatalogViewModel {
    pub fn new(store: AppStore, api: Rc<dyn BurgerApi>) -> Self {
        Self { store, api }
    }

    /// Descargar el catálogo completo y reemplazar el slice
    pub async fn fetch_ingredients(&self) -> Result<(), String> {
        log::info!("🍔 Cargando ingredientes...");
        self.store
            .dispatch(IngredientsAction::FetchIngredients(AsyncEvent::Pending));

        match self.api.get_ingredients().await {
            Ok(ingredients) => {
                log::info!("✅ {} ingredientes cargados", ingredients.len());
                self.store
                    .dispatch(IngredientsAction::FetchIngredients(AsyncEvent::Fulfilled(ingredients)));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Error cargando ingredientes: {}", e);
                let message = e.message();
                self.store.dispatch(IngredientsAction::FetchIngredients(AsyncEvent::Rejected(
                    message.clone(),
                )));
                Err(message.unwrap_or_else(|| t(Message::IngredientsLoadFailed).to_string()))
            }
        }
    }

    /// Ingredientes de una pestaña (pan, relleno o salsa), en orden del servidor
    pub fn by_kind(&self, kind: IngredientType) -> Vec<Ingredient> {
        self.store.select(|state| {
            state
                .ingredients
                .ingredients
                .iter()
                .filter(|ingredient| ingredient.kind == kind)
                .cloned()
                .collect()
        })
    }

    /// Contador por tarjeta: cuántas veces está cada ingrediente en el constructor
    pub fn counts(&self) -> HashMap<String, u32> {
        self.store
            .select(|state| ingredient_counts(&state.burger_constructor))
    }
}
