// ============================================================================
// CONSTRUCTOR VIEWMODEL - Edición de la hamburguesa
// ============================================================================
// Los movimientos se validan aquí antes del dispatch; el reducer solo ve
// índices correctos.
// ============================================================================

use crate::models::Ingredient;
use crate::state::selectors::constructor_price;
use crate::state::{AppStore, ConstructorAction, ConstructorError};

pub struct ConstructorViewModel {
    store: AppStore,
}

impl ConstructorViewModel {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn add_ingredient(&self, ingredient: Ingredient) {
        log::debug!("➕ {} ({:?})", ingredient.name, ingredient.kind);
        self.store
            .dispatch(ConstructorAction::add_ingredient(ingredient));
    }

    pub fn remove_ingredient(&self, instance_id: &str) {
        self.store
            .dispatch(ConstructorAction::RemoveIngredient(instance_id.to_string()));
    }

    /// Mover un relleno; ambos índices deben existir
    pub fn move_ingredient(&self, from_index: usize, to_index: usize) -> Result<(), ConstructorError> {
        self.store
            .select(|state| state.burger_constructor.move_ingredient(from_index, to_index))?;
        self.store
            .dispatch(ConstructorAction::MoveIngredient { from_index, to_index });
        Ok(())
    }

    /// Subir una posición. En la primera posición no hace nada.
    pub fn move_up(&self, index: usize) -> Result<(), ConstructorError> {
        self.check_index(index)?;
        match index.checked_sub(1) {
            Some(target) => self.move_ingredient(index, target),
            None => Ok(()),
        }
    }

    /// Bajar una posición. En la última posición no hace nada.
    pub fn move_down(&self, index: usize) -> Result<(), ConstructorError> {
        let len = self.check_index(index)?;
        if index + 1 == len {
            return Ok(());
        }
        self.move_ingredient(index, index + 1)
    }

    pub fn clear(&self) {
        self.store.dispatch(ConstructorAction::ClearConstructor);
    }

    pub fn total_price(&self) -> u64 {
        self.store
            .select(|state| constructor_price(&state.burger_constructor))
    }

    fn check_index(&self, index: usize) -> Result<usize, ConstructorError> {
        let len = self
            .store
            .select(|state| state.burger_constructor.ingredients.len());
        if index >= len {
            return Err(ConstructorError::IndexOutOfBounds { index, len });
        }
        Ok(len)
    }
}
