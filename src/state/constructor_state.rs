// ============================================================================
// CONSTRUCTOR STATE - Hamburguesa en construcción
// ============================================================================
// Un hueco para el pan + lista ordenada de rellenos. Cada entrada lleva su
// propia identidad de instancia; el precio NO se guarda aquí (ver selectors).
// ============================================================================

use crate::models::{ConstructorIngredient, Ingredient};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructorError {
    #[error("índice {index} fuera de rango (longitud {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConstructorState {
    pub bun: Option<ConstructorIngredient>,
    pub ingredients: Vec<ConstructorIngredient>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstructorAction {
    AddIngredient(ConstructorIngredient),
    RemoveIngredient(String),
    MoveIngredient { from_index: usize, to_index: usize },
    ClearConstructor,
}

impl ConstructorAction {
    /// Crear la acción de añadir, generando la identidad de instancia aquí
    /// para que el reducer siga siendo determinista
    pub fn add_ingredient(ingredient: Ingredient) -> Self {
        ConstructorAction::AddIngredient(ConstructorIngredient::new(ingredient))
    }

    pub fn type_name(&self) -> String {
        let name = match self {
            ConstructorAction::AddIngredient(_) => "addIngredient",
            ConstructorAction::RemoveIngredient(_) => "removeIngredient",
            ConstructorAction::MoveIngredient { .. } => "moveIngredient",
            ConstructorAction::ClearConstructor => "clearConstructor",
        };
        format!("burgerConstructor/{}", name)
    }
}

impl ConstructorState {
    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.ingredients.is_empty()
    }

    /// Pan: reemplaza el actual. Resto: se añade al final.
    pub fn with_ingredient(&self, item: ConstructorIngredient) -> Self {
        let mut next = self.clone();
        if item.ingredient.is_bun() {
            next.bun = Some(item);
        } else {
            next.ingredients.push(item);
        }
        next
    }

    /// Quitar el relleno con esa identidad de instancia (no-op si no existe)
    pub fn without_ingredient(&self, instance_id: &str) -> Self {
        let mut next = self.clone();
        next.ingredients.retain(|item| item.instance_id != instance_id);
        next
    }

    /// Mover el relleno de `from_index` a `to_index`, desplazando los intermedios
    pub fn move_ingredient(&self, from_index: usize, to_index: usize) -> Result<Self, ConstructorError> {
        let len = self.ingredients.len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(ConstructorError::IndexOutOfBounds { index, len });
            }
        }

        let mut next = self.clone();
        if from_index != to_index {
            let item = next.ingredients.remove(from_index);
            next.ingredients.insert(to_index, item);
        }
        Ok(next)
    }

    pub fn reduce(&self, action: ConstructorAction) -> Self {
        match action {
            ConstructorAction::AddIngredient(item) => self.with_ingredient(item),
            ConstructorAction::RemoveIngredient(instance_id) => self.without_ingredient(&instance_id),
            ConstructorAction::MoveIngredient { from_index, to_index } => {
                match self.move_ingredient(from_index, to_index) {
                    Ok(next) => next,
                    Err(e) => {
                        log::warn!("⚠️ moveIngredient ignorado: {}", e);
                        self.clone()
                    }
                }
            }
            ConstructorAction::ClearConstructor => Self::default(),
        }
    }
}
