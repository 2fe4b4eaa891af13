// ============================================================================
// SELECTORS - Datos derivados, calculados en cada lectura (nunca en el estado)
// ============================================================================

use std::collections::HashMap;

use crate::models::{Ingredient, Order};
use crate::state::ConstructorState;

/// Precio de la hamburguesa: 2 × pan + suma de rellenos
/// Se suma en `u64`: los precios del catálogo son `u32` y no deben desbordar.
pub fn constructor_price(constructor: &ConstructorState) -> u64 {
    let bun = constructor
        .bun
        .as_ref()
        .map_or(0, |bun| u64::from(bun.price()) * 2);
    constructor
        .ingredients
        .iter()
        .map(|item| u64::from(item.price()))
        .fold(bun, u64::saturating_add)
}

/// Identidades para `POST /orders`: pan, rellenos en orden, pan.
/// `None` si todavía no hay pan.
pub fn order_ingredient_ids(constructor: &ConstructorState) -> Option<Vec<String>> {
    let bun = constructor.bun.as_ref()?;
    let mut ids = Vec::with_capacity(constructor.ingredients.len() + 2);
    ids.push(bun.server_id().to_string());
    ids.extend(constructor.ingredients.iter().map(|item| item.server_id().to_string()));
    ids.push(bun.server_id().to_string());
    Some(ids)
}

/// Contador por ingrediente para el catálogo (el pan cuenta 2)
pub fn ingredient_counts(constructor: &ConstructorState) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    if let Some(bun) = &constructor.bun {
        counts.insert(bun.server_id().to_string(), 2);
    }
    for item in &constructor.ingredients {
        *counts.entry(item.server_id().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Ingrediente de un pedido con su número de apariciones
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientWithCount {
    pub ingredient: Ingredient,
    pub count: u32,
}

impl IngredientWithCount {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.ingredient.price) * u64::from(self.count)
    }
}

/// Pedido listo para la vista de detalle
#[derive(Debug, Clone, PartialEq)]
pub struct OrderInfo {
    pub order: Order,
    pub ingredients: Vec<IngredientWithCount>,
    pub total: u64,
}

/// Agrupar los ids repetidos del pedido y adjuntar el ingrediente del catálogo.
///
/// Los grupos salen en el orden de primera aparición. Un id que el catálogo aún
/// no tiene se omite.
pub fn expand_order_ingredients(order: &Order, catalog: &[Ingredient]) -> Vec<IngredientWithCount> {
    let mut groups: Vec<IngredientWithCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for id in &order.ingredients {
        if let Some(&position) = positions.get(id.as_str()) {
            groups[position].count += 1;
            continue;
        }
        if let Some(ingredient) = catalog.iter().find(|ingredient| &ingredient.id == id) {
            positions.insert(id.as_str(), groups.len());
            groups.push(IngredientWithCount {
                ingredient: ingredient.clone(),
                count: 1,
            });
        }
    }

    groups
}

/// Precio total de los grupos resueltos
pub fn groups_total(groups: &[IngredientWithCount]) -> u64 {
    groups
        .iter()
        .map(IngredientWithCount::subtotal)
        .fold(0, u64::saturating_add)
}

/// Detalle del pedido; `None` mientras el catálogo está vacío
pub fn order_info(order: &Order, catalog: &[Ingredient]) -> Option<OrderInfo> {
    if catalog.is_empty() {
        return None;
    }
    let ingredients = expand_order_ingredients(order, catalog);
    let total = groups_total(&ingredients);
    Some(OrderInfo {
        order: order.clone(),
        ingredients,
        total,
    })
}
