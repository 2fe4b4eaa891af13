use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categoría de un ingrediente del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    Bun,
    Main,
    Sauce,
}

/// Ingrediente tal como lo devuelve `/ingredients` (inmutable tras el fetch)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Ingredient {
    /// Identidad del servidor (compartida por todas las ocurrencias)
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientType,
    pub proteins: u32,
    pub fat: u32,
    pub carbohydrates: u32,
    pub calories: u32,
    pub price: u32,
    pub image: String,
    #[serde(default)]
    pub image_large: String,
    #[serde(default)]
    pub image_mobile: String,
}

impl Ingredient {
    pub fn is_bun(&self) -> bool {
        self.kind == IngredientType::Bun
    }
}

/// Ingrediente colocado en el constructor.
///
/// `instance_id` se genera localmente en cada inserción: el mismo ingrediente
/// puede añadirse varias veces y cada ocurrencia se borra/mueve por separado.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ConstructorIngredient {
    #[serde(rename = "id")]
    pub instance_id: String,
    #[serde(flatten)]
    pub ingredient: Ingredient,
}

impl ConstructorIngredient {
    /// Envolver un ingrediente con una identidad de instancia nueva (UUID v4)
    pub fn new(ingredient: Ingredient) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            ingredient,
        }
    }

    /// Identidad del servidor del ingrediente envuelto
    pub fn server_id(&self) -> &str {
        &self.ingredient.id
    }

    pub fn price(&self) -> u32 {
        self.ingredient.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{bun, patty};

    #[test]
    fn deserializes_catalog_entry() {
        let json = r#"{
            "_id": "643d69a5c3f7b9001cfa093c",
            "name": "Краторная булка N-200i",
            "type": "bun",
            "proteins": 80,
            "fat": 24,
            "carbohydrates": 53,
            "calories": 420,
            "price": 1255,
            "image": "https://code.s3.yandex.net/react/code/bun-02.png",
            "image_mobile": "https://code.s3.yandex.net/react/code/bun-02-mobile.png",
            "image_large": "https://code.s3.yandex.net/react/code/bun-02-large.png",
            "__v": 0
        }"#;

        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.id, "643d69a5c3f7b9001cfa093c");
        assert_eq!(ingredient.kind, IngredientType::Bun);
        assert_eq!(ingredient.price, 1255);
        assert!(ingredient.is_bun());
    }

    #[test]
    fn same_ingredient_gets_distinct_instance_ids() {
        let first = ConstructorIngredient::new(patty());
        let second = ConstructorIngredient::new(patty());

        assert_eq!(first.server_id(), second.server_id());
        assert_ne!(first.instance_id, second.instance_id);
        assert_ne!(first.instance_id, first.server_id());
    }

    #[test]
    fn instance_id_serializes_as_id_next_to_server_id() {
        let item = ConstructorIngredient::new(bun());
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], serde_json::json!(item.instance_id));
        assert_eq!(value["_id"], serde_json::json!("bun-1"));
        assert_eq!(value["type"], serde_json::json!("bun"));
    }
}
