use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Created,
    Pending,
    Done,
    #[serde(other)]
    Unknown,
}

/// Pedido (feed público, historial del usuario o respuesta de `POST /orders`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: OrderStatus,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub number: u64,
    /// Identidades del servidor en orden: pan, rellenos..., pan
    #[serde(deserialize_with = "ingredient_ids")]
    pub ingredients: Vec<String>,
}

/// `POST /orders` devuelve los ingredientes completos, el feed solo los ids
fn ingredient_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Id(String),
        Full {
            #[serde(rename = "_id")]
            id: String,
        },
    }

    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Id(id) | Entry::Full { id } => id,
        })
        .collect())
}

/// Respuesta de `POST /orders`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OrderResponse {
    pub name: String,
    pub order: Order,
}

/// Respuesta de `GET /orders/all`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub orders: Vec<Order>,
    pub total: u64,
    pub total_today: u64,
}

/// Respuesta de `GET /orders` y `GET /orders/{number}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_payload() {
        let json = r#"{
            "success": true,
            "orders": [{
                "_id": "6622337897ede0001d0666b5",
                "ingredients": ["bun-1", "main-1", "bun-1"],
                "status": "done",
                "name": "Краторный био-марсианский бургер",
                "createdAt": "2024-04-19T09:03:52.748Z",
                "updatedAt": "2024-04-19T09:03:58.057Z",
                "number": 38483
            }],
            "total": 38109,
            "totalToday": 107
        }"#;

        let feed: FeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.total, 38109);
        assert_eq!(feed.total_today, 107);
        assert_eq!(feed.orders[0].number, 38483);
        assert_eq!(feed.orders[0].status, OrderStatus::Done);
        assert_eq!(feed.orders[0].ingredients.len(), 3);
    }

    #[test]
    fn order_response_with_full_ingredients_keeps_ids() {
        let json = r#"{
            "success": true,
            "name": "Краторный бургер",
            "order": {
                "ingredients": [
                    { "_id": "bun-1", "name": "Краторная булка N-200i", "type": "bun", "price": 1255 },
                    { "_id": "bun-1", "name": "Краторная булка N-200i", "type": "bun", "price": 1255 }
                ],
                "_id": "6622337897ede0001d0666b5",
                "owner": { "name": "Pilot", "email": "pilot@stellar.space" },
                "status": "done",
                "name": "Краторный бургер",
                "createdAt": "2024-04-19T09:03:52.748Z",
                "updatedAt": "2024-04-19T09:03:58.057Z",
                "number": 38484,
                "price": 2510
            }
        }"#;

        let response: OrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.order.number, 38484);
        assert_eq!(response.order.ingredients, vec!["bun-1", "bun-1"]);
    }

    #[test]
    fn unknown_status_and_missing_fields_are_tolerated() {
        let order: Order =
            serde_json::from_str(r#"{ "number": 12345, "status": "cancelled" }"#).unwrap();

        assert_eq!(order.number, 12345);
        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(order.ingredients.is_empty());
    }
}
