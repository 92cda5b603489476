use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use sqlx::FromRow;

use crate::error::ApiError;

/// A persisted item, as stored in the `items` table and returned by every endpoint
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    /// Assigned by the store on insert, never changes afterwards
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax: Option<f64>,
}

/// Request body for creating or fully overwriting an item
///
/// Only a JSON object is accepted; positional arrays are rejected. Any `id`
/// in the body is ignored. A missing `tax` and an explicit `"tax": null`
/// both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax: Option<f64>,
}

#[derive(Deserialize)]
struct NewItemFields {
    name: String,
    description: String,
    price: f64,
    tax: Option<f64>,
}

impl<'de> Deserialize<'de> for NewItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, JsonValue>::deserialize(deserializer)?;
        let fields = NewItemFields::deserialize(JsonValue::Object(object))
            .map_err(de::Error::custom)?;

        Ok(NewItem {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            tax: fields.tax,
        })
    }
}

impl NewItem {
    /// Semantic checks that serde cannot express
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::InvalidItem("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Attach a store-assigned id
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            tax: self.tax,
        }
    }
}

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tax_and_null_tax_are_equivalent() {
        let omitted: NewItem = serde_json::from_value(serde_json::json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5
        }))
        .unwrap();
        let explicit: NewItem = serde_json::from_value(serde_json::json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5,
            "tax": null
        }))
        .unwrap();

        assert_eq!(omitted.tax, None);
        assert_eq!(omitted, explicit);
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let new_item: NewItem = serde_json::from_value(serde_json::json!({
            "id": 99,
            "name": "Pen",
            "description": "Blue ink",
            "price": 1.5
        }))
        .unwrap();

        assert_eq!(new_item.clone().into_item(1).id, 1);
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let result: Result<NewItem, _> = serde_json::from_value(serde_json::json!({
            "name": "Pen",
            "description": "Blue ink",
            "price": "cheap"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_positional_array_is_rejected() {
        let result: Result<NewItem, _> =
            serde_json::from_str(r#"["Pen", "Blue ink", 1.5, null]"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_is_named() {
        let result: Result<NewItem, _> =
            serde_json::from_str(r#"{"name": "Pen", "price": 1.5}"#);

        assert!(result.unwrap_err().to_string().contains("description"));
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let new_item = NewItem {
            name: String::new(),
            description: "Blue ink".to_string(),
            price: 1.5,
            tax: None,
        };

        assert!(matches!(new_item.validate(), Err(ApiError::InvalidItem(_))));
    }

    #[test]
    fn test_item_serializes_absent_tax_as_null() {
        let item = Item {
            id: 1,
            name: "Pen".to_string(),
            description: "Blue ink".to_string(),
            price: 1.5,
            tax: None,
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({
                "id": 1,
                "name": "Pen",
                "description": "Blue ink",
                "price": 1.5,
                "tax": null
            })
        );
    }
}
