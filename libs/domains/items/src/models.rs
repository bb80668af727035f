use axum_helpers::validation::not_blank;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An item offered by the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-generated identifier, never changes
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Unit price, always greater than zero
    pub price: f64,
    /// Unit weight, always greater than zero
    pub weight: f64,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "Book",
    "description": "Hardcover, 320 pages",
    "price": 10.0,
    "weight": 1.0
}))]
pub struct CreateItem {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
    #[validate(range(exclusive_min = 0.0, message = "weight must be greater than 0"))]
    pub weight: f64,
}

/// DTO for editing an item; every field is overwritten
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
    #[validate(range(exclusive_min = 0.0, message = "weight must be greater than 0"))]
    pub weight: f64,
}

/// Exact-match criteria for listing items. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub weight: Option<f64>,
}

impl ItemFilter {
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn by_price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    pub fn by_weight(weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.title.as_ref().is_none_or(|t| &item.title == t)
            && self.price.is_none_or(|p| item.price == p)
            && self.weight.is_none_or(|w| item.weight == w)
    }
}

impl Item {
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            price: input.price,
            weight: input.weight,
        }
    }

    /// Overwrite everything but the id.
    pub fn apply_update(&mut self, update: UpdateItem) {
        self.title = update.title;
        self.description = update.description;
        self.price = update.price;
        self.weight = update.weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> CreateItem {
        CreateItem {
            title: "Book".to_string(),
            description: None,
            price: 10.0,
            weight: 1.0,
        }
    }

    #[test]
    fn test_create_item_valid() {
        assert!(book().validate().is_ok());
    }

    #[test]
    fn test_create_item_blank_title() {
        let input = CreateItem {
            title: "   ".to_string(),
            ..book()
        };

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_item_non_positive_price_and_weight() {
        let input = CreateItem {
            price: 0.0,
            weight: -1.0,
            ..book()
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("weight"));
    }

    #[test]
    fn test_update_item_validates_like_create() {
        let update = UpdateItem {
            title: String::new(),
            description: Some("x".to_string()),
            price: 1.0,
            weight: 1.0,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_filter_matches_exact_values() {
        let item = Item {
            id: Uuid::now_v7(),
            title: "Lamp".to_string(),
            description: None,
            price: 25.5,
            weight: 2.0,
        };

        assert!(ItemFilter::default().matches(&item));
        assert!(ItemFilter::by_title("Lamp").matches(&item));
        assert!(!ItemFilter::by_title("lamp").matches(&item));
        assert!(ItemFilter::by_price(25.5).matches(&item));
        assert!(!ItemFilter::by_weight(2.5).matches(&item));
    }

    #[test]
    fn test_apply_update_keeps_id() {
        let id = Uuid::now_v7();
        let mut item = Item {
            id,
            title: "Lamp".to_string(),
            description: None,
            price: 25.5,
            weight: 2.0,
        };

        item.apply_update(UpdateItem {
            title: "Desk lamp".to_string(),
            description: Some("LED".to_string()),
            price: 30.0,
            weight: 2.2,
        });

        assert_eq!(item.id, id);
        assert_eq!(item.title, "Desk lamp");
        assert_eq!(item.description.as_deref(), Some("LED"));
    }
}
