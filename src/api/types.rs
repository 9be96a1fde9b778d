use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A food record as served by `GET /foods/{id}`.
///
/// This is also the body posted to `/favorites`, so unknown-but-useful fields
/// like `category` are carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default)]
    pub extras: Vec<ExtraRecord>,
}

/// An optional add-on as listed inside a food record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExtraRecord {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub value: Decimal,
}

/// Body of `POST /orders`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderPayload {
    pub product_id: u64,
    pub name: String,
    pub description: String,
    /// Final amount for the whole order (extras and quantity included).
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub thumbnail_url: String,
    pub extras: Vec<OrderExtra>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OrderExtra {
    pub id: u64,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub value: Decimal,
    pub quantity: u32,
}

/// Decides whether a `GET /favorites/{id}` body denotes an existing record.
///
/// The API answers with the record itself, or with an empty/null body when
/// the item is not a favorite.
pub fn is_favorite_record(body: &str) -> bool {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return false;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Null) => false,
        Ok(serde_json::Value::Object(map)) => !map.is_empty(),
        Ok(serde_json::Value::Array(items)) => !items.is_empty(),
        Ok(_) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_food_deserializes_with_nested_extras() {
        let json = r#"{
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
            "price": 19.9,
            "category": 1,
            "image_url": "https://example.com/ao_molho.png",
            "thumbnail_url": "https://example.com/thumb.png",
            "extras": [
                { "id": 1, "name": "Bacon", "value": 1.5 },
                { "id": 2, "name": "Frango", "value": 2 }
            ]
        }"#;

        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id, 1);
        assert_eq!(food.price, dec!(19.9));
        assert_eq!(food.category, Some(1));
        assert_eq!(food.extras.len(), 2);
        assert_eq!(food.extras[0].value, dec!(1.5));
        assert_eq!(food.extras[1].value, dec!(2));
    }

    #[test]
    fn test_food_accepts_string_prices_and_missing_extras() {
        let json = r#"{
            "id": 7,
            "name": "Veggie",
            "description": "",
            "price": "21.50",
            "image_url": "veggie.png"
        }"#;

        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.price, dec!(21.50));
        assert!(food.extras.is_empty());
        assert_eq!(food.available, None);
    }

    /// Contract test: prices go over the wire as JSON numbers.
    #[test]
    fn test_order_payload_serialization() {
        let payload = OrderPayload {
            product_id: 3,
            name: "Massa".to_string(),
            description: "Boa".to_string(),
            price: dec!(32.00),
            thumbnail_url: "massa.png".to_string(),
            extras: vec![OrderExtra {
                id: 1,
                name: "Bacon".to_string(),
                value: dec!(2.00),
                quantity: 3,
            }],
        };

        let serialized = serde_json::to_string(&payload).unwrap();
        let expected = r#"{"product_id":3,"name":"Massa","description":"Boa","price":32.0,"thumbnail_url":"massa.png","extras":[{"id":1,"name":"Bacon","value":2.0,"quantity":3}]}"#;
        assert_eq!(serialized, expected);
    }

    #[test]
    fn test_favorite_body_omits_absent_optionals() {
        let food = Food {
            id: 2,
            name: "Veggie".to_string(),
            description: "Verde".to_string(),
            price: dec!(21.5),
            image_url: "veggie.png".to_string(),
            category: None,
            available: None,
            extras: vec![],
        };
        let value = serde_json::to_value(&food).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("category"));
        assert!(!object.contains_key("available"));
        assert_eq!(object["price"], serde_json::json!(21.5));
    }

    macro_rules! test_favorite_presence {
        ( $($name:ident: $input:expr => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(is_favorite_record($input), $expected);
                }
            )+
        };
    }

    test_favorite_presence! {
        test_favorite_presence_empty_body: "" => false,
        test_favorite_presence_whitespace: "  \n" => false,
        test_favorite_presence_null: "null" => false,
        test_favorite_presence_empty_object: "{}" => false,
        test_favorite_presence_empty_array: "[]" => false,
        test_favorite_presence_record: r#"{"id":1,"name":"Ao molho"}"# => true,
        test_favorite_presence_garbage: "<html>" => false,
    }
}
