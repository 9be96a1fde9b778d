//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::api::{ApiError, ExtraRecord, Food, FoodApi, OrderPayload};
use crate::core::action::{Action, update};
use crate::core::pricing::CurrencyFormat;
use crate::core::state::App;

/// Food 1: unit price 10.00 with two extras (Bacon 2.00, Frango 1.50).
pub fn sample_food() -> Food {
    Food {
        id: 1,
        name: "Ao molho".to_string(),
        description: "Macarrão ao molho branco, fughi e cheiro verde das montanhas".to_string(),
        price: dec!(10.00),
        image_url: "https://storage.example.com/ao_molho.png".to_string(),
        category: Some(1),
        available: Some(true),
        extras: vec![
            ExtraRecord {
                id: 1,
                name: "Bacon".to_string(),
                value: dec!(2.00),
            },
            ExtraRecord {
                id: 2,
                name: "Frango".to_string(),
                value: dec!(1.50),
            },
        ],
    }
}

/// A screen for food 1 that has not loaded yet.
pub fn test_app() -> App {
    App::new(1, CurrencyFormat::default())
}

/// A screen for food 1 after `sample_food()` arrived.
pub fn test_app_loaded() -> App {
    let mut app = test_app();
    update(&mut app, Action::FoodLoaded(sample_food()));
    app
}

/// A calls-recording `FoodApi` with canned results.
pub struct RecordingApi {
    pub food: Result<Food, ApiError>,
    pub favorite: Result<bool, ApiError>,
    pub mutation: Result<(), ApiError>,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingApi {
    pub fn ok() -> Self {
        Self {
            food: Ok(sample_food()),
            favorite: Ok(false),
            mutation: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: ApiError) -> Self {
        Self {
            food: Err(err.clone()),
            favorite: Err(err.clone()),
            mutation: Err(err),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl FoodApi for RecordingApi {
    async fn fetch_food(&self, food_id: u64) -> Result<Food, ApiError> {
        self.record(format!("fetch_food {food_id}"));
        self.food.clone()
    }

    async fn fetch_favorite(&self, food_id: u64) -> Result<bool, ApiError> {
        self.record(format!("fetch_favorite {food_id}"));
        self.favorite.clone()
    }

    async fn add_favorite(&self, food: &Food) -> Result<(), ApiError> {
        self.record(format!("add_favorite {}", food.id));
        self.mutation.clone()
    }

    async fn remove_favorite(&self, food_id: u64) -> Result<(), ApiError> {
        self.record(format!("remove_favorite {food_id}"));
        self.mutation.clone()
    }

    async fn place_order(&self, order: &OrderPayload) -> Result<(), ApiError> {
        self.record(format!("place_order {}", order.product_id));
        self.mutation.clone()
    }
}
