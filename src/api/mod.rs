pub mod client;
pub mod types;

pub use client::{ApiError, FoodApi, HttpFoodApi};
pub use types::{ExtraRecord, Food, OrderExtra, OrderPayload};
