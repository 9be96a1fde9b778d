//! # Application State
//!
//! Core business state for the food detail screen. This module contains
//! domain logic only, no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── food_id: u64                  // identifier supplied by the host
//! ├── food: Option<Food>            // loaded record (immutable after load)
//! ├── extras: Vec<Extra>            // extras with their selected quantities
//! ├── quantity: OrderQuantity       // units of the item, ≥ 1
//! ├── is_favorite: bool             // optimistic favorite flag
//! ├── favorite_touched: bool        // user toggled during this visit
//! ├── load_state: LoadState         // Loading / Ready / Failed
//! ├── order_in_flight: bool         // POST /orders pending
//! ├── notice: Option<Notice>        // non-blocking user message
//! └── currency: CurrencyFormat      // display convention for amounts
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rust_decimal::Decimal;

use crate::api::{Food, OrderExtra, OrderPayload};
use crate::core::action::Action;
use crate::core::pricing::{self, CurrencyFormat};

/// An optional add-on with the quantity the user picked.
#[derive(Debug, Clone, PartialEq)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    pub value: Decimal,
    pub quantity: u32,
}

impl Extra {
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Removes one unit; never goes below zero.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }
}

/// How many units of the item are being ordered. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuantity(u32);

impl OrderQuantity {
    pub const MIN: u32 = 1;

    /// Values below the minimum are clamped up to it.
    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
    }
}

impl Default for OrderQuantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The food record could not be fetched; the user may retry.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown without blocking the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// An action the screen exposes to chrome that lives outside its own layout
/// (the header). The host renders `label` and dispatches `action` on `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderAction {
    pub key: char,
    pub label: &'static str,
    pub active: bool,
    pub action: Action,
}

pub struct App {
    pub food_id: u64,
    pub food: Option<Food>,
    pub extras: Vec<Extra>,
    pub quantity: OrderQuantity,
    pub is_favorite: bool,
    /// Set once the user toggles the favorite; a late status fetch must not
    /// overwrite that choice.
    pub favorite_touched: bool,
    pub load_state: LoadState,
    pub order_in_flight: bool,
    pub notice: Option<Notice>,
    pub currency: CurrencyFormat,
}

impl App {
    pub fn new(food_id: u64, currency: CurrencyFormat) -> Self {
        Self {
            food_id,
            food: None,
            extras: Vec::new(),
            quantity: OrderQuantity::default(),
            is_favorite: false,
            favorite_touched: false,
            load_state: LoadState::Loading,
            order_in_flight: false,
            notice: None,
            currency,
        }
    }

    /// Current total, derived fresh from food price, extras and quantity.
    /// Zero until the food is loaded.
    pub fn cart_total(&self) -> Decimal {
        match &self.food {
            Some(food) => pricing::cart_total(food.price, &self.extras, self.quantity),
            None => Decimal::ZERO,
        }
    }

    pub fn formatted_total(&self) -> String {
        pricing::format_value(self.cart_total(), &self.currency)
    }

    /// Unit price of the loaded food, formatted for display.
    pub fn formatted_unit_price(&self) -> Option<String> {
        self.food
            .as_ref()
            .map(|food| pricing::format_value(food.price, &self.currency))
    }

    /// Actions the header chrome should offer for this screen.
    pub fn header_actions(&self) -> Vec<HeaderAction> {
        if self.food.is_none() {
            return Vec::new();
        }
        vec![HeaderAction {
            key: 'f',
            label: if self.is_favorite { "♥ Favorite" } else { "♡ Favorite" },
            active: self.is_favorite,
            action: Action::ToggleFavorite,
        }]
    }

    /// Builds the `POST /orders` body from the current state.
    pub fn order_payload(&self) -> Option<OrderPayload> {
        let food = self.food.as_ref()?;
        Some(OrderPayload {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: self.cart_total(),
            thumbnail_url: food.image_url.clone(),
            extras: self
                .extras
                .iter()
                .map(|extra| OrderExtra {
                    id: extra.id,
                    name: extra.name.clone(),
                    value: extra.value,
                    quantity: extra.quantity,
                })
                .collect(),
        })
    }
}
