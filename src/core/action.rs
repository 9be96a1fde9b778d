//! # Actions
//!
//! Everything that can happen on the food detail screen becomes an `Action`.
//! User presses `+` on an extra? That's `Action::IncrementExtra(id)`.
//! The API returns the food? That's `Action::FoodLoaded(food)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the host which I/O to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{Food, OrderPayload};
use crate::core::state::{App, Extra, LoadState, Notice};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Screen entry: fetch the food and its favorite status.
    Load,
    /// Re-issue the load after a failure.
    Retry,
    FoodLoaded(Food),
    FoodLoadFailed(String),
    FavoriteStatusLoaded(bool),
    FavoriteStatusFailed(String),

    IncrementExtra(u64),
    DecrementExtra(u64),
    IncrementQuantity,
    DecrementQuantity,

    ToggleFavorite,
    /// A favorite add/remove request failed. `wanted` is the flag value the
    /// failed request was trying to establish.
    FavoriteSyncFailed { wanted: bool, message: String },

    FinishOrder,
    OrderPlaced,
    OrderFailed(String),

    DismissNotice,
    Quit,
}

/// Where the host should take the user next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Orders,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Orders => "orders",
        }
    }
}

/// Side effects requested by `update()`, carried out by the host adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch the food record and the favorite status concurrently.
    Load { food_id: u64 },
    AddFavorite(Food),
    RemoveFavorite { food_id: u64 },
    PlaceOrder(OrderPayload),
    Navigate(Route),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Load => {
            app.load_state = LoadState::Loading;
            Effect::Load {
                food_id: app.food_id,
            }
        }
        Action::Retry => {
            if matches!(app.load_state, LoadState::Failed(_)) {
                info!("Retrying load for food {}", app.food_id);
                update(app, Action::Load)
            } else {
                Effect::None
            }
        }
        Action::FoodLoaded(food) => {
            app.extras = food
                .extras
                .iter()
                .map(|record| Extra {
                    id: record.id,
                    name: record.name.clone(),
                    value: record.value,
                    quantity: 0,
                })
                .collect();
            info!(
                "Food {} loaded ({} extras, unit price {})",
                food.id,
                app.extras.len(),
                food.price
            );
            app.food = Some(food);
            app.load_state = LoadState::Ready;
            Effect::None
        }
        Action::FoodLoadFailed(message) => {
            warn!("Food load failed: {}", message);
            app.load_state = LoadState::Failed(message);
            Effect::None
        }
        Action::FavoriteStatusLoaded(found) => {
            if app.favorite_touched {
                debug!("Ignoring late favorite status ({found}): user already toggled");
            } else {
                app.is_favorite = found;
            }
            Effect::None
        }
        Action::FavoriteStatusFailed(message) => {
            warn!("Favorite status unavailable: {}", message);
            Effect::None
        }
        Action::IncrementExtra(id) => {
            if let Some(extra) = app.extras.iter_mut().find(|extra| extra.id == id) {
                extra.increment();
            }
            Effect::None
        }
        Action::DecrementExtra(id) => {
            if let Some(extra) = app.extras.iter_mut().find(|extra| extra.id == id) {
                extra.decrement();
            }
            Effect::None
        }
        Action::IncrementQuantity => {
            app.quantity.increment();
            Effect::None
        }
        Action::DecrementQuantity => {
            app.quantity.decrement();
            Effect::None
        }
        Action::ToggleFavorite => {
            let Some(food) = app.food.as_ref() else {
                return Effect::None;
            };
            let effect = if app.is_favorite {
                Effect::RemoveFavorite { food_id: food.id }
            } else {
                Effect::AddFavorite(food.clone())
            };
            // Optimistic: reflect intent now, reconcile on FavoriteSyncFailed
            app.is_favorite = !app.is_favorite;
            app.favorite_touched = true;
            effect
        }
        Action::FavoriteSyncFailed { wanted, message } => {
            warn!("Favorite sync failed (wanted={}): {}", wanted, message);
            if app.is_favorite == wanted {
                app.is_favorite = !wanted;
            }
            let verb = if wanted { "add" } else { "remove" };
            app.notice = Some(Notice::error(format!(
                "Could not {verb} favorite: {message} (press f to try again)"
            )));
            Effect::None
        }
        Action::FinishOrder => {
            if app.order_in_flight {
                return Effect::None;
            }
            let Some(payload) = app.order_payload() else {
                return Effect::None;
            };
            app.order_in_flight = true;
            app.notice = Some(Notice::info("Placing order..."));
            Effect::PlaceOrder(payload)
        }
        Action::OrderPlaced => {
            app.order_in_flight = false;
            app.notice = Some(Notice::info("Order placed"));
            Effect::Navigate(Route::Orders)
        }
        Action::OrderFailed(message) => {
            warn!("Order submission failed: {}", message);
            app.order_in_flight = false;
            app.notice = Some(Notice::error(format!(
                "Order not placed: {message} (press Enter to try again)"
            )));
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
