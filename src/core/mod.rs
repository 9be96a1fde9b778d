//! # Core Application Logic
//!
//! This module contains the food detail screen's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • pricing (derived)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │ ─────────▶ │    API     │
//!            │  Adapter   │  spawns    │  FoodApi   │
//!            │ (ratatui)  │ ◀───────── │ (reqwest)  │
//!            └────────────┘   Action   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`pricing`]: Order total and currency formatting
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod pricing;
pub mod state;
