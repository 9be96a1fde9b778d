//! # TUI Components
//!
//! All UI components for the food detail screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: header chrome with the screen's `HeaderAction`s
//! - `FoodCard`: image reference, name, description, unit price
//! - `OrderFooter`: total, quantity stepper, confirm hint
//! - `LoadStatusView` / `NoticeBar`: loading, load error and notices
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `StepperState` + `ExtrasList`: row selection and `-`/`+` steps
//!
//! Components receive external data as props (struct fields) rather than
//! reading `App` directly, which keeps them testable with `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Header chrome)
//! ├── food_card.rs     (Food details)
//! ├── extras_list.rs   (Extras with steppers, row selection)
//! ├── order_footer.rs  (Total and quantity)
//! └── status_view.rs   (Loading/error view, notice line)
//! ```

pub mod extras_list;
pub mod food_card;
pub mod order_footer;
pub mod status_view;
mod title_bar;

pub use extras_list::{ExtrasList, Row, StepEvent, StepperState};
pub use food_card::FoodCard;
pub use order_footer::OrderFooter;
pub use status_view::{LoadStatusView, NoticeBar};
pub use title_bar::TitleBar;
