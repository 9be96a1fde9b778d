//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! translates keyboard events into `core::Action` values and carries out the
//! `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! All state lives in one `App` owned by `run()`. Network calls run as tokio
//! tasks that report back by sending an `Action` over a channel, so every
//! mutation still happens on this loop:
//!
//! ```text
//! key ──▶ TuiEvent ──▶ Action ──▶ update() ──▶ Effect ──▶ tokio::spawn(FoodApi)
//!                        ▲                                       │
//!                        └──────────── mpsc::Sender<Action> ◀────┘
//! ```
//!
//! The two load fetches run concurrently and may complete in any order.
//! Favorite and order requests never block the UI.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::api::{FoodApi, HttpFoodApi};
use crate::core::action::{Action, Effect, Route, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, LoadState};
use crate::tui::component::EventHandler;
use crate::tui::components::{Row, StepEvent, StepperState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub stepper: StepperState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            stepper: StepperState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// What the loop should do after an effect was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    Navigate(Route),
}

/// Runs the food detail screen until the user quits or an order is placed.
///
/// Returns the route the host should navigate to, if any.
pub fn run(food_id: u64, config: ResolvedConfig) -> std::io::Result<Option<Route>> {
    let api: Arc<dyn FoodApi> = Arc::new(
        HttpFoodApi::new(config.api_base_url.clone(), config.request_timeout)
            .map_err(std::io::Error::other)?,
    );
    let mut app = App::new(food_id, config.currency.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut outcome = None;
    let start_time = Instant::now();
    let mut needs_redraw = true;

    let mut flow = dispatch(&mut app, Action::Load, &api, &tx);

    while flow == Flow::Continue {
        tui.stepper.sync(&app.extras);

        let animating = app.load_state == LoadState::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while loading (spinner), longer when idle
        let timeout = if animating {
            Duration::from_millis(120)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for_event(&app, &mut tui, &event) else {
                continue;
            };
            flow = dispatch(&mut app, action, &api, &tx);
            if flow != Flow::Continue {
                break;
            }
        }

        // Handle background task results
        while flow == Flow::Continue {
            let Ok(action) = rx.try_recv() else {
                break;
            };
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            flow = dispatch(&mut app, action, &api, &tx);
        }

        if let Flow::Navigate(route) = flow {
            outcome = Some(route);
        }
    }

    ratatui::restore();
    Ok(outcome)
}

/// Maps a terminal event to a core action given what is on screen.
fn action_for_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Key('r') => Some(Action::Retry),
        TuiEvent::Key('x') => Some(Action::DismissNotice),
        TuiEvent::Key(c) => app
            .header_actions()
            .into_iter()
            .find(|header| header.key == *c)
            .map(|header| header.action),
        _ if app.load_state != LoadState::Ready => None,
        TuiEvent::Submit => Some(Action::FinishOrder),
        _ => tui.stepper.handle_event(event).map(|step| match step {
            StepEvent::Increment(Row::Extra(id)) => Action::IncrementExtra(id),
            StepEvent::Decrement(Row::Extra(id)) => Action::DecrementExtra(id),
            StepEvent::Increment(Row::Quantity) => Action::IncrementQuantity,
            StepEvent::Decrement(Row::Quantity) => Action::DecrementQuantity,
        }),
    }
}

/// Applies an action and carries out the resulting effect.
fn dispatch(
    app: &mut App,
    action: Action,
    api: &Arc<dyn FoodApi>,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    let effect = update(app, action);
    execute_effect(effect, api, tx)
}

/// Carries out an effect. Network work is spawned; results come back on `tx`.
pub fn execute_effect(effect: Effect, api: &Arc<dyn FoodApi>, tx: &mpsc::Sender<Action>) -> Flow {
    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Quit,
        Effect::Navigate(route) => Flow::Navigate(route),
        Effect::Load { food_id } => {
            spawn_food_fetch(food_id, api.clone(), tx.clone());
            spawn_favorite_fetch(food_id, api.clone(), tx.clone());
            Flow::Continue
        }
        Effect::AddFavorite(food) => {
            let api = api.clone();
            spawn_mutation(tx.clone(), "add favorite", async move {
                api.add_favorite(&food).await.map(|()| None).map_err(|e| {
                    Action::FavoriteSyncFailed {
                        wanted: true,
                        message: e.to_string(),
                    }
                })
            });
            Flow::Continue
        }
        Effect::RemoveFavorite { food_id } => {
            let api = api.clone();
            spawn_mutation(tx.clone(), "remove favorite", async move {
                api.remove_favorite(food_id)
                    .await
                    .map(|()| None)
                    .map_err(|e| Action::FavoriteSyncFailed {
                        wanted: false,
                        message: e.to_string(),
                    })
            });
            Flow::Continue
        }
        Effect::PlaceOrder(order) => {
            let api = api.clone();
            spawn_mutation(tx.clone(), "place order", async move {
                api.place_order(&order)
                    .await
                    .map(|()| Some(Action::OrderPlaced))
                    .map_err(|e| Action::OrderFailed(e.to_string()))
            });
            Flow::Continue
        }
    }
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send action: receiver dropped");
    }
}

fn spawn_food_fetch(food_id: u64, api: Arc<dyn FoodApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning food fetch (food_id={})", food_id);
    tokio::spawn(async move {
        let action = match api.fetch_food(food_id).await {
            Ok(food) => Action::FoodLoaded(food),
            Err(e) => Action::FoodLoadFailed(e.to_string()),
        };
        send(&tx, action);
    });
}

fn spawn_favorite_fetch(food_id: u64, api: Arc<dyn FoodApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning favorite status fetch (food_id={})", food_id);
    tokio::spawn(async move {
        let action = match api.fetch_favorite(food_id).await {
            Ok(found) => Action::FavoriteStatusLoaded(found),
            Err(e) => Action::FavoriteStatusFailed(e.to_string()),
        };
        send(&tx, action);
    });
}

/// Spawns a fire-and-forget request. `Ok(Some(action))` reports success,
/// `Ok(None)` needs no follow-up, `Err(action)` reports the failure.
fn spawn_mutation<F>(tx: mpsc::Sender<Action>, label: &'static str, request: F)
where
    F: std::future::Future<Output = Result<Option<Action>, Action>> + Send + 'static,
{
    info!("Spawning request: {}", label);
    tokio::spawn(async move {
        match request.await {
            Ok(Some(action)) => send(&tx, action),
            Ok(None) => debug!("Request '{}' completed", label),
            Err(action) => {
                warn!("Request '{}' failed", label);
                send(&tx, action);
            }
        }
    });
}
