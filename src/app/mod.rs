//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Session, Modus, Hinweis, Render-Job).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, Key, PointerButton, WindowEvent};
pub use intent_mapping::{CLEAR_KEY, HELP_KEY};
pub use state::{AppState, HintState, PendingRender, UiMode};
