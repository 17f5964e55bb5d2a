//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod scheduler;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Segmente, Animation, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use scheduler::{FrameScheduler, Scheduler, TimerHandle};
pub use state::{AppState, UiState};
