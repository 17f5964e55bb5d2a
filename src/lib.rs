//! Line Collapse Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use core::{
    BoundingBox, CollapseAnimator, CollapseConfig, CollapseTick, IntersectionPoint,
    IntersectionReport, LineEquation, Point, Segment, SegmentStore,
};
pub use render::{CanvasRenderer, Renderer};
pub use shared::{EditorOptions, RenderScene, SceneMode};
