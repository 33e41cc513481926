//! UI layer: app shell, coordinate input panel and map canvas.

pub mod app;
pub mod map_canvas;
pub mod projection;

pub use app::MapGuiApp;
