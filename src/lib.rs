#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod error;
pub mod export;
pub mod panels;
pub mod stroke;

pub use app::PaintApp;
pub use brush::BrushConfig;
pub use canvas::CanvasBuffer;
pub use error::ExportError;
pub use stroke::StrokeInterpreter;
