mod app;
pub use app::*;
pub mod gesture;
pub mod input;
pub mod pointer;
pub mod screen;
