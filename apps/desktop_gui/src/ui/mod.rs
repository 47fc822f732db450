//! UI layer for the desktop humanizer: window shell and platform side effects.

pub mod app;

pub use app::HumanizerApp;
