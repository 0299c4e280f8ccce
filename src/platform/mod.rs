//! Platform layer
//!
//! Window creation, keyboard state and the frame loop, built on winit.

pub mod app;
pub mod input;

pub use app::{Demo, Flow, run};
pub use input::KeyInput;
