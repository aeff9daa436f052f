//! UI module for the scrub demo player
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! Uses a message-passing architecture: the console widgets publish
//! messages, the app routes them into the console state and the clock.

pub mod app;
pub mod theme;

pub use app::PlayerApp;
