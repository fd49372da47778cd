//! Component contracts
//!
//! Panels that take keyboard input implement [`Interactive`]; the event loop
//! routes keys to them and falls back to its own handlers when a key bubbles
//! up as [`Handled::No`].

mod interactive;

pub use interactive::{Handled, Interactive};
