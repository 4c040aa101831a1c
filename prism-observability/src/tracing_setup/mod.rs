//! Subscriber installation, span macros, and structured event helpers.

pub mod events;
pub mod spans;
mod subscriber;

pub use subscriber::init;
