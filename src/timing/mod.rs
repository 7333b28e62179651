//! Timer abstraction and the rate-shaping wrappers built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page code reaches timers only through [`Timer`], so notification
//! auto-dismiss, debounce, and throttle behave identically under the browser
//! clock and under the virtual clock used in tests.

pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod gloo_timer;
pub mod throttle;
pub mod timer;

pub use debounce::Debounced;
#[cfg(feature = "hydrate")]
pub use gloo_timer::GlooTimer;
pub use throttle::Throttled;
pub use timer::{Timer, TimerCallback, TimerHandle, VirtualTimer};
