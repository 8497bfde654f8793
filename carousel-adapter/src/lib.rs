//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the control logic and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A DOM-like [`Event`] enum and a [`Controller`] that dispatches it
//! - Tween-based transitions of the track offset (skipped under reduced motion)
//! - Scoped teardown: dropping the controller unmounts the carousel
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, ControllerOptions, DEFAULT_TRANSITION_MS};
pub use event::{Control, Event, EventOutcome};
pub use tween::{Easing, Tween};
