//! A headless infinite-loop carousel engine.
//!
//! For adapter-level utilities (event dispatch, offset tweens, scoped teardown), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the control logic of a looping slider: which slide is shown, when it
//! changes, and how competing input sources arbitrate for that decision:
//! - loop arithmetic over a tripled "extended track" (cursor always in the middle copy)
//! - an adapter-driven autoplay timer gated by reduced motion, visibility and interaction
//! - keyboard, button, pagination and touch-swipe input with precedence over autoplay
//! - centering the active slide from live layout measurements
//!
//! It is UI-agnostic. A DOM/GUI/TUI layer is expected to provide:
//! - input events, visibility and reduced-motion changes, resize notifications
//! - a clock (`now_ms`) and a timer or frame loop calling `tick`
//! - slide geometry when a layout frame is pending
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod arbiter;
pub mod aria;
mod autoplay;
mod carousel;
mod item;
mod layout;
mod options;
mod state;
mod track;
mod types;


pub use arbiter::{Arbiter, Command, Interaction, SWIPE_THRESHOLD_PX};
pub use autoplay::{Autoplay, AutoplayState, TimerHandle};
pub use carousel::Carousel;
pub use item::{Testimonial, default_testimonials};
pub use layout::{LayoutTranslator, Measurements, SlideGeometry, center_offset};
pub use options::{CarouselOptions, DEFAULT_AUTOPLAY_INTERVAL_MS, OnChangeCallback};
pub use state::CarouselSnapshot;
pub use track::LoopTrack;
pub use types::{Direction, Environment, Key, PointerInput, PointerKind, SlideState, SlideView};
