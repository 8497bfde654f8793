use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::carousel::Carousel;
use crate::{Environment, SWIPE_THRESHOLD_PX, Testimonial, aria};

/// A callback fired after the carousel's observable state changes (cursor, autoplay, offset).
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Default autoplay interval.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: i64 = 5_000;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Slides, in order. An empty list falls back to [`crate::default_testimonials`].
    pub items: Vec<Testimonial>,
    /// Autoplay interval. Zero or negative disables autoplay.
    pub autoplay_interval_ms: i64,
    /// Accessible name of the carousel region.
    pub aria_label: String,
    /// Horizontal drag distance that commits one step.
    pub swipe_threshold_px: f32,
    /// Host state at construction (reduced motion, document visibility).
    pub initial_environment: Environment,
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(items: Vec<Testimonial>) -> Self {
        Self {
            items,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            aria_label: String::from(aria::DEFAULT_LABEL),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            initial_environment: Environment::default(),
            on_change: None,
        }
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: i64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    pub fn with_swipe_threshold_px(mut self, threshold_px: f32) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    pub fn with_environment(mut self, env: Environment) -> Self {
        self.initial_environment = env;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.initial_environment.reduced_motion = reduced_motion;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("items", &self.items.len())
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("aria_label", &self.aria_label)
            .field("swipe_threshold_px", &self.swipe_threshold_px)
            .field("initial_environment", &self.initial_environment)
            .finish_non_exhaustive()
    }
}
