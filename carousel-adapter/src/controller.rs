use carousel::{Carousel, CarouselOptions, Measurements};

use crate::{Control, Easing, Event, EventOutcome, Tween};

/// Duration of the slide transition when motion is allowed.
pub const DEFAULT_TRANSITION_MS: u64 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub transition_ms: u64,
    pub easing: Easing,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

/// A framework-neutral controller that wraps a `carousel::Carousel` and provides the common
/// adapter workflows: event dispatch, animated track offsets and scoped teardown.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount(now_ms)` once the carousel is attached
/// - `handle(event, now_ms)` for every host event
/// - `tick(now_ms)` from a timer or frame loop (autoplay and the offset tween)
/// - `on_frame(now_ms, measure)` when a layout frame is pending
///
/// Dropping the controller unmounts the carousel, which cancels autoplay on every exit path.
#[derive(Clone, Debug)]
pub struct Controller {
    c: Carousel,
    options: ControllerOptions,
    tween: Option<Tween>,
    displayed: f32,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options), ControllerOptions::default())
    }

    pub fn from_carousel(c: Carousel, options: ControllerOptions) -> Self {
        Self {
            displayed: c.offset(),
            c,
            options,
            tween: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.c
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn mount(&mut self, now_ms: u64) -> EventOutcome {
        adebug!(now_ms, "Controller::mount");
        self.c.mount(now_ms);
        EventOutcome {
            request_frame: self.c.frame_pending(),
            ..EventOutcome::default()
        }
    }

    pub fn unmount(&mut self) {
        adebug!("Controller::unmount");
        self.tween = None;
        self.c.unmount();
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Dispatches one host event.
    pub fn handle(&mut self, event: Event, now_ms: u64) -> EventOutcome {
        atrace!(?event, now_ms, "Controller::handle");
        let before = self.c.cursor();
        let mut out = EventOutcome::default();
        match event {
            Event::KeyDown(key) => {
                out.prevent_default = self.c.key_down(key, now_ms);
            }
            Event::FocusIn => self.c.focus_in(),
            Event::FocusOut => self.c.focus_out(now_ms),
            Event::MouseEnter => self.c.mouse_enter(),
            Event::MouseLeave => self.c.mouse_leave(now_ms),
            Event::PointerDown(input) => {
                if self.c.pointer_down(input) {
                    out.capture_pointer = Some(input.pointer_id);
                }
            }
            Event::PointerMove(input) => {
                self.c.pointer_move(input);
            }
            Event::PointerUp { pointer_id } => {
                out.release_pointer = self.c.pointer_up(pointer_id, now_ms);
            }
            Event::PointerCancel { pointer_id } => {
                out.release_pointer = self.c.pointer_cancel(pointer_id, now_ms);
            }
            Event::Activate(control) => {
                match control {
                    Control::Previous => self.c.previous(now_ms),
                    Control::Next => self.c.next(now_ms),
                    Control::Dot(logical) => self.c.go_to(logical, now_ms),
                };
            }
            Event::VisibilityChange { visible } => self.c.set_document_visible(visible, now_ms),
            Event::ReducedMotionChange { reduced_motion } => {
                self.c.set_reduced_motion(reduced_motion, now_ms);
                if reduced_motion {
                    self.finish_animation();
                }
            }
            Event::Resize => self.c.on_resize(),
        }
        out.moved = self.c.cursor() != before;
        out.focus_heading = self.c.take_focus_request();
        out.request_frame = self.c.frame_pending();
        out
    }

    /// Runs a due autoplay tick and advances the offset tween.
    ///
    /// Read the offset to apply to the track from [`Controller::displayed_offset`].
    pub fn tick(&mut self, now_ms: u64) -> EventOutcome {
        let moved = self.c.tick(now_ms);
        self.sample(now_ms);
        EventOutcome {
            moved,
            request_frame: self.c.frame_pending(),
            ..EventOutcome::default()
        }
    }

    /// Answers a pending layout frame and starts a transition towards the new offset.
    ///
    /// Under reduced motion (or with a zero transition) the offset is applied immediately.
    pub fn on_frame(
        &mut self,
        now_ms: u64,
        measure: impl FnOnce(usize) -> Option<Measurements>,
    ) -> Option<f32> {
        let target = self.c.on_frame(measure)?;
        let instant = self.c.environment().reduced_motion || self.options.transition_ms == 0;
        if instant {
            self.tween = None;
            self.displayed = target;
            return Some(target);
        }
        match self.tween.as_mut() {
            Some(tween) => tween.retarget(now_ms, target, self.options.transition_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.displayed,
                    target,
                    now_ms,
                    self.options.transition_ms,
                    self.options.easing,
                ));
            }
        }
        Some(target)
    }

    /// The offset currently on screen, advancing the tween to `now_ms`.
    pub fn sample(&mut self, now_ms: u64) -> f32 {
        if let Some(tween) = self.tween {
            self.displayed = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
        }
        self.displayed
    }

    /// The last sampled offset.
    pub fn displayed_offset(&self) -> f32 {
        self.displayed
    }

    fn finish_animation(&mut self) {
        if let Some(tween) = self.tween.take() {
            atrace!(to = tween.to, "transition cut short by reduced motion");
            self.displayed = tween.to;
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if self.c.is_mounted() {
            self.c.unmount();
        }
    }
}
