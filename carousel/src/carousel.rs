use alloc::string::String;
use core::cell::Cell;

use crate::{
    Arbiter, Autoplay, AutoplayState, CarouselOptions, CarouselSnapshot, Command, Direction,
    Environment, Interaction, Key, LayoutTranslator, LoopTrack, Measurements, PointerInput,
    SlideState, SlideView, Testimonial, TimerHandle, aria, default_testimonials,
};

/// A headless infinite-loop carousel.
///
/// This type is UI-agnostic:
/// - It holds no UI objects and registers no callbacks with the host.
/// - Your adapter forwards input events, visibility/motion changes and resize notifications,
///   calls [`Carousel::tick`] from a timer or frame loop, and answers pending layout frames with
///   [`Carousel::on_frame`].
/// - Rendering is exposed via [`Carousel::for_each_slide`] and [`Carousel::offset`].
///
/// The cursor is the only piece of mutable shared state. Autoplay ticks, swipes, buttons, dots
/// and keys all move it through one wrap-safe commit, so it never leaves the middle copy of the
/// extended track.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    track: LoopTrack,
    cursor: usize,
    env: Environment,
    autoplay: Autoplay,
    arbiter: Arbiter,
    layout: LayoutTranslator,
    focus_request: Option<usize>,
    mounted: bool,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel from options. The cursor starts on the first item.
    ///
    /// An empty item list is replaced by [`default_testimonials`]. Nothing is scheduled until
    /// [`Carousel::mount`].
    pub fn new(mut options: CarouselOptions) -> Self {
        if options.items.is_empty() {
            cwarn!("Carousel::new: no items, using the built-in list");
            options.items = default_testimonials();
        }
        let track = LoopTrack::new(options.items.len());
        cdebug!(
            items = options.items.len(),
            autoplay_interval_ms = options.autoplay_interval_ms,
            "Carousel::new"
        );
        Self {
            track,
            cursor: track.midpoint(),
            env: options.initial_environment,
            autoplay: Autoplay::new(options.autoplay_interval_ms),
            arbiter: Arbiter::new(options.swipe_threshold_px),
            layout: LayoutTranslator::new(),
            focus_request: None,
            mounted: false,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Manual navigation uses this internally: stopping autoplay, moving the cursor and re-arming
    /// autoplay reach the callback as one change.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        let out = f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
        out
    }

    /// Attaches the carousel to its host: requests the first layout frame and arms autoplay.
    pub fn mount(&mut self, now_ms: u64) {
        if self.mounted {
            return;
        }
        cdebug!(now_ms, "Carousel::mount");
        self.batch_update(|c| {
            c.mounted = true;
            c.layout.invalidate();
            c.resume_autoplay(now_ms);
            c.notify();
        });
    }

    /// Detaches the carousel: drops interaction holds, the drag session, pending frames and focus
    /// requests, and cancels autoplay as the very last step.
    pub fn unmount(&mut self) {
        cdebug!(mounted = self.mounted, "Carousel::unmount");
        let was_mounted = core::mem::replace(&mut self.mounted, false);
        self.arbiter.reset();
        self.layout.cancel();
        self.focus_request = None;
        let cancelled = self.autoplay.stop();
        if was_mounted || cancelled {
            self.notify();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn items(&self) -> &[Testimonial] {
        &self.options.items
    }

    /// Number of real items (`N`).
    pub fn len(&self) -> usize {
        self.track.len()
    }

    /// Always `false`: empty lists are replaced at construction.
    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    pub fn track(&self) -> LoopTrack {
        self.track
    }

    /// The extended-track cursor, always in `[N, 2N)`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The logical index of the active item, in `[0, N)`.
    pub fn logical_index(&self) -> usize {
        self.track.to_logical(self.cursor)
    }

    pub fn active_item(&self) -> &Testimonial {
        &self.options.items[self.logical_index()]
    }

    pub fn extended_len(&self) -> usize {
        self.track.extended_len()
    }

    /// The item shown at extended-track position `index`.
    pub fn extended_item(&self, index: usize) -> Option<&Testimonial> {
        if index >= self.track.extended_len() {
            return None;
        }
        self.options.items.get(self.track.identity(index))
    }

    /// Visual state of the slide at extended-track position `index`.
    pub fn slide_state(&self, index: usize) -> SlideState {
        SlideState::for_distance(self.track.distance(index, self.cursor))
    }

    /// Iterates over every slide of the extended track, in order, without allocations.
    pub fn for_each_slide(&self, mut f: impl FnMut(SlideView<'_, Testimonial>)) {
        for index in 0..self.track.extended_len() {
            let identity = self.track.identity(index);
            f(SlideView {
                index,
                identity,
                state: self.slide_state(index),
                item: &self.options.items[identity],
            });
        }
    }

    pub fn environment(&self) -> Environment {
        self.env
    }

    pub fn arbiter(&self) -> &Arbiter {
        &self.arbiter
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn autoplay_timer(&self) -> Option<TimerHandle> {
        self.autoplay.timer()
    }

    /// When the host should next call [`Carousel::tick`].
    pub fn next_tick_ms(&self) -> Option<u64> {
        self.autoplay.next_due_ms()
    }

    /// The single writer of the cursor. Moves from `base` by `delta` through the loop model.
    ///
    /// Returns `true` when the cursor changed.
    fn commit(&mut self, base: usize, delta: isize, focus_heading: bool) -> bool {
        let next = self.track.advance(base, delta);
        if next == self.cursor {
            return false;
        }
        ctrace!(from = self.cursor, to = next, "cursor commit");
        self.cursor = next;
        if focus_heading {
            self.focus_request = Some(next);
        }
        self.layout.invalidate();
        self.notify();
        true
    }

    fn stop_autoplay(&mut self) {
        if self.autoplay.stop() {
            self.notify();
        }
    }

    /// Re-arms autoplay when mounted and no interaction holds it paused. The driver itself
    /// re-checks motion, visibility, interval and item count.
    fn resume_autoplay(&mut self, now_ms: u64) {
        if !self.mounted || !self.arbiter.is_idle() {
            return;
        }
        if self.autoplay.start(now_ms, self.env, self.track.len()) {
            self.notify();
        }
    }

    /// Advances on a due autoplay tick. Call from the host's timer or frame loop.
    ///
    /// Returns `true` when a tick fired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.mounted || !self.autoplay.poll(now_ms) {
            return false;
        }
        self.commit(self.cursor, 1, false);
        true
    }

    /// Runs a manual command bracketed by an autoplay stop and re-arm, and requests focus on the
    /// new active heading.
    ///
    /// Returns `true` when the cursor changed.
    pub fn navigate(&mut self, command: Command, now_ms: u64) -> bool {
        let (base, delta) = match command {
            Command::Step(direction) => (self.cursor, direction.delta()),
            Command::GoTo(logical) => {
                if logical >= self.track.len() {
                    cwarn!(logical, len = self.track.len(), "go_to: logical index out of range");
                    return false;
                }
                (self.track.target_for(logical), 0)
            }
        };
        self.batch_update(|c| {
            c.stop_autoplay();
            let changed = c.commit(base, delta, true);
            c.resume_autoplay(now_ms);
            changed
        })
    }

    /// "Previous" control.
    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.navigate(Command::Step(Direction::Previous), now_ms)
    }

    /// "Next" control.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(Command::Step(Direction::Next), now_ms)
    }

    /// Pagination dot for logical index `logical`.
    pub fn go_to(&mut self, logical: usize, now_ms: u64) -> bool {
        self.navigate(Command::GoTo(logical), now_ms)
    }

    /// Keyboard input on the region. Returns `true` when the key was handled (the host should
    /// prevent its default action).
    pub fn key_down(&mut self, key: Key, now_ms: u64) -> bool {
        let Some(command) = self.arbiter.key_command(key) else {
            return false;
        };
        self.navigate(command, now_ms);
        true
    }

    fn begin_interaction(&mut self, interaction: Interaction) {
        self.arbiter.begin(interaction);
        self.stop_autoplay();
    }

    fn end_interaction(&mut self, interaction: Interaction, now_ms: u64) {
        self.arbiter.end(interaction);
        self.resume_autoplay(now_ms);
    }

    /// Keyboard focus entered the region (or one of its controls).
    pub fn focus_in(&mut self) {
        self.begin_interaction(Interaction::Focus);
    }

    /// Keyboard focus left the region.
    pub fn focus_out(&mut self, now_ms: u64) {
        self.end_interaction(Interaction::Focus, now_ms);
    }

    /// The mouse entered the carousel area.
    pub fn mouse_enter(&mut self) {
        self.begin_interaction(Interaction::Hover);
    }

    /// The mouse left the carousel area.
    pub fn mouse_leave(&mut self, now_ms: u64) {
        self.end_interaction(Interaction::Hover, now_ms);
    }

    /// Pointer pressed. Touch and pen pointers start a drag session and pause autoplay; mouse
    /// pointers are ignored. Returns `true` when the host should capture the pointer.
    pub fn pointer_down(&mut self, input: PointerInput) -> bool {
        if !self.arbiter.pointer_down(input) {
            return false;
        }
        self.stop_autoplay();
        true
    }

    /// Pointer moved. Commits a step each time the swipe threshold is crossed.
    pub fn pointer_move(&mut self, input: PointerInput) -> Option<Direction> {
        let direction = self.arbiter.pointer_move(input)?;
        self.commit(self.cursor, direction.delta(), false);
        Some(direction)
    }

    /// Pointer released. Ends the drag and re-arms autoplay whether or not a step was committed.
    ///
    /// Returns the pointer id to release from capture, if it owned the drag.
    pub fn pointer_up(&mut self, pointer_id: u32, now_ms: u64) -> Option<u32> {
        let released = self.arbiter.pointer_up(pointer_id);
        self.resume_autoplay(now_ms);
        released
    }

    /// Pointer cancelled by the platform. Same as [`Carousel::pointer_up`].
    pub fn pointer_cancel(&mut self, pointer_id: u32, now_ms: u64) -> Option<u32> {
        self.pointer_up(pointer_id, now_ms)
    }

    /// Document visibility changed.
    pub fn set_document_visible(&mut self, visible: bool, now_ms: u64) {
        self.env.document_visible = visible;
        if visible {
            self.resume_autoplay(now_ms);
        } else {
            self.stop_autoplay();
        }
    }

    /// The reduced-motion preference changed.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool, now_ms: u64) {
        self.env.reduced_motion = reduced_motion;
        if reduced_motion {
            self.stop_autoplay();
        } else {
            self.resume_autoplay(now_ms);
        }
    }

    /// The container, track or window was resized.
    pub fn on_resize(&mut self) {
        self.layout.invalidate();
    }

    /// Whether a layout frame is waiting for measurements.
    pub fn frame_pending(&self) -> bool {
        self.mounted && self.layout.frame_pending()
    }

    /// Answers a pending layout frame. See [`LayoutTranslator::on_frame`].
    pub fn on_frame(&mut self, measure: impl FnOnce(usize) -> Option<Measurements>) -> Option<f32> {
        if !self.mounted {
            return None;
        }
        let offset = self.layout.on_frame(self.cursor, measure)?;
        self.notify();
        Some(offset)
    }

    /// Track translation (CSS pixels) that centers the active slide.
    pub fn offset(&self) -> f32 {
        self.layout.offset()
    }

    /// The extended-track index whose heading should receive focus, once.
    pub fn take_focus_request(&mut self) -> Option<usize> {
        self.focus_request.take()
    }

    pub fn aria_label(&self) -> &str {
        &self.options.aria_label
    }

    /// Live-region text for the active slide.
    pub fn announcement(&self) -> String {
        aria::announcement(self.logical_index(), self.track.len())
    }

    /// Group label of the slide at extended-track position `index`.
    pub fn slide_label(&self, index: usize) -> String {
        aria::slide_label(self.track.identity(index), self.track.len())
    }

    /// Label of the pagination dot for logical index `logical`.
    pub fn dot_label(&self, logical: usize) -> Option<String> {
        self.options
            .items
            .get(logical)
            .map(|item| aria::dot_label(&item.name))
    }

    pub fn is_current_dot(&self, logical: usize) -> bool {
        logical == self.logical_index()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            cursor: self.cursor,
            logical_index: self.logical_index(),
            autoplay: self.autoplay.state(),
            offset: self.layout.offset(),
        }
    }

    /// Shows logical index `logical` without touching autoplay or focus (e.g. restoring a
    /// snapshot). Out-of-range indexes are ignored.
    pub fn restore_logical(&mut self, logical: usize) -> bool {
        if logical >= self.track.len() {
            cwarn!(logical, len = self.track.len(), "restore_logical: out of range");
            return false;
        }
        self.commit(self.track.target_for(logical), 0, false)
    }
}
