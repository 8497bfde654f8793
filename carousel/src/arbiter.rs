use crate::{Direction, Key, PointerInput};

/// Default horizontal distance, in CSS pixels, a drag must cover to commit one step.
pub const SWIPE_THRESHOLD_PX: f32 = 48.0;

/// A user interaction that holds autoplay paused while it lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    /// Mouse hovering the carousel region.
    Hover,
    /// Keyboard focus inside the carousel region.
    Focus,
    /// A touch/pen drag in progress.
    Drag,
}

impl Interaction {
    fn bit(self) -> u8 {
        match self {
            Self::Hover => 1 << 0,
            Self::Focus => 1 << 1,
            Self::Drag => 1 << 2,
        }
    }
}

/// A discrete navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Step(Direction),
    /// Jump to a logical index (pagination dot).
    GoTo(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    pointer_id: u32,
    reference_x: f32,
}

/// Tracks which interactions are in progress and turns raw input into commands.
///
/// The arbiter never touches the cursor or the timer itself; `Carousel` asks it what an input
/// means and whether autoplay may be re-armed.
#[derive(Clone, Debug)]
pub struct Arbiter {
    holds: u8,
    drag: Option<DragSession>,
    swipe_threshold_px: f32,
}

impl Arbiter {
    pub fn new(swipe_threshold_px: f32) -> Self {
        let swipe_threshold_px = if swipe_threshold_px.is_finite() && swipe_threshold_px > 0.0 {
            swipe_threshold_px
        } else {
            cwarn!(swipe_threshold_px, "Arbiter: invalid swipe threshold, using default");
            SWIPE_THRESHOLD_PX
        };
        Self {
            holds: 0,
            drag: None,
            swipe_threshold_px,
        }
    }

    pub fn swipe_threshold_px(&self) -> f32 {
        self.swipe_threshold_px
    }

    /// Marks `interaction` as active. Returns `true` when it was not active before.
    pub fn begin(&mut self, interaction: Interaction) -> bool {
        let was = self.holds & interaction.bit() != 0;
        self.holds |= interaction.bit();
        !was
    }

    /// Marks `interaction` as finished. Returns `true` when it was active.
    pub fn end(&mut self, interaction: Interaction) -> bool {
        let was = self.holds & interaction.bit() != 0;
        self.holds &= !interaction.bit();
        was
    }

    pub fn is_active(&self, interaction: Interaction) -> bool {
        self.holds & interaction.bit() != 0
    }

    /// No interaction holds autoplay paused.
    pub fn is_idle(&self) -> bool {
        self.holds == 0
    }

    /// Drops every hold and any drag session (teardown).
    pub fn reset(&mut self) {
        self.holds = 0;
        self.drag = None;
    }

    /// Keyboard command for `key`, if the region has focus.
    pub fn key_command(&self, key: Key) -> Option<Command> {
        if !self.is_active(Interaction::Focus) {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(Command::Step(Direction::Previous)),
            Key::ArrowRight => Some(Command::Step(Direction::Next)),
            Key::Other => None,
        }
    }

    /// Starts a drag session. Returns `false` for mouse pointers, which never swipe, and for any
    /// pointer pressed while another one owns the drag.
    pub fn pointer_down(&mut self, input: PointerInput) -> bool {
        if !input.kind.can_swipe() || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession {
            pointer_id: input.pointer_id,
            reference_x: input.x,
        });
        self.begin(Interaction::Drag);
        true
    }

    /// Feeds a move sample. Returns a step when the distance from the reference point reaches the
    /// threshold; the reference then moves to `x` so one drag can commit several steps.
    pub fn pointer_move(&mut self, input: PointerInput) -> Option<Direction> {
        let threshold = self.swipe_threshold_px;
        let drag = self.drag.as_mut()?;
        if drag.pointer_id != input.pointer_id {
            return None;
        }
        let delta = input.x - drag.reference_x;
        if !delta.is_finite() || delta.abs() < threshold {
            return None;
        }
        drag.reference_x = input.x;
        // Dragging left reveals the next slide.
        Some(if delta < 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        })
    }

    /// Ends the drag session (pointer up or cancel).
    ///
    /// Returns the captured pointer id the host should release, if this pointer owned the drag.
    pub fn pointer_up(&mut self, pointer_id: u32) -> Option<u32> {
        match self.drag {
            Some(drag) if drag.pointer_id == pointer_id => {
                self.drag = None;
                self.end(Interaction::Drag);
                Some(pointer_id)
            }
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}
