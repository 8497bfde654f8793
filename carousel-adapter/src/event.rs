use carousel::{Key, PointerInput};

/// A clickable carousel control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    Previous,
    Next,
    /// Pagination dot for a logical index.
    Dot(usize),
}

/// Host events a carousel listens to, modelled on DOM events.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    KeyDown(Key),
    FocusIn,
    FocusOut,
    MouseEnter,
    MouseLeave,
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp { pointer_id: u32 },
    PointerCancel { pointer_id: u32 },
    Activate(Control),
    VisibilityChange { visible: bool },
    ReducedMotionChange { reduced_motion: bool },
    Resize,
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventOutcome {
    /// The event was consumed; suppress the platform default (e.g. arrow-key scrolling).
    pub prevent_default: bool,
    /// The active slide changed.
    pub moved: bool,
    /// Capture this pointer for the rest of the drag.
    pub capture_pointer: Option<u32>,
    /// Release this pointer from capture.
    pub release_pointer: Option<u32>,
    /// Move focus to the heading of this extended-track slide.
    pub focus_heading: Option<usize>,
    /// A layout frame should be requested.
    pub request_frame: bool,
}
