/// Direction of a single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// The cursor delta this direction stands for.
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Ambient host state that gates autoplay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// The user asked for reduced motion (`prefers-reduced-motion: reduce`).
    pub reduced_motion: bool,
    /// The document is visible (not in a background tab / minimized).
    pub document_visible: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            document_visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Whether this pointer may start a drag-to-navigate gesture.
    ///
    /// Mouse pointers keep plain click semantics.
    pub fn can_swipe(self) -> bool {
        !matches!(self, Self::Mouse)
    }
}

/// A pointer sample in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    pub pointer_id: u32,
    pub kind: PointerKind,
    /// Horizontal client coordinate in CSS pixels.
    pub x: f32,
}

/// Keys the carousel reacts to. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Visual state of a slide, derived from its distance to the cursor on the extended track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideState {
    /// Distance 0: fully opaque and interactive.
    Active,
    /// Distance 1: dimmed, visible, non-interactive.
    Adjacent,
    /// Distance 2 or more: hidden and non-interactive.
    Far,
}

impl SlideState {
    pub fn for_distance(distance: usize) -> Self {
        match distance {
            0 => Self::Active,
            1 => Self::Adjacent,
            _ => Self::Far,
        }
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Active)
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Far)
    }

    /// `tabindex` for the slide heading: only the active heading is in the tab order.
    pub fn heading_tab_index(self) -> i32 {
        if self.is_interactive() { 0 } else { -1 }
    }
}

/// A slide as seen by a renderer, yielded by `Carousel::for_each_slide`.
#[derive(Clone, Copy, Debug)]
pub struct SlideView<'a, T> {
    /// Position on the extended track, `0..3N`.
    pub index: usize,
    /// Position in the item list, `0..N`.
    pub identity: usize,
    pub state: SlideState,
    pub item: &'a T,
}
