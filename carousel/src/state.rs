use crate::AutoplayState;

/// A lightweight, serializable snapshot of the carousel.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    /// Extended-track cursor, always in `[N, 2N)`.
    pub cursor: usize,
    pub logical_index: usize,
    pub autoplay: AutoplayState,
    /// Last computed track offset.
    pub offset: f32,
}
