/// Horizontal geometry of one slide, relative to the track's left edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideGeometry {
    pub left: f32,
    pub width: f32,
}

/// Live measurements taken during a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    pub container_width: f32,
    pub active_slide: SlideGeometry,
}

impl Measurements {
    /// Measurements are usable once layout has happened: finite, and a non-empty container.
    pub fn is_valid(&self) -> bool {
        self.container_width.is_finite()
            && self.container_width > 0.0
            && self.active_slide.left.is_finite()
            && self.active_slide.width.is_finite()
            && self.active_slide.width >= 0.0
    }
}

/// Track translation that centers `slide` in a container of `container_width`.
pub fn center_offset(container_width: f32, slide: SlideGeometry) -> f32 {
    -(slide.left + slide.width / 2.0 - container_width / 2.0)
}

/// Turns the cursor into a track offset from live measurements.
///
/// Recomputation is deferred: triggers only mark a frame as pending, and the host answers with
/// [`LayoutTranslator::on_frame`] once layout is up to date. The translator keeps no record of
/// why the cursor moved.
#[derive(Clone, Debug, Default)]
pub struct LayoutTranslator {
    offset: f32,
    frame_pending: bool,
    measured_cursor: Option<usize>,
}

impl LayoutTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last computed offset (0 until the first successful measurement).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The cursor the current offset was computed for.
    pub fn measured_cursor(&self) -> Option<usize> {
        self.measured_cursor
    }

    /// Requests a recompute on the next frame (cursor change or resize).
    pub fn invalidate(&mut self) {
        self.frame_pending = true;
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Drops a pending frame request (teardown).
    pub fn cancel(&mut self) {
        self.frame_pending = false;
    }

    /// Runs the pending recompute for `cursor`.
    ///
    /// `measure` is called with the cursor and returns the geometry of that slide, or `None` when
    /// it is not laid out yet. Missing or invalid measurements leave the previous offset in place
    /// until the next trigger. Returns the new offset when one was computed.
    pub fn on_frame(
        &mut self,
        cursor: usize,
        measure: impl FnOnce(usize) -> Option<Measurements>,
    ) -> Option<f32> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;

        let m = measure(cursor)?;
        if !m.is_valid() {
            cwarn!(
                cursor,
                container_width = m.container_width,
                "LayoutTranslator: skipping invalid measurements"
            );
            return None;
        }
        self.offset = center_offset(m.container_width, m.active_slide);
        self.measured_cursor = Some(cursor);
        ctrace!(cursor, offset = self.offset, "layout recomputed");
        Some(self.offset)
    }
}
