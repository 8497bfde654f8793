/// Loop arithmetic for an extended track made of three back-to-back copies of `len` items.
///
/// The cursor always points into the middle copy, `[len, 2 * len)`. Every move goes through
/// [`LoopTrack::advance`], which re-wraps by one period in the same step, so a cursor outside the
/// middle copy is never observable. Neighbours on either side always exist on the extended track,
/// which lets a renderer keep real slides next to the active one without inserting or removing
/// nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopTrack {
    len: usize,
}

impl LoopTrack {
    /// Number of copies of the item list on the extended track.
    pub const COPIES: usize = 3;

    /// Creates the loop model for `len` items. `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "LoopTrack: empty item list");
        Self { len: len.max(1) }
    }

    /// Number of real items (`N`).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a track holds at least one item.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First index of the middle copy; the cursor's initial value.
    pub fn midpoint(&self) -> usize {
        self.len
    }

    /// Length of the extended track (`3N`).
    pub fn extended_len(&self) -> usize {
        self.len * Self::COPIES
    }

    /// Whether `cursor` lies in the middle copy.
    pub fn contains(&self, cursor: usize) -> bool {
        cursor >= self.len && cursor < self.len * 2
    }

    /// Moves `cursor` by `delta` and re-wraps the result into `[N, 2N)`.
    ///
    /// Callers only request moves of magnitude `<= N`, for which a single `±N` wrap suffices.
    /// Larger jumps are folded with a Euclidean remainder in release builds.
    pub fn advance(&self, cursor: usize, delta: isize) -> usize {
        debug_assert!(
            self.contains(cursor),
            "LoopTrack: cursor out of range (cursor={cursor}, len={})",
            self.len
        );
        let n = self.len as isize;
        let Some(next) = (cursor as isize).checked_add(delta) else {
            cwarn!(cursor, delta, len = self.len, "LoopTrack: jump overflows the cursor range");
            return self.fold(cursor, delta);
        };
        let wrapped = if next >= 2 * n {
            next - n
        } else if next < n {
            next + n
        } else {
            next
        };
        if wrapped >= n && wrapped < 2 * n {
            return wrapped as usize;
        }

        cwarn!(cursor, delta, len = self.len, "LoopTrack: jump wider than one period");
        self.fold(cursor, delta)
    }

    /// Euclidean fold of `cursor + delta` into `[N, 2N)`, reducing each term first so no
    /// intermediate can overflow.
    fn fold(&self, cursor: usize, delta: isize) -> usize {
        let n = self.len as isize;
        let base = (cursor % self.len) as isize;
        let step = delta.rem_euclid(n);
        (n + (base + step).rem_euclid(n)) as usize
    }

    /// The cursor for logical index `logical`, passed through the same wrap step.
    pub fn target_for(&self, logical: usize) -> usize {
        debug_assert!(
            logical < self.len,
            "LoopTrack: logical index out of range (k={logical}, len={})",
            self.len
        );
        self.advance(self.midpoint() + logical % self.len, 0)
    }

    /// Maps a cursor back to its logical index in `[0, N)`.
    pub fn to_logical(&self, cursor: usize) -> usize {
        self.identity(cursor)
    }

    /// Maps any extended-track position to the item it shows.
    pub fn identity(&self, index: usize) -> usize {
        let n = self.len as isize;
        let rel = index as isize - self.midpoint() as isize;
        rel.rem_euclid(n) as usize
    }

    /// Distance between two extended-track positions.
    pub fn distance(&self, a: usize, b: usize) -> usize {
        a.abs_diff(b)
    }
}
