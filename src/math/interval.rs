/// A half-open interval `[start, end)` along a wall's local axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Inclusive lower bound.
    pub start: f64,
    /// Exclusive upper bound.
    pub end: f64,
}

impl Interval {
    /// Creates a new interval `[start, end)`.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open overlap test against another interval.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }
}

/// Returns `true` iff `[a_start, a_end)` and `[b_start, b_end)` share interior.
///
/// Touching endpoints (`a_end == b_start`) do not count, so adjacent features
/// may sit flush against each other.
#[must_use]
pub fn overlaps(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Removes `cut` from every segment in `segments`.
///
/// Segments the cut does not intersect are kept unchanged. An intersected
/// segment is replaced by its left remainder (if the cut starts after it) and
/// its right remainder (if the cut ends before it). Output order follows
/// input order, so sorted input stays sorted.
#[must_use]
pub fn subtract(segments: &[Interval], cut: &Interval) -> Vec<Interval> {
    let mut result = Vec::with_capacity(segments.len() + 1);
    for seg in segments {
        if !seg.overlaps(cut) {
            result.push(*seg);
            continue;
        }
        if cut.start > seg.start {
            result.push(Interval::new(seg.start, cut.start));
        }
        if cut.end < seg.end {
            result.push(Interval::new(cut.end, seg.end));
        }
    }
    result
}
