//! A single ticket-checker shift.

/// Closed time interval `[start, end]`.
///
/// Values are taken as given; a shift whose `end` precedes its `start` is
/// kept as-is and the routines in [`interval`](crate::interval) document how
/// they treat it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    pub start: i32,
    pub end:   i32,
}

impl Shift {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// `true` if the two shifts share more than an endpoint.
    pub fn overlaps(&self, other: &Shift) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shift; zero or negative for degenerate input.
    pub fn duration(&self) -> i64 {
        self.end as i64 - self.start as i64
    }
}

impl From<(i32, i32)> for Shift {
    fn from((start, end): (i32, i32)) -> Self {
        Self { start, end }
    }
}

impl From<[i32; 2]> for Shift {
    fn from([start, end]: [i32; 2]) -> Self {
        Self { start, end }
    }
}
