//! Cycle Formula - Ovulation and fertile windows from a cycle length.
//!
//! Cycles of 26–32 days use the Standard Days Method (fixed offsets). Shorter
//! and longer cycles place ovulation relative to the next period, clamping
//! negative offsets of very short cycles to the anchor day.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DateRange, DayNumber};

/// Shortest cycle of the standard bucket.
pub const STANDARD_MIN_CYCLE: i64 = 26;

/// Longest cycle of the standard bucket.
pub const STANDARD_MAX_CYCLE: i64 = 32;

/// Cycle-length class selecting the offset formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketKind {
    Short,
    Standard,
    Long,
}

/// Ovulation and fertile windows as offsets from the cycle anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOffsets {
    pub ovulation: (i64, i64),
    pub fertile: (i64, i64),
}

impl CycleOffsets {
    /// Converts the offsets into absolute ranges.
    pub fn at(&self, anchor: DayNumber) -> CycleWindows {
        CycleWindows {
            ovulation: DateRange::new(anchor + self.ovulation.0, anchor + self.ovulation.1),
            fertile: DateRange::new(anchor + self.fertile.0, anchor + self.fertile.1),
        }
    }
}

/// Absolute ovulation and fertile windows of one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleWindows {
    pub ovulation: DateRange,
    pub fertile: DateRange,
}

struct Bucket {
    kind: BucketKind,
    matches: fn(i64) -> bool,
    offsets: fn(i64) -> CycleOffsets,
}

/// Evaluated in order; the first matching bucket wins.
const BUCKETS: &[Bucket] = &[
    Bucket {
        kind: BucketKind::Standard,
        matches: |length| (STANDARD_MIN_CYCLE..=STANDARD_MAX_CYCLE).contains(&length),
        offsets: |_| CycleOffsets {
            ovulation: (12, 14),
            fertile: (7, 18),
        },
    },
    Bucket {
        kind: BucketKind::Short,
        matches: |length| length < STANDARD_MIN_CYCLE,
        offsets: |length| relative_offsets(length, true),
    },
    Bucket {
        kind: BucketKind::Long,
        matches: |length| length > STANDARD_MAX_CYCLE,
        offsets: |length| relative_offsets(length, false),
    },
];

fn relative_offsets(length: i64, clamp: bool) -> CycleOffsets {
    let offset = |days_before_next: i64| {
        let raw = length - days_before_next;
        if clamp {
            raw.max(0)
        } else {
            raw
        }
    };
    CycleOffsets {
        ovulation: (offset(16), offset(14)),
        fertile: (offset(19), offset(11)),
    }
}

/// Pure cycle-length formula.
pub struct CycleFormula;

impl CycleFormula {
    /// Returns the bucket a cycle length falls into.
    pub fn bucket_for(period_length: i64) -> BucketKind {
        Self::bucket(period_length).kind
    }

    /// Ovulation and fertile windows as offsets from the cycle start.
    ///
    /// # Edge Cases
    /// - Lengths below 16 clamp ovulation and fertile starts to offset 0
    /// - Lengths of 26–32 ignore the exact length
    pub fn ovulation_and_fertile(period_length: i64) -> CycleOffsets {
        (Self::bucket(period_length).offsets)(period_length)
    }

    /// Absolute windows for a cycle that starts on `anchor`.
    pub fn windows_at(anchor: DayNumber, period_length: i64) -> CycleWindows {
        Self::ovulation_and_fertile(period_length).at(anchor)
    }

    fn bucket(period_length: i64) -> &'static Bucket {
        BUCKETS
            .iter()
            .find(|bucket| (bucket.matches)(period_length))
            // The predicates partition every i64, so the fallback never triggers.
            .unwrap_or(&BUCKETS[0])
    }
}
