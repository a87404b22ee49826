// crates/shared-kernel/src/value_objects/period_level.rs
use std::fmt;

/// Index into the period dictionary: 0 = thousands, 1 = millions, ...
///
/// The units group (group index 0) has no period name, so a level is
/// always one less than the group index it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodLevel(usize);

impl PeriodLevel {
    pub const THOUSANDS: Self = Self(0);

    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Level naming the group at `group_index`; `None` for the units group.
    #[inline]
    pub const fn for_group(group_index: usize) -> Option<Self> {
        match group_index.checked_sub(1) {
            Some(level) => Some(Self(level)),
            None => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn group_index(self) -> usize {
        self.0 + 1
    }

    #[inline]
    pub const fn is_thousands(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PeriodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
