//! Per-unit record of findings already reported.

/// Stable identifier of a tracked obsolete option: its position in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TupleId(u8);

impl TupleId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Bit set of tracked options already reported for one unit.
///
/// Bits are only ever set. A fresh tracker is created for each unit and
/// dropped when the unit's pass ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportedState {
    bits: u32,
}

impl ReportedState {
    /// Number of options a tracker can hold.
    pub const CAPACITY: usize = u32::BITS as usize;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, id: TupleId) -> bool {
        self.bits & Self::mask(id) != 0
    }

    pub fn set(&mut self, id: TupleId) {
        self.bits |= Self::mask(id);
    }

    /// Number of options reported so far.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    fn mask(id: TupleId) -> u32 {
        debug_assert!(id.index() < Self::CAPACITY);
        1 << id.index()
    }
}
