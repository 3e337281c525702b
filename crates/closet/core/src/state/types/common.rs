use std::fmt;

/// Unique identifier for a garment piece record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece#{}", self.0)
    }
}

/// Unique identifier for a saved fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitId(pub u64);

impl fmt::Display for FitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fit#{}", self.0)
    }
}

/// Unique identifier for a fit-piece association inside a fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitPieceId(pub u64);

impl fmt::Display for FitPieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fit_piece#{}", self.0)
    }
}

/// Unique identifier for a fit collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitCollId(pub u64);

impl fmt::Display for FitCollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fit_coll#{}", self.0)
    }
}

/// One of the four fixed garment positions in a fit.
///
/// Slot indices 0–3 are part of the save wire format and must stay stable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    Headwear,
    Top,
    Bottom,
    Footwear,
}

impl Slot {
    /// All slots in wire-index order.
    pub const ALL: [Slot; 4] = [Slot::Headwear, Slot::Top, Slot::Bottom, Slot::Footwear];

    /// Wire index of this slot (0–3).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::Headwear => 0,
            Slot::Top => 1,
            Slot::Bottom => 2,
            Slot::Footwear => 3,
        }
    }

    /// Slot for a wire index, if in range.
    pub const fn from_index(index: usize) -> Option<Slot> {
        match index {
            0 => Some(Slot::Headwear),
            1 => Some(Slot::Top),
            2 => Some(Slot::Bottom),
            3 => Some(Slot::Footwear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(Slot::from_index(4), None);
    }
}
