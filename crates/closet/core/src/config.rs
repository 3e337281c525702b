/// Closet configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosetConfig {
    /// Vertical offset applied to a slot before the user drags the piece.
    pub default_offset_y: i32,
}

impl ClosetConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of garment slots in a fit (Headwear, Top, Bottom, Footwear).
    pub const SLOT_COUNT: usize = 4;
    /// Maximum fit pieces per fit: one per slot.
    pub const MAX_FIT_PIECES: usize = Self::SLOT_COUNT;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_OFFSET_Y: i32 = 0;

    pub fn new() -> Self {
        Self {
            default_offset_y: Self::DEFAULT_OFFSET_Y,
        }
    }
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self::new()
    }
}
