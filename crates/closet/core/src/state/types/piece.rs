//! Garment piece records and their classification tags.

use super::common::{PieceId, Slot};

/// Garment category of a piece.
///
/// The four slot-backed kinds correspond one-to-one with [`Slot`]; accessories
/// and unclassified pieces never occupy a slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GarmentKind {
    Headwear,
    Top,
    Bottom,
    Footwear,
    Accessory,
    #[default]
    Unknown,
}

impl GarmentKind {
    /// The slot this kind occupies, if any.
    pub const fn slot(self) -> Option<Slot> {
        match self {
            GarmentKind::Headwear => Some(Slot::Headwear),
            GarmentKind::Top => Some(Slot::Top),
            GarmentKind::Bottom => Some(Slot::Bottom),
            GarmentKind::Footwear => Some(Slot::Footwear),
            GarmentKind::Accessory | GarmentKind::Unknown => None,
        }
    }
}

impl Slot {
    /// Garment kind accepted by this slot.
    pub const fn garment(self) -> GarmentKind {
        match self {
            Slot::Headwear => GarmentKind::Headwear,
            Slot::Top => GarmentKind::Top,
            Slot::Bottom => GarmentKind::Bottom,
            Slot::Footwear => GarmentKind::Footwear,
        }
    }
}

/// Layering classification of a piece.
///
/// Only `Outer` pieces are eligible as the optional layer shown over the Top
/// slot.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LayerKind {
    Inner,
    Outer,
    #[default]
    None,
}

/// Classification tag attached to a piece (brand, color, material, ...).
///
/// Some tags carry a display flag and ordering for the detail screen; tags
/// without ordering render after the ordered ones.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    pub name: String,
    pub description: String,
    pub display: bool,
    pub order: Option<u32>,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            display: false,
            order: None,
        }
    }

    pub fn with_display(mut self, order: u32) -> Self {
        self.display = true;
        self.order = Some(order);
        self
    }
}

/// A single garment record created server-side on photo upload.
///
/// Pieces are owned by the [`crate::state::Closet`]; fits reference them
/// weakly by id and resolve through the closet's piece list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: PieceId,
    /// Server-side image reference (storage key, not a URL).
    pub image_ref: String,
    pub garment: GarmentKind,
    pub layer: LayerKind,
    pub favorite: bool,
    /// Whether the piece shows up in the closet tab. Archived pieces are
    /// removed outright, so this only gates visibility.
    pub in_closet: bool,
    pub tags: Vec<Tag>,
}

impl Piece {
    pub fn new(id: PieceId, image_ref: impl Into<String>, garment: GarmentKind) -> Self {
        Self {
            id,
            image_ref: image_ref.into(),
            garment,
            layer: LayerKind::None,
            favorite: false,
            in_closet: true,
            tags: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: LayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// True if this piece can serve as the Top slot's layer piece.
    #[inline]
    pub fn is_layerable(&self) -> bool {
        self.layer == LayerKind::Outer
    }
}
