use crate::display::SpriteEdge;

/// Selects between the behaviors historical interpreters disagree on.
///
/// The default is the canonical behavior of this interpreter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// `FX55` and `FX65` leave `I` at `I + X + 1` instead of keeping it.
    pub bulk_transfer_advances_index: bool,
    /// How sprites crossing the screen border are drawn.
    pub sprite_edge: SpriteEdge,
}

impl Quirks {
    /// The behavior of the original COSMAC VIP interpreter.
    pub fn cosmac_vip() -> Self {
        Self {
            bulk_transfer_advances_index: true,
            sprite_edge: SpriteEdge::Clip,
        }
    }
}
