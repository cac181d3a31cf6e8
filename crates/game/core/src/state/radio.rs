//! Radio barter state: the wealth-gated order subsystem.

use super::DefinitionId;

/// An outstanding request for one item type at a premium payout.
///
/// Orders are immutable once posted; fulfillment replaces the whole order.
/// The target name and sprite are cached from the definition so the radio
/// panel can render without a catalog lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioOrder {
    pub target: DefinitionId,
    pub target_sprite: String,
    pub target_name: String,
    pub price_multiplier: u32,
}

/// Unlock flag plus the at-most-one active order.
///
/// `unlocked` is monotonic: once true it stays true until a full reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadioState {
    pub unlocked: bool,
    pub order: Option<RadioOrder>,
}
