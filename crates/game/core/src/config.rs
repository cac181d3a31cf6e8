/// Game configuration constants and tunable parameters.
///
/// The catalog is assumed to be validated against these bounds at load time;
/// the rules engine never re-checks definition dimensions at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Grid width in cells.
    pub columns: u8,
    /// Grid height in cells.
    pub rows: u8,
    /// Flat price of one blind purchase from the catalog.
    pub buy_cost: u32,
    /// Balance a fresh (or reset) session starts with.
    pub starting_balance: u32,
    /// Sell-price multiplier applied to premium (combined) items.
    pub premium_multiplier: u32,
    /// Balance that must be reached on a sell to unlock the radio.
    pub radio_unlock_threshold: u32,
    /// Payout multiplier applied on top of the sell price for radio orders.
    pub radio_price_multiplier: u32,
}

impl GameConfig {
    pub const DEFAULT_COLUMNS: u8 = 8;
    pub const DEFAULT_ROWS: u8 = 8;
    pub const DEFAULT_BUY_COST: u32 = 50;
    pub const DEFAULT_STARTING_BALANCE: u32 = 500;
    pub const DEFAULT_PREMIUM_MULTIPLIER: u32 = 3;
    pub const DEFAULT_RADIO_UNLOCK_THRESHOLD: u32 = 1000;
    pub const DEFAULT_RADIO_PRICE_MULTIPLIER: u32 = 5;

    pub fn new() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            buy_cost: Self::DEFAULT_BUY_COST,
            starting_balance: Self::DEFAULT_STARTING_BALANCE,
            premium_multiplier: Self::DEFAULT_PREMIUM_MULTIPLIER,
            radio_unlock_threshold: Self::DEFAULT_RADIO_UNLOCK_THRESHOLD,
            radio_price_multiplier: Self::DEFAULT_RADIO_PRICE_MULTIPLIER,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
