/// Currency that never needs a rate lookup
pub const BASE_CURRENCY: &str = "USD";

/// Ceiling on total points awarded by a single quote
pub const MAX_POINTS: u64 = 50_000;

/// Rate of the base currency against itself
pub const BASE_RATE: f64 = 1.0;

/// Required length of a currency code, in characters
pub const CURRENCY_CODE_LEN: usize = 3;
