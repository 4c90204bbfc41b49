//! Fixed-price conversion between payment units and token base units.
//!
//! Prices are quoted per *whole* token. A whole token is `scale` base units,
//! where `scale = 10^decimals`. All division floors toward zero, so a
//! quantity that is not a multiple of `scale` is charged for its whole part
//! only, and a payment that is not a multiple of the price buys the whole
//! tokens it covers.

/// Decimal places of the reference asset scale.
pub const REFERENCE_DECIMALS: u32 = 18;

/// Base units per whole token at the reference scale.
pub const REFERENCE_SCALE: i128 = 1_000_000_000_000_000_000;

/// `10^38` is the largest power of ten representable in `i128`.
pub const MAX_DECIMALS: u32 = 38;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PricingError {
    /// Decimals exceed [`MAX_DECIMALS`].
    UnsupportedDecimals,
    /// Price is zero, so no quantity can be derived from a payment.
    ZeroPrice,
    Overflow,
}

/// Base units per whole token for an asset with `decimals` decimal places.
pub fn scale_for_decimals(decimals: u32) -> Result<i128, PricingError> {
    if decimals > MAX_DECIMALS {
        return Err(PricingError::UnsupportedDecimals);
    }
    10i128
        .checked_pow(decimals)
        .ok_or(PricingError::Overflow)
}

/// Payment owed for `quantity` base units: `(quantity / scale) * unit_price`.
pub fn cost_of(quantity: i128, unit_price: i128, scale: i128) -> Result<i128, PricingError> {
    (quantity / scale)
        .checked_mul(unit_price)
        .ok_or(PricingError::Overflow)
}

/// Base units bought by `payment`: `floor(payment / unit_price) * scale`.
pub fn quantity_for(payment: i128, unit_price: i128, scale: i128) -> Result<i128, PricingError> {
    if unit_price == 0 {
        return Err(PricingError::ZeroPrice);
    }
    (payment / unit_price)
        .checked_mul(scale)
        .ok_or(PricingError::Overflow)
}
