//! Token unit conversion.
//!
//! ## Overview
//!
//! Ledger amounts are integers in base units. A token's `decimals` says how
//! many of those base units make one whole token, exactly like ERC-20's
//! `decimals()`. These helpers convert between base units and the decimal
//! strings people read and type.
//!
//! All conversions go through `rust_decimal`, never floating point. Values
//! outside what a `Decimal` can hold (96-bit mantissa, scale ≤ 28) return
//! `None` instead of losing precision.
//!
//! ## Examples
//!
//! ```
//! use token_ledger::types::units::{to_base_units, from_base_units};
//!
//! // 1.5 tokens with 18 decimals
//! let amount = to_base_units("1.5", 18).unwrap();
//! assert_eq!(amount, 1_500_000_000_000_000_000);
//!
//! assert_eq!(from_base_units(amount, 2).unwrap(), "15000000000000000.00");
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::types::Amount;

/// Default decimals used by most ERC-20 tokens
pub const DEFAULT_DECIMALS: u8 = 18;

/// Largest `decimals` a `Decimal` can represent
pub const MAX_DECIMALS: u8 = 28;

// ============================================================================
// Conversion Functions
// ============================================================================

/// `10^decimals` as a Decimal
///
/// Returns `None` if `decimals` exceeds [`MAX_DECIMALS`].
pub fn unit_scale(decimals: u8) -> Option<Decimal> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    Decimal::from_u128(10u128.pow(decimals as u32))
}

/// Convert a decimal string to base units
///
/// # Returns
///
/// * `Some(Amount)` - The base unit amount (rounded to the nearest unit)
/// * `None` - If parsing fails, the value is negative, or out of range
///
/// # Example
///
/// ```
/// use token_ledger::types::units::to_base_units;
///
/// assert_eq!(to_base_units("1", 6), Some(1_000_000));
/// assert_eq!(to_base_units("0.000001", 6), Some(1));
/// assert_eq!(to_base_units("-1", 6), None);
/// ```
pub fn to_base_units(s: &str, decimals: u8) -> Option<Amount> {
    let decimal = Decimal::from_str(s).ok()?;
    decimal_to_base_units(decimal, decimals)
}

/// Convert a Decimal token quantity to base units
pub fn decimal_to_base_units(d: Decimal, decimals: u8) -> Option<Amount> {
    if d.is_sign_negative() && !d.is_zero() {
        return None;
    }

    let scaled = d.checked_mul(unit_scale(decimals)?)?;
    scaled.round_dp(0).to_u128()
}

/// Convert base units to a Decimal token quantity
///
/// Returns `None` when `value` does not fit a Decimal mantissa.
pub fn base_units_to_decimal(value: Amount, decimals: u8) -> Option<Decimal> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    let mantissa = i128::try_from(value).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, decimals as u32).ok()
}

/// Convert base units to a string with exactly `decimals` fractional places
///
/// # Example
///
/// ```
/// use token_ledger::types::units::from_base_units;
///
/// assert_eq!(from_base_units(1_000_000, 6).unwrap(), "1.000000");
/// assert_eq!(from_base_units(5, 0).unwrap(), "5");
/// ```
pub fn from_base_units(value: Amount, decimals: u8) -> Option<String> {
    let decimal = base_units_to_decimal(value, decimals)?;
    Some(format!("{:.prec$}", decimal, prec = decimals as usize))
}

/// Convert base units to a string with trailing zeros removed
///
/// # Example
///
/// ```
/// use token_ledger::types::units::from_base_units_trimmed;
///
/// assert_eq!(from_base_units_trimmed(1_000_000, 6).unwrap(), "1");
/// assert_eq!(from_base_units_trimmed(1_500_000, 6).unwrap(), "1.5");
/// ```
pub fn from_base_units_trimmed(value: Amount, decimals: u8) -> Option<String> {
    let decimal = base_units_to_decimal(value, decimals)?;
    Some(decimal.normalize().to_string())
}

// ============================================================================
// Unit Tests
// ============================================================================
