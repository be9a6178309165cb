//! Conversion between display units and on-chain base units.
//!
//! On-chain amounts are integers in the smallest indivisible unit: lamports
//! for native SOL (1 SOL = 10^9 lamports), the mint-defined base unit for
//! SPL tokens. User-facing surfaces deal in decimal display strings; this
//! module converts between the two without ever going through floating
//! point, so amounts stay exact.
//!
//! This is the boundary where untyped input is range-checked: every failure
//! mode (negative, malformed, over-precise, overflowing) reports as
//! `InvalidAmount`. Once an amount is a `u64` it needs no further checks.

use crate::error::EncodeError;

/// Lamports per SOL: 10^9.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Native SOL decimal places.
pub const SOL_DECIMALS: u8 = 9;

/// Parse a decimal display-unit string into base units.
///
/// `decimals` is the number of decimal places of the unit (9 for SOL, the
/// mint's `decimals` field for SPL tokens). Accepts plain decimal notation:
/// `"1"`, `"0.01"`, `".5"`. Rejects with `InvalidAmount`:
///
/// - empty or non-numeric input (no exponents, signs, or separators)
/// - negative values
/// - more fractional digits than `decimals`
/// - values that do not fit in a `u64` of base units
pub fn parse_amount(input: &str, decimals: u8) -> Result<u64, EncodeError> {
    let s = input.trim();

    if s.is_empty() {
        return Err(EncodeError::InvalidAmount("empty amount".into()));
    }
    if s.starts_with('-') {
        return Err(EncodeError::InvalidAmount(format!(
            "amount is negative: {s}"
        )));
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(EncodeError::InvalidAmount(format!("malformed amount: {s}")));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(EncodeError::InvalidAmount(format!("malformed amount: {s}")));
    }
    if frac_part.len() > decimals as usize {
        return Err(EncodeError::InvalidAmount(format!(
            "{} fractional digits exceed {decimals} decimals",
            frac_part.len()
        )));
    }

    let scale = 10u64.checked_pow(decimals as u32).ok_or_else(|| {
        EncodeError::InvalidAmount(format!("unsupported decimals: {decimals}"))
    })?;

    let int_units: u64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| {
            EncodeError::InvalidAmount(format!("integer part out of range: {int_part}"))
        })?
    };

    // Right-pad the fraction to `decimals` digits: "01" at 9 decimals is
    // 010000000 base units.
    let frac_units: u64 = if frac_part.is_empty() {
        0
    } else {
        let parsed: u64 = frac_part.parse().map_err(|_| {
            EncodeError::InvalidAmount(format!("fractional part out of range: {frac_part}"))
        })?;
        parsed * 10u64.pow((decimals as usize - frac_part.len()) as u32)
    };

    int_units
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_units))
        .ok_or_else(|| EncodeError::InvalidAmount(format!("amount overflows u64: {s}")))
}

/// Parse a decimal SOL string into lamports.
pub fn parse_sol(input: &str) -> Result<u64, EncodeError> {
    parse_amount(input, SOL_DECIMALS)
}

/// Format a lamport amount as a decimal SOL string, trailing zeros trimmed.
pub fn lamports_to_sol(lamports: u64) -> String {
    let int = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;

    if frac == 0 {
        return int.to_string();
    }

    let frac_str = format!("{frac:09}");
    format!("{int}.{}", frac_str.trim_end_matches('0'))
}
