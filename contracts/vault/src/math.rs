//! Fixed-point helpers for share/asset conversion.

use crate::error::VaultError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// Computes `x * y / denominator` with the requested rounding.
///
/// Inputs are non-negative amounts; a zero denominator is a caller bug and
/// reported as [`VaultError::MathOverflow`].
pub fn mul_div(
    x: i128,
    y: i128,
    denominator: i128,
    rounding: Rounding,
) -> Result<i128, VaultError> {
    if denominator <= 0 || x < 0 || y < 0 {
        return Err(VaultError::MathOverflow);
    }
    let product = x.checked_mul(y).ok_or(VaultError::MathOverflow)?;
    let quotient = product / denominator;

    match rounding {
        Rounding::Up if product % denominator != 0 => {
            quotient.checked_add(1).ok_or(VaultError::MathOverflow)
        }
        _ => Ok(quotient),
    }
}
