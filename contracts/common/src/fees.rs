//! Fee settlement calculator.
//!
//! A gross harvest amount is split into a platform fee, a caller fee and
//! the net remainder. Both fees are floored, so the net absorbs all
//! rounding dust and `platform_fee + caller_fee + net == gross` always
//! holds.

/// 100% expressed in basis points.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Highest platform fee a strategy accepts (20%).
pub const MAX_PLATFORM_FEE_BPS: u32 = 2_000;

/// Highest caller fee a strategy accepts (5%).
pub const MAX_CALLER_FEE_BPS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeeSplit {
    pub platform_fee: i128,
    pub caller_fee: i128,
    pub net: i128,
}

/// Applies `bps` to `amount`, rounding down.
fn apply_bps(amount: i128, bps: u32) -> Option<i128> {
    amount
        .checked_mul(bps as i128)?
        .checked_div(BPS_DENOMINATOR as i128)
}

/// Splits `gross` into platform fee, caller fee and net.
///
/// Returns `None` for a negative gross, for fee rates that add up to more
/// than 100%, or on arithmetic overflow.
pub fn split_harvest(gross: i128, platform_fee_bps: u32, caller_fee_bps: u32) -> Option<FeeSplit> {
    if gross < 0 || platform_fee_bps.checked_add(caller_fee_bps)? > BPS_DENOMINATOR {
        return None;
    }

    let platform_fee = apply_bps(gross, platform_fee_bps)?;
    let caller_fee = apply_bps(gross, caller_fee_bps)?;
    let net = gross.checked_sub(platform_fee)?.checked_sub(caller_fee)?;

    Some(FeeSplit { platform_fee, caller_fee, net })
}
