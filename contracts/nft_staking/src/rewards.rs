//! Reward accrual math.
//!
//! Accrual is linear and flat per owner: `reward_per_block × elapsed blocks`
//! since the owner's last stake-in or claim, independent of how many tokens
//! the owner has staked. Both helpers saturate rather than wrap.

/// Blocks elapsed since the owner's reward reference point.
pub fn elapsed_blocks(current_block: u32, last_action_block: u32) -> u32 {
    current_block.saturating_sub(last_action_block)
}

/// Reward owed for `elapsed` blocks at `reward_per_block`.
pub fn accrued(reward_per_block: i128, elapsed: u32) -> i128 {
    reward_per_block.saturating_mul(i128::from(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_difference() {
        assert_eq!(elapsed_blocks(150, 100), 50);
        assert_eq!(elapsed_blocks(100, 100), 0);
    }

    #[test]
    fn elapsed_saturates_instead_of_underflowing() {
        assert_eq!(elapsed_blocks(100, 150), 0);
    }

    #[test]
    fn accrued_is_rate_times_elapsed() {
        assert_eq!(accrued(10, 1), 10);
        assert_eq!(accrued(10, 100), 1_000);
    }

    #[test]
    fn accrued_is_zero_when_either_factor_is_zero() {
        assert_eq!(accrued(0, 1_000), 0);
        assert_eq!(accrued(1_000, 0), 0);
    }

    #[test]
    fn accrued_saturates_at_i128_max() {
        assert_eq!(accrued(i128::MAX, 2), i128::MAX);
    }
}
