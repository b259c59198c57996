//! Default bonus strategy.

use crate::strategy::BonusStrategy;

use super::SellerStanding;

/// Rank-tiered bonus as a share of profit.
///
/// | rank               | rate |
/// |--------------------|------|
/// | 0                  | 15%  |
/// | 1, 2               | 10%  |
/// | 3 .. last - 1      | 5%   |
/// | last               | 0    |
///
/// Sellers with zero or negative profit get nothing regardless of rank.
/// The result is rounded to the nearest whole unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BonusByProfit;

impl BonusByProfit {
    pub const LEADER_RATE: f64 = 0.15;
    pub const RUNNER_UP_RATE: f64 = 0.10;
    pub const BASE_RATE: f64 = 0.05;

    /// Returns the bonus rate for a non-last rank.
    pub fn rate_for_rank(rank: usize) -> f64 {
        match rank {
            0 => Self::LEADER_RATE,
            1 | 2 => Self::RUNNER_UP_RATE,
            _ => Self::BASE_RATE,
        }
    }
}

impl BonusStrategy for BonusByProfit {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStanding) -> f64 {
        if rank + 1 == total || seller.profit <= 0.0 {
            return 0.0;
        }
        (seller.profit * Self::rate_for_rank(rank)).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus(rank: usize, total: usize, profit: f64) -> f64 {
        BonusByProfit.bonus(rank, total, &SellerStanding::with_profit(profit))
    }

    #[test]
    fn test_leader_gets_fifteen_percent() {
        assert_eq!(bonus(0, 5, 1000.0), 150.0);
    }

    #[test]
    fn test_second_and_third_get_ten_percent() {
        assert_eq!(bonus(1, 5, 1000.0), 100.0);
        assert_eq!(bonus(2, 5, 1000.0), 100.0);
    }

    #[test]
    fn test_others_get_five_percent() {
        assert_eq!(bonus(3, 5, 1000.0), 50.0);
        assert_eq!(bonus(10, 20, 1000.0), 50.0);
    }

    #[test]
    fn test_last_place_gets_nothing() {
        assert_eq!(bonus(4, 5, 1000.0), 0.0);
        assert_eq!(bonus(2, 3, 1000.0), 0.0);
    }

    #[test]
    fn test_single_seller_is_last() {
        assert_eq!(bonus(0, 1, 1000.0), 0.0);
    }

    #[test]
    fn test_non_positive_profit_gets_nothing() {
        assert_eq!(bonus(0, 5, 0.0), 0.0);
        assert_eq!(bonus(0, 5, -250.0), 0.0);
    }

    #[test]
    fn test_rounds_to_nearest_whole() {
        // 15% of 333.33 = 49.9995
        assert_eq!(bonus(0, 3, 333.33), 50.0);
        // 10% of 1234.4 = 123.44
        assert_eq!(bonus(1, 3, 1234.4), 123.0);
    }
}
