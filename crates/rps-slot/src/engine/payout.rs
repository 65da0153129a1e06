/// Multiplier rules: nothing below `win_match_min` matches, then
/// `base_multiplier` plus `multiplier_increment` per extra match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoutTable {
    pub win_match_min: usize,
    pub base_multiplier: u64,
    pub multiplier_increment: u64,
}

/// Outcome of settling one spin against the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Bet actually taken (clamped to the balance).
    pub bet: u64,
    pub winnings: u64,
    pub multiplier: u64,
    /// Balance after the bet is taken and winnings paid.
    pub balance: u64,
}

impl PayoutTable {
    /// Bet multiplier earned by `match_count` wins; zero below the threshold.
    pub fn multiplier(&self, match_count: usize) -> u64 {
        if match_count < self.win_match_min {
            return 0;
        }
        let extra = (match_count - self.win_match_min) as u64;
        self.base_multiplier
            .saturating_add(self.multiplier_increment.saturating_mul(extra))
    }

    pub fn winnings(&self, match_count: usize, bet: u64) -> u64 {
        bet.saturating_mul(self.multiplier(match_count))
    }

    /// Take the bet from `balance` and pay the winnings.
    /// A bet larger than the balance is treated as betting the whole
    /// balance, so the result never goes below zero.
    pub fn settle(&self, balance: u64, match_count: usize, bet: u64) -> Settlement {
        let bet = bet.min(balance);
        let multiplier = self.multiplier(match_count);
        let winnings = bet.saturating_mul(multiplier);
        Settlement {
            bet,
            winnings,
            multiplier,
            balance: (balance - bet).saturating_add(winnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: PayoutTable = PayoutTable {
        win_match_min: 4,
        base_multiplier: 2,
        multiplier_increment: 2,
    };

    #[test]
    fn multiplier_grows_per_extra_match() {
        assert_eq!(TABLE.winnings(4, 5), 10);
        assert_eq!(TABLE.winnings(5, 5), 20);
        assert_eq!(TABLE.winnings(3, 5), 0);
        assert_eq!(TABLE.multiplier(7), 8);
    }

    #[test]
    fn settle_debits_bet_and_credits_winnings() {
        let s = TABLE.settle(100, 5, 5);
        assert_eq!(s.winnings, 20);
        assert_eq!(s.balance, 100 - 5 + 20);

        let lost = TABLE.settle(100, 0, 5);
        assert_eq!(lost.winnings, 0);
        assert_eq!(lost.balance, 95);
    }

    #[test]
    fn bet_above_balance_floors_at_zero() {
        let s = TABLE.settle(30, 0, 50);
        assert_eq!(s.bet, 30);
        assert_eq!(s.balance, 0);
    }

    #[test]
    fn bet_exactly_balance_reaches_zero() {
        let s = TABLE.settle(5, 3, 5);
        assert_eq!(s.balance, 0);
    }
}
