//! The player's money across rounds of a session.

/// A session bankroll. Mutated only at round settlement; bets are validated
/// against the balance before any card is dealt, so the balance never goes
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    balance: u64,
}

impl Bankroll {
    pub const fn new(balance: u64) -> Self {
        Self { balance }
    }

    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Whether `amount` is a legal bet right now: at least 1 and covered by
    /// the current balance.
    pub const fn can_bet(&self, amount: u64) -> bool {
        amount >= 1 && amount <= self.balance
    }

    /// An exhausted bankroll ends the session before the next round.
    pub const fn is_broke(&self) -> bool {
        self.balance == 0
    }

    /// Apply a settlement delta. Bet bounds keep losses within the balance;
    /// saturate at zero rather than panic if that invariant is ever broken.
    pub(crate) fn apply(&mut self, delta: i64) {
        self.balance = self.balance.checked_add_signed(delta).unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_bet_bounds() {
        let b = Bankroll::new(100);
        assert!(!b.can_bet(0));
        assert!(b.can_bet(1));
        assert!(b.can_bet(100));
        assert!(!b.can_bet(101));
    }

    #[test]
    fn zero_balance_is_broke_and_unbettable() {
        let b = Bankroll::new(0);
        assert!(b.is_broke());
        assert!(!b.can_bet(1));
    }

    #[test]
    fn apply_signed_deltas() {
        let mut b = Bankroll::new(50);
        b.apply(20);
        assert_eq!(b.balance(), 70);
        b.apply(-70);
        assert_eq!(b.balance(), 0);
        assert!(b.is_broke());
    }
}
