//! Simulated bankroll for betting on game outcomes.
//!
//! A bet backs one mark. The stake leaves the balance when the bet is
//! placed; settlement pays twice the stake on a win, refunds it on a draw
//! and pays nothing on a loss.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Outcome, Player};
use tracing::{debug, instrument};

/// A stake riding on one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// The mark the bet is on.
    pub backed: Player,
    /// Amount staked.
    pub stake: u64,
}

/// How a settled bet went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Settlement {
    /// Backed mark won; `payout` includes the returned stake.
    #[display("won {}", payout)]
    Won {
        /// Amount credited.
        payout: u64,
    },
    /// Backed mark lost; the stake is gone.
    #[display("lost {}", stake)]
    Lost {
        /// Amount forfeited.
        stake: u64,
    },
    /// Draw; the stake comes back.
    #[display("push {}", stake)]
    Push {
        /// Amount refunded.
        stake: u64,
    },
}

/// Error placing a bet.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BankrollError {
    /// A bet must stake something.
    #[display("Stake must be greater than zero")]
    ZeroStake,

    /// Not enough money on the balance.
    #[display("Stake {} exceeds balance {}", stake, balance)]
    InsufficientFunds {
        /// Requested stake.
        stake: u64,
        /// Current balance.
        balance: u64,
    },

    /// A winning payout would not fit in the balance.
    #[display("Stake {} on balance {} would overflow the payout", stake, balance)]
    PayoutOverflow {
        /// Requested stake.
        stake: u64,
        /// Current balance.
        balance: u64,
    },
}

impl std::error::Error for BankrollError {}

/// Running balance across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bankroll {
    balance: u64,
}

impl Bankroll {
    /// Creates a bankroll with a starting balance.
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    /// Current balance.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Places a bet, taking the stake off the balance.
    #[instrument(skip(self), fields(balance = self.balance))]
    pub fn place(&mut self, backed: Player, stake: u64) -> Result<Bet, BankrollError> {
        if stake == 0 {
            return Err(BankrollError::ZeroStake);
        }
        if stake > self.balance {
            return Err(BankrollError::InsufficientFunds {
                stake,
                balance: self.balance,
            });
        }
        // A win leaves `balance + stake`.
        if self.balance.checked_add(stake).is_none() {
            return Err(BankrollError::PayoutOverflow {
                stake,
                balance: self.balance,
            });
        }

        self.balance -= stake;
        Ok(Bet { backed, stake })
    }

    /// Settles a bet against the outcome of its game.
    #[instrument(skip(self), fields(balance = self.balance))]
    pub fn settle(&mut self, bet: Bet, outcome: &Outcome) -> Settlement {
        let settlement = match outcome.winner() {
            Some(winner) if winner == bet.backed => Settlement::Won {
                payout: bet.stake.saturating_mul(2),
            },
            Some(_) => Settlement::Lost { stake: bet.stake },
            None => Settlement::Push { stake: bet.stake },
        };

        match settlement {
            Settlement::Won { payout } => self.balance = self.balance.saturating_add(payout),
            Settlement::Push { stake } => self.balance = self.balance.saturating_add(stake),
            Settlement::Lost { .. } => {}
        }

        debug!(%settlement, balance = self.balance, "Bet settled");
        settlement
    }

    /// Returns an unsettled bet's stake, as when a game is abandoned.
    pub fn refund(&mut self, bet: Bet) {
        self.balance = self.balance.saturating_add(bet.stake);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Line;

    fn x_wins() -> Outcome {
        Outcome::Winner {
            player: Player::X,
            line: Line::TopRow,
        }
    }

    #[test]
    fn test_place_deducts_stake() {
        let mut bank = Bankroll::new(100);
        let bet = bank.place(Player::X, 30).unwrap();
        assert_eq!(bet.stake, 30);
        assert_eq!(bank.balance(), 70);
    }

    #[test]
    fn test_place_rejects_zero_and_overdraw() {
        let mut bank = Bankroll::new(100);
        assert_eq!(bank.place(Player::X, 0), Err(BankrollError::ZeroStake));
        assert_eq!(
            bank.place(Player::X, 101),
            Err(BankrollError::InsufficientFunds {
                stake: 101,
                balance: 100
            })
        );
        assert_eq!(bank.balance(), 100);
    }

    #[test]
    fn test_win_pays_double() {
        let mut bank = Bankroll::new(100);
        let bet = bank.place(Player::X, 40).unwrap();
        assert_eq!(bank.settle(bet, &x_wins()), Settlement::Won { payout: 80 });
        assert_eq!(bank.balance(), 140);
    }

    #[test]
    fn test_loss_forfeits_stake() {
        let mut bank = Bankroll::new(100);
        let bet = bank.place(Player::O, 40).unwrap();
        assert_eq!(bank.settle(bet, &x_wins()), Settlement::Lost { stake: 40 });
        assert_eq!(bank.balance(), 60);
    }

    #[test]
    fn test_draw_refunds_stake() {
        let mut bank = Bankroll::new(100);
        let bet = bank.place(Player::O, 40).unwrap();
        assert_eq!(bank.settle(bet, &Outcome::Draw), Settlement::Push { stake: 40 });
        assert_eq!(bank.balance(), 100);
    }

    #[test]
    fn test_payout_overflow_rejected() {
        let mut bank = Bankroll::new(u64::MAX);
        assert_eq!(
            bank.place(Player::X, u64::MAX),
            Err(BankrollError::PayoutOverflow {
                stake: u64::MAX,
                balance: u64::MAX
            })
        );
        assert_eq!(bank.balance(), u64::MAX);
    }

    #[test]
    fn test_largest_safe_stake_settles() {
        let mut bank = Bankroll::new(u64::MAX - 10);
        let bet = bank.place(Player::X, 10).unwrap();
        assert_eq!(bank.settle(bet, &x_wins()), Settlement::Won { payout: 20 });
        assert_eq!(bank.balance(), u64::MAX);

        assert!(matches!(
            bank.place(Player::X, 1),
            Err(BankrollError::PayoutOverflow { .. })
        ));
    }

    #[test]
    fn test_refund_restores_balance() {
        let mut bank = Bankroll::new(50);
        let bet = bank.place(Player::X, 50).unwrap();
        assert_eq!(bank.balance(), 0);
        bank.refund(bet);
        assert_eq!(bank.balance(), 50);
    }
}
