//! Session statistics, kept in memory for the life of the process

use super::Outcome;
use crate::core::MAX_GUESSES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used (index 0 unused)
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    /// Record a finished game; in-progress games are ignored
    pub fn record(&mut self, outcome: Outcome, guesses_used: usize) {
        match outcome {
            Outcome::InProgress => {}
            Outcome::Lost => self.total_games += 1,
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(guesses_used) {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_zero_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_counts_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Lost, 6);
        stats.record(Outcome::InProgress, 2);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[6], 0);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
