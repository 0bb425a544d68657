/// Win/loss/draw tally of a series of games from one side's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameRecord {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl GameRecord {
    /// Records a game from its terminal reward (`> 0` win, `< 0` loss, `0` draw).
    pub fn push_reward(&mut self, reward: f32) {
        if reward > 0.0 {
            self.wins += 1;
        } else if reward < 0.0 {
            self.losses += 1;
        } else {
            self.draws += 1;
        }
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.wins + self.losses + self.draws
    }

    /// Fraction of games won, or `None` before the first game.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn win_rate(&self) -> Option<f32> {
        let games = self.games();
        (games > 0).then(|| self.wins as f32 / games as f32)
    }
}

impl Extend<f32> for GameRecord {
    fn extend<T: IntoIterator<Item = f32>>(&mut self, rewards: T) {
        for reward in rewards {
            self.push_reward(reward);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let mut record = GameRecord::default();
        assert_eq!(record.win_rate(), None);
        record.extend([1.0, 1.0, -1.0, 0.0]);
        assert_eq!(
            record,
            GameRecord {
                wins: 2,
                losses: 1,
                draws: 1
            }
        );
        assert_eq!(record.games(), 4);
        assert_eq!(record.win_rate(), Some(0.5));
    }
}
