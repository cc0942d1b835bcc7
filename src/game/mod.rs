pub mod store;

use std::cmp::Reverse;
use std::collections::HashMap;

pub use store::GameStore;

pub type ChatId = u64;
pub type PlayerId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PlayerRecord {
    score: u32,
    joined_seq: u64,
    first_scored_seq: Option<u64>,
}

/// State of the word chain in one chat
#[derive(Debug, Clone, Default)]
pub struct Game {
    current_word: Option<String>,
    players: HashMap<PlayerId, PlayerRecord>,
    next_seq: u64,
}

/// One row of the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub player_id: PlayerId,
    pub score: u32,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted word, `None` until someone opens the chain
    pub fn current_word(&self) -> Option<&str> {
        self.current_word.as_deref()
    }

    pub fn score_of(&self, player_id: PlayerId) -> Option<u32> {
        self.players.get(&player_id).map(|record| record.score)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// True once at least one word has been credited to someone
    pub fn has_scores(&self) -> bool {
        self.players.values().any(|record| record.score > 0)
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Add the player with a zero score. Returns false if they were already in.
    pub fn join(&mut self, player_id: PlayerId) -> bool {
        if self.players.contains_key(&player_id) {
            return false;
        }

        let joined_seq = self.next_seq();
        self.players.insert(
            player_id,
            PlayerRecord {
                score: 0,
                joined_seq,
                first_scored_seq: None,
            },
        );
        true
    }

    /// Make `word` the chain word and credit one point to `player_id`.
    ///
    /// `word` must already be validated against the dictionary.
    pub(crate) fn record_accepted(&mut self, player_id: PlayerId, word: String) -> u32 {
        let seq = self.next_seq();

        let record = self.players.entry(player_id).or_insert(PlayerRecord {
            score: 0,
            joined_seq: seq,
            first_scored_seq: None,
        });
        record.score += 1;
        record.first_scored_seq.get_or_insert(seq);

        self.current_word = Some(word);
        record.score
    }

    /// Players ranked by score, highest first. Ties keep the order in which
    /// players first scored; players who never scored follow in join order.
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut players: Vec<_> = self.players.iter().collect();
        players.sort_by_key(|(_, record)| {
            (
                Reverse(record.score),
                record.first_scored_seq.unwrap_or(u64::MAX),
                record.joined_seq,
            )
        });

        players
            .into_iter()
            .enumerate()
            .map(|(i, (player_id, record))| Standing {
                rank: i + 1,
                player_id: *player_id,
                score: record.score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.current_word(), None);
        assert_eq!(game.player_count(), 0);
        assert!(!game.has_scores());
        assert!(game.leaderboard().is_empty());
    }

    #[test]
    fn test_join_is_idempotent() {
        let mut game = Game::new();
        assert!(game.join(7));
        game.record_accepted(7, "nhà".to_string());
        assert!(!game.join(7));
        assert_eq!(game.score_of(7), Some(1));
    }

    #[test]
    fn test_record_accepted_increments_by_one() {
        let mut game = Game::new();
        assert_eq!(game.record_accepted(1, "nhà".to_string()), 1);
        assert_eq!(game.record_accepted(1, "àn".to_string()), 2);
        assert_eq!(game.current_word(), Some("àn"));
        assert!(game.has_scores());
    }

    #[test]
    fn test_leaderboard_ties_follow_first_score_order() {
        let mut game = Game::new();
        game.join(30);
        game.join(20);
        game.join(10);

        // 10 scores first, then 20; both end on 2 points
        game.record_accepted(10, "a".to_string());
        game.record_accepted(20, "b".to_string());
        game.record_accepted(20, "c".to_string());
        game.record_accepted(10, "d".to_string());
        game.record_accepted(40, "e".to_string());

        assert_eq!(
            game.leaderboard(),
            vec![
                Standing {
                    rank: 1,
                    player_id: 10,
                    score: 2,
                },
                Standing {
                    rank: 2,
                    player_id: 20,
                    score: 2,
                },
                Standing {
                    rank: 3,
                    player_id: 40,
                    score: 1,
                },
                Standing {
                    rank: 4,
                    player_id: 30,
                    score: 0,
                },
            ]
        );
    }

    #[test]
    fn test_joined_players_without_points_have_no_scores() {
        let mut game = Game::new();
        game.join(1);
        game.join(2);

        assert!(!game.has_scores());
        assert_eq!(
            game.leaderboard(),
            vec![
                Standing {
                    rank: 1,
                    player_id: 1,
                    score: 0,
                },
                Standing {
                    rank: 2,
                    player_id: 2,
                    score: 0,
                },
            ]
        );
    }
}
