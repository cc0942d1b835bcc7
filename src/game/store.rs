use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::GameError;
use crate::game::{ChatId, Game, PlayerId};
use crate::validation::{rules, ChainRule, Dictionary};

/// Result of a successful word submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedWord {
    pub word: String,
    pub score: u32,
}

/// All running games, one per chat
pub struct GameStore {
    dictionary: Arc<Dictionary>,
    rule: ChainRule,
    games: HashMap<ChatId, Game>,
}

impl GameStore {
    pub fn new(dictionary: Arc<Dictionary>, rule: ChainRule) -> Self {
        Self {
            dictionary,
            rule,
            games: HashMap::new(),
        }
    }

    pub fn rule(&self) -> ChainRule {
        self.rule
    }

    /// Start a fresh game, discarding whatever the chat had before
    pub fn create_game(&mut self, chat_id: ChatId) {
        if self.games.insert(chat_id, Game::new()).is_some() {
            info!("Replaced running game in chat {}", chat_id);
        } else {
            info!("Started game in chat {}", chat_id);
        }
    }

    pub fn get_game(&self, chat_id: ChatId) -> Option<&Game> {
        self.games.get(&chat_id)
    }

    pub fn delete_game(&mut self, chat_id: ChatId) -> Option<Game> {
        let removed = self.games.remove(&chat_id);
        if removed.is_some() {
            info!("Ended game in chat {}", chat_id);
        }
        removed
    }

    /// Returns whether the player was newly added
    pub fn join_game(&mut self, chat_id: ChatId, player_id: PlayerId) -> Result<bool, GameError> {
        let game = self
            .games
            .get_mut(&chat_id)
            .ok_or(GameError::NoActiveGame)?;

        Ok(game.join(player_id))
    }

    /// Validate `word` against the chat's chain and credit the player if it fits.
    /// A rejected word leaves the game untouched.
    pub fn submit_word(
        &mut self,
        chat_id: ChatId,
        player_id: PlayerId,
        word: &str,
    ) -> Result<AcceptedWord, GameError> {
        let game = self
            .games
            .get_mut(&chat_id)
            .ok_or(GameError::NoActiveGame)?;

        let word = rules::validate_move(&self.dictionary, self.rule, game.current_word(), word)
            .inspect_err(|e| debug!("Rejected word in chat {}: {}", chat_id, e))?;

        info!("Chat {}: player {} played '{}'", chat_id, player_id, word);
        let score = game.record_accepted(player_id, word.clone());

        Ok(AcceptedWord { word, score })
    }
}
