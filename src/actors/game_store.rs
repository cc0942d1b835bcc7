use actix::{Actor, Context, Handler, Message};
use tracing::info;

use crate::error::GameError;
use crate::game::store::AcceptedWord;
use crate::game::{ChatId, Game, GameStore, PlayerId};

/// Message to start (or restart) the game in a chat
#[derive(Message)]
#[rtype(result = "()")]
pub struct CreateGame {
    pub chat_id: ChatId,
}

/// Message to get a snapshot of a chat's game
#[derive(Message)]
#[rtype(result = "Option<Game>")]
pub struct GetGame {
    pub chat_id: ChatId,
}

/// Message to end a chat's game, returning its final state
#[derive(Message)]
#[rtype(result = "Option<Game>")]
pub struct DeleteGame {
    pub chat_id: ChatId,
}

/// Message to add a player to a chat's game
#[derive(Message)]
#[rtype(result = "Result<bool, GameError>")]
pub struct JoinGame {
    pub chat_id: ChatId,
    pub player_id: PlayerId,
}

/// Message to play a word in a chat's game
#[derive(Message)]
#[rtype(result = "Result<AcceptedWord, GameError>")]
pub struct SubmitWord {
    pub chat_id: ChatId,
    pub player_id: PlayerId,
    pub word: String,
}

/// Actor that owns every chat's game. Messages are handled one at a time,
/// so two submissions in the same chat can never interleave.
pub struct GameStoreActor {
    store: GameStore,
}

impl GameStoreActor {
    pub fn new(store: GameStore) -> Self {
        Self { store }
    }
}

impl Actor for GameStoreActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!("GameStoreActor started (chain rule: {})", self.store.rule());
    }
}

impl Handler<CreateGame> for GameStoreActor {
    type Result = ();

    fn handle(&mut self, msg: CreateGame, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.create_game(msg.chat_id);
    }
}

impl Handler<GetGame> for GameStoreActor {
    type Result = Option<Game>;

    fn handle(&mut self, msg: GetGame, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.get_game(msg.chat_id).cloned()
    }
}

impl Handler<DeleteGame> for GameStoreActor {
    type Result = Option<Game>;

    fn handle(&mut self, msg: DeleteGame, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.delete_game(msg.chat_id)
    }
}

impl Handler<JoinGame> for GameStoreActor {
    type Result = Result<bool, GameError>;

    fn handle(&mut self, msg: JoinGame, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.join_game(msg.chat_id, msg.player_id)
    }
}

impl Handler<SubmitWord> for GameStoreActor {
    type Result = Result<AcceptedWord, GameError>;

    fn handle(&mut self, msg: SubmitWord, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.submit_word(msg.chat_id, msg.player_id, &msg.word)
    }
}
