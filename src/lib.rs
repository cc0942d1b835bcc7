pub mod actors;
pub mod config;
pub mod discord;
pub mod error;
pub mod game;
pub mod replies;
pub mod validation;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, GameError, Result, ValidationError};

/// Shared state handed to every command and event
pub struct Data {
    pub store: actix::Addr<actors::GameStoreActor>,
    pub command_prefix: String,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
