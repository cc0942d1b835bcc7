use miette::{Diagnostic, SourceSpan};
use std::io;
use thiserror::Error;

/// Primary error type for the bot
#[derive(Error, Debug, Diagnostic)]
pub enum BotError {
    #[error("Discord API error: {0}")]
    #[diagnostic(code(vua_tieng_viet::discord_error))]
    Discord(#[from] serenity::Error),

    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(vua_tieng_viet::config_error))]
    Config(String),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(vua_tieng_viet::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(vua_tieng_viet::actor_error))]
    Actor(#[from] actix::MailboxError),
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(
        code(vua_tieng_viet::dictionary::load_error),
        help("check DICTIONARY_FILE_PATH; the bot keeps running with an empty dictionary")
    )]
    LoadError(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(vua_tieng_viet::dictionary::empty))]
    EmptyDictionary,
}

/// Reasons a submitted word is turned down
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Word not found in dictionary: {0}")]
    #[diagnostic(code(vua_tieng_viet::validation::not_found))]
    NotInDictionary(String),

    #[error("Word must start with '{expected}'")]
    #[diagnostic(code(vua_tieng_viet::validation::wrong_start_letter))]
    WrongStartLetter {
        #[source_code]
        word: String,

        #[label("does not continue the chain")]
        span: SourceSpan,

        expected: char,
    },
}

/// Errors raised by game store operations
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No active game in this chat")]
    #[diagnostic(code(vua_tieng_viet::game::no_active_game))]
    NoActiveGame,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ValidationError),
}

pub use BotError as Error;

pub type Result<T> = std::result::Result<T, Error>;
