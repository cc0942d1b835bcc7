pub mod dictionary;
pub mod rules;

// Re-export common types
pub use dictionary::Dictionary;
pub use rules::{validate_move, verdict, ChainRule, Verdict};
