pub mod game_store;

// Re-export actor types for easier import
pub use game_store::GameStoreActor;
