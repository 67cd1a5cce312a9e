pub mod events;
pub mod export;
pub mod import;
pub mod prediction;
pub mod store;
