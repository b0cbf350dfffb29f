pub mod areas;
pub mod connections;
pub mod documents;
pub mod error;
pub mod health;
pub mod lookups;
