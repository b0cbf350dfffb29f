pub mod areas;
pub mod connections;
pub mod documents;
pub mod lookups;
