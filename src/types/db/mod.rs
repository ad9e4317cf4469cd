// Database entities (sea-orm)
pub mod travel_item;
pub mod user;
