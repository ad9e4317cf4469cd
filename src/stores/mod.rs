// Stores layer - database access
pub mod credential_store;
pub mod travel_item_store;

pub use credential_store::CredentialStore;
pub use travel_item_store::{NewTravelItem, TravelItemPatch, TravelItemStore};
