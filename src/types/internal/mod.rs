// Internal types - not exposed via API
pub mod auth;
pub mod weather;
