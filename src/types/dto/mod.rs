// API request/response models (poem-openapi objects)
pub mod auth;
pub mod common;
pub mod items;
pub mod weather;
