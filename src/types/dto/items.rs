use chrono::{TimeZone, Utc};
use poem_openapi::payload::Json;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{ApiResponse, Multipart, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::travel_item;

/// A travel item as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct TravelItemDto {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub item_name: String,

    /// Destination city the item is packed for
    pub destination_city: String,

    /// Whether the item has been packed
    pub is_packed: bool,

    /// Relative path of the uploaded image, if any
    pub image_path: Option<String>,

    /// ID of the owning user
    pub user: String,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,
}

impl From<travel_item::Model> for TravelItemDto {
    fn from(item: travel_item::Model) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            destination_city: item.destination_city,
            is_packed: item.is_packed,
            image_path: item.image_path,
            user: item.user_id,
            created_at: Utc
                .timestamp_opt(item.created_at, 0)
                .single()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_default(),
        }
    }
}

/// Multipart form for creating a travel item
#[derive(Multipart)]
#[oai(rename_all = "camelCase")]
pub struct CreateItemForm {
    /// Name of the item
    pub item_name: String,

    /// Destination city
    pub destination_city: String,

    /// Whether the item is already packed (defaults to false)
    pub is_packed: Option<bool>,

    /// Optional item image (jpeg/png/gif, 5MB max)
    pub image: Option<Upload>,
}

/// Multipart form for partially updating a travel item
///
/// Absent fields are left untouched.
#[derive(Multipart)]
#[oai(rename_all = "camelCase")]
pub struct UpdateItemForm {
    /// New name of the item
    pub item_name: Option<String>,

    /// New destination city
    pub destination_city: Option<String>,

    /// New packed state
    pub is_packed: Option<bool>,

    /// Replacement item image (jpeg/png/gif, 5MB max)
    pub image: Option<Upload>,
}

/// Response model for listing travel items
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TravelItemListResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Number of items returned
    pub count: u64,

    /// The requester's travel items
    pub data: Vec<TravelItemDto>,
}

/// Response model for a single travel item
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TravelItemResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// The travel item
    pub data: TravelItemDto,
}

/// API response for item creation
#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Travel item created
    #[oai(status = 201)]
    Created(Json<TravelItemResponse>),
}

/// Response model for item deletion
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Confirmation message
    pub message: String,
}
