use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::BearerAuth;
use crate::errors::ItemError;
use crate::services::{ImageStore, ItemAccessGuard, ItemAction, TokenService};
use crate::stores::{NewTravelItem, TravelItemPatch, TravelItemStore};
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemForm, DeleteItemResponse, TravelItemListResponse,
    TravelItemResponse, UpdateItemForm,
};

/// Travel items API endpoints
pub struct TravelItemsApi {
    item_store: Arc<TravelItemStore>,
    image_store: Arc<ImageStore>,
    token_service: Arc<TokenService>,
}

impl TravelItemsApi {
    /// Create a new TravelItemsApi with the given stores and TokenService
    pub fn new(
        item_store: Arc<TravelItemStore>,
        image_store: Arc<ImageStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            item_store,
            image_store,
            token_service,
        }
    }
}

/// API tags for travel item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Travel item management endpoints
    TravelItems,
}

#[OpenApi(prefix_path = "/travel-items")]
impl TravelItemsApi {
    /// List the authenticated user's travel items
    #[oai(path = "/", method = "get", tag = "ItemTags::TravelItems")]
    pub async fn list_items(&self, auth: BearerAuth) -> Result<Json<TravelItemListResponse>, ItemError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let items = self.item_store.list_for_owner(&claims.sub).await?;

        Ok(Json(TravelItemListResponse {
            success: true,
            count: items.len() as u64,
            data: items.into_iter().map(Into::into).collect(),
        }))
    }

    /// Create a new travel item, optionally with an image
    #[oai(path = "/", method = "post", tag = "ItemTags::TravelItems")]
    pub async fn create_item(
        &self,
        auth: BearerAuth,
        form: CreateItemForm,
    ) -> Result<CreateItemApiResponse, ItemError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let item_name = form.item_name.trim().to_string();
        if item_name.is_empty() {
            return Err(ItemError::validation("Item name is required"));
        }
        let destination_city = form.destination_city.trim().to_string();
        if destination_city.is_empty() {
            return Err(ItemError::validation("Destination city is required"));
        }

        let image_path = match form.image {
            Some(image) => Some(self.image_store.save(image).await?),
            None => None,
        };

        let item = self
            .item_store
            .insert(NewTravelItem {
                item_name,
                destination_city,
                is_packed: form.is_packed.unwrap_or(false),
                image_path,
                user_id: claims.sub,
            })
            .await?;

        Ok(CreateItemApiResponse::Created(Json(TravelItemResponse {
            success: true,
            data: item.into(),
        })))
    }

    /// Get a single travel item
    #[oai(path = "/:id", method = "get", tag = "ItemTags::TravelItems")]
    async fn get_item(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<TravelItemResponse>, ItemError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let item = self.item_store.find_by_id(&id.0).await?;
        let item = ItemAccessGuard::authorize(item, &claims.sub, ItemAction::Read)?;

        Ok(Json(TravelItemResponse {
            success: true,
            data: item.into(),
        }))
    }

    /// Partially update a travel item
    ///
    /// Absent form fields are left untouched; a provided image replaces the
    /// previous one.
    #[oai(path = "/:id", method = "put", tag = "ItemTags::TravelItems")]
    pub async fn update_item(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        form: UpdateItemForm,
    ) -> Result<Json<TravelItemResponse>, ItemError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let item_name = match form.item_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(ItemError::validation("Item name is required"));
                }
                Some(name)
            }
            None => None,
        };
        let destination_city = match form.destination_city {
            Some(city) => {
                let city = city.trim().to_string();
                if city.is_empty() {
                    return Err(ItemError::validation("Destination city is required"));
                }
                Some(city)
            }
            None => None,
        };

        let item = self.item_store.find_by_id(&id.0).await?;
        let item = ItemAccessGuard::authorize(item, &claims.sub, ItemAction::Update)?;

        let image_path = match form.image {
            Some(image) => Some(self.image_store.save(image).await?),
            None => None,
        };

        let updated = self
            .item_store
            .update(
                item,
                TravelItemPatch {
                    item_name,
                    destination_city,
                    is_packed: form.is_packed,
                    image_path,
                },
            )
            .await?;

        Ok(Json(TravelItemResponse {
            success: true,
            data: updated.into(),
        }))
    }

    /// Delete a travel item
    #[oai(path = "/:id", method = "delete", tag = "ItemTags::TravelItems")]
    pub async fn delete_item(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<DeleteItemResponse>, ItemError> {
        let claims = self.token_service.validate(&auth.0.token)?;

        let item = self.item_store.find_by_id(&id.0).await?;
        let item = ItemAccessGuard::authorize(item, &claims.sub, ItemAction::Delete)?;

        self.item_store.delete(&item.id).await?;

        Ok(Json(DeleteItemResponse {
            success: true,
            message: "Travel item deleted".to_string(),
        }))
    }
}
