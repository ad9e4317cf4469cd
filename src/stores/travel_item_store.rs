use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::ItemError;
use crate::types::db::travel_item::{self, ActiveModel, Entity as TravelItem};

/// Fields for a new travel item
#[derive(Debug, Clone)]
pub struct NewTravelItem {
    pub item_name: String,
    pub destination_city: String,
    pub is_packed: bool,
    pub image_path: Option<String>,
    pub user_id: String,
}

/// Partial update for a travel item; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct TravelItemPatch {
    pub item_name: Option<String>,
    pub destination_city: Option<String>,
    pub is_packed: Option<bool>,
    pub image_path: Option<String>,
}

/// TravelItemStore manages travel item records in the database
pub struct TravelItemStore {
    db: DatabaseConnection,
}

impl TravelItemStore {
    /// Create a new TravelItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all travel items owned by the given user, newest first
    pub async fn list_for_owner(&self, user_id: &str) -> Result<Vec<travel_item::Model>, ItemError> {
        TravelItem::find()
            .filter(travel_item::Column::UserId.eq(user_id))
            .order_by_desc(travel_item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Look up a travel item by id, regardless of owner
    ///
    /// Ownership is checked by the access guard, not here; the caller needs
    /// the distinction between "missing" and "not yours".
    pub async fn find_by_id(&self, item_id: &str) -> Result<Option<travel_item::Model>, ItemError> {
        TravelItem::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Insert a new travel item
    pub async fn insert(&self, new_item: NewTravelItem) -> Result<travel_item::Model, ItemError> {
        let item = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            item_name: Set(new_item.item_name),
            destination_city: Set(new_item.destination_city),
            is_packed: Set(new_item.is_packed),
            image_path: Set(new_item.image_path),
            user_id: Set(new_item.user_id),
            created_at: Set(Utc::now().timestamp()),
        };

        item.insert(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Apply a partial update to an already-fetched travel item
    pub async fn update(
        &self,
        item: travel_item::Model,
        patch: TravelItemPatch,
    ) -> Result<travel_item::Model, ItemError> {
        let mut active: ActiveModel = item.into();

        if let Some(item_name) = patch.item_name {
            active.item_name = Set(item_name);
        }
        if let Some(destination_city) = patch.destination_city {
            active.destination_city = Set(destination_city);
        }
        if let Some(is_packed) = patch.is_packed {
            active.is_packed = Set(is_packed);
        }
        if let Some(image_path) = patch.image_path {
            active.image_path = Set(Some(image_path));
        }

        active
            .update(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))
    }

    /// Delete a travel item by id
    pub async fn delete(&self, item_id: &str) -> Result<(), ItemError> {
        TravelItem::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| ItemError::internal_error(format!("Database error: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::CredentialStore;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};

    async fn setup_test_db() -> (DatabaseConnection, TravelItemStore, String) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        // Items reference a user via foreign key
        let user = CredentialStore::new(db.clone())
            .register_user(
                "Test User".to_string(),
                "test@example.com".to_string(),
                "password123".to_string(),
            )
            .await
            .expect("Failed to create test user");

        let store = TravelItemStore::new(db.clone());

        (db, store, user.id)
    }

    fn new_item(user_id: &str, name: &str) -> NewTravelItem {
        NewTravelItem {
            item_name: name.to_string(),
            destination_city: "London".to_string(),
            is_packed: false,
            image_path: None,
            user_id: user_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_sets_id_owner_and_defaults() {
        let (_db, store, user_id) = setup_test_db().await;

        let item = store
            .insert(new_item(&user_id, "Raincoat"))
            .await
            .expect("Insert should succeed");

        assert!(!item.id.is_empty());
        assert_eq!(item.item_name, "Raincoat");
        assert_eq!(item.user_id, user_id);
        assert!(!item.is_packed);
        assert!(item.image_path.is_none());
        assert!(item.created_at > 0);
    }

    #[tokio::test]
    async fn test_list_for_owner_only_returns_own_items() {
        let (db, store, user_id) = setup_test_db().await;

        let other_user = CredentialStore::new(db.clone())
            .register_user(
                "Other".to_string(),
                "other@example.com".to_string(),
                "password123".to_string(),
            )
            .await
            .expect("Failed to create second user");

        store
            .insert(new_item(&user_id, "Raincoat"))
            .await
            .expect("Insert should succeed");
        store
            .insert(new_item(&other_user.id, "Sunscreen"))
            .await
            .expect("Insert should succeed");

        let items = store
            .list_for_owner(&user_id)
            .await
            .expect("List should succeed");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_name, "Raincoat");
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let (_db, store, user_id) = setup_test_db().await;

        let item = store
            .insert(new_item(&user_id, "Raincoat"))
            .await
            .expect("Insert should succeed");

        let updated = store
            .update(
                item.clone(),
                TravelItemPatch {
                    is_packed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .expect("Update should succeed");

        assert!(updated.is_packed);
        // Untouched fields keep their values
        assert_eq!(updated.item_name, "Raincoat");
        assert_eq!(updated.destination_city, "London");
        assert_eq!(updated.user_id, user_id);
    }

    #[tokio::test]
    async fn test_update_can_set_image_path() {
        let (_db, store, user_id) = setup_test_db().await;

        let item = store
            .insert(new_item(&user_id, "Raincoat"))
            .await
            .expect("Insert should succeed");

        let updated = store
            .update(
                item,
                TravelItemPatch {
                    image_path: Some("uploads/image-abc.png".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("Update should succeed");

        assert_eq!(updated.image_path.as_deref(), Some("uploads/image-abc.png"));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let (_db, store, user_id) = setup_test_db().await;

        let item = store
            .insert(new_item(&user_id, "Raincoat"))
            .await
            .expect("Insert should succeed");

        store.delete(&item.id).await.expect("Delete should succeed");

        let found = store
            .find_by_id(&item.id)
            .await
            .expect("Find should succeed");
        assert!(found.is_none());
    }
}
