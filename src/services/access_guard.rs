use std::fmt;

use thiserror::Error;

use crate::types::db::travel_item;

/// The operation a requester wants to perform on a travel item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    Read,
    Update,
    Delete,
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemAction::Read => f.write_str("access"),
            ItemAction::Update => f.write_str("update"),
            ItemAction::Delete => f.write_str("delete"),
        }
    }
}

/// Outcome of a denied access check
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemAccessError {
    /// The referenced item does not exist; not an authorization failure
    #[error("travel item not found")]
    NotFound,

    /// The item exists but belongs to another user
    #[error("not authorized to {action} this travel item")]
    NotOwner { action: ItemAction },
}

/// Ownership check applied to every travel item read, update, and delete.
///
/// Stateless; re-evaluated on every operation. Decisions are never cached.
///
/// Note: a non-owner gets a distinct "not authorized" outcome rather than the
/// same "not found" as a missing item, which reveals the item's existence.
/// Inherited behavior, kept as-is.
pub struct ItemAccessGuard;

impl ItemAccessGuard {
    /// Decide whether `requester_id` may perform `action` on the item.
    ///
    /// Returns the item itself on success so callers can keep working with it.
    pub fn authorize(
        item: Option<travel_item::Model>,
        requester_id: &str,
        action: ItemAction,
    ) -> Result<travel_item::Model, ItemAccessError> {
        let item = item.ok_or(ItemAccessError::NotFound)?;

        if item.user_id != requester_id {
            tracing::warn!(
                item_id = %item.id,
                owner = %item.user_id,
                requester = %requester_id,
                %action,
                "denied item access to non-owner"
            );
            return Err(ItemAccessError::NotOwner { action });
        }

        Ok(item)
    }
}
