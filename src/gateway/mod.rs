//! REST boundary for the customer and item services.
//!
//! The backend is an opaque collaborator. [`RemoteGateway`] is the seam the
//! rest of the crate talks to; [`HttpGateway`] is the real implementation and
//! [`GuardedGateway`] keeps a mutating operation from being issued twice
//! while the first request is still pending.

mod client;
mod error;
mod guard;
mod types;

pub use client::HttpGateway;
pub use error::GatewayError;
pub use guard::GuardedGateway;
pub use types::{Item, ItemRef, ItemUpdate, NewCustomer, NewItem, PASSWORD_MASK};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

/// The backend operations the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateCustomer,
    ListItems,
    CreateItem,
    UpdateItem,
    DeleteItem,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Self::CreateCustomer | Self::CreateItem => Method::POST,
            Self::ListItems => Method::GET,
            Self::UpdateItem => Method::PUT,
            Self::DeleteItem => Method::DELETE,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::CreateCustomer => "/rest/customerservice/addjsoncustomer",
            Self::ListItems => "/rest/itemservice/getall",
            Self::CreateItem => "/rest/itemservice/addjsonitem",
            Self::UpdateItem => "/rest/itemservice/updatejsonitem",
            Self::DeleteItem => "/rest/itemservice/deletejsonitem",
        }
    }

    /// Mutating operations go through the in-flight guard.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::ListItems)
    }

    /// Confirmation shown once a mutating operation succeeds.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::CreateCustomer => Some("Customer was successfully added!"),
            Self::CreateItem => Some("Item was successfully added!"),
            Self::UpdateItem => Some("Item was successfully updated!"),
            Self::DeleteItem => Some("Item was successfully removed!"),
            Self::ListItems => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::CreateCustomer => "create customer",
            Self::ListItems => "list items",
            Self::CreateItem => "create item",
            Self::UpdateItem => "update item",
            Self::DeleteItem => "delete item",
        };
        f.write_str(label)
    }
}

/// Customer and item CRUD against the backend.
///
/// Mutating calls return the decoded response body, which the client only
/// logs. A response that is not JSON is an error; the HTTP status is not
/// interpreted.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Value, GatewayError>;

    async fn list_items(&self) -> Result<Vec<Item>, GatewayError>;

    async fn create_item(&self, item: &NewItem) -> Result<Value, GatewayError>;

    /// Sends [`ItemUpdate::fixed`].
    async fn update_item(&self) -> Result<Value, GatewayError>;

    async fn delete_item(&self, item_id: i64) -> Result<Value, GatewayError>;
}
