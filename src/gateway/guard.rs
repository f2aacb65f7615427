use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::warn;

use super::error::GatewayError;
use super::types::{Item, NewCustomer, NewItem};
use super::{Operation, RemoteGateway};

/// Rejects a mutating operation while the same operation is still pending.
///
/// Reads pass straight through; the item list may be fetched any number of
/// times concurrently.
pub struct GuardedGateway<G> {
    inner: G,
    in_flight: Arc<Mutex<HashSet<Operation>>>,
}

impl<G: RemoteGateway> GuardedGateway<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Whether `operation` currently has a request pending.
    pub fn is_in_flight(&self, operation: Operation) -> bool {
        self.in_flight.lock().contains(&operation)
    }

    fn begin(&self, operation: Operation) -> Result<InFlightTicket, GatewayError> {
        let mut pending = self.in_flight.lock();
        if !pending.insert(operation) {
            warn!(%operation, "rejected duplicate request");
            return Err(GatewayError::Busy { operation });
        }
        Ok(InFlightTicket {
            operation,
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

/// Clears the in-flight mark when the request finishes, however it ends.
struct InFlightTicket {
    operation: Operation,
    in_flight: Arc<Mutex<HashSet<Operation>>>,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.operation);
    }
}

#[async_trait]
impl<G: RemoteGateway> RemoteGateway for GuardedGateway<G> {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Value, GatewayError> {
        let _ticket = self.begin(Operation::CreateCustomer)?;
        self.inner.create_customer(customer).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, GatewayError> {
        self.inner.list_items().await
    }

    async fn create_item(&self, item: &NewItem) -> Result<Value, GatewayError> {
        let _ticket = self.begin(Operation::CreateItem)?;
        self.inner.create_item(item).await
    }

    async fn update_item(&self) -> Result<Value, GatewayError> {
        let _ticket = self.begin(Operation::UpdateItem)?;
        self.inner.update_item().await
    }

    async fn delete_item(&self, item_id: i64) -> Result<Value, GatewayError> {
        let _ticket = self.begin(Operation::DeleteItem)?;
        self.inner.delete_item(item_id).await
    }
}
