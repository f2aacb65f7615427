use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::BackendConfig;

use super::error::GatewayError;
use super::types::{Item, ItemRef, ItemUpdate, NewCustomer, NewItem};
use super::{Operation, RemoteGateway};

/// [`RemoteGateway`] over HTTP with JSON bodies.
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()));
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds.into()));
        }
        let client = builder.build().map_err(GatewayError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, operation: Operation) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, operation.path());
        self.client
            .request(operation.method(), url)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        debug!(%operation, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|source| GatewayError::Transport { operation, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%operation, status = status.as_u16(), "backend answered with non-success status");
        }

        response
            .json::<T>()
            .await
            .map_err(|source| GatewayError::Decode { operation, source })
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        operation: Operation,
        body: &B,
    ) -> Result<Value, GatewayError> {
        let builder = self.request(operation).json(body);
        let value: Value = self.send(operation, builder).await?;
        debug!(%operation, response = %value, "request completed");
        Ok(value)
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Value, GatewayError> {
        self.send_json(Operation::CreateCustomer, customer).await
    }

    async fn list_items(&self) -> Result<Vec<Item>, GatewayError> {
        let operation = Operation::ListItems;
        let items: Vec<Item> = self.send(operation, self.request(operation)).await?;
        debug!(count = items.len(), "items fetched");
        Ok(items)
    }

    async fn create_item(&self, item: &NewItem) -> Result<Value, GatewayError> {
        self.send_json(Operation::CreateItem, item).await
    }

    async fn update_item(&self) -> Result<Value, GatewayError> {
        self.send_json(Operation::UpdateItem, &ItemUpdate::fixed())
            .await
    }

    async fn delete_item(&self, item_id: i64) -> Result<Value, GatewayError> {
        self.send_json(Operation::DeleteItem, &ItemRef { item_id })
            .await
    }
}
