use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::dispatch::{Dispatcher, RequestDescriptor};
use crate::error::ClientError;
use crate::models::{ApiResponse, ExternalSubscription};

const LIST_PATH: &str = "/api/external-subscription/list";
const ADD_PATH: &str = "/api/external-subscription/add";
const UPDATE_PATH: &str = "/api/external-subscription/update";
const DELETE_PATH: &str = "/api/external-subscription/delete";
const REFRESH_PATH: &str = "/api/external-subscription/refresh";

/// Endpoints under `/api/external-subscription`.
#[derive(Debug, Clone)]
pub struct ExternalSubscriptionClient<D> {
    dispatcher: D,
}

impl<D: Dispatcher> ExternalSubscriptionClient<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<ExternalSubscription>>, ClientError> {
        self.send(RequestDescriptor::get(LIST_PATH)).await
    }

    /// Creates a subscription. The record is sent as given; a server reply
    /// carries the stored copy with its assigned id.
    pub async fn add(
        &self,
        subscription: &ExternalSubscription,
    ) -> Result<ApiResponse<ExternalSubscription>, ClientError> {
        self.send(RequestDescriptor::post(ADD_PATH).with_json(subscription)?).await
    }

    pub async fn update(
        &self,
        subscription: &ExternalSubscription,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::post(UPDATE_PATH).with_json(subscription)?).await
    }

    pub async fn delete(&self, id: u64) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::delete(DELETE_PATH).with_param("id", id)).await
    }

    /// Asks the server to re-fetch the subscription's node list. The reply
    /// carries the number of nodes fetched, not the updated record.
    pub async fn refresh(&self, id: u64) -> Result<ApiResponse<u64>, ClientError> {
        self.send(RequestDescriptor::post(REFRESH_PATH).with_json(&json!({ "id": id }))?).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<ApiResponse<T>, ClientError> {
        debug!(path = %request.url, "external subscription call");
        let body = self.dispatcher.dispatch(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}
