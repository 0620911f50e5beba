use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::dispatch::{Dispatcher, RequestDescriptor};
use crate::error::ClientError;
use crate::models::{ApiResponse, Group, GroupRename, NewGroup, Node, NodeGroupAssignment};

const LIST_PATH: &str = "/api/v1/nodes/group/get";
const ADD_PATH: &str = "/api/v1/nodes/group/add";
const UPDATE_PATH: &str = "/api/v1/nodes/group/update";
const DELETE_PATH: &str = "/api/v1/nodes/group/delete";
const SET_PATH: &str = "/api/v1/nodes/group/set";
const NODES_PATH: &str = "/api/v1/nodes/group/nodes";

/// Endpoints under `/api/v1/nodes/group`.
#[derive(Debug, Clone)]
pub struct GroupClient<D> {
    dispatcher: D,
}

impl<D: Dispatcher> GroupClient<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Group>>, ClientError> {
        self.send(RequestDescriptor::get(LIST_PATH)).await
    }

    pub async fn add(&self, group: &NewGroup) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::post(ADD_PATH).with_json(group)?).await
    }

    pub async fn update(&self, group: &GroupRename) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::post(UPDATE_PATH).with_json(group)?).await
    }

    /// The server clears the group from its member nodes.
    pub async fn delete(&self, id: u64) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::delete(DELETE_PATH).with_param("id", id)).await
    }

    /// Node and group are both addressed by name here.
    pub async fn set_node_group(
        &self,
        assignment: &NodeGroupAssignment,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.send(RequestDescriptor::post(SET_PATH).with_json(assignment)?).await
    }

    pub async fn nodes_by_group(
        &self,
        group_id: u64,
    ) -> Result<ApiResponse<Vec<Node>>, ClientError> {
        self.send(RequestDescriptor::get(NODES_PATH).with_param("groupId", group_id)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<ApiResponse<T>, ClientError> {
        debug!(path = %request.url, "group call");
        let body = self.dispatcher.dispatch(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}
