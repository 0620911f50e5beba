pub mod config;
pub mod dispatch;
pub mod error;
pub mod external;
pub mod group;
pub mod models;

pub use config::ClientConfig;
pub use dispatch::{Dispatcher, HttpDispatcher, Method, RequestDescriptor};
pub use error::ClientError;
pub use external::ExternalSubscriptionClient;
pub use group::GroupClient;
pub use models::{
    ApiResponse, ExternalSubscription, Group, GroupRename, NewGroup, Node, NodeGroupAssignment,
};
