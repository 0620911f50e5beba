use serde::Serialize;
use sublink_core::{
    ApiResponse, ClientError, Dispatcher, ExternalSubscription, ExternalSubscriptionClient,
    GroupClient, GroupRename, NewGroup, NodeGroupAssignment,
};
use tracing::info;

use crate::args::{Command, GroupsCommand, SubsCommand, SubscriptionArgs};

/// Runs one command and prints the server envelope. Returns whether the
/// server reported success.
///
/// The envelope is printed as decoded, so server fields this crate does not
/// model (such as a subscription's `Nodes`) are left out.
pub async fn run<D: Dispatcher>(dispatcher: D, command: Command) -> Result<bool, ClientError> {
    match command {
        Command::Subs(cmd) => run_subs(ExternalSubscriptionClient::new(dispatcher), cmd).await,
        Command::Groups(cmd) => run_groups(GroupClient::new(dispatcher), cmd).await,
    }
}

async fn run_subs<D: Dispatcher>(
    client: ExternalSubscriptionClient<D>,
    command: SubsCommand,
) -> Result<bool, ClientError> {
    match command {
        SubsCommand::List { brief: false } => print(client.list().await?),
        SubsCommand::List { brief: true } => {
            let resp = client.list().await?;
            for sub in resp.data.as_deref().unwrap_or_default() {
                println!("{}", summary_line(sub));
            }
            Ok(resp.is_success())
        }
        SubsCommand::Add(fields) => print(client.add(&subscription(None, fields)).await?),
        SubsCommand::Update { id, fields } => {
            print(client.update(&subscription(Some(id), fields)).await?)
        }
        SubsCommand::Delete { id } => print(client.delete(id).await?),
        SubsCommand::Refresh { id } => {
            let resp = client.refresh(id).await?;
            if let Some(count) = resp.data {
                info!(id, nodes = count, "subscription refreshed");
            }
            print(resp)
        }
    }
}

async fn run_groups<D: Dispatcher>(
    client: GroupClient<D>,
    command: GroupsCommand,
) -> Result<bool, ClientError> {
    match command {
        GroupsCommand::List => print(client.list().await?),
        GroupsCommand::Add { name } => print(client.add(&NewGroup { name }).await?),
        GroupsCommand::Update { id, name } => {
            print(client.update(&GroupRename { id, name }).await?)
        }
        GroupsCommand::Delete { id } => print(client.delete(id).await?),
        GroupsCommand::Set { node, group } => print(
            client
                .set_node_group(&NodeGroupAssignment { name: node, group })
                .await?,
        ),
        GroupsCommand::Nodes { group_id } => print(client.nodes_by_group(group_id).await?),
    }
}

fn subscription(id: Option<u64>, args: SubscriptionArgs) -> ExternalSubscription {
    let mut sub = ExternalSubscription::new(args.name, args.url);
    sub.id = id;
    sub.enabled = !args.disabled;
    sub.update_interval = args.interval;
    sub.group_name = args.group;
    sub.user_agent = args.user_agent;
    sub
}

/// `id  name  enabled  nodes  last update`, tab separated.
fn summary_line(sub: &ExternalSubscription) -> String {
    let id = sub.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
    let state = if sub.enabled { "enabled" } else { "disabled" };
    let last_update = sub
        .last_update_at()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".into());
    format!(
        "{id}\t{}\t{state}\t{}\t{last_update}",
        sub.name,
        sub.node_count.unwrap_or(0)
    )
}

fn print<T: Serialize>(resp: ApiResponse<T>) -> Result<bool, ClientError> {
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(resp.is_success())
}
