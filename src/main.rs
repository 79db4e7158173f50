mod cli;
mod error;
mod kubernetes;
mod types;
mod ui;
mod utils;

use clap::Parser;
use tracing::instrument::WithSubscriber;
use tracing::{debug, info};

use cli::Cli;
use error::Result;
use kubernetes::ConnectOptions;
use types::SelectionConfig;
use ui::TerminalPicker;
use ui::labels::{container_label, pod_label};
use utils::{match_containers, match_pods, resolve_namespace};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.directive()));

    // Logs go to stderr so stdout only carries the container's output
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    match run(cli).with_subscriber(subscriber).await {
        Err(e) if e.is_user_abort() => Ok(()),
        result => Ok(result?),
    }
}

fn connect_options(cli: &Cli) -> ConnectOptions {
    ConnectOptions {
        kubeconfig: cli.kubeconfig.clone(),
        context: cli.context.clone(),
        cluster: cli.cluster.clone(),
        user: cli.user.clone(),
    }
}

fn selection_config(cli: &Cli, default_namespace: &str) -> SelectionConfig {
    let config = SelectionConfig {
        namespace: resolve_namespace(
            cli.all_namespaces,
            cli.namespace.as_deref(),
            default_namespace,
        ),
        pod_filter: cli.pod_filter.clone(),
        container_filter: cli.container_filter.clone(),
        plain: cli.naked,
        vim_mode: cli.vim_mode,
    };
    debug!(
        container_filter = %config.container_filter,
        pod_filter = %config.pod_filter,
        vim_mode = config.vim_mode,
        naked = config.plain,
        namespace = %config.namespace,
        "ilogs config values"
    );
    config
}

async fn run(cli: Cli) -> Result<()> {
    let (client, default_namespace) = kubernetes::connect(&connect_options(&cli)).await?;
    let config = selection_config(&cli, &default_namespace);
    let decorated = config.decorated();

    let pods = kubernetes::list_pods(&client, &config.namespace).await?;
    let pods = match_pods(pods, &config.pod_filter)?;

    let mut picker = TerminalPicker::new(config.vim_mode, decorated);
    let pod = ui::select("Select Pod", pods, &mut picker, |p, state| {
        pod_label(p, state, decorated)
    })?;

    let containers = match_containers(&pod, &config.container_filter)?;
    let container = ui::select("Select Container", containers, &mut picker, |c, state| {
        container_label(c, state, decorated)
    })?;

    info!(
        pod = %pod.name,
        container = %container.name,
        namespace = %pod.namespace,
        "Streaming pod logs"
    );

    kubernetes::stream_logs(&client, &pod, &container, &mut std::io::stdout()).await
}
