use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # select from all pods in the namespace matching [busybox], then follow its logs
  kubectl ilogs busybox

  # select from pods matching [multi_container_pod],
  # then from its containers matching [second_container]
  kubectl ilogs multi_container_pod -c second_container

  # search every namespace
  kubectl ilogs api -A";

#[derive(Parser, Debug)]
#[command(name = "kubectl-ilogs")]
#[command(about = "Interactively select a pod and container, then follow its logs")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Substring matched against pod names
    #[arg(value_name = "POD_FILTER")]
    pub pod_filter: String,

    /// List pods across all namespaces; --namespace is ignored
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Substring matched against container names
    #[arg(
        short = 'c',
        long = "container",
        value_name = "FILTER",
        default_value = ""
    )]
    pub container_filter: String,

    /// Log verbosity
    #[arg(short = 'l', long, value_enum, default_value = "error")]
    pub log_level: LogLevel,

    /// Enable j/k/h/l navigation in the picker
    #[arg(short = 'v', long)]
    pub vim_mode: bool,

    /// Render picker labels without color
    #[arg(short = 'x', long)]
    pub naked: bool,

    /// Namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Kubeconfig context
    #[arg(long)]
    pub context: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig cluster
    #[arg(long)]
    pub cluster: Option<String>,

    /// Kubeconfig user
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    /// Filter directive for this level; fatal and panic collapse to error
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => "error",
        }
    }
}
