use thiserror::Error;

/// Errors that can end a selection/streaming run
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("Failed to infer cluster config: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("Cluster request failed: {0}")]
    Connection(#[from] kube::Error),

    #[error("Log stream failed: {0}")]
    Stream(#[source] std::io::Error),

    #[error("no pods found for filter: {0}")]
    NoPods(String),

    #[error("no containers found for filter: {0}")]
    NoContainers(String),

    #[error("Selection aborted")]
    Aborted,

    #[error("Selected index {index} is out of range for {len} candidates")]
    OutOfRange { index: usize, len: usize },

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Failed to write log output: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    /// True for failures that should still exit cleanly
    pub fn is_user_abort(&self) -> bool {
        matches!(self, Error::Aborted)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
