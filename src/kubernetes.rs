use crate::error::{Error, Result};
use crate::types::{ContainerRef, PodRef};
use futures::io::{AsyncBufRead, AsyncBufReadExt};
use k8s_openapi::api::core::v1::Pod;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{
    Api, Client, Config,
    api::{ListParams, LogParams},
};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Lines of history requested before following live output
pub const BACKLOG_LINES: i64 = 200;

/// Cluster connection overrides from the command line
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub cluster: Option<String>,
    pub user: Option<String>,
}

impl ConnectOptions {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }

    fn has_overrides(&self) -> bool {
        self.context.is_some() || self.cluster.is_some() || self.user.is_some()
    }
}

/// Build a client and return it with the kubeconfig's default namespace.
pub async fn connect(opts: &ConnectOptions) -> Result<(Client, String)> {
    let config = if let Some(path) = &opts.kubeconfig {
        let kubeconfig = Kubeconfig::read_from(path)?;
        Config::from_custom_kubeconfig(kubeconfig, &opts.kubeconfig_options()).await?
    } else if opts.has_overrides() {
        Config::from_kubeconfig(&opts.kubeconfig_options()).await?
    } else {
        Config::infer().await?
    };

    let namespace = config.default_namespace.clone();
    debug!(cluster_url = %config.cluster_url, namespace = %namespace, "Loaded cluster config");
    let client = Client::try_from(config)?;
    Ok((client, namespace))
}

/// List pods in `namespace`, or in every visible namespace when it is empty.
pub async fn list_pods(client: &Client, namespace: &str) -> Result<Vec<PodRef>> {
    let api: Api<Pod> = if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    };

    let pods = api.list(&ListParams::default()).await?;
    debug!(
        pods = pods.items.len(),
        namespace = namespace,
        "Total pods discovered"
    );
    Ok(pods.items.into_iter().map(PodRef::from).collect())
}

fn log_params(container: &ContainerRef) -> LogParams {
    LogParams {
        follow: true,
        container: Some(container.name.clone()),
        tail_lines: Some(BACKLOG_LINES),
        ..Default::default()
    }
}

/// Follow the logs of `container` in `pod`, writing each line to `out`.
///
/// Returns once the server closes the stream.
pub async fn stream_logs<W: Write>(
    client: &Client,
    pod: &PodRef,
    container: &ContainerRef,
    out: &mut W,
) -> Result<()> {
    let api: Api<Pod> = Api::namespaced(client.clone(), &pod.namespace);
    let lp = log_params(container);

    let url_path = <Pod as kube::Resource>::url_path(&(), Some(pod.namespace.as_str()));
    if let Ok(req) = kube::core::Request::new(url_path).logs(&pod.name, &lp) {
        debug!(url = %req.uri(), "Request");
    }

    let stream = api.log_stream(&pod.name, &lp).await?;
    let lines = pipe_lines(stream, out).await?;
    info!(
        pod = %pod.name,
        container = %container.name,
        lines,
        "Log stream closed"
    );
    Ok(())
}

/// Copy newline-delimited chunks from `reader` to `out` until end of data.
///
/// Bytes are passed through untouched, including the trailing newline.
/// A final chunk without a newline is still written. A closed output pipe
/// ends the copy like a clean end of stream.
pub async fn pipe_lines<R, W>(reader: R, out: &mut W) -> Result<u64>
where
    R: AsyncBufRead,
    W: Write,
{
    let mut reader = std::pin::pin!(reader);
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(Error::Stream)?;
        if n == 0 {
            return Ok(count);
        }
        match out.write_all(&buf).and_then(|()| out.flush()) {
            Ok(()) => count += 1,
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!(lines = count, "Output closed, ending log stream");
                return Ok(count);
            }
            Err(e) => return Err(Error::Output(e)),
        }
    }
}
