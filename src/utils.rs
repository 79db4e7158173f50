use crate::error::{Error, Result};
use crate::types::{ContainerRef, PodRef};
use tracing::info;

/// Keep pods whose name contains `filter`, in the order the cluster listed them.
pub fn match_pods(pods: Vec<PodRef>, filter: &str) -> Result<Vec<PodRef>> {
    info!(search_filter = filter, "Matching pods against filter");

    let matched: Vec<PodRef> = pods
        .into_iter()
        .enumerate()
        .filter(|(_, pod)| pod.name.contains(filter))
        .map(|(index, pod)| {
            info!(pod = %pod.name, index, "Found pod");
            pod
        })
        .collect();

    if matched.is_empty() {
        return Err(Error::NoPods(filter.to_string()));
    }
    Ok(matched)
}

/// Pick the containers of `pod` matching `filter`.
///
/// An empty filter returns every container in declaration order. A non-empty
/// filter returns the matches sorted by name.
pub fn match_containers(pod: &PodRef, filter: &str) -> Result<Vec<ContainerRef>> {
    if filter.is_empty() {
        if pod.containers.is_empty() {
            return Err(Error::NoContainers(filter.to_string()));
        }
        return Ok(pod.containers.clone());
    }

    info!(search_filter = filter, "Matching containers against filter");

    let mut matched: Vec<ContainerRef> = pod
        .containers
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.contains(filter))
        .map(|(index, c)| {
            info!(container = %c.name, index, "Found container");
            c.clone()
        })
        .collect();

    if matched.is_empty() {
        return Err(Error::NoContainers(filter.to_string()));
    }

    matched.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(matched)
}

/// Namespace to list pods in. An empty string means all namespaces.
pub fn resolve_namespace(all_namespaces: bool, flag: Option<&str>, default: &str) -> String {
    if all_namespaces {
        return String::new();
    }
    match flag {
        Some(ns) if !ns.is_empty() => ns.to_string(),
        _ => default.to_string(),
    }
}
