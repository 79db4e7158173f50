use k8s_openapi::api::core::v1::{Container, Pod};
use kube::ResourceExt;

/// The parts of a pod the selector and streamer need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRef {
    pub name: String,
    pub namespace: String,
    pub node_name: String,
    pub containers: Vec<ContainerRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub name: String,
}

impl From<&Container> for ContainerRef {
    fn from(container: &Container) -> Self {
        Self {
            name: container.name.clone(),
        }
    }
}

impl From<Pod> for PodRef {
    fn from(pod: Pod) -> Self {
        let name = pod.name_any();
        let namespace = pod.namespace().unwrap_or_default();
        let (node_name, containers) = match &pod.spec {
            Some(spec) => (
                spec.node_name.clone().unwrap_or_default(),
                spec.containers.iter().map(ContainerRef::from).collect(),
            ),
            None => (String::new(), Vec::new()),
        };
        Self {
            name,
            namespace,
            node_name,
            containers,
        }
    }
}

/// Run-scoped settings, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Empty means all namespaces
    pub namespace: String,
    pub pod_filter: String,
    pub container_filter: String,
    pub plain: bool,
    pub vim_mode: bool,
}

impl SelectionConfig {
    pub fn decorated(&self) -> bool {
        !self.plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::PodSpec;
    use kube::api::ObjectMeta;

    #[test]
    fn test_pod_ref_from_pod() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("api-7f".to_string()),
                namespace: Some("prod".to_string()),
                ..Default::default()
            },
            spec: Some(PodSpec {
                node_name: Some("node-1".to_string()),
                containers: vec![
                    Container {
                        name: "sidecar".to_string(),
                        ..Default::default()
                    },
                    Container {
                        name: "main".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            ..Default::default()
        };

        let pod_ref = PodRef::from(pod);
        assert_eq!(pod_ref.name, "api-7f");
        assert_eq!(pod_ref.namespace, "prod");
        assert_eq!(pod_ref.node_name, "node-1");
        let names: Vec<_> = pod_ref.containers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["sidecar", "main"]);
    }

    #[test]
    fn test_pod_ref_without_spec() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("pending".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let pod_ref = PodRef::from(pod);
        assert_eq!(pod_ref.namespace, "");
        assert_eq!(pod_ref.node_name, "");
        assert!(pod_ref.containers.is_empty());
    }
}
