use crate::types::{ContainerRef, PodRef};
use crossterm::style::Stylize;

pub const ICON_SELECT: &str = "▸";
pub const ICON_GOOD: &str = "✔";

/// How a candidate is being shown in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelState {
    Active,
    Inactive,
    Selected,
}

fn glyph(state: LabelState, decorated: bool) -> Option<String> {
    let icon = match state {
        LabelState::Active => ICON_SELECT,
        LabelState::Selected => ICON_GOOD,
        LabelState::Inactive => return None,
    };
    if !decorated {
        return Some(icon.to_string());
    }
    Some(match state {
        LabelState::Selected => icon.green().to_string(),
        _ => icon.bold().to_string(),
    })
}

fn name_field(name: &str, state: LabelState, decorated: bool) -> String {
    let name = match (decorated, state) {
        (false, _) => name.to_string(),
        (true, LabelState::Inactive) => name.magenta().to_string(),
        (true, _) => name.cyan().to_string(),
    };
    match glyph(state, decorated) {
        Some(icon) => format!("{} {}", icon, name),
        None => name,
    }
}

pub fn pod_label(pod: &PodRef, state: LabelState, decorated: bool) -> String {
    let (namespace, node) = if decorated {
        (
            pod.namespace.as_str().blue().to_string(),
            pod.node_name.as_str().red().to_string(),
        )
    } else {
        (pod.namespace.clone(), pod.node_name.clone())
    };
    format!(
        "Namespace: {} | NodeName: {} | Pod: {}",
        namespace,
        node,
        name_field(&pod.name, state, decorated)
    )
}

pub fn container_label(container: &ContainerRef, state: LabelState, decorated: bool) -> String {
    format!(
        "Container: {}",
        name_field(&container.name, state, decorated)
    )
}
