use crate::error::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use truegoto_api::{
    DeclarationElement, ElementHandle, HostError, HostResult, ItemId, ProjectId, WorkspaceModel,
};

#[derive(Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    projects: Vec<ProjectNode>,
    #[serde(default)]
    items: Vec<ItemNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    id: ProjectId,
    #[serde(default)]
    items: Vec<ItemId>,
}

#[derive(Deserialize)]
struct ItemNode {
    id: ItemId,
    #[serde(default)]
    sub_project: Option<ProjectId>,
    #[serde(default)]
    children: Vec<ItemId>,
    #[serde(default)]
    elements: Option<Vec<ElementNode>>,
}

#[derive(Deserialize)]
struct ElementNode {
    #[serde(flatten)]
    element: DeclarationElement,
    #[serde(default)]
    members: Option<Vec<ElementNode>>,
}

#[derive(Default)]
struct Item {
    sub_project: Option<ProjectId>,
    children: Vec<ItemId>,
    elements: Option<Vec<DeclarationElement>>,
}

/// A project tree held in memory, loadable from JSON.
///
/// Stands in for a host code model in tests and headless tools.
#[derive(Default)]
pub struct MemoryWorkspace {
    projects: Vec<ProjectId>,
    project_items: HashMap<ProjectId, Vec<ItemId>>,
    items: HashMap<ItemId, Item>,
    members: HashMap<ElementHandle, Vec<DeclarationElement>>,
    failing: Mutex<HashSet<ElementHandle>>,
}

impl MemoryWorkspace {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: WorkspaceFile = serde_json::from_str(json)?;
        let mut workspace = Self::default();

        for project in file.projects {
            workspace.projects.push(project.id);
            workspace.project_items.insert(project.id, project.items);
        }

        for node in file.items {
            let elements = node
                .elements
                .map(|nodes| workspace.flatten_members(nodes));
            workspace.items.insert(
                node.id,
                Item {
                    sub_project: node.sub_project,
                    children: node.children,
                    elements,
                },
            );
        }

        Ok(workspace)
    }

    fn flatten_members(&mut self, nodes: Vec<ElementNode>) -> Vec<DeclarationElement> {
        nodes
            .into_iter()
            .map(|node| {
                if let Some(members) = node.members {
                    let members = self.flatten_members(members);
                    self.members.insert(node.element.handle, members);
                }
                node.element
            })
            .collect()
    }

    /// Make `members_of` fail for `handle`, simulating a host API error.
    pub fn fail_members_of(&self, handle: ElementHandle) {
        self.failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(handle);
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

impl WorkspaceModel for MemoryWorkspace {
    fn projects(&self) -> HostResult<Vec<ProjectId>> {
        Ok(self.projects.clone())
    }

    fn project_items(&self, project: ProjectId) -> HostResult<Vec<ItemId>> {
        Ok(self.project_items.get(&project).cloned().unwrap_or_default())
    }

    fn sub_project(&self, item: ItemId) -> HostResult<Option<ProjectId>> {
        Ok(self.items.get(&item).and_then(|i| i.sub_project))
    }

    fn nested_items(&self, item: ItemId) -> HostResult<Vec<ItemId>> {
        Ok(self
            .items
            .get(&item)
            .map(|i| i.children.clone())
            .unwrap_or_default())
    }

    fn code_elements(&self, item: ItemId) -> HostResult<Option<Vec<DeclarationElement>>> {
        Ok(self.items.get(&item).and_then(|i| i.elements.clone()))
    }

    fn members_of(
        &self,
        element: &DeclarationElement,
    ) -> HostResult<Option<Vec<DeclarationElement>>> {
        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if failing.contains(&element.handle) {
            return Err(HostError::Internal(format!(
                "code model unavailable for {}",
                element.full_path()
            )));
        }
        Ok(self.members.get(&element.handle).cloned())
    }
}
