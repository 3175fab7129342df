use crate::error::Result;
use std::collections::HashSet;
use truegoto_api::{DeclarationElement, ElementKind, ItemId, ProjectId, WorkspaceModel};

/// One-shot depth-first collection of every navigable declaration in a workspace.
///
/// Children are emitted before their parent. Elements of an excluded kind are
/// never emitted; delegates are emitted but never descended into.
pub struct WorkspaceWalker<'a> {
    model: &'a dyn WorkspaceModel,
    visited: HashSet<ProjectId>,
    projects_walked: usize,
}

impl<'a> WorkspaceWalker<'a> {
    pub fn new(model: &'a dyn WorkspaceModel) -> Self {
        Self {
            model,
            visited: HashSet::new(),
            projects_walked: 0,
        }
    }

    /// Walk every project reachable from the solution.
    pub fn walk(model: &'a dyn WorkspaceModel) -> Result<Vec<DeclarationElement>> {
        let mut walker = Self::new(model);
        let mut out = Vec::new();
        for project in model.projects()? {
            walker.walk_project(project, &mut out)?;
        }
        tracing::info!(
            "Walked {} projects, collected {} declarations",
            walker.projects_walked,
            out.len()
        );
        Ok(out)
    }

    fn walk_project(&mut self, project: ProjectId, out: &mut Vec<DeclarationElement>) -> Result<()> {
        // Sub-project references may form cycles; each project is walked once.
        if !self.visited.insert(project) {
            tracing::debug!("Skipping already visited project {:?}", project);
            return Ok(());
        }
        self.projects_walked += 1;
        let items = self.model.project_items(project)?;
        self.walk_items(&items, out)
    }

    fn walk_items(&mut self, items: &[ItemId], out: &mut Vec<DeclarationElement>) -> Result<()> {
        for &item in items {
            match self.model.sub_project(item)? {
                Some(project) => self.walk_project(project, out)?,
                None => {
                    let nested = self.model.nested_items(item)?;
                    self.walk_items(&nested, out)?;
                }
            }

            if let Some(elements) = self.model.code_elements(item)? {
                self.walk_elements(&elements, out)?;
            }
        }
        Ok(())
    }

    fn walk_elements(
        &self,
        elements: &[DeclarationElement],
        out: &mut Vec<DeclarationElement>,
    ) -> Result<()> {
        for element in elements {
            if element.kind != ElementKind::Delegate && element.kind.has_members() {
                if let Some(members) = self.model.members_of(element)? {
                    self.walk_elements(&members, out)?;
                }
            }

            if !element.kind.is_excluded() {
                out.push(element.clone());
            }
        }
        Ok(())
    }
}
