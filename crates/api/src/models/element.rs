use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Syntactic kind of a declaration element.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Namespace,
    Type,
    Function,
    Parameter,
    ImportStatement,
    UsingStatement,
    IncludeStatement,
    Attribute,
    Delegate,
    Other,
}

impl ElementKind {
    /// Kinds that never become navigation candidates.
    pub const EXCLUDED: [ElementKind; 3] = [
        ElementKind::ImportStatement,
        ElementKind::UsingStatement,
        ElementKind::Attribute,
    ];

    /// Kinds scanned for active namespaces of a document.
    pub const NAMESPACE_CONTEXT: [ElementKind; 3] = [
        ElementKind::ImportStatement,
        ElementKind::UsingStatement,
        ElementKind::IncludeStatement,
    ];

    pub fn is_excluded(self) -> bool {
        Self::EXCLUDED.contains(&self)
    }

    pub fn is_namespace_context(self) -> bool {
        Self::NAMESPACE_CONTEXT.contains(&self)
    }

    /// Whether elements of this kind expose nested declarations:
    /// members for namespaces and types, parameters for functions.
    pub fn has_members(self) -> bool {
        matches!(
            self,
            ElementKind::Namespace | ElementKind::Type | ElementKind::Function
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Namespace => "namespace",
            ElementKind::Type => "type",
            ElementKind::Function => "function",
            ElementKind::Parameter => "parameter",
            ElementKind::ImportStatement => "import_statement",
            ElementKind::UsingStatement => "using_statement",
            ElementKind::IncludeStatement => "include_statement",
            ElementKind::Attribute => "attribute",
            ElementKind::Delegate => "delegate",
            ElementKind::Other => "other",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity the host assigns to a code-model element.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ElementHandle(pub u64);

/// Identity of a project, used to guard walks over cyclic sub-project graphs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

/// Identity of a project item (file or folder) inside a project.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Declaring file and caret position of an element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    #[serde(with = "super::util::serde_arc_path")]
    pub path: Arc<Path>,
    pub line: usize,
    pub display_column: usize,
}

impl Location {
    pub fn new(path: impl AsRef<Path>, line: usize, display_column: usize) -> Self {
        Self {
            path: Arc::from(path.as_ref()),
            line,
            display_column,
        }
    }
}

/// One discovered declaration. Cloning is cheap; strings are shared.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeclarationElement {
    pub handle: ElementHandle,
    #[serde(with = "super::util::serde_arc_str")]
    pub name: Arc<str>,
    #[serde(with = "super::util::serde_arc_str")]
    pub full_path: Arc<str>,
    pub kind: ElementKind,
    pub location: Location,
    /// Imported namespace of an import/using/include statement.
    #[serde(default, with = "super::util::serde_opt_arc_str")]
    pub namespace: Option<Arc<str>>,
}

impl DeclarationElement {
    pub fn new(
        handle: ElementHandle,
        name: &str,
        full_path: &str,
        kind: ElementKind,
        location: Location,
    ) -> Self {
        Self {
            handle,
            name: Arc::from(name),
            full_path: Arc::from(full_path),
            kind,
            location,
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = Some(Arc::from(namespace));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Two elements denote the same declaration only when their paths agree,
    /// regardless of how their simple names compare.
    pub fn same_declaration(&self, other: &DeclarationElement) -> bool {
        self.full_path == other.full_path
    }
}

impl PartialEq for DeclarationElement {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.full_path == other.full_path
    }
}

impl Eq for DeclarationElement {}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(handle: u64, path: &str, kind: ElementKind) -> DeclarationElement {
        let name = path.rsplit('.').next().unwrap_or(path);
        DeclarationElement::new(
            ElementHandle(handle),
            name,
            path,
            kind,
            Location::new("src/lib.cs", 1, 1),
        )
    }

    #[test]
    fn exclusion_and_context_sets_differ_on_include_and_attribute() {
        assert!(ElementKind::Attribute.is_excluded());
        assert!(!ElementKind::Attribute.is_namespace_context());
        assert!(ElementKind::IncludeStatement.is_namespace_context());
        assert!(!ElementKind::IncludeStatement.is_excluded());
        assert!(!ElementKind::Delegate.is_excluded());
    }

    #[test]
    fn only_containers_have_members() {
        assert!(ElementKind::Namespace.has_members());
        assert!(ElementKind::Type.has_members());
        assert!(ElementKind::Function.has_members());
        assert!(!ElementKind::Delegate.has_members());
        assert!(!ElementKind::Parameter.has_members());
    }

    #[test]
    fn equality_uses_handle_and_path() {
        let a = element(1, "NsA.Foo", ElementKind::Type);
        let b = element(1, "NsA.Foo", ElementKind::Function);
        let c = element(2, "NsA.Foo", ElementKind::Type);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_declaration(&c));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "handle": 7,
            "name": "System",
            "full_path": "System",
            "kind": "using_statement",
            "location": { "path": "a.cs", "line": 1, "display_column": 1 },
            "namespace": "System"
        }"#;
        let element: DeclarationElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.kind, ElementKind::UsingStatement);
        assert_eq!(element.namespace.as_deref(), Some("System"));
    }
}
