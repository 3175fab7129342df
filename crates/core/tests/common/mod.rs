use std::sync::Arc;
use truegoto_api::{
    DeclarationElement, ElementHandle, ElementKind, HostResult, ItemId, Location, ProjectId,
    SolutionEvent, TextPoint, WorkspaceModel,
};
use truegoto_core::memory::{BufferSelection, MemoryEditor, MemoryWorkspace};
use truegoto_core::{Session, SessionConfig};

/// Two projects; `Foo` is declared in both `NsA` and `NsB`, `Widget` only in `NsA`.
#[allow(dead_code)]
pub const WORKSPACE: &str = r#"{
    "projects": [
        { "id": 1, "items": [10] },
        { "id": 2, "items": [20] }
    ],
    "items": [
        { "id": 10, "elements": [
            { "handle": 1, "name": "System", "full_path": "System", "kind": "using_statement",
              "location": { "path": "a/Foo.cs", "line": 0, "display_column": 0 }, "namespace": "System" },
            { "handle": 2, "name": "NsA", "full_path": "NsA", "kind": "namespace",
              "location": { "path": "a/Foo.cs", "line": 2, "display_column": 0 },
              "members": [
                { "handle": 3, "name": "Foo", "full_path": "NsA.Foo", "kind": "type",
                  "location": { "path": "a/Foo.cs", "line": 4, "display_column": 4 },
                  "members": [
                    { "handle": 4, "name": "Run", "full_path": "NsA.Foo.Run", "kind": "function",
                      "location": { "path": "a/Foo.cs", "line": 6, "display_column": 8 } }
                  ] },
                { "handle": 5, "name": "Widget", "full_path": "NsA.Widget", "kind": "type",
                  "location": { "path": "a/Foo.cs", "line": 12, "display_column": 4 } }
              ] }
        ] },
        { "id": 20, "elements": [
            { "handle": 6, "name": "NsB", "full_path": "NsB", "kind": "namespace",
              "location": { "path": "b/Foo.cs", "line": 0, "display_column": 0 },
              "members": [
                { "handle": 7, "name": "Foo", "full_path": "NsB.Foo", "kind": "type",
                  "location": { "path": "b/Foo.cs", "line": 2, "display_column": 4 } }
              ] }
        ] }
    ]
}"#;

#[allow(dead_code)]
pub fn element(handle: u64, path: &str, kind: ElementKind) -> DeclarationElement {
    let name = path.rsplit('.').next().unwrap_or(path);
    DeclarationElement::new(
        ElementHandle(handle),
        name,
        path,
        kind,
        Location::new("c/New.cs", 0, 0),
    )
}

#[allow(dead_code)]
pub fn using(handle: u64, namespace: &str) -> DeclarationElement {
    element(handle, namespace, ElementKind::UsingStatement).with_namespace(namespace)
}

/// Focus a one-line document with the caret at `offset`.
#[allow(dead_code)]
pub fn focus(editor: &MemoryEditor, imports: Vec<DeclarationElement>, line: &str, offset: usize) {
    editor.open_document(
        imports,
        BufferSelection::new(line).with_caret(TextPoint::new(0, offset)),
    );
}

pub struct Fixture {
    pub session: Arc<Session>,
    #[allow(dead_code)]
    pub workspace: Arc<MemoryWorkspace>,
    pub editor: Arc<MemoryEditor>,
}

#[allow(dead_code)]
pub fn session_with(json: &str, config: SessionConfig) -> Fixture {
    let workspace = Arc::new(MemoryWorkspace::from_json(json).expect("valid workspace fixture"));
    let editor = Arc::new(MemoryEditor::new());
    let session = Arc::new(
        Session::builder(workspace.clone(), editor.clone())
            .with_config(config)
            .build(),
    );
    Fixture {
        session,
        workspace,
        editor,
    }
}

/// A session over `WORKSPACE` whose projects have all finished loading.
#[allow(dead_code)]
pub fn ready_session(config: SessionConfig) -> Fixture {
    let fixture = session_with(WORKSPACE, config);
    let count = fixture.workspace.project_count();
    fixture
        .session
        .on_solution_event(SolutionEvent::SolutionOpened {
            project_count: count,
        })
        .unwrap();
    for id in 1..=count as u64 {
        fixture
            .session
            .on_solution_event(SolutionEvent::ProjectOpened {
                project: ProjectId(id),
            })
            .unwrap();
    }
    assert!(fixture.session.is_ready());
    fixture
}

/// A `MemoryWorkspace` whose walks pass through `gate` before listing projects.
#[allow(dead_code)]
pub struct GatedWorkspace {
    inner: MemoryWorkspace,
    gate: Box<dyn Fn() -> HostResult<()> + Send + Sync>,
}

#[allow(dead_code)]
impl GatedWorkspace {
    pub fn new(json: &str, gate: impl Fn() -> HostResult<()> + Send + Sync + 'static) -> Self {
        Self {
            inner: MemoryWorkspace::from_json(json).expect("valid workspace fixture"),
            gate: Box::new(gate),
        }
    }
}

impl WorkspaceModel for GatedWorkspace {
    fn projects(&self) -> HostResult<Vec<ProjectId>> {
        (self.gate)()?;
        self.inner.projects()
    }

    fn project_items(&self, project: ProjectId) -> HostResult<Vec<ItemId>> {
        self.inner.project_items(project)
    }

    fn sub_project(&self, item: ItemId) -> HostResult<Option<ProjectId>> {
        self.inner.sub_project(item)
    }

    fn nested_items(&self, item: ItemId) -> HostResult<Vec<ItemId>> {
        self.inner.nested_items(item)
    }

    fn code_elements(&self, item: ItemId) -> HostResult<Option<Vec<DeclarationElement>>> {
        self.inner.code_elements(item)
    }

    fn members_of(
        &self,
        element: &DeclarationElement,
    ) -> HostResult<Option<Vec<DeclarationElement>>> {
        self.inner.members_of(element)
    }
}
