mod common;

use common::{element, session_with, GatedWorkspace, WORKSPACE};
use std::sync::{Arc, Mutex, mpsc};
use std::time::Duration;
use truegoto_api::{
    CodeModelEvent, ElementKind, EventPumpHandle, HostError, ProjectId, SolutionEvent,
};
use truegoto_core::memory::MemoryEditor;
use truegoto_core::{Session, SessionConfig};

#[tokio::test]
async fn given_load_events_when_pumped_then_session_becomes_ready() {
    let fixture = session_with(WORKSPACE, SessionConfig::default());
    let (sender, handle) = fixture.session.start_event_pump();

    sender
        .send(SolutionEvent::ProjectOpened {
            project: ProjectId(1),
        })
        .unwrap();
    sender
        .send(SolutionEvent::SolutionOpened { project_count: 2 })
        .unwrap();
    sender
        .send(SolutionEvent::ProjectOpened {
            project: ProjectId(2),
        })
        .unwrap();
    sender
        .send(CodeModelEvent::Added(element(50, "NsC.Gadget", ElementKind::Type)))
        .unwrap();
    drop(sender);

    tokio::time::timeout(Duration::from_secs(5), handle.join())
        .await
        .expect("pump drains and exits once the sender is dropped");

    assert!(fixture.session.is_ready());
    assert_eq!(fixture.session.index().len(), 7);
    let found = fixture.session.trigger_lookup("Gadget").unwrap();
    assert_eq!(found.unwrap().full_path(), "NsC.Gadget");
}

#[tokio::test]
async fn given_stopped_pump_when_sending_then_reports_closed_channel() {
    let fixture = session_with(WORKSPACE, SessionConfig::default());
    let (sender, handle) = fixture.session.start_event_pump();

    handle.stop();
    tokio::time::timeout(Duration::from_secs(5), handle.join())
        .await
        .expect("pump exits after stop");

    assert!(sender.send(SolutionEvent::SolutionClosed).is_err());
}

#[tokio::test]
async fn given_session_shutdown_then_pump_exits() {
    let fixture = session_with(WORKSPACE, SessionConfig::default());
    let (_sender, handle) = fixture.session.start_event_pump();

    fixture.session.shutdown();

    tokio::time::timeout(Duration::from_secs(5), handle.join())
        .await
        .expect("pump exits when the session shuts down");
    assert!(!fixture.session.is_ready());
}

#[tokio::test]
async fn given_slow_walk_then_pump_keeps_the_runtime_responsive() {
    // The walk only proceeds once this task signals, which it can only do
    // while the walk is off the (single-threaded) runtime.
    let (go_tx, go_rx) = mpsc::channel::<()>();
    let go_rx = Mutex::new(go_rx);
    let workspace = Arc::new(GatedWorkspace::new(WORKSPACE, move || {
        go_rx
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .recv_timeout(Duration::from_secs(5))
            .map_err(|_| HostError::Unavailable("walk gate"))
    }));
    let session = Arc::new(Session::builder(workspace, Arc::new(MemoryEditor::new())).build());
    let (sender, handle) = session.start_event_pump();

    sender
        .send(SolutionEvent::SolutionOpened { project_count: 0 })
        .unwrap();
    sender
        .send(CodeModelEvent::Added(element(50, "NsC.Gadget", ElementKind::Type)))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    go_tx.send(()).unwrap();
    drop(sender);

    tokio::time::timeout(Duration::from_secs(10), handle.join())
        .await
        .expect("pump drains and exits once the sender is dropped");

    assert!(session.is_ready());
    assert_eq!(session.index().len(), 7);
}
