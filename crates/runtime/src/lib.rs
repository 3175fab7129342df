use std::path::PathBuf;
use std::sync::Arc;
use truegoto_api::{EditorHost, TrueGotoSession, WorkspaceModel};
use truegoto_core::{Result, Session, SessionConfig};

/// Session configuration for a host process.
///
/// Reads the JSON file named by `TRUEGOTO_CONFIG` when set, then applies the
/// `TRUEGOTO_*` environment overrides on top.
pub fn load_config() -> Result<SessionConfig> {
    let base = match std::env::var("TRUEGOTO_CONFIG") {
        Ok(path) => SessionConfig::from_file(&PathBuf::from(path))?,
        Err(_) => SessionConfig::default(),
    };
    base.with_overrides(|key| std::env::var(key).ok())
}

/// Bootstraps a lookup session wired to the host's code model and editor.
pub fn build_default_session(
    workspace: Arc<dyn WorkspaceModel>,
    editor: Arc<dyn EditorHost>,
) -> Result<Arc<Session>> {
    let config = load_config()?;
    tracing::info!(
        "Building session (change policy {:?}, name fallback {:?}, qualified fallback {:?})",
        config.change_policy,
        config.name_fallback,
        config.qualified_fallback
    );
    Ok(Arc::new(
        Session::builder(workspace, editor).with_config(config).build(),
    ))
}

/// Same as [`build_default_session`], erased to the host-facing API.
pub fn build_default_service(
    workspace: Arc<dyn WorkspaceModel>,
    editor: Arc<dyn EditorHost>,
) -> Result<Arc<dyn TrueGotoSession>> {
    let session: Arc<dyn TrueGotoSession> = build_default_session(workspace, editor)?;
    Ok(session)
}

/// File logging for a host process; keep the returned guard alive until exit.
pub fn init_logging(component: &str, to_stderr: bool) -> impl Drop {
    truegoto_core::logging::init_logging(component, to_stderr)
}
