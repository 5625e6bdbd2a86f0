use std::path::PathBuf;

/// Failures of the web bundle and dev server tasks.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{step} step (`{program}`) exited with {status}")]
    ToolFailed {
        program: String,
        step: &'static str,
        status: std::process::ExitStatus,
    },
    #[error("failed to copy assets from {from} to {to}: {source}")]
    CopyAssets {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to bind dev server to port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("dev server stopped: {0}")]
    Serve(#[source] std::io::Error),
    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),
}
