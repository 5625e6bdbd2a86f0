//! Web front end tasks: bundle the engine for the browser and, in
//! development, serve it with rebuild-on-change.
//!
//! # Invariants
//! - Production bundles once and returns; its result decides the exit code.
//! - Development never returns on its own. Build errors are logged and the
//!   server keeps serving the last good output.

mod bundle;
mod error;
mod server;
mod watch;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use bundle::Bundler;
use error::WebError;

/// Value of the mode variable that selects development.
const DEVELOPMENT: &str = "development";

/// Build flavour, selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// `development` selects development; anything else, including unset,
    /// is production.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(DEVELOPMENT) => Self::Development,
            _ => Self::Production,
        }
    }

    /// Cargo profile directory the wasm artifact lands in.
    pub fn profile_dir(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "release",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Options for `cargo xtask web`.
#[derive(Debug, Args)]
pub struct WebArgs {
    /// Build mode; `development` serves and watches, anything else bundles once
    #[arg(long = "mode", env = "NODE_ENV")]
    pub node_env: Option<String>,

    /// Dev server port
    #[arg(long, default_value_t = 8008)]
    pub port: u16,

    /// Output directory, relative to the workspace root
    #[arg(long, default_value = "www/dist")]
    pub out_dir: PathBuf,

    /// Static assets copied verbatim into the output directory
    #[arg(long, default_value = "www/public")]
    pub public_dir: PathBuf,

    /// Cargo target directory
    #[arg(long, env = "CARGO_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// cargo executable
    #[arg(long, env = "CARGO", default_value = "cargo")]
    pub cargo: String,

    /// wasm-bindgen CLI executable
    #[arg(long, env = "WASM_BINDGEN", default_value = "wasm-bindgen")]
    pub wasm_bindgen: String,
}

impl WebArgs {
    pub fn mode(&self) -> Mode {
        Mode::from_env_value(self.node_env.as_deref())
    }

    /// Resolve paths against `workspace_root` into a bundler.
    pub fn bundler(&self, workspace_root: &Path) -> Bundler {
        Bundler {
            mode: self.mode(),
            workspace_root: workspace_root.to_path_buf(),
            target_dir: workspace_root.join(
                self.target_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("target")),
            ),
            out_dir: workspace_root.join(&self.out_dir),
            public_dir: workspace_root.join(&self.public_dir),
            cargo: self.cargo.clone(),
            wasm_bindgen: self.wasm_bindgen.clone(),
        }
    }
}

/// Entry point for `cargo xtask web`.
pub fn run(args: &WebArgs, workspace_root: &Path) -> Result<(), WebError> {
    let bundler = args.bundler(workspace_root);
    match bundler.mode {
        Mode::Production => {
            bundler.bundle()?;
            tracing::info!("build complete");
            Ok(())
        }
        Mode::Development => {
            let runtime = tokio::runtime::Runtime::new().map_err(WebError::Runtime)?;
            runtime.block_on(develop(Arc::new(bundler), args.port, workspace_root))
        }
    }
}

/// Serve the output directory and rebuild whenever sources change.
///
/// The watcher is running before the first build starts, so edits made
/// while it compiles open the first burst.
async fn develop(
    bundler: Arc<Bundler>,
    port: u16,
    workspace_root: &Path,
) -> Result<(), WebError> {
    let watched = [workspace_root.join("crates"), bundler.public_dir.clone()];
    let (_watcher, events) = watch::watch(&watched)?;
    let listener = server::bind(port).await?;

    watch::rebuild(bundler.clone()).await;

    tracing::info!(
        "serving {} at http://127.0.0.1:{port}",
        bundler.out_dir.display()
    );
    tokio::select! {
        served = server::serve(listener, bundler.out_dir.clone()) => served,
        () = watch::rebuild_on_change(events, bundler) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        web: WebArgs,
    }

    fn parse(args: &[&str]) -> WebArgs {
        Harness::parse_from(std::iter::once("web").chain(args.iter().copied())).web
    }

    #[test]
    fn unset_mode_is_production() {
        assert_eq!(Mode::from_env_value(None), Mode::Production);
    }

    #[test]
    fn only_development_selects_development() {
        assert_eq!(Mode::from_env_value(Some("development")), Mode::Development);
        assert_eq!(Mode::from_env_value(Some("production")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("Development")), Mode::Production);
        assert_eq!(Mode::from_env_value(Some("")), Mode::Production);
    }

    #[test]
    fn defaults_resolve_under_workspace_root() {
        let args = parse(&["--mode", "production", "--target-dir", "target"]);
        assert_eq!(args.port, 8008);
        let b = args.bundler(Path::new("/ws"));
        assert_eq!(b.mode, Mode::Production);
        assert_eq!(b.out_dir, PathBuf::from("/ws/www/dist"));
        assert_eq!(b.public_dir, PathBuf::from("/ws/www/public"));
        assert_eq!(b.target_dir, PathBuf::from("/ws/target"));
    }

    #[test]
    fn mode_flag_selects_development() {
        let args = parse(&["--mode", "development", "--port", "9000"]);
        assert_eq!(args.mode(), Mode::Development);
        assert_eq!(args.port, 9000);
    }

    #[test]
    fn absolute_out_dir_is_kept() {
        let args = parse(&["--out-dir", "/tmp/out"]);
        let b = args.bundler(Path::new("/ws"));
        assert_eq!(b.out_dir, PathBuf::from("/tmp/out"));
    }

    #[cfg(unix)]
    #[test]
    fn production_run_succeeds_with_working_tools() {
        let root = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("www/public")).unwrap();
        std::fs::write(root.path().join("www/public/index.html"), "hi").unwrap();
        let args = parse(&[
            "--mode",
            "production",
            "--cargo",
            "true",
            "--wasm-bindgen",
            "true",
        ]);

        run(&args, root.path()).unwrap();
        assert!(root.path().join("www/dist/index.html").is_file());
    }

    /// Workspace with watched dirs and a previously built `www/dist`.
    #[cfg(unix)]
    fn dev_workspace() -> tempfile::TempDir {
        let root = tempfile::TempDir::new().unwrap();
        for dir in ["crates", "www/public", "www/dist"] {
            std::fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        std::fs::write(root.path().join("www/public/index.html"), "fresh").unwrap();
        std::fs::write(root.path().join("www/dist/index.html"), "stale").unwrap();
        root
    }

    #[cfg(unix)]
    type DevServer = std::thread::JoinHandle<Result<(), WebError>>;

    /// Run development mode on a free port in a background thread.
    #[cfg(unix)]
    fn spawn_dev(root: &Path, cargo: &str) -> (u16, DevServer) {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let port_arg = port.to_string();
        let args = parse(&[
            "--mode",
            "development",
            "--port",
            port_arg.as_str(),
            "--target-dir",
            "target",
            "--cargo",
            cargo,
            "--wasm-bindgen",
            "false",
        ]);
        let workspace_root = root.to_path_buf();
        let server = std::thread::spawn(move || run(&args, &workspace_root));
        (port, server)
    }

    #[cfg(unix)]
    #[test]
    fn development_keeps_serving_after_failed_initial_build() {
        use std::io::{Read, Write};
        use std::net::TcpStream;

        let root = dev_workspace();
        let (port, server) = spawn_dev(root.path(), "false");
        std::thread::sleep(std::time::Duration::from_millis(1500));
        assert!(!server.is_finished(), "dev server exited early");

        let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
        write!(
            stream,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        assert!(response.starts_with("HTTP/1.1 200"), "{response}");
        assert!(response.ends_with("stale"), "{response}");
    }

    #[cfg(unix)]
    #[test]
    fn edit_during_initial_build_triggers_rebuild() {
        let root = dev_workspace();
        // `sh build --package ...` runs this script. Only the first build
        // touches a watched source file.
        let script = "[ -f builds.log ] || touch crates/edited.rs\n\
                      echo build >> builds.log\n\
                      exit 1\n";
        std::fs::write(root.path().join("build"), script).unwrap();

        let (_port, server) = spawn_dev(root.path(), "sh");
        std::thread::sleep(std::time::Duration::from_millis(1500));
        assert!(!server.is_finished(), "dev server exited early");

        let log = std::fs::read_to_string(root.path().join("builds.log")).unwrap();
        assert_eq!(log.lines().count(), 2, "{log}");
    }
}
