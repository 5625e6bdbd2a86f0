use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::Mode;
use super::error::WebError;

/// Package compiled to wasm for the browser.
pub const WEB_PACKAGE: &str = "frankenpenguin-webgl";
/// Library name of [`WEB_PACKAGE`]; also the stem of the emitted JS module.
pub const WEB_LIB: &str = "webgl";
pub const WASM_TARGET: &str = "wasm32-unknown-unknown";

/// Compiles the engine to wasm, generates its JS bindings, and copies the
/// static page assets next to them.
#[derive(Debug, Clone)]
pub struct Bundler {
    pub mode: Mode,
    pub workspace_root: PathBuf,
    pub target_dir: PathBuf,
    pub out_dir: PathBuf,
    pub public_dir: PathBuf,
    /// `cargo` executable.
    pub cargo: String,
    /// `wasm-bindgen` CLI executable.
    pub wasm_bindgen: String,
}

impl Bundler {
    /// Run every bundle step in order, stopping at the first failure.
    pub fn bundle(&self) -> Result<(), WebError> {
        tracing::info!(mode = %self.mode, out_dir = %self.out_dir.display(), "bundling");
        self.compile_wasm()?;
        self.generate_bindings()?;
        let copied = copy_assets(&self.public_dir, &self.out_dir)?;
        tracing::info!(assets = copied, "bundle complete");
        Ok(())
    }

    /// Path of the `.wasm` artifact produced by [`Self::compile_wasm`].
    pub fn wasm_artifact(&self) -> PathBuf {
        self.target_dir
            .join(WASM_TARGET)
            .join(self.mode.profile_dir())
            .join(format!("{WEB_LIB}.wasm"))
    }

    fn compile_wasm(&self) -> Result<(), WebError> {
        let mut cmd = Command::new(&self.cargo);
        cmd.current_dir(&self.workspace_root)
            .args(["build", "--package", WEB_PACKAGE, "--lib"])
            .args(["--target", WASM_TARGET])
            .arg("--target-dir")
            .arg(&self.target_dir);
        if self.mode == Mode::Production {
            cmd.arg("--release");
        }
        run_tool(&mut cmd, &self.cargo, "wasm build")
    }

    fn generate_bindings(&self) -> Result<(), WebError> {
        let mut cmd = Command::new(&self.wasm_bindgen);
        cmd.current_dir(&self.workspace_root)
            .args(["--target", "web", "--out-name", WEB_LIB])
            .arg("--out-dir")
            .arg(self.out_dir.join(WEB_LIB))
            .arg(self.wasm_artifact());
        if self.mode == Mode::Development {
            cmd.arg("--debug");
        }
        run_tool(&mut cmd, &self.wasm_bindgen, "js bindings")
    }
}

fn run_tool(cmd: &mut Command, program: &str, step: &'static str) -> Result<(), WebError> {
    tracing::debug!(?cmd, "running");
    let status = cmd.status().map_err(|source| WebError::Spawn {
        program: program.to_string(),
        source,
    })?;
    if !status.success() {
        return Err(WebError::ToolFailed {
            program: program.to_string(),
            step,
            status,
        });
    }
    Ok(())
}

/// Copy every regular file directly inside `from` into `to`, creating `to`
/// if needed. Subdirectories are skipped. Returns the number of files copied.
pub fn copy_assets(from: &Path, to: &Path) -> Result<usize, WebError> {
    let wrap = |source| WebError::CopyAssets {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    fs::create_dir_all(to).map_err(wrap)?;

    let mut copied = 0;
    for entry in fs::read_dir(from).map_err(wrap)? {
        let entry = entry.map_err(wrap)?;
        if !entry.file_type().map_err(wrap)?.is_file() {
            continue;
        }
        fs::copy(entry.path(), to.join(entry.file_name())).map_err(wrap)?;
        copied += 1;
    }
    tracing::debug!(copied, from = %from.display(), to = %to.display(), "assets copied");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn bundler(root: &TempDir, mode: Mode, tool: &str) -> Bundler {
        let public_dir = root.path().join("public");
        fs::create_dir_all(&public_dir).unwrap();
        fs::write(public_dir.join("index.html"), "<html></html>").unwrap();
        Bundler {
            mode,
            workspace_root: root.path().to_path_buf(),
            target_dir: root.path().join("target"),
            out_dir: root.path().join("dist"),
            public_dir,
            cargo: tool.into(),
            wasm_bindgen: tool.into(),
        }
    }

    #[test]
    fn copies_files_not_directories() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("index.html"), "<html></html>").unwrap();
        fs::write(src.path().join("styles.css"), "body {}").unwrap();
        fs::create_dir(src.path().join("nested")).unwrap();
        fs::write(src.path().join("nested").join("skip.txt"), "x").unwrap();

        let out = dst.path().join("dist");
        let copied = copy_assets(src.path(), &out).unwrap();

        assert_eq!(copied, 2);
        let styles = fs::read_to_string(out.join("styles.css")).unwrap();
        assert_eq!(styles, "body {}");
        assert!(out.join("index.html").is_file());
        assert!(!out.join("nested").exists());
    }

    #[test]
    fn copy_overwrites_stale_files() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("index.html"), "new").unwrap();
        fs::write(dst.path().join("index.html"), "old").unwrap();

        copy_assets(src.path(), dst.path()).unwrap();
        let index = fs::read_to_string(dst.path().join("index.html")).unwrap();
        assert_eq!(index, "new");
    }

    #[test]
    fn copy_from_missing_dir_fails() {
        let dst = TempDir::new().unwrap();
        let err = copy_assets(Path::new("/definitely/not/here"), dst.path()).unwrap_err();
        assert!(matches!(err, WebError::CopyAssets { .. }));
    }

    #[test]
    fn wasm_artifact_follows_profile() {
        let root = TempDir::new().unwrap();
        let prod = bundler(&root, Mode::Production, "cargo");
        let release = prod.wasm_artifact();
        let expected = format!("{WASM_TARGET}/release/webgl.wasm");
        assert!(release.ends_with(&expected));
        let dev = Bundler {
            mode: Mode::Development,
            ..prod
        };
        let debug = dev.wasm_artifact();
        let expected = format!("{WASM_TARGET}/debug/webgl.wasm");
        assert!(debug.ends_with(&expected));
    }

    #[cfg(unix)]
    #[test]
    fn successful_tools_produce_bundle() {
        let root = TempDir::new().unwrap();
        let b = bundler(&root, Mode::Production, "true");
        b.bundle().unwrap();
        assert!(b.out_dir.join("index.html").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_stops_bundle() {
        let root = TempDir::new().unwrap();
        let b = bundler(&root, Mode::Production, "false");
        let WebError::ToolFailed { step, .. } = b.bundle().unwrap_err() else {
            panic!("expected a tool failure");
        };
        assert_eq!(step, "wasm build");
        assert!(!b.out_dir.join("index.html").exists());
    }

    #[test]
    fn missing_tool_reports_spawn_error() {
        let root = TempDir::new().unwrap();
        let b = bundler(&root, Mode::Development, "frankenpenguin-no-such-tool");
        assert!(matches!(b.bundle().unwrap_err(), WebError::Spawn { .. }));
    }
}
