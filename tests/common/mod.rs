//! Shared testing harness for `siteup` CLI tests.

use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Fake `docker`, `docker-compose` and `certbot` executables live in a
/// private bin directory prepended to `PATH`. Each fake appends its
/// arguments to a per-binary log and exits nonzero when its failure
/// marker matches, so tests can observe call order and inject failures
/// at any step.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        let ctx = Self { root, work_dir, bin_dir };
        for name in ["docker", "docker-compose", "certbot"] {
            ctx.install_fake_binary(name);
        }
        ctx
    }

    fn install_fake_binary(&self, name: &str) {
        let script_path = self.bin_dir.join(name);
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
if [ -f "{marker}" ]; then
    needle="$(cat "{marker}")"
    case "$*" in
        *"$needle"*)
            echo "{name}: simulated failure" >&2
            exit 1
            ;;
    esac
fi
exit 0
"#,
            log = self.log_path(name).display(),
            marker = self.marker_path(name).display(),
            name = name,
        );
        fs::write(&script_path, script).expect("Failed to write fake binary");

        let mut perms =
            fs::metadata(&script_path).expect("Failed to stat fake binary").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to chmod fake binary");
    }

    fn log_path(&self, name: &str) -> PathBuf {
        self.root.path().join(format!("{name}.log"))
    }

    fn marker_path(&self, name: &str) -> PathBuf {
        self.root.path().join(format!("{name}.fail"))
    }

    /// Make `name` fail whenever its argument line contains `needle`.
    pub fn fail_when(&self, name: &str, needle: &str) {
        fs::write(self.marker_path(name), needle).expect("Failed to write failure marker");
    }

    /// Argument lines `name` was invoked with, in order.
    pub fn binary_calls(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.log_path(name))
            .unwrap_or_default()
            .lines()
            .map(|line| line.to_string())
            .collect()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `siteup` binary within
    /// the work directory, with the fake binaries first on `PATH`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("siteup").expect("Failed to locate siteup binary");
        cmd.current_dir(&self.work_dir).env("PATH", self.path_with_fakes());
        cmd
    }

    fn path_with_fakes(&self) -> std::ffi::OsString {
        let original = env::var_os("PATH").unwrap_or_default();
        let paths = std::iter::once(self.bin_dir.clone()).chain(env::split_paths(&original));
        env::join_paths(paths).expect("Failed to join PATH entries")
    }

    /// Run `siteup init` and assert success.
    pub fn init(&self) {
        self.cli().arg("init").assert().success();
    }

    /// Replace `siteup.toml` in the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("siteup.toml"), content).expect("Failed to write siteup.toml");
    }

    /// Read a rendered vhost from the default sites directory.
    pub fn site_config(&self, file_name: &str) -> String {
        let path = self.work_dir.join("app/nginx/sites-enabled").join(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }
}
