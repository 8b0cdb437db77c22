#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Writes an executable shell stub that speaks the scorer line protocol:
/// a `ready` handshake, then one response line per request line.
#[cfg(unix)]
pub fn write_stub_scorer(body: &str) -> (TempDir, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scorer.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    (dir, path)
}

/// A stub scorer that answers every request with the same probability.
#[cfg(unix)]
pub fn constant_scorer(probability: &str) -> (TempDir, PathBuf) {
    write_stub_scorer(&format!(
        "echo ready\nwhile read line; do echo {probability}; done"
    ))
}

/// Writes input text into a temp file and returns its path.
pub fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
