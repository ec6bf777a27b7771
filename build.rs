use std::process::Command;

/// Short hash of the checked-out commit, if this is a git checkout with git on PATH.
fn short_commit() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8(out.stdout).ok()?.trim().to_owned();
    (!hash.is_empty()).then_some(hash)
}

fn main() {
    // shown by `wordgrid --version` and the wasm debug report
    let hash = short_commit().unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=GIT_HASH={hash}");

    // HEAD changes on checkout; the ref it points at changes on commit
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads");
}
