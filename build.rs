use std::process::Command;

// Embeds `git describe` output as PMTRACK_VERSION, falling back to the
// crate version outside a git checkout.
fn main() {
    let version = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_start_matches('v').to_string())
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=PMTRACK_VERSION={version}");
}
