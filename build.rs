use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let out = Command::new("git").args(args).output().ok()?;
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    // Re-run if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let commit_date = git(&[
        "log",
        "-1",
        "--format=%cd",
        "--date=format:%Y-%m-%d %H:%M",
    ])
    .unwrap_or_default();

    let is_dirty = git(&["status", "--porcelain"])
        .map(|s| !s.is_empty())
        .unwrap_or(false);

    // Release builds are clean checkouts of a version tag
    let version = env!("CARGO_PKG_VERSION");
    let tag_at_head = git(&["tag", "--points-at", "HEAD"])
        .map(|tags| {
            tags.lines()
                .any(|tag| tag == format!("v{}", version) || tag == version)
        })
        .unwrap_or(false);

    let is_release = tag_at_head && !is_dirty;

    println!("cargo:rustc-env=GIT_HASH={}", hash);
    println!("cargo:rustc-env=GIT_COMMIT_DATE={}", commit_date);
    println!("cargo:rustc-env=IS_RELEASE={}", is_release);
}
