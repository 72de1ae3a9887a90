use std::process::Command;

fn main() {
    // Prefer FLOWCHART_ASCII_VERSION env (set by CI), fall back to git tag, then "dev".
    let version = std::env::var("FLOWCHART_ASCII_VERSION")
        .ok()
        .filter(|s| !s.is_empty() && s != "dev")
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--tags", "--always"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "dev".to_string());

    println!("cargo:rustc-env=FLOWCHART_ASCII_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=FLOWCHART_ASCII_VERSION");
}
