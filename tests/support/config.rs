use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Write `contents` to a uniquely named TOML file in the temp dir.
pub fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    path.push(format!(
        "salescope-test-{}-{nanos}.toml",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

/// Minimal config pointing the upstream at `base_url`.
pub fn upstream_config(base_url: &str) -> String {
    format!("[upstream]\nbase_url = \"{base_url}\"\ntimeout_ms = 2000\n")
}
