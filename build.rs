//! Generates `build_info.rs` in OUT_DIR: short commit, build date, and the
//! profile the binary was built with. CI can pin the first two through
//! `BUILD_COMMIT` / `BUILD_DATE` for reproducible builds.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn short_commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let hash = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if hash.is_empty() {
                "unknown".into()
            } else {
                hash
            }
        }
        _ => "unknown".into(),
    }
}

fn build_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().date_naive().to_string())
}

fn main() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".into());
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\n\
         pub const BUILD_DATE: &str = {:?};\n\
         pub const BUILD_PROFILE: &str = {:?};\n",
        short_commit(),
        build_date(),
        profile,
    );

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    fs::write(out.join("build_info.rs"), generated).expect("write build_info.rs");

    for var in ["BUILD_COMMIT", "BUILD_DATE"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=.git/HEAD");
}
