//! Version details baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// What `--version` prints, e.g. `clippybird 0.1.0 (a1b2c3d, 2026-01-31)`.
/// Debug builds are marked so bug reports say which one was run.
pub fn version_line() -> String {
    let mut line = format!("{PKG_NAME} {PKG_VERSION} ({BUILD_COMMIT}, {BUILD_DATE})");
    if BUILD_PROFILE != "release" {
        line.push_str(" [");
        line.push_str(BUILD_PROFILE);
        line.push(']');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line_leads_with_package() {
        let line = version_line();
        assert!(line.starts_with(&format!("clippybird {PKG_VERSION} (")));
    }

    #[test]
    fn test_version_line_carries_commit_and_date() {
        let line = version_line();
        assert!(line.contains(&format!("({BUILD_COMMIT}, {BUILD_DATE})")));
    }

    #[test]
    fn test_non_release_builds_are_marked() {
        let marked = version_line().ends_with(&format!("[{BUILD_PROFILE}]"));
        assert_eq!(marked, BUILD_PROFILE != "release");
    }
}
