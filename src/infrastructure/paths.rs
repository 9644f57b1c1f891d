//! Path handling for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which points
//! at the cwd Zellij was started from (usually the home directory).

use std::path::PathBuf;

/// Directory holding the trace file: `/host/.local/share/zellij/zselect`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zselect")
}

/// Maps `~` and `~/...` onto the sandbox's `/host` mount.
///
/// ```
/// use zselect::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        "/host".to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("/host/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/zselect")
        );
    }

    #[test]
    fn only_leading_tilde_is_expanded() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
    }
}
