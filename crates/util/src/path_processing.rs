//! Operator-supplied paths (import files, config and catalog locations).

use std::path::PathBuf;

use dirs_next::home_dir;

/// Trims `path` and resolves a leading `~`, `~/` or `~\` against the home
/// directory.
///
/// `~user` forms are not resolved, and without a home directory the trimmed
/// path is returned as typed.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let Some(after_tilde) = trimmed.strip_prefix('~') else {
        return PathBuf::from(trimmed);
    };
    let relative = match after_tilde.strip_prefix(['/', '\\']) {
        Some(relative) => relative,
        None if after_tilde.is_empty() => after_tilde,
        None => return PathBuf::from(trimmed),
    };
    match home_dir() {
        Some(home) if relative.is_empty() => home,
        Some(home) => home.join(relative),
        None => PathBuf::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("plans/normal.txt"), PathBuf::from("plans/normal.txt"));
        assert_eq!(expand_tilde("  /tmp/plan.txt "), PathBuf::from("/tmp/plan.txt"));
    }

    #[test]
    fn expands_home_prefix() {
        temp_env::with_var("HOME", Some("/home/operator"), || {
            assert_eq!(expand_tilde("~/plan.txt"), PathBuf::from("/home/operator/plan.txt"));
            assert_eq!(expand_tilde(" ~ "), PathBuf::from("/home/operator"));
        });
    }

    #[test]
    fn other_users_are_not_resolved() {
        temp_env::with_var("HOME", Some("/home/operator"), || {
            assert_eq!(expand_tilde("~guest/plan.txt"), PathBuf::from("~guest/plan.txt"));
        });
    }
}
