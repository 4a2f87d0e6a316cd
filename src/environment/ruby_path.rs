//! Default ruby detection.
//!
//! Finds `ruby` by walking `PATH` directly rather than shelling out to
//! `which`, whose behavior and exit codes vary between systems.

use std::path::{Path, PathBuf};

use crate::dist::EMBEDDED_RUBY_PATH;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the `PATH` environment variable into a list of directories.
pub fn search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Find the first executable file called `name` in `path_entries`.
pub fn resolve_executable(name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Absolute path of the `ruby` that `path_entries` would run.
///
/// Symlinks are not resolved.
pub fn absolute_ruby_path_in(path_entries: &[PathBuf]) -> Option<PathBuf> {
    let ruby = resolve_executable("ruby", path_entries)?;
    std::path::absolute(&ruby).ok()
}

/// Check whether `ruby` in `path_entries` is the embedded Workstation ruby.
pub fn is_default_chef_ruby_in(path_entries: &[PathBuf]) -> bool {
    match absolute_ruby_path_in(path_entries) {
        Some(ruby) => {
            tracing::debug!("ruby on PATH is {}", ruby.display());
            ruby.to_string_lossy() == EMBEDDED_RUBY_PATH
        }
        None => {
            tracing::debug!("No ruby found on PATH");
            false
        }
    }
}

/// Check whether the `ruby` on `PATH` is the embedded Workstation ruby.
pub fn is_default_chef_ruby() -> bool {
    is_default_chef_ruby_in(&search_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_executable_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("ruby"));
        create_fake_binary(&dir_b.join("ruby"));

        let result = resolve_executable("ruby", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("ruby")));
    }

    #[test]
    fn resolve_executable_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_executable("ruby", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_executable_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_non_executable_file(&dir_a.join("ruby"));
        create_fake_binary(&dir_b.join("ruby"));

        let result = resolve_executable("ruby", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("ruby")));
    }

    #[test]
    fn resolve_executable_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ruby")).unwrap();
        assert!(resolve_executable("ruby", &[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn no_ruby_on_path_is_not_default() {
        assert!(!is_default_chef_ruby_in(&[]));

        let temp = TempDir::new().unwrap();
        assert!(!is_default_chef_ruby_in(&[temp.path().to_path_buf()]));
    }

    #[test]
    fn ruby_elsewhere_is_not_default() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("ruby"));

        assert!(!is_default_chef_ruby_in(&[bin.clone()]));
        assert_eq!(absolute_ruby_path_in(&[bin.clone()]), Some(bin.join("ruby")));
    }

    #[cfg(unix)]
    #[test]
    fn embedded_ruby_path_is_absolute() {
        assert!(Path::new(EMBEDDED_RUBY_PATH).is_absolute());
    }
}
