//! File-level command wrappers around the pure text passes.

mod check;
mod convert;
mod tidy;

pub use check::check_file;
pub use convert::convert_file;
pub use tidy::tidy_file;

use std::fs;
use std::path::Path;

use crate::error::{Cil2TeError, Cil2TeResult};

/// Reject paths that do not end in the required extension.
fn require_extension(path: &Path, expected: &'static str) -> Cil2TeResult<()> {
    if path.extension().and_then(|e| e.to_str()) == Some(expected) {
        Ok(())
    } else {
        Err(Cil2TeError::InvalidExtension {
            path: path.to_path_buf(),
            expected,
        })
    }
}

/// Read the whole input file, mapping a missing file to its own error case.
fn read_input(path: &Path) -> Cil2TeResult<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Cil2TeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Cil2TeError::Io(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_require_extension_accepts_matching() {
        assert!(require_extension(Path::new("policy.cil"), "cil").is_ok());
        assert!(require_extension(Path::new("dir/policy.te"), "te").is_ok());
    }

    #[test]
    fn test_require_extension_rejects_other_or_missing() {
        assert!(matches!(
            require_extension(Path::new("policy.txt"), "cil"),
            Err(Cil2TeError::InvalidExtension { expected: "cil", .. })
        ));
        assert!(require_extension(Path::new("policy"), "cil").is_err());
        // Extension comparison is exact, not case-insensitive.
        assert!(require_extension(Path::new("policy.CIL"), "cil").is_err());
    }

    #[test]
    fn test_read_input_maps_missing_file() {
        let missing = PathBuf::from("/nonexistent/cil2te-test/policy.cil");
        assert!(matches!(
            read_input(&missing),
            Err(Cil2TeError::FileNotFound { .. })
        ));
    }
}
