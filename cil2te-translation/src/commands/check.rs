//! TE undefined-reference check command.

use std::path::Path;

use crate::check::{check, UndefinedReference};
use crate::commands::{read_input, require_extension};
use crate::error::Cil2TeResult;

/// Check `input` (a `.te` file) for rule references to undeclared types and
/// attributes. `conf` optionally names a file whose declarations are treated
/// as already known (a base policy). Returns the findings; deciding whether
/// findings are fatal is the caller's business.
pub fn check_file(input: &Path, conf: Option<&Path>) -> Cil2TeResult<Vec<UndefinedReference>> {
    require_extension(input, "te")?;
    let te_text = read_input(input)?;

    let conf_text = match conf {
        Some(path) => Some(read_input(path)?),
        None => None,
    };

    let findings = check(&te_text, conf_text.as_deref());
    log::info!(
        "checked {}: {} undefined reference(s)",
        input.display(),
        findings.len()
    );
    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Cil2TeError;
    use std::fs;

    #[test]
    fn test_check_reports_undeclared_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("policy.te");
        fs::write(&input, "type a;\nallow a ghost_t:file { read };").expect("write input");

        let findings = check_file(&input, None).expect("check should succeed");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].name, "ghost_t");
    }

    #[test]
    fn test_check_accepts_conf_declarations() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("policy.te");
        fs::write(&input, "allow a b:file { read };").expect("write input");
        let conf = dir.path().join("base.conf");
        fs::write(&conf, "type a;\nattribute b;").expect("write conf");

        let findings = check_file(&input, Some(&conf)).expect("check should succeed");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_check_requires_te_extension() {
        let result = check_file(Path::new("policy.cil"), None);
        assert!(matches!(
            result,
            Err(Cil2TeError::InvalidExtension { expected: "te", .. })
        ));
    }

    #[test]
    fn test_check_reports_missing_conf_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("policy.te");
        fs::write(&input, "type a;").expect("write input");

        let result = check_file(&input, Some(&dir.path().join("absent.conf")));
        assert!(matches!(result, Err(Cil2TeError::FileNotFound { .. })));
    }
}
