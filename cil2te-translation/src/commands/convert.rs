//! CIL-to-TE conversion command.

use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{read_input, require_extension};
use crate::error::Cil2TeResult;
use crate::synthesis::translate;

/// Translate `input` (a `.cil` file) and write the TE text to the sibling
/// path with a `.te` extension. Returns the output path.
pub fn convert_file(input: &Path) -> Cil2TeResult<PathBuf> {
    require_extension(input, "cil")?;
    let cil_text = read_input(input)?;

    let te_text = translate(&cil_text);

    let output = input.with_extension("te");
    fs::write(&output, &te_text)?;
    log::info!(
        "translated {} ({} bytes) -> {}",
        input.display(),
        cil_text.len(),
        output.display()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Cil2TeError;
    use std::io::Write;

    #[test]
    fn test_convert_writes_sibling_te_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("policy.cil");
        let mut file = fs::File::create(&input).expect("create input");
        writeln!(file, "(type httpd_t_1_0)").expect("write input");
        writeln!(file, "(typeattributeset domain_1 (httpd_t_1_0))").expect("write input");

        let output = convert_file(&input).expect("convert should succeed");
        assert_eq!(output, dir.path().join("policy.te"));

        let te_text = fs::read_to_string(&output).expect("read output");
        assert_eq!(te_text, "type httpd_t, domain;");
    }

    #[test]
    fn test_convert_rejects_wrong_extension() {
        let result = convert_file(Path::new("policy.txt"));
        assert!(matches!(
            result,
            Err(Cil2TeError::InvalidExtension { expected: "cil", .. })
        ));
    }

    #[test]
    fn test_convert_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = convert_file(&dir.path().join("absent.cil"));
        assert!(matches!(result, Err(Cil2TeError::FileNotFound { .. })));
    }
}
