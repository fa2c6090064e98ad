//! TE tidy command (sort and comment duplicates).

use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::{read_input, require_extension};
use crate::error::Cil2TeResult;
use crate::tidy::tidy;

/// Tidy `input` (a `.te` file) and write the result to `<stem>.sorted.te`.
/// The input file is left untouched. Returns the output path.
pub fn tidy_file(input: &Path) -> Cil2TeResult<PathBuf> {
    require_extension(input, "te")?;
    let te_text = read_input(input)?;

    let tidied = tidy(&te_text);

    let output = input.with_extension("sorted.te");
    fs::write(&output, &tidied)?;
    log::info!("tidied {} -> {}", input.display(), output.display());
    Ok(output)
}
