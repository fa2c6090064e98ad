//! Duplicate-rule cleanup for TE policy files.

/// Sort TE lines and comment out duplicates.
///
/// Lines are ordered lexicographically; the first occurrence of each line is
/// kept, later occurrences are demoted to `#`-prefixed comments. Kept lines
/// come first in the output, commented duplicates after them, so a reviewer
/// sees the effective policy in one block.
pub fn tidy(te_text: &str) -> String {
    let mut sorted: Vec<&str> = te_text.lines().collect();
    sorted.sort_unstable();

    let mut kept: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for (index, line) in sorted.iter().enumerate() {
        if index == 0 || *line != sorted[index - 1] {
            kept.push(line);
        } else {
            duplicates.push(line);
        }
    }

    if !duplicates.is_empty() {
        log::debug!("commented out {} duplicate lines", duplicates.len());
    }

    let mut output: Vec<String> = kept.iter().map(|l| (*l).to_string()).collect();
    output.extend(duplicates.iter().map(|l| format!("#{}", l)));
    output.join("\n")
}
