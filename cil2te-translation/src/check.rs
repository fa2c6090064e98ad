//! Undefined-reference check for TE policy files.
//!
//! Verifies that the source and target identifiers of `allow` and
//! `type_transition` rules were declared by a `type` or `attribute`
//! statement. Declarations may also be seeded from an auxiliary text (a base
//! policy the file is loaded on top of).

use std::collections::{HashMap, HashSet};

/// An identifier used by a rule but never declared, with every line number
/// where it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedReference {
    pub name: String,
    pub lines: Vec<usize>,
}

/// Names declared by `type` and `attribute` statements.
#[derive(Debug, Default)]
struct Declarations {
    types: HashSet<String>,
    attributes: HashSet<String>,
}

impl Declarations {
    /// Collect declarations from `text`. Comments and blank lines are
    /// skipped; a `type` declaration's name ends at the first `,` or `;`.
    fn scan(&mut self, text: &str) {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(rest) = line.strip_prefix("attribute ") {
                if let Some(name) = rest.split(';').next().filter(|n| !n.trim().is_empty()) {
                    self.attributes.insert(name.trim().to_string());
                }
            } else if let Some(rest) = line.strip_prefix("type ") {
                let name = rest.split([',', ';']).next().unwrap_or("").trim();
                if !name.is_empty() {
                    self.types.insert(name.to_string());
                }
            }
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.types.contains(name) || self.attributes.contains(name)
    }
}

/// Per-name accumulator preserving first-seen report order.
#[derive(Debug, Default)]
struct ReferenceReport {
    entries: Vec<UndefinedReference>,
    index: HashMap<String, usize>,
}

impl ReferenceReport {
    fn record(&mut self, name: &str, line: usize) {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].lines.push(line);
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push(UndefinedReference {
                name: name.to_string(),
                lines: vec![line],
            });
        }
    }
}

/// Check `te_text` for rule references to undeclared identifiers.
///
/// `extra_decls` seeds additional known names before the file's own
/// declarations are scanned. Rules whose `{ ... }` block spans multiple lines
/// are joined and reported at the closing line.
pub fn check(te_text: &str, extra_decls: Option<&str>) -> Vec<UndefinedReference> {
    let mut decls = Declarations::default();
    if let Some(extra) = extra_decls {
        decls.scan(extra);
    }
    decls.scan(te_text);

    let mut report = ReferenceReport::default();
    let mut pending: Option<String> = None;

    let mut line_number = 0;
    for line in te_text.lines() {
        line_number += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(buffer) = pending.as_mut() {
            buffer.push(' ');
            buffer.push_str(line);
            if line.contains('}') {
                check_rule(buffer, line_number, &decls, &mut report);
                pending = None;
            }
        } else if line.contains('{') && !line.contains('}') {
            pending = Some(line.to_string());
        } else {
            check_rule(line, line_number, &decls, &mut report);
        }
    }

    if pending.is_some() {
        log::warn!("incomplete rule block still open at line {}", line_number);
    }

    report.entries
}

/// Check the source and target identifiers of one logical rule.
fn check_rule(rule: &str, line: usize, decls: &Declarations, report: &mut ReferenceReport) {
    let rest = if let Some(rest) = rule.strip_prefix("allow ") {
        rest
    } else if let Some(rest) = rule.strip_prefix("type_transition ") {
        rest
    } else {
        return;
    };

    let rest = rest.trim_start();
    let Some((source, rest)) = rest.split_once(' ') else {
        return;
    };
    let source = source.trim();
    if !source.is_empty() && !decls.contains(source) {
        report.record(source, line);
    }

    let Some((target, _)) = rest.trim_start().split_once(':') else {
        return;
    };
    let target = target.trim();
    if !target.is_empty() && !decls.contains(target) {
        report.record(target, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_source_and_target_reported() {
        let findings = check("allow a b:file { read };", None);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].name, "a");
        assert_eq!(findings[0].lines, vec![1]);
        assert_eq!(findings[1].name, "b");
    }

    #[test]
    fn test_declarations_silence_findings() {
        let text = "type a;\nattribute b;\nallow a b:file { read };";
        assert!(check(text, None).is_empty());
    }

    #[test]
    fn test_type_declaration_with_membership_list() {
        let text = "type a, domain;\nallow a a:file { read };";
        assert!(check(text, None).is_empty());
    }

    #[test]
    fn test_extra_declarations_are_seeded_first() {
        let base = "type a;\nattribute b;";
        let findings = check("allow a b:file { read };", Some(base));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_line_numbers_accumulate_per_name() {
        let text = "allow x x:file { read };\ntype_transition x y_t:process z_t;";
        let findings = check(text, None);
        let x = findings.iter().find(|f| f.name == "x").expect("x reported");
        assert_eq!(x.lines, vec![1, 1, 2]);
    }

    #[test]
    fn test_multi_line_rule_is_joined() {
        let text = "allow a b:file {\n    read\n    write\n};";
        let findings = check(text, None);
        assert_eq!(findings.len(), 2);
        // Reported at the closing line of the block.
        assert_eq!(findings[0].lines, vec![4]);
    }

    #[test]
    fn test_single_line_braced_rule_is_checked_immediately() {
        let findings = check("allow a b:file { read write };", None);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].lines, vec![1]);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let text = "# allow ghost ghost:file { read };\n\ntype a;\nallow a a:file { read };";
        assert!(check(text, None).is_empty());
    }

    #[test]
    fn test_non_rule_lines_ignored() {
        let text = "mls true;\npolicycap open_perms;\ngenfscon proc / u:object_r:proc:s0";
        assert!(check(text, None).is_empty());
    }

    #[test]
    fn test_type_transition_target_before_colon() {
        let text = "type s_t;\ntype n_t;\ntype_transition s_t t_t:process n_t;";
        let findings = check(text, None);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].name, "t_t");
        assert_eq!(findings[0].lines, vec![3]);
    }
}
