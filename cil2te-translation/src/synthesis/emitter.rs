//! TE statement emission.
//!
//! Each CIL statement kind maps to zero or more TE lines. Output order is the
//! fixed stage order below, not source order; within a group, lines follow
//! scan order.

use crate::ident::strip_version_suffix;
use crate::parsing::scanner::{CilScanner, GenericKind, GenericStatement};
use crate::parsing::symbols::SymbolTable;

/// Translate raw CIL policy text into TE statements, newline-joined.
///
/// Pure and total: statements that match no pattern are skipped, never
/// reported. Determinism is guaranteed by first-seen ordering of the symbol
/// table.
pub fn translate(cil_text: &str) -> String {
    let scanner = CilScanner::new();
    let symbols = SymbolTable::from_cil(&scanner, cil_text);

    let mut lines: Vec<String> = Vec::new();
    lines.extend(type_transition_lines(&scanner, cil_text));
    lines.extend(allow_lines(&scanner, cil_text));
    lines.extend(attribute_lines(&scanner, cil_text));
    lines.extend(type_attribute_lines(&scanner, cil_text));
    lines.extend(role_lines(&scanner, cil_text, &symbols));
    lines.extend(role_type_lines(&scanner, cil_text, &symbols));
    lines.extend(role_attribute_lines(&scanner, cil_text, &symbols));
    lines.extend(generic_lines(&scanner, cil_text));
    lines.extend(declared_type_lines(&symbols));
    lines.extend(expand_attribute_lines(&symbols));

    log::debug!("emitted {} TE statements", lines.len());
    lines.join("\n")
}

fn type_transition_lines(scanner: &CilScanner, text: &str) -> Vec<String> {
    scanner
        .type_transitions(text)
        .iter()
        .map(|t| {
            format!(
                "type_transition {} {}:{} {};",
                strip_version_suffix(&t.source),
                strip_version_suffix(&t.target),
                strip_version_suffix(&t.class),
                strip_version_suffix(&t.new_type)
            )
        })
        .collect()
}

fn allow_lines(scanner: &CilScanner, text: &str) -> Vec<String> {
    scanner
        .allow_rules(text)
        .iter()
        .map(|rule| {
            format!(
                "allow {} {}:{} {{ {} }};",
                strip_version_suffix(&rule.source),
                strip_version_suffix(&rule.target),
                strip_version_suffix(&rule.class),
                rule.permissions.join(" ")
            )
        })
        .collect()
}

fn attribute_lines(scanner: &CilScanner, text: &str) -> Vec<String> {
    scanner
        .attributes(text)
        .iter()
        .map(|name| format!("attribute {};", strip_version_suffix(name)))
        .collect()
}

/// `typeattribute` collapses to the same TE form as `attribute`.
fn type_attribute_lines(scanner: &CilScanner, text: &str) -> Vec<String> {
    scanner
        .type_attributes(text)
        .iter()
        .map(|name| format!("attribute {};", strip_version_suffix(name)))
        .collect()
}

/// `role` emission looks the role name up in the type-attribute membership
/// table and emits one `type` line per entry.
///
/// This conflates the role and type namespaces and is almost certainly an
/// upstream defect, but the literal behavior is kept for output compatibility.
fn role_lines(scanner: &CilScanner, text: &str, symbols: &SymbolTable) -> Vec<String> {
    let mut lines = Vec::new();
    for role in scanner.roles(text) {
        let role = strip_version_suffix(&role);
        if let Some(attrs) = symbols.memberships_of(role) {
            for attr in attrs {
                lines.push(format!("type {}, {};", role, attr));
            }
        }
    }
    lines
}

fn role_type_lines(scanner: &CilScanner, text: &str, symbols: &SymbolTable) -> Vec<String> {
    scanner
        .role_types(text)
        .iter()
        // The role name itself has no TE counterpart here; only the type side
        // is emitted.
        .map(|pair| type_line(strip_version_suffix(&pair.type_name), symbols))
        .collect()
}

/// Same namespace conflation as `role_lines`; kept literal.
fn role_attribute_lines(scanner: &CilScanner, text: &str, symbols: &SymbolTable) -> Vec<String> {
    let mut lines = Vec::new();
    for name in scanner.role_attributes(text) {
        let name = strip_version_suffix(&name);
        if let Some(attrs) = symbols.memberships_of(name) {
            for attr in attrs {
                lines.push(format!("attribute {}, {};", name, attr));
            }
        }
    }
    lines
}

fn generic_lines(scanner: &CilScanner, text: &str) -> Vec<String> {
    scanner
        .generic_statements(text)
        .iter()
        .map(generic_line)
        .collect()
}

fn generic_line(statement: &GenericStatement) -> String {
    let fields: Vec<&str> = statement
        .fields
        .iter()
        .map(|f| strip_version_suffix(f))
        .collect();
    match statement.kind {
        GenericKind::ClassCommon => format!("class {} common {};", fields[0], fields[1]),
        GenericKind::Class => {
            let perms = fields[1].split_whitespace().collect::<Vec<_>>().join(" ");
            format!("class {} {{ {} }};", fields[0], perms)
        }
        GenericKind::MlsConstrain => {
            let expr = fields[2].split_whitespace().collect::<Vec<_>>().join(" ");
            format!("mlsconstrain {} {{ {} }} {};", fields[0], fields[1], expr)
        }
        kind => format!("{} {};", kind.keyword(), fields.join(" ")),
    }
}

fn declared_type_lines(symbols: &SymbolTable) -> Vec<String> {
    symbols
        .declared_types()
        .iter()
        .map(|name| type_line(name, symbols))
        .collect()
}

fn expand_attribute_lines(symbols: &SymbolTable) -> Vec<String> {
    symbols
        .expand_attributes()
        .iter()
        .map(|name| format!("attribute {};", name))
        .collect()
}

/// `type` line for a normalized name: memberships appended comma-separated
/// when the name has any, bare otherwise.
fn type_line(name: &str, symbols: &SymbolTable) -> String {
    match symbols.memberships_of(name) {
        Some(attrs) => format!("type {}, {};", name, attrs.join(", ")),
        None => format!("type {};", name),
    }
}
