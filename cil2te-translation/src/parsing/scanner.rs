//! Regex battery that locates CIL statements in raw policy text.
//!
//! Each statement kind has one fixed pattern anchored on its keyword prefix
//! and parenthesis shape. Matching is purely syntactic: a statement nested
//! deeper than its pattern encodes is skipped, not reported. Captured fields
//! are returned exactly as written; normalization happens downstream.

use regex::Regex;

/// A `(typeattributeset <set> (<members...>))` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAttributeSet {
    /// Attribute-set name, as written.
    pub attribute: String,
    /// Member elements in declaration order.
    pub members: Vec<String>,
}

/// An `(expandtypeattribute (<attr>) <flag>)` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandTypeAttribute {
    /// Attribute name, as written.
    pub attribute: String,
    /// Raw flag token; only the literal `true` has any effect downstream.
    pub enabled: String,
}

/// A `(typetransition <src> <tgt> <class> <new>)` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTransition {
    pub source: String,
    pub target: String,
    pub class: String,
    pub new_type: String,
}

/// An `(allow <src> <tgt> (<class> (<perms...>)))` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowRule {
    pub source: String,
    pub target: String,
    pub class: String,
    /// Permission tokens in written order.
    pub permissions: Vec<String>,
}

/// A `(roletype <role> <type>)` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleType {
    pub role: String,
    pub type_name: String,
}

/// Statement kinds that share the generic keyword-plus-fields emission form.
///
/// Declaration order here fixes their relative group order in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericKind {
    Genfscon,
    ClassCommon,
    Class,
    MlsConstrain,
    FsUse,
    SidContext,
    Sid,
    HandleUnknown,
    Mls,
    PolicyCap,
}

impl GenericKind {
    /// TE keyword emitted for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            GenericKind::Genfscon => "genfscon",
            GenericKind::ClassCommon => "classcommon",
            GenericKind::Class => "class",
            GenericKind::MlsConstrain => "mlsconstrain",
            GenericKind::FsUse => "fsuse",
            GenericKind::SidContext => "sidcontext",
            GenericKind::Sid => "sid",
            GenericKind::HandleUnknown => "handleunknown",
            GenericKind::Mls => "mls",
            GenericKind::PolicyCap => "policycap",
        }
    }
}

/// A match of one of the [`GenericKind`] statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericStatement {
    pub kind: GenericKind,
    /// Captured fields, left to right. Parenthesized list fields arrive as a
    /// single string of their inner tokens.
    pub fields: Vec<String>,
}

/// Compiled patterns for every recognized CIL statement kind.
pub struct CilScanner {
    typeattributeset: Regex,
    type_decl: Regex,
    expandtypeattribute: Regex,
    typetransition: Regex,
    allow: Regex,
    attribute: Regex,
    typeattribute: Regex,
    role: Regex,
    roletype: Regex,
    roleattribute: Regex,
    generic: Vec<(GenericKind, Regex)>,
}

/// Compile a hard-coded statement pattern.
fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("hard-coded statement pattern is valid")
}

impl CilScanner {
    pub fn new() -> Self {
        Self {
            typeattributeset: pattern(r"\(typeattributeset (\S+) \(([^)]+)\)\)"),
            type_decl: pattern(r"\(type (\S+)\)"),
            expandtypeattribute: pattern(r"\(expandtypeattribute \((\S+)\) (\S+)\)"),
            typetransition: pattern(r"\(typetransition (\S+) (\S+) (\S+) (\S+)\)"),
            allow: pattern(r"\(allow (\S+) (\S+) \((\S+) \(([^)]+)\)\)\)"),
            attribute: pattern(r"\(attribute (\S+)\)"),
            typeattribute: pattern(r"\(typeattribute (\S+)\)"),
            role: pattern(r"\(role (\S+)\)"),
            roletype: pattern(r"\(roletype (\S+) (\S+)\)"),
            roleattribute: pattern(r"\(roleattribute (\S+)\)"),
            generic: vec![
                (GenericKind::Genfscon, pattern(r"\(genfscon (\S+) (\S+) \(([^)]+)\)\)")),
                (GenericKind::ClassCommon, pattern(r"\(classcommon (\S+) (\S+)\)")),
                (GenericKind::Class, pattern(r"\(class (\S+) \(([^)]+)\)\)")),
                (
                    GenericKind::MlsConstrain,
                    pattern(r"\(mlsconstrain \((\S+) \(([^)]+)\)\) \(([^)]+)\)\)"),
                ),
                (GenericKind::FsUse, pattern(r"\(fsuse (\S+) (\S+) \(([^)]+)\)\)")),
                (GenericKind::SidContext, pattern(r"\(sidcontext (\S+) \(([^)]+)\)\)")),
                (GenericKind::Sid, pattern(r"\(sid (\S+)\)")),
                (GenericKind::HandleUnknown, pattern(r"\(handleunknown (\S+)\)")),
                (GenericKind::Mls, pattern(r"\(mls (\S+)\)")),
                (GenericKind::PolicyCap, pattern(r"\(policycap (\S+)\)")),
            ],
        }
    }

    /// All `typeattributeset` statements, in scan order.
    pub fn type_attribute_sets(&self, text: &str) -> Vec<TypeAttributeSet> {
        self.typeattributeset
            .captures_iter(text)
            .map(|caps| TypeAttributeSet {
                attribute: caps[1].to_string(),
                members: caps[2].split_whitespace().map(str::to_string).collect(),
            })
            .collect()
    }

    /// All `type` declarations, in scan order.
    pub fn type_declarations(&self, text: &str) -> Vec<String> {
        single_field(&self.type_decl, text)
    }

    /// All `expandtypeattribute` statements, in scan order.
    pub fn expand_type_attributes(&self, text: &str) -> Vec<ExpandTypeAttribute> {
        self.expandtypeattribute
            .captures_iter(text)
            .map(|caps| ExpandTypeAttribute {
                attribute: caps[1].to_string(),
                enabled: caps[2].to_string(),
            })
            .collect()
    }

    /// All `typetransition` statements, in scan order.
    pub fn type_transitions(&self, text: &str) -> Vec<TypeTransition> {
        self.typetransition
            .captures_iter(text)
            .map(|caps| TypeTransition {
                source: caps[1].to_string(),
                target: caps[2].to_string(),
                class: caps[3].to_string(),
                new_type: caps[4].to_string(),
            })
            .collect()
    }

    /// All `allow` rules with a single-class permission list, in scan order.
    pub fn allow_rules(&self, text: &str) -> Vec<AllowRule> {
        self.allow
            .captures_iter(text)
            .map(|caps| AllowRule {
                source: caps[1].to_string(),
                target: caps[2].to_string(),
                class: caps[3].to_string(),
                permissions: caps[4].split_whitespace().map(str::to_string).collect(),
            })
            .collect()
    }

    /// All `attribute` declarations, in scan order.
    pub fn attributes(&self, text: &str) -> Vec<String> {
        single_field(&self.attribute, text)
    }

    /// All `typeattribute` declarations, in scan order.
    pub fn type_attributes(&self, text: &str) -> Vec<String> {
        single_field(&self.typeattribute, text)
    }

    /// All `role` declarations, in scan order.
    pub fn roles(&self, text: &str) -> Vec<String> {
        single_field(&self.role, text)
    }

    /// All `roletype` statements, in scan order.
    pub fn role_types(&self, text: &str) -> Vec<RoleType> {
        self.roletype
            .captures_iter(text)
            .map(|caps| RoleType {
                role: caps[1].to_string(),
                type_name: caps[2].to_string(),
            })
            .collect()
    }

    /// All `roleattribute` declarations, in scan order.
    pub fn role_attributes(&self, text: &str) -> Vec<String> {
        single_field(&self.roleattribute, text)
    }

    /// All generic-form statements, grouped by kind in declaration order,
    /// each kind's matches in scan order.
    pub fn generic_statements(&self, text: &str) -> Vec<GenericStatement> {
        let mut statements = Vec::new();
        for (kind, regex) in &self.generic {
            for caps in regex.captures_iter(text) {
                let fields = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect();
                statements.push(GenericStatement { kind: *kind, fields });
            }
        }
        statements
    }
}

impl Default for CilScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn single_field(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}
