//! Symbol relationships extracted ahead of TE emission.
//!
//! The builder is fed scanner matches and then frozen into an immutable
//! [`SymbolTable`] snapshot, so the emission stage never observes partially
//! built state.

use std::collections::{HashMap, HashSet};

use crate::ident::strip_version_suffix;
use crate::parsing::scanner::{CilScanner, ExpandTypeAttribute, TypeAttributeSet};

/// Mutable accumulator for the three symbol structures.
///
/// All names are normalized on the way in. Declared types and expand
/// attributes keep first-seen order; repeated declarations are ignored.
/// Membership entries accumulate in declaration order and are never
/// deduplicated, matching the attribute-set scan.
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    memberships: HashMap<String, Vec<String>>,
    declared_types: Vec<String>,
    declared_seen: HashSet<String>,
    expand_attributes: Vec<String>,
    expand_seen: HashSet<String>,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `typeattributeset` match: every member gains the set name
    /// in its membership sequence.
    pub fn record_attribute_set(&mut self, set: &TypeAttributeSet) {
        let attribute = strip_version_suffix(&set.attribute);
        for member in &set.members {
            let member = strip_version_suffix(member);
            self.memberships
                .entry(member.to_string())
                .or_default()
                .push(attribute.to_string());
        }
    }

    /// Record one `type` declaration.
    pub fn record_type(&mut self, name: &str) {
        let name = strip_version_suffix(name);
        if self.declared_seen.insert(name.to_string()) {
            self.declared_types.push(name.to_string());
        }
    }

    /// Record one `expandtypeattribute` match. Only the literal flag `true`
    /// registers the attribute; any other token is ignored.
    pub fn record_expand_attribute(&mut self, decl: &ExpandTypeAttribute) {
        if decl.enabled != "true" {
            return;
        }
        let attribute = strip_version_suffix(&decl.attribute);
        if self.expand_seen.insert(attribute.to_string()) {
            self.expand_attributes.push(attribute.to_string());
        }
    }

    /// Freeze the accumulated state.
    pub fn finish(self) -> SymbolTable {
        SymbolTable {
            memberships: self.memberships,
            declared_types: self.declared_types,
            expand_attributes: self.expand_attributes,
        }
    }
}

/// Immutable symbol snapshot consulted during emission.
#[derive(Debug)]
pub struct SymbolTable {
    memberships: HashMap<String, Vec<String>>,
    declared_types: Vec<String>,
    expand_attributes: Vec<String>,
}

impl SymbolTable {
    /// Run the three declaration scans over `text` and build the table.
    pub fn from_cil(scanner: &CilScanner, text: &str) -> Self {
        let mut builder = SymbolTableBuilder::new();
        for set in scanner.type_attribute_sets(text) {
            builder.record_attribute_set(&set);
        }
        for name in scanner.type_declarations(text) {
            builder.record_type(&name);
        }
        for decl in scanner.expand_type_attributes(text) {
            builder.record_expand_attribute(&decl);
        }
        let table = builder.finish();
        log::debug!(
            "symbol table: {} members, {} types, {} expand attributes",
            table.memberships.len(),
            table.declared_types.len(),
            table.expand_attributes.len()
        );
        table
    }

    /// Attribute sets `name` was declared a member of, in first-seen order.
    /// `name` must already be normalized.
    pub fn memberships_of(&self, name: &str) -> Option<&[String]> {
        self.memberships.get(name).map(Vec::as_slice)
    }

    /// Explicitly declared types, in first-seen order.
    pub fn declared_types(&self) -> &[String] {
        &self.declared_types
    }

    /// Attributes declared `expandtypeattribute ... true`, in first-seen order.
    pub fn expand_attributes(&self) -> &[String] {
        &self.expand_attributes
    }
}
