//! This crate provides the core logic for cil2te:
//! - CIL statement scanning and symbol table construction
//! - TE statement emission (the translation pass proper)
//! - TE maintenance passes: duplicate tidy and undefined-reference check
//!
//! The translation is a single synchronous pass over an in-memory buffer and
//! keeps no state between invocations.

mod check;
pub mod commands;
mod error;
mod ident;
mod parsing;
mod synthesis;
mod tidy;

// Re-exports for a small, focused public API
pub use check::{check, UndefinedReference};
pub use error::{Cil2TeError, Cil2TeResult};
pub use ident::strip_version_suffix;
pub use parsing::{
    AllowRule, CilScanner, ExpandTypeAttribute, GenericKind, GenericStatement, RoleType,
    SymbolTable, SymbolTableBuilder, TypeAttributeSet, TypeTransition,
};
pub use synthesis::translate;
pub use tidy::tidy;
