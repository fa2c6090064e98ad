//! CIL statement scanning and symbol table construction.

pub mod scanner;
pub mod symbols;

pub use scanner::{
    AllowRule, CilScanner, ExpandTypeAttribute, GenericKind, GenericStatement, RoleType,
    TypeAttributeSet, TypeTransition,
};
pub use symbols::{SymbolTable, SymbolTableBuilder};
