//! Assembly-qualified type names.
//!
//! This module converts between the textual form of CLR type names, as used by
//! `Type.GetType`, custom attribute blobs and resource manifests, and a structured
//! tree that can be inspected, rewritten and rendered again.
//!
//! # Grammar
//!
//! ```text
//! QualifiedName   := TypeName [Brackets] [',' AssemblyName]
//! TypeName        := [Namespace '.'] BaseName ['`' Digits] {'+' NestedSegment}
//! NestedSegment   := BaseName ['`' Digits]
//! Brackets        := GenericArgList {ArrayRank} | ArrayRank {ArrayRank}
//! GenericArgList  := '[' '[' QualifiedName ']' {',' '[' QualifiedName ']'} ']'
//! ArrayRank       := '[' {','} ']'
//! AssemblyName    := <free text to end of range, trimmed>
//! ```
//!
//! A single generic argument list after a nested chain such as ``Outer`1+Inner`1[[A],[B]]``
//! fills the argument slots of all segments in order: `A` binds `Outer`'s parameter,
//! `B` binds `Inner`'s.
//!
//! # Key Components
//!
//! - [`TypeName`] / [`QualifiedTypeName`] - The name tree
//! - [`TypeNameParser`] - Text to tree, configured through [`ParserConfig`]
//! - [`TypeNameBuilder`] - Tree to canonical text
//! - [`TypeNameNode`] - Nodes handed to [`QualifiedTypeName::transform`]
//! - [`TypeDescriptor`] - Boundary for host type systems producing trees
//!
//! # Examples
//!
//! ```rust
//! use dotname::typename::{parse_type_name, TypeNameNode};
//!
//! let mut name = parse_type_name("System.Collections.Generic.List`1[[System.Int32, mscorlib]], mscorlib")?;
//! assert_eq!(name.short_name(), "List`1");
//!
//! name.transform(|mut node| {
//!     if let TypeNameNode::Qualified(qualified) = &mut node {
//!         qualified.assembly_name = Some("System.Runtime".to_string());
//!     }
//! });
//!
//! assert_eq!(
//!     name.to_string(),
//!     "System.Collections.Generic.List`1[[System.Int32, System.Runtime]], System.Runtime"
//! );
//! # Ok::<(), dotname::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! Trees are plain owned data and are [`Send`] and [`Sync`]. Parsing and rendering
//! never mutate shared state.

mod builder;
mod config;
pub(crate) mod cursor;
mod node;
mod parser;
mod reflect;
mod transform;

pub use builder::TypeNameBuilder;
pub use config::ParserConfig;
pub use node::{QualifiedTypeName, TypeName};
pub use parser::TypeNameParser;
pub use reflect::TypeDescriptor;
pub use transform::TypeNameNode;

use crate::Result;

/// Parse a complete assembly-qualified type name with the default configuration
///
/// # Errors
/// Returns [`crate::Error::Grammar`] if `input` is not a valid type name.
pub fn parse_type_name(input: &str) -> Result<QualifiedTypeName> {
    TypeNameParser::new(input).parse_all()
}

/// Render `name`, optionally including its outermost assembly qualifier
///
/// # Errors
/// Returns [`crate::Error::InvalidTree`] if a hand-built tree cannot be rendered.
pub fn build_type_name(name: &QualifiedTypeName, include_assembly_name: bool) -> Result<String> {
    TypeNameBuilder::new(name)
        .include_assembly_name(include_assembly_name)
        .build()
}
