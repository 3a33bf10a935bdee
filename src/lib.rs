// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotname
//!
//! Parsing, rendering and rewriting of .NET assembly-qualified type names.
//!
//! Type names such as
//! ``System.Collections.Generic.Dictionary`2[[System.String, mscorlib],[System.Int32, mscorlib]], mscorlib``
//! show up wherever the runtime refers to a type by text: `Type.GetType`, serialized custom
//! attribute arguments, resource manifests and binary serialization streams. `dotname` turns
//! that text into a tree, lets callers inspect and rewrite it, and renders it back into the
//! canonical form.
//!
//! ## Features
//!
//! - **Exact grammar** - nested types (`+`), generic arity (`` `N ``), generic argument
//!   lists, jagged and multi-dimensional arrays, assembly qualifiers
//! - **Precise errors** - every grammar failure reports the byte offset of the offending
//!   character
//! - **Bounded resources** - generic argument nesting and the number of declared generic
//!   slots are limited through [`ParserConfig`]
//! - **Stable round-trips** - `render(parse(render(parse(s)))) == render(parse(s))`
//! - **Tree rewriting** - visit every node in pre-order and modify it in place
//! - **Assembly identities** - structured access to assembly display names
//!
//! ## Quick Start
//!
//! ```rust
//! use dotname::prelude::*;
//!
//! let name = QualifiedTypeName::parse(
//!     "System.Collections.Generic.Dictionary`2[[System.String, mscorlib],[System.Int32, mscorlib]], mscorlib",
//! )?;
//!
//! assert_eq!(name.type_name.name, "Dictionary");
//! assert_eq!(name.arity(), 2);
//! assert_eq!(name.assembly_name.as_deref(), Some("mscorlib"));
//! assert!(name.is_closed_generic());
//! # Ok::<(), dotname::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`typename`] - Name tree, parser, builder, transform and reflection adapter
//! - [`identity`] - Assembly display name parsing
//! - [`prelude`] - Convenient re-exports
//!
//! ## Logging
//!
//! Parsing emits [`tracing`](https://docs.rs/tracing) events at `trace` and `debug` level.
//! No subscriber is installed by this crate.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], with [`Error`] distinguishing grammar
//! violations, unrenderable trees, resource limits and malformed assembly names.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotname::prelude::*;
///
/// let name = parse_type_name("System.Int32[], mscorlib")?;
/// assert!(name.is_array());
/// # Ok::<(), dotname::Error>(())
/// ```
pub mod prelude;

/// Assembly-qualified type names
///
/// See the module documentation for the grammar and the semantics of generic argument
/// lists after nested chains.
pub mod typename;

/// Assembly identities parsed from display names
pub mod identity;

/// `dotname` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use dotname::{QualifiedTypeName, Result};
///
/// fn element_name(text: &str) -> Result<String> {
///     Ok(QualifiedTypeName::parse(text)?.type_name.name)
/// }
/// # assert_eq!(element_name("System.Int32[]").unwrap(), "Int32");
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `dotname` Error type
///
/// # Examples
///
/// ```rust
/// use dotname::{Error, QualifiedTypeName};
///
/// match QualifiedTypeName::parse("System.Int32[") {
///     Ok(_) => unreachable!(),
///     Err(Error::Grammar { offset, .. }) => assert_eq!(offset, 13),
///     Err(e) => panic!("unexpected error: {}", e),
/// }
/// ```
pub use error::Error;

pub use identity::{AssemblyIdentity, AssemblyVersion, ProcessorArchitecture};
pub use typename::{
    build_type_name, parse_type_name, ParserConfig, QualifiedTypeName, TypeDescriptor, TypeName,
    TypeNameBuilder, TypeNameNode, TypeNameParser,
};
