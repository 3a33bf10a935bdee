//! # dotname Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the dotname library. Import this module to get quick access to everything needed
//! to parse, inspect, rewrite and render type names.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotname operations
pub use crate::Error;

/// The result type used throughout dotname
pub use crate::Result;

// ================================================================================================
// Type Names
// ================================================================================================

/// The name tree
pub use crate::typename::{QualifiedTypeName, TypeName};

/// Text to tree
pub use crate::typename::{parse_type_name, ParserConfig, TypeNameParser};

/// Tree to text
pub use crate::typename::{build_type_name, TypeNameBuilder};

/// Tree rewriting
pub use crate::typename::TypeNameNode;

/// Host type system boundary
pub use crate::typename::TypeDescriptor;

// ================================================================================================
// Assembly Identity
// ================================================================================================

/// Parsed assembly display names
pub use crate::identity::{AssemblyIdentity, AssemblyVersion, ProcessorArchitecture};
