//! Structured view of assembly qualifiers.
//!
//! Type names carry their assembly qualifier as raw text; [`AssemblyIdentity`]
//! parses that text into name, version, culture, public key token and processor
//! architecture on demand. Nothing here resolves an identity to a file.
//!
//! # Key Components
//!
//! - [`AssemblyIdentity`] - Parsed assembly display name
//! - [`AssemblyVersion`] - Four-part version number (major.minor.build.revision)
//! - [`ProcessorArchitecture`] - Processor architecture specification

pub use assembly::{AssemblyIdentity, AssemblyVersion, ProcessorArchitecture};

mod assembly;
