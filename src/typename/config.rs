//! Parser configuration for type name parsing
//!
//! The grammar itself is fixed; these options only bound resource usage and
//! opt into extra checks on the opaque parts of a name.

use crate::{Error, Result};

/// Configuration for [`crate::typename::TypeNameParser`]
///
/// # Examples
///
/// ```rust
/// use dotname::{ParserConfig, TypeNameParser};
///
/// let config = ParserConfig::strict();
/// let parser = TypeNameParser::with_config("System.Int32, mscorlib, Version=4.0.0.0", config);
/// let name = parser.parse_all()?;
/// assert_eq!(name.assembly_identity()?.unwrap().name, "mscorlib");
/// # Ok::<(), dotname::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of generic arguments (default: 64)
    ///
    /// A name without generic arguments has depth 1, every `[[...]]` level adds one.
    pub max_depth: usize,

    /// Maximum number of generic slots declared by one name, counting every
    /// segment and every nested argument (default: 1024)
    ///
    /// Slots are allocated from the declared arity, so this bounds memory for
    /// inputs such as ``A`65535+B`65535``.
    pub max_generic_arguments: usize,

    /// Require every assembly qualifier to be a well-formed assembly display name
    /// (name, version, culture, public key token, processor architecture)
    pub validate_assembly_names: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_generic_arguments: 1024,
            validate_assembly_names: false,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration that additionally validates assembly qualifiers
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_assembly_names: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for machine generated names with deep generic nesting
    ///
    /// The depth bound still parses on a 2 MiB thread stack in unoptimized builds.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_depth: 256,
            max_generic_arguments: 65536,
            validate_assembly_names: false,
        }
    }

    /// Returns a copy of this configuration with a different depth bound
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns a copy of this configuration with a different generic slot bound
    #[must_use]
    pub fn with_max_generic_arguments(mut self, max_generic_arguments: usize) -> Self {
        self.max_generic_arguments = max_generic_arguments;
        self
    }
}

/// Generic slots that may still be declared while building one tree
pub(crate) struct SlotBudget {
    limit: usize,
    remaining: usize,
}

impl SlotBudget {
    pub(crate) fn new(limit: usize) -> Self {
        SlotBudget {
            limit,
            remaining: limit,
        }
    }

    /// Reserve `slots` before they are allocated
    pub(crate) fn take(&mut self, slots: usize) -> Result<()> {
        if slots > self.remaining {
            return Err(Error::ArityLimit(self.limit));
        }
        self.remaining -= slots;
        Ok(())
    }
}
