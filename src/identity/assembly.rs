//! Assembly display names.
//!
//! The assembly qualifier of a type name is kept as opaque text by the parser.
//! This module gives structured access to it when a caller needs the individual
//! components:
//!
//! ```text
//! mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089
//! └─ name   └─ version       └─ culture       └─ public key token
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dotname::identity::{AssemblyIdentity, AssemblyVersion};
//!
//! let identity = AssemblyIdentity::parse(
//!     "mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
//! )?;
//! assert_eq!(identity.name, "mscorlib");
//! assert_eq!(identity.version, AssemblyVersion::new(4, 0, 0, 0));
//! assert!(identity.is_culture_neutral());
//! assert!(identity.is_strong_named());
//! # Ok::<(), dotname::Error>(())
//! ```

use std::{fmt, fmt::Write as _, str::FromStr};

use crate::{Error, Result};

/// Identity of an assembly as written in a display name.
///
/// Components missing from the display name keep their neutral value: version
/// `0.0.0.0`, no culture, no public key token, no processor architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyIdentity {
    /// Simple assembly name (e.g., "mscorlib", "System.Core").
    pub name: String,

    /// Four-part version number.
    pub version: AssemblyVersion,

    /// Culture of a satellite assembly. `None` for culture-neutral assemblies.
    pub culture: Option<String>,

    /// Eight byte public key token of a strong-named assembly, in display order.
    pub public_key_token: Option<[u8; 8]>,

    /// Target processor architecture, if specified.
    pub processor_architecture: Option<ProcessorArchitecture>,
}

/// Four-part version numbering for .NET assemblies.
///
/// Versions are compared component-wise in order: major, minor, build, revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AssemblyVersion {
    /// Major version component.
    pub major: u16,
    /// Minor version component.
    pub minor: u16,
    /// Build version component.
    pub build: u16,
    /// Revision version component.
    pub revision: u16,
}

/// Processor architecture specification for .NET assemblies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessorArchitecture {
    /// Architecture neutral managed code
    MSIL,
    /// 32-bit Intel x86
    X86,
    /// Intel Itanium
    IA64,
    /// x86-64; `x64` is accepted as an alias when parsing
    AMD64,
    /// 32-bit ARM
    ARM,
    /// 64-bit ARM
    ARM64,
}

impl AssemblyIdentity {
    /// Create an identity with only a simple name; all other components neutral
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: AssemblyVersion::UNKNOWN,
            culture: None,
            public_key_token: None,
            processor_architecture: None,
        }
    }

    /// Parse assembly identity from display name string.
    ///
    /// # Format
    ///
    /// ```text
    /// AssemblyName[, Version=Major.Minor.Build.Revision][, Culture=culture][, PublicKeyToken=token][, ProcessorArchitecture=arch]
    /// ```
    ///
    /// Keys are matched case-insensitively. Unknown keys such as `Retargetable`
    /// or `PublicKey` are accepted and ignored.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the name is empty, a component is not a
    /// `Key=Value` pair, or a known component has an invalid value.
    pub fn parse(display_name: &str) -> Result<Self> {
        let mut parts = display_name.split(',').map(str::trim);

        let name = parts.next().unwrap_or_default();
        if name.is_empty() {
            return Err(malformed_error!("Assembly name cannot be empty"));
        }

        let mut identity = Self::new(name);
        for part in parts {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| malformed_error!("Expected Key=Value in '{}'", part))?;
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "version" => identity.version = AssemblyVersion::parse(value)?,
                "culture" => {
                    if !value.eq_ignore_ascii_case("neutral") && !value.is_empty() {
                        identity.culture = Some(value.to_string());
                    }
                }
                "publickeytoken" => {
                    if !value.eq_ignore_ascii_case("null") && !value.is_empty() {
                        identity.public_key_token = Some(parse_token(value)?);
                    }
                }
                "processorarchitecture" => {
                    identity.processor_architecture = Some(ProcessorArchitecture::parse(value)?);
                }
                _ => {}
            }
        }

        Ok(identity)
    }

    /// Generate the canonical display name for this identity.
    ///
    /// Version, culture and public key token are always written; the processor
    /// architecture only when known.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut result = String::with_capacity(self.name.len() + 80);

        result.push_str(&self.name);
        let _ = write!(result, ", Version={}", self.version);
        let _ = write!(
            result,
            ", Culture={}",
            self.culture.as_deref().unwrap_or("neutral")
        );

        result.push_str(", PublicKeyToken=");
        match &self.public_key_token {
            Some(token) => result.push_str(&hex::encode(token)),
            None => result.push_str("null"),
        }

        if let Some(arch) = &self.processor_architecture {
            let _ = write!(result, ", ProcessorArchitecture={}", arch);
        }

        result
    }

    /// `true` if the assembly carries a public key token
    #[must_use]
    pub fn is_strong_named(&self) -> bool {
        self.public_key_token.is_some()
    }

    /// `true` if no culture is set
    #[must_use]
    pub fn is_culture_neutral(&self) -> bool {
        self.culture.is_none()
    }
}

fn parse_token(value: &str) -> Result<[u8; 8]> {
    let bytes = hex::decode(value)
        .map_err(|e| malformed_error!("Invalid hex in PublicKeyToken '{}': {}", value, e))?;

    <[u8; 8]>::try_from(bytes.as_slice()).map_err(|_| {
        malformed_error!(
            "PublicKeyToken must be exactly 8 bytes (16 hex characters), got {} bytes from '{}'",
            bytes.len(),
            value
        )
    })
}

impl AssemblyVersion {
    /// Version `0.0.0.0`, used when a display name has no `Version` component
    pub const UNKNOWN: Self = Self::new(0, 0, 0, 0);

    /// Create a new assembly version with the specified components.
    #[must_use]
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// `true` for [`AssemblyVersion::UNKNOWN`]
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.major == 0 && self.minor == 0 && self.build == 0 && self.revision == 0
    }

    /// Parse a version with one to four dot separated components; missing ones are 0.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] on more than four components or a component that
    /// is not a 16-bit unsigned integer.
    pub fn parse(version_str: &str) -> Result<Self> {
        let parts: Vec<&str> = version_str.split('.').collect();
        if parts.len() > 4 {
            return Err(malformed_error!("Invalid version format: {}", version_str));
        }

        let mut components = [0u16; 4];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .parse::<u16>()
                .map_err(|_| malformed_error!("Invalid version component: '{}'", part))?;
        }

        Ok(Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
        ))
    }
}

impl ProcessorArchitecture {
    /// Parse processor architecture from its display name, case-insensitively.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the architecture is not recognized.
    pub fn parse(arch_str: &str) -> Result<Self> {
        match arch_str.trim().to_ascii_lowercase().as_str() {
            "msil" => Ok(Self::MSIL),
            "x86" => Ok(Self::X86),
            "ia64" => Ok(Self::IA64),
            "amd64" | "x64" => Ok(Self::AMD64),
            "arm" => Ok(Self::ARM),
            "arm64" => Ok(Self::ARM64),
            _ => Err(malformed_error!(
                "Unknown processor architecture: '{}'",
                arch_str.trim()
            )),
        }
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl fmt::Display for ProcessorArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MSIL => "MSIL",
            Self::X86 => "x86",
            Self::IA64 => "IA64",
            Self::AMD64 => "AMD64",
            Self::ARM => "ARM",
            Self::ARM64 => "ARM64",
        })
    }
}

impl fmt::Display for AssemblyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for AssemblyIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for ProcessorArchitecture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
