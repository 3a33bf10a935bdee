//! The name tree produced by the parser and consumed by the builder.
//!
//! A parsed name is a [`QualifiedTypeName`]: a bare [`TypeName`] chain plus the
//! parts that apply to the name as a whole (array wrapping and the assembly
//! qualifier). Every bound generic argument is itself a [`QualifiedTypeName`].
//!
//! ```text
//! Outer`1+Inner[[System.Int32, mscorlib]][,], MyAssembly
//! └─ QualifiedTypeName
//!    ├─ type_name: Outer (arity 1) ── nested ──> Inner
//!    │             └─ generic_arguments[0] = System.Int32, mscorlib
//!    ├─ array_dimensions: [2]
//!    └─ assembly_name: "MyAssembly"
//! ```

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use crate::{identity::AssemblyIdentity, typename::TypeNameParser, Error, Result};

/// One segment of a (possibly nested) type name.
///
/// The root of a nested chain may carry a namespace, nested segments never do.
/// `generic_arguments` has exactly one slot per declared generic parameter; a
/// `None` slot is an unbound (open) parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Namespace of the chain root, e.g. `System.Collections.Generic`
    pub namespace: Option<String>,
    /// Unqualified identifier of this segment, without the arity marker
    pub name: String,
    /// The next segment of a nested type path (`Outer+Inner`)
    pub nested: Option<Box<TypeName>>,
    /// Generic argument slots declared by this segment
    pub generic_arguments: Vec<Option<QualifiedTypeName>>,
}

/// A type name together with its array wrapping and assembly qualifier.
///
/// Dereferences to the root [`TypeName`] of the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QualifiedTypeName {
    /// The bare name chain
    pub type_name: TypeName,
    /// Raw assembly qualifier, e.g. `mscorlib, Version=4.0.0.0, Culture=neutral`
    pub assembly_name: Option<String>,
    /// Array ranks, innermost wrap first
    pub array_dimensions: Vec<u32>,
}

impl TypeName {
    /// Create a non-generic, non-nested name without namespace
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TypeName {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create a name with a namespace
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        TypeName {
            namespace: Some(namespace.into()),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare `arity` unbound generic parameters on this segment
    #[must_use]
    pub fn generic(mut self, arity: usize) -> Self {
        self.generic_arguments = vec![None; arity];
        self
    }

    /// Bind the generic slots of this segment to `arguments`, replacing the current slots
    #[must_use]
    pub fn with_arguments(mut self, arguments: impl IntoIterator<Item = QualifiedTypeName>) -> Self {
        self.generic_arguments = arguments.into_iter().map(Some).collect();
        self
    }

    /// Link `segments` into a nested chain rooted at the first segment
    ///
    /// Returns an empty placeholder name if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<TypeName>) -> Self {
        segments
            .into_iter()
            .rev()
            .reduce(|inner, mut outer| {
                outer.nested = Some(Box::new(inner));
                outer
            })
            .unwrap_or_default()
    }

    /// Append `nested` at the end of this segment's nested chain
    #[must_use]
    pub fn with_nested(mut self, nested: TypeName) -> Self {
        self.innermost_mut().nested = Some(Box::new(nested));
        self
    }

    /// Number of generic slots declared by this segment
    #[must_use]
    pub fn arity(&self) -> usize {
        self.generic_arguments.len()
    }

    /// Number of generic slots declared along the whole nested chain
    #[must_use]
    pub fn total_arity(&self) -> usize {
        self.segments().map(TypeName::arity).sum()
    }

    /// `true` if this segment declares generic parameters
    #[must_use]
    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    /// `true` if any segment of the chain has an unbound generic slot
    #[must_use]
    pub fn is_open_generic(&self) -> bool {
        self.segments()
            .any(|segment| segment.generic_arguments.iter().any(Option::is_none))
    }

    /// `true` if the chain is generic and every slot is bound
    #[must_use]
    pub fn is_closed_generic(&self) -> bool {
        self.total_arity() > 0 && !self.is_open_generic()
    }

    /// `true` if this segment has a nested child
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.nested.is_some()
    }

    /// Iterate over the segments of the nested chain, starting with `self`
    pub fn segments(&self) -> impl Iterator<Item = &TypeName> {
        std::iter::successors(Some(self), |segment| segment.nested.as_deref())
    }

    /// The last segment of the nested chain
    #[must_use]
    pub fn innermost(&self) -> &TypeName {
        let mut current = self;
        while let Some(next) = current.nested.as_deref() {
            current = next;
        }
        current
    }

    /// Mutable access to the last segment of the nested chain
    pub fn innermost_mut(&mut self) -> &mut TypeName {
        match self.nested {
            Some(ref mut next) => next.innermost_mut(),
            None => self,
        }
    }

    /// All generic slots of the chain, in the order a single argument list fills them
    pub fn argument_slots(&self) -> impl Iterator<Item = &Option<QualifiedTypeName>> {
        self.segments()
            .flat_map(|segment| segment.generic_arguments.iter())
    }

    /// Bind the chain's slots, in fill order, to `arguments`
    ///
    /// # Errors
    /// Returns [`Error::InvalidTree`] if the number of arguments differs from [`TypeName::total_arity`].
    pub fn bind_arguments(&mut self, arguments: Vec<QualifiedTypeName>) -> Result<()> {
        let expected = self.total_arity();
        if arguments.len() != expected {
            return Err(invalid_tree_error!(
                "{} generic arguments supplied for {} slots",
                arguments.len(),
                expected
            ));
        }

        let mut arguments = arguments.into_iter();
        let mut current = Some(self);
        while let Some(segment) = current {
            for slot in &mut segment.generic_arguments {
                *slot = arguments.next();
            }
            current = segment.nested.as_deref_mut();
        }
        Ok(())
    }
}

impl QualifiedTypeName {
    /// Wrap a bare name without array dimensions or assembly qualifier
    #[must_use]
    pub fn new(type_name: TypeName) -> Self {
        QualifiedTypeName {
            type_name,
            assembly_name: None,
            array_dimensions: Vec::new(),
        }
    }

    /// Parse a complete assembly-qualified type name
    ///
    /// # Errors
    /// Returns [`Error::Grammar`] if `input` is not a valid type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dotname::QualifiedTypeName;
    ///
    /// let name = QualifiedTypeName::parse("System.String[], mscorlib")?;
    /// assert_eq!(name.namespace.as_deref(), Some("System"));
    /// assert_eq!(name.array_dimensions, vec![1]);
    /// assert_eq!(name.assembly_name.as_deref(), Some("mscorlib"));
    /// # Ok::<(), dotname::Error>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        TypeNameParser::new(input).parse_all()
    }

    /// Set the assembly qualifier
    #[must_use]
    pub fn in_assembly(mut self, assembly_name: impl Into<String>) -> Self {
        self.assembly_name = Some(assembly_name.into());
        self
    }

    /// Wrap the name in one more array level of `rank` dimensions (outermost)
    #[must_use]
    pub fn array_of_rank(mut self, rank: u32) -> Self {
        self.array_dimensions.push(rank);
        self
    }

    /// `true` if the name is wrapped in at least one array level
    #[must_use]
    pub fn is_array(&self) -> bool {
        !self.array_dimensions.is_empty()
    }

    /// `true` if an assembly qualifier is present and not empty
    #[must_use]
    pub fn is_assembly_qualified(&self) -> bool {
        self.assembly_name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Parse the opaque assembly qualifier as an assembly display name
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if the qualifier is present but not a valid display name.
    pub fn assembly_identity(&self) -> Result<Option<AssemblyIdentity>> {
        self.assembly_name
            .as_deref()
            .map(AssemblyIdentity::parse)
            .transpose()
    }
}

impl Deref for QualifiedTypeName {
    type Target = TypeName;

    fn deref(&self) -> &TypeName {
        &self.type_name
    }
}

impl DerefMut for QualifiedTypeName {
    fn deref_mut(&mut self) -> &mut TypeName {
        &mut self.type_name
    }
}

impl From<TypeName> for QualifiedTypeName {
    fn from(type_name: TypeName) -> Self {
        QualifiedTypeName::new(type_name)
    }
}

impl FromStr for QualifiedTypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for QualifiedTypeName {
    /// Writes the assembly-qualified form.
    ///
    /// Trees built by hand that the builder rejects report [`fmt::Error`];
    /// call [`QualifiedTypeName::assembly_qualified_name`] to get the reason.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.assembly_qualified_name().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
