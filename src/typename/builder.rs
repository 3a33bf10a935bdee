//! Renders a name tree back into its canonical textual form.
//!
//! The canonical form is what the parser accepts with all optional whitespace
//! removed:
//!
//! ```text
//! Namespace.Outer`1+Inner`2[[Arg1, Asm],[Arg2],[Arg3[]]][,][], Assembly
//! ```
//!
//! - the nested chain is written root first, each segment followed by its arity marker,
//! - the bound generic arguments of the whole chain follow as one bracket list, in the
//!   same order the parser fills them; each argument carries its own assembly name,
//! - array ranks follow in recorded order,
//! - the assembly qualifier is appended on request.

use std::fmt::Write as _;

use crate::{
    typename::{QualifiedTypeName, TypeName},
    Result,
};

/// Renderer for [`QualifiedTypeName`] trees
///
/// # Examples
///
/// ```rust
/// use dotname::{QualifiedTypeName, TypeName, TypeNameBuilder};
///
/// let int32 = QualifiedTypeName::from(TypeName::with_namespace("System", "Int32"))
///     .in_assembly("mscorlib");
/// let list = QualifiedTypeName::from(
///     TypeName::with_namespace("System.Collections.Generic", "List").with_arguments([int32]),
/// )
/// .array_of_rank(1);
///
/// let text = TypeNameBuilder::new(&list).build()?;
/// assert_eq!(text, "System.Collections.Generic.List`1[[System.Int32, mscorlib]][]");
/// # Ok::<(), dotname::Error>(())
/// ```
pub struct TypeNameBuilder<'a> {
    name: &'a QualifiedTypeName,
    include_assembly_name: bool,
}

impl<'a> TypeNameBuilder<'a> {
    /// Create a builder that renders `name` without its own assembly qualifier
    #[must_use]
    pub fn new(name: &'a QualifiedTypeName) -> Self {
        TypeNameBuilder {
            name,
            include_assembly_name: false,
        }
    }

    /// Select whether the outermost assembly qualifier is appended
    ///
    /// Generic arguments always keep their own assembly qualifiers.
    #[must_use]
    pub fn include_assembly_name(mut self, include: bool) -> Self {
        self.include_assembly_name = include;
        self
    }

    /// Render the tree
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidTree`] if the tree mixes bound and unbound generic
    /// slots, declares a namespace on a nested segment, or contains an array rank of zero.
    pub fn build(&self) -> Result<String> {
        let mut out = String::with_capacity(64);
        write_qualified(&mut out, self.name, self.include_assembly_name)?;
        Ok(out)
    }
}

fn write_qualified(out: &mut String, name: &QualifiedTypeName, include_assembly: bool) -> Result<()> {
    write_type_name(out, &name.type_name)?;

    for &rank in &name.array_dimensions {
        if rank == 0 {
            return Err(invalid_tree_error!("array rank must be at least 1"));
        }
        out.push('[');
        for _ in 1..rank {
            out.push(',');
        }
        out.push(']');
    }

    if include_assembly {
        if let Some(assembly) = name.assembly_name.as_deref().filter(|a| !a.is_empty()) {
            out.push_str(", ");
            out.push_str(assembly);
        }
    }
    Ok(())
}

fn write_type_name(out: &mut String, name: &TypeName) -> Result<()> {
    for (index, segment) in name.segments().enumerate() {
        if index == 0 {
            if let Some(namespace) = segment.namespace.as_deref().filter(|ns| !ns.is_empty()) {
                out.push_str(namespace);
                out.push('.');
            }
        } else {
            if segment.namespace.is_some() {
                return Err(invalid_tree_error!(
                    "nested type '{}' cannot carry a namespace",
                    segment.name
                ));
            }
            out.push('+');
        }

        out.push_str(&segment.name);
        if segment.is_generic() {
            let _ = write!(out, "`{}", segment.arity());
        }
    }

    let slots = name.total_arity();
    let bound = name.argument_slots().filter(|slot| slot.is_some()).count();
    if bound == 0 {
        return Ok(());
    }
    if bound != slots {
        return Err(invalid_tree_error!(
            "'{}' binds {} of {} generic slots",
            name.short_name(),
            bound,
            slots
        ));
    }

    out.push('[');
    for (index, argument) in name.argument_slots().flatten().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push('[');
        write_qualified(out, argument, true)?;
        out.push(']');
    }
    out.push(']');
    Ok(())
}

impl TypeName {
    /// The segment's own name and arity marker, e.g. ``Dictionary`2``
    ///
    /// Namespace, nested segments and arguments are left out; meant for diagnostics.
    #[must_use]
    pub fn short_name(&self) -> String {
        if self.is_generic() {
            format!("{}`{}", self.name, self.arity())
        } else {
            self.name.clone()
        }
    }
}

impl QualifiedTypeName {
    /// Render the name with generic arguments and arrays, without the assembly qualifier
    ///
    /// # Errors
    /// See [`TypeNameBuilder::build`].
    pub fn full_name(&self) -> Result<String> {
        TypeNameBuilder::new(self).build()
    }

    /// Render the complete assembly-qualified name
    ///
    /// # Errors
    /// See [`TypeNameBuilder::build`].
    pub fn assembly_qualified_name(&self) -> Result<String> {
        TypeNameBuilder::new(self).include_assembly_name(true).build()
    }
}
