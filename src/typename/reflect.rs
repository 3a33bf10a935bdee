//! Conversion from a host type system into a name tree.
//!
//! Any type system that can describe a loaded type through [`TypeDescriptor`] can
//! produce a [`QualifiedTypeName`] and reuse the builder for rendering. The
//! descriptor follows reflection conventions:
//!
//! - `name` is the metadata name, including the `` `N `` suffix of generic types,
//! - nested types report their enclosing type through `declaring_type`,
//! - `generic_type_arguments` of a nested generic type lists the arguments of the
//!   whole declaring chain, outermost first,
//! - array types report their element type and rank.

use crate::{
    typename::{config::SlotBudget, ParserConfig, QualifiedTypeName, TypeName},
    Error, Result,
};

/// Read-only view of a type provided by a host type system
pub trait TypeDescriptor: Sized {
    /// Metadata name of the type, e.g. ``List`1``
    fn name(&self) -> String;

    /// Namespace of the type, `None` for nested types and the global namespace
    fn namespace(&self) -> Option<String>;

    /// The type this type is nested in
    fn declaring_type(&self) -> Option<Self>;

    /// Generic arguments of the type and its declaring types, empty if not generic
    fn generic_type_arguments(&self) -> Vec<Self>;

    /// `true` for generic definitions whose parameters are unbound
    fn is_generic_type_definition(&self) -> bool;

    /// Element type if this is an array type
    fn array_element_type(&self) -> Option<Self>;

    /// Rank if this is an array type
    fn array_rank(&self) -> Option<u32>;

    /// Display name of the defining assembly
    fn assembly_display_name(&self) -> String;
}

impl QualifiedTypeName {
    /// Build a tree describing `descriptor`
    ///
    /// # Errors
    /// - [`Error::RecursionLimit`] if generic arguments nest deeper than the default bound
    /// - [`Error::ArityLimit`] if the names declare more generic slots than the default bound
    /// - [`Error::InvalidTree`] if the descriptor reports more or fewer generic arguments
    ///   than its name declares
    pub fn from_descriptor<D: TypeDescriptor>(descriptor: &D) -> Result<Self> {
        let config = ParserConfig::default();
        let mut budget = SlotBudget::new(config.max_generic_arguments);
        from_descriptor(descriptor, 1, config.max_depth, &mut budget)
    }
}

fn from_descriptor<D: TypeDescriptor>(
    descriptor: &D,
    depth: usize,
    max_depth: usize,
    budget: &mut SlotBudget,
) -> Result<QualifiedTypeName> {
    if depth > max_depth {
        return Err(Error::RecursionLimit(max_depth));
    }

    // Peel array wraps from the outside in
    let mut array_dimensions = Vec::new();
    let mut peeled: Option<D> = None;
    loop {
        let current = peeled.as_ref().unwrap_or(descriptor);
        let Some(inner) = current.array_element_type() else {
            break;
        };
        array_dimensions.push(current.array_rank().unwrap_or(1));
        peeled = Some(inner);
    }
    array_dimensions.reverse();
    let element = peeled.as_ref().unwrap_or(descriptor);

    // Walk the declaring chain from the innermost type outwards
    let mut segments = vec![segment(element, budget)?];
    let mut declaring = element.declaring_type();
    while let Some(outer) = declaring {
        segments.push(segment(&outer, budget)?);
        declaring = outer.declaring_type();
    }
    segments.reverse();
    for nested in segments.iter_mut().skip(1) {
        nested.namespace = None;
    }

    let mut type_name = TypeName::from_segments(segments);

    if !element.is_generic_type_definition() && type_name.total_arity() > 0 {
        let arguments = element
            .generic_type_arguments()
            .iter()
            .map(|argument| from_descriptor(argument, depth + 1, max_depth, budget))
            .collect::<Result<Vec<_>>>()?;
        type_name.bind_arguments(arguments)?;
    }

    let assembly_name = Some(element.assembly_display_name()).filter(|name| !name.is_empty());

    Ok(QualifiedTypeName {
        type_name,
        assembly_name,
        array_dimensions,
    })
}

/// One chain segment with the arity taken from the `` `N `` suffix of the metadata name
fn segment<D: TypeDescriptor>(descriptor: &D, budget: &mut SlotBudget) -> Result<TypeName> {
    let name = descriptor.name();
    let (base, arity) = match name.rsplit_once('`') {
        Some((base, digits)) => match digits.parse::<u16>() {
            Ok(arity) => (base.to_string(), usize::from(arity)),
            Err(_) => (name.clone(), 0),
        },
        None => (name.clone(), 0),
    };

    budget.take(arity)?;

    Ok(TypeName {
        namespace: descriptor.namespace().filter(|ns| !ns.is_empty()),
        name: base,
        nested: None,
        generic_arguments: vec![None; arity],
    })
}
