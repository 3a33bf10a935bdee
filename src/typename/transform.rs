//! In-place rewriting of every node of a name tree.
//!
//! The walk is pre-order: a node is handed to the callback first, then each of its
//! bound generic arguments is transformed completely, then its nested child.
//! Array dimensions are plain integers and are not visited.
//!
//! ```rust
//! use dotname::{QualifiedTypeName, TypeNameNode};
//!
//! let mut name = QualifiedTypeName::parse(
//!     "Dictionary`2[[System.Int32, mscorlib],[System.String, mscorlib]], mscorlib",
//! )?;
//!
//! name.transform(|node| {
//!     if let TypeNameNode::Qualified(qualified) = node {
//!         qualified.assembly_name = None;
//!     }
//! });
//!
//! assert_eq!(
//!     name.assembly_qualified_name()?,
//!     "Dictionary`2[[System.Int32],[System.String]]"
//! );
//! # Ok::<(), dotname::Error>(())
//! ```

use crate::typename::{QualifiedTypeName, TypeName};

/// A node handed to a transform callback
#[derive(Debug)]
pub enum TypeNameNode<'a> {
    /// The tree root or a bound generic argument, with arrays and assembly qualifier
    Qualified(&'a mut QualifiedTypeName),
    /// A bare segment of a nested chain
    Segment(&'a mut TypeName),
}

impl TypeNameNode<'_> {
    /// The bare name of this node
    #[must_use]
    pub fn type_name(&self) -> &TypeName {
        match self {
            TypeNameNode::Qualified(qualified) => &qualified.type_name,
            TypeNameNode::Segment(segment) => segment,
        }
    }

    /// Mutable access to the bare name of this node
    pub fn type_name_mut(&mut self) -> &mut TypeName {
        match self {
            TypeNameNode::Qualified(qualified) => &mut qualified.type_name,
            TypeNameNode::Segment(segment) => segment,
        }
    }
}

impl QualifiedTypeName {
    /// Apply `mutate` to every node of the tree, pre-order, and return `self` for chaining
    pub fn transform<F>(&mut self, mut mutate: F) -> &mut Self
    where
        F: FnMut(TypeNameNode<'_>),
    {
        transform_qualified(self, &mut mutate);
        self
    }
}

impl TypeName {
    /// Apply `mutate` to this segment, its arguments and its nested chain, pre-order
    pub fn transform<F>(&mut self, mut mutate: F) -> &mut Self
    where
        F: FnMut(TypeNameNode<'_>),
    {
        transform_segment(self, &mut mutate);
        self
    }
}

fn transform_qualified<F>(name: &mut QualifiedTypeName, mutate: &mut F)
where
    F: FnMut(TypeNameNode<'_>),
{
    mutate(TypeNameNode::Qualified(name));
    transform_children(&mut name.type_name, mutate);
}

fn transform_segment<F>(segment: &mut TypeName, mutate: &mut F)
where
    F: FnMut(TypeNameNode<'_>),
{
    mutate(TypeNameNode::Segment(segment));
    transform_children(segment, mutate);
}

fn transform_children<F>(segment: &mut TypeName, mutate: &mut F)
where
    F: FnMut(TypeNameNode<'_>),
{
    for argument in segment.generic_arguments.iter_mut().flatten() {
        transform_qualified(argument, mutate);
    }
    if let Some(nested) = segment.nested.as_deref_mut() {
        transform_segment(nested, mutate);
    }
}
