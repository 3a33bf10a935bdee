//! Recursive-descent parser for assembly-qualified type names.
//!
//! Parsing is a single left-to-right pass driven by two explicit state machines:
//!
//! - the **name machine** (`NameState`) reads `Namespace.Name`, the optional
//!   `` `N `` arity and any `+Nested` segments,
//! - the **bracket machine** (`BracketState`) decides whether a `[` region is a
//!   generic argument list (`[[A],[B]]`) or an array rank (`[]`, `[,]`), and reads
//!   any number of array ranks after it.
//!
//! Each generic argument is captured as a self-contained span and parsed recursively
//! as a full qualified name, so commas inside an argument never reach the outer
//! assembly qualifier. All state lives in the `Cursor` that is passed down.
//!
//! Generic slots are allocated from the declared arity, so their total per name is
//! bounded by [`ParserConfig::max_generic_arguments`].
//!
//! # Example
//!
//! ```rust
//! use dotname::TypeNameParser;
//!
//! let text = "System.Collections.Generic.List`1[[System.Int32, mscorlib]], mscorlib";
//! let (end, name) = TypeNameParser::new(text).parse(0, text.len())?;
//!
//! assert_eq!(end, text.len());
//! assert_eq!(name.name, "List");
//! assert!(name.is_closed_generic());
//! # Ok::<(), dotname::Error>(())
//! ```

use strum::Display;
use tracing::{debug, trace};

use crate::{
    identity::AssemblyIdentity,
    typename::{
        config::SlotBudget, cursor::Cursor, ParserConfig, QualifiedTypeName, TypeName,
    },
    Error, Result,
};

/// States of the bare name machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum NameState {
    #[strum(serialize = "before type name")]
    BeforeTypeName,
    #[strum(serialize = "type name")]
    InTypeName,
    #[strum(serialize = "generic arity")]
    InGenericArgCount,
    #[strum(serialize = "after type name")]
    AfterTypeName,
}

/// States of the bracket machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum BracketState {
    /// Just consumed the first `[`
    #[strum(serialize = "opening bracket")]
    InBrackets,
    /// Inside an array rank, counting commas
    #[strum(serialize = "array rank")]
    InArrayBrackets,
    /// Capturing the text of one generic argument
    #[strum(serialize = "generic argument")]
    InNestedBrackets,
    /// Between `,` and the `[` of the next generic argument
    #[strum(serialize = "generic argument list")]
    BeforeArgument,
    /// Just closed a generic argument
    #[strum(serialize = "generic argument list")]
    AfterArgument,
    /// A complete bracket has been read
    #[strum(serialize = "after brackets")]
    AfterBrackets,
}

/// Characters that can never start a type name
fn is_reserved(c: char) -> bool {
    matches!(c, '`' | '+' | '.' | '[' | ']' | ',')
}

/// Parser for textual CLR type names
///
/// The parser borrows the input and can be used for any number of ranges of it;
/// every call is independent.
pub struct TypeNameParser<'a> {
    input: &'a str,
    config: ParserConfig,
}

impl<'a> TypeNameParser<'a> {
    /// Create a parser over `input` with the default configuration
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Create a parser over `input` with a custom configuration
    #[must_use]
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        TypeNameParser { input, config }
    }

    /// Parse the byte range `[start, end)` of the input as a qualified type name
    ///
    /// Returns the position at which the name ended together with the parsed tree.
    ///
    /// # Errors
    /// - [`Error::OutOfBounds`] if the range is not a valid slice of the input
    /// - [`Error::Grammar`] if the text violates the type name grammar
    /// - [`Error::RecursionLimit`] if generic arguments nest deeper than configured
    /// - [`Error::ArityLimit`] if the name declares more generic slots than configured
    pub fn parse(&self, start: usize, end: usize) -> Result<(usize, QualifiedTypeName)> {
        let mut cursor = Cursor::new(self.input, start, end)?;
        trace!(start, end, text = cursor.remaining(), "parsing type name");

        let mut budget = SlotBudget::new(self.config.max_generic_arguments);
        match self.parse_qualified(&mut cursor, 1, &mut budget) {
            Ok(name) => Ok((cursor.pos(), name)),
            Err(error) => {
                debug!(text = self.input, %error, "rejected type name");
                Err(error)
            }
        }
    }

    /// Parse the whole input as a qualified type name
    ///
    /// # Errors
    /// See [`TypeNameParser::parse`].
    pub fn parse_all(&self) -> Result<QualifiedTypeName> {
        self.parse(0, self.input.len()).map(|(_, name)| name)
    }

    /// `QualifiedName := TypeName [Brackets] [',' AssemblyName]`
    fn parse_qualified(
        &self,
        cursor: &mut Cursor<'a>,
        depth: usize,
        budget: &mut SlotBudget,
    ) -> Result<QualifiedTypeName> {
        if depth > self.config.max_depth {
            return Err(Error::RecursionLimit(self.config.max_depth));
        }

        let mut type_name = self.parse_type_name(cursor, budget)?;

        let array_dimensions = if cursor.peek() == Some('[') {
            self.parse_brackets(cursor, &mut type_name, depth, budget)?
        } else {
            Vec::new()
        };

        let assembly_name = if cursor.peek() == Some(',') {
            Some(self.parse_assembly_name(cursor)?)
        } else {
            None
        };

        Ok(QualifiedTypeName {
            type_name,
            assembly_name,
            array_dimensions,
        })
    }

    /// Run the name machine. Stops in front of `[` or `,`, or at the end of the range.
    fn parse_type_name(&self, cursor: &mut Cursor<'a>, budget: &mut SlotBudget) -> Result<TypeName> {
        let mut segments: Vec<TypeName> = Vec::new();
        let mut state = NameState::BeforeTypeName;
        let mut span_start = cursor.pos();
        let mut last_dot: Option<usize> = None;
        let mut arity_start = cursor.pos();

        while let Some(c) = cursor.peek() {
            let offset = cursor.pos();
            match state {
                NameState::BeforeTypeName => {
                    if is_reserved(c) {
                        return Err(grammar_error!(offset, "unexpected '{}' {}", c, state));
                    }
                    if !c.is_whitespace() {
                        span_start = offset;
                        state = NameState::InTypeName;
                    }
                }
                NameState::InTypeName => match c {
                    '.' => {
                        if !segments.is_empty() {
                            return Err(grammar_error!(
                                offset,
                                "nested type name cannot carry a namespace"
                            ));
                        }
                        if offset == span_start || last_dot.is_some_and(|dot| dot + 1 == offset) {
                            return Err(grammar_error!(offset, "empty namespace segment"));
                        }
                        last_dot = Some(offset);
                    }
                    '`' => {
                        segments.push(close_segment(cursor, span_start, last_dot, offset)?);
                        arity_start = offset + 1;
                        state = NameState::InGenericArgCount;
                    }
                    '+' => {
                        segments.push(close_segment(cursor, span_start, last_dot, offset)?);
                        span_start = offset + 1;
                        last_dot = None;
                    }
                    '[' | ',' => {
                        segments.push(close_segment(cursor, span_start, last_dot, offset)?);
                        return Ok(TypeName::from_segments(segments));
                    }
                    ']' => {
                        return Err(grammar_error!(offset, "unexpected ']' in {}", state));
                    }
                    c if c.is_whitespace() => {
                        segments.push(close_segment(cursor, span_start, last_dot, offset)?);
                        state = NameState::AfterTypeName;
                    }
                    _ => {}
                },
                NameState::InGenericArgCount => match c {
                    '0'..='9' => {}
                    '+' => {
                        close_arity(cursor, &mut segments, arity_start, offset, budget)?;
                        span_start = offset + 1;
                        last_dot = None;
                        state = NameState::InTypeName;
                    }
                    '[' | ',' => {
                        close_arity(cursor, &mut segments, arity_start, offset, budget)?;
                        return Ok(TypeName::from_segments(segments));
                    }
                    c if c.is_whitespace() => {
                        close_arity(cursor, &mut segments, arity_start, offset, budget)?;
                        state = NameState::AfterTypeName;
                    }
                    _ => return Err(grammar_error!(offset, "unexpected '{}' in {}", c, state)),
                },
                NameState::AfterTypeName => match c {
                    ',' => return Ok(TypeName::from_segments(segments)),
                    '[' => {
                        return Err(grammar_error!(
                            offset,
                            "whitespace is not allowed before a bracket list"
                        ))
                    }
                    c if c.is_whitespace() => {}
                    _ => return Err(grammar_error!(offset, "unexpected '{}' {}", c, state)),
                },
            }
            cursor.advance();
        }

        let end = cursor.pos();
        match state {
            NameState::BeforeTypeName => return Err(grammar_error!(end, "missing type name")),
            NameState::InTypeName => {
                segments.push(close_segment(cursor, span_start, last_dot, end)?);
            }
            NameState::InGenericArgCount => {
                close_arity(cursor, &mut segments, arity_start, end, budget)?;
            }
            NameState::AfterTypeName => {}
        }

        Ok(TypeName::from_segments(segments))
    }

    /// Run the bracket machine, starting at the first `[`.
    ///
    /// Binds generic arguments into `type_name` and returns the array ranks in the
    /// order they appear. Stops in front of a top-level `,` or at the end of the range.
    fn parse_brackets(
        &self,
        cursor: &mut Cursor<'a>,
        type_name: &mut TypeName,
        depth: usize,
        budget: &mut SlotBudget,
    ) -> Result<Vec<u32>> {
        let slots = type_name.total_arity();
        let mut arguments: Vec<QualifiedTypeName> = Vec::with_capacity(slots);
        let mut dimensions = Vec::new();
        let mut rank: u32 = 1;
        let mut capture_start = cursor.pos();
        let mut nesting = 0usize;
        let mut state = BracketState::InBrackets;

        cursor.advance();
        while let Some(c) = cursor.peek() {
            let offset = cursor.pos();
            match (state, c) {
                (BracketState::InBrackets, ']') => {
                    dimensions.push(1);
                    state = BracketState::AfterBrackets;
                }
                (BracketState::InBrackets, ',') => {
                    rank = 2;
                    state = BracketState::InArrayBrackets;
                }
                (BracketState::InBrackets | BracketState::BeforeArgument, '[') => {
                    if arguments.len() == slots {
                        return Err(grammar_error!(
                            offset,
                            "more generic arguments than the {} declared",
                            slots
                        ));
                    }
                    capture_start = offset + 1;
                    nesting = 0;
                    state = BracketState::InNestedBrackets;
                }
                (BracketState::InArrayBrackets, ',') => rank = rank.saturating_add(1),
                (BracketState::InArrayBrackets, ']') => {
                    dimensions.push(rank);
                    rank = 1;
                    state = BracketState::AfterBrackets;
                }
                (BracketState::InNestedBrackets, '[') => nesting += 1,
                (BracketState::InNestedBrackets, ']') if nesting > 0 => nesting -= 1,
                (BracketState::InNestedBrackets, ']') => {
                    let mut capture = Cursor::new(self.input, capture_start, offset)?;
                    arguments.push(self.parse_qualified(&mut capture, depth + 1, budget)?);
                    state = BracketState::AfterArgument;
                }
                (BracketState::InNestedBrackets, _) => {}
                (BracketState::AfterArgument, ',') => state = BracketState::BeforeArgument,
                (BracketState::AfterArgument, ']') => {
                    if arguments.len() != slots {
                        return Err(grammar_error!(
                            offset,
                            "{} generic arguments supplied, {} declared",
                            arguments.len(),
                            slots
                        ));
                    }
                    type_name.bind_arguments(std::mem::take(&mut arguments))?;
                    state = BracketState::AfterBrackets;
                }
                (BracketState::AfterBrackets, '[') => state = BracketState::InArrayBrackets,
                (BracketState::AfterBrackets, ',') => return Ok(dimensions),
                _ => return Err(grammar_error!(offset, "unexpected '{}' in {}", c, state)),
            }
            cursor.advance();
        }

        if state == BracketState::AfterBrackets {
            Ok(dimensions)
        } else {
            Err(grammar_error!(cursor.pos(), "unterminated {}", state))
        }
    }

    /// Consume `,` and the rest of the range as the assembly qualifier
    fn parse_assembly_name(&self, cursor: &mut Cursor<'a>) -> Result<String> {
        let comma = cursor.pos();
        cursor.advance();

        let assembly_name = cursor.remaining().trim();
        if assembly_name.is_empty() {
            return Err(grammar_error!(comma, "missing assembly name after ','"));
        }

        if self.config.validate_assembly_names {
            AssemblyIdentity::parse(assembly_name).map_err(|error| {
                grammar_error!(
                    comma + 1,
                    "invalid assembly name '{}': {}",
                    assembly_name,
                    error
                )
            })?;
        }

        cursor.seek_end();
        Ok(assembly_name.to_string())
    }
}

/// Build one segment from `[span_start, span_end)`, splitting at the last dot
fn close_segment(
    cursor: &Cursor<'_>,
    span_start: usize,
    last_dot: Option<usize>,
    span_end: usize,
) -> Result<TypeName> {
    if span_end == span_start {
        return Err(grammar_error!(span_start, "missing type name"));
    }

    match last_dot {
        Some(dot) if dot + 1 == span_end => {
            Err(grammar_error!(dot, "type name cannot end with '.'"))
        }
        Some(dot) => Ok(TypeName::with_namespace(
            cursor.slice(span_start, dot),
            cursor.slice(dot + 1, span_end),
        )),
        None => Ok(TypeName::new(cursor.slice(span_start, span_end))),
    }
}

/// Read the arity digits and give the last segment that many open slots
fn close_arity(
    cursor: &Cursor<'_>,
    segments: &mut [TypeName],
    arity_start: usize,
    arity_end: usize,
    budget: &mut SlotBudget,
) -> Result<()> {
    let digits = cursor.slice(arity_start, arity_end);
    if digits.is_empty() {
        return Err(grammar_error!(arity_start, "missing generic arity after '`'"));
    }

    let arity = digits
        .parse::<u16>()
        .map_err(|_| grammar_error!(arity_start, "generic arity '{}' is out of range", digits))?;

    let arity = usize::from(arity);
    budget.take(arity)?;

    if let Some(segment) = segments.last_mut() {
        segment.generic_arguments = vec![None; arity];
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<QualifiedTypeName> {
        TypeNameParser::new(input).parse_all()
    }

    fn assert_grammar_error(input: &str) {
        match parse(input) {
            Err(Error::Grammar { .. }) => {}
            other => panic!("expected grammar error for {:?}, got {:?}", input, other),
        }
    }

    fn argument(name: &TypeName, index: usize) -> &QualifiedTypeName {
        name.generic_arguments[index]
            .as_ref()
            .expect("generic slot should be bound")
    }

    #[test]
    fn test_simple_name() {
        let name = parse("Int32").unwrap();
        assert_eq!(name.name, "Int32");
        assert!(name.namespace.is_none());
        assert!(!name.is_generic());
        assert!(!name.is_array());
        assert!(name.assembly_name.is_none());
    }

    #[test]
    fn test_namespace_split_at_last_dot() {
        let name = parse("System.Collections.Generic.List").unwrap();
        assert_eq!(name.namespace.as_deref(), Some("System.Collections.Generic"));
        assert_eq!(name.name, "List");
    }

    #[test]
    fn test_open_generic() {
        let name = parse("System.Collections.Generic.List`1").unwrap();
        assert_eq!(name.name, "List");
        assert_eq!(name.arity(), 1);
        assert!(name.generic_arguments[0].is_none());
        assert!(name.is_open_generic());
    }

    #[test]
    fn test_closed_generic_with_assembly_names() {
        let name = parse(
            "System.Collections.Generic.Dictionary`2[[System.Int32, mscorlib],[System.String, mscorlib]], mscorlib",
        )
        .unwrap();

        assert_eq!(name.namespace.as_deref(), Some("System.Collections.Generic"));
        assert_eq!(name.name, "Dictionary");
        assert_eq!(name.assembly_name.as_deref(), Some("mscorlib"));
        assert_eq!(name.arity(), 2);

        let key = argument(&name, 0);
        assert_eq!(key.namespace.as_deref(), Some("System"));
        assert_eq!(key.name, "Int32");
        assert_eq!(key.assembly_name.as_deref(), Some("mscorlib"));

        let value = argument(&name, 1);
        assert_eq!(value.name, "String");
        assert_eq!(value.assembly_name.as_deref(), Some("mscorlib"));
    }

    #[test]
    fn test_full_assembly_qualifier_is_kept_verbatim() {
        let name = parse(
            "System.Int32, mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089",
        )
        .unwrap();
        assert_eq!(
            name.assembly_name.as_deref(),
            Some("mscorlib, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089")
        );
    }

    #[test]
    fn test_array_ranks_in_order() {
        let name = parse("T[,][]").unwrap();
        assert_eq!(name.array_dimensions, vec![2, 1]);

        let name = parse("T[][,,]").unwrap();
        assert_eq!(name.array_dimensions, vec![1, 3]);
    }

    #[test]
    fn test_open_generic_array() {
        let name = parse("List`1[]").unwrap();
        assert!(name.is_open_generic());
        assert_eq!(name.array_dimensions, vec![1]);
    }

    #[test]
    fn test_generic_followed_by_arrays() {
        let name = parse("List`1[[System.String[]]][][,]").unwrap();
        assert_eq!(name.array_dimensions, vec![1, 2]);
        let element = argument(&name, 0);
        assert_eq!(element.name, "String");
        assert_eq!(element.array_dimensions, vec![1]);
    }

    #[test]
    fn test_nested_chain() {
        let name = parse("NS.Outer+Middle+Inner").unwrap();
        let segments: Vec<&str> = name.segments().map(|s| s.name.as_str()).collect();
        assert_eq!(segments, vec!["Outer", "Middle", "Inner"]);
        assert_eq!(name.namespace.as_deref(), Some("NS"));
        assert!(name.segments().skip(1).all(|s| s.namespace.is_none()));
    }

    #[test]
    fn test_nested_generic_shares_one_argument_list() {
        let name = parse("X`1+Y`2[[A[]],[B],[C]]").unwrap();
        assert_eq!(name.segments().count(), 2);
        assert_eq!(name.arity(), 1);
        assert_eq!(argument(&name, 0).name, "A");
        assert_eq!(argument(&name, 0).array_dimensions, vec![1]);

        let inner = name.innermost();
        assert_eq!(inner.name, "Y");
        assert_eq!(inner.arity(), 2);
        assert_eq!(argument(inner, 0).name, "B");
        assert_eq!(argument(inner, 1).name, "C");
        assert!(name.is_closed_generic());
    }

    #[test]
    fn test_generic_only_on_nested_segment() {
        let name = parse("Outer+Inner`1[[A]]").unwrap();
        assert!(!name.is_generic());
        assert_eq!(argument(name.innermost(), 0).name, "A");
    }

    #[test]
    fn test_deeply_nested_arguments() {
        let name = parse("A`1[[B`2[[C`1[[D]]],[E, Lib]], Other]]").unwrap();
        let b = argument(&name, 0);
        assert_eq!(b.assembly_name.as_deref(), Some("Other"));
        let c = argument(b, 0);
        assert_eq!(argument(c, 0).name, "D");
        let e = argument(b, 1);
        assert_eq!(e.assembly_name.as_deref(), Some("Lib"));
    }

    #[test]
    fn test_whitespace_is_tolerated_around_names() {
        let name = parse("  System.Int32  ,   mscorlib  ").unwrap();
        assert_eq!(name.name, "Int32");
        assert_eq!(name.assembly_name.as_deref(), Some("mscorlib"));

        let name = parse("List`1[[ System.Int32 , mscorlib ]]").unwrap();
        let arg = argument(&name, 0);
        assert_eq!(arg.name, "Int32");
        assert_eq!(arg.assembly_name.as_deref(), Some("mscorlib"));

        let name = parse("List`1 , Lib").unwrap();
        assert!(name.is_open_generic());
        assert_eq!(name.assembly_name.as_deref(), Some("Lib"));
    }

    #[test]
    fn test_non_ascii_names() {
        let name = parse("Ñamespace.Tÿpe`1").unwrap();
        assert_eq!(name.namespace.as_deref(), Some("Ñamespace"));
        assert_eq!(name.name, "Tÿpe");
    }

    #[test]
    fn test_parse_range_reports_end() {
        let text = "xx List`1 yy";
        let (end, name) = TypeNameParser::new(text).parse(3, 9).unwrap();
        assert_eq!(end, 9);
        assert_eq!(name.name, "List");
        assert_eq!(name.arity(), 1);
    }

    #[test]
    fn test_parse_range_out_of_bounds() {
        let parser = TypeNameParser::new("abc");
        assert_eq!(parser.parse(0, 10).unwrap_err(), Error::OutOfBounds);
        assert_eq!(parser.parse(2, 1).unwrap_err(), Error::OutOfBounds);
    }

    #[test]
    fn test_missing_names() {
        assert_grammar_error("");
        assert_grammar_error("   ");
        assert_grammar_error("  , PublicKeyToken=b77a5c561934e089");
        assert_grammar_error("A+");
        assert_grammar_error("A++B");
        assert_grammar_error("A+`1");
        assert_grammar_error("List`1[[]]");
    }

    #[test]
    fn test_reserved_characters_before_name() {
        for input in ["`1", "+A", ".A", "[]", "]", ",A"] {
            assert_grammar_error(input);
        }
    }

    #[test]
    fn test_dot_rules() {
        assert_grammar_error("A..B");
        assert_grammar_error("A.");
        assert_grammar_error("System.Int32.[]");
        assert_grammar_error("Outer+NS.Inner");
    }

    #[test]
    fn test_arity_rules() {
        assert_grammar_error("List`");
        assert_grammar_error("List`x");
        assert_grammar_error("List`1x");
        assert_grammar_error("List`99999999");
    }

    #[test]
    fn test_whitespace_before_bracket() {
        assert_grammar_error("A []");
        assert_grammar_error("List`1 [[A]]");
        assert_grammar_error("A B");
    }

    #[test]
    fn test_argument_count_mismatch() {
        assert_grammar_error("List`2[[A]]");
        assert_grammar_error("List`1[[A],[B]]");
        assert_grammar_error("A[[B]]");
        assert_grammar_error("X`1+Y`1[[A]]");
    }

    #[test]
    fn test_bracket_rules() {
        assert_grammar_error("X[]+Y");
        assert_grammar_error("A[");
        assert_grammar_error("A[,");
        assert_grammar_error("List`1[[A]");
        assert_grammar_error("List`1[[A");
        assert_grammar_error("List`1[[A],");
        assert_grammar_error("A[][[B]]");
        assert_grammar_error("A[,[B]]");
        assert_grammar_error("List`1[[A]x]");
        assert_grammar_error("List`1[[A]] ");
        assert_grammar_error("A]");
        assert_grammar_error("A[]x");
    }

    #[test]
    fn test_empty_assembly_name() {
        assert_grammar_error("A,");
        assert_grammar_error("A,   ");
        assert_grammar_error("A[], ");
        assert_grammar_error("List`1[[A,]]");
    }

    #[test]
    fn test_error_offset_points_at_offender() {
        match parse("System..Int32") {
            Err(Error::Grammar { offset, .. }) => assert_eq!(offset, 7),
            other => panic!("unexpected result {:?}", other),
        }

        match parse("List`1[[A]]+B") {
            Err(Error::Grammar { offset, .. }) => assert_eq!(offset, 11),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_recursion_limit() {
        let config = ParserConfig::default().with_max_depth(2);
        let parser = TypeNameParser::with_config("A`1[[B`1[[C]]]]", config);
        assert_eq!(parser.parse_all().unwrap_err(), Error::RecursionLimit(2));

        let parser = TypeNameParser::with_config("A`1[[B]]", config);
        assert!(parser.parse_all().is_ok());
    }

    fn nested_generic(depth: usize) -> String {
        let mut text = "Leaf".to_string();
        for _ in 1..depth {
            text = format!("Node`1[[{}]]", text);
        }
        text
    }

    #[test]
    fn test_permissive_depth_bound_parses() {
        let config = ParserConfig::permissive();

        let text = nested_generic(config.max_depth);
        let name = TypeNameParser::with_config(&text, config).parse_all().unwrap();
        assert_eq!(name.assembly_qualified_name().unwrap(), text);

        let text = nested_generic(config.max_depth + 1);
        assert_eq!(
            TypeNameParser::with_config(&text, config).parse_all().unwrap_err(),
            Error::RecursionLimit(config.max_depth)
        );
    }

    #[test]
    fn test_repeated_huge_arity_is_rejected() {
        let text = format!("{}Z", "A`65535+".repeat(40));
        assert_eq!(parse(&text).unwrap_err(), Error::ArityLimit(1024));

        assert_eq!(parse("List`1025").unwrap_err(), Error::ArityLimit(1024));
        assert_eq!(parse("List`1024").unwrap().arity(), 1024);
    }

    #[test]
    fn test_generic_slot_bound_counts_whole_tree() {
        let config = ParserConfig::default().with_max_generic_arguments(3);

        let parser = TypeNameParser::with_config("A`1+B`2[[C],[D],[E]]", config);
        assert!(parser.parse_all().is_ok());

        let parser = TypeNameParser::with_config("A`2[[B`1],[C`1]]", config);
        assert_eq!(parser.parse_all().unwrap_err(), Error::ArityLimit(3));

        let parser = TypeNameParser::with_config("A`1+B`3", config);
        assert_eq!(parser.parse_all().unwrap_err(), Error::ArityLimit(3));
    }

    #[test]
    fn test_strict_assembly_validation() {
        let strict = ParserConfig::strict();

        let parser = TypeNameParser::with_config(
            "System.Int32, mscorlib, Version=4.0.0.0, Culture=neutral",
            strict,
        );
        assert!(parser.parse_all().is_ok());

        let parser = TypeNameParser::with_config("System.Int32, mscorlib, Version=x.y", strict);
        assert!(parser.parse_all().unwrap_err().is_grammar());

        let parser = TypeNameParser::with_config("System.Int32, mscorlib, Version=x.y", ParserConfig::default());
        assert!(parser.parse_all().is_ok());
    }
}
