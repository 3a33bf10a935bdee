use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! grammar_error {
    // Single string version
    ($offset:expr, $msg:expr) => {
        crate::Error::Grammar {
            message: $msg.to_string(),
            offset: $offset,
        }
    };

    // Format string with arguments version
    ($offset:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Grammar {
            message: format!($fmt, $($arg)*),
            offset: $offset,
        }
    };
}

macro_rules! invalid_tree_error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        crate::Error::InvalidTree(format!($fmt $(, $arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Type name errors
/// - [`Error::Grammar`] - The text violates the type name grammar
/// - [`Error::InvalidTree`] - A hand-built tree cannot be rendered
/// - [`Error::RecursionLimit`] - Generic nesting exceeded the configured depth
/// - [`Error::ArityLimit`] - Declared generic slots exceeded the configured total
/// - [`Error::OutOfBounds`] - The requested parse range is not inside the input
///
/// ## Assembly identity errors
/// - [`Error::Malformed`] - An assembly display name could not be parsed
///
/// # Examples
///
/// ```rust
/// use dotname::{Error, QualifiedTypeName};
///
/// match QualifiedTypeName::parse("List`2[[System.Int32]]") {
///     Ok(name) => println!("Parsed {}", name),
///     Err(Error::Grammar { message, offset }) => {
///         eprintln!("Invalid type name at {}: {}", offset, message);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input violates the type name grammar.
    ///
    /// Raised at the first offending character; there is never a partial result.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the violated rule
    /// * `offset` - Byte offset into the input at which the violation was detected
    #[error("Invalid type name at offset {offset}: {message}")]
    Grammar {
        /// The message to be printed for the Grammar error
        message: String,
        /// Byte offset of the offending construct
        offset: usize,
    },

    /// A type name tree that was assembled by hand breaks an invariant the
    /// renderer depends on, such as mixing bound and unbound generic slots.
    #[error("Invalid type name tree: {0}")]
    InvalidTree(String),

    /// An assembly display name could not be parsed.
    ///
    /// Raised for qualifiers that do not follow the
    /// `Name, Version=.., Culture=.., PublicKeyToken=..` format.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while parsing the input.
    ///
    /// The requested range lies outside the input or does not start and end
    /// on character boundaries.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Recursion limit reached.
    ///
    /// Generic arguments are parsed recursively; the depth is bounded to
    /// prevent stack exhaustion on pathological input.
    ///
    /// The associated value shows the recursion limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// Generic slot limit reached.
    ///
    /// Slots are allocated from declared arities rather than from the input
    /// length, so their total per name is bounded.
    ///
    /// The associated value shows the slot limit that was reached.
    #[error("Reach the maximum number of generic arguments allowed - {0}")]
    ArityLimit(usize),
}

impl Error {
    /// Returns `true` for errors raised by the type name grammar.
    #[must_use]
    pub fn is_grammar(&self) -> bool {
        matches!(self, Error::Grammar { .. })
    }
}
