//! Front end for MiniJava: a pull-based lexer and a recursive-descent
//! recognizer that accepts or rejects a compilation unit.
//!
//! ```
//! let source = "class Main { public static void main(String[] a) { System.out.println(1); } }";
//! assert!(minijava::parse(source).is_ok());
//! ```

pub mod error;
pub mod parser;
pub mod span;

pub use error::{CompileError, CompileResult, LexErrorKind, SyntaxErrorKind};
pub use parser::lexer::{Lexer, tokenize};
pub use parser::parser::{MAX_NESTING, Parser};
pub use parser::token::{Token, TokenKind};
pub use parser::{parse, parse_chars};
pub use span::Span;
