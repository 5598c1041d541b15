use thiserror::Error;

use crate::parser::token::TokenKind;
use crate::span::Span;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Lexical error at {span}: {kind}")]
    LexicalError { span: Span, kind: LexErrorKind },

    #[error("Syntax error at {span}: {kind}")]
    SyntaxError { span: Span, kind: SyntaxErrorKind },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CompileError {
    pub fn lexical(span: Span, kind: LexErrorKind) -> Self {
        CompileError::LexicalError { span, kind }
    }

    pub fn syntax(span: Span, kind: SyntaxErrorKind) -> Self {
        CompileError::SyntaxError { span, kind }
    }

    /// Position of the offending character or token, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::LexicalError { span, .. } | CompileError::SyntaxError { span, .. } => {
                Some(*span)
            }
            CompileError::IoError { .. } => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, CompileError::LexicalError { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, CompileError::SyntaxError { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("expected '&&', found a single '&'")]
    StrayAmpersand,

    #[error("{}", stray_slash(.0))]
    StraySlash(Option<char>),

    #[error("malformed integer literal '{0}'")]
    MalformedInteger(String),

    #[error("unterminated block comment")]
    UnterminatedComment,
}

fn stray_slash(next: &Option<char>) -> String {
    match next {
        Some(ch) => format!("'/' must start a comment, found '{}' after it", ch),
        None => "'/' must start a comment, found end of file after it".to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("expected {expected}, found {found}")]
    Expected { expected: TokenKind, found: TokenKind },

    #[error("expected {context}, found {found}")]
    Unexpected {
        found: TokenKind,
        context: &'static str,
    },

    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
