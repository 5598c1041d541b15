use std::fmt;

use crate::span::Span;

/// Every kind of token the lexer hands to the parser.
///
/// Comment markers are not listed here: the lexer swallows them before a
/// token ever leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Операторы и пунктуация
    Add,      // +
    And,      // &&
    Assign,   // =
    Comma,    // ,
    Dot,      // .
    LBrace,   // {
    LBracket, // [
    LParen,   // (
    Lt,       // <
    Not,      // !
    RBrace,   // }
    RBracket, // ]
    RParen,   // )
    Semi,     // ;
    Sub,      // -
    Times,    // *
    // Литералы
    Identifier,
    Num,
    // Ключевые слова
    Boolean,
    Class,
    Else,
    Extends,
    False,
    If,
    Int,
    Length,
    Main,
    New,
    Out,
    Println,
    Public,
    Return,
    Static,
    String,
    System,
    This,
    True,
    Void,
    While,
    // Конец входа
    Eof,
}

impl TokenKind {
    /// Looks up a fully scanned identifier spelling in the keyword table.
    ///
    /// `out` and `println` are reserved here even though Java does not
    /// reserve them; `System.out.println` is then recognized token by token.
    pub fn keyword(spelling: &str) -> Option<TokenKind> {
        let kind = match spelling {
            "boolean" => TokenKind::Boolean,
            "class" => TokenKind::Class,
            "else" => TokenKind::Else,
            "extends" => TokenKind::Extends,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "int" => TokenKind::Int,
            "length" => TokenKind::Length,
            "main" => TokenKind::Main,
            "new" => TokenKind::New,
            "out" => TokenKind::Out,
            "println" => TokenKind::Println,
            "public" => TokenKind::Public,
            "return" => TokenKind::Return,
            "static" => TokenKind::Static,
            "String" => TokenKind::String,
            "System" => TokenKind::System,
            "this" => TokenKind::This,
            "true" => TokenKind::True,
            "void" => TokenKind::Void,
            "while" => TokenKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case name used by the token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Add => "ADD",
            TokenKind::And => "AND",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::LBrace => "LBRACE",
            TokenKind::LBracket => "LBRACK",
            TokenKind::LParen => "LPAREN",
            TokenKind::Lt => "LT",
            TokenKind::Not => "NOT",
            TokenKind::RBrace => "RBRACE",
            TokenKind::RBracket => "RBRACK",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semi => "SEMI",
            TokenKind::Sub => "SUB",
            TokenKind::Times => "TIMES",
            TokenKind::Identifier => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::Extends => "EXTENDS",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Int => "INT",
            TokenKind::Length => "LENGTH",
            TokenKind::Main => "MAIN",
            TokenKind::New => "NEW",
            TokenKind::Out => "OUT",
            TokenKind::Println => "PRINTLN",
            TokenKind::Public => "PUBLIC",
            TokenKind::Return => "RETURN",
            TokenKind::Static => "STATIC",
            TokenKind::String => "STRING",
            TokenKind::System => "SYSTEM",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Void => "VOID",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source spelling for fixed tokens, `None` for identifiers, literals and EOF.
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Add => "+",
            TokenKind::And => "&&",
            TokenKind::Assign => "=",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::LBrace => "{",
            TokenKind::LBracket => "[",
            TokenKind::LParen => "(",
            TokenKind::Lt => "<",
            TokenKind::Not => "!",
            TokenKind::RBrace => "}",
            TokenKind::RBracket => "]",
            TokenKind::RParen => ")",
            TokenKind::Semi => ";",
            TokenKind::Sub => "-",
            TokenKind::Times => "*",
            TokenKind::Boolean => "boolean",
            TokenKind::Class => "class",
            TokenKind::Else => "else",
            TokenKind::Extends => "extends",
            TokenKind::False => "false",
            TokenKind::If => "if",
            TokenKind::Int => "int",
            TokenKind::Length => "length",
            TokenKind::Main => "main",
            TokenKind::New => "new",
            TokenKind::Out => "out",
            TokenKind::Println => "println",
            TokenKind::Public => "public",
            TokenKind::Return => "return",
            TokenKind::Static => "static",
            TokenKind::String => "String",
            TokenKind::System => "System",
            TokenKind::This => "this",
            TokenKind::True => "true",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::Identifier | TokenKind::Num | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Only identifiers and integer literals carry their source text.
    pub fn has_lexeme(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Num)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.spelling()) {
            (_, Some(text)) => write!(f, "`{}`", text),
            (TokenKind::Identifier, None) => f.write_str("identifier"),
            (TokenKind::Num, None) => f.write_str("integer literal"),
            (_, None) => f.write_str("end of file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, lexeme: None, span }
    }

    pub fn with_lexeme(kind: TokenKind, lexeme: String, span: Span) -> Self {
        debug_assert!(kind.has_lexeme(), "{:?} carries no lexeme", kind);
        Self {
            kind,
            lexeme: Some(lexeme),
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn column(&self) -> usize {
        self.span.column
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Dump format: `KIND: lexeme : at line L, column C`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} : at {}",
            self.kind.name(),
            self.lexeme.as_deref().unwrap_or("<NONE>"),
            self.span
        )
    }
}
