use std::iter::Peekable;
use std::str::Chars;

use tracing::trace;

use super::token::{Token, TokenKind};
use crate::error::{CompileError, CompileResult, LexErrorKind};
use crate::span::Span;

/// What a single scan produces before comments are filtered out.
enum Scanned {
    Token(Token),
    LineComment,
    BlockOpen(Span),
    BlockClose,
}

/// Pull-based MiniJava lexer over a character stream.
///
/// Each call to [`Lexer::next_token`] returns the next token the parser
/// cares about. Comments are swallowed here: `//` runs to the end of the
/// line, `/* ... */` may nest, and text inside a block comment is scanned
/// with the ordinary rules and thrown away.
pub struct Lexer<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    line: usize,
    column: usize,
    comment_depth: usize,
    in_line_comment: bool,
    // Где открылся внешний блочный комментарий
    comment_start: Option<Span>,
    eof: Option<Token>,
}

impl<'a> Lexer<Chars<'a>> {
    pub fn new(source: &'a str) -> Self {
        Self::from_chars(source.chars())
    }
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn from_chars(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            line: 1,
            column: 1,
            comment_depth: 0,
            in_line_comment: false,
            comment_start: None,
            eof: None,
        }
    }

    /// Returns the next significant token.
    ///
    /// After the end of input has been reached every call returns the same
    /// `Eof` token again.
    pub fn next_token(&mut self) -> CompileResult<Token> {
        if let Some(eof) = &self.eof {
            return Ok(eof.clone());
        }

        loop {
            if self.in_line_comment {
                self.skip_line_comment();
            }

            let scanned = match self.scan() {
                Ok(scanned) => scanned,
                Err(err) if self.comment_depth > 0 => {
                    trace!(%err, "ignored inside block comment");
                    continue;
                }
                Err(err) => return Err(err),
            };

            match scanned {
                Scanned::LineComment => {
                    // Внутри блочного комментария "//" - обычный текст
                    if self.comment_depth == 0 {
                        self.in_line_comment = true;
                    }
                }
                Scanned::BlockOpen(span) => {
                    if self.comment_depth == 0 {
                        self.comment_start = Some(span);
                    }
                    self.comment_depth += 1;
                    trace!(depth = self.comment_depth, "block comment opened");
                }
                Scanned::BlockClose => {
                    self.comment_depth -= 1;
                    if self.comment_depth == 0 {
                        self.comment_start = None;
                    }
                    trace!(depth = self.comment_depth, "block comment closed");
                }
                Scanned::Token(token) if token.is(TokenKind::Eof) => {
                    if self.comment_depth > 0 {
                        let span = self.comment_start.unwrap_or(token.span);
                        return Err(CompileError::lexical(span, LexErrorKind::UnterminatedComment));
                    }
                    trace!(%token, "end of input");
                    self.eof = Some(token.clone());
                    return Ok(token);
                }
                Scanned::Token(token) => {
                    if self.comment_depth > 0 {
                        continue;
                    }
                    trace!(%token, "scanned");
                    return Ok(token);
                }
            }
        }
    }

    fn scan(&mut self) -> CompileResult<Scanned> {
        self.skip_whitespace();

        let start = self.position();
        let Some(ch) = self.bump() else {
            return Ok(Scanned::Token(Token::new(TokenKind::Eof, start)));
        };

        let kind = match ch {
            '+' => TokenKind::Add,
            '-' => TokenKind::Sub,
            '=' => TokenKind::Assign,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '<' => TokenKind::Lt,
            '!' => TokenKind::Not,
            ';' => TokenKind::Semi,
            '&' => {
                if !self.eat('&') {
                    return Err(CompileError::lexical(start, LexErrorKind::StrayAmpersand));
                }
                TokenKind::And
            }
            '*' => {
                // "*/" закрывает комментарий только внутри комментария
                if self.comment_depth > 0 && self.eat('/') {
                    return Ok(Scanned::BlockClose);
                }
                TokenKind::Times
            }
            '/' => {
                if self.eat('/') {
                    return Ok(Scanned::LineComment);
                }
                if self.eat('*') {
                    return Ok(Scanned::BlockOpen(start));
                }
                let next = self.chars.peek().copied();
                return Err(CompileError::lexical(start, LexErrorKind::StraySlash(next)));
            }
            '0'..='9' => return self.scan_number(ch, start).map(Scanned::Token),
            c if is_identifier_start(c) => {
                return Ok(Scanned::Token(self.scan_identifier(ch, start)));
            }
            other => {
                return Err(CompileError::lexical(start, LexErrorKind::UnexpectedChar(other)));
            }
        };

        Ok(Scanned::Token(Token::new(kind, start)))
    }

    /// Integer literal: `0` or a nonzero digit followed by any digits.
    fn scan_number(&mut self, first: char, start: Span) -> CompileResult<Token> {
        let mut digits = String::from(first);
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.bump();
        }

        if digits.len() > 1 && digits.starts_with('0') {
            return Err(CompileError::lexical(start, LexErrorKind::MalformedInteger(digits)));
        }
        Ok(Token::with_lexeme(TokenKind::Num, digits, start))
    }

    fn scan_identifier(&mut self, first: char, start: Span) -> Token {
        let mut ident = String::from(first);
        while let Some(&ch) = self.chars.peek() {
            if !is_identifier_part(ch) {
                break;
            }
            ident.push(ch);
            self.bump();
        }

        match TokenKind::keyword(&ident) {
            Some(kind) => Token::new(kind, start),
            None => Token::with_lexeme(TokenKind::Identifier, ident, start),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(' ' | '\t' | '\r' | '\n')) = self.chars.peek() {
            self.bump();
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.bump() {
            if ch == '\n' {
                break;
            }
        }
        self.in_line_comment = false;
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.chars.peek() == Some(&expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn position(&self) -> Span {
        Span::new(self.line, self.column)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Lexes the whole source, `Eof` token included.
pub fn tokenize(source: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.is(TokenKind::Eof);
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
