pub mod lexer;
pub mod parser;
pub mod token;

use crate::error::CompileResult;

/// Главная функция парсера - проверяет исходник целиком
pub fn parse(source: &str) -> CompileResult<()> {
    parse_chars(source.chars())
}

/// Same as [`parse`] for any character stream.
pub fn parse_chars<I: Iterator<Item = char>>(chars: I) -> CompileResult<()> {
    let parser = parser::Parser::new(lexer::Lexer::from_chars(chars))?;
    parser.parse()
}
