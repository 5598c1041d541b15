use tracing::{debug, trace};

use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::error::{CompileError, CompileResult, SyntaxErrorKind};

/// Deepest nesting of statements and expressions the parser accepts.
pub const MAX_NESTING: usize = 128;

/// How a body item that starts with an identifier continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    /// `Foo x ;`
    Declaration,
    /// `x = ... ;` or `x [ ... ] = ... ;`
    Statement,
}

/// Part of a method body the parser is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Declarations,
    Statements,
}

/// Recursive-descent recognizer for MiniJava.
///
/// The parser keeps one `current` token and a single `pending` slot. The
/// slot is filled only by `resolve_identifier_lead` and drained either by
/// `parse_type` or by `parse_statement`, whichever commits first.
pub struct Parser<I: Iterator<Item = char>> {
    lexer: Lexer<I>,
    current: Token,
    pending: Option<Token>,
    depth: usize,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Primes the parser with the first token of the stream.
    pub fn new(mut lexer: Lexer<I>) -> CompileResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            pending: None,
            depth: 0,
        })
    }

    /// Validates the whole compilation unit, up to and including `Eof`.
    pub fn parse(mut self) -> CompileResult<()> {
        self.parse_program()
    }

    // Program -> MainClass ClassDecl*
    fn parse_program(&mut self) -> CompileResult<()> {
        self.parse_main_class()?;
        while self.current.is(TokenKind::Class) {
            self.parse_class_decl()?;
        }
        self.eat_token(TokenKind::Eof)?;
        Ok(())
    }

    // MainClass -> class id { public static void main ( String [ ] id ) { Statement* } }
    fn parse_main_class(&mut self) -> CompileResult<()> {
        self.eat_token(TokenKind::Class)?;
        let name = self.eat_token(TokenKind::Identifier)?;
        debug!(class = lexeme(&name), "main class");

        self.eat_token(TokenKind::LBrace)?;
        self.eat_token(TokenKind::Public)?;
        self.eat_token(TokenKind::Static)?;
        self.eat_token(TokenKind::Void)?;
        self.eat_token(TokenKind::Main)?;
        self.eat_token(TokenKind::LParen)?;
        self.eat_token(TokenKind::String)?;
        self.eat_token(TokenKind::LBracket)?;
        self.eat_token(TokenKind::RBracket)?;
        self.eat_token(TokenKind::Identifier)?;
        self.eat_token(TokenKind::RParen)?;
        self.eat_token(TokenKind::LBrace)?;
        self.parse_statements()?;
        self.eat_token(TokenKind::RBrace)?;
        self.eat_token(TokenKind::RBrace)?;
        Ok(())
    }

    // ClassDecl -> class id ( extends id )? { VarDecl* MethodDecl* }
    fn parse_class_decl(&mut self) -> CompileResult<()> {
        self.eat_token(TokenKind::Class)?;
        let name = self.eat_token(TokenKind::Identifier)?;
        if self.current.is(TokenKind::Extends) {
            self.advance()?;
            let parent = self.eat_token(TokenKind::Identifier)?;
            debug!(class = lexeme(&name), extends = lexeme(&parent), "class declaration");
        } else {
            debug!(class = lexeme(&name), "class declaration");
        }

        self.eat_token(TokenKind::LBrace)?;
        // В теле класса нет операторов, идентификатор всегда начинает тип
        while self.starts_type() {
            self.parse_var_decl()?;
        }
        while self.current.is(TokenKind::Public) {
            self.parse_method()?;
        }
        self.eat_token(TokenKind::RBrace)?;
        Ok(())
    }

    // MethodDecl -> public Type id ( FormalList ) { VarDecl* Statement* return Exp ; }
    fn parse_method(&mut self) -> CompileResult<()> {
        self.eat_token(TokenKind::Public)?;
        self.parse_type()?;
        let name = self.eat_token(TokenKind::Identifier)?;
        debug!(method = lexeme(&name), line = name.line(), "method declaration");

        self.eat_token(TokenKind::LParen)?;
        self.parse_formal_list()?;
        self.eat_token(TokenKind::RParen)?;
        self.eat_token(TokenKind::LBrace)?;
        self.parse_method_body()?;
        self.eat_token(TokenKind::Return)?;
        self.parse_exp()?;
        self.eat_token(TokenKind::Semi)?;
        self.eat_token(TokenKind::RBrace)?;
        Ok(())
    }

    // FormalList -> Type id ( , Type id )*
    //            ->
    fn parse_formal_list(&mut self) -> CompileResult<()> {
        if !self.starts_type() {
            return Ok(());
        }
        self.parse_type()?;
        self.eat_token(TokenKind::Identifier)?;
        while self.current.is(TokenKind::Comma) {
            self.advance()?;
            self.parse_type()?;
            self.eat_token(TokenKind::Identifier)?;
        }
        Ok(())
    }

    /// `VarDecl* Statement*` of a method body, up to the `return`.
    ///
    /// Declarations led by `int` or `boolean` are only taken in the
    /// declarations region. An identifier lead is decided the same way in
    /// both regions, and the decision moves the parser into the matching one.
    fn parse_method_body(&mut self) -> CompileResult<()> {
        let mut region = Region::Declarations;

        loop {
            match self.current.kind {
                TokenKind::Int | TokenKind::Boolean if region == Region::Declarations => {
                    self.parse_var_decl()?;
                }
                TokenKind::Identifier => {
                    region = match self.parse_identifier_item()? {
                        Lead::Declaration => Region::Declarations,
                        Lead::Statement => Region::Statements,
                    };
                }
                TokenKind::LBrace | TokenKind::If | TokenKind::While | TokenKind::System => {
                    self.parse_statement()?;
                    region = Region::Statements;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Parses a declaration or an assignment that starts with an identifier
    /// and reports which one it was.
    fn parse_identifier_item(&mut self) -> CompileResult<Lead> {
        let lead = self.resolve_identifier_lead()?;
        match lead {
            Lead::Declaration => self.parse_var_decl()?,
            Lead::Statement => self.parse_statement()?,
        }
        Ok(lead)
    }

    /// Consumes a leading identifier into the pending slot and looks at the
    /// token after it: another identifier means `Type id ;`, `=` or `[`
    /// means an assignment.
    fn resolve_identifier_lead(&mut self) -> CompileResult<Lead> {
        debug_assert!(self.pending.is_none(), "pending slot already holds a token");

        let lead = self.advance()?;
        let decision = match self.current.kind {
            TokenKind::Identifier => Lead::Declaration,
            TokenKind::Assign | TokenKind::LBracket => Lead::Statement,
            _ => return Err(self.unexpected("an identifier, `=` or `[`")),
        };
        trace!(?decision, ident = lexeme(&lead), "identifier lead resolved");

        self.pending = Some(lead);
        Ok(decision)
    }

    // VarDecl -> Type id ;
    fn parse_var_decl(&mut self) -> CompileResult<()> {
        self.parse_type()?;
        self.eat_token(TokenKind::Identifier)?;
        self.eat_token(TokenKind::Semi)?;
        Ok(())
    }

    // Type -> int [ ]
    //      -> boolean
    //      -> int
    //      -> id
    fn parse_type(&mut self) -> CompileResult<()> {
        // Имя типа уже прочитано при разборе неоднозначности
        if self.pending.take().is_some() {
            return Ok(());
        }

        match self.current.kind {
            TokenKind::Int => {
                self.advance()?;
                if self.current.is(TokenKind::LBracket) {
                    self.advance()?;
                    self.eat_token(TokenKind::RBracket)?;
                }
                Ok(())
            }
            TokenKind::Boolean | TokenKind::Identifier => {
                self.advance()?;
                Ok(())
            }
            _ => Err(self.unexpected("a type")),
        }
    }

    /// `Statement*` of the main method and of `{ }` blocks.
    ///
    /// An identifier lead goes through the same decision as in a method
    /// body, so `Foo x ;` is taken here as well.
    fn parse_statements(&mut self) -> CompileResult<()> {
        loop {
            match self.current.kind {
                TokenKind::Identifier => {
                    self.parse_identifier_item()?;
                }
                TokenKind::LBrace | TokenKind::If | TokenKind::While | TokenKind::System => {
                    self.parse_statement()?;
                }
                _ => return Ok(()),
            }
        }
    }

    // Statement -> { Statement* }
    //           -> if ( Exp ) Statement else Statement
    //           -> while ( Exp ) Statement
    //           -> System . out . println ( Exp ) ;
    //           -> id = Exp ;
    //           -> id [ Exp ] = Exp ;
    fn parse_statement(&mut self) -> CompileResult<()> {
        self.enter()?;
        let result = self.parse_statement_body();
        self.depth -= 1;
        result
    }

    fn parse_statement_body(&mut self) -> CompileResult<()> {
        if let Some(target) = self.pending.take() {
            return self.parse_assignment(target);
        }

        match self.current.kind {
            TokenKind::LBrace => {
                self.advance()?;
                self.parse_statements()?;
                self.eat_token(TokenKind::RBrace)?;
            }
            TokenKind::If => {
                self.advance()?;
                self.eat_token(TokenKind::LParen)?;
                self.parse_exp()?;
                self.eat_token(TokenKind::RParen)?;
                self.parse_statement()?;
                self.eat_token(TokenKind::Else)?;
                self.parse_statement()?;
            }
            TokenKind::While => {
                self.advance()?;
                self.eat_token(TokenKind::LParen)?;
                self.parse_exp()?;
                self.eat_token(TokenKind::RParen)?;
                self.parse_statement()?;
            }
            TokenKind::System => {
                self.advance()?;
                self.eat_token(TokenKind::Dot)?;
                self.eat_token(TokenKind::Out)?;
                self.eat_token(TokenKind::Dot)?;
                self.eat_token(TokenKind::Println)?;
                self.eat_token(TokenKind::LParen)?;
                self.parse_exp()?;
                self.eat_token(TokenKind::RParen)?;
                self.eat_token(TokenKind::Semi)?;
            }
            TokenKind::Identifier => {
                let target = self.advance()?;
                return self.parse_assignment(target);
            }
            _ => return Err(self.unexpected("a statement")),
        }
        Ok(())
    }

    /// Rest of `id = Exp ;` or `id [ Exp ] = Exp ;` after `id` was consumed.
    fn parse_assignment(&mut self, target: Token) -> CompileResult<()> {
        match self.current.kind {
            TokenKind::Assign => {}
            TokenKind::LBracket => {
                self.advance()?;
                self.parse_exp()?;
                self.eat_token(TokenKind::RBracket)?;
            }
            _ => return Err(self.unexpected("`=` or `[`")),
        }
        trace!(target = lexeme(&target), "assignment");

        self.eat_token(TokenKind::Assign)?;
        self.parse_exp()?;
        self.eat_token(TokenKind::Semi)?;
        Ok(())
    }

    fn parse_exp(&mut self) -> CompileResult<()> {
        self.enter()?;
        let result = self.parse_and_exp();
        self.depth -= 1;
        result
    }

    // Exp -> LtExp ( && LtExp )*
    fn parse_and_exp(&mut self) -> CompileResult<()> {
        self.parse_lt_exp()?;
        while self.current.is(TokenKind::And) {
            self.advance()?;
            self.parse_lt_exp()?;
        }
        Ok(())
    }

    // LtExp -> AddSubExp ( < AddSubExp )*
    fn parse_lt_exp(&mut self) -> CompileResult<()> {
        self.parse_add_sub_exp()?;
        while self.current.is(TokenKind::Lt) {
            self.advance()?;
            self.parse_add_sub_exp()?;
        }
        Ok(())
    }

    // AddSubExp -> TimesExp ( ( + | - ) TimesExp )*
    fn parse_add_sub_exp(&mut self) -> CompileResult<()> {
        self.parse_times_exp()?;
        while matches!(self.current.kind, TokenKind::Add | TokenKind::Sub) {
            self.advance()?;
            self.parse_times_exp()?;
        }
        Ok(())
    }

    // TimesExp -> NotExp ( * NotExp )*
    fn parse_times_exp(&mut self) -> CompileResult<()> {
        self.parse_not_exp()?;
        while self.current.is(TokenKind::Times) {
            self.advance()?;
            self.parse_not_exp()?;
        }
        Ok(())
    }

    // NotExp -> !* PostfixExp
    fn parse_not_exp(&mut self) -> CompileResult<()> {
        while self.current.is(TokenKind::Not) {
            self.advance()?;
        }
        self.parse_postfix_exp()
    }

    // PostfixExp -> AtomExp ( . id ( ExpList ) | [ Exp ] | . length )*
    fn parse_postfix_exp(&mut self) -> CompileResult<()> {
        self.parse_atom_exp()?;

        loop {
            match self.current.kind {
                TokenKind::Dot => {
                    self.advance()?;
                    match self.current.kind {
                        TokenKind::Length => {
                            self.advance()?;
                        }
                        TokenKind::Identifier => {
                            self.advance()?;
                            self.eat_token(TokenKind::LParen)?;
                            self.parse_exp_list()?;
                            self.eat_token(TokenKind::RParen)?;
                        }
                        _ => return Err(self.unexpected("a method name or `length`")),
                    }
                }
                TokenKind::LBracket => {
                    self.advance()?;
                    self.parse_exp()?;
                    self.eat_token(TokenKind::RBracket)?;
                }
                _ => return Ok(()),
            }
        }
    }

    // AtomExp -> ( Exp )
    //         -> INTEGER_LITERAL
    //         -> true | false | this | id
    //         -> new int [ Exp ]
    //         -> new id ( )
    fn parse_atom_exp(&mut self) -> CompileResult<()> {
        match self.current.kind {
            TokenKind::LParen => {
                self.advance()?;
                self.parse_exp()?;
                self.eat_token(TokenKind::RParen)?;
            }
            TokenKind::Num
            | TokenKind::True
            | TokenKind::False
            | TokenKind::This
            | TokenKind::Identifier => {
                self.advance()?;
            }
            TokenKind::New => {
                self.advance()?;
                match self.current.kind {
                    TokenKind::Int => {
                        self.advance()?;
                        self.eat_token(TokenKind::LBracket)?;
                        self.parse_exp()?;
                        self.eat_token(TokenKind::RBracket)?;
                    }
                    TokenKind::Identifier => {
                        self.advance()?;
                        self.eat_token(TokenKind::LParen)?;
                        self.eat_token(TokenKind::RParen)?;
                    }
                    _ => return Err(self.unexpected("`int` or a class name after `new`")),
                }
            }
            _ => return Err(self.unexpected("an expression")),
        }
        Ok(())
    }

    // ExpList -> Exp ( , Exp )*
    //         ->
    fn parse_exp_list(&mut self) -> CompileResult<()> {
        if self.current.is(TokenKind::RParen) {
            return Ok(());
        }
        self.parse_exp()?;
        while self.current.is(TokenKind::Comma) {
            self.advance()?;
            self.parse_exp()?;
        }
        Ok(())
    }

    // Вспомогательные методы

    /// Moves to the next token and returns the one just consumed.
    fn advance(&mut self) -> CompileResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn eat_token(&mut self, expected: TokenKind) -> CompileResult<Token> {
        if self.current.is(expected) {
            return self.advance();
        }
        Err(CompileError::syntax(
            self.current.span,
            SyntaxErrorKind::Expected {
                expected,
                found: self.current.kind,
            },
        ))
    }

    /// One more level of statement or expression nesting.
    fn enter(&mut self) -> CompileResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(CompileError::syntax(
                self.current.span,
                SyntaxErrorKind::NestingTooDeep { limit: MAX_NESTING },
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn unexpected(&self, context: &'static str) -> CompileError {
        CompileError::syntax(
            self.current.span,
            SyntaxErrorKind::Unexpected {
                found: self.current.kind,
                context,
            },
        )
    }

    fn starts_type(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::Int | TokenKind::Boolean | TokenKind::Identifier
        )
    }
}

fn lexeme(token: &Token) -> &str {
    token.lexeme.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::str::Chars;

    use super::*;
    use crate::span::Span;

    fn parser_for(source: &str) -> Parser<Chars<'_>> {
        Parser::new(Lexer::new(source)).unwrap()
    }

    fn syntax_error(result: CompileResult<()>) -> (Span, SyntaxErrorKind) {
        match result {
            Err(CompileError::SyntaxError { span, kind }) => (span, kind),
            other => panic!("expected a syntax error, got {:?}", other),
        }
    }

    #[test]
    fn declaration_then_assignment() {
        let mut parser = parser_for("Foo x; x = 1; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Return));
        assert!(parser.pending.is_none());
    }

    #[test]
    fn bare_assignment_enters_statements_region() {
        let mut parser = parser_for("x = 1; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Return));

        // После оператора `int` уже не начинает объявление
        let mut parser = parser_for("x = 1; int y; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Int));
        assert!(parser.pending.is_none());
    }

    #[test]
    fn identifier_declarations_stay_in_declarations_region() {
        let mut parser = parser_for("Foo x; int y; Bar z; boolean[] q; return");
        // `boolean[]` is not a type, so the body stops at the bracket.
        let (span, kind) = syntax_error(parser.parse_method_body());
        assert_eq!(span, Span::new(1, 29));
        assert_eq!(
            kind,
            SyntaxErrorKind::Expected {
                expected: TokenKind::Identifier,
                found: TokenKind::LBracket
            }
        );

        let mut parser = parser_for("Foo x; int y; Bar z; int[] q; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Return));
    }

    #[test]
    fn identifier_declaration_after_statement_is_accepted() {
        let mut parser = parser_for("x = 1; Foo y; int z; y = x; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Return));
    }

    #[test]
    fn array_assignment_lead() {
        let mut parser = parser_for("Foo x; x[0] = 1; return");
        parser.parse_method_body().unwrap();
        assert!(parser.current.is(TokenKind::Return));
    }

    #[test]
    fn identifier_lead_with_bad_follower() {
        let mut parser = parser_for("x + 1; return");
        let (span, kind) = syntax_error(parser.parse_method_body());
        assert_eq!(span, Span::new(1, 3));
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Add,
                context: "an identifier, `=` or `[`"
            }
        );
    }

    #[test]
    fn declaration_with_initializer_is_rejected() {
        let mut parser = parser_for("Foo x = 1; return");
        let (_, kind) = syntax_error(parser.parse_method_body());
        assert_eq!(
            kind,
            SyntaxErrorKind::Expected {
                expected: TokenKind::Semi,
                found: TokenKind::Assign
            }
        );
    }

    #[test]
    fn pending_slot_feeds_type_once() {
        let mut parser = parser_for("Foo x;");
        assert_eq!(parser.resolve_identifier_lead().unwrap(), Lead::Declaration);
        assert_eq!(parser.pending.as_ref().map(|t| t.kind), Some(TokenKind::Identifier));
        parser.parse_var_decl().unwrap();
        assert!(parser.pending.is_none());
        assert!(parser.current.is(TokenKind::Eof));
    }

    #[test]
    fn pending_slot_feeds_assignment_target() {
        let mut parser = parser_for("x[i] = 2;");
        assert_eq!(parser.resolve_identifier_lead().unwrap(), Lead::Statement);
        parser.parse_statement().unwrap();
        assert!(parser.pending.is_none());
        assert!(parser.current.is(TokenKind::Eof));
    }

    #[test]
    fn statement_lists_take_identifier_declarations() {
        let mut parser = parser_for("Foo x; x = 1; { Bar y; y[0] = x; } Baz z; }");
        parser.parse_statements().unwrap();
        assert!(parser.current.is(TokenKind::RBrace));
        assert!(parser.pending.is_none());
    }

    #[test]
    fn statement_list_lead_with_bad_follower() {
        let mut parser = parser_for("x.foo();");
        let (span, kind) = syntax_error(parser.parse_statements());
        assert_eq!(span, Span::new(1, 2));
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Dot,
                context: "an identifier, `=` or `[`"
            }
        );
    }

    #[test]
    fn single_statement_is_never_a_declaration() {
        let (span, kind) = syntax_error(parser_for("while (b) Foo x;").parse_statement());
        assert_eq!(span, Span::new(1, 15));
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Identifier,
                context: "`=` or `[`"
            }
        );
    }

    #[test]
    fn deep_expression_nesting_is_an_error() {
        let depth = 100_000;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let (span, kind) = syntax_error(parser_for(&source).parse_exp());
        assert_eq!(span, Span::new(1, MAX_NESTING + 1));
        assert_eq!(kind, SyntaxErrorKind::NestingTooDeep { limit: MAX_NESTING });

        let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        let mut parser = parser_for(&shallow);
        parser.parse_exp().unwrap();
        assert!(parser.current.is(TokenKind::Eof));
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn deep_block_nesting_is_an_error() {
        let depth = 100_000;
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        let (_, kind) = syntax_error(parser_for(&source).parse_statement());
        assert_eq!(kind, SyntaxErrorKind::NestingTooDeep { limit: MAX_NESTING });
    }

    #[test]
    fn expressions() {
        for source in [
            "1",
            "a && b < c + d - e * f",
            "!!done",
            "(1 + 2) * 3",
            "new int[n + 1]",
            "new Foo().bar(1, x, this).baz()",
            "a[0].length",
            "list.get(i)[j]",
            "this.size(  )",
            "true && false",
        ] {
            let mut parser = parser_for(source);
            parser.parse_exp().unwrap();
            assert!(parser.current.is(TokenKind::Eof), "leftover input in {:?}", source);
        }
    }

    #[test]
    fn expression_errors() {
        let (_, kind) = syntax_error(parser_for("new 5").parse_exp());
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Num,
                context: "`int` or a class name after `new`"
            }
        );

        let (_, kind) = syntax_error(parser_for("a.5").parse_exp());
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Num,
                context: "a method name or `length`"
            }
        );

        let (span, kind) = syntax_error(parser_for("1 + ;").parse_exp());
        assert_eq!(span, Span::new(1, 5));
        assert_eq!(
            kind,
            SyntaxErrorKind::Unexpected {
                found: TokenKind::Semi,
                context: "an expression"
            }
        );

        let (_, kind) = syntax_error(parser_for("a.f(1,)").parse_exp());
        assert!(matches!(kind, SyntaxErrorKind::Unexpected { .. }));
    }

    #[test]
    fn statements() {
        let source = "{ if (a < b) x = 1; else { y[2] = 3; } while (!done) System.out.println(x); {} }";
        let mut parser = parser_for(source);
        parser.parse_statement().unwrap();
        assert!(parser.current.is(TokenKind::Eof));
    }

    #[test]
    fn if_requires_else() {
        let (_, kind) = syntax_error(parser_for("if (a) x = 1; y = 2;").parse_statement());
        assert_eq!(
            kind,
            SyntaxErrorKind::Expected {
                expected: TokenKind::Else,
                found: TokenKind::Identifier
            }
        );
    }

    #[test]
    fn println_path_is_fixed() {
        let (_, kind) = syntax_error(parser_for("System.err.println(1);").parse_statement());
        assert_eq!(
            kind,
            SyntaxErrorKind::Expected {
                expected: TokenKind::Out,
                found: TokenKind::Identifier
            }
        );
    }

    #[test_log::test]
    fn minimal_program() {
        let source = "class Main{public static void main(String[] a){System.out.println(1);}}";
        parser_for(source).parse().unwrap();
    }

    #[test_log::test]
    fn class_declarations() {
        let source = "
            class Main { public static void main(String[] args) { } }
            class A { int x; int[] xs; boolean b; B other; }
            class B extends A {
                public int get(int i, B next, int[] all) {
                    A a;
                    int y;
                    a = new A();
                    y = all[i] + x;
                    return y;
                }
                public boolean none() { return true; }
            }
        ";
        parser_for(source).parse().unwrap();
    }

    #[test]
    fn trailing_tokens_after_program() {
        let source = "class Main{public static void main(String[] a){}} x";
        let (span, kind) = syntax_error(parser_for(source).parse());
        assert_eq!(span, Span::new(1, 51));
        assert_eq!(
            kind,
            SyntaxErrorKind::Expected {
                expected: TokenKind::Eof,
                found: TokenKind::Identifier
            }
        );
    }

    #[test]
    fn lexical_errors_pass_through() {
        let source = "class Main{public static void main(String[] a){x = 1 & 2;}}";
        let err = parser_for(source).parse().unwrap_err();
        assert!(err.is_lexical());
    }
}
