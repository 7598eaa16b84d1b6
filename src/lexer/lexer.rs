use crate::{
    lexer::{
        error::{Error, Result},
        token::{KEYWORDS, SYMBOLS, Token, TokenKind},
    },
    span::{Position, Span, Spanned},
};

#[derive(Debug)]
pub struct Lexer {
    buffer: String,
    index: usize,
    position: Position,
}

impl Lexer {
    pub fn new(buffer: &str) -> Self {
        Self {
            buffer: buffer.to_string(),
            index: 0,
            position: Position { line: 1, column: 1 },
        }
    }

    pub fn next_token(&mut self) -> Result<Spanned<Token>> {
        self.advance(self.slice_buffer_while(|c| c.is_whitespace()).len());

        if self.remaining_buffer().is_empty() {
            return Ok(Spanned::new(
                Token::eof(),
                Span::new(self.position, self.position),
            ));
        }

        // "()" before "=", so the unit literal is one token and a lone
        // '(' falls through to the error below.
        for (symbol, kind) in SYMBOLS {
            if self.remaining_buffer().starts_with(symbol) {
                return Ok(Spanned::new(
                    Token::new(*kind, *symbol),
                    self.advance_with_span(symbol.len()),
                ));
            }
        }

        let current_char = self.current_char().unwrap();

        if current_char.is_ascii_lowercase() || current_char == '_' {
            // Scan the maximal identifier first, then check the keyword
            // table: "falsetrue" is one identifier, not two keywords.
            let slice =
                self.slice_buffer_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '\'');
            let kind = KEYWORDS
                .iter()
                .find(|(keyword, _)| slice == *keyword)
                .map_or(TokenKind::LowercaseIdent, |(_, kind)| *kind);
            let token = Token::new(kind, slice);
            let len = token.lexeme.len();
            return Ok(Spanned::new(token, self.advance_with_span(len)));
        }

        Err(Error::UnrecognizedCharacter(
            current_char,
            Span::new(self.position, self.position),
        ))
    }

    fn current_char(&self) -> Option<char> {
        self.remaining_buffer().chars().next()
    }

    fn remaining_buffer(&self) -> &str {
        &self.buffer[self.index..]
    }

    fn slice_buffer_while<P: Fn(char) -> bool>(&self, predicate: P) -> &str {
        let buffer = self.remaining_buffer();
        if let Some(pos) = buffer.find(|c| !predicate(c)) {
            &buffer[..pos]
        } else {
            buffer
        }
    }

    // `n` is a byte length, as returned by the slice helpers.
    fn advance(&mut self, n: usize) {
        let end = self.index + n;
        while self.index < end {
            if let Some(c) = self.current_char() {
                if c == '\n' {
                    self.position.line += 1;
                    self.position.column = 1;
                } else {
                    self.position.column += 1;
                }
                self.index += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn advance_with_span(&mut self, n: usize) -> Span {
        let start = self.position;
        self.advance(n);
        let mut end = self.position;
        end.column -= 1;
        Span::new(start, end)
    }
}
