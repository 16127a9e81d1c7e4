//! Lexical analyzer: turns a whitespace-stripped formula string into a
//! stream of [`Token`]s.

use super::coord::InputCoord;
use super::error::{ParseError, ParseResult};
use super::token::{TKind, Token};

/// True for characters the concrete syntax accepts inside an identifier,
/// other than the first character.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_cyrillic(c)
}

/// True for characters an identifier may start with.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || is_cyrillic(c)
}

fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF)
}

pub struct Lexer {
    chars: Vec<char>,
    idx: usize,
    pos: InputCoord,
}

impl Lexer {
    /// Creates a lexer over `input`, stripping all whitespace up front as
    /// the concrete syntax requires.
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
        Self { chars, idx: 0, pos: InputCoord::start() }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.idx).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.idx += 1;
        self.pos.advance();
        Some(c)
    }

    /// Tokenizes the whole input, ending with a single [`TKind::Eof`] token.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut out = Vec::new();
        loop {
            let tok = self.next_token()?;
            let done = tok.kind == TKind::Eof;
            out.push(tok);
            if done {
                return Ok(out);
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        let from = self.pos;
        let c = match self.peek() {
            None => return Ok(Token { kind: TKind::Eof, from, to: from }),
            Some(c) => c,
        };

        let kind = match c {
            '∀' => { self.bump(); TKind::Forall }
            '∃' => { self.bump(); TKind::Exists }
            '¬' => { self.bump(); TKind::Not }
            '∧' => { self.bump(); TKind::And }
            '∨' => { self.bump(); TKind::Or }
            '→' => { self.bump(); TKind::Arrow }
            '(' => { self.bump(); TKind::LParen }
            ')' => { self.bump(); TKind::RParen }
            ',' => { self.bump(); TKind::Comma }
            c if is_ident_start(c) => {
                let mut s = String::new();
                s.push(self.bump().unwrap());
                while let Some(c) = self.peek() {
                    if is_ident_continue(c) {
                        s.push(self.bump().unwrap());
                    } else {
                        break;
                    }
                }
                TKind::Ident(s)
            }
            other => {
                let to = self.pos;
                return Err(ParseError::new(
                    "unknown operator character",
                    from,
                    to,
                    &other.to_string(),
                ));
            }
        };

        let to = self.pos;
        Ok(Token { kind, from, to })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_whitespace_and_tokenizes_glyphs() {
        let toks = Lexer::new("∀x (Human(x) → Mortal(x))").tokenize().unwrap();
        let kinds: Vec<_> = toks.into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TKind::Forall,
                TKind::Ident("x".into()),
                TKind::LParen,
                TKind::Ident("Human".into()),
                TKind::LParen,
                TKind::Ident("x".into()),
                TKind::RParen,
                TKind::Arrow,
                TKind::Ident("Mortal".into()),
                TKind::LParen,
                TKind::Ident("x".into()),
                TKind::RParen,
                TKind::RParen,
                TKind::Eof,
            ]
        );
    }

    #[test]
    fn accepts_cyrillic_identifiers() {
        let toks = Lexer::new("Человек(х)").tokenize().unwrap();
        assert_eq!(toks[0].kind, TKind::Ident("Человек".into()));
    }

    #[test]
    fn rejects_unknown_character() {
        assert!(Lexer::new("P(x) % Q(y)").tokenize().is_err());
    }
}
