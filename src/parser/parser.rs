//! Recursive-descent parser implementing the precedence chain from
//! spec §4.1: implication (right-assoc, weakest) < disjunction <
//! conjunction < negation < quantifier/atom (strongest).

use crate::formula::Formula;
use crate::term::Term;

use super::error::{ParseError, ParseResult};
use super::lexer::Lexer;
use super::token::{TKind, Token};

pub struct Parser {
    tokens: Vec<Token>,
    idx: usize,
}

/// Parses a complete formula string. Returns a [`ParseError`] on malformed
/// atoms, unclosed groups, or unknown operator characters; an unrecognized
/// bare identifier is leniently accepted as a nullary predicate rather than
/// rejected (preserving the source's fallback behavior).
pub fn parse_formula(input: &str) -> ParseResult<Formula> {
    let tokens = Lexer::new(input).tokenize()?;
    let mut parser = Parser { tokens, idx: 0 };
    let formula = parser.parse_implication()?;
    parser.expect_eof()?;
    Ok(formula)
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.idx]
    }

    fn bump(&mut self) -> Token {
        let tok = self.tokens[self.idx].clone();
        if self.idx + 1 < self.tokens.len() {
            self.idx += 1;
        }
        tok
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        if self.peek().kind == TKind::Eof {
            Ok(())
        } else {
            let tok = self.peek().clone();
            Err(ParseError::new(
                "unexpected trailing input",
                tok.from,
                tok.to,
                &format!("{:?}", tok.kind),
            ))
        }
    }

    fn expect(&mut self, kind: &TKind, what: &str) -> ParseResult<Token> {
        if &self.peek().kind == kind {
            Ok(self.bump())
        } else {
            let tok = self.peek().clone();
            Err(ParseError::new(
                format!("expected {what}"),
                tok.from,
                tok.to,
                &format!("{:?}", tok.kind),
            ))
        }
    }

    fn expect_ident(&mut self, what: &str) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TKind::Ident(name) => {
                self.bump();
                Ok(name)
            }
            _ => {
                let tok = self.peek().clone();
                Err(ParseError::new(
                    format!("expected {what}"),
                    tok.from,
                    tok.to,
                    &format!("{:?}", tok.kind),
                ))
            }
        }
    }

    /// `implication := disjunction ( '→' implication )?`, right-associative:
    /// splits on the leftmost arrow, reparsing the remainder as one
    /// expression.
    fn parse_implication(&mut self) -> ParseResult<Formula> {
        let lhs = self.parse_disjunction()?;
        if self.peek().kind == TKind::Arrow {
            self.bump();
            let rhs = self.parse_implication()?;
            Ok(Formula::implies(lhs, rhs))
        } else {
            Ok(lhs)
        }
    }

    /// `disjunction := conjunction ( '∨' conjunction )*`, collapses same-level
    /// occurrences into a single n-ary node.
    fn parse_disjunction(&mut self) -> ParseResult<Formula> {
        let mut parts = vec![self.parse_conjunction()?];
        while self.peek().kind == TKind::Or {
            self.bump();
            parts.push(self.parse_conjunction()?);
        }
        Ok(if parts.len() == 1 { parts.pop().unwrap() } else { Formula::or(parts) })
    }

    /// `conjunction := negation ( '∧' negation )*`
    fn parse_conjunction(&mut self) -> ParseResult<Formula> {
        let mut parts = vec![self.parse_negation()?];
        while self.peek().kind == TKind::And {
            self.bump();
            parts.push(self.parse_negation()?);
        }
        Ok(if parts.len() == 1 { parts.pop().unwrap() } else { Formula::and(parts) })
    }

    /// `negation := '¬' negation | primary`
    fn parse_negation(&mut self) -> ParseResult<Formula> {
        if self.peek().kind == TKind::Not {
            self.bump();
            Ok(Formula::not(self.parse_negation()?))
        } else {
            self.parse_primary()
        }
    }

    /// `primary := quantifier | '(' implication ')' | atom`
    fn parse_primary(&mut self) -> ParseResult<Formula> {
        match self.peek().kind.clone() {
            TKind::Forall => {
                self.bump();
                let var = self.expect_ident("a bound variable name")?;
                self.expect(&TKind::LParen, "'(' opening the quantifier body")?;
                let body = self.parse_implication()?;
                self.expect(&TKind::RParen, "')' closing the quantifier body")?;
                Ok(Formula::forall(var, body))
            }
            TKind::Exists => {
                self.bump();
                let var = self.expect_ident("a bound variable name")?;
                self.expect(&TKind::LParen, "'(' opening the quantifier body")?;
                let body = self.parse_implication()?;
                self.expect(&TKind::RParen, "')' closing the quantifier body")?;
                Ok(Formula::exists(var, body))
            }
            TKind::LParen => {
                self.bump();
                let inner = self.parse_implication()?;
                self.expect(&TKind::RParen, "')' closing the group")?;
                Ok(inner)
            }
            TKind::Ident(name) => {
                self.bump();
                if self.peek().kind == TKind::LParen {
                    self.bump();
                    let args = self.parse_args(&name)?;
                    self.expect(&TKind::RParen, "')' closing the atom")?;
                    Ok(Formula::atom(name, args))
                } else {
                    // Leniency: a bare identifier is a nullary predicate.
                    Ok(Formula::atom(name, vec![]))
                }
            }
            _ => {
                let tok = self.peek().clone();
                Err(ParseError::new(
                    "expected a formula",
                    tok.from,
                    tok.to,
                    &format!("{:?}", tok.kind),
                ))
            }
        }
    }

    /// Parses a comma-separated, possibly-empty argument list of terms.
    fn parse_args(&mut self, pred: &str) -> ParseResult<Vec<Term>> {
        if pred.is_empty() {
            let tok = self.peek().clone();
            return Err(ParseError::new("empty predicate name", tok.from, tok.from, ""));
        }

        if self.peek().kind == TKind::RParen {
            return Ok(vec![]);
        }

        let mut args = vec![self.parse_term()?];
        while self.peek().kind == TKind::Comma {
            self.bump();
            args.push(self.parse_term()?);
        }
        Ok(args)
    }

    fn parse_term(&mut self) -> ParseResult<Term> {
        let name = self.expect_ident("a term")?;
        Ok(Term::from_identifier(&name))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_socrates_premise() {
        let f = parse_formula("∀x (Human(x) → Mortal(x))").unwrap();
        assert_eq!(
            f,
            Formula::forall(
                "x",
                Formula::implies(
                    Formula::atom("Human", vec![Term::var("x")]),
                    Formula::atom("Mortal", vec![Term::var("x")]),
                )
            )
        );
    }

    #[test]
    fn implication_is_right_associative() {
        let f = parse_formula("P(A)→Q(A)→R(A)").unwrap();
        assert_eq!(
            f,
            Formula::implies(
                Formula::atom("P", vec![Term::con("A")]),
                Formula::implies(
                    Formula::atom("Q", vec![Term::con("A")]),
                    Formula::atom("R", vec![Term::con("A")]),
                )
            )
        );
    }

    #[test]
    fn disjunction_collapses_to_n_ary() {
        let f = parse_formula("P(A)∨Q(A)∨R(A)").unwrap();
        assert_eq!(
            f,
            Formula::or(vec![
                Formula::atom("P", vec![Term::con("A")]),
                Formula::atom("Q", vec![Term::con("A")]),
                Formula::atom("R", vec![Term::con("A")]),
            ])
        );
    }

    #[test]
    fn outer_parens_are_stripped() {
        let f = parse_formula("(P(A))").unwrap();
        assert_eq!(f, Formula::atom("P", vec![Term::con("A")]));
    }

    #[test]
    fn bare_identifier_is_nullary_predicate() {
        let f = parse_formula("P").unwrap();
        assert_eq!(f, Formula::atom("P", vec![]));
    }

    #[test]
    fn rejects_unclosed_atom() {
        assert!(parse_formula("P(x").is_err());
    }

    #[test]
    fn multiple_negations_nest() {
        let f = parse_formula("¬¬P(A)").unwrap();
        assert_eq!(f, Formula::not(Formula::not(Formula::atom("P", vec![Term::con("A")]))));
    }
}
