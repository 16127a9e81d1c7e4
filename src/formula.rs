//! The formula syntax tree, per the concrete textbook-style grammar.

use std::fmt::{self, Display};

use crate::term::Term;

/// A first-order formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// A predicate application. Zero-arg atoms are permitted.
    Atom(String, Vec<Term>),

    Negation(Box<Formula>),

    /// n-ary, order preserved for determinism (semantically immaterial).
    Conjunction(Vec<Formula>),

    /// n-ary, order preserved for determinism.
    Disjunction(Vec<Formula>),

    /// Right-associative at parse time.
    Implication(Box<Formula>, Box<Formula>),

    Universal(String, Box<Formula>),

    Existential(String, Box<Formula>),
}

impl Formula {
    pub fn atom<S: Into<String>>(name: S, args: Vec<Term>) -> Formula {
        Formula::Atom(name.into(), args)
    }

    pub fn not(f: Formula) -> Formula {
        Formula::Negation(Box::new(f))
    }

    pub fn and(children: Vec<Formula>) -> Formula {
        Formula::Conjunction(children)
    }

    pub fn or(children: Vec<Formula>) -> Formula {
        Formula::Disjunction(children)
    }

    pub fn implies(a: Formula, b: Formula) -> Formula {
        Formula::Implication(Box::new(a), Box::new(b))
    }

    pub fn forall<S: Into<String>>(var: S, body: Formula) -> Formula {
        Formula::Universal(var.into(), Box::new(body))
    }

    pub fn exists<S: Into<String>>(var: S, body: Formula) -> Formula {
        Formula::Existential(var.into(), Box::new(body))
    }

    /// Substitutes every free occurrence of `var` inside atom arguments with
    /// `replacement`. Does not descend into a quantifier that rebinds the
    /// same variable name (capture-free only under the precondition that
    /// bound names are not reused, see [`crate::normalize::standardize`]).
    pub fn substitute(&self, var: &str, replacement: &Term) -> Formula {
        match self {
            Formula::Atom(name, args) => Formula::Atom(
                name.clone(),
                args.iter().map(|t| t.substitute(var, replacement)).collect(),
            ),
            Formula::Negation(inner) => Formula::not(inner.substitute(var, replacement)),
            Formula::Conjunction(cs) => {
                Formula::and(cs.iter().map(|c| c.substitute(var, replacement)).collect())
            }
            Formula::Disjunction(cs) => {
                Formula::or(cs.iter().map(|c| c.substitute(var, replacement)).collect())
            }
            Formula::Implication(a, b) => {
                Formula::implies(a.substitute(var, replacement), b.substitute(var, replacement))
            }
            Formula::Universal(v, body) => {
                if v == var {
                    Formula::forall(v.clone(), (**body).clone())
                } else {
                    Formula::forall(v.clone(), body.substitute(var, replacement))
                }
            }
            Formula::Existential(v, body) => {
                if v == var {
                    Formula::exists(v.clone(), (**body).clone())
                } else {
                    Formula::exists(v.clone(), body.substitute(var, replacement))
                }
            }
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name, args) => {
                write!(f, "{name}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Formula::Negation(inner) => write!(f, "¬{inner}"),
            Formula::Conjunction(cs) => {
                write!(f, "(")?;
                for (i, c) in cs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "∧")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
            Formula::Disjunction(cs) => {
                write!(f, "(")?;
                for (i, c) in cs.iter().enumerate() {
                    if i > 0 {
                        write!(f, "∨")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
            Formula::Implication(a, b) => write!(f, "({a}→{b})"),
            Formula::Universal(v, body) => write!(f, "∀{v}({body})"),
            Formula::Existential(v, body) => write!(f, "∃{v}({body})"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_round_trips_shape() {
        let f = Formula::forall(
            "x",
            Formula::implies(
                Formula::atom("Human", vec![Term::var("x")]),
                Formula::atom("Mortal", vec![Term::var("x")]),
            ),
        );
        assert_eq!(f.to_string(), "∀x((Human(x)→Mortal(x)))");
    }

    #[test]
    fn substitute_skips_rebinding_quantifier() {
        let f = Formula::forall("x", Formula::atom("P", vec![Term::var("x")]));
        let out = f.substitute("x", &Term::con("A"));
        assert_eq!(out, f);
    }
}
