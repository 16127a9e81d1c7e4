//! First-order terms: variables, constants, and function terms (the latter
//! only ever arise from Skolemization, the parser never produces one).

use std::fmt::{self, Display};

/// A first-order term.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A universally-quantified placeholder, lowercase-initial by convention.
    Variable(String),

    /// A ground atom, uppercase-initial by convention.
    Constant(String),

    /// A compound term: a function symbol applied to an ordered argument
    /// list. In this system these only ever name Skolem functions.
    FunctionTerm(String, Vec<Term>),
}

impl Term {
    /// Creates a variable term.
    pub fn var<S: Into<String>>(name: S) -> Term {
        Term::Variable(name.into())
    }

    /// Creates a constant term.
    pub fn con<S: Into<String>>(name: S) -> Term {
        Term::Constant(name.into())
    }

    /// Creates a function term.
    pub fn fun<S: Into<String>>(name: S, args: Vec<Term>) -> Term {
        Term::FunctionTerm(name.into(), args)
    }

    /// Classifies a freshly-parsed identifier into a `Variable` or
    /// `Constant` based on the case of its first character, per the
    /// concrete syntax's term classification rule.
    pub fn from_identifier(ident: &str) -> Term {
        match ident.chars().next() {
            Some(c) if c.is_uppercase() => Term::Constant(ident.to_string()),
            _ => Term::Variable(ident.to_string()),
        }
    }

    /// True if this term is (syntactically) a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The variable name, if this term is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Substitutes every free occurrence of `var` with `replacement`,
    /// recursing into function-term arguments. Does not descend into
    /// binders, terms never contain binders, so this is always total.
    pub fn substitute(&self, var: &str, replacement: &Term) -> Term {
        match self {
            Term::Variable(name) if name == var => replacement.clone(),
            Term::Variable(name) => Term::Variable(name.clone()),
            Term::Constant(name) => Term::Constant(name.clone()),
            Term::FunctionTerm(name, args) => Term::FunctionTerm(
                name.clone(),
                args.iter().map(|a| a.substitute(var, replacement)).collect(),
            ),
        }
    }

    /// Collects every variable name occurring in this term.
    pub fn collect_variables(&self, out: &mut Vec<String>) {
        match self {
            Term::Variable(name) => out.push(name.clone()),
            Term::Constant(_) => {}
            Term::FunctionTerm(_, args) => {
                for a in args {
                    a.collect_variables(out);
                }
            }
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) | Term::Constant(name) => write!(f, "{name}"),
            Term::FunctionTerm(name, args) => {
                write!(f, "{name}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
