//! Pass 2: negation normal form (spec §4.3).
//!
//! Pushes negations to the leaves via De Morgan and quantifier duality.
//! Requires its input to already be free of `Implication` nodes (run after
//! [`crate::normalize::implication::eliminate_implications`]).

use crate::formula::Formula;

/// Moves negations inward so that `Negation` is permitted only directly over
/// an `Atom`.
pub fn move_nots_inwards(f: &Formula) -> Formula {
    positive(f)
}

/// Recurses assuming `f` itself is not negated.
fn positive(f: &Formula) -> Formula {
    match f {
        Formula::Atom(name, args) => Formula::Atom(name.clone(), args.clone()),
        Formula::Negation(inner) => negative(inner),
        Formula::Conjunction(cs) => Formula::and(cs.iter().map(positive).collect()),
        Formula::Disjunction(cs) => Formula::or(cs.iter().map(positive).collect()),
        Formula::Implication(_, _) => {
            unreachable!("move_nots_inwards requires implication-free input")
        }
        Formula::Universal(v, body) => Formula::forall(v.clone(), positive(body)),
        Formula::Existential(v, body) => Formula::exists(v.clone(), positive(body)),
    }
}

/// Recurses as if `f` were negated: `¬¬A ≡ A`, `¬(A∧B) ≡ ¬A∨¬B`,
/// `¬(A∨B) ≡ ¬A∧¬B`, `¬∀xP ≡ ∃x¬P`, `¬∃xP ≡ ∀x¬P`.
fn negative(f: &Formula) -> Formula {
    match f {
        Formula::Atom(name, args) => Formula::not(Formula::Atom(name.clone(), args.clone())),
        Formula::Negation(inner) => positive(inner),
        Formula::Conjunction(cs) => Formula::or(cs.iter().map(negative).collect()),
        Formula::Disjunction(cs) => Formula::and(cs.iter().map(negative).collect()),
        Formula::Implication(_, _) => {
            unreachable!("move_nots_inwards requires implication-free input")
        }
        Formula::Universal(v, body) => Formula::exists(v.clone(), negative(body)),
        Formula::Existential(v, body) => Formula::forall(v.clone(), negative(body)),
    }
}

/// True if `f` contains a `Negation` whose child is a connective or
/// quantifier, a violation of NNF. Used by tests and as a debug assertion.
pub fn is_nnf(f: &Formula) -> bool {
    match f {
        Formula::Atom(_, _) => true,
        Formula::Negation(inner) => matches!(**inner, Formula::Atom(_, _)),
        Formula::Conjunction(cs) | Formula::Disjunction(cs) => cs.iter().all(is_nnf),
        Formula::Implication(_, _) => false,
        Formula::Universal(_, body) | Formula::Existential(_, body) => is_nnf(body),
    }
}
