//! Pass 3: prenex extraction (spec §4.4).
//!
//! Lifts all quantifiers to the front in one pass. Requires NNF input (no
//! `Implication`, no `Negation` over a compound/quantified child), and,
//! thanks to [`super::standardize::standardize_apart`] having already run,
//! every bound name in the formula is already globally distinct, so the
//! "pull" below never captures a variable.

use crate::formula::Formula;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantKind {
    Forall,
    Exists,
}

/// Lifts all quantifiers out of `f`, returning the quantifier-free matrix
/// plus the list of `(kind, var)` pairs collected during the pull, in
/// collection order (innermost-first).
fn pull(f: &Formula) -> (Formula, Vec<(QuantKind, String)>) {
    match f {
        Formula::Atom(_, _) | Formula::Negation(_) => (f.clone(), vec![]),
        Formula::Conjunction(cs) => {
            let (bodies, quants) = pull_children(cs);
            (Formula::and(bodies), quants)
        }
        Formula::Disjunction(cs) => {
            let (bodies, quants) = pull_children(cs);
            (Formula::or(bodies), quants)
        }
        Formula::Implication(_, _) => unreachable!("prenex requires implication-free input"),
        Formula::Universal(v, body) => {
            let (matrix, mut quants) = pull(body);
            quants.push((QuantKind::Forall, v.clone()));
            (matrix, quants)
        }
        Formula::Existential(v, body) => {
            let (matrix, mut quants) = pull(body);
            quants.push((QuantKind::Exists, v.clone()));
            (matrix, quants)
        }
    }
}

/// Pulls quantifiers out of each child of an n-ary `Conjunction`/`Disjunction`,
/// keeping the matrix bodies in their original order but combining the
/// per-child quantifier lists in reverse child order. Each child's own list
/// is already innermost-first for that child's chain; since wrapping treats
/// the last-collected quantifier as outermost, reversing the per-child order
/// here is what keeps the first child's quantifiers outermost in the result,
/// matching how the children read left to right.
fn pull_children(cs: &[Formula]) -> (Vec<Formula>, Vec<(QuantKind, String)>) {
    let mut bodies = Vec::with_capacity(cs.len());
    let mut per_child = Vec::with_capacity(cs.len());
    for c in cs {
        let (body, qs) = pull(c);
        bodies.push(body);
        per_child.push(qs);
    }

    let mut quants = Vec::new();
    for qs in per_child.into_iter().rev() {
        quants.extend(qs);
    }
    (bodies, quants)
}

/// Produces the prenex form of an NNF formula: all quantifiers at the root,
/// wrapped around the matrix in reverse collection order (innermost-first
/// becomes outermost-last).
pub fn prenex_normal_form(f: &Formula) -> Formula {
    let (matrix, quants) = pull(f);
    let mut result = matrix;
    for (kind, var) in quants {
        result = match kind {
            QuantKind::Forall => Formula::forall(var, result),
            QuantKind::Exists => Formula::exists(var, result),
        };
    }
    result
}

/// True if every quantifier in `f` appears at the root and the remaining
/// matrix is quantifier-free.
pub fn is_prenex(f: &Formula) -> bool {
    fn quantifier_free(f: &Formula) -> bool {
        match f {
            Formula::Atom(_, _) => true,
            Formula::Negation(inner) => quantifier_free(inner),
            Formula::Conjunction(cs) | Formula::Disjunction(cs) => cs.iter().all(quantifier_free),
            Formula::Implication(_, _) | Formula::Universal(_, _) | Formula::Existential(_, _) => false,
        }
    }

    match f {
        Formula::Universal(_, body) | Formula::Existential(_, body) => is_prenex(body),
        other => quantifier_free(other),
    }
}
