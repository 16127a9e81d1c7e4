//! Pass 1: implication elimination (spec §4.2).
//!
//! Rewrites every `Implication(A, B)` into `Disjunction([Negation(A'), B'])`
//! where `A'`, `B'` are the recursively transformed subtrees. Pure,
//! idempotent; the result contains no `Implication` nodes.

use crate::formula::Formula;

pub fn eliminate_implications(f: &Formula) -> Formula {
    match f {
        Formula::Atom(name, args) => Formula::Atom(name.clone(), args.clone()),
        Formula::Negation(inner) => Formula::not(eliminate_implications(inner)),
        Formula::Conjunction(cs) => Formula::and(cs.iter().map(eliminate_implications).collect()),
        Formula::Disjunction(cs) => Formula::or(cs.iter().map(eliminate_implications).collect()),
        Formula::Implication(a, b) => {
            let a = eliminate_implications(a);
            let b = eliminate_implications(b);
            Formula::or(vec![Formula::not(a), b])
        }
        Formula::Universal(v, body) => Formula::forall(v.clone(), eliminate_implications(body)),
        Formula::Existential(v, body) => Formula::exists(v.clone(), eliminate_implications(body)),
    }
}
