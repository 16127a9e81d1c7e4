//! Variable standardization apart, an addition over the distilled spec,
//! grounded on spec §9's re-architecture guidance ("before step §4.4, rename
//! all bound variables to globally-unique fresh names within one `solve`
//! invocation to eliminate capture hazards").
//!
//! Runs after NNF and before prenex extraction. Renames every bound
//! variable to a name fresh within the current [`super::NormalizeContext`],
//! so the prenex "pull" in the following pass can never capture a variable
//! across sibling subformulas.

use crate::formula::Formula;
use crate::term::Term;

use super::NormalizeContext;

pub fn standardize_apart(f: &Formula, ctx: &mut NormalizeContext) -> Formula {
    match f {
        Formula::Atom(name, args) => Formula::Atom(name.clone(), args.clone()),
        Formula::Negation(inner) => Formula::not(standardize_apart(inner, ctx)),
        Formula::Conjunction(cs) => {
            Formula::and(cs.iter().map(|c| standardize_apart(c, ctx)).collect())
        }
        Formula::Disjunction(cs) => {
            Formula::or(cs.iter().map(|c| standardize_apart(c, ctx)).collect())
        }
        Formula::Implication(a, b) => {
            Formula::implies(standardize_apart(a, ctx), standardize_apart(b, ctx))
        }
        Formula::Universal(v, body) => {
            let fresh = ctx.fresh_variable();
            let renamed = body.substitute(v, &Term::Variable(fresh.clone()));
            Formula::forall(fresh, standardize_apart(&renamed, ctx))
        }
        Formula::Existential(v, body) => {
            let fresh = ctx.fresh_variable();
            let renamed = body.substitute(v, &Term::Variable(fresh.clone()));
            Formula::exists(fresh, standardize_apart(&renamed, ctx))
        }
    }
}
