//! Pass 4: Skolemization (spec §4.5).
//!
//! Walks a prenex-NNF formula with a running environment, the ordered list
//! of universally-quantified variable names currently in scope, and
//! eliminates every `Existential` by substituting a fresh Skolem symbol.

use crate::formula::Formula;
use crate::term::Term;

use super::NormalizeContext;

/// Skolemizes `f`, using `ctx` for fresh Skolem symbol names. `ctx` must be
/// unique to the current `solve` invocation so that premises and the
/// negated goal never collide on a Skolem symbol (spec §4.5/§9).
pub fn skolemize(f: &Formula, ctx: &mut NormalizeContext) -> Formula {
    walk(f, &mut Vec::new(), ctx)
}

fn walk(f: &Formula, env: &mut Vec<String>, ctx: &mut NormalizeContext) -> Formula {
    match f {
        Formula::Atom(name, args) => Formula::Atom(name.clone(), args.clone()),
        Formula::Negation(inner) => Formula::not(walk(inner, env, ctx)),
        Formula::Conjunction(cs) => Formula::and(cs.iter().map(|c| walk(c, env, ctx)).collect()),
        Formula::Disjunction(cs) => Formula::or(cs.iter().map(|c| walk(c, env, ctx)).collect()),
        Formula::Implication(_, _) => unreachable!("skolemize requires implication-free input"),
        Formula::Universal(v, body) => {
            env.push(v.clone());
            let result = walk(body, env, ctx);
            env.pop();
            Formula::forall(v.clone(), result)
        }
        Formula::Existential(v, body) => {
            let symbol = ctx.fresh_skolem();
            let replacement = if env.is_empty() {
                Term::Constant(symbol)
            } else {
                Term::FunctionTerm(symbol, env.iter().map(|e| Term::Variable(e.clone())).collect())
            };
            let substituted = body.substitute(v, &replacement);
            walk(&substituted, env, ctx)
        }
    }
}

/// True if no `Existential` remains anywhere in `f`.
pub fn is_existential_free(f: &Formula) -> bool {
    match f {
        Formula::Atom(_, _) => true,
        Formula::Negation(inner) => is_existential_free(inner),
        Formula::Conjunction(cs) | Formula::Disjunction(cs) => cs.iter().all(is_existential_free),
        Formula::Implication(_, _) => true,
        Formula::Universal(_, body) => is_existential_free(body),
        Formula::Existential(_, _) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn existential_without_enclosing_universal_becomes_constant() {
        let mut ctx = NormalizeContext::new();
        let f = Formula::exists("x", Formula::atom("Human", vec![Term::var("x")]));
        let out = skolemize(&f, &mut ctx);
        assert_eq!(out, Formula::atom("Human", vec![Term::Constant("sk1".into())]));
        assert!(is_existential_free(&out));
    }

    #[test]
    fn existential_under_universal_becomes_function_of_the_universals() {
        let mut ctx = NormalizeContext::new();
        let f = Formula::forall(
            "x",
            Formula::exists("y", Formula::atom("Loves", vec![Term::var("x"), Term::var("y")])),
        );
        let out = skolemize(&f, &mut ctx);
        assert_eq!(
            out,
            Formula::forall(
                "x",
                Formula::atom(
                    "Loves",
                    vec![Term::var("x"), Term::FunctionTerm("sk1".into(), vec![Term::var("x")])]
                )
            )
        );
    }

    #[test]
    fn successive_existentials_get_distinct_symbols() {
        let mut ctx = NormalizeContext::new();
        let f = Formula::and(vec![
            Formula::exists("x", Formula::atom("P", vec![Term::var("x")])),
            Formula::exists("y", Formula::atom("Q", vec![Term::var("y")])),
        ]);
        let out = skolemize(&f, &mut ctx);
        assert_eq!(
            out,
            Formula::and(vec![
                Formula::atom("P", vec![Term::Constant("sk1".into())]),
                Formula::atom("Q", vec![Term::Constant("sk2".into())]),
            ])
        );
    }
}
