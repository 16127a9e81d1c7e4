//! Pass 5: CNF distribution and clause flattening (spec §4.6).
//!
//! Input must be NNF, prenex (or with only outer `Universal`s), and free of
//! `Existential`. Drops the implicit outer `Universal` wrappers, distributes
//! `Disjunction` over `Conjunction` to fixpoint, then flattens into a flat
//! list of [`Clause`]s.

use thiserror::Error;

use crate::clause::{Clause, Literal};
use crate::formula::Formula;

/// The CNF distributor's structural invariant was violated: an `And` ended
/// up nested inside an `Or` after distribution. This indicates a bug in the
/// distributor itself, not a user-facing condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("CNF structural invariant violated: a conjunction is nested inside a disjunction")]
pub struct CnfStructureError;

/// Strips the outer `Universal` quantifiers (implicit once in clausal form)
/// and converts the remaining quantifier-free, Skolemized matrix into a flat
/// list of clauses.
pub fn to_cnf(f: &Formula) -> Result<Vec<Clause>, CnfStructureError> {
    let matrix = strip_universals(f);
    let distributed = distribute_to_fixpoint(matrix);
    flatten_clauses(&distributed)
}

fn strip_universals(f: &Formula) -> Formula {
    match f {
        Formula::Universal(_, body) => strip_universals(body),
        other => other.clone(),
    }
}

fn is_atom(f: &Formula) -> bool {
    match f {
        Formula::Atom(_, _) => true,
        Formula::Negation(inner) => is_atom(inner),
        _ => false,
    }
}

fn is_clause(f: &Formula) -> bool {
    match f {
        Formula::Disjunction(cs) => cs.iter().all(is_clause),
        other => is_atom(other),
    }
}

fn is_cnf(f: &Formula) -> bool {
    match f {
        Formula::Conjunction(cs) => cs.iter().all(is_cnf),
        other => is_clause(other),
    }
}

/// Attempts to distribute `rest` over `b`: if `b` is `And(c1..ck)`, returns
/// `And([distribute(Or([ci] ++ rest)) for ci in c1..ck])`, with `rest`'s
/// elements spliced in as direct children of the new disjunction (not
/// nested inside a wrapper `Or`); `None` if `b` is not a conjunction.
fn distribute_base(rest: &[Formula], b: &Formula) -> Option<Formula> {
    match b {
        Formula::Conjunction(parts) => {
            let new_children = parts
                .iter()
                .map(|ci| {
                    let mut combined = vec![ci.clone()];
                    combined.extend(rest.iter().cloned());
                    distribute_to_fixpoint(Formula::or(combined))
                })
                .collect();
            Some(Formula::and(new_children))
        }
        _ => None,
    }
}

/// One level of distribution at the root of `f`.
fn distribute(f: Formula) -> Formula {
    match f {
        Formula::Disjunction(cs) if cs.len() >= 2 => {
            // Try each child in turn as the conjunction to distribute over;
            // the remaining children form `rest`.
            for (i, b) in cs.iter().enumerate() {
                let rest: Vec<Formula> =
                    cs.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, c)| c.clone()).collect();
                if let Some(e) = distribute_base(&rest, b) {
                    return e;
                }
            }
            Formula::or(cs)
        }
        e => e,
    }
}

/// Applies [`distribute`] recursively until the whole tree is in CNF.
fn recursive_distribute(f: Formula) -> Formula {
    match distribute(f) {
        Formula::Negation(n) => Formula::not(recursive_distribute(*n)),
        Formula::Conjunction(cs) => Formula::and(cs.into_iter().map(recursive_distribute).collect()),
        Formula::Disjunction(cs) => Formula::or(cs.into_iter().map(recursive_distribute).collect()),
        e => e,
    }
}

fn distribute_to_fixpoint(f: Formula) -> Formula {
    let mut this = f;
    while !is_cnf(&this) {
        this = recursive_distribute(this);
    }
    this
}

fn flatten_clauses(f: &Formula) -> Result<Vec<Clause>, CnfStructureError> {
    match f {
        Formula::Conjunction(cs) => {
            let mut out = Vec::new();
            for c in cs {
                out.extend(flatten_clauses(c)?);
            }
            Ok(out)
        }
        other => Ok(vec![flatten_clause(other)?]),
    }
}

fn flatten_clause(f: &Formula) -> Result<Clause, CnfStructureError> {
    let mut literals = Vec::new();
    collect_literals(f, &mut literals)?;
    Ok(Clause::new(literals))
}

fn collect_literals(f: &Formula, out: &mut Vec<Literal>) -> Result<(), CnfStructureError> {
    match f {
        Formula::Disjunction(cs) => {
            for c in cs {
                collect_literals(c, out)?;
            }
            Ok(())
        }
        Formula::Atom(name, args) => {
            out.push(Literal::positive(name.clone(), args.clone()));
            Ok(())
        }
        Formula::Negation(inner) => match &**inner {
            Formula::Atom(name, args) => {
                out.push(Literal::negative(name.clone(), args.clone()));
                Ok(())
            }
            _ => Err(CnfStructureError),
        },
        Formula::Conjunction(_) | Formula::Implication(_, _) | Formula::Universal(_, _) | Formula::Existential(_, _) => {
            Err(CnfStructureError)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Term;

    #[test]
    fn distributes_or_over_and() {
        let f = Formula::or(vec![
            Formula::atom("P", vec![]),
            Formula::and(vec![Formula::atom("Q", vec![]), Formula::atom("R", vec![])]),
        ]);
        let clauses = to_cnf(&f).unwrap();
        assert_eq!(clauses.len(), 2);
        for c in &clauses {
            assert_eq!(c.len(), 2);
        }
    }

    #[test]
    fn single_literal_becomes_one_unit_clause() {
        let f = Formula::atom("P", vec![Term::con("A")]);
        let clauses = to_cnf(&f).unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 1);
    }

    #[test]
    fn strips_implicit_universal_wrappers() {
        let f = Formula::forall(
            "x",
            Formula::or(vec![
                Formula::not(Formula::atom("Human", vec![Term::var("x")])),
                Formula::atom("Mortal", vec![Term::var("x")]),
            ]),
        );
        let clauses = to_cnf(&f).unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
    }

    /// Evaluates a quantifier-free formula under an assignment of truth
    /// values to atom names, ignoring argument lists (propositional
    /// semantics only, used to check CNF distribution preserves meaning).
    fn eval(f: &Formula, assignment: &[(&str, bool)]) -> bool {
        let lookup = |name: &str| assignment.iter().find(|(n, _)| *n == name).unwrap().1;
        match f {
            Formula::Atom(name, _) => lookup(name),
            Formula::Negation(inner) => !eval(inner, assignment),
            Formula::Conjunction(cs) => cs.iter().all(|c| eval(c, assignment)),
            Formula::Disjunction(cs) => cs.iter().any(|c| eval(c, assignment)),
            Formula::Implication(a, b) => !eval(a, assignment) || eval(b, assignment),
            Formula::Universal(_, _) | Formula::Existential(_, _) => {
                unreachable!("fuzz fixtures are quantifier-free")
            }
        }
    }

    fn eval_clauses(clauses: &[Clause], assignment: &[(&str, bool)]) -> bool {
        let lookup = |name: &str| assignment.iter().find(|(n, _)| *n == name).unwrap().1;
        clauses.iter().all(|clause| {
            clause.literals().iter().any(|lit| {
                let v = lookup(&lit.predicate);
                if lit.negated {
                    !v
                } else {
                    v
                }
            })
        })
    }

    /// Truth-table fuzz: for every formula in a small fixture set, over
    /// every assignment of its atoms, the CNF form must agree with the
    /// original formula.
    #[test]
    fn cnf_is_truth_table_equivalent_to_the_source_formula() {
        let p = Formula::atom("P", vec![]);
        let q = Formula::atom("Q", vec![]);
        let r = Formula::atom("R", vec![]);
        let s = Formula::atom("S", vec![]);

        let fixtures = vec![
            Formula::implies(p.clone(), q.clone()),
            Formula::not(Formula::and(vec![p.clone(), q.clone()])),
            Formula::or(vec![p.clone(), Formula::and(vec![q.clone(), r.clone()])]),
            Formula::and(vec![Formula::or(vec![p.clone(), q.clone()]), Formula::not(r.clone())]),
            Formula::implies(Formula::implies(p.clone(), q.clone()), r.clone()),
            // Two conjunctive disjuncts: exercises distribute() picking a
            // conjunction with a sibling conjunction still in `rest`.
            Formula::or(vec![
                Formula::and(vec![p.clone(), q.clone()]),
                Formula::and(vec![r.clone(), s.clone()]),
            ]),
        ];

        for f in &fixtures {
            for bits in 0u8..16 {
                let assignment = [
                    ("P", bits & 1 != 0),
                    ("Q", bits & 2 != 0),
                    ("R", bits & 4 != 0),
                    ("S", bits & 8 != 0),
                ];
                let expected = eval(f, &assignment);

                let nnf = crate::normalize::move_nots_inwards(&crate::normalize::eliminate_implications(f));
                let clauses = to_cnf(&nnf).unwrap();
                let actual = eval_clauses(&clauses, &assignment);

                assert_eq!(expected, actual, "mismatch for {f} under {assignment:?}");
            }
        }
    }

    #[test]
    fn conjunction_in_disjunction_after_distribution_is_detected() {
        // Sanity: a matrix that is already a bad shape but can't arise from
        // the pipeline is still rejected, not silently accepted.
        let bad = Formula::Disjunction(vec![
            Formula::atom("P", vec![]),
            Formula::Conjunction(vec![]),
        ]);
        // An empty conjunction distributes to an empty `and` of zero
        // children, which is itself trivially CNF, so exercise the
        // genuinely malformed shape directly via collect_literals.
        let mut out = Vec::new();
        let res = collect_literals(&bad, &mut out);
        assert!(res.is_err());
    }
}
