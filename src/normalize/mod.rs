//! The normalization pipeline (spec §2, §4.2–§4.6): five passes turning a
//! parsed formula into a list of clauses.

mod cnf;
mod implication;
mod nnf;
mod prenex;
mod skolem;
mod standardize;

pub use cnf::{to_cnf, CnfStructureError};
pub use implication::eliminate_implications;
pub use nnf::move_nots_inwards;
pub use prenex::prenex_normal_form;
pub use skolem::skolemize;
pub use standardize::standardize_apart;

use crate::clause::Clause;
use crate::formula::Formula;

/// Threads the two sources of fresh names used across one `solve`
/// invocation: fresh bound-variable names (for standardization apart) and
/// fresh Skolem symbols. Per spec §9's guidance, this is a plain value
/// passed explicitly through the pipeline rather than global/static state,
/// so concurrent `solve` calls never interleave names.
#[derive(Debug, Default)]
pub struct NormalizeContext {
    next_variable: u64,
    next_skolem: u64,
}

impl NormalizeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_variable(&mut self) -> String {
        self.next_variable += 1;
        format!("$v{}", self.next_variable)
    }

    pub fn fresh_skolem(&mut self) -> String {
        self.next_skolem += 1;
        format!("sk{}", self.next_skolem)
    }
}

/// Runs a single formula through the full pipeline, producing its clausal
/// form. This is the per-formula unit the driver (§2.4) runs once per
/// premise and once for the negated goal, sharing one [`NormalizeContext`]
/// across the whole `solve` invocation.
pub fn normalize_to_clauses(
    f: &Formula,
    ctx: &mut NormalizeContext,
) -> Result<Vec<Clause>, CnfStructureError> {
    let f = eliminate_implications(f);
    let f = move_nots_inwards(&f);
    let f = standardize_apart(&f, ctx);
    let f = prenex_normal_form(&f);
    let f = skolemize(&f, ctx);
    to_cnf(&f)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Term;

    #[test]
    fn socrates_premise_normalizes_to_one_two_literal_clause() {
        let mut ctx = NormalizeContext::new();
        let f = Formula::forall(
            "x",
            Formula::implies(
                Formula::atom("Human", vec![Term::var("x")]),
                Formula::atom("Mortal", vec![Term::var("x")]),
            ),
        );
        let clauses = normalize_to_clauses(&f, &mut ctx).unwrap();
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
    }

    #[test]
    fn skolem_counter_is_shared_and_monotonic_across_calls() {
        let mut ctx = NormalizeContext::new();
        let a = Formula::exists("x", Formula::atom("P", vec![Term::var("x")]));
        let b = Formula::exists("y", Formula::atom("Q", vec![Term::var("y")]));
        let ca = normalize_to_clauses(&a, &mut ctx).unwrap();
        let cb = normalize_to_clauses(&b, &mut ctx).unwrap();
        assert_eq!(ca[0].literals()[0].args[0], Term::Constant("sk1".into()));
        assert_eq!(cb[0].literals()[0].args[0], Term::Constant("sk2".into()));
    }
}
