//! The driver (spec §2.4, §6): the single pure entry point that wires parser,
//! normalizer, and resolver together.
//!
//! A premise or goal that fails to parse is not a fatal error. Spec §7
//! treats it as "not proven" with a single log line naming the offending
//! input, so the search simply proceeds without that formula. A structural
//! failure inside the normalizer (spec §7's `CnfStructureError`) is
//! different: it means a pass produced something the next pass cannot
//! handle, which is always an internal bug, so it propagates as a hard
//! error instead.

use crate::clause::Clause;
use crate::error::ProverError;
use crate::formula::Formula;
use crate::log_targets::DRIVER;
use crate::normalize::{normalize_to_clauses, NormalizeContext};
use crate::parser::parse_formula;
use crate::resolver::{resolve, ResClause, SaturationLimits};

/// The result of a [`solve`] call: whether the goal was proven from the
/// premises, and the full human-readable derivation log (parse failures,
/// unifications, resolution steps, and the final verdict line).
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub proven: bool,
    pub steps: Vec<String>,
}

fn clause_to_res(clause: &Clause) -> ResClause {
    clause.literals().iter().map(|l| l.serialize()).collect()
}

/// Parses `text`, logging and recording a skip if it fails to parse rather
/// than aborting the whole run.
fn parse_or_skip(text: &str, label: &str, steps: &mut Vec<String>) -> Option<Formula> {
    match parse_formula(text) {
        Ok(f) => Some(f),
        Err(e) => {
            log::warn!(target: DRIVER, "failed to parse {label} {text:?}: {e}");
            steps.push(format!("Skipped unparseable {label}: {text:?} ({e})"));
            None
        }
    }
}

/// Attempts to prove `goal` from `premises` by refutation: negate the goal,
/// clausify every premise and the negated goal under one shared
/// [`NormalizeContext`], and saturate by resolution.
pub fn solve(premises: &[String], goal: &str) -> Result<SolveResult, ProverError> {
    solve_with_limits(premises, goal, &SaturationLimits::default())
}

/// As [`solve`], but with caller-supplied saturation caps.
pub fn solve_with_limits(
    premises: &[String],
    goal: &str,
    limits: &SaturationLimits,
) -> Result<SolveResult, ProverError> {
    let mut steps = Vec::new();
    let mut ctx = NormalizeContext::new();
    let mut formulas = Vec::new();

    for premise in premises {
        if let Some(f) = parse_or_skip(premise, "premise", &mut steps) {
            formulas.push(f);
        }
    }

    match parse_or_skip(goal, "goal", &mut steps) {
        Some(g) => formulas.push(Formula::not(g)),
        None => {
            steps.push("No well-formed goal to refute, not proven.".to_string());
            return Ok(SolveResult { proven: false, steps });
        }
    }

    let mut res_clauses = Vec::new();
    for f in &formulas {
        let clauses = normalize_to_clauses(f, &mut ctx)?;
        for clause in &clauses {
            steps.push(format!("Clausified {f} -> {clause}"));
        }
        res_clauses.extend(clauses.iter().map(clause_to_res));
    }

    log::debug!(target: DRIVER, "starting saturation over {} clauses", res_clauses.len());
    let outcome = resolve(res_clauses, limits);
    steps.extend(outcome.steps);

    Ok(SolveResult { proven: outcome.proven, steps })
}

#[cfg(test)]
mod test {
    use super::*;

    fn premises(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn socrates_is_proven() {
        let out = solve(
            &premises(&["∀x(Human(x)→Mortal(x))", "Human(Socrates)"]),
            "Mortal(Socrates)",
        )
        .unwrap();
        assert!(out.proven);
    }

    #[test]
    fn penguins_cannot_prove_an_unrelated_conclusion() {
        let out = solve(
            &premises(&["∀x(Bird(x)→Flies(x))", "Bird(Penguin)"]),
            "Flies(Eagle)",
        )
        .unwrap();
        assert!(!out.proven);
    }

    #[test]
    fn transitive_chain_is_proven() {
        let out = solve(
            &premises(&["∀x(A(x)→B(x))", "∀x(B(x)→C(x))", "A(K)"]),
            "C(K)",
        )
        .unwrap();
        assert!(out.proven);
    }

    #[test]
    fn contradictory_premises_prove_anything() {
        let out = solve(&premises(&["P(A)", "¬P(A)"]), "Q(B)").unwrap();
        assert!(out.proven);
    }

    #[test]
    fn disjunction_in_conclusion_is_proven() {
        let out = solve(
            &premises(&["∀x(P(x)→(Q(x)∨R(x)))", "P(A)", "¬Q(A)"]),
            "R(A)",
        )
        .unwrap();
        assert!(out.proven);
    }

    #[test]
    fn existential_premise_is_skolemized_and_proven() {
        let out = solve(
            &premises(&["∃x(Teacher(x))", "∀x(Teacher(x)→Wise(x))"]),
            "∃x(Wise(x))",
        )
        .unwrap();
        assert!(out.proven);
    }

    #[test]
    fn unparseable_premise_is_skipped_not_fatal() {
        let out = solve(&premises(&["Human(Socrates)", "((("]), "Human(Socrates)").unwrap();
        assert!(out.steps.iter().any(|s| s.contains("Skipped unparseable premise")));
    }
}
