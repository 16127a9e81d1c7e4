//! The resolution search (spec §4.7): saturation by pairwise binary
//! resolution over unifiable complementary literals.
//!
//! Clauses here are the "string form" of spec §3/§4.5, a canonical, sorted
//! sequence of literal strings, which is what the (deliberately preserved)
//! string-level unifier in [`crate::unify`] consumes and produces.

use std::collections::{BTreeMap, BTreeSet};

use crate::log_targets::RESOLUTION;
use crate::unify::{apply_substitution, literal_head, unify_literals};

/// A canonicalized clause: sorted, duplicate-free literal strings. The
/// empty clause denotes contradiction.
pub type ResClause = Vec<String>;

fn canonicalize(mut lits: Vec<String>) -> ResClause {
    lits.sort();
    lits.dedup();
    lits
}

/// Caps on saturation, resolving the open question in spec §4.7/§9 about
/// termination on non-terminating inputs. Exceeding either bound reports
/// `proven=false` with a log line noting the cap was hit.
#[derive(Debug, Clone, Copy)]
pub struct SaturationLimits {
    pub max_clauses: usize,
    pub max_sweeps: usize,
}

impl Default for SaturationLimits {
    fn default() -> Self {
        Self { max_clauses: 100_000, max_sweeps: 10_000 }
    }
}

/// The outcome of a resolution search.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub proven: bool,
    pub steps: Vec<String>,
}

/// Indexes clauses by the predicate name and polarity of their literals, so
/// the search only considers clause pairs that share a predicate with
/// opposite polarity, grounded on the teacher's `res/database.rs`. This
/// changes nothing about which resolvents are found relative to the naive
/// all-pairs form in spec §4.7; it only prunes candidate pairs that could
/// never resolve.
#[derive(Debug, Default)]
struct ClauseDatabase {
    clauses: Vec<ResClause>,
    seen: BTreeSet<ResClause>,
    by_pos: BTreeMap<String, BTreeSet<usize>>,
    by_neg: BTreeMap<String, BTreeSet<usize>>,
}

impl ClauseDatabase {
    fn new() -> Self {
        Self::default()
    }

    /// Inserts `clause` if it is not already known. Returns its index if
    /// newly inserted.
    fn insert(&mut self, clause: ResClause) -> Option<usize> {
        if self.seen.contains(&clause) {
            return None;
        }
        let idx = self.clauses.len();
        self.seen.insert(clause.clone());

        for lit in &clause {
            if let Some((negated, pred)) = literal_head(lit) {
                let map = if negated { &mut self.by_neg } else { &mut self.by_pos };
                map.entry(pred).or_default().insert(idx);
            }
        }

        self.clauses.push(clause);
        Some(idx)
    }

    /// Candidate clause-index pairs sharing at least one predicate name
    /// with opposite polarity.
    fn candidate_pairs(&self) -> BTreeSet<(usize, usize)> {
        let mut out = BTreeSet::new();
        for (name, pos_idxs) in &self.by_pos {
            if let Some(neg_idxs) = self.by_neg.get(name) {
                for &i in pos_idxs {
                    for &j in neg_idxs {
                        if i != j {
                            out.insert((i.min(j), i.max(j)));
                        }
                    }
                }
            }
        }
        out
    }
}

/// Runs saturation over `initial`, returning whether the empty clause was
/// derived and the full derivation log.
pub fn resolve(initial: Vec<ResClause>, limits: &SaturationLimits) -> ResolutionOutcome {
    let mut steps = Vec::new();
    let mut db = ClauseDatabase::new();

    for clause in initial {
        let clause = canonicalize(clause);
        if clause.is_empty() {
            steps.push("[EMPTY CLAUSE] derived directly from the input clauses".to_string());
            return ResolutionOutcome { proven: true, steps };
        }
        db.insert(clause);
    }

    let mut processed: BTreeSet<(usize, usize)> = BTreeSet::new();
    let mut sweeps = 0usize;

    loop {
        sweeps += 1;
        if sweeps > limits.max_sweeps {
            steps.push(format!("Saturation cap reached ({} sweeps), not proven.", limits.max_sweeps));
            return ResolutionOutcome { proven: false, steps };
        }

        let mut made_progress = false;
        let pairs: Vec<(usize, usize)> =
            db.candidate_pairs().into_iter().filter(|p| !processed.contains(p)).collect();

        for (i, j) in pairs {
            processed.insert((i, j));
            let a = db.clauses[i].clone();
            let b = db.clauses[j].clone();

            for lit_a in &a {
                for lit_b in &b {
                    let a_neg = lit_a.starts_with('¬');
                    let b_neg = lit_b.starts_with('¬');
                    if a_neg == b_neg {
                        continue;
                    }

                    match unify_literals(lit_a, lit_b) {
                        None => {
                            log::trace!(target: RESOLUTION, "no unifier for {lit_a} and {lit_b}");
                        }
                        Some(subst) => {
                            steps.push(format!("Unify: {lit_a} <-> {lit_b} under {subst:?}"));

                            let remaining: Vec<String> = a
                                .iter()
                                .cloned()
                                .filter(|l| l != lit_a)
                                .chain(b.iter().cloned().filter(|l| l != lit_b))
                                .map(|l| apply_substitution(&l, &subst))
                                .collect();

                            let resolvent = canonicalize(remaining);

                            if resolvent.is_empty() {
                                steps.push(format!(
                                    "Resolve: [{}] + [{}] -> EMPTY CLAUSE",
                                    a.join(","),
                                    b.join(",")
                                ));
                                steps.push("[EMPTY CLAUSE] Contradiction derived.".to_string());
                                return ResolutionOutcome { proven: true, steps };
                            }

                            steps.push(format!(
                                "Resolve: [{}] + [{}] -> [{}]",
                                a.join(","),
                                b.join(","),
                                resolvent.join(",")
                            ));

                            if db.clauses.len() >= limits.max_clauses {
                                steps.push(format!(
                                    "Saturation cap reached ({} clauses), not proven.",
                                    limits.max_clauses
                                ));
                                return ResolutionOutcome { proven: false, steps };
                            }

                            if db.insert(resolvent).is_some() {
                                made_progress = true;
                            }
                        }
                    }
                }
            }
        }

        if !made_progress {
            steps.push("No new clause in a full sweep, not proven.".to_string());
            return ResolutionOutcome { proven: false, steps };
        }
    }
}
