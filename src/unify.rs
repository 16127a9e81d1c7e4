//! Unification over literal strings (spec §4.8).
//!
//! Deliberately preserves the source's documented limitations rather than
//! upgrading to a structural Robinson unifier, an open design decision
//! spec §9 calls out explicitly, resolved here in favor of behavioral
//! parity (see `DESIGN.md`). Argument tokens are opaque strings: a nested
//! multi-arg function term embedded in an argument position (e.g.
//! `sk1(x,y)`) is *not* recursed into, because the argument list is split on
//! every top-level comma without tracking parenthesis depth, the same bug
//! the source has. There is no occurs-check and no transitive closure of
//! bindings.

use std::collections::BTreeMap;

/// A substitution from argument-token string to argument-token string.
pub type Substitution = BTreeMap<String, String>;

/// Splits a literal's argument list on every comma, without any awareness
/// of parenthesis depth. This is the root of the "nested function term"
/// limitation: `sk1(x,y)` as a single argument is cut into two tokens.
fn split_args(inner: &str) -> Vec<String> {
    if inner.is_empty() {
        vec![]
    } else {
        inner.split(',').map(|t| t.to_string()).collect()
    }
}

/// Parses a literal string into `(negated, predicate, argument tokens)` via
/// a flat match on `[¬]name(args)`. Returns `None` if the string isn't of
/// that shape or the predicate name is empty.
fn parse_literal(s: &str) -> Option<(bool, String, Vec<String>)> {
    let (negated, rest) = match s.strip_prefix('¬') {
        Some(r) => (true, r),
        None => (false, s),
    };

    let open = rest.find('(')?;
    if !rest.ends_with(')') || rest.len() < open + 2 {
        return None;
    }

    let pred = &rest[..open];
    if pred.is_empty() {
        return None;
    }

    let inner = &rest[open + 1..rest.len() - 1];
    Some((negated, pred.to_string(), split_args(inner)))
}

/// Mirrors Python's `str.islower()`: true if the token has at least one
/// cased character and none of them are uppercase. Digits and underscores
/// are uncased and don't affect the result. Under this rule a Skolem symbol
/// like `sk1` reads as "lowercase", i.e. as a variable to this unifier, even
/// though it denotes a constant/function symbol at the AST level, a
/// preserved quirk of the original string-level classification, harmless
/// here because the unifier never consults the AST's notion of term kind.
fn looks_like_variable(token: &str) -> bool {
    let mut has_cased = false;
    for c in token.chars() {
        if c.is_uppercase() {
            return false;
        }
        if c.is_lowercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Extracts a literal's polarity and predicate name without touching its
/// arguments, used by the resolver to index clauses by predicate/polarity.
pub fn literal_head(lit: &str) -> Option<(bool, String)> {
    let (negated, pred, _) = parse_literal(lit)?;
    Some((negated, pred))
}

/// Attempts to unify two literal strings whose polarities are already known
/// to be opposite (checked by the caller, see [`crate::resolver`]). Returns
/// `None` if either fails to parse, the predicate names differ, or the
/// arities differ, or if two non-variable-looking tokens disagree.
pub fn unify_literals(lit_a: &str, lit_b: &str) -> Option<Substitution> {
    let (_, pred_a, args_a) = parse_literal(lit_a)?;
    let (_, pred_b, args_b) = parse_literal(lit_b)?;

    if pred_a != pred_b || args_a.len() != args_b.len() {
        return None;
    }

    let mut subst = Substitution::new();
    for (a, b) in args_a.iter().zip(args_b.iter()) {
        if a == b {
            continue;
        } else if looks_like_variable(a) {
            subst.insert(a.clone(), b.clone());
        } else if looks_like_variable(b) {
            subst.insert(b.clone(), a.clone());
        } else {
            return None;
        }
    }

    Some(subst)
}

/// Applies `subst` to a literal string by replacing each exact top-level
/// argument token that appears as a key, not by traversing a term
/// structure, and not transitively (a binding `x↦y` is not chased further
/// even if `y` is itself later bound).
pub fn apply_substitution(lit: &str, subst: &Substitution) -> String {
    match parse_literal(lit) {
        Some((negated, pred, args)) => {
            let new_args: Vec<String> =
                args.iter().map(|a| subst.get(a).cloned().unwrap_or_else(|| a.clone())).collect();
            format!("{}{}({})", if negated { "¬" } else { "" }, pred, new_args.join(","))
        }
        None => lit.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unifies_variable_with_constant() {
        let subst = unify_literals("¬Human(x)", "Human(Socrates)").unwrap();
        assert_eq!(subst.get("x"), Some(&"Socrates".to_string()));
    }

    #[test]
    fn fails_on_predicate_or_arity_mismatch() {
        assert!(unify_literals("P(A)", "Q(A)").is_none());
        assert!(unify_literals("P(A,B)", "P(A)").is_none());
    }

    #[test]
    fn fails_on_two_distinct_constants() {
        assert!(unify_literals("Flies(Penguin)", "¬Flies(Eagle)").is_none());
    }

    #[test]
    fn substitution_round_trips_through_apply() {
        let subst = unify_literals("¬Human(x)", "Human(Socrates)").unwrap();
        assert_eq!(apply_substitution("Mortal(x)", &subst), "Mortal(Socrates)");
    }

    #[test]
    fn nested_function_term_argument_is_split_incorrectly_by_design() {
        // sk1(a,b) embedded as a single argument gets cut at the comma,
        // the documented, intentionally preserved limitation.
        let (_, _, args) = parse_literal("P(sk1(a,b))").unwrap();
        assert_eq!(args, vec!["sk1(a".to_string(), "b)".to_string()]);
    }

    #[test]
    fn skolem_symbol_reads_as_variable_like_token() {
        assert!(looks_like_variable("sk1"));
    }
}
