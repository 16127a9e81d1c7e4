//! Top-level error type (spec §7). The parser's own [`crate::parser::ParseError`]
//! keeps its line:col-carrying shape and converts into `ProverError::Parse`;
//! `UnifierParseError` never escapes [`crate::solve`], per spec §7 the
//! affected resolution pair is skipped and the search continues, so it only
//! ever surfaces as a derivation-log line, not as a variant here.

use thiserror::Error;

use crate::normalize::CnfStructureError;
use crate::parser::ParseError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProverError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("internal error: {0}")]
    CnfStructure(#[from] CnfStructureError),
}
