//! Log target names for the internal diagnostic tracing emitted via the
//! `log` crate, grounded on `teeaychem-otter_sat`'s `otter_lib::log::targets`
//! module. Distinct from the derivation log (`SolveResult::steps`), which is
//! business data returned by [`crate::solve`], not a logging side channel.

pub const PARSER: &str = "parser";
pub const NORMALIZE: &str = "normalize";
pub const RESOLUTION: &str = "resolution";
pub const DRIVER: &str = "driver";
