//! Map how named CIDR ranges overlap, nest and leave gaps.
//!
//! Ranges are given as `NAME=CIDR` tokens, collected in a [`models::Registry`],
//! swept in address order by [`processing::sweep`] and rendered by
//! [`output::render`].

pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SweepError;
use models::RegistryMode;
use output::OutputFormat;
use processing::SweepOptions;

/// Everything [`visualize`] needs besides the range tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct VisualizeOptions {
    pub mode: RegistryMode,
    pub sweep: SweepOptions,
    pub format: OutputFormat,
    pub color: bool,
}

/// Parse `args`, sweep them and render the report.
///
/// The first invalid token aborts; nothing is rendered in that case.
pub fn visualize<S: AsRef<str>>(
    args: &[S],
    options: &VisualizeOptions,
) -> Result<String, SweepError> {
    let registry = input::build_registry(args, options.mode)?;
    let report = processing::sweep(&registry, &options.sweep)?;
    output::render(&report, options.format, options.color)
}
