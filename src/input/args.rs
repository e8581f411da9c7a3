//! `NAME=CIDR` argument parsing.

use crate::error::SweepError;
use crate::models::{Registry, RegistryMode};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ARG_RE: Regex = Regex::new(r"^([^=]+)=(.+)$").expect("Invalid Regex?");
}

/// A `NAME=CIDR` token split into its two halves. Neither half is validated.
#[derive(Debug, PartialEq, Eq)]
pub struct NamedCidr<'a> {
    pub name: &'a str,
    pub cidr: &'a str,
}

/// Split one argument at its first `=`.
pub fn parse_named_cidr(arg: &str) -> Result<NamedCidr<'_>, SweepError> {
    let caps = ARG_RE
        .captures(arg)
        .ok_or_else(|| SweepError::MalformedArgument(arg.to_string()))?;
    match (caps.get(1), caps.get(2)) {
        (Some(name), Some(cidr)) => Ok(NamedCidr {
            name: name.as_str(),
            cidr: cidr.as_str(),
        }),
        _ => Err(SweepError::MalformedArgument(arg.to_string())),
    }
}

/// Build a [`Registry`] from command line tokens.
///
/// Stops at the first bad token; no partial registry is returned.
pub fn build_registry<S: AsRef<str>>(
    args: &[S],
    mode: RegistryMode,
) -> Result<Registry, SweepError> {
    if args.is_empty() {
        log::debug!("no ranges given");
        return Err(SweepError::EmptyInput);
    }

    let mut registry = Registry::new(mode);
    for arg in args {
        let arg = arg.as_ref();
        let named = parse_named_cidr(arg)?;
        if let Err(e) = registry.insert(named.name, named.cidr) {
            log::debug!("rejected argument {arg}: {e}");
            return Err(e);
        }
    }
    log::info!("# Got {} ranges for {} names", registry.ranges().count(), registry.len());
    log::debug!("{registry}");
    Ok(registry)
}
