//! Command line definition.

use crate::models::RegistryMode;
use crate::output::OutputFormat;
use crate::processing::SweepOptions;
use crate::VisualizeOptions;
use clap::Parser;
use std::path::PathBuf;

/// Usage line printed after a validation error.
pub const USAGE: &str = "Usage: cidrviz A=1.2.3.4/8 B=1.1.1.1/10 C=2.2.2.2/20";

#[derive(Parser, Debug)]
#[command(name = "cidrviz")]
#[command(about = "Show how named CIDR ranges overlap, nest and leave gaps.")]
pub struct CommandLine {
    /// Named ranges, e.g. A=10.0.0.0/8
    #[arg(value_name = "NAME=CIDR")]
    pub ranges: Vec<String>,

    /// Skip printing gaps between non-adjacent subnets
    #[arg(long)]
    pub no_gaps: bool,

    /// Let a name own several ranges (names may be longer than one character)
    #[arg(long)]
    pub multi: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Colour active names and gaps in text output
    #[arg(long)]
    pub color: bool,

    /// log4rs configuration file
    #[arg(long, value_name = "PATH", default_value = "log4rs.yml")]
    pub log_config: PathBuf,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn registry_mode(&self) -> RegistryMode {
        if self.multi {
            RegistryMode::Multi
        } else {
            RegistryMode::Single
        }
    }

    pub fn visualize_options(&self) -> VisualizeOptions {
        VisualizeOptions {
            mode: self.registry_mode(),
            sweep: SweepOptions {
                show_gaps: !self.no_gaps,
            },
            format: self.format,
            color: self.color,
        }
    }
}
