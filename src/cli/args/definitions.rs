use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, RadixArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `fnvsum` binary.
#[derive(Parser, Debug)]
#[command(
    name = "fnvsum",
    version,
    long_version = long_version(),
    about = "Print FNV digests of the given strings",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        value_name = "INPUT",
        help = "Strings to hash, one line of output each (default: hello)"
    )]
    pub(crate) inputs: Vec<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "FNVSUM_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'a',
        long,
        value_name = "NAME",
        help = "Hash variant: fnv1a-64, fnv1-64, fnv1a-32 or fnv1-32 (default: fnv1a-64)"
    )]
    pub(crate) algorithm: Option<String>,
    #[arg(
        short = 'r',
        long,
        value_enum,
        help = "Number base used to print digests (default: decimal)"
    )]
    pub(crate) radix: Option<RadixArg>,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Label printed before 'hash of' in plain output (default: FNV6a)"
    )]
    pub(crate) label: Option<String>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        help = "Choose how to print the result (default: plain)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before hashing (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr; repeat for more detail"
    )]
    pub(crate) verbose: u8,
}
