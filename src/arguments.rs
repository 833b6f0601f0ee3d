use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[clap(
    about = "Filter compiler-generated make dependencies into project-relative rules",
    version
)]
pub struct Arguments {
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(
        short,
        long,
        default_value_t = 78,
        value_parser = clap::value_parser!(u16).range(4..),
        help = "Set an output column width"
    )]
    pub width: u16,
    #[clap(long, default_value = "cpp", help = "Set a source file extension")]
    pub source_extension: String,
    #[clap(long, default_value = "o", help = "Set an object file extension")]
    pub object_extension: String,
    #[clap(
        long,
        value_enum,
        default_value_t = Resolution::Positional,
        help = "Set a target resolution policy"
    )]
    pub resolution: Resolution,
    #[clap(long, help = "Include only dependencies matching regular expressions")]
    pub include: Vec<String>,
    #[clap(long, help = "Exclude dependencies matching a regular expression")]
    pub exclude: Vec<String>,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show debug logs", env = "FILTER_DEPEND_DEBUG")]
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Resolution {
    Positional,
    Basename,
}
