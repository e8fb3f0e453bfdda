use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use neuropsy_instruments::scoring::ScoreType;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScoreTypeArg {
    /// Standard score, mean 100 SD 15
    Standard,
    /// Scaled score, mean 10 SD 3
    Scaled,
    /// T-score, mean 50 SD 10
    T,
}

impl From<ScoreTypeArg> for ScoreType {
    fn from(arg: ScoreTypeArg) -> Self {
        match arg {
            ScoreTypeArg::Standard => ScoreType::Standard,
            ScoreTypeArg::Scaled => ScoreType::Scaled,
            ScoreTypeArg::T => ScoreType::TScore,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "neuropsy")]
#[command(about = "Neuropsychological score interpretation and report generation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the clinical report from an evaluation file
    Report {
        /// Evaluation JSON file
        input: PathBuf,

        /// Output directory (overrides the config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Write the Markdown report to stdout instead of a file
        #[arg(long)]
        stdout: bool,

        /// Skip the Word export even if enabled in the config
        #[arg(long)]
        no_docx: bool,

        /// Fail on out-of-range scores instead of clamping them
        #[arg(long)]
        strict: bool,
    },

    /// Print the report summary as JSON, or render it through a Tera template
    Summary {
        /// Evaluation JSON file
        input: PathBuf,

        /// Tera template rendered with the summary as context
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Fail on out-of-range scores instead of clamping them
        #[arg(long)]
        strict: bool,
    },

    /// Classify and interpret a single score
    Classify {
        value: f64,

        #[arg(short = 't', long = "type", value_enum, default_value = "standard")]
        score_type: ScoreTypeArg,

        /// Domain phrase substituted into the interpretation
        #[arg(short, long, default_value = "")]
        domain: String,
    },

    /// List instruments, or the score names of one instrument
    Instruments {
        /// Instrument id (e.g. wisc_v, conners_parent)
        id: Option<String>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
