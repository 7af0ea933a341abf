use crate::commands::analyze::AnalyzeConfig;
use crate::io::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devtool")]
#[command(about = "DevTool - Simple project analysis CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the project directory
    pub path: PathBuf,

    /// Write report to a file
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Print report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn into_analyze_config(self) -> AnalyzeConfig {
        let format = self.output_format();
        AnalyzeConfig::new(self.path)
            .with_format(format)
            .with_output(self.out)
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
