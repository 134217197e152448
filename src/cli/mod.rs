use clap::Parser;
use contestkit::bio::Mode;

/// Run a solution against a judge's input.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input to read from, `-` for stdin.
    #[arg(default_value = "-")]
    pub input: clio::Input,
    /// Output to write to, `-` for stdout.
    #[arg(short, long, default_value = "-")]
    pub output: clio::Output,
    /// How the input and output are buffered.
    /// Use `line` for interactive problems.
    #[arg(short, long, value_enum, default_value_t = Mode::Full)]
    pub mode: Mode,
}
