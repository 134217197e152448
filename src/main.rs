mod cli;

use std::io::Write;

use clap::Parser;
use contestkit::{BufferedIO, bio};
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to set up the solution: {0}")]
    Io(#[from] bio::Error),
    #[error("Unable to flush the output: {0}")]
    Flush(#[from] std::io::Error),
}

fn main() {
    env_logger::init();
    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn solution<R: std::io::Read, W: Write>(_io: &mut BufferedIO<R, W>) -> bio::Result<()> {
    // problem solution goes here
    Ok(())
}

fn entry() -> Result<(), Error> {
    let cli = Cli::parse();
    log::debug!("running with {:?} buffering", cli.mode);

    let mut io = BufferedIO::new(cli.mode, cli.input, cli.output)?;
    solution(&mut io)?;
    io.flush()?;
    Ok(())
}
