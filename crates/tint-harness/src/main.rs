#![forbid(unsafe_code)]

//! `tint-preview` binary entry point.

use std::io::{self, BufRead, Write};

use tint_harness::Pipeline;
use tint_harness::cli::Opts;

fn main() {
    tint::core::logging::init_from_env();
    let opts = Opts::parse();

    if let Err(e) = run(&opts) {
        eprintln!("tint-preview: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> tint::Result<()> {
    let pipeline = Pipeline::from_opts(opts)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(text) = &opts.text {
        writeln!(out, "{}", pipeline.render(text))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        writeln!(out, "{}", pipeline.render(&line))?;
    }
    out.flush()?;
    Ok(())
}
