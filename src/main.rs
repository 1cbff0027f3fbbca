use std::io::{self, BufRead};

use anyhow::{Context, bail};
use clap::Parser as ClapParser;
use combicalc::evaluate::{Consumption, evaluate};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Without it, every line of stdin is evaluated
    expression: Option<String>,

    /// Reject input that is not consumed entirely by the expression
    #[arg(long)]
    complete: bool,

    /// Also print the unconsumed rest of the input
    #[arg(long)]
    show_remaining: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let consumption = if args.complete {
        Consumption::Complete
    } else {
        Consumption::Prefix
    };

    let mut failures = 0;
    match &args.expression {
        Some(expression) => failures += report(expression, consumption, args.show_remaining),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                if line.is_empty() {
                    continue;
                }
                failures += report(&line, consumption, args.show_remaining);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} expression(s) could not be evaluated");
    }

    Ok(())
}

/// Print the value of `input`, or the reason it has none. Returns the number of failures.
fn report(input: &str, consumption: Consumption, show_remaining: bool) -> usize {
    match evaluate(input, consumption) {
        Ok(evaluation) if show_remaining => {
            println!("{}\t{:?}", evaluation.value, evaluation.remaining);
            0
        }
        Ok(evaluation) => {
            println!("{}", evaluation.value);
            0
        }
        Err(err) => {
            eprintln!("{input:?}: {err}");
            1
        }
    }
}
