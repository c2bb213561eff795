use anyhow::Result;
use clap::Parser;
use tabtrap::{FocusPolicy, Steps};
use tabtrap_examples::formgym::{Form, run};
use tracing_subscriber::EnvFilter;

/// Cycle focus through a terminal form with Tab and shift-Tab.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Wrap past the ends instead of clamping.
    #[clap(short, long)]
    wrap: bool,

    /// Extra fields to skip on every move.
    #[clap(short, long, default_value_t = 0)]
    steps: usize,
}

pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let policy = FocusPolicy::new()
        .with_children("input, button")
        .with_wrap(args.wrap)
        .with_steps(Steps::Uniform(args.steps));
    run(Form::sample(), &policy)
}
