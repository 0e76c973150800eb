//! Entry point for the `waitfor` binary.
//! Blocks until the requested target is ready and prints its value.

use clap::Parser;
use waitfor::{Args, logging, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();
    let outcome = run(&args).await?;
    println!("{}", outcome.render(args.json)?);
    Ok(())
}
