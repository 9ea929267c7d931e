use clap::Parser;
use mandelplot_cli::cli::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    mandelplot_cli::run(&args)
}
