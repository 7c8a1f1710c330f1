use clap::Parser;

fn main() -> anyhow::Result<()> {
    repcode::init_logging()?;

    let cli = repcode::cli::Cli::parse();
    repcode::cli::run(cli)
}
