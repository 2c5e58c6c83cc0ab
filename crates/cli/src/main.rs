use clap::Parser;

use playbill_cli::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    playbill_observability::init(config.log_format);

    let statements = playbill_cli::run(&config)?;
    print!("{statements}");
    Ok(())
}
