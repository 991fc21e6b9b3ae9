use anyhow::Context;
use clap::Parser;
use sexagesimal::utils::{logger, validation::Validate};
use sexagesimal::{Angle, AngleError, Cli, Command, Relation, SexagesimalConfig, SourceFormat};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = SexagesimalConfig::load(cli.config.as_deref()).with_context(|| {
        format!(
            "loading settings from {}",
            cli.config.as_deref().unwrap_or(Path::new("<defaults>")).display()
        )
    })?;
    config.validate()?;

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI arguments: {:?}", cli);

    match run(&cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }
}

fn run(command: &Command, config: &SexagesimalConfig) -> Result<String, AngleError> {
    let places = config.decimal_places();

    match command {
        Command::Convert { input, from } => {
            let angle = Angle::build(&from.source(input)?)?;
            tracing::info!("Converted {} to {}", input, angle);
            Ok(format!(
                "{}\n{:.places$}°\n{:.places$} rad",
                angle,
                angle.to_decimal(),
                angle.to_radians(),
            ))
        }
        Command::Sum { first, second } => {
            let first = Angle::build(&SourceFormat::Auto.source(first)?)?;
            let second = Angle::build(&SourceFormat::Auto.source(second)?)?;
            let sum = Angle::sum(&first, &second)?;
            tracing::info!("{} + {} = {}", first, second, sum);
            Ok(format!("{}\n{:.places$}°", sum, sum.to_decimal()))
        }
        Command::Compare { first, second } => {
            let left = Angle::build(&SourceFormat::Auto.source(first)?)?;
            let precision = config.comparison_precision();
            let symbol = if left.compare(Relation::Equal, second, precision)? {
                "="
            } else if left.compare(Relation::Greater, second, precision)? {
                ">"
            } else {
                "<"
            };
            Ok(format!("{} {} {}", left, symbol, second))
        }
    }
}
