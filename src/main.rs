//! Главный исполняемый файл querylex

use anyhow::Context;
use clap::Parser;
use querylex::cli::Cli;
use querylex::Error;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("не удалось загрузить конфигурацию")?;

    // RUST_LOG имеет приоритет над настройками из конфигурации
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    log::debug!("Конфигурация: {:?}", config);

    match cli.execute(&config) {
        Ok(output) => println!("{}", output),
        // Лексическая ошибка печатается как есть: "Error at position: N - No valid token"
        Err(Error::Lexical(err)) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
