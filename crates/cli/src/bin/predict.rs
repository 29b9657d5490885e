//! Maintenance predictor: classifies one example reading and prints the verdict

use runtime::{init_logging, AppConfig, LogTarget};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.log_level, LogTarget::Stderr)?;

    let verdict = cli::predict(&config)?;
    println!("{}", verdict);

    Ok(())
}
