use anyhow::{Result, bail};
use std::path::Path;

use shopdesk_runtime::Config;

use crate::args::ConfigCommand;

pub fn handle(data_dir: &Path, api_override: Option<&str>, command: ConfigCommand) -> Result<()> {
    let path = Config::path_in(data_dir);

    match command {
        ConfigCommand::Path => {
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let mut config = Config::load_from(&path)?;
            config.apply_api_override(api_override);
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (pass --force to overwrite)", path.display());
            }
            Config::default().save_to(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
