use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, format } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ImportLogic::import(&mut pool, file, *format)?;
    }
    Ok(())
}
