use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Record one check-in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        identifier,
        name,
        roll,
        at,
    } = cmd
    {
        let at = match at {
            Some(s) => Some(date::parse_instant(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, identifier, name, roll, at)?;
    }
    Ok(())
}
