use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{SummaryLogic, build_summary};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { from, to, filter } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let filter = cfg.effective_filter(filter.as_deref());

        let (range, summary) = build_summary(&pool, from, to, filter)?;
        SummaryLogic::print(&range, &summary, cfg);
    }
    Ok(())
}
