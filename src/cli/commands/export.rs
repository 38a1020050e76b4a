use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        from,
        to,
        filter,
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let filter = cfg.effective_filter(filter.as_deref());

        let summary = ExportLogic::export(&pool, *format, file, from, to, filter, *force)?;

        if !summary.is_empty() {
            ttlog_or_warn(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("Exported {} rows ({from} → {to}) to {file}", summary.rows.len()),
            );
        }
    }
    Ok(())
}
