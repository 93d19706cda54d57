use crate::config::Config;
use crate::core::plan::Plan;
use crate::db::history::HistoryStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{GREY, RESET, header, info, success};
use crate::utils::table::Table;

/// Handle the `status` command
///
/// Runs the same integrity checks as `up` but never writes: a missing
/// database file or history table reads as empty history.
pub fn handle(cfg: &Config, json: bool) -> AppResult<()> {
    let store = HistoryStore::new(&cfg.table)?;

    let applied = match DbPool::open_existing(&cfg.database)? {
        Some(pool) => store.list_applied_if_present(&pool.conn)?,
        None => Vec::new(),
    };

    let plan = Plan::build(&cfg.migrations, applied)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    header(format!("Migrations in {}", cfg.database.display()));

    if plan.applied.is_empty() {
        info("No migrations have been applied yet.");
    } else {
        let mut table = Table::new(["ID", "NAME", "RUN AT (UTC)", "HASH"]);
        for r in &plan.applied {
            table.add_row(vec![
                r.id.to_string(),
                r.name.clone(),
                r.applied_at.clone(),
                r.short_hash().to_string(),
            ]);
        }
        print!("{}", table.render());
        println!();
    }

    if plan.is_up_to_date() {
        success("History verified, no pending migrations.");
    } else {
        info(format!("{} pending migration(s):", plan.pending.len()));
        for m in &plan.pending {
            println!("  {GREY}{:>6}{RESET}  {}", m.number, m.name);
        }
    }

    Ok(())
}
