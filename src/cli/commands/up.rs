use crate::config::Config;
use crate::core::discovery;
use crate::core::executor::Executor;
use crate::core::plan::Plan;
use crate::db::history::HistoryStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, step, success};

/// Handle the `up` command
///
///  - scans the migrations directory
///  - opens (or creates) the database and the history table
///  - verifies recorded history against the files on disk
///  - applies pending migrations in order, stopping at the first failure
///
/// With `dry_run` the database is only read, never created.
pub fn handle(cfg: &Config, dry_run: bool) -> AppResult<()> {
    let store = HistoryStore::new(&cfg.table)?;

    step(format!(
        "Checking {} against {}",
        cfg.migrations.display(),
        cfg.database.display()
    ));

    // Scan before touching the database: a bad directory leaves no file behind.
    let discovered = discovery::scan(&cfg.migrations)?;

    if dry_run {
        let applied = match DbPool::open_existing(&cfg.database)? {
            Some(pool) => store.list_applied_if_present(&pool.conn)?,
            None => Vec::new(),
        };
        let plan = Plan::from_discovered(&discovered, applied)?;

        if plan.is_up_to_date() {
            info("Database is up to date, nothing to apply.");
            return Ok(());
        }

        info(format!("{} pending migration(s):", plan.pending.len()));
        for m in &plan.pending {
            println!("  {}", m.name);
        }
        return Ok(());
    }

    let mut pool = DbPool::open(&cfg.database)?;
    store.ensure_schema(&pool.conn)?;
    let applied = store.list_applied(&pool.conn)?;
    log::debug!("{} row(s) in history table {}", applied.len(), store.table());

    let plan = Plan::from_discovered(&discovered, applied)?;

    if plan.is_up_to_date() {
        info("Database is up to date, nothing to apply.");
        return Ok(());
    }

    let executor = Executor::new(&store);
    let count = pool.run(|conn| executor.apply(&plan.pending, conn))?;

    success(format!("{count} migration(s) applied."));
    Ok(())
}
