use async_trait::async_trait;
use colored::*;
use db::DocumentStore;
use db::bson::oid::ObjectId;
use std::io::Write;
use std::time::Instant;

use crate::error::SeedError;
use crate::rng::SeedRng;

const STATUS_COLUMN: usize = 80;

/// Generates and bulk-inserts one collection's worth of synthetic documents.
#[async_trait]
pub trait Seeder: Send + Sync {
    /// Human-readable collection label, e.g. "Study Rooms".
    fn name(&self) -> &'static str;

    /// Whether `count` drives the batch size. Seeders that derive their batch
    /// from existing documents (one bank per module, modules per course)
    /// ignore it.
    fn takes_count(&self) -> bool {
        true
    }

    /// Returns the ids of the inserted batch, in insertion order.
    async fn seed(
        &self,
        store: &dyn DocumentStore,
        rng: &mut SeedRng,
        count: usize,
    ) -> Result<Vec<ObjectId>, SeedError>;
}

/// Runs `seeder` with a dotted progress line on `out`.
pub async fn run_seeder<S, W>(
    seeder: &S,
    store: &dyn DocumentStore,
    rng: &mut SeedRng,
    count: usize,
    out: &mut W,
) -> Result<Vec<ObjectId>, SeedError>
where
    S: Seeder + ?Sized,
    W: Write,
{
    let base_msg = format!("Seeding {}", seeder.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    let _ = write!(out, "{}{} ", base_msg, dots);
    let _ = out.flush();

    let start = Instant::now();
    match seeder.seed(store, rng, count).await {
        Ok(ids) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            let inserted = format!("[{} inserted]", ids.len()).dimmed();
            let _ = writeln!(out, "{} {} {}", "done".green(), time_str, inserted);
            log::info!("Inserted {} {}", ids.len(), seeder.name().to_lowercase());
            Ok(ids)
        }
        Err(e) => {
            let _ = writeln!(out, "{}", "failed".red());
            log::error!("Seeding {} failed: {}", seeder.name(), e);
            Err(e)
        }
    }
}
