//! Parse all three tables and report counts, skips, and coverage gaps.

use crate::source::{SourceArgs, Table};
use surf_data::{parse_beaches, parse_marine_observations, parse_tide_extrema};
use surf_db::Database;

pub async fn run_validate(source: &SourceArgs) -> anyhow::Result<()> {
    let beaches_csv = source.load(Table::BeachDetails).await?;
    let marine_csv = source.load(Table::MarineObservations).await?;
    let tides_csv = source.load(Table::TideExtrema).await?;

    let beaches = parse_beaches(&beaches_csv);
    let marine = parse_marine_observations(&marine_csv);
    let tides = parse_tide_extrema(&tides_csv);

    println!(
        "beach details:       {:>7} rows, {:>4} skipped",
        beaches.rows.len(),
        beaches.skipped
    );
    println!(
        "marine observations: {:>7} rows, {:>4} skipped",
        marine.rows.len(),
        marine.skipped
    );
    println!(
        "tide extrema:        {:>7} rows, {:>4} skipped",
        tides.rows.len(),
        tides.skipped
    );

    if beaches.rows.is_empty() {
        anyhow::bail!("beach details table has no usable rows");
    }

    let db = Database::new()?;
    db.load_beaches(&beaches_csv)?;
    db.load_marine_observations(&marine_csv)?;
    db.load_tides(&tides_csv)?;

    let coverage = db.query_coverage()?;
    let uncovered: Vec<_> = coverage.iter().filter(|c| c.is_uncovered()).collect();
    let partial: Vec<_> = coverage
        .iter()
        .filter(|c| !c.is_uncovered() && (c.marine_rows == 0 || c.tide_rows == 0))
        .collect();

    if uncovered.is_empty() && partial.is_empty() {
        println!("all {} beaches have forecast coverage", coverage.len());
        return Ok(());
    }

    for c in &uncovered {
        println!(
            "NO DATA   {} (id {}) -- no marine or tide rows",
            c.beach_name, c.beach_id
        );
    }
    for c in &partial {
        println!(
            "PARTIAL   {} (id {}) -- {} marine rows, {} tide rows",
            c.beach_name, c.beach_id, c.marine_rows, c.tide_rows
        );
    }
    Ok(())
}
