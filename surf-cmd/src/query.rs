//! Read-only inspection subcommands over the static tables.

use crate::source::{SourceArgs, Table};
use surf_data::BeachDetails;
use surf_db::Database;
use surf_forecast::{calculate_rating, daily_marks, interpolate_hourly, ForecastWindow};
use surf_utils::units;

/// Load the beach table into a database and return both.
async fn load_beaches(source: &SourceArgs) -> anyhow::Result<(Database, Vec<BeachDetails>)> {
    let csv = source.load(Table::BeachDetails).await?;
    let db = Database::new()?;
    db.load_beaches(&csv)?;
    let beaches = db.query_beaches()?;
    Ok((db, beaches))
}

fn find_beach(beaches: &[BeachDetails], beach_id: u32) -> anyhow::Result<BeachDetails> {
    beaches
        .iter()
        .find(|b| b.beach_id == beach_id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no beach with id {beach_id}"))
}

pub async fn run_beaches(source: &SourceArgs) -> anyhow::Result<()> {
    let (_db, beaches) = load_beaches(source).await?;
    println!("{:>4}  {:<24} {:<20} {}", "ID", "NAME", "AREA", "REGION");
    for beach in &beaches {
        println!(
            "{:>4}  {:<24} {:<20} {}, {}",
            beach.beach_id, beach.beach_name, beach.area, beach.region, beach.country
        );
    }
    println!("{} beaches", beaches.len());
    Ok(())
}

pub async fn run_conditions(source: &SourceArgs, beach_id: u32) -> anyhow::Result<()> {
    let (db, beaches) = load_beaches(source).await?;
    let beach = find_beach(&beaches, beach_id)?;

    let marine_csv = source.load(Table::MarineObservations).await?;
    db.load_marine_observations(&marine_csv)?;

    let marine = db.query_marine_for_beach(beach_id)?;
    let window = ForecastWindow::build(&marine, &[], &beach);
    if window.marine.is_empty() {
        println!("No marine data for {} in its window", beach.beach_name);
        return Ok(());
    }

    if let Some(latest) = db.query_latest_observation(beach_id)? {
        println!(
            "latest observation: {} ({:.1}m wave, {:.1} m/s wind)",
            latest.date_time.format("%Y-%m-%d %H:%M"),
            latest.wave_height,
            latest.wind_speed
        );
    }

    println!(
        "{} -- {} hourly rows over {} days",
        beach.beach_name,
        window.marine.len(),
        window.days.len()
    );
    println!(
        "{:<17} {:>7} {:>7} {:>9} {:>6}  {}",
        "TIME", "WAVE", "PERIOD", "WIND", "DIR", "RATING"
    );
    for row in &window.marine {
        let rating = calculate_rating(
            row.wave_height,
            row.wind_speed,
            row.wind_direction,
            row.wave_direction,
        );
        println!(
            "{:<17} {:>6.1}m {:>6.0}s {:>5.1}m/s {:>6}  {}",
            row.date_time.format("%Y-%m-%d %H:%M"),
            row.wave_height,
            row.wave_period,
            row.wind_speed,
            units::compass_direction(row.wind_direction),
            rating
        );
    }
    Ok(())
}

pub async fn run_tides(source: &SourceArgs, beach_id: u32) -> anyhow::Result<()> {
    let (db, beaches) = load_beaches(source).await?;
    let beach = find_beach(&beaches, beach_id)?;

    let tide_csv = source.load(Table::TideExtrema).await?;
    db.load_tides(&tide_csv)?;

    let tides = db.query_tides_for_beach(beach_id)?;
    let window = ForecastWindow::build(&[], &tides, &beach);
    if window.tides.is_empty() {
        println!("No tide data for {} in its window", beach.beach_name);
        return Ok(());
    }

    println!("{} -- recorded extrema:", beach.beach_name);
    for extremum in &window.tides {
        println!(
            "  {}  {:<4} {:>5.2}m",
            extremum.tide_time.format("%Y-%m-%d %H:%M"),
            extremum.tide_type.to_string(),
            extremum.tide_height
        );
    }

    let curve = interpolate_hourly(&window.tides);
    println!("interpolated hourly curve ({} points):", curve.len());
    for point in &curve {
        println!(
            "  {}  {:>5.2}m",
            point.time.format("%Y-%m-%d %H:%M"),
            point.height
        );
    }

    for mark in daily_marks(&curve) {
        println!(
            "{}: high {:.2}m at {}, low {:.2}m at {}",
            mark.day,
            mark.high.height,
            mark.high.time.format("%H:%M"),
            mark.low.height,
            mark.low.time.format("%H:%M")
        );
    }
    Ok(())
}
