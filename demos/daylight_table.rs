//! Sunlight duration over a range of months, drawn as a text bar chart.
//!
//! Reads a TOML file such as:
//!
//! ```toml
//! [location]
//! latitude = 40.0
//! longitude = -105.0
//! utc_offset_hours = -7.0
//!
//! [table]
//! year = 2024
//! first_month = 1
//! last_month = 12
//! every_n_days = 7
//! ```
//!
//! Usage: `cargo run --example daylight_table --features serde -- [config.toml]`

use noaa_solar::{Instant, Location, SolarTimeOfDay, noaa, time::days_in_month};
use serde::Deserialize;
use std::fs;

const DEFAULT_CONFIG: &str = r#"
[location]
latitude = 40.0
longitude = -105.0
utc_offset_hours = -7.0

[table]
year = 2024
first_month = 1
last_month = 12
"#;

const BAR_WIDTH: f64 = 48.0;

#[derive(Deserialize)]
struct Config {
    location: Location,
    table: TableParameters,
}

#[derive(Deserialize)]
struct TableParameters {
    year: i32,
    first_month: u32,
    last_month: u32,
    #[serde(default = "default_every_n_days")]
    every_n_days: usize,
}

fn default_every_n_days() -> usize {
    7
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let toml = match path {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_CONFIG.to_string(),
    };
    let config: Config = toml::from_str(&toml)?;

    let table = &config.table;
    if table.first_month > table.last_month || table.every_n_days == 0 {
        return Err("month range is empty or step is zero".into());
    }
    Ok(config)
}

fn describe(times: &SolarTimeOfDay) -> String {
    match times {
        SolarTimeOfDay::RegularDay { sunrise, sunset, .. } => {
            format!("{:>8} {:>8}", sunrise.to_string(), sunset.to_string())
        }
        SolarTimeOfDay::AllDay { .. } => format!("{:>17}", "midnight sun"),
        SolarTimeOfDay::AllNight { .. } => format!("{:>17}", "polar night"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref())?;
    let table = &config.table;

    let start = Instant::new(table.year, table.first_month, 1, 12, 0, 0)?;
    let days: u32 = (table.first_month..=table.last_month)
        .map(|month| days_in_month(table.year, month))
        .sum::<Result<u32, _>>()?;

    let series: Vec<(Instant, SolarTimeOfDay)> =
        noaa::solar_times_for_days(&config.location, start, days as usize).collect();

    println!(
        "Sunlight at {:.2}°, {:.2}° (UTC{:+}), {}",
        config.location.latitude(),
        config.location.longitude(),
        config.location.utc_offset_hours(),
        table.year
    );
    println!("{:<10} {:>8} {:>8} {:>7}", "date", "sunrise", "sunset", "hours");

    for (instant, times) in series.iter().step_by(table.every_n_days) {
        let minutes = times.sunlight_duration_minutes();
        let bar = "#".repeat((minutes / 1440.0 * BAR_WIDTH).round() as usize);
        println!(
            "{:04}-{:02}-{:02} {} {:>7.2} {bar}",
            instant.year(),
            instant.month(),
            instant.day(),
            describe(times),
            minutes / 60.0
        );
    }

    let by_duration = |a: &&(Instant, SolarTimeOfDay), b: &&(Instant, SolarTimeOfDay)| {
        a.1.sunlight_duration_minutes()
            .total_cmp(&b.1.sunlight_duration_minutes())
    };
    if let (Some(shortest), Some(longest)) = (
        series.iter().min_by(by_duration),
        series.iter().max_by(by_duration),
    ) {
        println!(
            "\nShortest day: {} ({:.1} min)",
            shortest.0,
            shortest.1.sunlight_duration_minutes()
        );
        println!(
            "Longest day:  {} ({:.1} min)",
            longest.0,
            longest.1.sunlight_duration_minutes()
        );
    }

    Ok(())
}
