//! Solar calculations from chrono date-times, with time zones resolved by chrono-tz.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use chrono_tz::America::Denver;
use noaa_solar::noaa;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let latitude = 40.0;
    let longitude = -105.0;

    // The zone supplies MST in winter and MDT in summer
    for (month, day) in [(1, 1), (3, 20), (6, 21), (9, 22), (12, 21)] {
        let noon = Denver
            .with_ymd_and_hms(2010, month, day, 12, 0, 0)
            .single()
            .ok_or("ambiguous local time")?;
        let label = noon.format("%Y-%m-%d (UTC%:z)").to_string();
        let times = noaa::solar_time_of_day_at(noon, latitude, longitude)?;

        println!(
            "{label}: sunrise {}, solar noon {}, sunset {}",
            times.sunrise().map_or_else(|| "none".to_string(), |t| t.to_string()),
            times.solar_noon(),
            times.sunset().map_or_else(|| "none".to_string(), |t| t.to_string()),
        );
    }

    // Hourly positions from a fixed-offset timestamp
    let start = "2010-06-21T05:00:00-06:00".parse::<DateTime<FixedOffset>>()?;
    println!("\nHourly positions on {}:", start.format("%Y-%m-%d"));
    for hour in 0..16 {
        let datetime = start + Duration::hours(hour);
        let position = noaa::solar_position_at(datetime, latitude, longitude)?;
        println!(
            "  {}  azimuth {:7.2}°  elevation {:6.2}°",
            datetime.format("%H:%M"),
            position.azimuth(),
            position.corrected_elevation_angle()
        );
    }

    Ok(())
}
