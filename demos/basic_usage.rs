//! Basic solar position and sunrise/sunset calculation example.

use noaa_solar::{Instant, Location, SolarTimeOfDay, noaa};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Boulder, Colorado on Mountain Standard Time
    let location = Location::new(40.0, -105.0, -7.0)?;
    let instant = Instant::new(2010, 1, 1, 12, 0, 0)?;

    let (position, times) = noaa::solar_position_and_time(&location, &instant);

    println!(
        "Solar position for {:.2}°, {:.2}° (UTC{:+}) at {instant}:",
        location.latitude(),
        location.longitude(),
        location.utc_offset_hours()
    );
    println!("  Azimuth: {:.3}°", position.azimuth());
    println!("  Elevation: {:.3}°", position.elevation_angle());
    println!(
        "  Corrected elevation: {:.3}° (refraction {:.4}°)",
        position.corrected_elevation_angle(),
        position.refraction()
    );
    println!("  Zenith angle: {:.3}°", position.zenith_angle());

    if position.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    println!("\nSolar times:");
    match times {
        SolarTimeOfDay::RegularDay {
            sunrise,
            solar_noon,
            sunset,
            sunlight_duration_minutes,
        } => {
            println!("  Sunrise: {sunrise}");
            println!("  Solar noon: {solar_noon}");
            println!("  Sunset: {sunset}");
            println!(
                "  Sunlight duration: {sunlight_duration_minutes:.1} min ({:.2} h)",
                sunlight_duration_minutes / 60.0
            );
        }
        SolarTimeOfDay::AllDay { solar_noon } => {
            println!("  Sun never sets (solar noon {solar_noon})");
        }
        SolarTimeOfDay::AllNight { solar_noon } => {
            println!("  Sun never rises (solar noon {solar_noon})");
        }
    }

    Ok(())
}
