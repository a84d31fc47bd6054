//! Day/night cycle driver: steps local time forward and prints the direction of sunlight.
//!
//! A scene rotating a directional light would apply these vectors each frame. The orbital
//! state is built once per calendar day and reused for every step within it.
//!
//! Usage: `cargo run --example day_night_cycle -- [step_minutes] [days]`

use noaa_solar::{Instant, Location, OrbitalState, SolarPosition, noaa};

/// Distance of the light from the scene origin.
const LIGHT_RADIUS: f64 = 100.0;

/// Rotation of the scene's forward axis relative to true north, in degrees.
const NORTH_OFFSET_DEGREES: f64 = 0.0;

/// Light position in scene coordinates: y up, z towards north (after the offset).
fn light_position(position: &SolarPosition) -> [f64; 3] {
    let elevation = position.corrected_elevation_angle().to_radians();
    let heading = (180.0 - position.azimuth() + NORTH_OFFSET_DEGREES).to_radians();

    [
        LIGHT_RADIUS * elevation.cos() * heading.sin(),
        LIGHT_RADIUS * elevation.sin(),
        LIGHT_RADIUS * elevation.cos() * heading.cos(),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let step_minutes: u32 = args.next().map_or(Ok(30), |arg| arg.parse())?;
    let days: u32 = args.next().map_or(Ok(1), |arg| arg.parse())?;
    if step_minutes == 0 || step_minutes > 1440 {
        return Err("step must be between 1 and 1440 minutes".into());
    }

    // Vienna on Central European Summer Time
    let location = Location::new(48.21, 16.37, 2.0)?;
    let mut date = Instant::from_date(2024, 6, 20)?;

    println!("{:<20} {:>9} {:>9} {:>9} {:>9} {:>9}", "local time", "azimuth", "elevation", "x", "y", "z");

    for _ in 0..days {
        let mut state: Option<OrbitalState> = None;

        for minute in (0..1440).step_by(step_minutes as usize) {
            let instant = date.with_time(minute / 60, minute % 60, 0)?;
            let state = state.get_or_insert_with(|| noaa::orbital_state(&location, &instant));
            let position = noaa::solar_position_with_orbital_state(state, &instant)?;
            let [x, y, z] = light_position(&position);

            println!(
                "{:<20} {:>9.3} {:>9.3} {:>9.2} {:>9.2} {:>9.2}{}",
                instant.to_string(),
                position.azimuth(),
                position.corrected_elevation_angle(),
                x,
                y,
                z,
                if position.is_sun_up() { "" } else { "  (night)" }
            );
        }

        date = date.next_day().ok_or("date range exhausted")?;
    }

    Ok(())
}
