//! Human-friendly report rendering.

use chrono::Local;
use nowcast_core::WeatherReport;

pub fn print_report(report: &WeatherReport) {
    let stamp = Local::now().format("%d/%m/%Y %H:%M");
    let condition = report.primary_condition();
    let category = report.category();
    let theme = category.theme();

    println!("{}  ({stamp})", report.location_name);
    println!("{category}, {}  [{}]", condition.description, theme.icon);
    println!();
    println!(
        "  temperature  {:.1} C  (feels like {:.1} C, {} F)",
        report.current_celsius(),
        report.feels_like_celsius(),
        report.current_fahrenheit(),
    );
    println!(
        "  day / night  {:.1} C / {:.1} C",
        report.max_celsius(),
        report.min_celsius(),
    );
    println!("  pressure     {} hPa", report.pressure_hpa);
    println!("  humidity     {}%", report.humidity_pct);
    println!(
        "  wind         {} m/s from {} deg",
        report.wind.speed_mps, report.wind.direction_deg
    );
    // Sunrise stays a raw epoch; only sunset renders as local time.
    println!("  sunrise      {}", report.sun.sunrise_epoch);
    match report.sunset_local_time() {
        Some(time) => println!("  sunset       {time}"),
        None => println!("  sunset       {}", report.sun.sunset_epoch),
    }
}
