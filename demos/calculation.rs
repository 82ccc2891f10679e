use chrono::NaiveDate;
use chrono_tz::Asia::Jakarta;

use prayer_times::angles::{julian_day, sun_position};
use prayer_times::format::format_hm;
use prayer_times::prayer::calculate_in_zone;
use prayer_times::KEMENAG;

fn main() {
    let latitude = -6.2851291;
    let longitude = 106.9814968;
    let Some(date) = NaiveDate::from_ymd_opt(2025, 11, 21) else {
        return;
    };

    let jd = julian_day(2025, 11, 21);
    let sun = sun_position(jd);

    println!("=== Prayer Time Calculation Example ===");
    println!(
        "Location: Bekasi, ID ({:.4}°S, {:.4}°E)",
        -latitude, longitude
    );
    println!("Date: {}", date);
    println!();
    println!("--- Solar Position ---");
    println!("Julian Day: {:.1}", jd);
    println!("Declination: {:.4}°", sun.declination);
    println!("Equation of Time: {:.2} minutes", sun.equation_of_time * 60.0);
    println!();

    match calculate_in_zone(date, latitude, longitude, &Jakarta, &KEMENAG) {
        Ok(times) => {
            println!("--- Prayer Times (WIB) ---");
            for (prayer, hours) in times.iter() {
                println!("{:<7} = {}", prayer.label(), format_hm(hours));
            }
        }
        Err(e) => println!("no schedule: {e}"),
    }
}
