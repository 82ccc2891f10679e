use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use prayer_times::{
    daily_schedule, format_hm, format_hms, generate_timetable, validate, Convention,
    DailySchedule, Location, Prayer, TimetableConfig, KEMENAG,
};

#[derive(Parser)]
#[command(
    name = "prayer-times",
    about = "Daily prayer times (Kemenag method)",
    version,
    disable_version_flag = true,
    allow_negative_numbers = true,
    after_help = "Example: prayer-times 2025 11 21 -6.2851291 106.9814968 +7.0"
)]
struct Cli {
    year: i32,
    month: u32,
    day: u32,
    /// Degrees, positive north
    latitude: f64,
    /// Degrees, positive east
    longitude: f64,
    /// UTC offset in hours
    timezone: f64,
    /// Print HH:MM:SS instead of HH:MM
    #[arg(long)]
    seconds: bool,
    /// Print every day of the month
    #[arg(long = "month")]
    month_table: bool,
    /// TOML file overriding the Kemenag constants
    #[arg(long)]
    convention: Option<PathBuf>,
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn render(hours: Option<f64>, seconds: bool) -> String {
    match (hours, seconds) {
        (Some(h), false) => format_hm(h),
        (Some(h), true) => format_hms(h),
        (None, false) => "--:--".to_string(),
        (None, true) => "--:--:--".to_string(),
    }
}

fn print_day(schedule: &DailySchedule, seconds: bool) {
    for (prayer, time) in schedule.iter() {
        println!("{:<7} = {}", prayer.label(), render(time, seconds));
    }
}

fn print_month(config: &TimetableConfig, convention: &Convention, seconds: bool) {
    let table = generate_timetable(config, convention);
    let header: Vec<String> = Prayer::ALL
        .iter()
        .map(|p| format!("{:>8}", p.label()))
        .collect();
    println!("{:<10} {}", "Date", header.join(" "));
    for day in &table.days {
        let cells: Vec<String> = day
            .schedule
            .iter()
            .map(|(_, t)| format!("{:>8}", render(t, seconds)))
            .collect();
        println!("{:<10} {}", day.date, cells.join(" "));
    }
}

fn check_inputs(cli: &Cli) -> Result<Location, String> {
    let invalid = |field: &str, value: String| format!("Invalid {field}: {value}");
    validate::year(cli.year).map_err(|_| invalid("year", cli.year.to_string()))?;
    validate::month(cli.month).map_err(|_| invalid("month", cli.month.to_string()))?;
    validate::day(cli.day).map_err(|_| invalid("day", cli.day.to_string()))?;
    let latitude = validate::latitude(cli.latitude)
        .map_err(|_| invalid("latitude", cli.latitude.to_string()))?;
    let longitude = validate::longitude(cli.longitude)
        .map_err(|_| invalid("longitude", cli.longitude.to_string()))?;
    let utc_offset = validate::utc_offset(cli.timezone)
        .map_err(|_| invalid("timezone", cli.timezone.to_string()))?;
    Ok(Location::new(latitude, longitude, utc_offset))
}

fn run(cli: Cli, location: Location) -> anyhow::Result<()> {
    let convention = match &cli.convention {
        Some(path) => Convention::load(path)
            .with_context(|| format!("loading convention {}", path.display()))?,
        None => KEMENAG,
    };

    if cli.month_table {
        let config = TimetableConfig {
            latitude: location.latitude,
            longitude: location.longitude,
            utc_offset: location.utc_offset,
            year: cli.year,
            month: Some(cli.month),
        };
        print_month(&config, &convention, cli.seconds);
    } else {
        let schedule = daily_schedule(cli.year, cli.month, cli.day, &location, &convention);
        print_day(&schedule, cli.seconds);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // the rendered clap error already names the offending argument
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let location = match check_inputs(&cli) {
        Ok(location) => location,
        Err(msg) => {
            println!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, location) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
