// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand, ValueEnum};
use periodgen::calendar::{Calendar, CalendarDate, CalendarKind, Clock};
use periodgen::{GeneratorConfig, MonthNames, Period, PeriodGenerator, PeriodType};
use std::path::{Path, PathBuf};
use time::Date;
use time::macros::format_description;
use tracing::{debug, error, info};

/// Periodgen - generate calendar periods as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Calendar chronology. Overrides the configuration file.
    #[arg(short, long, global = true)]
    calendar: Option<CalendarKind>,

    /// Date format for formatted dates (e.g. `dd-mm-yyyy`). Overrides the configuration file.
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gregorian date to treat as today (`YYYY-MM-DD`). Defaults to the system clock.
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<Date>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the period type names
    Kinds,

    /// Generate the periods of one type
    Generate {
        /// Period type (e.g. `Monthly`)
        kind: PeriodType,

        /// Years relative to the current year
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Newest period first
        #[arg(long)]
        reverse: bool,

        /// Drop periods that lie in the future
        #[arg(long, value_enum, default_value_t = Filter::None)]
        filter: Filter,

        /// Keep only periods open for entry, allowing this many future periods
        #[arg(long, allow_negative_numbers = true)]
        open: Option<i32>,

        /// Earliest allowed start date of an open period
        #[arg(long, requires = "open")]
        window_start: Option<String>,

        /// Latest allowed end date of an open period
        #[arg(long, requires = "open")]
        window_end: Option<String>,
    },

    /// Find the period of a type that contains a date
    Lookup {
        /// Date in the selected calendar (`yyyy-mm-dd`)
        date: String,

        /// Period type
        kind: PeriodType,
    },

    /// Advance today by a number of periods
    Plus {
        /// Period type
        kind: PeriodType,

        /// Number of periods; negative goes backwards
        #[arg(allow_negative_numbers = true)]
        n: i32,
    },
}

/// Which periods to drop relative to today.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Filter {
    /// Keep everything
    #[default]
    None,
    /// Keep periods that ended before today
    Future,
    /// Keep periods that started on or before today
    FutureExceptCurrent,
}

fn parse_today(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text, format_description!("[year]-[month]-[day]"))
}

fn read_config(path: &Path) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let json: String = std::fs::read_to_string(path)?;
    let config: GeneratorConfig = GeneratorConfig::from_json(&json)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Builds the generator from the configuration file overlaid with flags.
fn create_generator(args: &Args) -> Result<PeriodGenerator, Box<dyn std::error::Error>> {
    let file_config: GeneratorConfig = args
        .config
        .as_deref()
        .map(read_config)
        .transpose()?
        .unwrap_or_default();

    let flags: GeneratorConfig = GeneratorConfig {
        calendar: args.calendar,
        date_format: args.format.clone(),
        month_names: MonthNames::new(),
    };

    let clock: Clock = args.today.map_or(Clock::System, Clock::Fixed);
    let generator: PeriodGenerator =
        PeriodGenerator::from_config(&file_config.merge(flags), clock)?;
    debug!(
        calendar = generator.calendar().name(),
        format = generator.date_format().as_str(),
        "Created period generator"
    );
    Ok(generator)
}

fn kind_names() -> Result<serde_json::Value, serde_json::Error> {
    let names: Vec<&str> = PeriodType::ALL.iter().map(PeriodType::as_str).collect();
    serde_json::to_value(names)
}

/// Runs the selected command and returns its JSON output.
fn run(args: &Args) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    // Listing names needs no calendar
    if matches!(args.command, Command::Kinds) {
        return Ok(kind_names()?);
    }

    let generator: PeriodGenerator = create_generator(args)?;
    execute(&generator, &args.command)
}

fn execute(
    generator: &PeriodGenerator,
    command: &Command,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    match command {
        Command::Kinds => Ok(kind_names()?),
        Command::Generate {
            kind,
            offset,
            reverse,
            filter,
            open,
            window_start,
            window_end,
        } => {
            let mut periods: Vec<Period> = if *reverse {
                generator.generate_reversed_periods(*kind, *offset)?
            } else {
                generator.generate_periods(*kind, *offset)?
            };

            periods = match filter {
                Filter::None => periods,
                Filter::Future => generator.filter_future_periods(&periods)?,
                Filter::FutureExceptCurrent => {
                    generator.filter_future_periods_except_current(&periods)?
                }
            };

            if let Some(n) = open {
                periods = generator.filter_open_periods(
                    *kind,
                    &periods,
                    *n,
                    window_start.as_deref(),
                    window_end.as_deref(),
                )?;
            }

            info!(kind = %kind, count = periods.len(), "Generated periods");
            Ok(serde_json::to_value(periods)?)
        }
        Command::Lookup { date, kind } => {
            let period: Option<Period> = generator.period_for_date(date, *kind)?;
            Ok(serde_json::to_value(period)?)
        }
        Command::Plus { kind, n } => {
            let date: CalendarDate = generator.today_plus_periods(*kind, *n)?;
            let formatted: String = generator
                .calendar()
                .format_date(generator.date_format(), date);
            Ok(serde_json::Value::String(formatted))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!("{err}");
            Err(err)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Runs the CLI with `today` pinned to 15 June 2024.
    fn run_with_args(extra: &[&str]) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
        let mut argv: Vec<&str> = vec!["periodgen", "--today", "2024-06-15"];
        argv.extend_from_slice(extra);
        run(&Args::try_parse_from(argv)?)
    }

    #[test]
    fn test_kinds_needs_no_calendar() {
        let output: serde_json::Value = run_with_args(&["kinds"]).unwrap();
        let names: &Vec<serde_json::Value> = output.as_array().unwrap();
        assert_eq!(names.len(), 18);
        assert_eq!(names[0], "Daily");
        assert_eq!(names[17], "FinancialNov");
    }

    #[test]
    fn test_generate_monthly() {
        let output: serde_json::Value =
            run_with_args(&["--calendar", "gregorian", "generate", "Monthly"]).unwrap();
        let periods: &Vec<serde_json::Value> = output.as_array().unwrap();
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[1]["id"], "Monthly_2024-02-01");
        assert_eq!(periods[1]["endDate"], "2024-02-29");
    }

    #[test]
    fn test_generate_with_negative_offset_and_reverse() {
        let output: serde_json::Value = run_with_args(&[
            "-c",
            "gregorian",
            "generate",
            "Quarterly",
            "--offset",
            "-1",
            "--reverse",
        ])
        .unwrap();
        assert_eq!(output[0]["iso"], "2023Q4");
        assert_eq!(output[3]["iso"], "2023Q1");
    }

    #[test]
    fn test_generate_with_filters() {
        let past: serde_json::Value = run_with_args(&[
            "-c", "gregorian", "generate", "Monthly", "--filter", "future",
        ])
        .unwrap();
        assert_eq!(past.as_array().unwrap().len(), 5);

        let started: serde_json::Value = run_with_args(&[
            "-c",
            "gregorian",
            "generate",
            "Monthly",
            "--filter",
            "future-except-current",
        ])
        .unwrap();
        assert_eq!(started.as_array().unwrap().len(), 6);

        let open: serde_json::Value = run_with_args(&[
            "-c",
            "gregorian",
            "generate",
            "Monthly",
            "--open",
            "2",
            "--window-start",
            "2024-03-01",
        ])
        .unwrap();
        assert_eq!(open.as_array().unwrap().len(), 5);
        assert_eq!(open[0]["iso"], "202403");
    }

    #[test]
    fn test_window_requires_open() {
        let result = Args::try_parse_from([
            "periodgen",
            "generate",
            "Monthly",
            "--window-start",
            "2024-03-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup() {
        let found: serde_json::Value =
            run_with_args(&["-c", "gregorian", "lookup", "2024-12-31", "Weekly"]).unwrap();
        assert_eq!(found["iso"], "2025W1");

        let missing: serde_json::Value =
            run_with_args(&["-c", "ethiopian", "lookup", "2016-13-03", "Monthly"]).unwrap();
        assert!(missing.is_null());
    }

    #[test]
    fn test_plus_uses_format() {
        let output: serde_json::Value = run_with_args(&[
            "-c",
            "gregorian",
            "-f",
            "dd/mm/yyyy",
            "plus",
            "Monthly",
            "-2",
        ])
        .unwrap();
        assert_eq!(output, "15/04/2024");
    }

    #[test]
    fn test_missing_calendar_is_an_error() {
        let err = run_with_args(&["generate", "Monthly"]).unwrap_err();
        assert_eq!(err.to_string(), "A calendar is required to generate periods");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Args::try_parse_from(["periodgen", "generate", "Hourly"]).is_err());
    }

    #[test]
    fn test_bad_today_is_rejected() {
        assert!(Args::try_parse_from(["periodgen", "--today", "15/06/2024", "kinds"]).is_err());
    }

    #[test]
    fn test_config_file_with_flag_override() {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "periodgen-cli-config-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"calendar": "ethiopian", "dateFormat": "dd-mm-yyyy",
                "monthNames": {"Meskerem": "Mäskäräm"}}"#,
        )
        .unwrap();
        let config: &str = path.to_str().unwrap();

        let from_file: serde_json::Value =
            run_with_args(&["--config", config, "generate", "Monthly"]).unwrap();
        assert_eq!(from_file[0]["name"], "Mäskäräm 2016");
        assert_eq!(from_file[0]["startDate"], "01-01-2016");

        let overridden: serde_json::Value = run_with_args(&[
            "--config", config, "-c", "gregorian", "generate", "Monthly",
        ])
        .unwrap();
        assert_eq!(overridden[0]["startDate"], "01-01-2024");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(
            run_with_args(&["--config", "/nonexistent/periodgen.json", "generate", "Daily"])
                .is_err()
        );
    }
}
