// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Semana project*
//!
//! Print a life as weeks, or the details of a single week, from a JSON file
//! holding a profile and its entries
//!

use clap::{CommandFactory, Parser, ValueEnum, builder::PossibleValue};
use semana_core::{
    Category, Date, LifeData, Week, format_date, group_by_year, week_index_for_date,
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Semana entry point
///
/// One of:
/// - Print the whole life as a grid of weeks
/// - Print the details of one week (by index or date)
/// - Print the details of the current week
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new().add_filter_allow_str("semana").build();
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        args.log_level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    // Load the life data
    let life_data = match LifeData::load(&args.data) {
        Ok(life_data) => life_data,
        Err(error) => {
            eprintln!("Error loading {}: {error}", args.data.display());
            std::process::exit(1);
        }
    };

    // Resolve "now" once, so every week agrees on it
    let now = args.now.unwrap_or_else(Date::today);
    debug!("Now = {now}");
    let weeks = life_data.weeks(Some(now));

    // Check the options
    match (&args.cli_command, args.index, args.date) {
        //----------------------------------------------------------------------
        // Valid
        //----------------------------------------------------------------------
        (Command::Grid, None, None) => print_grid(&weeks, now),
        (Command::Week, Some(index), None) => match weeks.get(index as usize) {
            Some(week) => print_week(week, now),
            None => {
                eprintln!("Error: there are only {} weeks", weeks.len());
                std::process::exit(1);
            }
        },
        (Command::Week, None, Some(date)) => {
            let index = week_index_for_date(&life_data.profile, date);
            print_week(&weeks[index as usize], now)
        }
        (Command::Today, None, None) => {
            let index = week_index_for_date(&life_data.profile, now);
            print_week(&weeks[index as usize], now)
        }
        //----------------------------------------------------------------------
        // Invalid
        //----------------------------------------------------------------------
        _ => {
            eprintln!("CLI Error: invalid options");
            if let Err(error) = Cli::command().print_long_help() {
                eprintln!("Error printing help: {error}");
            }
            std::process::exit(1);
        }
    }
}

/// One line per calendar year, one character per week
fn print_grid(weeks: &[Week], now: Date) {
    for (year, weeks) in group_by_year(weeks) {
        let row: String = weeks.iter().map(|week| week_symbol(week, now)).collect();
        println!("{year} {row}");
    }
    println!();
    println!("@ now   · empty   W work   E education   V event   R relationship   C custom");
}

/// The week's grid character (the first entry wins, like its colour)
fn week_symbol(week: &Week, now: Date) -> char {
    if week.contains(now) {
        return '@';
    }
    match week.entries.first().map(|entry| entry.category()) {
        None => '·',
        Some(Category::Work) => 'W',
        Some(Category::Education) => 'E',
        Some(Category::Event) => 'V',
        Some(Category::Relationship) => 'R',
        Some(Category::Custom) => 'C',
    }
}

/// The week's dates, age, and entries
fn print_week(week: &Week, now: Date) {
    let age = week.age();
    println!(
        "Week {} ({} - {})",
        week.week_of_life(),
        format_date(week.start_date),
        format_date(week.end_date)
    );
    println!("Age: {} years, {} weeks", age.years, age.weeks);
    println!("Colour: {}", week.display_colour());
    if week.contains(now) {
        println!("This is the current week");
    }

    if week.entries.is_empty() {
        println!("No life events");
        return;
    }

    println!();
    println!("LIFE EVENTS");
    for entry in &week.entries {
        let end = entry
            .end_date()
            .map(format_date)
            .unwrap_or_else(|| String::from("Present"));
        println!(
            "- {} [{}] {} - {}",
            entry.title(),
            entry.category(),
            format_date(entry.start_date()),
            end
        );
        if let Some(description) = entry.description() {
            println!("  {description}");
        }
    }
}

/// Semana CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lay a life out as weeks",
    after_help = "The data file holds {\"profile\": {...}, \"entries\": [...]}"
)]
pub struct Cli {
    // What to print
    #[arg(value_enum)]
    pub cli_command: Command,

    /// Path to the JSON life data
    #[arg(long)]
    pub data: PathBuf,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    pub now: Option<Date>,

    /// Week index (for `week`)
    #[arg(long)]
    pub index: Option<u32>,

    /// Any date in the week (YYYY-MM-DD, for `week`)
    #[arg(long)]
    pub date: Option<Date>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone)]
pub enum Command {
    Grid,
    Week,
    Today,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Grid, Self::Week, Self::Today]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Grid => {
                Some(PossibleValue::new("grid").help("Print every week, one row per year"))
            }
            Command::Week => Some(
                PossibleValue::new("week").help("Print one week, chosen by --index or --date"),
            ),
            Command::Today => Some(PossibleValue::new("today").help("Print the current week")),
        }
    }
}
