use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use date_span_engine::{
    mode_buttons, parse_timezone, parse_weekday_list, CalculatorMode, DateDifferenceForm,
    Dispatch, FormEvent, ResultPanel, DEFAULT_TIME, DEFAULT_TIMEZONE,
};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[derive(Parser)]
#[command(name = "datespan")]
#[command(about = "Days and hours between two dates", long_about = None)]
#[command(version)]
struct Cli {
    /// IANA timezone the dates and times are entered in
    #[arg(long, global = true, env = "DATESPAN_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the days and hours between two dates
    Between(BetweenArgs),
    /// Apply newline-delimited JSON form events, then show the result
    Replay {
        /// Event file (reads stdin if omitted or "-")
        input: Option<PathBuf>,
    },
    /// List the calculator mode buttons
    Modes,
}

#[derive(clap::Args)]
struct BetweenArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Start time (HH:MM)
    #[arg(long, default_value = DEFAULT_TIME)]
    start_time: String,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// End time (HH:MM)
    #[arg(long, default_value = DEFAULT_TIME)]
    end_time: String,

    /// Count the end day as well
    #[arg(long)]
    include_end_day: bool,

    /// Include every day of the week (hides the day selection)
    #[arg(long)]
    include_all_days: bool,

    /// Days to include, e.g. "M,W,F" or "Sa,Su"
    #[arg(long)]
    days: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let tz = parse_timezone(&cli.timezone)?;
    let mut form = DateDifferenceForm::new(tz);

    match cli.command {
        Commands::Between(args) => {
            for event in between_events(args)? {
                apply(&mut form, event)?;
            }
            print_result(&form, cli.format)
        }
        Commands::Replay { input } => {
            let text = read_input(input)?;
            for (index, line) in text.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let event: FormEvent = serde_json::from_str(line)
                    .with_context(|| format!("invalid event on line {}", index + 1))?;
                if let Err(e) = form.handle(event) {
                    tracing::warn!(line = index + 1, "calculation failed: {e}");
                }
            }
            print_result(&form, cli.format)
        }
        Commands::Modes => print_modes(&form, cli.format),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// The clicks a user would make to fill the form from `args`.
fn between_events(args: BetweenArgs) -> Result<Vec<FormEvent>> {
    let mut events = vec![FormEvent::PressMode(CalculatorMode::DaysBetween)];
    if let Some(date) = args.start_date {
        events.push(FormEvent::SetStartDate(date));
    }
    events.push(FormEvent::SetStartTime(args.start_time));
    if let Some(date) = args.end_date {
        events.push(FormEvent::SetEndDate(date));
    }
    events.push(FormEvent::SetEndTime(args.end_time));

    if let Some(days) = args.days {
        let selection = parse_weekday_list(&days).context("invalid --days")?;
        events.extend(selection.iter().map(FormEvent::ToggleWeekday));
    }
    if args.include_all_days {
        events.push(FormEvent::ToggleIncludeAllDays);
    }
    if args.include_end_day {
        events.push(FormEvent::ToggleIncludeEndDay);
    }
    events.push(FormEvent::Calculate);
    Ok(events)
}

fn apply(form: &mut DateDifferenceForm, event: FormEvent) -> Result<()> {
    let description = format!("{event:?}");
    if form.handle(event)? == Dispatch::Ignored {
        tracing::debug!(event = %description, "event ignored");
    }
    Ok(())
}

fn read_input(path: Option<PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_result(form: &DateDifferenceForm, format: OutputFormat) -> Result<()> {
    let panel = ResultPanel::from_form(form);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&panel)?),
        OutputFormat::Text => match panel {
            Some(panel) => println!("{panel}"),
            None => println!("No result: enter both a start date and an end date."),
        },
    }
    Ok(())
}

fn print_modes(form: &DateDifferenceForm, format: OutputFormat) -> Result<()> {
    let buttons = mode_buttons(form);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&buttons)?),
        OutputFormat::Text => {
            for button in buttons {
                let state = if button.enabled { "" } else { " (disabled)" };
                let check = if button.selected { " \u{2713}" } else { "" };
                println!("{}{check}{state}", button.label);
            }
        }
    }
    Ok(())
}
