use std::{
    env,
    io::{self, Write},
};

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};

use calgrid::{
    app::AppState,
    calendar::{month::WEEKDAY_LABELS, DisplayedMonth},
    ui::month_view::calculate_layout,
};

pub const USAGE: &str = "Usage: calgrid [--month YYYY/MM] [--print]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive { month: Option<DisplayedMonth> },
    Print { month: Option<DisplayedMonth> },
    Help,
}

pub fn parse_cli_mode() -> anyhow::Result<CliMode> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> anyhow::Result<CliMode>
where
    I: IntoIterator<Item = String>,
{
    let mut print = false;
    let mut month = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => print = true,
            "--month" => {
                let value = args.next().ok_or_else(|| anyhow!("--month needs a value like 2024/02"))?;
                month = Some(parse_month(&value)?);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => bail!("Unknown argument: {}", arg),
        }
    }

    if print {
        Ok(CliMode::Print { month })
    } else {
        Ok(CliMode::Interactive { month })
    }
}

fn parse_month(value: &str) -> anyhow::Result<DisplayedMonth> {
    let date = NaiveDate::parse_from_str(&format!("{}/01", value), "%Y/%m/%d")
        .with_context(|| format!("Invalid month '{}'. Use YYYY/MM.", value))?;
    Ok(DisplayedMonth::containing(date))
}

pub fn run_print_mode(month: Option<DisplayedMonth>) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let state = match month {
        Some(month) => AppState::starting_at(month),
        None => AppState::new(),
    };
    let text = format_month_text(&state, today);

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("writing month grid")?;
    stdout.flush().context("flushing stdout")?;
    Ok(())
}

/// Plain text rendering of the grid. Today carries a `*` after the day number
/// and days with events carry their badge.
pub fn format_month_text(state: &AppState, today: NaiveDate) -> String {
    let layout = calculate_layout(state, today);
    let mut lines = Vec::new();

    lines.push(format!("{:^49}", state.displayed.label()).trim_end().to_string());
    lines.push(
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!(" {:<6}", label))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    for week in &layout.weeks {
        let row: String = week
            .days
            .iter()
            .map(|cell| match cell.day {
                Some(day) => format!(
                    " {:>2}{}{:<3}",
                    day,
                    if cell.is_today { '*' } else { ' ' },
                    cell.badge().unwrap_or_default()
                ),
                None => " ".repeat(7),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid::calendar::EventDraft;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_interactive_current_month() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliMode::Interactive { month: None });
    }

    #[test]
    fn month_and_print_flags_combine() {
        let mode = parse_args(args(&["--month", "2024/02", "--print"])).unwrap();
        assert_eq!(mode, CliMode::Print { month: DisplayedMonth::new(2024, 1) });
    }

    #[test]
    fn bad_month_is_an_error() {
        assert!(parse_args(args(&["--month", "2024/13"])).is_err());
        assert!(parse_args(args(&["--month"])).is_err());
    }

    #[test]
    fn unknown_argument_is_an_error() {
        let err = parse_args(args(&["--watch"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown argument: --watch");
    }

    #[test]
    fn help_flag_short_circuits() {
        assert_eq!(parse_args(args(&["--help", "--bogus"])).unwrap(), CliMode::Help);
    }

    #[test]
    fn print_renders_february_2024() {
        let mut state = AppState::starting_at(DisplayedMonth::new(2024, 1).unwrap());
        state.select_day(29);
        state.form.draft = EventDraft::new("Checkup");
        state.submit_event();

        let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let text = format_month_text(&state, today);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].trim(), "February 2024");
        assert_eq!(lines[1], " Sun    Mon    Tue    Wed    Thu    Fri    Sat");
        assert_eq!(lines[2], "                              1      2      3");
        assert_eq!(lines[4], " 11     12     13     14*    15     16     17");
        assert_eq!(lines[6], " 25     26     27     28     29 1");
        assert_eq!(lines.len(), 7);
    }
}
