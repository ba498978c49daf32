use clap::Parser;

use crate::render::ColorMode;

/// dayjot — one draft per day, autosaved while you write
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the journal root directory
    #[arg(long, short, exclusive = true)]
    pub path: bool,
    /// Lists the activities you can pick with `--activity`.
    #[arg(long, exclusive = true)]
    pub activities: bool,
    /// Prints the draft stored for a day (e.g., `dayjot --on yesterday`, `dayjot --on 2024-03-15`)
    #[arg(long, conflicts_with_all = ["month", "route", "date", "activity"])]
    pub on: Option<String>,
    /// Shows a month calendar marking days that have a draft (`YYYY-MM`, defaults to this month).
    #[arg(long, num_args = 0..=1, default_missing_value = "", conflicts_with_all = ["route", "date", "activity"])]
    pub month: Option<String>,
    /// Opens the entry behind a journal route (e.g., `--route "/Journal?date=2024-03-15"`).
    #[arg(long, conflicts_with = "date")]
    pub route: Option<String>,
    /// Something you did that day. Repeat for several (e.g., `-a Activity1 -a Activity3`).
    #[arg(long, short)]
    pub activity: Vec<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Day to write about (e.g., `today`, `yesterday`, `friday`, `2024-03-15`). Defaults to today.
    #[arg()]
    pub date: Option<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
