use super::theme::OneDark;
use chrono::{Datelike, NaiveDate};
use dayjot_core::{ActivityCatalog, ActivitySelection, CalendarMonth, DateKey};
use termimad::{
    MadSkin,
    crossterm::style::Stylize,
};

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%A, %d %b %Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// `# Friday, 15 Mar 2024` followed by the draft itself.
    pub fn print_draft(&self, key: &DateKey, content: &str) {
        let header = format!("# {}", key.date().format(&self.opts.date_format));
        let body = content.trim_end();
        if body.is_empty() {
            self.print_md(&format!("{header}\n\n*(empty)*"));
        } else {
            self.print_md(&format!("{header}\n\n{body}"));
        }
    }

    /// "Today I did..." followed by the selected activities as tags.
    pub fn print_activities(&self, selection: &ActivitySelection) {
        let tags = selection
            .labels()
            .iter()
            .map(|l| {
                if self.opts.use_color {
                    format!("[{l}]").with(OneDark::GREEN).to_string()
                } else {
                    format!("[{l}]")
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        println!("Today I did... {tags}");
    }

    pub fn print_catalog(&self, catalog: &ActivityCatalog) {
        if catalog.labels().is_empty() {
            self.print_info("No activities configured.");
            return;
        }
        let md = catalog
            .labels()
            .iter()
            .map(|l| format!("* {l}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.print_md(&md);
    }

    pub fn print_calendar(&self, month: &CalendarMonth, today: NaiveDate) {
        self.print_md(&format!("# {}", month.first.format("%B %Y")));
        for line in calendar_lines(month, today, self.opts.use_color) {
            println!("{line}");
        }
        if !self.opts.use_color && !month.drafted.is_empty() {
            println!("\n* has a draft");
        }
    }
}

/// The weekday header plus one line per week.
///
/// Without color, drafted days carry a trailing `*`.
fn calendar_lines(month: &CalendarMonth, today: NaiveDate, use_color: bool) -> Vec<String> {
    let mut lines = vec![
        WEEKDAYS
            .iter()
            .map(|d| format!("{d} "))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string(),
    ];
    for week in &month.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|day| match day {
                None => "   ".to_string(),
                Some(d) => day_cell(*d, month.has_draft(*d), *d == today, use_color),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines
}

fn day_cell(day: NaiveDate, drafted: bool, is_today: bool, use_color: bool) -> String {
    let number = format!("{:>2}", day.day());
    if !use_color {
        let mark = if drafted { '*' } else { ' ' };
        return format!("{number}{mark}");
    }
    let styled = match (drafted, is_today) {
        (true, true) => number.with(OneDark::DRAFTED).bold().underlined(),
        (true, false) => number.with(OneDark::DRAFTED).bold(),
        (false, true) => number.with(OneDark::TODAY).underlined(),
        (false, false) => number.with(OneDark::FG),
    };
    format!("{styled} ")
}
