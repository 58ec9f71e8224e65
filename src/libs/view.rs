use super::formatter::format_duration;
use super::messages::Message;
use super::summary::DailySummary;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints one row per day plus a totals row.
    pub fn summary(summaries: &[DailySummary]) {
        let mut table = Table::new();

        table.add_row(row![
            Message::SummaryColumnDate,
            Message::SummaryColumnPomodoro,
            Message::SummaryColumnBreaks,
            Message::SummaryColumnTotal
        ]);
        for summary in summaries {
            table.add_row(row![
                summary.date.format("%Y-%m-%d"),
                format_duration(&summary.pomodoro),
                format_duration(&summary.breaks),
                format_duration(&summary.total())
            ]);
        }

        let (pomodoro, breaks) = summaries
            .iter()
            .fold((chrono::TimeDelta::zero(), chrono::TimeDelta::zero()), |(p, b), s| (p + s.pomodoro, b + s.breaks));
        table.add_row(row![
            Message::SummaryColumnTotal,
            format_duration(&pomodoro),
            format_duration(&breaks),
            format_duration(&(pomodoro + breaks))
        ]);
        table.printstd();
    }
}
