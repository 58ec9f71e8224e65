#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use pomo::db::memory::InMemoryRepository;
    use pomo::db::repository::Repository;
    use pomo::libs::category::Category;
    use pomo::libs::config::IntervalConfig;
    use pomo::libs::interval::{Interval, State};
    use pomo::libs::summary::DailySummary;
    use std::sync::Arc;

    fn record(repo: &InMemoryRepository, category: Category, day: NaiveDate, actual_minutes: i64) {
        let mut interval = Interval::new(category, TimeDelta::minutes(25));
        interval.state = State::Done;
        interval.time_start = day.and_hms_opt(10, 0, 0);
        interval.time_actual = TimeDelta::minutes(actual_minutes);
        repo.create(&interval).unwrap();
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_range_is_oldest_first_and_includes_empty_days() {
        let repo = Arc::new(InMemoryRepository::new());
        record(&repo, Category::Pomodoro, date(3), 25);
        record(&repo, Category::ShortBreak, date(3), 5);
        record(&repo, Category::Pomodoro, date(5), 10);
        record(&repo, Category::LongBreak, date(5), 15);
        record(&repo, Category::Pomodoro, date(1), 25);
        let config = IntervalConfig::new(repo, TimeDelta::zero(), TimeDelta::zero(), TimeDelta::zero());

        let summaries = DailySummary::range(&config, date(5), 3).unwrap();

        assert_eq!(summaries.iter().map(|s| s.date).collect::<Vec<_>>(), vec![date(3), date(4), date(5)]);
        assert_eq!(summaries[0].pomodoro, TimeDelta::minutes(25));
        assert_eq!(summaries[0].breaks, TimeDelta::minutes(5));
        assert_eq!(summaries[1].total(), TimeDelta::zero());
        assert_eq!(summaries[2].pomodoro, TimeDelta::minutes(10));
        assert_eq!(summaries[2].breaks, TimeDelta::minutes(15));
        assert_eq!(summaries[2].total(), TimeDelta::minutes(25));
    }

    #[test]
    fn test_unstarted_intervals_are_not_counted() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.create(&Interval::new(Category::Pomodoro, TimeDelta::minutes(25))).unwrap();
        let config = IntervalConfig::new(repo, TimeDelta::zero(), TimeDelta::zero(), TimeDelta::zero());

        let summary = DailySummary::for_day(&config, date(5)).unwrap();
        assert_eq!(summary.total(), TimeDelta::zero());
        assert!(DailySummary::range(&config, date(5), 0).unwrap().is_empty());
    }
}
