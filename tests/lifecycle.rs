#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pomo::db::memory::InMemoryRepository;
    use pomo::db::repository::Repository;
    use pomo::libs::category::Category;
    use pomo::libs::config::IntervalConfig;
    use pomo::libs::error::PomoError;
    use pomo::libs::interval::{Interval, State};
    use pomo::libs::ticker::{Callbacks, NoProgress};
    use std::cell::Cell;
    use std::sync::Arc;
    use tokio::sync::oneshot;
    use tokio_util::sync::CancellationToken;

    fn config(pomodoro: i64, long_break: i64, short_break: i64) -> IntervalConfig {
        IntervalConfig::new(
            Arc::new(InMemoryRepository::new()),
            TimeDelta::seconds(pomodoro),
            TimeDelta::seconds(long_break),
            TimeDelta::seconds(short_break),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_sequence_over_two_cycles() {
        let config = config(2, 1, 1);
        let cancel = CancellationToken::new();

        for n in 1..=16 {
            let interval = Interval::current(&config).unwrap();
            let expected = if n % 2 == 1 {
                Category::Pomodoro
            } else if n % 8 == 0 {
                Category::LongBreak
            } else {
                Category::ShortBreak
            };
            assert_eq!(interval.category, expected, "interval #{}", n);
            assert_eq!(interval.id, n);

            interval.start(&config, &cancel, &mut NoProgress).await.unwrap();
            assert_eq!(config.repository().by_id(interval.id).unwrap().state, State::Done);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_runs_to_completion() {
        let config = config(2, 1, 1);
        let cancel = CancellationToken::new();
        let interval = Interval::current(&config).unwrap();

        let mut starts = Vec::new();
        let mut ticks = Vec::new();
        let mut ends = Vec::new();
        {
            let mut progress = Callbacks::new(
                |i: &Interval| starts.push(i.state),
                |i: &Interval| ticks.push(i.time_actual),
                |i: &Interval| ends.push(i.clone()),
            );
            interval.start(&config, &cancel, &mut progress).await.unwrap();
        }

        assert_eq!(starts, vec![State::Running]);
        assert_eq!(ticks, vec![TimeDelta::seconds(1)]);
        assert_eq!(ends.len(), 1);

        let stored = config.repository().by_id(interval.id).unwrap();
        assert_eq!(stored.state, State::Done);
        assert_eq!(stored.time_actual, stored.time_planning);
        assert!(stored.time_start.is_some());
        assert_eq!(ends[0], stored);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_second_interval_finishes_without_ticks() {
        let config = config(1, 1, 1);
        let interval = Interval::current(&config).unwrap();

        let ticks = Cell::new(0);
        let ends = Cell::new(0);
        let mut progress = Callbacks::new(|_: &Interval| {}, |_: &Interval| ticks.set(ticks.get() + 1), |_: &Interval| ends.set(ends.get() + 1));
        interval.start(&config, &CancellationToken::new(), &mut progress).await.unwrap();

        assert_eq!(ticks.get(), 0);
        assert_eq!(ends.get(), 1);
        assert_eq!(config.repository().by_id(interval.id).unwrap().time_actual, TimeDelta::seconds(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_from_periodic_callback_then_resume() {
        let config = config(2, 1, 1);
        let cancel = CancellationToken::new();
        let interval = Interval::current(&config).unwrap();

        let ends = Cell::new(0);
        {
            let mut progress = Callbacks::new(
                |_: &Interval| {},
                |i: &Interval| i.pause(&config).unwrap(),
                |_: &Interval| ends.set(ends.get() + 1),
            );
            interval.start(&config, &cancel, &mut progress).await.unwrap();
        }

        let paused = config.repository().by_id(interval.id).unwrap();
        assert_eq!(paused.state, State::Paused);
        assert_eq!(paused.time_actual, TimeDelta::seconds(1));
        assert_eq!(ends.get(), 0);

        // The paused interval stays current and resumes where it stopped.
        let current = Interval::current(&config).unwrap();
        assert_eq!(current.id, interval.id);

        let mut resumed_at = None;
        {
            let mut progress = Callbacks::new(
                |i: &Interval| resumed_at = Some(i.time_actual),
                |_: &Interval| {},
                |_: &Interval| ends.set(ends.get() + 1),
            );
            current.start(&config, &cancel, &mut progress).await.unwrap();
        }

        assert_eq!(resumed_at, Some(TimeDelta::seconds(1)));
        assert_eq!(ends.get(), 1);
        let done = config.repository().by_id(interval.id).unwrap();
        assert_eq!(done.state, State::Done);
        assert_eq!(done.time_actual, TimeDelta::seconds(2));
        assert_eq!(done.time_start, paused.time_start);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_from_periodic_callback() {
        let config = config(5, 1, 1);
        let cancel = CancellationToken::new();
        let interval = Interval::current(&config).unwrap();

        let ends = Cell::new(0);
        {
            let mut progress = Callbacks::new(|_: &Interval| {}, |_: &Interval| cancel.cancel(), |_: &Interval| ends.set(ends.get() + 1));
            interval.start(&config, &cancel, &mut progress).await.unwrap();
        }

        let stored = config.repository().by_id(interval.id).unwrap();
        assert_eq!(stored.state, State::Canceled);
        assert_eq!(stored.time_actual, TimeDelta::seconds(1));
        assert_eq!(ends.get(), 0);

        let restart = interval.start(&config, &CancellationToken::new(), &mut NoProgress).await;
        assert!(matches!(restart, Err(PomoError::IntervalCompleted)));

        // A canceled interval is no longer current; the next one is a break.
        let next = Interval::current(&config).unwrap();
        assert_ne!(next.id, interval.id);
        assert_eq!(next.category, Category::ShortBreak);
    }

    #[tokio::test(start_paused = true)]
    async fn test_already_cancelled_token_cancels_immediately() {
        let config = config(5, 1, 1);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let interval = Interval::current(&config).unwrap();
        interval.start(&config, &cancel, &mut NoProgress).await.unwrap();

        let stored = config.repository().by_id(interval.id).unwrap();
        assert_eq!(stored.state, State::Canceled);
        assert_eq!(stored.time_actual, TimeDelta::zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_on_done_interval_fails() {
        let config = config(1, 1, 1);
        let interval = Interval::current(&config).unwrap();
        interval.start(&config, &CancellationToken::new(), &mut NoProgress).await.unwrap();

        let again = interval.start(&config, &CancellationToken::new(), &mut NoProgress).await;
        assert!(matches!(again, Err(PomoError::IntervalCompleted)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_on_running_record_is_noop() {
        let config = config(5, 1, 1);
        let mut interval = Interval::current(&config).unwrap();
        interval.state = State::Running;
        config.repository().update(&interval).unwrap();

        let calls = Cell::new(0);
        let mut progress = Callbacks::new(
            |_: &Interval| calls.set(calls.get() + 1),
            |_: &Interval| calls.set(calls.get() + 1),
            |_: &Interval| calls.set(calls.get() + 1),
        );
        interval.start(&config, &CancellationToken::new(), &mut progress).await.unwrap();

        assert_eq!(calls.get(), 0);
        let stored = config.repository().by_id(interval.id).unwrap();
        assert_eq!(stored.state, State::Running);
        assert_eq!(stored.time_actual, TimeDelta::zero());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_while_running_is_noop() {
        let config = config(10, 1, 1);
        let cancel = CancellationToken::new();
        let interval = Interval::current(&config).unwrap();

        let (started_tx, started_rx) = oneshot::channel();
        let runner = {
            let config = config.clone();
            let cancel = cancel.clone();
            let interval = interval.clone();
            tokio::spawn(async move {
                let mut started_tx = Some(started_tx);
                let mut progress = Callbacks::new(
                    move |_: &Interval| {
                        if let Some(tx) = started_tx.take() {
                            let _ = tx.send(());
                        }
                    },
                    |_: &Interval| {},
                    |_: &Interval| {},
                );
                interval.start(&config, &cancel, &mut progress).await
            })
        };
        started_rx.await.unwrap();

        let calls = Cell::new(0);
        {
            let mut progress = Callbacks::new(
                |_: &Interval| calls.set(calls.get() + 1),
                |_: &Interval| calls.set(calls.get() + 1),
                |_: &Interval| calls.set(calls.get() + 1),
            );
            interval.start(&config, &cancel, &mut progress).await.unwrap();
        }
        assert_eq!(calls.get(), 0);

        cancel.cancel();
        runner.await.unwrap().unwrap();
        assert_eq!(config.repository().by_id(interval.id).unwrap().state, State::Canceled);
    }

    #[test]
    fn test_pause_requires_running_interval() {
        let config = config(5, 1, 1);
        let mut interval = Interval::current(&config).unwrap();

        assert!(matches!(interval.pause(&config), Err(PomoError::IntervalNotRunning)));
        let stored = config.repository().by_id(interval.id).unwrap();
        assert_eq!(stored.state, State::NotStarted);
        assert_eq!(stored.time_actual, TimeDelta::zero());

        interval.state = State::Running;
        config.repository().update(&interval).unwrap();
        interval.pause(&config).unwrap();
        assert_eq!(config.repository().by_id(interval.id).unwrap().state, State::Paused);

        // Pausing twice is rejected.
        assert!(matches!(interval.pause(&config), Err(PomoError::IntervalNotRunning)));
    }

    #[test]
    fn test_current_returns_same_interval_until_it_ends() {
        let config = config(5, 1, 1);
        let first = Interval::current(&config).unwrap();
        let again = Interval::current(&config).unwrap();

        assert_eq!(first, again);
        assert_eq!(first.category, Category::Pomodoro);
        assert_eq!(first.state, State::NotStarted);
        assert_eq!(first.time_planning, TimeDelta::seconds(5));
        assert!(first.time_start.is_none());
    }

    #[test]
    fn test_create_uses_category_duration() {
        let config = config(5, 3, 2);
        let pomodoro = Interval::create(&config).unwrap();
        let short_break = Interval::create(&config).unwrap();

        assert_eq!(pomodoro.time_planning, TimeDelta::seconds(5));
        assert_eq!(short_break.category, Category::ShortBreak);
        assert_eq!(short_break.time_planning, TimeDelta::seconds(2));
    }
}
