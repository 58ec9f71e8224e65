/// Every user-facing text of the application.
///
/// Variants only carry data; the wording lives in the `Display`
/// implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === INTERVAL MESSAGES ===
    IntervalStarted {
        category: String,
        planned: String,
    },
    IntervalResumed {
        category: String,
        remaining: String,
    },
    FocusOnTask,
    TakeABreak,
    IntervalProgress {
        category: String,
        elapsed: String,
        planned: String,
    },
    IntervalFinished(String), // category
    IntervalCanceled(String), // category
    IntervalPaused {
        category: String,
        elapsed: String,
    },
    IntervalAlreadyRunning(i64), // id
    IntervalNotRunning,
    NoIntervalsYet,
    IntervalStatus {
        id: i64,
        category: String,
        state: String,
        elapsed: String,
        planned: String,
    },
    NextIntervalStarting(String), // category

    // === SUMMARY MESSAGES ===
    SummaryHeader(u32), // days
    SummaryColumnDate,
    SummaryColumnPomodoro,
    SummaryColumnBreaks,
    SummaryColumnTotal,

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingsSaved,
    PromptPomodoroMinutes,
    PromptLongBreakMinutes,
    PromptShortBreakMinutes,
    PromptDatabasePath,

    // === SIGNAL MESSAGES ===
    SignalListenFailed(String), // error

    // === MIGRATION MESSAGES ===
    RunningMigration(u32, String), // version, name
    DatabaseUpToDate,
}
