#[cfg(test)]
mod tests {
    use pomo::libs::messages::Message;

    #[test]
    fn test_already_running_points_to_pause() {
        let text = Message::IntervalAlreadyRunning(7).to_string();
        assert!(text.starts_with("Interval #7 is already running"));
        assert!(text.contains("pomo pause"));
    }

    #[test]
    fn test_signal_listener_failure_includes_cause() {
        let text = Message::SignalListenFailed("no handler".to_string()).to_string();
        assert!(text.ends_with("no handler"));
    }
}
