//! Tests for progress reporters and phase inheritance

#[cfg(test)]
mod tests {
    use labyrinth::io::progress::ProgressReporter;

    // Tests phases drawn only when the parent reporter is enabled
    // Verified by always opening visible phases
    #[test]
    fn test_phase_inherits_enabled() {
        let hidden = ProgressReporter::hidden().phase(10, "Hidden");
        let shown = ProgressReporter::enabled().phase(10, "Shown");

        assert!(!hidden.is_enabled());
        assert!(shown.is_enabled());
        shown.finish();
    }

    // Tests a drawn phase can open nested phases of its own
    // Verified by clearing the enabled flag on visible reporters
    #[test]
    fn test_visible_phase_stays_enabled() {
        let progress = ProgressReporter::visible(10, "Counting");

        progress.inc(3);
        let nested = progress.phase(4, "Nested");
        nested.inc(4);
        nested.finish();
        progress.finish();

        assert!(progress.is_enabled());
        assert!(nested.is_enabled());
    }

    #[test]
    fn test_hidden_by_default() {
        let progress = ProgressReporter::default();

        progress.inc(4);
        progress.finish();

        assert!(!progress.is_enabled());
        assert!(!progress.phase(1, "Hidden").is_enabled());
    }
}
