//! Tests for stage progress tracking

#[cfg(test)]
mod tests {
    use pbrmaps::io::progress::ProgressManager;
    use pbrmaps::pipeline::{Stage, StageObserver};
    use std::path::Path;

    // Tests each finished stage advances the bar by one
    // Verified by advancing on stage start as well
    #[test]
    fn test_stage_notifications_advance() {
        let mut pm = ProgressManager::new();
        pm.start_file(Path::new("textures/wall.png"));

        for stage in Stage::ALL {
            pm.stage_started(stage);
            pm.stage_finished(stage);
        }
        assert_eq!(pm.position(), Stage::ALL.len() as u64);
        pm.finish();
    }

    // Tests starting a file resets the position
    // Verified by keeping the previous position
    #[test]
    fn test_start_file_resets() {
        let mut pm = ProgressManager::default();
        pm.stage_finished(Stage::Decode);
        pm.stage_finished(Stage::Delight);
        assert_eq!(pm.position(), 2);

        pm.start_file(Path::new("next.png"));
        assert_eq!(pm.position(), 0);
        pm.finish();
    }
}
