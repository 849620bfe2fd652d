use std::{thread::sleep, time::Duration};

use tempfile::tempdir;
use touch_overlay::overlay::OverlayMetrics;
use touch_overlay::{InputOverlay, MemoryPreferences};

// Separate test binary: the first `init` call wins for the whole process.
#[test]
fn init_without_file_writes_no_log() {
    let dir = tempdir().unwrap();

    touch_overlay::logging::init(false, None);
    InputOverlay::new(MemoryPreferences::new(), OverlayMetrics::new(720, 1280)).expect("overlay");

    sleep(Duration::from_millis(100));

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 0, "no log file should be written");
    assert!(!std::path::Path::new("touch_overlay.log").exists());
}
