use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;
use touch_overlay::overlay::OverlayMetrics;
use touch_overlay::{InputOverlay, MemoryPreferences};

#[test]
#[serial]
fn first_run_layout_is_logged_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overlay.log");

    touch_overlay::logging::init(true, Some(path.clone()));
    let overlay = InputOverlay::new(MemoryPreferences::new(), OverlayMetrics::new(1280, 720))
        .expect("overlay");
    assert!(!overlay.is_empty());

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "overlay log was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("wrote default overlay layout"));
}
