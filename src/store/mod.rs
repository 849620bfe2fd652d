mod layout;
mod prefs;

pub use layout::{
    position_keys, toggle_key, LayoutStore, CONTROL_SCALE_KEY, DEFAULT_CONTROL_SCALE,
    OVERLAY_INIT_KEY, TOUCH_ENABLED_KEY,
};
pub use prefs::{
    default_preferences_path, JsonPreferences, MemoryPreferences, PrefValue, PreferenceStore,
    PREFERENCES_FILE_NAME,
};
