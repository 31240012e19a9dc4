// DOM hooks shared between the scroll rig and the page markup.

// Elements and attributes
pub const SCENE_SECTION_SELECTOR: &str = "[data-scene-section]";
pub const SCENE_SECTION_ATTR: &str = "data-scene-section";
pub const BODY_SCENE_ATTR: &str = "data-scene";
pub const ACTIVE_CLASS: &str = "is-active";
pub const NO_WEBGL_CLASS: &str = "no-webgl";

// Scene indicator
pub const INDICATOR_ID: &str = "scene-indicator";
pub const HIDDEN_CLASS: &str = "hidden";

// CSS custom property updated with the scene accent colour
pub const ACCENT_CSS_VAR: &str = "--scene-accent";

// Window events that can move scroll progress
pub const PROGRESS_EVENTS: [&str; 2] = ["scroll", "resize"];
