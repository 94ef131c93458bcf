pub const SETTINGS_PATH: &str = "config/scene.json";
pub const DEFAULT_DATASET_PATH: &str = "data/wiki-resources.csv";

pub const BOLD_FONT_PATH: &str = "fonts/Inter-Bold.ttf";
pub const REGULAR_FONT_PATH: &str = "fonts/Inter-Regular.ttf";
