//! CLI-specific configuration for the terminal item menu.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// RON item catalog loaded by the demo binary.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MENU_FRAMES_PER_SECOND` - Frame rate cap for the render loop (default: 60)
    /// - `MENU_STATUS_BAR_WIDTH` - Status bar width in cells (default: 22)
    /// - `MENU_ITEM_CATALOG` - Path to the RON item catalog
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(fps) = read_env::<u32>("MENU_FRAMES_PER_SECOND") {
            config.ui.frames_per_second = fps.clamp(1, 240);
        }
        if let Some(width) = read_env::<u16>("MENU_STATUS_BAR_WIDTH") {
            config.ui.status_bar_width = width.max(UiConfig::MIN_STATUS_BAR_WIDTH);
        }
        if let Some(path) = env::var_os("MENU_ITEM_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        config
    }
}

/// UI layout and pacing configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Frame rate cap enforced by the frame clock.
    pub frames_per_second: u32,
    /// Width of the party status bar in cells (including borders).
    pub status_bar_width: u16,
}

impl UiConfig {
    const MIN_STATUS_BAR_WIDTH: u16 = 14;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 60,
            status_bar_width: 22,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
