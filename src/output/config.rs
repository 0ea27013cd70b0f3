//! Output configuration types

use termcolor::ColorChoice;

/// Configuration shared by the console formatters.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}
