use std::path::PathBuf;

/// Directory holding the font files, relative to the working directory
pub const DEFAULT_FONTS_DIR: &str = "../../fonts";
/// Family prefix shared by every font file name
pub const DEFAULT_FILE_PREFIX: &str = "KaTeX_";
/// Extension of the font files
pub const DEFAULT_FILE_EXTENSION: &str = ".ttf";

/// Configuration for a metrics extraction run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directory the font files are loaded from
    pub fonts_dir: PathBuf,
    /// Prepended to the font name to build a file name
    pub file_prefix: String,
    /// Appended to the font name to build a file name
    pub file_extension: String,
}

impl Config {
    /// Create a new configuration with the default file naming convention
    pub fn new(debug_mode: bool, fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            debug_mode,
            fonts_dir: fonts_dir.into(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    /// Path of the file that holds the named font
    pub fn font_path(&self, font: &str) -> PathBuf {
        self.fonts_dir.join(format!(
            "{}{}{}",
            self.file_prefix, font, self.file_extension
        ))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false, DEFAULT_FONTS_DIR)
    }
}
