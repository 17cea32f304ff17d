use std::path::{Path, PathBuf};

/// Default nesting limit for `@import` chains
pub const DEFAULT_MAX_IMPORT_DEPTH: usize = 64;

/// File locations and limits for one dmcss run
///
/// `Default` reproduces the conventional project layout relative to the working
/// directory:
///
/// ```text
/// dmcss/index.dmcss      main source
/// dmcss/devices/*.dmcss  device fragments
/// output/output.css      compiled stylesheet
/// output/script.js       companion script
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: PathBuf,
    pub device_dir: PathBuf,
    pub css_output: PathBuf,
    pub script_output: PathBuf,
    pub max_import_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::rooted("")
    }
}

impl Config {
    /// Conventional layout under `root`
    pub fn rooted(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source: root.join("dmcss").join("index.dmcss"),
            device_dir: root.join("dmcss").join("devices"),
            css_output: root.join("output").join("output.css"),
            script_output: root.join("output").join("script.js"),
            max_import_depth: DEFAULT_MAX_IMPORT_DEPTH,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_device_dir(mut self, device_dir: impl Into<PathBuf>) -> Self {
        self.device_dir = device_dir.into();
        self
    }

    pub fn with_css_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.css_output = path.into();
        self
    }

    pub fn with_script_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_output = path.into();
        self
    }

    pub fn with_max_import_depth(mut self, depth: usize) -> Self {
        self.max_import_depth = depth;
        self
    }

    /// Directory imports are resolved against: the main source's directory
    pub fn base_dir(&self) -> &Path {
        match self.source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.source, Path::new("dmcss/index.dmcss"));
        assert_eq!(config.device_dir, Path::new("dmcss/devices"));
        assert_eq!(config.css_output, Path::new("output/output.css"));
        assert_eq!(config.script_output, Path::new("output/script.js"));
        assert_eq!(config.base_dir(), Path::new("dmcss"));
    }

    #[test]
    fn test_base_dir_of_bare_file_name() {
        let config = Config::default().with_source("index.dmcss");
        assert_eq!(config.base_dir(), Path::new("."));
    }

    #[test]
    fn test_rooted_layout() {
        let config = Config::rooted("/srv/site").with_max_import_depth(3);
        assert_eq!(config.source, Path::new("/srv/site/dmcss/index.dmcss"));
        assert_eq!(config.base_dir(), Path::new("/srv/site/dmcss"));
        assert_eq!(config.max_import_depth, 3);
    }

    #[test]
    fn test_output_overrides() {
        let config = Config::default()
            .with_css_output("public/site.css")
            .with_script_output("public/site.js");
        assert_eq!(config.css_output, Path::new("public/site.css"));
        assert_eq!(config.script_output, Path::new("public/site.js"));
        assert_eq!(config.source, Path::new("dmcss/index.dmcss"));
    }
}
