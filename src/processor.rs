use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::ast::DeviceToken;
use crate::config::Config;
use crate::emitter;
use crate::error::{Error, Result};
use crate::resolver::ImportResolver;
use crate::scaffold::{self, Scaffolded};
use crate::script::render_script;
use crate::tokenizer::{self, Tokenized};

/// Result of running the pipeline in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    /// Import-expanded source with device invocations stripped
    pub residual: String,
    pub tokens: Vec<DeviceToken>,
    /// Generated `@media` blocks
    pub css: String,
}

impl Compiled {
    /// Final stylesheet: residual text, a blank line, then the device blocks
    pub fn stylesheet(&self) -> String {
        format!("{}\n{}", self.residual, self.css)
    }
}

/// dmcss pipeline driver: import resolution, device tokenization and CSS emission
pub struct Processor {
    config: Config,
}

impl Processor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the main source and inline its imports
    pub fn resolve_source(&self) -> Result<String> {
        debug!("resolving {}", self.config.source.display());
        ImportResolver::new(self.config.base_dir())
            .with_max_depth(self.config.max_import_depth)
            .resolve_file(&self.config.source)
    }

    /// Run the whole pipeline without touching the output
    pub fn compile(&self) -> Result<Compiled> {
        let resolved = self.resolve_source()?;
        let Tokenized { tokens, residual } = tokenizer::tokenize(&resolved, &self.config.device_dir)?;
        let css = emitter::emit(&tokens);
        debug!("emitted {} device block(s)", tokens.len());

        Ok(Compiled {
            residual,
            tokens,
            css,
        })
    }

    /// Compile and write the stylesheet to `output`, or the configured path
    ///
    /// Nothing is written unless the whole pipeline succeeds.
    pub fn compile_to(&self, output: Option<&Path>) -> Result<PathBuf> {
        let output = output.unwrap_or(self.config.css_output.as_path());
        let compiled = self.compile()?;

        write_output(output, &compiled.stylesheet())?;
        info!("compiled {} to {}", self.config.source.display(), output.display());
        Ok(output.to_path_buf())
    }

    /// Device names referenced by the resolved main source
    pub fn device_names(&self) -> Result<Vec<String>> {
        tokenizer::device_names(&self.resolve_source()?)
    }

    /// Write the companion script to `output`, or the configured path
    pub fn generate_script(&self, output: Option<&Path>) -> Result<PathBuf> {
        let output = output.unwrap_or(self.config.script_output.as_path());
        let names = self.device_names()?;

        write_output(output, &render_script(&names))?;
        info!("wrote script for {} device(s) to {}", names.len(), output.display());
        Ok(output.to_path_buf())
    }

    /// Scaffold a new device fragment and register it in the main source
    pub fn generate_device(&self, name: &str, width: &str, height: &str) -> Result<Scaffolded> {
        scaffold::scaffold(&self.config, name, width, height)
    }
}

/// Write `data` to `path`, creating the parent directory first
pub fn write_output(path: &Path, data: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, data).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(index: &str, fragments: &[(&str, &str)]) -> (TempDir, Processor) {
        let dir = TempDir::new().unwrap();
        let config = Config::rooted(dir.path());
        fs::create_dir_all(&config.device_dir).unwrap();
        fs::write(&config.source, index).unwrap();
        for (name, body) in fragments {
            fs::write(tokenizer::fragment_path(&config.device_dir, name), body).unwrap();
        }
        (dir, Processor::new(config))
    }

    #[test]
    fn test_compile_in_memory() {
        let (_dir, processor) = project(
            "body { margin: 0; }\n$$device(name: \"ipad\", width: 768px, height: 1024px)\n",
            &[("ipad", "body {\n  color: red;\n}\n")],
        );

        let compiled = processor.compile().unwrap();
        assert_eq!(compiled.residual, "body { margin: 0; }\n");
        assert_eq!(
            compiled.stylesheet(),
            "body { margin: 0; }\n\n\
             @media (width: 768px) and (height: 1024px) {\n  .device-ipad body {\n    color: red;\n  }\n}\n"
        );
    }

    #[test]
    fn test_compile_to_default_output() {
        let (_dir, processor) = project(
            "$$device(name: \"a\", width: 1px, height: 1px)",
            &[("a", "a {\n}")],
        );

        let written = processor.compile_to(None).unwrap();
        assert_eq!(written, processor.config().css_output);
        assert!(fs::read_to_string(written).unwrap().contains(".device-a a {"));
    }

    #[test]
    fn test_missing_fragment_leaves_output_untouched() {
        let (dir, processor) = project("$$device(name: \"ghost\", width: 1px, height: 1px)", &[]);
        let output = dir.path().join("out").join("site.css");

        let err = processor.compile_to(Some(&output)).unwrap_err();
        assert!(matches!(err, Error::DeviceFragment { ref name, .. } if name == "ghost"));
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());

        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(&output, "previous").unwrap();
        processor.compile_to(Some(&output)).unwrap_err();
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let processor = Processor::new(Config::rooted(dir.path()));
        assert!(matches!(processor.compile().unwrap_err(), Error::Read { .. }));
    }

    #[test]
    fn test_generate_script_uses_resolved_source() {
        let (dir, processor) = project(
            "$$device(name: \"a\", width: 1px, height: 1px)\n@import \"more.dmcss\";\n",
            &[],
        );
        fs::write(
            dir.path().join("dmcss").join("more.dmcss"),
            "$$device(name: \"b\", width: 2px, height: 2px)",
        )
        .unwrap();

        let written = processor.generate_script(None).unwrap();
        let js = fs::read_to_string(written).unwrap();
        let a = js.find("device-a").unwrap();
        let b = js.find("device-b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_generate_script_without_devices() {
        let (_dir, processor) = project("body {}\n", &[]);
        let err = processor.generate_script(None).unwrap_err();
        assert!(matches!(err, Error::NoDevices));
        assert!(!processor.config().script_output.exists());
    }
}
