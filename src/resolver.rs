use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::ast::{Import, Token};
use crate::config::DEFAULT_MAX_IMPORT_DEPTH;
use crate::error::{Error, Result};
use crate::parser::DmcssParser;

/// Inline every `@import "path";` in `source`, resolving paths against `base_dir`
pub fn resolve_imports(source: &str, base_dir: impl Into<PathBuf>) -> Result<String> {
    ImportResolver::new(base_dir).resolve(source)
}

/// Recursive `@import` expander
///
/// Nested imports resolve against the same base directory as the top-level file,
/// not against the directory of the file that contains them.
pub struct ImportResolver {
    base_dir: PathBuf,
    max_depth: usize,
    depth: usize,
    /// Files currently being expanded, outermost first
    chain: Vec<PathBuf>,
}

impl ImportResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            max_depth: DEFAULT_MAX_IMPORT_DEPTH,
            depth: 0,
            chain: Vec::new(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Read and resolve a top-level file
    ///
    /// The file counts as part of the import chain, so anything importing it back is
    /// reported as a cycle.
    pub fn resolve_file(&mut self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.chain.push(identity(path));
        let resolved = self.resolve(&source);
        self.chain.pop();
        resolved
    }

    /// Expand all imports in `source`
    ///
    /// Text without import directives comes back unchanged.
    pub fn resolve(&mut self, source: &str) -> Result<String> {
        let tokens = DmcssParser::parse_input(source)?;

        let mut result = String::with_capacity(source.len());
        for token in &tokens {
            match token {
                Token::Import(import) => result.push_str(&self.resolve_import(import)?),
                other => result.push_str(other.lexeme()),
            }
        }
        Ok(result)
    }

    fn resolve_import(&mut self, import: &Import) -> Result<String> {
        let path = self.base_dir.join(import.path);

        if self.depth >= self.max_depth {
            return Err(Error::ImportTooDeep {
                path,
                limit: self.max_depth,
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| Error::Import {
            path: path.clone(),
            source,
        })?;

        let id = identity(&path);
        if self.chain.contains(&id) {
            return Err(Error::ImportCycle { path });
        }

        debug!("importing {}", path.display());
        trace!("import chain: {:?}", self.chain);

        self.chain.push(id);
        self.depth += 1;
        let resolved = self.resolve(&content);
        self.depth -= 1;
        self.chain.pop();

        resolved
    }
}

fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
