//! Transpiler for the dmcss stylesheet dialect.
//!
//! dmcss is CSS plus two macros: `@import "path";` inlines another file, and
//! `$$device(name: "id", width: W, height: H)` pulls in `<device_dir>/<id>.dmcss` and
//! emits it as an `@media (width: W) and (height: H)` block scoped under `.device-<id>`.

pub mod ast;
pub mod config;
pub mod emitter;
pub mod error;
pub mod parser;
pub mod processor;
pub mod resolver;
pub mod scaffold;
pub mod script;
pub mod tokenizer;

pub use ast::DeviceToken;
pub use config::Config;
pub use error::{Error, Result};
pub use processor::{Compiled, Processor};
