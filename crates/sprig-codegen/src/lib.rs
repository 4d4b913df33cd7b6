//! Code generation from design-node trees.
//!
//! A tree retrieved from the design tool is lowered into UI source for one
//! of three platforms:
//!
//! - `web` - React components styled with utility classes
//! - `native` - React Native components with literal style objects
//! - `miniprogram` - WeChat mini-program bundles (wxml, wxss, js, json)
//!
//! The web backend builds an interchange syntax tree ([`ast`]) and prints
//! it; all backends pass their output through a [`CodeFormatter`].
//!
//! # Example
//!
//! ```ignore
//! use sprig_codegen::{generate_batch, GenerateOptions, Platform};
//!
//! let options = GenerateOptions::new(Platform::Native);
//! let results = generate_batch(&response, &ids, &options, None)?;
//! for result in results {
//!     println!("{}", result.code);
//! }
//! ```

pub mod artifact;
pub mod ast;
pub mod batch;
pub mod error;
pub mod format;
pub mod generators;
pub mod naming;
pub mod writer;

pub use artifact::{GeneratedArtifact, GeneratedFile, MiniProgramBundle, Payload, Platform};
pub use batch::{generate_batch, generate_with, generator_for, ComponentResult, GenerateOptions};
pub use error::{CodegenError, Result};
pub use format::{CanonicalFormatter, CodeFormatter, CommandFormatter, Dialect, FormatterKind};
pub use generators::{CodeGenerator, Content, TemplateEngine};
pub use naming::component_name;
pub use writer::{ArtifactWriter, FsWriter};

#[cfg(feature = "web")]
pub use generators::WebGenerator;

#[cfg(feature = "native")]
pub use generators::NativeGenerator;

#[cfg(feature = "miniprogram")]
pub use generators::MiniProgramGenerator;
