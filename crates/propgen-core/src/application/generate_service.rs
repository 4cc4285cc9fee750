//! Generate Service - main application orchestrator.
//!
//! This service coordinates the generation workflow for one input file:
//! 1. Read the specification text
//! 2. Parse it into a `ClassSpec`
//! 3. Synthesize the class source
//! 4. Write to the filesystem
//!
//! It implements the driving port (incoming) and uses the driven
//! `Filesystem` port (outgoing). Inputs are independent: no state is shared
//! between files, and a failure in one run leaves earlier completed writes
//! in place.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::ClassSpec,
    error::PropgenResult,
    parser::SpecParser,
    synth,
};

/// Summary of one completed generation, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedClass {
    pub class_name: String,
    pub namespace: String,
    pub output_path: std::path::PathBuf,
    pub property_count: usize,
    pub source_len: usize,
}

/// Main generation service.
///
/// Orchestrates the read, parse, synthesize, and write workflow.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate one class from one specification file and persist it.
    ///
    /// This is the main use case. The output file is overwritten
    /// unconditionally; parent directories are created as needed.
    #[instrument(skip_all, fields(input = %input.display()))]
    pub fn generate(&self, input: &Path) -> PropgenResult<GeneratedClass> {
        let (spec, source) = self.render(input)?;

        if let Some(parent) = spec.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }
        self.filesystem.write_file(&spec.output_path, &source)?;

        info!(
            class = %spec.class_name,
            output = %spec.output_path.display(),
            "class generated"
        );

        Ok(GeneratedClass {
            class_name: spec.class_name,
            namespace: spec.namespace,
            output_path: spec.output_path,
            property_count: spec.properties.len(),
            source_len: source.len(),
        })
    }

    /// Parse and synthesize without writing anything (serves `--dry-run`).
    #[instrument(skip_all, fields(input = %input.display()))]
    pub fn render(&self, input: &Path) -> PropgenResult<(ClassSpec, String)> {
        if !self.filesystem.exists(input) {
            return Err(ApplicationError::MissingInputFile {
                path: input.to_path_buf(),
            }
            .into());
        }

        let text = self.filesystem.read_to_string(input)?;
        let spec = SpecParser::parse_str(&text)?;
        let source = synth::synthesize(&spec)?;
        Ok((spec, source))
    }
}
