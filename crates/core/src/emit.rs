use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::debug;

use crate::config::HeaderConfig;
use crate::error::{EmitError, EmitResult};
use crate::guard::include_guard;
use crate::header::write_header;

/// Summary of a successful emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// Header file that was written.
    pub header_path: PathBuf,
    /// Struct name used for the macro names.
    pub struct_name: String,
    /// Include-guard token.
    pub guard: String,
    /// Number of input bytes, i.e. the value of `__<name>_size`.
    pub size: usize,
}

/// Read `config.binary_path` and write its header to `config.header_path`.
///
/// The input is read completely before the output is opened, so a missing or
/// unreadable input never truncates an existing header. The output is created
/// or truncated and receives the rendered text in one write; both handles are
/// closed on every return path.
pub fn emit_header(config: &HeaderConfig) -> EmitResult<EmitReport> {
    let bytes = fs::read(&config.binary_path).map_err(|source| EmitError::ReadInput {
        path: config.binary_path.clone(),
        source,
    })?;
    debug!(path = %config.binary_path.display(), size = bytes.len(), "read binary input");

    let guard = include_guard(&config.header_path);

    let write_error =
        |source| EmitError::WriteOutput { path: config.header_path.clone(), source };
    let file = File::create(&config.header_path).map_err(write_error)?;
    write_header(BufWriter::new(file), &bytes, &guard, &config.struct_name)
        .map_err(write_error)?;
    debug!(
        path = %config.header_path.display(),
        guard = %guard,
        struct_name = %config.struct_name,
        "wrote header"
    );

    Ok(EmitReport {
        header_path: config.header_path.clone(),
        struct_name: config.struct_name.clone(),
        guard,
        size: bytes.len(),
    })
}
