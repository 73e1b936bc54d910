use std::ffi::OsString;

use anyhow::{Context, Result};
use bintoheader_core::{emit_header, EmitReport, HeaderConfig};
use tracing::{info, warn};

/// Usage line printed when the positional triple is incomplete.
pub fn usage_line(program: &str) -> String {
    format!("Usage: {} <binary_file> <h_file> <struct_name>", program)
}

/// Turn the positional arguments into a configuration.
///
/// Only a complete triple is honored. If any argument is missing, all of them
/// are discarded and the demo font triple is returned; the flag tells the
/// caller that the fallback was taken.
///
/// Paths are kept as raw OS strings; a struct name that is not valid UTF-8 is
/// converted lossily since it ends up in ASCII header text anyway.
pub fn resolve_config(
    binary_file: Option<OsString>,
    header_file: Option<OsString>,
    struct_name: Option<OsString>,
) -> (HeaderConfig, bool) {
    match (binary_file, header_file, struct_name) {
        (Some(binary), Some(header), Some(name)) => {
            (HeaderConfig::new(binary, header, name.to_string_lossy().into_owned()), false)
        }
        _ => (HeaderConfig::demo(), true),
    }
}

/// Convert a binary file into a header.
///
/// With an incomplete triple this prints the usage line to stdout and then
/// still converts the demo font.
pub fn convert_command(
    program: &str,
    binary_file: Option<OsString>,
    header_file: Option<OsString>,
    struct_name: Option<OsString>,
) -> Result<EmitReport> {
    let (config, used_defaults) = resolve_config(binary_file, header_file, struct_name);
    if used_defaults {
        println!("{}", usage_line(program));
        warn!(
            binary = %config.binary_path.display(),
            header = %config.header_path.display(),
            struct_name = %config.struct_name,
            "incomplete arguments; converting demo font"
        );
    }

    let report = emit_header(&config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            config.binary_path.display(),
            config.header_path.display()
        )
    })?;
    info!(
        header = %report.header_path.display(),
        guard = %report.guard,
        size = report.size,
        "header written"
    );

    Ok(report)
}
