use std::ffi::OsString;

use anyhow::Result;
use bintoheader::commands::convert_command;
use bintoheader::logging;
use clap::Parser;

/// Embed a binary file into a C/C++ header as a string literal.
///
/// This CLI is a thin wrapper around `bintoheader-core` (exposed in code as
/// `bintoheader_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
///
/// When fewer than three arguments are given, the usage line is printed and
/// the demo font (`./demo/res/Questrial_Regular.ttf` into
/// `./include/default_font.h` as `default_font`) is converted instead.
///
/// There are no flags: every argument is an operand, so `-h` or `--version`
/// are taken as paths or struct names. Arguments past the third are ignored.
#[derive(Parser, Debug)]
#[command(name = "bintoheader", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Binary file to embed.
    #[arg(allow_hyphen_values = true)]
    binary_file: Option<OsString>,

    /// Header file to write (created or truncated).
    #[arg(allow_hyphen_values = true)]
    header_file: Option<OsString>,

    /// Token used to name the `__<name>_size` and `__<name>_start` macros.
    #[arg(allow_hyphen_values = true)]
    struct_name: Option<OsString>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<OsString>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::DEFAULT_LOG_LEVEL)?;

    let program = std::env::args_os()
        .next()
        .map(|arg0| arg0.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bintoheader".to_string());
    convert_command(&program, cli.binary_file, cli.header_file, cli.struct_name)?;

    Ok(())
}
