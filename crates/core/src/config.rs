use std::path::PathBuf;

/// Binary asset converted when the caller opts into the demo fallback.
pub const DEMO_BINARY_PATH: &str = "./demo/res/Questrial_Regular.ttf";
/// Header written when the caller opts into the demo fallback.
pub const DEMO_HEADER_PATH: &str = "./include/default_font.h";
/// Struct name used when the caller opts into the demo fallback.
pub const DEMO_STRUCT_NAME: &str = "default_font";

/// Everything a single header emission needs.
///
/// Paths are used as given (relative paths resolve against the process
/// working directory). `struct_name` is spliced verbatim into the macro names
/// `__<name>_size` and `__<name>_start`; picking a valid C identifier is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Binary file to embed.
    pub binary_path: PathBuf,
    /// Header file to create or truncate.
    pub header_path: PathBuf,
    /// Token used to build the macro names.
    pub struct_name: String,
}

impl HeaderConfig {
    /// Create a configuration from an explicit triple.
    pub fn new(
        binary_path: impl Into<PathBuf>,
        header_path: impl Into<PathBuf>,
        struct_name: impl Into<String>,
    ) -> Self {
        Self {
            binary_path: binary_path.into(),
            header_path: header_path.into(),
            struct_name: struct_name.into(),
        }
    }

    /// The demo font triple.
    ///
    /// The core never falls back to this on its own; frontends decide when to use it.
    pub fn demo() -> Self {
        Self::new(DEMO_BINARY_PATH, DEMO_HEADER_PATH, DEMO_STRUCT_NAME)
    }
}

pub(crate) fn size_macro_name(struct_name: &str) -> String {
    format!("__{struct_name}_size")
}

pub(crate) fn start_macro_name(struct_name: &str) -> String {
    format!("__{struct_name}_start")
}
