use std::ffi::OsString;
use std::path::PathBuf;

use bintoheader::{resolve_config, usage_line};

#[test]
fn usage_line_names_program_and_positionals() {
    assert_eq!(
        usage_line("bintoheader"),
        "Usage: bintoheader <binary_file> <h_file> <struct_name>"
    );
}

#[test]
fn resolve_config_keeps_complete_triple() {
    let (config, used_defaults) =
        resolve_config(Some("font.ttf".into()), Some("out/font.h".into()), Some("font".into()));
    assert!(!used_defaults);
    assert_eq!(config.binary_path, PathBuf::from("font.ttf"));
    assert_eq!(config.header_path, PathBuf::from("out/font.h"));
    assert_eq!(config.struct_name, "font");
}

#[test]
fn resolve_config_keeps_dash_prefixed_operands() {
    let (config, used_defaults) =
        resolve_config(Some("-h".into()), Some("--version".into()), Some("-x".into()));
    assert!(!used_defaults);
    assert_eq!(config.binary_path, PathBuf::from("-h"));
    assert_eq!(config.header_path, PathBuf::from("--version"));
    assert_eq!(config.struct_name, "-x");
}

#[test]
fn resolve_config_falls_back_when_any_argument_missing() {
    let partials: [(Option<OsString>, Option<OsString>, Option<OsString>); 3] = [
        (None, None, None),
        (Some("a.bin".into()), None, None),
        (Some("a.bin".into()), Some("a.h".into()), None),
    ];
    for (binary, header, name) in partials {
        let (config, used_defaults) = resolve_config(binary, header, name);
        assert!(used_defaults);
        assert_eq!(config.binary_path, PathBuf::from("./demo/res/Questrial_Regular.ttf"));
        assert_eq!(config.header_path, PathBuf::from("./include/default_font.h"));
        assert_eq!(config.struct_name, "default_font");
    }
}
