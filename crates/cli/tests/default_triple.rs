//! Kept in its own test binary: it changes the process working directory.

use std::fs;

use bintoheader::convert_command;
use tempfile::tempdir;

#[test]
fn convert_command_uses_demo_triple_relative_to_cwd() {
    let original = std::env::current_dir().expect("cwd");
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("demo/res")).unwrap();
    fs::create_dir_all(temp.path().join("include")).unwrap();
    fs::write(temp.path().join("demo/res/Questrial_Regular.ttf"), b"OTTO").unwrap();
    std::env::set_current_dir(temp.path()).expect("chdir tmp");

    let result = convert_command("bintoheader", None, None, None);

    std::env::set_current_dir(original).expect("restore cwd");
    let report = result.unwrap();
    assert_eq!(report.struct_name, "default_font");
    assert_eq!(report.guard, "DEFAULT_FONT_H");
    assert_eq!(report.size, 4);
    assert!(temp.path().join("include/default_font.h").exists());
}
