use bintoheader::convert_command;
use bintoheader_core::EmitError;
use tempfile::tempdir;

#[test]
fn convert_command_errors_when_input_missing() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("missing.ttf").into_os_string();
    let output = temp.path().join("out.h").into_os_string();

    let err = convert_command("bintoheader", Some(input), Some(output), Some("x".into()))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to convert"), "unexpected error: {err}");
    let emit = err.downcast_ref::<EmitError>().expect("EmitError in chain");
    assert!(matches!(emit, EmitError::ReadInput { .. }));
}

#[test]
fn convert_command_errors_when_output_dir_missing() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("blob.bin");
    std::fs::write(&input, b"blob").unwrap();
    let output = temp.path().join("nope").join("out.h").into_os_string();

    let err = convert_command(
        "bintoheader",
        Some(input.into_os_string()),
        Some(output),
        Some("blob".into()),
    )
    .unwrap_err();
    let emit = err.downcast_ref::<EmitError>().expect("EmitError in chain");
    assert!(matches!(emit, EmitError::WriteOutput { .. }), "unexpected error: {emit}");
}
