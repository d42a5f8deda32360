use super::*;

#[test]
fn read_error_carries_the_cause() {
    let err = FileReadError::Read("file not readable".to_owned());
    assert_eq!(err.to_string(), "file read failed: file not readable");
}
