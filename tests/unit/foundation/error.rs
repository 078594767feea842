use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OrreryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        OrreryError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        OrreryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = OrreryError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
