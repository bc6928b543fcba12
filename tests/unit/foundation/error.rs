use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScoreArcError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScoreArcError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ScoreArcError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk full");
    let err = ScoreArcError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk full"));
}
