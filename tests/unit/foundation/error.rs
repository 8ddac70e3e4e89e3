use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KenBurnsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KenBurnsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde() {
    let err: KenBurnsError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, KenBurnsError::Serde(_)));
}
