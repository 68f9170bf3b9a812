use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AvatarError::unknown_category("x")
            .to_string()
            .contains("unknown category:")
    );
    assert!(
        AvatarError::asset_load("x")
            .to_string()
            .contains("asset load error:")
    );
    assert!(
        AvatarError::asset_decode("x")
            .to_string()
            .contains("asset decode error:")
    );
    assert!(
        AvatarError::file_write("x")
            .to_string()
            .contains("file write error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AvatarError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
