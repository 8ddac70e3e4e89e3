use super::*;

#[test]
fn image_key_is_transparent_in_json() {
    let key = ImageKey::new("https://example.com/a.jpg");
    assert_eq!(
        serde_json::to_string(&key).unwrap(),
        "\"https://example.com/a.jpg\""
    );
    let back: ImageKey = serde_json::from_str("\"b.png\"").unwrap();
    assert_eq!(back, ImageKey::from("b.png"));
    assert_eq!(back.to_string(), "b.png");
}

#[test]
fn manual_driver_tracks_registration() {
    let mut driver = ManualDriver::default();
    assert!(!driver.is_running());
    driver.attach();
    assert!(driver.is_running());
    driver.set_paused(true);
    assert!(!driver.is_running());
    driver.detach();
    driver.attach();
    assert!(driver.is_running());
}
