use super::*;

#[test]
fn extension_is_lowercased_text_after_last_dot() {
    assert_eq!(FileDescriptor::new("Clip.Final.MP4", "").extension(), "mp4");
    assert_eq!(FileDescriptor::new("README", "").extension(), "readme");
}

#[test]
fn mime_fragment_match_is_enough() {
    let file = FileDescriptor::new("clip.bin", "VIDEO/MP4");
    assert!(validate_file_type(&file, &AllowedTypes::videos()));
}

#[test]
fn extension_match_is_enough() {
    let file = FileDescriptor::new("photo.JPEG", "application/octet-stream");
    assert!(validate_file_type(&file, &AllowedTypes::images()));
}

#[test]
fn neither_match_rejects() {
    let file = FileDescriptor::new("notes.txt", "text/plain");
    assert!(!validate_file_type(&file, &AllowedTypes::images()));
    assert!(!validate_file_type(&file, &AllowedTypes::default()));
}

#[test]
fn allowed_types_deserialize_from_page_json() {
    let allowed: AllowedTypes =
        serde_json::from_str(r#"{ "mimeTypes": ["image/"] }"#).expect("allowed types should parse");
    assert_eq!(allowed.mime_types, vec!["image/".to_owned()]);
    assert!(allowed.extensions.is_empty());

    let file: FileDescriptor =
        serde_json::from_str(r#"{ "name": "a.png", "type": "image/png" }"#).expect("file should parse");
    assert!(validate_file_type(&file, &allowed));
}
