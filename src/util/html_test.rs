use super::*;

#[test]
fn escape_replaces_all_five_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
    );
}

#[test]
fn escape_leaves_plain_text_alone() {
    assert_eq!(escape_html("Upload complete: 3 files"), "Upload complete: 3 files");
    assert_eq!(escape_html(""), "");
}

#[test]
fn escape_does_not_double_decode() {
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn sanitize_keeps_quotes_and_encodes_nbsp() {
    assert_eq!(
        sanitize_html("<b>\"hi\"</b>\u{a0}&'"),
        "&lt;b&gt;\"hi\"&lt;/b&gt;&nbsp;&amp;'"
    );
}

#[test]
fn script_payload_is_neutralized() {
    let payload = "<script>alert(1)</script>";
    assert!(!escape_html(payload).contains('<'));
    assert!(!sanitize_html(payload).contains('<'));
}
