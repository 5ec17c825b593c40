//! Unit tests for content normalization

use openclaw_mcp::core::{normalize_content, normalize_result, ContentBlock, ImageSource};
use serde_json::json;

#[test]
fn test_text_items_pass_through() {
    let blocks = normalize_content(vec![
        json!({"type": "text", "text": "first"}),
        json!({"type": "text"}),
    ]);
    assert_eq!(
        blocks,
        vec![ContentBlock::text("first"), ContentBlock::text("")]
    );
}

#[test]
fn test_image_without_source_becomes_placeholder() {
    let blocks = normalize_content(vec![json!({"type": "image", "mimeType": "image/png"})]);
    assert_eq!(blocks, vec![ContentBlock::text("[image: image/png]")]);
}

#[test]
fn test_image_sources() {
    let blocks = normalize_content(vec![
        json!({"type": "image", "data": "iVBORw0KGgo=", "mimeType": "image/png"}),
        json!({"type": "image", "url": "https://example.com/cat.jpg", "mimeType": "image/jpeg"}),
        json!({"type": "image", "data": "QUJD", "url": "https://example.com/ignored.png"}),
    ]);

    match &blocks[0] {
        ContentBlock::Image {
            source: ImageSource::Base64 { data, media_type },
            ..
        } => {
            assert_eq!(data, "iVBORw0KGgo=");
            assert_eq!(media_type.as_deref(), Some("image/png"));
        }
        other => panic!("expected base64 image, got {:?}", other),
    }

    match &blocks[1] {
        ContentBlock::Image {
            source: ImageSource::Url { url },
            media_type,
        } => {
            assert_eq!(url, "https://example.com/cat.jpg");
            assert_eq!(media_type.as_deref(), Some("image/jpeg"));
        }
        other => panic!("expected url image, got {:?}", other),
    }

    assert!(matches!(
        &blocks[2],
        ContentBlock::Image {
            source: ImageSource::Base64 { .. },
            ..
        }
    ));
}

#[test]
fn test_unknown_item_is_dumped_as_text() {
    let blocks = normalize_content(vec![json!({"type": "unknown", "data": {"foo": "bar"}})]);
    let text = blocks[0].as_text().expect("text block");
    assert!(text.contains("foo"));
    assert!(text.contains("bar"));
}

#[test]
fn test_mixed_content_keeps_order() {
    let blocks = normalize_content(vec![
        json!({"type": "text", "text": "a"}),
        json!({"type": "audio", "data": "..."}),
        json!({"type": "image"}),
        json!({"type": "text", "text": "b"}),
    ]);

    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks[0].as_text(), Some("a"));
    assert!(blocks[1].as_text().unwrap().contains("audio"));
    assert_eq!(blocks[2].as_text(), Some("[image: unknown]"));
    assert_eq!(blocks[3].as_text(), Some("b"));
}

#[test]
fn test_result_without_content_is_empty() {
    assert!(normalize_result(json!({})).is_empty());
    assert!(normalize_result(json!({"content": null})).is_empty());
    assert!(normalize_result(json!("plain")).is_empty());
    assert_eq!(
        normalize_result(json!({"content": [{"type": "text", "text": "ok"}]})),
        vec![ContentBlock::text("ok")]
    );
}

#[test]
fn test_block_wire_shape() {
    let url = ContentBlock::url_image("https://example.com/a.png", Some("image/png".into()));
    assert_eq!(
        serde_json::to_value(&url).unwrap(),
        json!({
            "type": "image",
            "source": {"type": "url", "url": "https://example.com/a.png"},
            "mediaType": "image/png"
        })
    );

    let base64 = ContentBlock::base64_image("QUJD", Some("image/gif".into()));
    assert_eq!(
        serde_json::to_value(&base64).unwrap(),
        json!({
            "type": "image",
            "source": {"type": "base64", "data": "QUJD", "mediaType": "image/gif"}
        })
    );
}
