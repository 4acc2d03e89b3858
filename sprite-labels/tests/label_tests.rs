//! Integration tests for label synthesis with the bundled font
//!
//! Everything here goes through the real rusttype backend, so widths are the
//! ones the demo actually renders with.

use sprite_labels::{
    GlyphBackend, LabelError, SceneConfig, SceneContext, TextBillboardFactory, TextMeasurer,
    TextStyle, LABEL_HEIGHT, WIDTH_SCALE,
};

const HELLO: &str = " Hello ";
const LONG: &str = " Way more text on this one!!!! ";

/// Helper to build a factory over the bundled face
fn factory() -> TextBillboardFactory<GlyphBackend, GlyphBackend> {
    TextBillboardFactory::from_backend(GlyphBackend::bundled().expect("bundled font loads"))
}

fn dark_pixels(pixels: &[u8]) -> usize {
    pixels.chunks_exact(4).filter(|px| px[0] < 128).count()
}

#[test]
fn test_prefix_widths_never_shrink() {
    let backend = GlyphBackend::bundled().unwrap();
    let style = TextStyle::LABEL;

    let widths: Vec<f32> = LONG
        .char_indices()
        .map(|(i, c)| backend.measure(&LONG[..i + c.len_utf8()], &style))
        .collect();

    for pair in widths.windows(2) {
        assert!(pair[1] >= pair[0], "width shrank: {:?}", pair);
    }
}

#[test]
fn test_hello_label() {
    let backend = GlyphBackend::bundled().unwrap();
    let measured = backend.measure(HELLO, &TextStyle::LABEL);
    let label = factory().create_label(HELLO).unwrap();

    assert_eq!(label.text(), HELLO);
    assert_eq!(label.measured_width(), measured);
    assert_eq!(label.texture().width(), measured.ceil() as u32);
    assert_eq!(label.texture().height(), 26);
    assert_eq!(label.scale().x, measured * WIDTH_SCALE);
    assert_eq!(label.scale().y, LABEL_HEIGHT);

    // Leading space keeps the first column on the white background.
    assert_eq!(&label.texture().pixels()[..4], &[255, 255, 255, 255]);
    assert!(dark_pixels(label.texture().pixels()) > 0);
}

#[test]
fn test_long_label_is_wider() {
    let factory = factory();
    let hello = factory.create_label(HELLO).unwrap();
    let long = factory.create_label(LONG).unwrap();

    assert!(long.measured_width() > hello.measured_width());
    assert!(long.texture().width() > hello.texture().width());
    assert!(long.scale().x > hello.scale().x);
    assert_eq!(long.scale().y, hello.scale().y);
}

#[test]
fn test_surface_height_ignores_content() {
    let factory = factory();
    for text in ["x", "Ag", "|||", LONG, "äöü"] {
        let label = factory.create_label(text).unwrap();
        assert_eq!(label.texture().height(), 26, "for {:?}", text);
    }
}

#[test]
fn test_same_text_twice_gives_independent_labels() {
    let factory = factory();
    let a = factory.create_label("X").unwrap();
    let b = factory.create_label("X").unwrap();

    assert_ne!(a.id(), b.id());
    assert_ne!(a.texture().id(), b.texture().id());
    assert_eq!(a.texture().pixels(), b.texture().pixels());
    assert_ne!(a.texture().pixels().as_ptr(), b.texture().pixels().as_ptr());
}

#[test]
fn test_empty_label_is_rejected() {
    assert!(matches!(factory().create_label(""), Err(LabelError::EmptyMessage)));
}

#[test]
fn test_default_scene_builds() {
    let scene = SceneContext::build(&SceneConfig::default(), 1280, 720, &factory()).unwrap();

    let texts: Vec<&str> = scene.labels().iter().map(|label| label.text()).collect();
    assert_eq!(texts, vec![HELLO, LONG]);
    assert!(scene.labels().iter().all(|label| label.scale().y == LABEL_HEIGHT));
}
