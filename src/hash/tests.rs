use super::*;
use approx::assert_relative_eq;

#[test]
fn test_decode_basic_hash() {
    let components = decode_hash("#10/51.505/-0.09");
    assert_eq!(
        components,
        HashComponents {
            zoom: Some(10.0),
            center: Some(DVec2::new(-0.09, 51.505)),
            layers: Some(String::new()),
            additional: IndexMap::new(),
        }
    );
}

#[test]
fn test_decode_with_layers() {
    let components = decode_hash("#10/51.505/-0.09/A,B,C");
    assert_eq!(components.zoom, Some(10.0));
    assert_eq!(components.center, Some(DVec2::new(-0.09, 51.505)));
    assert_eq!(components.layers.as_deref(), Some("A,B,C"));
    assert!(components.additional.is_empty());
}

#[test]
fn test_decode_empty_layers_with_parameter() {
    let components = decode_hash("#10/51.505/-0.09//m=foo");
    assert_eq!(components.layers.as_deref(), Some(""));
    assert_eq!(components.additional.get("m").map(String::as_str), Some("foo"));
}

#[test]
fn test_decode_without_leading_hash() {
    assert_eq!(decode_hash("10/51.505/-0.09"), decode_hash("#10/51.505/-0.09"));
}

#[test]
fn test_decode_short_hash_is_empty() {
    assert_eq!(decode_hash(""), HashComponents::default());
    assert_eq!(decode_hash("#"), HashComponents::default());
    assert_eq!(decode_hash("#10/51.505"), HashComponents::default());
}

#[test]
fn test_decode_last_layer_segment_wins() {
    let components = decode_hash("#10/51.505/-0.09/A,B/x=1/C");
    assert_eq!(components.layers.as_deref(), Some("C"));
    assert_eq!(components.additional.get("x").map(String::as_str), Some("1"));
}

#[test]
fn test_decode_repeated_parameter_keeps_last_value() {
    let components = decode_hash("#3/0/0/k=1/k=2");
    assert_eq!(components.additional.len(), 1);
    assert_eq!(components.additional.get("k").map(String::as_str), Some("2"));
}

#[test]
fn test_encode_requires_zoom_and_center() {
    assert_eq!(encode_hash(&HashComponents::default()), "");

    let no_center = HashComponents {
        zoom: Some(3.0),
        ..HashComponents::default()
    };
    assert_eq!(encode_hash(&no_center), "");
}

#[test]
fn test_encode_basic() {
    let components = HashComponents::from_viewport(Viewport::new(-0.09, 51.505, 10.0));
    assert_eq!(encode_hash(&components), "#10/51.505/-0.09");
}

#[test]
fn test_encode_rounds_by_zoom() {
    let components = HashComponents::from_viewport(Viewport::new(13.404_954_123, 52.520_008_77, 5.123));
    // Zoom 5.12 → 2 Nachkommastellen
    assert_eq!(encode_hash(&components), "#5.12/52.52/13.4");

    let components = HashComponents::from_viewport(Viewport::new(13.404_954_123, 52.520_008_77, 16.0));
    assert_eq!(encode_hash(&components), "#16/52.520009/13.404954");
}

#[test]
fn test_encode_layers_and_parameters() {
    let components = HashComponents::from_viewport(Viewport::new(-0.09, 51.505, 10.0))
        .with_layers("A,B,C")
        .with_parameter("foo", "bar")
        .with_parameter("a", "b");
    assert_eq!(encode_hash(&components), "#10/51.505/-0.09/A,B,C/foo=bar/a=b");

    let components = HashComponents::from_viewport(Viewport::new(-0.09, 51.505, 10.0))
        .with_layers("")
        .with_parameter("m", "foo");
    assert_eq!(encode_hash(&components), "#10/51.505/-0.09/m=foo");
}

#[test]
fn test_encode_decode_roundtrip() {
    let mut components = HashComponents::default();
    assert_eq!(decode_hash(&encode_hash(&components)), components);

    components.center = Some(DVec2::new(-0.09, 51.505));
    components.zoom = Some(10.0);
    components.layers = Some(String::new());
    assert_eq!(decode_hash(&encode_hash(&components)), components);

    components.layers = Some("A,B,C".to_string());
    assert_eq!(decode_hash(&encode_hash(&components)), components);

    components.additional.insert("foo".to_string(), "bar".to_string());
    components.additional.insert("a".to_string(), "b".to_string());
    assert_eq!(decode_hash(&encode_hash(&components)), components);
}

#[test]
fn test_roundtrip_after_one_rounding_pass() {
    let raw = HashComponents::from_viewport(Viewport::new(7.123_456_789, -33.987_654_321, 12.3456))
        .with_layers("b,w");
    let once = decode_hash(&encode_hash(&raw));
    assert_ne!(once, raw);
    assert_eq!(decode_hash(&encode_hash(&once)), once);

    let zoom = once.zoom.expect("Zoom vorhanden");
    assert_relative_eq!(zoom, 12.35);
}

#[test]
fn test_viewport_accessor() {
    let components = decode_hash("#4.5/48.1/11.6");
    let viewport = components.viewport().expect("Viewport vorhanden");
    assert_relative_eq!(viewport.lng(), 11.6);
    assert_relative_eq!(viewport.lat(), 48.1);
    assert_relative_eq!(viewport.zoom, 4.5);

    assert!(decode_hash("#x/48.1/11.6").viewport().is_none());
}
