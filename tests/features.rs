#[cfg(feature = "bytemuck")]
#[test]
fn colors_cast_to_bytes() {
    use pufferfish_color::Color;

    let colors = [Color::RED, Color::TRANSPARENT];
    let floats: &[f32] = bytemuck::cast_slice(&colors);
    assert_eq!(floats, [1., 0., 0., 1., 0., 0., 0., 0.]);
    assert_eq!(bytemuck::bytes_of(&Color::RED).len(), 16);
    assert_eq!(<Color as bytemuck::Zeroable>::zeroed(), Color::TRANSPARENT);
}

#[cfg(feature = "serde")]
#[test]
fn colors_serialize_as_structs() {
    use pufferfish_color::Color;

    let json = serde_json::to_string(&Color::RED).unwrap();
    assert_eq!(json, r#"{"r":1.0,"g":0.0,"b":0.0,"a":1.0}"#);
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::RED);
}
