use aurora_core::color::{Hsla, Rgba};

#[test]
fn test_hsla_css_format() {
    let c = Hsla::new(210.0, 80.0, 60.0, 0.25);
    assert_eq!(c.to_css(), "hsla(210.0, 80%, 60%, 0.250)");
}

#[test]
fn test_hsla_hue_wraps_at_render_time() {
    let c = Hsla::new(420.0, 80.0, 60.0, 1.0);
    assert_eq!(c.to_css(), "hsla(60.0, 80%, 60%, 1.000)");

    let negative = Hsla::new(-90.0, 70.0, 50.0, 0.5);
    assert_eq!(negative.to_css(), "hsla(270.0, 70%, 50%, 0.500)");
}

#[test]
fn test_rgba_css_format() {
    let c = Rgba::new(100, 200, 255, 0.3);
    assert_eq!(c.to_css(), "rgba(100, 200, 255, 0.300)");

    let transparent = Rgba::new(200, 100, 255, 0.0);
    assert_eq!(transparent.to_css(), "rgba(200, 100, 255, 0.000)");
}
