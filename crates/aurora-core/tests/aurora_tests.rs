use aurora_core::aurora::{band_gradient, bands, curve_height, pointer_influence, sample_band};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

// ---------------------------------------------------------------------------
// 1. Three layers, back to front: fixed offsets, spaced hues, fading alpha
// ---------------------------------------------------------------------------

#[test]
fn test_band_layers_back_to_front() {
    let layers = bands(0.0);

    assert_eq!(layers[0].offset, -100.0);
    assert_eq!(layers[1].offset, -50.0);
    assert_eq!(layers[2].offset, 0.0);

    assert_eq!(layers[0].base_alpha, 0.25);
    assert_eq!(layers[1].base_alpha, 0.2);
    assert_eq!(layers[2].base_alpha, 0.15);

    // Hues 120 degrees apart at time zero.
    assert_eq!(layers[0].hue, 0.0);
    assert_eq!(layers[1].hue, 120.0);
    assert_eq!(layers[2].hue, 240.0);
}

#[test]
fn test_band_hue_rotates_and_wraps() {
    // 0.1 degrees per frame: frame 100 sits 10 degrees further.
    let rotated = bands(100.0);
    assert!((rotated[0].hue - 10.0).abs() < 1.0e-4);

    // Long runs must stay inside [0, 360).
    for layer in bands(1.0e6) {
        assert!(
            (0.0..360.0).contains(&layer.hue),
            "hue {} escaped [0, 360)",
            layer.hue,
        );
    }
}

// ---------------------------------------------------------------------------
// 2. Pointer influence: distance from vertical center, clamped to [0, 1]
// ---------------------------------------------------------------------------

#[test]
fn test_pointer_influence_range() {
    assert_eq!(pointer_influence(HEIGHT * 0.5, HEIGHT), 0.0);
    assert!((pointer_influence(0.0, HEIGHT) - 0.5).abs() < 1.0e-6);
    assert_eq!(
        pointer_influence(HEIGHT * 4.0, HEIGHT),
        1.0,
        "influence must clamp at 1",
    );
}

// ---------------------------------------------------------------------------
// 3. The bulge is present: influence changes the curve under the pointer
// ---------------------------------------------------------------------------

#[test]
fn test_pointer_bulge_present() {
    // Pick a frame where sin(time * 0.1) is essentially 1 so the bulge
    // term is at full amplitude.
    let time = std::f32::consts::FRAC_PI_2 / 0.1;
    let pointer_x = 400.0;

    let with_bulge = curve_height(pointer_x, time, 0.0, pointer_x, 1.0, HEIGHT);
    let without = curve_height(pointer_x, time, 0.0, pointer_x, 0.0, HEIGHT);
    let diff = (with_bulge - without).abs();
    assert!(
        diff > 40.0,
        "full-influence bulge under the pointer should add ~50 units, got {diff}",
    );

    // Beyond the bulge reach the two curves agree.
    let far_x = pointer_x + 500.0;
    let far_with = curve_height(far_x, time, 0.0, pointer_x, 1.0, HEIGHT);
    let far_without = curve_height(far_x, time, 0.0, pointer_x, 0.0, HEIGHT);
    assert_eq!(
        far_with, far_without,
        "influence must not affect the curve outside the bulge reach",
    );
}

// ---------------------------------------------------------------------------
// 4. Sampling covers the full width at fixed stride, all values finite
// ---------------------------------------------------------------------------

#[test]
fn test_sample_band_covers_width() {
    let spec = bands(42.0)[1];
    let points = sample_band(&spec, 42.0, 400.0, 0.5, WIDTH, HEIGHT, 5.0);

    assert_eq!(points.len(), 161, "stride 5 over 800 units is 161 samples");
    assert_eq!(points[0].x, 0.0, "curve must start at the left edge");
    assert_eq!(points.last().map(|p| p.x), Some(800.0));

    for (i, p) in points.iter().enumerate() {
        assert!(p.y.is_finite(), "sample {i} is non-finite: {p:?}");
        assert_eq!(p.x, i as f32 * 5.0, "sample {i} off-stride");
    }
}

// ---------------------------------------------------------------------------
// 5. Band gradient: three stops, hue walking +60, alpha fading
// ---------------------------------------------------------------------------

#[test]
fn test_band_gradient_stops() {
    let stops = band_gradient(90.0, 0.25);

    assert_eq!(stops[0].0, 0.0);
    assert_eq!(stops[1].0, 0.5);
    assert_eq!(stops[2].0, 1.0);

    assert_eq!(stops[0].1.h, 90.0);
    assert_eq!(stops[1].1.h, 120.0);
    assert_eq!(stops[2].1.h, 150.0);

    assert!((stops[0].1.a - 0.25).abs() < 1.0e-6);
    assert!((stops[1].1.a - 0.15).abs() < 1.0e-6);
    assert!((stops[2].1.a - 0.075).abs() < 1.0e-6);
}
