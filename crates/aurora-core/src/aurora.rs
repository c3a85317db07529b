//! Aurora band curve math: three translucent layers of summed sinusoids
//! that bulge toward the pointer's horizontal position.

use glam::Vec2;

use crate::color::Hsla;

/// Horizontal reach of the pointer bulge, in surface units.
const BULGE_REACH: f32 = 300.0;
/// Peak bulge amplitude at full pointer influence.
const BULGE_HEIGHT: f32 = 50.0;
/// Degrees of hue rotation per frame.
const HUE_DRIFT: f32 = 0.1;
/// Frequency of the bulge's slow vertical oscillation.
const BULGE_RATE: f32 = 0.1;

/// Back-to-front band layers: (vertical offset, hue phase, base alpha).
const BAND_LAYERS: [(f32, f32, f32); 3] = [
    (-100.0, 0.0, 0.25),
    (-50.0, 120.0, 0.2),
    (0.0, 240.0, 0.15),
];

/// One band's draw parameters for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct BandSpec {
    pub offset: f32,
    pub hue: f32,
    pub base_alpha: f32,
}

/// The three band layers for the given frame clock, hues slowly rotating.
pub fn bands(time: f32) -> [BandSpec; 3] {
    BAND_LAYERS.map(|(offset, phase, base_alpha)| BandSpec {
        offset,
        hue: (time * HUE_DRIFT + phase).rem_euclid(360.0),
        base_alpha,
    })
}

/// How far the pointer sits from vertical center, in [0, 1]. Scales the
/// bulge term of every band.
pub fn pointer_influence(pointer_y: f32, height: f32) -> f32 {
    ((pointer_y - height * 0.5).abs() / height).min(1.0)
}

/// Curve height at horizontal position `x`: three phase-shifted sinusoids
/// at distinct frequencies above the band's baseline, plus the pointer
/// bulge fading linearly over `BULGE_REACH`.
pub fn curve_height(
    x: f32,
    time: f32,
    offset: f32,
    pointer_x: f32,
    influence: f32,
    height: f32,
) -> f32 {
    let bulge = (1.0 - (x - pointer_x).abs() / BULGE_REACH).max(0.0) * influence * BULGE_HEIGHT;
    height * 0.5
        + offset
        + ((x + time * 2.0) * 0.005).sin() * 80.0
        + ((x + time * 3.0) * 0.01).sin() * 40.0
        + ((x + time * 1.5) * 0.008).cos() * 60.0
        + bulge * (time * BULGE_RATE).sin()
}

/// Sample one band's curve at fixed stride from the left edge across the
/// full width. The renderer closes the path down to the bottom corners to
/// form the fillable region.
pub fn sample_band(
    spec: &BandSpec,
    time: f32,
    pointer_x: f32,
    influence: f32,
    width: f32,
    height: f32,
    stride: f32,
) -> Vec<Vec2> {
    let steps = (width / stride).floor() as usize;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = i as f32 * stride;
        points.push(Vec2::new(
            x,
            curve_height(x, time, spec.offset, pointer_x, influence, height),
        ));
    }
    points
}

/// Vertical fill gradient for a band: hue walks 60 degrees top to bottom
/// while alpha fades, giving a soft transition instead of a flat fill.
pub fn band_gradient(hue: f32, base_alpha: f32) -> [(f32, Hsla); 3] {
    [
        (0.0, Hsla::new(hue, 80.0, 60.0, base_alpha)),
        (0.5, Hsla::new(hue + 30.0, 70.0, 50.0, base_alpha * 0.6)),
        (1.0, Hsla::new(hue + 60.0, 60.0, 40.0, base_alpha * 0.3)),
    ]
}
