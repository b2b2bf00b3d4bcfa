//! Hue rotation math.
//!
//! A single tinted asset is recolored by rotating its hue with the same
//! linear approximation the CSS `hue-rotate()` filter uses. Working
//! backwards, [`nearest_hue_rotation`] finds the whole-degree rotation that
//! brings a source color's hue closest to a target color's hue.
//!
//! Everything here is a pure function of its inputs: the same colors always
//! produce the same angle.

use hex_color::HexColor;

/// Linear RGB triple with channels in `0.0..=1.0`.
type Channels = [f64; 3];

fn channels(color: HexColor) -> Channels {
    [
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    ]
}

/// Applies the `hue-rotate(degrees)` filter matrix to a color.
///
/// Results are clamped to the displayable range and rounded to 8-bit
/// channels. Alpha is preserved.
///
/// ```rust
/// use colortimer::hue::hue_rotate;
/// use hex_color::HexColor;
///
/// let base = HexColor::rgb(0x33, 0xbd, 0xf4);
/// assert_eq!(hue_rotate(base, 0), base);
/// assert_eq!(hue_rotate(base, 360), base);
/// ```
pub fn hue_rotate(color: HexColor, degrees: u16) -> HexColor {
    let [r, g, b] = rotate_channels(channels(color), degrees);
    let to_byte = |v: f64| (v * 255.0).round() as u8;
    HexColor::rgba(to_byte(r), to_byte(g), to_byte(b), color.a)
}

fn rotate_channels([r, g, b]: Channels, degrees: u16) -> Channels {
    let (sin, cos) = f64::from(degrees % 360).to_radians().sin_cos();

    let matrix = [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ];

    matrix.map(|row| (row[0] * r + row[1] * g + row[2] * b).clamp(0.0, 1.0))
}

/// HSL hue of a color in degrees, `0.0..360.0`.
///
/// Returns `None` for achromatic colors (black, white, greys), whose hue is
/// undefined.
pub fn hue_of(color: HexColor) -> Option<f64> {
    channel_hue(channels(color))
}

fn channel_hue([r, g, b]: Channels) -> Option<f64> {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta < f64::EPSILON {
        return None;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Some((sector * 60.0).rem_euclid(360.0))
}

/// Shortest distance between two angles on the color wheel, `0.0..=180.0`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Finds the rotation, in whole degrees `0..360`, that maps `source`'s hue
/// closest to `target`'s hue.
///
/// Every candidate angle is run through the filter matrix and the hue of the
/// result compared with the target. Ties go to the smallest angle. An
/// achromatic target has no hue to aim for and yields `0`.
///
/// ```rust
/// use colortimer::hue::nearest_hue_rotation;
/// use hex_color::HexColor;
///
/// let base = HexColor::rgb(0x33, 0xbd, 0xf4);
/// assert_eq!(nearest_hue_rotation(base, base), 0);
/// assert_eq!(nearest_hue_rotation(base, HexColor::rgb(128, 128, 128)), 0);
/// ```
pub fn nearest_hue_rotation(source: HexColor, target: HexColor) -> u16 {
    let Some(target_hue) = hue_of(target) else {
        return 0;
    };
    let source = channels(source);

    let distance = |degrees: u16| {
        channel_hue(rotate_channels(source, degrees))
            .map_or(f64::INFINITY, |hue| circular_distance(hue, target_hue))
    };

    // min_by keeps the first of equal elements, so ties resolve to the
    // smallest angle.
    (0..360u16)
        .map(|degrees| (degrees, distance(degrees)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map_or(0, |(degrees, _)| degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: HexColor = HexColor::rgb(0x33, 0xbd, 0xf4);

    #[test]
    fn test_hue_of_primaries() {
        assert_eq!(hue_of(HexColor::rgb(255, 0, 0)), Some(0.0));
        assert_eq!(hue_of(HexColor::rgb(0, 255, 0)), Some(120.0));
        assert_eq!(hue_of(HexColor::rgb(0, 0, 255)), Some(240.0));
        assert_eq!(hue_of(HexColor::rgb(255, 0, 255)), Some(300.0));
    }

    #[test]
    fn test_hue_of_achromatic_is_none() {
        assert_eq!(hue_of(HexColor::rgb(0, 0, 0)), None);
        assert_eq!(hue_of(HexColor::rgb(255, 255, 255)), None);
        assert_eq!(hue_of(HexColor::rgb(77, 77, 77)), None);
    }

    #[test]
    fn test_circular_distance_wraps() {
        assert_eq!(circular_distance(10.0, 350.0), 20.0);
        assert_eq!(circular_distance(350.0, 10.0), 20.0);
        assert_eq!(circular_distance(0.0, 180.0), 180.0);
        assert_eq!(circular_distance(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        assert_eq!(hue_rotate(BASE, 0), BASE);
    }

    #[test]
    fn test_rotation_keeps_alpha() {
        let translucent = HexColor::rgba(0x33, 0xbd, 0xf4, 0x80);
        assert_eq!(hue_rotate(translucent, 90).a, 0x80);
    }

    #[test]
    fn test_nearest_rotation_of_base_is_zero() {
        assert_eq!(nearest_hue_rotation(BASE, BASE), 0);
    }

    #[test]
    fn test_nearest_rotation_hits_target_hue() {
        let targets = [
            HexColor::rgb(255, 0, 0),
            HexColor::rgb(0, 0, 255),
            HexColor::rgb(0, 128, 0),
            HexColor::rgb(255, 255, 0),
            HexColor::rgb(255, 165, 0),
            HexColor::rgb(128, 0, 128),
        ];
        for target in targets {
            let angle = nearest_hue_rotation(BASE, target);
            assert!(angle < 360);

            let rotated = rotate_channels(channels(BASE), angle);
            let hue = channel_hue(rotated).expect("rotated base keeps a hue");
            let wanted = hue_of(target).expect("target is chromatic");
            assert!(
                circular_distance(hue, wanted) < 2.0,
                "target {target:?}: rotated hue {hue} vs {wanted}"
            );
        }
    }

    #[test]
    fn test_known_rotations() {
        assert_eq!(nearest_hue_rotation(BASE, HexColor::rgb(255, 0, 0)), 160);
        assert_eq!(nearest_hue_rotation(BASE, HexColor::rgb(0, 0, 255)), 50);
    }

    #[test]
    fn test_nearest_rotation_is_stable() {
        let target = HexColor::rgb(0xff, 0x63, 0x47);
        let first = nearest_hue_rotation(BASE, target);
        for _ in 0..10 {
            assert_eq!(nearest_hue_rotation(BASE, target), first);
        }
    }

    #[test]
    fn test_achromatic_target_rotates_nothing() {
        assert_eq!(nearest_hue_rotation(BASE, HexColor::rgb(0, 0, 0)), 0);
        assert_eq!(nearest_hue_rotation(BASE, HexColor::rgb(255, 255, 255)), 0);
    }
}
