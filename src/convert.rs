//! RGB ↔ HSV conversion routines.
//!
//! Channels are 16-bit (`0..=0xFFFF`); hue is degrees, saturation and value
//! are unit-interval fractions. All arithmetic is `f64`, which is wide enough
//! that every 16-bit channel ratio is exact and the scaling round in
//! [`hsv_to_rgb`] inverts the normalization in [`rgb_to_hsv`] bit-for-bit.

/// Maximum channel value (16-bit depth).
pub const CHANNEL_MAX: u16 = 0xFFFF;

/// Converts an HSV color to its 16-bit RGB representation.
///
/// Hue is split into six 60° sectors; the integer part selects the sector and
/// the fractional part positions the color within it. Sectors outside `1..=5`
/// (negative hue, hue ≥ 360) fall through to sector 0's mapping rather than
/// being treated as errors, so the function is total over all finite inputs.
///
/// `s` and `v` are expected in `[0, 1]` but are not clamped: out-of-range
/// values propagate algebraically and produce meaningless channel values.
///
/// # Arguments
/// * `h` - Hue in degrees, nominally `[0, 360)`
/// * `s` - Saturation, nominally `[0, 1]`
/// * `v` - Value, nominally `[0, 1]`
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u16, u16, u16) {
    let sectors = h / 60.0;
    let f = sectors.fract();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sectors.trunc() as i64 {
        1 => (scale(q), scale(v), scale(p)),
        2 => (scale(p), scale(v), scale(t)),
        3 => (scale(p), scale(q), scale(v)),
        4 => (scale(t), scale(p), scale(v)),
        5 => (scale(v), scale(p), scale(q)),
        _ => (scale(v), scale(t), scale(p)),
    }
}

/// Scales a unit-interval fraction to a 16-bit channel, rounding to nearest
/// (half away from zero). Ties cannot occur for exact multiples of 1/65535,
/// so the tie-break rule never affects valid round trips.
#[inline]
fn scale(c: f64) -> u16 {
    (c * f64::from(CHANNEL_MAX)).round() as u16
}

/// Converts a 16-bit RGB color to HSV.
///
/// Returns hue in `[0, 360)` degrees and saturation/value in `[0, 1]`.
/// Achromatic input (all channels equal) yields hue 0; pure black yields
/// saturation 0 without dividing by the zero maximum. Total over the full
/// input domain and never panics.
///
/// Converting the result back through [`hsv_to_rgb`] reproduces the exact
/// original triple for every 16-bit input.
pub fn rgb_to_hsv(r: u16, g: u16, b: u16) -> (f64, f64, f64) {
    let rf = f64::from(r) / f64::from(CHANNEL_MAX);
    let gf = f64::from(g) / f64::from(CHANNEL_MAX);
    let bf = f64::from(b) / f64::from(CHANNEL_MAX);

    let cmax = rf.max(gf.max(bf));
    let cmin = rf.min(gf.min(bf));
    let diff = cmax - cmin;

    let h = if cmax == cmin {
        0.0
    } else if cmax == rf {
        (60.0 * ((gf - bf) / diff) + 360.0) % 360.0
    } else if cmax == gf {
        (60.0 * ((bf - rf) / diff) + 120.0) % 360.0
    } else {
        (60.0 * ((rf - gf) / diff) + 240.0) % 360.0
    };

    if cmax == 0.0 {
        return (h, 0.0, cmax);
    }
    (h, diff / cmax, cmax)
}
