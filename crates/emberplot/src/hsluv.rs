// File: crates/emberplot/src/hsluv.rs
// Summary: HSLuv <-> sRGB conversion (perceptually uniform hue/saturation/lightness).
//
// Port of the reference HSLuv math. Hue is in degrees [0,360), saturation and
// lightness in [0,100]. RGB channels are in [0,1]. No pack crate covers this
// color space, so the transform lives here.

const M: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

const M_INV: [[f64; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

const REF_U: f64 = 0.19783000664283;
const REF_V: f64 = 0.46831999493879;
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// Bounding lines of the RGB gamut in chroma/luma space for a given lightness.
fn bounds(l: f64) -> [(f64, f64); 6] {
    let mut out = [(0.0, 0.0); 6];
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };
    for (c, row) in M.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2usize {
            let tf = t as f64;
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 = (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2
                - 769_860.0 * tf * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * tf;
            out[c * 2 + t] = (top1 / bottom, top2 / bottom);
        }
    }
    out
}

fn ray_length_until_intersect(theta: f64, line: (f64, f64)) -> f64 {
    let (slope, intercept) = line;
    intercept / (theta.sin() - slope * theta.cos())
}

fn max_chroma_for(l: f64, h: f64) -> f64 {
    let hrad = h.to_radians();
    let mut min_len = f64::MAX;
    for line in bounds(l) {
        let len = ray_length_until_intersect(hrad, line);
        if len >= 0.0 && len < min_len {
            min_len = len;
        }
    }
    min_len
}

fn from_linear(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn xyz_to_rgb(xyz: [f64; 3]) -> (f64, f64, f64) {
    let ch = |row: &[f64; 3]| from_linear(row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2]);
    (ch(&M[0]), ch(&M[1]), ch(&M[2]))
}

fn rgb_to_xyz(r: f64, g: f64, b: f64) -> [f64; 3] {
    let lin = [to_linear(r), to_linear(g), to_linear(b)];
    let ch = |row: &[f64; 3]| row[0] * lin[0] + row[1] * lin[1] + row[2] * lin[2];
    [ch(&M_INV[0]), ch(&M_INV[1]), ch(&M_INV[2])]
}

fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

fn xyz_to_luv(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let l = y_to_l(y);
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let div = x + 15.0 * y + 3.0 * z;
    if div == 0.0 {
        return [l, 0.0, 0.0];
    }
    let var_u = 4.0 * x / div;
    let var_v = 9.0 * y / div;
    [l, 13.0 * l * (var_u - REF_U), 13.0 * l * (var_v - REF_V)]
}

fn luv_to_xyz(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}

fn luv_to_lch(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    let c = (u * u + v * v).sqrt();
    let h = if c < 1e-8 {
        0.0
    } else {
        let mut h = v.atan2(u).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        h
    };
    [l, c, h]
}

fn lch_to_luv(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let hrad = h.to_radians();
    [l, hrad.cos() * c, hrad.sin() * c]
}

fn hsluv_to_lch(h: f64, s: f64, l: f64) -> [f64; 3] {
    if l > 99.999_999_9 {
        return [100.0, 0.0, h];
    }
    if l < 1e-8 {
        return [0.0, 0.0, h];
    }
    let c = max_chroma_for(l, h) / 100.0 * s;
    [l, c, h]
}

fn lch_to_hsluv(lch: [f64; 3]) -> (f64, f64, f64) {
    let [l, c, h] = lch;
    if l > 99.999_999_9 {
        return (h, 0.0, 100.0);
    }
    if l < 1e-8 {
        return (h, 0.0, 0.0);
    }
    let s = c / max_chroma_for(l, h) * 100.0;
    (h, s, l)
}

/// Convert an HSLuv triple to sRGB channels in [0,1].
pub fn hsluv_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let (r, g, b) = xyz_to_rgb(luv_to_xyz(lch_to_luv(hsluv_to_lch(h, s, l))));
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Convert sRGB channels in [0,1] to an HSLuv triple.
pub fn rgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    lch_to_hsluv(luv_to_lch(xyz_to_luv(rgb_to_xyz(r, g, b))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn white_and_black_are_fixed_points() {
        let (r, g, b) = hsluv_to_rgb(0.0, 0.0, 100.0);
        assert!(close(r, 1.0, 1e-9) && close(g, 1.0, 1e-9) && close(b, 1.0, 1e-9));
        assert_eq!(hsluv_to_rgb(123.0, 55.0, 0.0), (0.0, 0.0, 0.0));
        let (_, s, l) = rgb_to_hsluv(1.0, 1.0, 1.0);
        assert!(close(s, 0.0, 1e-6));
        assert!(close(l, 100.0, 1e-6));
    }

    #[test]
    fn pure_red_reference_values() {
        // Reference snapshot: #ff0000 -> H 12.177, S 100, L 53.237
        let (h, s, l) = rgb_to_hsluv(1.0, 0.0, 0.0);
        assert!(close(h, 12.177, 1e-2), "h was {h}");
        assert!(close(s, 100.0, 1e-2), "s was {s}");
        assert!(close(l, 53.237, 1e-2), "l was {l}");
    }

    #[test]
    fn round_trip_is_stable() {
        for &(r, g, b) in &[
            (0.13, 0.59, 0.96),
            (0.8, 0.2, 0.4),
            (0.0, 1.0, 0.5),
            (0.25, 0.25, 0.25),
        ] {
            let (h, s, l) = rgb_to_hsluv(r, g, b);
            let (r2, g2, b2) = hsluv_to_rgb(h, s, l);
            assert!(close(r, r2, 1e-6) && close(g, g2, 1e-6) && close(b, b2, 1e-6));
        }
    }
}
