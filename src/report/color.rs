#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WORST: Rgb = Rgb(255, 0, 0);
pub const BEST: Rgb = Rgb(0, 255, 0);

impl Rgb {
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[must_use]
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let lerp = |x: u8, y: u8| -> u8 {
        (f64::from(x) + (f64::from(y) - f64::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Where `score` sits between `min` and `max`, from 0.0 (worst) to 1.0 (best).
///
/// When every score is the same there is no spread to measure; all entries
/// share first place and get 1.0.
#[must_use]
pub fn relative_position(score: i64, min: i64, max: i64) -> f64 {
    let spread = max as f64 - min as f64;
    if spread <= 0.0 {
        return 1.0;
    }
    (score as f64 - min as f64) / spread
}

/// Hex color for a relative position, red for the worst and green for the best.
#[must_use]
pub fn score_color(t: f64) -> String {
    lerp_color(WORST, BEST, t).to_hex()
}
