//! Magnitude to decibel conversion

/// What a zero (or underflowing) magnitude turns into
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DbFloor {
    /// log10(0) is left as negative infinity
    #[default]
    NegInfinity,

    /// Results below this level (in dB) are raised to it
    Clamp(f64),
}

impl DbFloor {
    fn apply(self, db: f64) -> f64 {
        match self {
            DbFloor::NegInfinity => db,
            DbFloor::Clamp(floor) => db.max(floor),
        }
    }
}

/// 20*log10(|X|/reference)
pub fn magnitude_to_db(magnitude: f64, reference: f64, floor: DbFloor) -> f64 {
    floor.apply(20.0 * (magnitude / reference).log10())
}

/// Convert a whole magnitude spectrum
pub fn spectrum_to_db(magnitudes: &[f64], reference: f64, floor: DbFloor) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&mag| magnitude_to_db(mag, reference, floor))
        .collect()
}
