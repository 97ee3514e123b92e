//! Frequency axis for a one-sided spectrum

/// What the last bin of the axis is labelled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AxisBound {
    /// Last bin sits at the sample rate itself, as the debug plots always drew it
    #[default]
    SampleRate,

    /// Last bin sits at sample_rate / 2, where the N/2 bin really is
    Nyquist,
}

impl AxisBound {
    /// Upper end of the axis in Hz
    pub fn upper_hz(self, sample_rate: f64) -> f64 {
        match self {
            AxisBound::SampleRate => sample_rate,
            AxisBound::Nyquist => sample_rate / 2.0,
        }
    }
}

/// `n` evenly spaced values from `start` to `stop`, both ends included
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            // Pin the end point so it does not drift by rounding
            values[n - 1] = stop;
            values
        }
    }
}

/// Frequencies in Hz for `num_bins` one-sided bins
pub fn frequency_axis(num_bins: usize, sample_rate: f64, bound: AxisBound) -> Vec<f64> {
    linspace(0.0, bound.upper_hz(sample_rate), num_bins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_bins() {
        let axis = frequency_axis(5, 48000.0, AxisBound::SampleRate);
        assert_eq!(axis, vec![0.0, 12000.0, 24000.0, 36000.0, 48000.0]);
    }

    #[test]
    fn test_three_bins() {
        let axis = frequency_axis(3, 48000.0, AxisBound::SampleRate);
        assert_eq!(axis, vec![0.0, 24000.0, 48000.0]);

        let nyquist = frequency_axis(3, 48000.0, AxisBound::Nyquist);
        assert_eq!(nyquist, vec![0.0, 12000.0, 24000.0]);
    }

    #[test]
    fn test_even_spacing() {
        let axis = frequency_axis(1001, 48000.0, AxisBound::SampleRate);
        assert_eq!(axis.len(), 1001);
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[1000], 48000.0);

        for pair in axis.windows(2) {
            let step = pair[1] - pair[0];
            assert!(step > 0.0);
            assert!((step - 48.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
    }
}
