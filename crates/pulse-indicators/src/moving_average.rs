//! Moving average indicators.

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values using a trailing
/// window. A point has a defined average only once at least `period`
/// observations exist; earlier points produce no output.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Get the window length.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Calculate SMA values for the given data.
    ///
    /// Returns one value per input point from index `period - 1` onward, so
    /// the output is empty when fewer than `period` points are supplied.
    pub fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(sum / period_f64);
        }

        result
    }

    /// The average at the most recent point, if defined.
    pub fn latest(&self, data: &[f64]) -> Option<f64> {
        if data.len() < self.period {
            return None;
        }
        let sum: f64 = data[data.len() - self.period..].iter().sum();
        Some(sum / self.period as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];

        assert!(sma.calculate(&data).is_empty());
        assert!(sma.latest(&data).is_none());
    }

    #[test]
    fn test_latest_matches_calculate() {
        let sma = Sma::new(4);
        let data = vec![10.0, 11.0, 12.0, 13.0, 14.0, 15.0];

        let full = sma.calculate(&data);
        assert_eq!(sma.latest(&data), full.last().copied());
    }

    #[test]
    fn test_exact_window_length() {
        let sma = Sma::new(3);
        let data = vec![3.0, 6.0, 9.0];

        assert_eq!(sma.latest(&data), Some(6.0));
    }

    #[test]
    #[should_panic(expected = "Period must be greater than 0")]
    fn test_zero_period_panics() {
        Sma::new(0);
    }
}
