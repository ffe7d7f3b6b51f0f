//! Annealing configuration.

/// Default perturbation budget. The loop always runs the full budget;
/// there is no convergence check.
pub const MAX_ITERATIONS: usize = 10_000;

/// Default starting temperature.
pub const INITIAL_TEMPERATURE: f64 = 10_000.0;

/// Default multiplicative temperature decay, applied once per
/// iteration regardless of the acceptance outcome.
pub const COOLING_RATE: f64 = 0.999;

/// Configuration for the annealing search.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(50_000)
///     .with_cooling_rate(0.9995)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Fixed count of perturbation attempts.
    pub max_iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` seeds from the OS once.
    pub seed: Option<u64>,

    /// When `true` (the default), the result is the lowest-cost tour
    /// seen at any point during the walk. When `false`, the result is
    /// whatever tour was last accepted, which an accepted worsening
    /// move can leave above a previously seen optimum.
    pub return_best: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            initial_temperature: INITIAL_TEMPERATURE,
            cooling_rate: COOLING_RATE,
            seed: None,
            return_best: true,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_return_best(mut self, return_best: bool) -> Self {
        self.return_best = return_best;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.max_iterations, 10_000);
        assert!((config.initial_temperature - 10_000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.999).abs() < 1e-12);
        assert!(config.return_best);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AnnealConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        assert!(AnnealConfig::default()
            .with_cooling_rate(1.0)
            .validate()
            .is_err());
        assert!(AnnealConfig::default()
            .with_cooling_rate(0.0)
            .validate()
            .is_err());
    }
}
