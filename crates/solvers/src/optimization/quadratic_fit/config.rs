use thiserror::Error;

/// Configuration for quadratic fit search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    iters: usize,
}

/// Errors that can occur when validating a quadratic fit search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("iters must be at least 1")]
    ZeroIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(5).unwrap()
    }
}

impl Config {
    /// Creates a new config running exactly `iters` refinement steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `iters` is zero.
    pub fn new(iters: usize) -> Result<Self, ConfigError> {
        if iters == 0 {
            return Err(ConfigError::ZeroIters);
        }

        Ok(Self { iters })
    }

    /// Returns the number of refinement steps.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_are_rejected() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroIters));
        assert_eq!(Config::new(1).map(|c| c.iters()), Ok(1));
    }

    #[test]
    fn default_runs_five_steps() {
        assert_eq!(Config::default().iters(), 5);
    }
}
