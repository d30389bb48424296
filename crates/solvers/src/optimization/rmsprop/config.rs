use thiserror::Error;

/// Configuration for RMSProp descent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    alpha: f64,
    rho: f64,
    epsilon: f64,
    max_iters: usize,
    h: f64,
    grad_tol: f64,
}

/// Errors that can occur when validating an RMSProp config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("rho must be in [0, 1)")]
    Rho,

    #[error("epsilon must be finite and non-negative")]
    Epsilon,

    #[error("h must be finite and positive")]
    Step,

    #[error("grad_tol must be finite and non-negative")]
    GradTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1, 0.9, 1e-8, 100, 1e-5, 0.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated parameters.
    ///
    /// - `alpha`: learning rate
    /// - `rho`: decay of the squared-gradient average
    /// - `epsilon`: added to the root mean square to avoid dividing by zero
    /// - `max_iters`: number of descent steps
    /// - `h`: central-difference step for the gradient
    /// - `grad_tol`: stop once the gradient norm is at or below this value
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range or non-finite.
    pub fn new(
        alpha: f64,
        rho: f64,
        epsilon: f64,
        max_iters: usize,
        h: f64,
        grad_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !(0.0..1.0).contains(&rho) {
            return Err(ConfigError::Rho);
        }
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::Step);
        }
        if !grad_tol.is_finite() || grad_tol < 0.0 {
            return Err(ConfigError::GradTol);
        }

        Ok(Self {
            alpha,
            rho,
            epsilon,
            max_iters,
            h,
            grad_tol,
        })
    }

    /// Returns the learning rate.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the decay factor of the squared-gradient average.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the stabilizing term added to the root mean square.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of descent steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the finite-difference step used for gradients.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the gradient norm at which the descent is considered converged.
    #[must_use]
    pub fn grad_tol(&self) -> f64 {
        self.grad_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.rho(), 0.9);
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        assert_eq!(Config::new(0.0, 0.9, 1e-8, 10, 1e-5, 0.0), Err(ConfigError::Alpha));
        assert_eq!(Config::new(0.1, 1.0, 1e-8, 10, 1e-5, 0.0), Err(ConfigError::Rho));
        assert_eq!(Config::new(0.1, 0.9, -1.0, 10, 1e-5, 0.0), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(0.1, 0.9, 1e-8, 10, 0.0, 0.0), Err(ConfigError::Step));
        assert_eq!(
            Config::new(0.1, 0.9, 1e-8, 10, 1e-5, f64::NAN),
            Err(ConfigError::GradTol)
        );
    }
}
