//! Skew-normal distribution fitted by the method of moments.
//!
//! `statrs` has no skew-normal, so the CDF is built from its standard normal:
//! `F(x) = Φ(z) − 2·T(z, α)` with `z = (x − ξ) / ω` and Owen's T function
//! integrated numerically.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

/// Largest sample skewness a skew-normal can reproduce is just below 0.9953.
const MAX_SKEWNESS: f64 = 0.99;

/// Simpson intervals used for Owen's T. Must be even.
const OWENS_T_INTERVALS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewNormal {
    location: f64,
    scale: f64,
    shape: f64,
}

impl SkewNormal {
    /// `None` unless `scale` is positive and every parameter is finite.
    pub fn new(location: f64, scale: f64, shape: f64) -> Option<Self> {
        if !(location.is_finite() && scale.is_finite() && shape.is_finite()) || scale <= 0.0 {
            return None;
        }
        Some(Self {
            location,
            scale,
            shape,
        })
    }

    /// Method-of-moments fit. `None` for fewer than two values or zero variance.
    pub fn fit(sample: &[f64]) -> Option<Self> {
        if sample.len() < 2 {
            return None;
        }
        let n = sample.len() as f64;
        let mean = sample.iter().sum::<f64>() / n;
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        if variance <= f64::EPSILON * mean.abs().max(1.0) {
            return None;
        }
        let third = sample.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / n;
        let skewness = (third / variance.powf(1.5)).clamp(-MAX_SKEWNESS, MAX_SKEWNESS);

        let g = skewness.abs().powf(2.0 / 3.0);
        let b = ((4.0 - PI) / 2.0).powf(2.0 / 3.0);
        let delta = skewness.signum() * (PI / 2.0 * g / (g + b)).sqrt();
        let shape = delta / (1.0 - delta * delta).sqrt();
        let scale = (variance / (1.0 - 2.0 * delta * delta / PI)).sqrt();
        let location = mean - scale * delta * (2.0 / PI).sqrt();

        Self::new(location, scale, shape)
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        (Normal::standard().cdf(z) - 2.0 * owens_t(z, self.shape)).clamp(0.0, 1.0)
    }

    /// Upper-tail probability `1 − F(x)`, computed without cancellation.
    pub fn sf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        (Normal::standard().sf(z) + 2.0 * owens_t(z, self.shape)).clamp(0.0, 1.0)
    }
}

/// Owen's T function `T(h, a) = 1/2π ∫₀ᵃ exp(−h²(1 + x²)/2) / (1 + x²) dx`.
fn owens_t(h: f64, a: f64) -> f64 {
    if a == 0.0 {
        return 0.0;
    }
    let f = |x: f64| (-0.5 * h * h * (1.0 + x * x)).exp() / (1.0 + x * x);
    let step = a / OWENS_T_INTERVALS as f64;
    let inner: f64 = (1..OWENS_T_INTERVALS)
        .map(|i| {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            weight * f(i as f64 * step)
        })
        .sum();
    (f(0.0) + inner + f(a)) * step / 3.0 / (2.0 * PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owens_t_known_values() {
        // T(0, a) = atan(a) / 2π
        assert!((owens_t(0.0, 1.0) - 0.125).abs() < 1e-9);
        assert!((owens_t(0.5, -1.0) + owens_t(0.5, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_shape_is_the_normal_distribution() {
        let sn = SkewNormal::new(0.0, 1.0, 0.0).unwrap();
        assert!((sn.cdf(0.0) - 0.5).abs() < 1e-9);
        assert!((sn.cdf(1.96) - 0.975).abs() < 1e-3);
    }

    #[test]
    fn cdf_and_sf_are_complementary() {
        let sn = SkewNormal::new(1.0, 2.0, 3.0).unwrap();
        for x in [-3.0, 0.0, 1.0, 2.5, 6.0] {
            assert!((sn.cdf(x) + sn.sf(x) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn positive_shape_puts_half_mass_above_location() {
        // P(X > ξ) = 1/2 + atan(α)/π for a skew-normal.
        let sn = SkewNormal::new(0.0, 1.0, 2.0).unwrap();
        let expected = 0.5 + 2.0_f64.atan() / PI;
        assert!((sn.sf(0.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn fit_recovers_moments() {
        let sample = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 9.0];
        let sn = SkewNormal::fit(&sample).unwrap();
        assert!(sn.shape() > 0.0);
        let delta = sn.shape() / (1.0 + sn.shape().powi(2)).sqrt();
        let mean = sn.location() + sn.scale() * delta * (2.0 / PI).sqrt();
        assert!((mean - 3.375).abs() < 1e-9);
    }

    #[test]
    fn degenerate_samples_do_not_fit() {
        assert!(SkewNormal::fit(&[1.0]).is_none());
        assert!(SkewNormal::fit(&[2.0, 2.0, 2.0]).is_none());
    }
}
