// src/generators/password.rs
use rand_chacha::ChaCha20Rng;

use crate::generators::charset::{sample_from_class, sample_weighted};
use crate::generators::validation::{check_length, check_required_classes};
use crate::generators::{RandomSource, Result, RngSource};
use crate::models::{Password, PasswordRequest};

/// Builds passwords that start and end with the requested classes and hold
/// at least one character of every required class.
pub struct PasswordGenerator<S = RngSource<ChaCha20Rng>> {
    rng: S,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_source(RngSource::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> PasswordGenerator<S> {
    pub fn with_source(rng: S) -> Self {
        Self { rng }
    }

    /// Generate a password for `request`.
    ///
    /// The first and last characters come from the boundary classes whether
    /// or not those classes are enabled. Each required class not covered by
    /// a boundary gets one guaranteed interior character; the rest of the
    /// interior is filled by the weighted sampler and then shuffled. The
    /// result is checked before it is returned and the first failed check is
    /// reported as is.
    pub fn generate(&mut self, request: &PasswordRequest) -> Result<Password> {
        request.validate()?;

        let interior_len = request.size - 2;
        let start = sample_from_class(&mut self.rng, request.starts_with);

        let mut interior = Vec::with_capacity(interior_len);
        for class in request.unplaced_required_classes() {
            interior.push(sample_from_class(&mut self.rng, class));
        }
        while interior.len() < interior_len {
            interior.push(sample_weighted(&mut self.rng, request));
        }

        let end = sample_from_class(&mut self.rng, request.ends_with);

        // Boundaries stay out of the shuffle
        self.rng.shuffle(&mut interior);

        let mut password = String::with_capacity(request.size);
        password.push(start);
        password.extend(interior);
        password.push(end);

        check_required_classes(&password, request)?;
        check_length(&password, request.size)?;

        Ok(Password::new(password))
    }
}
