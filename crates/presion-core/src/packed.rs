//! Read-only views over packed two-channel spectra.
//!
//! A packed spectrum is a flat array of even length `2N` whose first half
//! holds one semantic component and whose second half the other: the
//! cosine and sine coefficients of a real-valued transform in this crate's
//! convention. [`PackedSpectrum`] names the two halves explicitly instead
//! of leaving the split as an indexing convention at every call site.

use crate::error::{Error, Result};

/// Borrowed view over a packed two-channel vector.
#[derive(Debug, Clone, Copy)]
pub struct PackedSpectrum<'a> {
    data: &'a [f64],
}

impl<'a> PackedSpectrum<'a> {
    /// Wrap a packed vector. Fails with [`Error::InvalidInput`] unless the
    /// length is even.
    pub fn new(data: &'a [f64]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "packed spectrum length must be even, got {}",
                data.len()
            )));
        }
        Ok(Self { data })
    }

    /// Number of frequency bins (half the packed length).
    pub fn bins(&self) -> usize {
        self.data.len() / 2
    }

    /// First half: the real (cosine) coefficients.
    pub fn real(&self) -> &'a [f64] {
        &self.data[..self.bins()]
    }

    /// Second half: the imaginary (sine) coefficients.
    pub fn imag(&self) -> &'a [f64] {
        &self.data[self.bins()..]
    }

    /// Element-wise magnitude `sqrt(re^2 + im^2)`.
    pub fn amplitude(&self) -> Vec<f64> {
        self.real()
            .iter()
            .zip(self.imag())
            .map(|(&re, &im)| re.hypot(im))
            .collect()
    }

    /// Four-quadrant phase `atan2(im, re)` in radians, in `(-pi, pi]`.
    pub fn phase(&self) -> Vec<f64> {
        self.real()
            .iter()
            .zip(self.imag())
            .map(|(&re, &im)| im.atan2(re))
            .collect()
    }
}
