//! Property-based tests for the presion-core numerical kernels.
//!
//! Covers frequency-axis invariants, packed-vector round trips, reducer
//! alignment, and interpolation idempotence using proptest for randomized
//! input generation.

use proptest::prelude::*;
use presion_core::{
    AxisMode, CalibrationData, PackedSpectrum, frequency_scale, interp1d_with_uncertainty,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any uniform time axis, the half-layout frequency axis has
    /// N/2 + 1 (integer division) points, starts at zero, and never
    /// decreases.
    #[test]
    fn half_axis_shape(
        n in 2usize..512,
        dt in 1e-10f64..1e-3,
        t0 in -1e-3f64..1e-3,
    ) {
        let time: Vec<f64> = (0..n).map(|i| t0 + i as f64 * dt).collect();
        let f = frequency_scale(&time, AxisMode::Half).unwrap();

        prop_assert_eq!(f.len(), n / 2 + 1);
        prop_assert_eq!(f[0], 0.0);
        for pair in f.windows(2) {
            prop_assert!(pair[1] >= pair[0], "axis must not decrease: {:?}", pair);
        }
    }

    /// The dual layout is exactly twice the half layout, first half equal
    /// to the half layout.
    #[test]
    fn dual_axis_extends_half_axis(
        n in 2usize..256,
        dt in 1e-10f64..1e-4,
    ) {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * dt).collect();
        let half = frequency_scale(&time, AxisMode::Half).unwrap();
        let dual = frequency_scale(&time, AxisMode::Dual).unwrap();

        prop_assert_eq!(dual.len(), 2 * half.len());
        prop_assert_eq!(&dual[..half.len()], &half[..]);
    }

    /// Rebuilding cartesian coordinates from amplitude and phase
    /// reproduces the packed halves within floating-point tolerance.
    #[test]
    fn packed_polar_roundtrip(
        halves in prop::collection::vec(-1e3f64..1e3, 1..64),
    ) {
        let mut data = halves.clone();
        data.extend(halves.iter().map(|v| v * 0.5 - 1.0));

        let packed = PackedSpectrum::new(&data).unwrap();
        let amp = packed.amplitude();
        let phase = packed.phase();

        for i in 0..packed.bins() {
            let re = amp[i] * phase[i].cos();
            let im = amp[i] * phase[i].sin();
            prop_assert!((re - packed.real()[i]).abs() < 1e-9 * (1.0 + amp[i]));
            prop_assert!((im - packed.imag()[i]).abs() < 1e-9 * (1.0 + amp[i]));
        }
    }

    /// Reducing to any sub-range keeps all six arrays the same length and
    /// lands the bounds within one sample spacing of the request.
    #[test]
    fn reducer_alignment(
        n in 4usize..200,
        lo_frac in 0.0f64..0.45,
        hi_frac in 0.55f64..1.0,
    ) {
        let df = 1e5;
        let frequency: Vec<f64> = (0..n).map(|i| 1e6 + i as f64 * df).collect();
        let data = CalibrationData::new(
            frequency.clone(),
            vec![1.0; n],
            vec![-1.0; n],
            vec![0.1; n],
            vec![0.2; n],
            vec![0.01; n],
        ).unwrap();

        let span = frequency[n - 1] - frequency[0];
        let fmin = frequency[0] + lo_frac * span;
        let fmax = frequency[0] + hi_frac * span;
        let reduced = data.reduce_frequency_range(fmin, fmax).unwrap();

        let m = reduced.len();
        prop_assert!(m > 0);
        prop_assert_eq!(reduced.real.len(), m);
        prop_assert_eq!(reduced.imag.len(), m);
        prop_assert_eq!(reduced.var_real.len(), m);
        prop_assert_eq!(reduced.var_imag.len(), m);
        prop_assert_eq!(reduced.covariance.len(), m);
        prop_assert!((reduced.frequency[0] - fmin).abs() <= df);
        prop_assert!((reduced.frequency[m - 1] - fmax).abs() <= df);
    }

    /// Interpolating onto the source grid reproduces values, variances,
    /// and an identity-like sensitivity.
    #[test]
    fn interpolation_idempotent_on_source_grid(
        y in prop::collection::vec(-1e2f64..1e2, 2..48),
    ) {
        let m = y.len();
        let x: Vec<f64> = (0..m).map(|i| 1.0 + i as f64).collect();
        let var: Vec<f64> = (0..m).map(|i| 0.01 * (i + 1) as f64).collect();

        let (values, variances, c) = interp1d_with_uncertainty(&x, &x, &y, &var).unwrap();
        for i in 0..m {
            prop_assert!((values[i] - y[i]).abs() < 1e-9);
            prop_assert!((variances[i] - var[i]).abs() < 1e-9);
            // Each row's weights sum to one.
            prop_assert!((c.row(i).iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    /// Sensitivity rows always sum to one, interpolating or extrapolating:
    /// a constant source stays constant under the mapping.
    #[test]
    fn sensitivity_rows_are_affine(
        targets in prop::collection::vec(-50.0f64..150.0, 1..32),
    ) {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 5.0).collect();
        let y: Vec<f64> = x.iter().map(|v| v * 2.0 + 1.0).collect();
        let var = vec![1.0; 20];

        let (values, _, c) = interp1d_with_uncertainty(&targets, &x, &y, &var).unwrap();
        for (i, &t) in targets.iter().enumerate() {
            prop_assert!((c.row(i).iter().sum::<f64>() - 1.0).abs() < 1e-9);
            // A linear source is reproduced exactly, even extrapolated.
            prop_assert!((values[i] - (t * 2.0 + 1.0)).abs() < 1e-6);
        }
    }
}
