//! Reference low-pass frequency responses.
//!
//! Closed-form evaluations of ideal filter models used as comparison
//! curves next to measured hydrophone responses. No uncertainty attaches
//! to any of these: they describe ideal filters, not measured data.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Kaiser window shape parameter used by [`kaiser_lowpass`].
const KAISER_BETA: f64 = 8.0;

/// Analog Bessel low-pass response evaluated at the given frequencies.
///
/// Built from the reverse Bessel polynomial of the given order and
/// phase-normalized: at `fcut` the phase lag equals `order * pi/4`, the
/// default cutoff convention of analog design tools. Order 0 degenerates
/// to a flat unity response.
pub fn bessel_lowpass(f: &[f64], fcut: f64, order: usize) -> Vec<Complex64> {
    if order == 0 {
        return vec![Complex64::new(1.0, 0.0); f.len()];
    }
    let theta = reverse_bessel_coefficients(order);
    let alpha = phase_normalization_scale(&theta, order);
    let dc = theta[0];
    f.iter()
        .map(|&fi| {
            let s = Complex64::new(0.0, alpha * fi / fcut);
            dc / polyval(&theta, s)
        })
        .collect()
}

/// Windowed-sinc FIR low-pass (Kaiser window, beta = 8) evaluated at
/// arbitrary frequencies through its transfer function.
///
/// `taps` is the filter length; the design is a unity-DC-gain windowed
/// sinc with cutoff `fcut` at sampling rate `sample_rate`, and the
/// response is `H = sum h_k * e^{-j*omega*k}` at `omega = 2*pi*f/sample_rate`.
pub fn kaiser_lowpass(f: &[f64], fcut: f64, taps: usize, sample_rate: f64) -> Vec<Complex64> {
    let h = windowed_sinc_taps(taps.max(1), 2.0 * fcut / sample_rate, KAISER_BETA);
    f.iter()
        .map(|&fi| eval_transfer(&h, 2.0 * PI * fi / sample_rate))
        .collect()
}

/// Single-pole-squared low-pass `1/(1 + j*f/fc)^2`.
pub fn simple_lowpass(f: &[f64], fcut: f64) -> Vec<Complex64> {
    f.iter()
        .map(|&fi| {
            let denom = Complex64::new(1.0, fi / fcut);
            Complex64::new(1.0, 0.0) / (denom * denom)
        })
        .collect()
}

/// N-th order Butterworth low-pass magnitude response
/// `sqrt(1 / (1 + (f/fc)^(2*order)))`.
pub fn butterworth_magnitude(f: &[f64], fcut: f64, order: usize) -> Vec<f64> {
    f.iter()
        .map(|&fi| (1.0 / (1.0 + (fi / fcut).powi(2 * order as i32))).sqrt())
        .collect()
}

/// Coefficients of the reverse Bessel polynomial `theta_n(s) = sum a_k * s^k`
/// in ascending order: `a_k = (2n-k)! / (2^(n-k) * k! * (n-k)!)`.
fn reverse_bessel_coefficients(order: usize) -> Vec<f64> {
    (0..=order)
        .map(|k| {
            factorial(2 * order - k)
                / (2f64.powi((order - k) as i32) * factorial(k) * factorial(order - k))
        })
        .collect()
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|i| i as f64).product()
}

/// Evaluate an ascending-order polynomial at a complex point (Horner).
fn polyval(coeffs: &[f64], s: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Unwrapped phase of `theta(jw)`, tracked from w = 0 in small steps so
/// the atan2 wraps at +/-pi never lose a turn.
fn unwrapped_phase(theta: &[f64], w: f64) -> f64 {
    const STEPS: usize = 256;
    let mut phase = 0.0;
    let mut prev = 0.0;
    for k in 1..=STEPS {
        let wk = w * k as f64 / STEPS as f64;
        let arg = polyval(theta, Complex64::new(0.0, wk)).arg();
        let mut delta = arg - prev;
        if delta > PI {
            delta -= 2.0 * PI;
        } else if delta < -PI {
            delta += 2.0 * PI;
        }
        phase += delta;
        prev = arg;
    }
    phase
}

/// Frequency scale that puts the polynomial's phase lag at `order * pi/4`,
/// found by bisection on the unwrapped phase.
fn phase_normalization_scale(theta: &[f64], order: usize) -> f64 {
    let target = order as f64 * PI / 4.0;
    let mut hi = 1.0;
    for _ in 0..64 {
        if unwrapped_phase(theta, hi) >= target {
            break;
        }
        hi *= 2.0;
    }
    let mut lo = 0.0;
    for _ in 0..100 {
        let mid = 0.5 * (lo + hi);
        if unwrapped_phase(theta, mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Windowed-sinc low-pass taps with unity DC gain. `cutoff` is normalized
/// to the Nyquist frequency, in (0, 1).
fn windowed_sinc_taps(taps: usize, cutoff: f64, beta: f64) -> Vec<f64> {
    let m = (taps - 1) as f64;
    let centre = m / 2.0;
    let mut h: Vec<f64> = (0..taps)
        .map(|i| {
            let x = i as f64 - centre;
            cutoff * sinc(cutoff * x) * kaiser_window(i as f64, m, beta)
        })
        .collect();
    let sum: f64 = h.iter().sum();
    for v in &mut h {
        *v /= sum;
    }
    h
}

fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

fn kaiser_window(i: f64, m: f64, beta: f64) -> f64 {
    if m < 1e-12 {
        return 1.0;
    }
    let arg = beta * (1.0 - (2.0 * i / m - 1.0).powi(2)).max(0.0).sqrt();
    bessel_i0(arg) / bessel_i0(beta)
}

/// Zeroth-order modified Bessel function of the first kind (series
/// expansion).
fn bessel_i0(x: f64) -> f64 {
    let mut sum = 1.0;
    let mut term = 1.0;
    for k in 1..50 {
        term *= (x / (2.0 * k as f64)).powi(2);
        sum += term;
        if term < 1e-20 {
            break;
        }
    }
    sum
}

/// Evaluate `sum c_k * e^{-j*omega*k}` at digital frequency `omega`.
fn eval_transfer(coeffs: &[f64], omega: f64) -> Complex64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| c * Complex64::from_polar(1.0, -(k as f64) * omega))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_lowpass_unity_at_dc() {
        let h = simple_lowpass(&[0.0], 1e6);
        assert_eq!(h[0].re, 1.0);
        assert_eq!(h[0].im, 0.0);
    }

    #[test]
    fn simple_lowpass_rolls_off_12db_per_octave() {
        let fcut = 1e6;
        let h = simple_lowpass(&[100.0 * fcut, 200.0 * fcut], fcut);
        let ratio = h[0].norm() / h[1].norm();
        // Two poles: one octave costs a factor of four far above cutoff.
        assert!((ratio - 4.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn butterworth_unity_at_dc() {
        let mag = butterworth_magnitude(&[0.0], 2e6, 5);
        assert_eq!(mag[0], 1.0);
    }

    #[test]
    fn butterworth_half_power_at_cutoff() {
        for order in [1, 2, 5, 8] {
            let mag = butterworth_magnitude(&[2e6], 2e6, order);
            assert!(
                (mag[0] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12,
                "order {order}: got {}",
                mag[0]
            );
        }
    }

    #[test]
    fn bessel_second_order_matches_closed_form() {
        // Phase normalization of theta_2 scales by sqrt(3), giving the
        // classic s^2 + sqrt(3)*s + 1 denominator.
        let fcut = 1e6;
        let f = [0.0, fcut, 10.0 * fcut];
        let h = bessel_lowpass(&f, fcut, 2);
        assert!((h[0].norm() - 1.0).abs() < 1e-9);
        assert!((h[1].arg() + PI / 2.0).abs() < 1e-6, "got {}", h[1].arg());
        let w = 10.0;
        let expected = (Complex64::new(1.0, 0.0)
            / Complex64::new(1.0 - w * w, 3f64.sqrt() * w))
        .norm();
        assert!((h[2].norm() - expected).abs() < 1e-9);
    }

    #[test]
    fn bessel_is_monotone_lowpass() {
        let fcut = 5e5;
        let f: Vec<f64> = (0..40).map(|i| i as f64 * 1e5).collect();
        let h = bessel_lowpass(&f, fcut, 4);
        for pair in h.windows(2) {
            assert!(pair[1].norm() <= pair[0].norm() + 1e-12);
        }
    }

    #[test]
    fn kaiser_unity_at_dc() {
        let h = kaiser_lowpass(&[0.0], 1e6, 51, 1e8);
        assert!((h[0].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kaiser_attenuates_stopband() {
        let fcut = 1e6;
        let fs = 2e7;
        let h = kaiser_lowpass(&[0.2 * fcut, 5.0 * fcut], fcut, 101, fs);
        assert!(h[0].norm() > 0.9, "passband gain {}", h[0].norm());
        assert!(h[1].norm() < 1e-3, "stopband gain {}", h[1].norm());
    }

    #[test]
    fn bessel_i0_reference_values() {
        assert!((bessel_i0(0.0) - 1.0).abs() < 1e-12);
        assert!((bessel_i0(1.0) - 1.2660658).abs() < 1e-6);
    }
}
