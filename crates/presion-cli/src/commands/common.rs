//! Shared helpers for loading delimited measurement data.

use anyhow::{Context, bail};
use presion_core::CalibrationData;
use rustfft::{FftPlanner, num_complex::Complex};
use std::path::Path;

/// Read a delimited numeric text file into `columns` column vectors.
///
/// The first `header_rows` lines are skipped. Fields split on commas,
/// semicolons, tabs, or spaces; blank lines are ignored; rows may carry
/// extra trailing columns.
pub fn read_columns(
    path: &Path,
    columns: usize,
    header_rows: usize,
) -> anyhow::Result<Vec<Vec<f64>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut cols = vec![Vec::new(); columns];
    for (lineno, line) in content.lines().enumerate().skip(header_rows) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line
            .split([',', ';', '\t', ' '])
            .filter(|s| !s.is_empty())
            .collect();
        if fields.len() < columns {
            bail!(
                "{}:{}: expected {} columns, found {}",
                path.display(),
                lineno + 1,
                columns,
                fields.len()
            );
        }
        for (c, field) in fields.iter().take(columns).enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!("{}:{}: not a number: '{field}'", path.display(), lineno + 1)
            })?;
            cols[c].push(value);
        }
    }
    Ok(cols)
}

/// Load a hydrophone calibration file: frequency (MHz), real, imag,
/// var-real, var-imag, covariance.
pub fn load_calibration(path: &Path, header_rows: usize) -> anyhow::Result<CalibrationData> {
    let cols = read_columns(path, 6, header_rows)?;
    let mut cols = cols.into_iter();
    // read_columns always yields exactly the requested column count
    let mut frequency = cols.next().unwrap();
    let real = cols.next().unwrap();
    let imag = cols.next().unwrap();
    let var_real = cols.next().unwrap();
    let var_imag = cols.next().unwrap();
    let covariance = cols.next().unwrap();

    // Calibration files carry frequency in MHz.
    for f in &mut frequency {
        *f *= 1e6;
    }

    Ok(CalibrationData::new(
        frequency, real, imag, var_real, var_imag, covariance,
    )?)
}

/// Magnitude of the positive-frequency half (`N/2 + 1` bins, integer
/// division) of the DFT of a real signal.
pub fn magnitude_spectrum(samples: &[f64]) -> Vec<f64> {
    let mut buffer: Vec<Complex<f64>> =
        samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    FftPlanner::new()
        .plan_fft_forward(buffer.len())
        .process(&mut buffer);
    buffer.truncate(samples.len() / 2 + 1);
    buffer.iter().map(|c| c.norm()).collect()
}

/// Print the sampling summary of a time axis.
pub fn print_time_summary(time: &[f64]) {
    if time.len() < 2 {
        return;
    }
    let dt = time[1] - time[0];
    println!(
        "  {} samples, dt = {:.3e} s, record {:.3e} s, fs = {:.3} MHz",
        time.len(),
        dt,
        dt * time.len() as f64,
        1.0 / dt / 1e6
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_comma_separated_columns() {
        let file = write_temp("t,p,u\n0.0,1.0,0.1\n1.0,2.0,0.2\n");
        let cols = read_columns(file.path(), 3, 1).unwrap();
        assert_eq!(cols[0], vec![0.0, 1.0]);
        assert_eq!(cols[1], vec![1.0, 2.0]);
        assert_eq!(cols[2], vec![0.1, 0.2]);
    }

    #[test]
    fn skips_blank_lines_and_extra_columns() {
        let file = write_temp("header\n1.0 2.0 3.0 99.0\n\n4.0\t5.0\t6.0\n");
        let cols = read_columns(file.path(), 3, 1).unwrap();
        assert_eq!(cols[0], vec![1.0, 4.0]);
        assert_eq!(cols[2], vec![3.0, 6.0]);
    }

    #[test]
    fn reports_short_rows_with_location() {
        let file = write_temp("h\n1.0,2.0\n");
        let err = read_columns(file.path(), 3, 1).unwrap_err();
        assert!(err.to_string().contains(":2:"), "got: {err}");
    }

    #[test]
    fn calibration_frequency_scaled_to_hz() {
        let file = write_temp("f,re,im,vr,vi,cov\n1.0,0.5,-0.1,0.01,0.02,0.001\n2.0,0.6,-0.2,0.01,0.02,0.001\n");
        let data = load_calibration(file.path(), 1).unwrap();
        assert_eq!(data.frequency, vec![1e6, 2e6]);
        assert_eq!(data.real, vec![0.5, 0.6]);
    }

    #[test]
    fn spectrum_of_dc_signal_peaks_at_zero() {
        let magnitude = magnitude_spectrum(&[1.0; 64]);
        assert_eq!(magnitude.len(), 33);
        assert!((magnitude[0] - 64.0).abs() < 1e-9);
        assert!(magnitude[1] < 1e-9);
    }
}
