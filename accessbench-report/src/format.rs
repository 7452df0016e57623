//! Text Rendering
//!
//! Elapsed times are printed with six significant digits and no trailing
//! zeros, switching to exponent notation outside `[1e-4, 1e6)`, the same
//! shape `printf("%g")` produces.

use crate::OutputFormat;
use crate::report::Report;
use accessbench_core::Measurement;
use std::io::{self, Write};

const SIGNIFICANT_DIGITS: usize = 6;

/// Render milliseconds with six significant digits (`%g` style)
pub fn format_millis(ms: f64) -> String {
    // Round to the target precision first; the exponent after rounding
    // decides between fixed and exponent notation.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, ms);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return ms.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return ms.to_string();
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, ms)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn format_line(measurement: &Measurement, format: OutputFormat) -> String {
    let elapsed = format_millis(measurement.elapsed_ms());
    match format {
        OutputFormat::Human => format!("{} : {} ms", measurement.label(), elapsed),
        OutputFormat::Tab => format!("{}\t{}", measurement.label(), elapsed),
    }
}

/// Format a report as text, one newline-terminated line per measurement
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    let mut output = String::new();
    for measurement in report.measurements() {
        output.push_str(&format_line(measurement, format));
        output.push('\n');
    }
    output
}

/// Write a report to `writer`, one newline-terminated line per measurement
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    writer: &mut W,
) -> io::Result<()> {
    for measurement in report.measurements() {
        writeln!(writer, "{}", format_line(measurement, format))?;
    }
    writer.flush()
}
