//! Basic example demonstrating the spectral stack
//!
//! Run with: cargo run --example basic -p spectral-facade

use spectral_facade::prelude::*;
use spectral_facade::spectrum_report;
use std::f64::consts::PI;

fn main() -> Result<()> {
    println!("=== spectral Basic Examples ===\n");

    // Two weeks of hourly solar-like generation
    let data: Vec<f64> = (0..24 * 14)
        .map(|i| {
            let hour = (i % 24) as f64;
            0.2 + 0.6 * ((hour - 6.0) * PI / 12.0).sin().max(0.0)
        })
        .collect();

    // 1. Dominant frequencies
    println!("1. Dominant frequencies");
    let report = spectrum_report(&data, 5)?;
    println!(
        "   n = {}, padded to {}",
        report.signal_len, report.transform_len
    );
    for f in &report.frequencies {
        println!(
            "   #{} bin {:>3}  period {:>6.1}  magnitude {:.2}",
            f.rank, f.bin, f.period, f.magnitude
        );
    }

    // 2. Decomposition
    println!("\n2. Seasonal decomposition (period = 24)");
    let decomposition = decompose(&data, 24)?;
    println!(
        "   Seasonality strength: {:.3}%",
        decomposition.seasonality_strength() * 100.0
    );
    for row in decomposition.rows(6) {
        println!(
            "   {:>3}  orig {:.3}  trend {:.3}  seasonal {:+.3}  residual {:+.3}",
            row.index, row.original, row.trend, row.seasonal, row.residual
        );
    }

    println!("\n=== Examples Complete ===");
    Ok(())
}
