//! Verify command: catalog data integrity checks

use anyhow::Result;

use bloom::verify::verify_catalogs;

/// Run all catalog checks; returns false when errors were found
pub async fn verify_command() -> Result<bool> {
    println!("Verifying catalog data integrity...\n");

    let report = verify_catalogs();

    for line in &report.passed {
        println!("  ok: {line}");
    }
    for line in &report.warnings {
        println!("  warn: {line}");
    }
    for line in &report.errors {
        eprintln!("  error: {line}");
    }

    println!();
    if report.is_ok() {
        if report.warnings.is_empty() {
            println!("All data integrity checks passed.");
        } else {
            println!(
                "All data integrity checks passed ({} warning{}).",
                report.warnings.len(),
                if report.warnings.len() == 1 { "" } else { "s" }
            );
        }
    } else {
        eprintln!(
            "Found {} data integrity error{}.",
            report.errors.len(),
            if report.errors.len() == 1 { "" } else { "s" }
        );
    }

    Ok(report.is_ok())
}
