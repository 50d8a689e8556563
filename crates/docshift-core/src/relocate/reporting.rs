//! Relocation reporting and statistics

use std::fmt::Write as _;

use super::RelocationResult;

/// Relocation reporter
pub struct RelocationReporter;

impl RelocationReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(result: &RelocationResult) -> String {
        let mut output = String::new();

        if result.dry_run {
            output.push_str("\n=== Docs Summary (dry run) ===\n");
        } else {
            output.push_str("\n=== Docs Summary ===\n");
        }
        let _ = writeln!(output, "Copied:   {}", result.copied);
        let _ = writeln!(output, "Moved:    {}", result.moved);
        let _ = writeln!(output, "Skipped:  {}", result.skipped);
        for (reason, count) in &result.skip_reasons {
            let _ = writeln!(output, "  {reason}: {count}");
        }

        if !result.warnings.is_empty() {
            let _ = writeln!(output, "\nWarnings ({}):", result.warnings.len());
            for warning in &result.warnings {
                let _ = writeln!(output, "  - {warning}");
            }
        }

        if !result.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", result.errors.len());
            for error in &result.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        let _ = writeln!(output, "\nTotal operations: {}", result.total_operations());

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
