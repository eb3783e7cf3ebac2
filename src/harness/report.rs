//! Pass/fail reporting
//!
//! The report is the harness's sole output artifact besides exit status:
//! one line per command in script order plus an aggregate count.

use colored::Colorize;

/// Outcome of a single control command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable command label
    pub label: String,
    /// Whether the command was accepted
    pub passed: bool,
    /// Failure detail, absent on success
    pub detail: Option<String>,
}

impl CommandResult {
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: true,
            detail: None,
        }
    }

    pub fn fail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }
}

/// Ordered results for one full run
///
/// One result per attempted command, in script order; results are appended
/// by the runner and read only after the run completes.
#[derive(Debug, Default)]
pub struct HarnessReport {
    results: Vec<CommandResult>,
}

impl HarnessReport {
    pub fn push(&mut self, result: CommandResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CommandResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Summary line, e.g. `4/5 commands passed`
    pub fn summary(&self) -> String {
        format!("{}/{} commands passed", self.passed(), self.total())
    }
}

/// Print the per-command lines and the aggregate count
pub fn print_report(report: &HarnessReport) {
    println!("\n{}", "Summary:".cyan());

    for result in report.results() {
        if result.passed {
            println!("  {} {}", "✓".green(), result.label);
        } else {
            match &result.detail {
                Some(detail) => {
                    println!("  {} {}: {}", "✗".red(), result.label, detail.dimmed())
                }
                None => println!("  {} {}", "✗".red(), result.label),
            }
        }
    }

    println!("\n{}", report.summary().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_passes() {
        let mut report = HarnessReport::default();
        report.push(CommandResult::pass("Start cleaning"));
        report.push(CommandResult::fail("Pause cleaning", "busy"));
        report.push(CommandResult::pass("Stop cleaning"));

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 2);
        assert!(!report.all_passed());
        assert_eq!(report.summary(), "2/3 commands passed");
    }

    #[test]
    fn test_results_keep_insertion_order() {
        let mut report = HarnessReport::default();
        report.push(CommandResult::pass("first"));
        report.push(CommandResult::fail("second", "boom"));

        let labels: Vec<&str> = report.results().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
        assert_eq!(report.results()[1].detail.as_deref(), Some("boom"));
    }

    #[test]
    fn test_empty_report_reads_all_passed() {
        let report = HarnessReport::default();
        assert!(report.all_passed());
        assert_eq!(report.summary(), "0/0 commands passed");
    }
}
