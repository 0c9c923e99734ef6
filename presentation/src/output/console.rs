//! Console output formatter for batch reports

use colored::Colorize;
use quiz_application::BatchReport;
use quiz_domain::{QuestionOutcome, preview};

/// Formats batch reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &BatchReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quiz Results"));
        output.push('\n');

        for (index, entry) in report.questions.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("Q{}.", index + 1).cyan().bold(),
                entry.question
            ));

            let chosen = entry.outcome.chosen_index();
            for (i, option) in entry.options.iter().enumerate() {
                if Some(i) == chosen {
                    output.push_str(&format!("  {} {}\n", "*".green().bold(), option.green()));
                } else {
                    output.push_str(&format!("    {}\n", option.dimmed()));
                }
            }

            match &entry.outcome {
                QuestionOutcome::Resolved {
                    score, attempts, ..
                } => output.push_str(&format!(
                    "  {} score {:.2}, {} attempt(s)\n",
                    "resolved:".green(),
                    score,
                    attempts
                )),
                QuestionOutcome::Unresolved { reason, attempts } => {
                    output.push_str(&format!(
                        "  {} {}, {} attempt(s)\n",
                        "unresolved:".red(),
                        reason,
                        attempts
                    ));
                    for record in &entry.attempts {
                        if let Some(failure) = &record.failure {
                            output.push_str(&format!(
                                "    attempt {}: {}\n",
                                record.attempt,
                                preview(&failure.to_string(), 80)
                            ));
                        }
                    }
                }
            }
        }

        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!(
            "{} {}/{}   {} {}   {} {}\n",
            "Resolved:".bold(),
            report.resolved_count(),
            report.total(),
            "Unresolved:".bold(),
            report.unresolved_count(),
            "Attempts:".bold(),
            report.total_attempts()
        ));
        let elapsed = report.finished_at - report.started_at;
        output.push_str(&format!(
            "{} {:.1}s\n",
            "Elapsed:".bold(),
            elapsed.num_milliseconds() as f64 / 1000.0
        ));
        if report.cancelled {
            output.push_str(&format!("{}\n", "Run was cancelled.".yellow().bold()));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &BatchReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
