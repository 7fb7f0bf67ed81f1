//! Console output formatter for tracking results

use crate::soap::ProtocolFault;
use colored::Colorize;
use tracking_application::TrackingStatusResponse;

/// Formats tracking results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a tracking response with its full history
    pub fn format(tracking_number: &str, response: &TrackingStatusResponse) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Package {}", tracking_number)));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            response.status.bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Location:".cyan().bold(),
            response.current_location
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Estimated delivery:".cyan().bold(),
            response
                .estimated_delivery_date
                .as_deref()
                .unwrap_or("unknown")
        ));

        output.push_str(&Self::section_header("History"));
        if response.history.is_empty() {
            output.push_str(&format!("  {}\n", "(no events)".dimmed()));
        }
        for event in &response.history {
            output.push_str(&format!(
                "  {}  {}\n",
                event.date.yellow(),
                event.description
            ));
            output.push_str(&format!("  {:24}  {}\n", "", event.location.dimmed()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(response: &TrackingStatusResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a fault for the terminal
    pub fn format_fault(fault: &ProtocolFault) -> String {
        let label = if fault.is_client() {
            "Request rejected".yellow().bold()
        } else {
            "Server error".red().bold()
        };
        let mut output = format!(
            "{} [{}] {}\n",
            label, fault.detail.error_code, fault.detail.error_message
        );
        if !fault.detail.invalid_field.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "field:".dimmed(),
                fault.detail.invalid_field
            ));
        }
        output
    }

    /// Format a fault as JSON
    pub fn format_fault_json(fault: &ProtocolFault) -> String {
        serde_json::to_string_pretty(fault).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
