//! Printable report rendering.
//!
//! # Responsibility
//! - Render a standalone HTML document from a sequence of records plus
//!   optional filter labels.
//!
//! # Invariants
//! - Pure string assembly; no I/O and no store access.
//! - Record fields are escaped before interpolation into markup.

use crate::model::employee::Employee;
use chrono::NaiveDate;

/// Filter labels echoed in the report header when a filter was active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub gender: Option<String>,
    pub status: Option<String>,
}

impl ReportFilters {
    fn is_empty(&self) -> bool {
        self.gender.is_none() && self.status.is_none()
    }
}

/// Renders the employee list as a complete printable HTML document.
///
/// `generated_on` becomes the date stamp under the title, formatted the
/// en-IN way (`6 August 2026`).
pub fn render_employee_list(
    employees: &[Employee],
    filters: &ReportFilters,
    generated_on: NaiveDate,
) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>\n<title>Employee List</title>\n<style>\n");
    html.push_str(REPORT_STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("<h1>Employee List</h1>\n");
    html.push_str(&format!(
        "<div class=\"timestamp\">Generated on {}</div>\n",
        generated_on.format("%-d %B %Y")
    ));

    if !filters.is_empty() {
        html.push_str("<div class=\"filters\"><strong>Applied filters:</strong> ");
        let mut labels = Vec::new();
        if let Some(gender) = filters.gender.as_deref() {
            labels.push(format!("Gender: {}", escape_html(gender)));
        }
        if let Some(status) = filters.status.as_deref() {
            labels.push(format!("Status: {}", escape_html(status)));
        }
        html.push_str(&labels.join(" | "));
        html.push_str("</div>\n");
    }

    html.push_str("<table>\n<thead>\n<tr>");
    for heading in ["ID", "Full Name", "Gender", "Date of Birth", "State", "Status"] {
        html.push_str(&format!("<th>{heading}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for employee in employees {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&employee.id),
            escape_html(&employee.full_name),
            employee.gender.label(),
            employee.date_of_birth.format("%-d %B %Y"),
            escape_html(&employee.state),
            if employee.is_active { "Active" } else { "Inactive" },
        ));
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(&format!(
        "<div class=\"summary\">Total records: {}</div>\n",
        employees.len()
    ));
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const REPORT_STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
.container { max-width: 900px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 8px; }
h1 { color: #333; text-align: center; margin-bottom: 10px; }
.timestamp { text-align: center; color: #666; margin-bottom: 20px; font-size: 14px; }
.filters { background-color: #f9f9f9; padding: 10px; margin-bottom: 20px; border-left: 4px solid #4f46e5; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th { background-color: #4f46e5; color: white; padding: 12px; text-align: left; font-weight: bold; }
td { padding: 12px; border-bottom: 1px solid #ddd; }
.summary { margin-top: 20px; color: #666; font-size: 14px; }
";

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
