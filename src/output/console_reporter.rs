use std::collections::BTreeMap;
use std::fmt::Write;

use super::writer_json::ScanResult;

const SEPARATOR_WIDTH: usize = 49;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Vulnerable,
    Secure,
}

impl Verdict {
    pub fn of(result: &ScanResult) -> Self {
        if result.is_vulnerable() {
            Verdict::Vulnerable
        } else {
            Verdict::Secure
        }
    }

    pub fn marker(&self) -> &str {
        match self {
            Verdict::Vulnerable => "[!]",
            Verdict::Secure => "[+]",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Verdict::Vulnerable => "VULNERABLE",
            Verdict::Secure => "SECURE",
        }
    }

    pub fn color_code(&self) -> &str {
        match self {
            Verdict::Vulnerable => "\x1b[31m", // Red
            Verdict::Secure => "\x1b[32m",     // Green
        }
    }

    pub fn reset_color() -> &'static str {
        "\x1b[0m"
    }
}

fn format_headers(headers: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = headers.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    format!("{{{}}}", pairs.join(", "))
}

/// Render every result as a colored (or plain) block followed by a separator.
pub fn render_results(results: &[ScanResult], color: bool) -> String {
    let mut out = String::new();

    for result in results {
        let verdict = Verdict::of(result);
        let (start, end) = if color {
            (verdict.color_code(), Verdict::reset_color())
        } else {
            ("", "")
        };

        let _ = writeln!(out, "{}{} {}: {}{}", start, verdict.marker(), verdict.label(), result.url, end);
        let _ = writeln!(out, "{}CORS Headers: {}{}", start, format_headers(&result.cors_headers), end);
        if verdict == Verdict::Vulnerable {
            let _ = writeln!(out, "{}Misconfigurations: [{}]{}", start, result.misconfigurations.join(", "), end);
        }
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    }

    out
}

pub fn print_results(results: &[ScanResult], color: bool) {
    print!("{}", render_results(results, color));
}
