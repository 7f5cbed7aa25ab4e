//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::analyzer::AnalysisReport;
use crate::cli::args::{LexstatArgs, OutputFormat};
use crate::error::Result;

/// The labelled result lines, in render order.
///
/// The label prefixes are part of the external contract; collaborators
/// render each count into a field carrying exactly these prefixes.
const RESULT_LABELS: [(&str, fn(&AnalysisReport) -> usize); 8] = [
    ("Letters: ", |r| r.letters),
    ("Words: ", |r| r.words),
    ("Spaces: ", |r| r.spaces),
    ("Newlines: ", |r| r.newlines),
    ("Special Symbols: ", |r| r.special_symbols),
    ("Pronouns: ", |r| r.pronouns),
    ("Prepositions: ", |r| r.prepositions),
    ("Articles: ", |r| r.articles),
];

/// Render an analysis report according to the CLI output settings.
pub fn output_report(report: &AnalysisReport, args: &LexstatArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            for line in format_report_human(report) {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Format a report as the eight labelled human-readable lines.
pub fn format_report_human(report: &AnalysisReport) -> Vec<String> {
    RESULT_LABELS
        .iter()
        .map(|(label, count)| format!("{label}{}", count(report)))
        .collect()
}

/// Output any serializable value as JSON.
fn output_json<T: Serialize>(result: &T, args: &LexstatArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_lines_carry_literal_prefixes() {
        let report = AnalysisReport {
            letters: 10,
            words: 2,
            spaces: 1,
            newlines: 0,
            special_symbols: 2,
            pronouns: 0,
            prepositions: 0,
            articles: 0,
        };

        let lines = format_report_human(&report);
        assert_eq!(
            lines,
            vec![
                "Letters: 10",
                "Words: 2",
                "Spaces: 1",
                "Newlines: 0",
                "Special Symbols: 2",
                "Pronouns: 0",
                "Prepositions: 0",
                "Articles: 0",
            ]
        );
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = AnalysisReport {
            letters: 17,
            words: 6,
            spaces: 5,
            newlines: 0,
            special_symbols: 1,
            pronouns: 0,
            prepositions: 1,
            articles: 2,
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
