use super::{CommandKind, CommandResult, CommandSummary};
use crate::issues::{Issue, Report, Severity, compare_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();

    let kind = match summary {
        CommandSummary::Extract(_) => CommandKind::Extract,
        CommandSummary::Init(_) => CommandKind::Init,
    };

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        kind,
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
        source_files_checked,
    }
}
