use crate::models::qa::{CriticalIssue, Issue, Severity, Summary};

/// Single pass over the issues. Counters only exist for severities and types
/// that occur; critical issues keep their encounter order.
pub fn build_summary(issues: &[Issue]) -> Summary {
    let mut summary = Summary {
        total_issues: issues.len(),
        ..Summary::default()
    };

    for issue in issues {
        *summary.by_severity.entry(issue.severity()).or_insert(0) += 1;
        *summary.by_type.entry(issue.issue_type()).or_insert(0) += 1;

        if issue.severity() == Severity::Critical {
            summary.critical_issues.push(CriticalIssue {
                title: issue.title().to_string(),
                issue_type: issue.issue_type(),
            });
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::qa::IssueType;

    fn issue(issue_type: IssueType, severity: Severity, title: &str) -> Issue {
        Issue::builder(issue_type, severity, title, "").build()
    }

    #[test]
    fn empty_list_has_no_counters() {
        let summary = build_summary(&[]);
        assert_eq!(summary.total_issues, 0);
        assert!(summary.by_severity.is_empty());
        assert!(summary.by_type.is_empty());
        assert!(summary.critical_issues.is_empty());
    }

    #[test]
    fn counts_partition_the_issue_list() {
        let issues = vec![
            issue(IssueType::Security, Severity::Critical, "Page Served Over HTTP"),
            issue(IssueType::Accessibility, Severity::High, "Image Missing Alt Text"),
            issue(IssueType::Accessibility, Severity::High, "Image Missing Alt Text"),
            issue(IssueType::Bug, Severity::Critical, "Checkout crashes"),
            issue(IssueType::Performance, Severity::Low, "Slow Page Load"),
        ];
        let summary = build_summary(&issues);

        assert_eq!(summary.total_issues, 5);
        assert_eq!(summary.by_severity.values().sum::<usize>(), 5);
        assert_eq!(summary.by_type.values().sum::<usize>(), 5);
        assert_eq!(summary.by_severity[&Severity::High], 2);
        assert_eq!(summary.by_type[&IssueType::Accessibility], 2);
        assert!(!summary.by_severity.contains_key(&Severity::Medium));

        let critical: Vec<&str> = summary
            .critical_issues
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(critical, vec!["Page Served Over HTTP", "Checkout crashes"]);
        assert_eq!(summary.critical_issues[1].issue_type, IssueType::Bug);
    }
}
