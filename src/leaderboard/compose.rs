//! Assembles leaderboard sections into the markdown document.

use crate::config::LeaderboardConfig;
use crate::dataset::{Dataset, Filter, Semester};
use crate::leaderboard::table::render_table;
use crate::metrics::MetricDescriptor;

const FOOTER: &str = "*Leaderboard auto-generated from data in `/database/` directory.*";

/// Title, description and the metrics legend.
fn document_header(config: &LeaderboardConfig) -> Vec<String> {
    let mut lines = vec![
        format!("# {}", config.title),
        String::new(),
        config.description.clone(),
        String::new(),
        "## Metrics".to_string(),
        String::new(),
        "| Metric | Description | Better |".to_string(),
        "|--------|-------------|--------|".to_string(),
    ];

    for metric in &config.metrics {
        let better = if metric.higher_is_better { "Higher" } else { "Lower" };
        lines.push(format!("| {} | {} | {better} |", metric.label, metric.description));
    }

    lines.push(String::new());
    lines
}

fn document_footer() -> Vec<String> {
    vec!["---".into(), String::new(), FOOTER.into(), String::new()]
}

/// The "Quick Navigation" table: the all-time view, then every semester.
pub fn navigation(semesters: &[Semester]) -> String {
    let mut lines = vec![
        "## Quick Navigation".to_string(),
        String::new(),
        "| View | Link |".to_string(),
        "|------|------|".to_string(),
        "| All-Time Rankings | [Jump to All-Time](#all-time-leaderboard) |".to_string(),
    ];

    for semester in semesters {
        let title = semester.title();
        lines.push(format!(
            "| {title} | [Jump to {title}](#{}) |",
            semester.anchor()
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

fn metric_tables(dataset: &Dataset, metrics: &[MetricDescriptor], show_semester: bool) -> Vec<String> {
    metrics
        .iter()
        .map(|metric| render_table(dataset.records(), metric, show_semester))
        .collect()
}

/// Rankings over every loaded record, with semester and university columns.
pub fn all_time_leaderboard(dataset: &Dataset, metrics: &[MetricDescriptor]) -> String {
    if dataset.is_empty() {
        return "## All-Time Leaderboard\n\nNo data available.\n\n".into();
    }

    let mut lines = vec![
        "## All-Time Leaderboard".to_string(),
        String::new(),
        "*Rankings across all semesters*".to_string(),
        String::new(),
    ];
    lines.extend(metric_tables(dataset, metrics, true));
    lines.join("\n")
}

/// Rankings within one semester, headed by the participating universities.
pub fn semester_leaderboard(
    dataset: &Dataset,
    semester: &Semester,
    metrics: &[MetricDescriptor],
) -> String {
    let title = semester.title();
    let data = dataset.filtered(&Filter::semester(&semester.year, &semester.semester));

    if data.is_empty() {
        return format!("## {title}\n\nNo data available for this semester.\n\n");
    }

    let universities = data
        .universities()
        .iter()
        .map(|u| u.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("## {title}"),
        String::new(),
        format!("*Universities: {universities}*"),
        String::new(),
    ];
    lines.extend(metric_tables(&data, metrics, false));
    lines.join("\n")
}

/// Rankings over the records matching `filter`, for custom output.
pub fn filtered_leaderboard(
    dataset: &Dataset,
    filter: &Filter,
    metrics: &[MetricDescriptor],
) -> String {
    let data = dataset.filtered(filter);
    if data.is_empty() {
        return "## Filtered Leaderboard\n\nNo data available.\n\n".into();
    }

    let mut conditions = Vec::new();
    if let Some(year) = &filter.year {
        conditions.push(format!("year {year}"));
    }
    if let Some(semester) = &filter.semester {
        conditions.push(format!("semester {semester}"));
    }

    let mut lines = vec!["## Filtered Leaderboard".to_string(), String::new()];
    if !conditions.is_empty() {
        lines.push(format!("*Filters: {}*", conditions.join(", ")));
        lines.push(String::new());
    }
    lines.extend(metric_tables(&data, metrics, true));
    lines.join("\n")
}

/// The complete README: header, navigation, all-time view, one section per
/// semester (newest first), footer.
pub fn full_document(dataset: &Dataset, config: &LeaderboardConfig) -> String {
    let semesters = dataset.semesters();

    let mut lines = document_header(config);
    lines.push(navigation(&semesters));
    lines.push(all_time_leaderboard(dataset, &config.metrics));
    for semester in &semesters {
        lines.push(semester_leaderboard(dataset, semester, &config.metrics));
    }
    lines.extend(document_footer());
    lines.join("\n")
}

/// A document restricted to `filter`.
pub fn custom_document(dataset: &Dataset, filter: &Filter, config: &LeaderboardConfig) -> String {
    let mut lines = document_header(config);
    lines.push(filtered_leaderboard(dataset, filter, &config.metrics));
    lines.extend(document_footer());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::FileInfo;
    use crate::record::Record;

    fn file(year: &str, semester: &str, university: &str) -> FileInfo {
        FileInfo {
            year: year.into(),
            semester: semester.into(),
            university: university.into(),
            full_name: format!("{year}-{semester}-{university}"),
        }
    }

    fn entry(team: &str, ipc: f64, info: &FileInfo) -> Record {
        Record {
            ipc: Some(ipc),
            ..Record::new(team)
        }
        .with_file_info(info)
    }

    fn sample() -> Dataset {
        let mit = file("2024", "spring", "mit");
        let cmu = file("2024", "spring", "cmu");
        let old = file("2023", "fall", "cs-dept");
        let records = vec![
            entry("TeamA", 1.5, &mit),
            entry("TeamB", 1.5, &mit),
            entry("TeamC", 1.2, &mit),
            entry("TeamD", 1.8, &cmu),
            entry("Legacy", 0.7, &old),
        ];
        Dataset::new(vec![mit, cmu, old], records)
    }

    #[test]
    fn test_navigation_links() {
        let nav = navigation(&sample().semesters());

        assert_eq!(
            nav,
            "## Quick Navigation\n\n\
             | View | Link |\n\
             |------|------|\n\
             | All-Time Rankings | [Jump to All-Time](#all-time-leaderboard) |\n\
             | Spring 2024 | [Jump to Spring 2024](#spring-2024) |\n\
             | Fall 2023 | [Jump to Fall 2023](#fall-2023) |\n"
        );
    }

    #[test]
    fn test_semester_leaderboard_lists_universities() {
        let data = sample();
        let semesters = data.semesters();
        let spring = &semesters[0];

        let section = semester_leaderboard(&data, spring, &LeaderboardConfig::default().metrics);

        assert!(section.starts_with("## Spring 2024\n\n*Universities: CMU, MIT*\n\n### IPC\n"));
        assert!(section.contains("| Rank | Team | IPC |"));
        assert!(!section.contains("Legacy"));
        assert!(section.contains("| 🥇 1 | TeamD | 1.80 |"));
        assert!(section.contains("| 🥈 2 | TeamA | 1.50 |"));
        assert!(section.contains("| 🥈 2 | TeamB | 1.50 |"));
        assert!(section.contains("| 4 | TeamC | 1.20 |"));
    }

    #[test]
    fn test_empty_semester_placeholder() {
        let data = Dataset::new(vec![file("2022", "summer", "mit")], vec![]);
        let semesters = data.semesters();
        let semester = &semesters[0];

        assert_eq!(
            semester_leaderboard(&data, semester, &LeaderboardConfig::default().metrics),
            "## Summer 2022\n\nNo data available for this semester.\n\n"
        );
    }

    #[test]
    fn test_all_time_has_semester_columns() {
        let section = all_time_leaderboard(&sample(), &LeaderboardConfig::default().metrics);

        assert!(section.starts_with("## All-Time Leaderboard\n\n*Rankings across all semesters*\n\n"));
        assert!(section.contains("| 5 | Legacy | Fall 2023 | CS-DEPT | 0.70 |"));
        assert_eq!(section.matches("### ").count(), 5);
    }

    #[test]
    fn test_all_time_empty() {
        assert_eq!(
            all_time_leaderboard(&Dataset::default(), &LeaderboardConfig::default().metrics),
            "## All-Time Leaderboard\n\nNo data available.\n\n"
        );
    }

    #[test]
    fn test_full_document_section_order() {
        let doc = full_document(&sample(), &LeaderboardConfig::default());

        let positions: Vec<usize> = [
            "# RISC-V Processor Leaderboard",
            "## Metrics",
            "## Quick Navigation",
            "## All-Time Leaderboard",
            "## Spring 2024",
            "## Fall 2023",
            "\n---\n",
        ]
        .iter()
        .map(|h| doc.find(h).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.contains("| Area | Chip area (mm²) | Lower |"));
        assert!(doc.ends_with(&format!("---\n\n{FOOTER}\n")));
    }

    #[test]
    fn test_custom_document_filters() {
        let filter = Filter::new(Some("2023".into()), None);

        let doc = custom_document(&sample(), &filter, &LeaderboardConfig::default());

        assert!(doc.contains("## Filtered Leaderboard\n\n*Filters: year 2023*\n\n"));
        assert!(doc.contains("Legacy"));
        assert!(!doc.contains("TeamA"));
        assert!(!doc.contains("## Quick Navigation"));
    }

    #[test]
    fn test_custom_document_no_match() {
        let filter = Filter::new(None, Some("winter".into()));

        let doc = custom_document(&sample(), &filter, &LeaderboardConfig::default());

        assert!(doc.contains("## Filtered Leaderboard\n\nNo data available.\n\n"));
    }
}
