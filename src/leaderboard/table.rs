//! Markdown table for one metric.

use crate::dataset::capitalize;
use crate::leaderboard::rank::rank;
use crate::metrics::{MetricDescriptor, format_value};
use crate::record::Record;

/// Rank cell text: medals for the podium, `-` for unranked rows.
pub fn rank_label(rank: Option<usize>) -> String {
    match rank {
        None => "-".into(),
        Some(1) => "🥇 1".into(),
        Some(2) => "🥈 2".into(),
        Some(3) => "🥉 3".into(),
        Some(n) => n.to_string(),
    }
}

/// Renders the ranked table for `metric` under a `###` heading.
///
/// `show_semester` adds the Semester and University columns used by views
/// that span more than one semester.
pub fn render_table(records: &[Record], metric: &MetricDescriptor, show_semester: bool) -> String {
    let name = &metric.display_name;
    if records.is_empty() {
        return format!("### {name}\n\nNo data available.\n\n");
    }

    let mut lines = vec![format!("### {name}"), String::new()];
    let value_rule = "-".repeat(name.chars().count() + 2);

    if show_semester {
        lines.push(format!("| Rank | Team | Semester | University | {name} |"));
        lines.push(format!("|------|------|----------|------------|{value_rule}|"));
    } else {
        lines.push(format!("| Rank | Team | {name} |"));
        lines.push(format!("|------|------|{value_rule}|"));
    }

    for row in rank(records, metric.key, metric.higher_is_better) {
        let record = row.record;
        let rank = rank_label(row.rank);
        let value = format_value(metric.key.value(record), metric.key);

        if show_semester {
            lines.push(format!(
                "| {rank} | {} | {} {} | {} | {value} |",
                record.team_name,
                capitalize(&record.semester),
                record.year,
                record.university.to_uppercase(),
            ));
        } else {
            lines.push(format!("| {rank} | {} | {value} |", record.team_name));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricKey, default_metrics};

    fn metric(key: MetricKey) -> MetricDescriptor {
        default_metrics().into_iter().find(|m| m.key == key).unwrap()
    }

    fn team(name: &str, cycles: Option<f64>) -> Record {
        Record {
            cycle_count: cycles,
            year: "2024".into(),
            semester: "spring".into(),
            university: "mit".into(),
            ..Record::new(name)
        }
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(Some(1)), "🥇 1");
        assert_eq!(rank_label(Some(2)), "🥈 2");
        assert_eq!(rank_label(Some(3)), "🥉 3");
        assert_eq!(rank_label(Some(4)), "4");
        assert_eq!(rank_label(None), "-");
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            render_table(&[], &metric(MetricKey::Ipc), false),
            "### IPC\n\nNo data available.\n\n"
        );
    }

    #[test]
    fn test_compact_table() {
        let records = vec![team("Slow", Some(20000.0)), team("Blank", None), team("Fast", Some(1500.0))];

        let table = render_table(&records, &metric(MetricKey::CycleCount), false);

        assert_eq!(
            table,
            "### Cycle Count\n\n\
             | Rank | Team | Cycle Count |\n\
             |------|------|-------------|\n\
             | 🥇 1 | Fast | 1,500 |\n\
             | 🥈 2 | Slow | 20,000 |\n\
             | - | Blank | - |\n"
        );
    }

    #[test]
    fn test_wide_table_columns() {
        let records = vec![team("Fast", Some(1500.0))];

        let table = render_table(&records, &metric(MetricKey::CycleCount), true);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines[2], "| Rank | Team | Semester | University | Cycle Count |");
        assert_eq!(lines[3], "|------|------|----------|------------|-------------|");
        assert_eq!(lines[4], "| 🥇 1 | Fast | Spring 2024 | MIT | 1,500 |");
    }

    #[test]
    fn test_separator_counts_characters() {
        let table = render_table(&[team("A", None)], &metric(MetricKey::AreaMm2), false);
        assert!(table.contains("|------|------|------------|\n"));
    }
}
