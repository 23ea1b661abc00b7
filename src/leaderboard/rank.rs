use crate::metrics::MetricKey;
use crate::record::Record;

/// A record annotated with its rank for one metric. `rank` is `None` when
/// the record has no value for that metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow<'a> {
    pub record: &'a Record,
    pub rank: Option<usize>,
}

/// Ranks `records` on `key` using "1224" competition ranking.
///
/// Records with a value come first, best value first; equal values share a
/// rank and the next distinct value takes its 1-based position. Records
/// without a value follow, unranked, in their original order. Sorting is
/// stable, so tied records also keep their original order.
///
/// Ties use exact `f64` equality; near-equal results are ranked apart.
pub fn rank<'a>(records: &'a [Record], key: MetricKey, higher_is_better: bool) -> Vec<RankedRow<'a>> {
    let mut present: Vec<(&Record, f64)> = Vec::new();
    let mut absent: Vec<&Record> = Vec::new();
    for record in records {
        match key.value(record) {
            Some(v) => present.push((record, v)),
            None => absent.push(record),
        }
    }

    if higher_is_better {
        present.sort_by(|a, b| b.1.total_cmp(&a.1));
    } else {
        present.sort_by(|a, b| a.1.total_cmp(&b.1));
    }

    let mut rows = Vec::with_capacity(records.len());
    let mut current_rank = 1;
    let mut prev: Option<f64> = None;

    for (i, (record, value)) in present.into_iter().enumerate() {
        if prev.is_some_and(|p| p != value) {
            current_rank = i + 1;
        }
        rows.push(RankedRow {
            record,
            rank: Some(current_rank),
        });
        prev = Some(value);
    }

    rows.extend(absent.into_iter().map(|record| RankedRow { record, rank: None }));
    rows
}
