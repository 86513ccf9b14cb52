use comfy_table::presets::NOTHING;
use comfy_table::Table;
use kafka_offsets::queries::get_group_offsets::GroupOffsetsReport;

/// Lays the report out as a borderless aligned table, one row per partition.
/// A partition the group never committed for shows a literal `none` in the
/// offset and lag columns, a partition without a live owner shows `-`.
pub fn render_table(report: &GroupOffsetsReport) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        "Group ID",
        "Topic",
        "Partition",
        "Offset",
        "Log Size",
        "Lag",
        "Owner",
    ]);

    for record in &report.records {
        table.add_row(vec![
            report.group.clone(),
            report.topic.clone(),
            record.partition().to_string(),
            format_offset(*record.committed_offset()),
            record.log_size().to_string(),
            format_offset(*record.lag()),
            record.owner().clone().unwrap_or_else(|| "-".to_owned()),
        ]);
    }

    table
}

fn format_offset(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "none".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kafka_offsets::snapshot::ConsumerOffsetsSnapshot;

    fn report_for(snapshot: &ConsumerOffsetsSnapshot) -> GroupOffsetsReport {
        GroupOffsetsReport {
            group: snapshot.group().clone(),
            topic: snapshot.topic().clone(),
            records: snapshot.finalize(),
        }
    }

    #[test]
    fn renders_one_row_per_partition_with_the_header() {
        let mut snapshot = ConsumerOffsetsSnapshot::new("g1", "t1");
        snapshot
            .merge_committed(0, Some(100), Some("c1".to_owned()))
            .unwrap();
        snapshot.merge_committed(1, Some(200), None).unwrap();
        snapshot.merge_watermarks(0, 50, 150).unwrap();
        snapshot.merge_watermarks(1, 150, 250).unwrap();

        let rendered = render_table(&report_for(&snapshot)).to_string();

        let header = rendered.lines().next().unwrap();
        let columns = [
            "Group ID",
            "Topic",
            "Partition",
            "Offset",
            "Log Size",
            "Lag",
            "Owner",
        ]
        .map(|column| header.find(column).unwrap());
        assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(rendered.contains("g1"));
        assert!(rendered.contains("t1"));
        assert!(rendered.contains("c1"));
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn missing_offset_renders_as_none_and_missing_owner_as_a_dash() {
        let mut snapshot = ConsumerOffsetsSnapshot::new("g1", "t1");
        snapshot.merge_committed(0, None, None).unwrap();
        snapshot.merge_watermarks(0, 0, 10).unwrap();

        let rendered = render_table(&report_for(&snapshot)).to_string();

        assert!(rendered.contains("none"));
        assert!(rendered.contains(" - "));
    }

    #[test]
    fn negative_lag_is_rendered_unchanged() {
        let mut snapshot = ConsumerOffsetsSnapshot::new("g1", "t1");
        snapshot.merge_committed(0, Some(200), None).unwrap();
        snapshot.merge_watermarks(0, 0, 150).unwrap();

        let rendered = render_table(&report_for(&snapshot)).to_string();

        assert!(rendered.contains("-50"));
    }

    #[test]
    fn empty_report_renders_only_the_header() {
        let snapshot = ConsumerOffsetsSnapshot::new("g1", "t1");

        let rendered = render_table(&report_for(&snapshot)).to_string();

        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("Partition"));
    }
}
