//! Summary table contents.

use rewrite_cli::summary::summary_table;
use rewrite_model::{FileOutcome, FileStatus};

#[test]
fn summary_has_row_per_file_and_total() {
    let outcomes = vec![
        FileOutcome::new("good.conf", FileStatus::Passed { rule_count: 4 }),
        FileOutcome::new(
            "gone.conf",
            FileStatus::Unreadable {
                message: "file not found: gone.conf".to_string(),
            },
        ),
    ];
    let mut table = summary_table(&outcomes);
    table.force_no_tty();
    let rendered = table.to_string();

    assert_eq!(table.row_iter().count(), 3);
    assert!(rendered.contains("good.conf"));
    assert!(rendered.contains("UNREADABLE"));
    assert!(rendered.contains("TOTAL"));
    assert!(rendered.contains("1 failed"));
}
