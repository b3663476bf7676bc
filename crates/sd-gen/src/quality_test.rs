use super::*;
use sd_core::{seeded_rng, Column, Value};

fn numbered(rows: usize) -> Table {
    let mut table = Table::new(
        "numbered",
        vec![
            Column::identifier("id"),
            Column::new("label"),
            Column::new("amount"),
        ],
    );
    for i in 0..rows {
        table
            .push_row(vec![
                Some(format!("ID_{i:05}").into()),
                Some(format!("row {i}").into()),
                Some(Value::Float(i as f64 * 1.5)),
            ])
            .unwrap();
    }
    table
}

#[test]
fn test_duplicate_count_floors() {
    assert_eq!(duplicate_count(0), 0);
    assert_eq!(duplicate_count(20), 0);
    assert_eq!(duplicate_count(99), 0);
    assert_eq!(duplicate_count(100), 1);
    assert_eq!(duplicate_count(199), 1);
    assert_eq!(duplicate_count(5000), 50);
}

#[test]
fn test_row_count_grows_by_one_percent() {
    let mut rng = seeded_rng(42);
    for n in [1, 20, 99, 100, 250, 1000] {
        let input = numbered(n);
        let out = inject_quality_issues(&input, DEFAULT_MISSING_RATE, &mut rng).unwrap();
        assert_eq!(out.table.len(), n + n / 100, "n = {n}");
        assert_eq!(out.duplicates_appended, n / 100);
    }
}

#[test]
fn test_below_hundred_rows_no_duplicates() {
    let mut rng = seeded_rng(42);
    let input = numbered(20);
    let out = inject_quality_issues(&input, DEFAULT_MISSING_RATE, &mut rng).unwrap();
    assert_eq!(out.table.len(), 20);
    assert_eq!(out.duplicates_appended, 0);
}

#[test]
fn test_identifier_columns_never_blanked() {
    let mut rng = seeded_rng(42);
    let input = numbered(500);
    let out = inject_quality_issues(&input, 0.5, &mut rng).unwrap();

    assert_eq!(out.table.missing_count(0), 0);
    assert!(out.table.missing_count(1) > 0);
    assert!(out.table.missing_count(2) > 0);
}

#[test]
fn test_input_is_untouched() {
    let mut rng = seeded_rng(42);
    let input = numbered(300);
    let snapshot = input.clone();

    let out = inject_quality_issues(&input, 0.3, &mut rng).unwrap();
    assert_eq!(input, snapshot);
    assert_eq!(input.total_missing(), 0);
    assert!(out.table.total_missing() > 0);
}

#[test]
fn test_missing_counter_matches_table() {
    let mut rng = seeded_rng(42);
    let input = numbered(99);
    let out = inject_quality_issues(&input, 0.2, &mut rng).unwrap();
    assert_eq!(out.missing_injected, out.table.total_missing());
}

#[test]
fn test_rate_extremes() {
    let mut rng = seeded_rng(42);
    let input = numbered(150);

    let none = inject_quality_issues(&input, 0.0, &mut rng).unwrap();
    assert_eq!(none.missing_injected, 0);

    let all = inject_quality_issues(&input, 1.0, &mut rng).unwrap();
    assert_eq!(all.table.missing_count(0), 0);
    assert_eq!(all.table.missing_count(1), all.table.len());
    assert_eq!(all.table.missing_count(2), all.table.len());
}

#[test]
fn test_duplicates_are_appended_copies() {
    let mut rng = seeded_rng(42);
    let input = numbered(400);
    let out = inject_quality_issues(&input, 0.1, &mut rng).unwrap();

    let rows = out.table.rows();
    let (originals, extras) = rows.split_at(400);
    assert_eq!(extras.len(), 4);
    for extra in extras {
        assert!(originals.contains(extra));
    }
    // Original order is preserved ahead of the duplicates
    for (i, row) in originals.iter().enumerate() {
        assert_eq!(row[0], Some(Value::Text(format!("ID_{i:05}"))));
    }
}

#[test]
fn test_invalid_rate_rejected() {
    let mut rng = seeded_rng(42);
    let input = numbered(10);
    for rate in [-0.1, 1.5, f64::NAN] {
        let err = inject_quality_issues(&input, rate, &mut rng).unwrap_err();
        assert!(matches!(err, GenError::InvalidMissingRate { .. }));
    }
}

#[test]
fn test_empty_table() {
    let mut rng = seeded_rng(42);
    let input = numbered(0);
    let out = inject_quality_issues(&input, DEFAULT_MISSING_RATE, &mut rng).unwrap();
    assert!(out.table.is_empty());
    assert_eq!(out.table.columns(), input.columns());
}
