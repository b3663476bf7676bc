use super::*;

fn sample_table() -> Table {
    let mut table = Table::new(
        "things",
        vec![Column::identifier("id"), Column::new("label"), Column::new("n")],
    );
    table
        .push_row(vec![Some("A".into()), Some("alpha".into()), Some(1i64.into())])
        .unwrap();
    table
        .push_row(vec![Some("B".into()), None, Some(2i64.into())])
        .unwrap();
    table
}

struct Pair {
    key: String,
    amount: f64,
}

impl TableRecord for Pair {
    const TABLE_NAME: &'static str = "pairs";

    fn columns() -> Vec<Column> {
        vec![Column::identifier("key"), Column::new("amount")]
    }

    fn to_row(&self) -> Vec<Option<Value>> {
        vec![
            Some(self.key.clone().into()),
            Some(self.amount.into()),
        ]
    }
}

#[test]
fn test_push_row_checks_width() {
    let mut table = sample_table();
    let err = table.push_row(vec![Some("C".into())]).unwrap_err();
    match err {
        CoreError::RowWidthMismatch {
            table,
            expected,
            found,
        } => {
            assert_eq!(table, "things");
            assert_eq!(expected, 3);
            assert_eq!(found, 1);
        }
        other => panic!("expected RowWidthMismatch, got {other:?}"),
    }
    assert_eq!(table.len(), 2);
}

#[test]
fn test_from_records() {
    let table = Table::from_records(&[
        Pair {
            key: "k1".to_string(),
            amount: 1.5,
        },
        Pair {
            key: "k2".to_string(),
            amount: 2.25,
        },
    ]);
    assert_eq!(table.name(), "pairs");
    assert_eq!(table.column_names(), vec!["key", "amount"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(1, 1), Some(&Value::Float(2.25)));
    assert!(table.columns()[0].identifier);
    assert!(!table.columns()[1].identifier);
}

#[test]
fn test_missing_counts() {
    let mut table = sample_table();
    assert_eq!(table.missing_count(1), 1);
    assert_eq!(table.total_missing(), 1);

    table.clear_cell(0, 2);
    table.clear_cell(10, 0);
    assert_eq!(table.missing_count(2), 1);
    assert_eq!(table.total_missing(), 2);
    assert_eq!(table.cell(0, 2), None);
}

#[test]
fn test_append_copies() {
    let mut table = sample_table();
    table.append_copies(&[1, 0, 1, 9]);
    assert_eq!(table.len(), 5);
    assert_eq!(table.rows()[2], table.rows()[1]);
    assert_eq!(table.rows()[3], table.rows()[0]);
    assert_eq!(table.rows()[4], table.rows()[1]);
}

#[test]
fn test_value_display() {
    let date = NaiveDate::from_ymd_opt(2022, 3, 9).unwrap();
    let ts = date.and_hms_opt(7, 5, 0).unwrap();
    assert_eq!(Value::Date(date).to_string(), "2022-03-09");
    assert_eq!(Value::Timestamp(ts).to_string(), "2022-03-09 07:05:00");
    assert_eq!(Value::Float(12.5).to_string(), "12.5");
    assert_eq!(Value::Int(3).to_string(), "3");
    assert_eq!(Value::Text("Home & Garden".into()).to_string(), "Home & Garden");
}
