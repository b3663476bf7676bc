use super::*;
use chrono::NaiveDate;
use sd_core::Column;
use tempfile::TempDir;

fn orders() -> Table {
    let mut table = Table::new(
        "orders",
        vec![
            Column::identifier("order_id"),
            Column::new("placed_on"),
            Column::new("note"),
            Column::new("amount"),
        ],
    );
    let day = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
    table
        .push_row(vec![
            Some("O_1".into()),
            Some(Value::Date(day)),
            Some("Home & Garden".into()),
            Some(Value::Float(19.99)),
        ])
        .unwrap();
    table
        .push_row(vec![
            Some("O_2".into()),
            None,
            Some("says \"hi\", twice".into()),
            None,
        ])
        .unwrap();
    table
        .push_row(vec![
            Some("O_3".into()),
            None,
            Some("two\nlines".into()),
            Some(Value::Int(3)),
        ])
        .unwrap();
    table
}

fn render(table: &Table) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_csv(table, &mut writer).unwrap();
    let bytes = writer.into_inner().map_err(|e| e.into_error()).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_write_csv_bytes() {
    assert_eq!(
        render(&orders()),
        "order_id,placed_on,note,amount\n\
         O_1,2023-01-31,Home & Garden,19.99\n\
         O_2,,\"says \"\"hi\"\", twice\",\n\
         O_3,,\"two\nlines\",3\n"
    );
}

#[test]
fn test_empty_table_has_header_only() {
    let table = Table::new("empty", vec![Column::new("a"), Column::new("b")]);
    assert_eq!(render(&table), "a,b\n");
}

#[test]
fn test_sink_writes_and_overwrites() {
    let dir = TempDir::new().unwrap();
    let sink = CsvDirSink::new(dir.path());

    let path = sink.write_table(&orders(), "orders_raw").unwrap();
    assert_eq!(path, dir.path().join("orders_raw.csv"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), render(&orders()));

    let empty = Table::new("orders", orders().columns().to_vec());
    sink.write_table(&empty, "orders_raw").unwrap();
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(second, "order_id,placed_on,note,amount\n");
    assert_eq!(sink.sink_type(), "csv");
}

#[test]
fn test_sink_missing_dir_errors() {
    let dir = TempDir::new().unwrap();
    let sink = CsvDirSink::new(dir.path().join("not_there"));

    let err = sink.write_table(&orders(), "orders").unwrap_err();
    assert!(matches!(err, WriteError::WriteFile { .. }));
}
