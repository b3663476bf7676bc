use super::*;
use sd_io::WriteResult;
use std::cell::RefCell;
use std::path::PathBuf;

/// Collects tables in memory instead of writing files
#[derive(Default)]
struct MemorySink {
    written: RefCell<Vec<(String, Table)>>,
}

impl MemorySink {
    fn get(&self, stem: &str) -> Option<Table> {
        self.written
            .borrow()
            .iter()
            .find(|(name, _)| name == stem)
            .map(|(_, t)| t.clone())
    }
}

impl TableSink for MemorySink {
    fn write_table(&self, table: &Table, stem: &str) -> WriteResult<PathBuf> {
        self.written
            .borrow_mut()
            .push((stem.to_string(), table.clone()));
        Ok(PathBuf::from(format!("mem://{stem}")))
    }

    fn sink_type(&self) -> &'static str {
        "memory"
    }
}

fn generator_with(customers: usize, products: usize, transactions: usize) -> SampleDataGenerator {
    let config = GeneratorConfig::with_counts(customers, products, transactions).unwrap();
    SampleDataGenerator::new(config).unwrap()
}

#[test]
fn test_rejects_zero_counts() {
    for (customers, products, transactions) in [(0, 5, 20), (10, 0, 20), (10, 5, 0)] {
        let config = GeneratorConfig {
            customers,
            products,
            transactions,
            ..GeneratorConfig::default()
        };
        assert!(SampleDataGenerator::new(config).is_err());
    }
}

#[test]
fn test_default_config_is_accepted() {
    assert!(SampleDataGenerator::new(GeneratorConfig::default()).is_ok());
}

#[test]
fn test_generate_tables_counts() {
    let generator = generator_with(10, 5, 20);
    let dataset = generator.generate_tables(&mut seeded_rng(1)).unwrap();

    assert_eq!(dataset.customers.len(), 10);
    assert_eq!(dataset.products.len(), 5);
    assert_eq!(dataset.transactions.len(), 20);
    let names: Vec<_> = dataset.tables().iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["customers", "products", "transactions"]);
}

#[test]
fn test_write_to_names_and_counts() {
    let generator = generator_with(200, 150, 1000);
    let clean = MemorySink::default();
    let raw = MemorySink::default();

    let summaries = generator.write_to(&clean, &raw).unwrap();
    assert_eq!(summaries.len(), 3);

    assert_eq!(clean.get("customers").unwrap().len(), 200);
    assert_eq!(clean.get("products").unwrap().len(), 150);
    assert_eq!(clean.get("transactions").unwrap().len(), 1000);

    assert_eq!(raw.get("customers_raw").unwrap().len(), 202);
    assert_eq!(raw.get("products_raw").unwrap().len(), 151);
    assert_eq!(raw.get("transactions_raw").unwrap().len(), 1010);

    for s in &summaries {
        assert_eq!(s.raw_rows, s.clean_rows + s.clean_rows / 100);
        assert_eq!(s.duplicates_appended, s.clean_rows / 100);
    }
}

#[test]
fn test_clean_tables_have_no_missing_values() {
    let generator = generator_with(300, 50, 500);
    let clean = MemorySink::default();
    let raw = MemorySink::default();
    generator.write_to(&clean, &raw).unwrap();

    for (_, table) in clean.written.borrow().iter() {
        assert_eq!(table.total_missing(), 0, "{}", table.name());
    }
    let raw_customers = raw.get("customers_raw").unwrap();
    assert_eq!(raw_customers.missing_count(0), 0);
    assert!(raw_customers.total_missing() > 0);
}

#[test]
fn test_runs_are_reproducible() {
    let generator = generator_with(30, 10, 60);

    let (clean_a, raw_a) = (MemorySink::default(), MemorySink::default());
    let (clean_b, raw_b) = (MemorySink::default(), MemorySink::default());
    generator.write_to(&clean_a, &raw_a).unwrap();
    generator.write_to(&clean_b, &raw_b).unwrap();

    assert_eq!(*clean_a.written.borrow(), *clean_b.written.borrow());
    assert_eq!(*raw_a.written.borrow(), *raw_b.written.borrow());
}
