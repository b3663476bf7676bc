//! Generate command implementation

use anyhow::{Context, Result};
use sd_core::GeneratorConfig;
use sd_gen::{GenerationSummary, SampleDataGenerator};

use crate::cli::{GenerateArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{load_config, project_root};

/// Apply command-line overrides on top of the loaded config
fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(n) = args.customers {
        config.customers = n;
    }
    if let Some(n) = args.products {
        config.products = n;
    }
    if let Some(n) = args.transactions {
        config.transactions = n;
    }
    if let Some(dir) = &args.clean_dir {
        config.clean_dir = dir.clone();
    }
    if let Some(dir) = &args.raw_dir {
        config.raw_dir = dir.clone();
    }
    config
}

/// Render the run summary for the terminal
fn format_summary(summary: &GenerationSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Generated sample data (seed {})\n\n", summary.seed));

    for t in &summary.tables {
        out.push_str(&format!(
            "  ✓ {:<13} {:>6} rows | raw {:>6} rows ({} missing values, {} duplicates)\n",
            t.name, t.clean_rows, t.raw_rows, t.missing_injected, t.duplicates_appended
        ));
    }

    out.push_str("\nFiles saved to:\n");
    out.push_str(&format!(
        "  - {}/ (clean data for comparison)\n",
        summary.clean_dir.display()
    ));
    out.push_str(&format!(
        "  - {}/ (raw data with quality issues)\n",
        summary.raw_dir.display()
    ));
    out
}

/// Execute the generate command
pub fn execute(args: &GenerateArgs, global: &GlobalArgs) -> Result<()> {
    let config = apply_overrides(load_config(global)?, args);
    config.validate().context("Invalid generator configuration")?;
    let config = config.anchored(&project_root(global));
    log::debug!(
        "Generating {} customers, {} products, {} transactions into {} and {}",
        config.customers,
        config.products,
        config.transactions,
        config.clean_dir,
        config.raw_dir
    );

    let generator = SampleDataGenerator::new(config).context("Invalid generator configuration")?;
    let summary = generator
        .generate_all()
        .context("Failed to generate sample data")?;

    match args.output {
        OutputFormat::Text => print!("{}", format_summary(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
