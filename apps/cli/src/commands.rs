//! Command handlers. Each one returns the JSON document to print and whether the command
//! succeeded; I/O and decoding failures are errors instead.

use anyhow::{Context, Result};
use bazaar::features::shipping::store::{BrandId, MemoryStore};
use bazaar::features::shipping::template::default_config;
use bazaar::features::shipping::publication::ShippingStatus;
use bazaar::features::shipping::{self, ConfigurationTree, RelationalRowSet, Shipping, ShippingError};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// What a command prints and how the process exits.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(value: &impl Serialize) -> Result<Self> {
        Ok(Self { output: shipping::to_json_pretty(value)?, success: true })
    }

    fn report(brand: Option<&BrandId>, status: &ShippingStatus) -> Result<Self> {
        let report = Report { brand: brand.map(BrandId::as_str), status };
        Ok(Self { output: shipping::to_json_pretty(&report)?, success: status.is_valid() })
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
    #[serde(flatten)]
    status: &'a ShippingStatus,
}

pub fn default_tree() -> Result<Outcome> {
    Outcome::ok(&default_config())
}

pub fn transform(rows: Option<&Path>) -> Result<Outcome> {
    let rows = rows.map(read_rows).transpose()?;
    Outcome::ok(&shipping::transform::transform(rows.as_ref()))
}

pub fn validate(tree: &Path) -> Result<Outcome> {
    Outcome::report(None, &ShippingStatus::of(&read_tree(tree)?))
}

pub fn flatten(tree: &Path) -> Result<Outcome> {
    Outcome::ok(&shipping::flatten::flatten(&read_tree(tree)?))
}

/// Seeds an in-memory store with `rows` and checks what loading the brand yields.
pub async fn check(slice: &Shipping, rows: Option<&Path>, brand: &str) -> Result<Outcome> {
    let brand = BrandId::new(brand)?;
    let store = MemoryStore::new();
    if let Some(path) = rows {
        store.insert(brand.clone(), read_rows(path)?);
    }

    let service = slice.service(store);
    let tree = service.load(&brand).await?;
    let report = service.check(&tree);
    info!(brand = %brand, publishable = report.is_publishable(), "Checked shipping configuration");

    Outcome::report(Some(&brand), &ShippingStatus::from(report))
}

/// Saves `tree` through the service. A rejected tree prints its violations and fails.
pub async fn publish(slice: &Shipping, tree: &Path, brand: &str) -> Result<Outcome> {
    let brand = BrandId::new(brand)?;
    let tree = read_tree(tree)?;

    match slice.service(MemoryStore::new()).save(&brand, &tree, Utc::now()).await {
        Ok(publication) => Outcome::ok(&publication),
        Err(ShippingError::Rejected { violations, .. }) => {
            Outcome::report(Some(&brand), &ShippingStatus::Draft { violations })
        },
        Err(err) => Err(err.into()),
    }
}

fn read_tree(path: &Path) -> Result<ConfigurationTree> {
    Ok(shipping::tree_from_json(&read(path)?)?)
}

fn read_rows(path: &Path) -> Result<RelationalRowSet> {
    Ok(shipping::rows_from_json(&read(path)?)?)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))
}
