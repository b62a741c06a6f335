//! Catalog inspection commands: `list` and `score`

use crate::catalog::{CatalogLoader, RecordCache};
use crate::config::Config;
use crate::scoring;
use crate::utils::errors::{CatalogError, CatalogResult};
use std::sync::Arc;

fn loader_for(config: &Config) -> CatalogLoader {
    // CLI runs are one-shot, caching would only hold stale reads
    let cache = Arc::new(RecordCache::new(false));
    CatalogLoader::new(&config.catalog, cache)
}

/// Print the ranked catalog, one record per line
pub async fn list(config: &Config) -> CatalogResult<()> {
    let records = loader_for(config).load(None).await;

    if records.is_empty() {
        println!("No records in catalog");
        return Ok(());
    }

    for record in records.iter() {
        let score = record
            .quality_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:>5}  {:<40}  {}", score, record.name, record.display_name);
    }
    println!("\n{} record(s)", records.len());
    Ok(())
}

/// Print the Trust Score breakdown for a single record
pub async fn score(config: &Config, name: &str) -> CatalogResult<()> {
    let loader = loader_for(config);
    let records = loader.load(Some(name)).await;
    let record = records.first().ok_or(CatalogError::RecordNotFound)?;

    if record.quality_score.is_none() {
        println!("{}: not yet evaluated", record.name);
        return Ok(());
    }

    let all = loader.load(None).await;
    let breakdown = scoring::calculate_quality_score(record, Some(&all));

    println!("{}", record.name);
    println!("  protocol    {:>3}", breakdown.protocol);
    println!("  community   {:>3}", breakdown.community);
    println!("  deployment  {:>3}", breakdown.deployment);
    println!("  docs        {:>3}", breakdown.docs);
    println!("  deps        {:>3}", breakdown.deps);
    println!("  badge       {:>3}", breakdown.badge);
    println!("  total       {:>3}", breakdown.total);
    Ok(())
}
