//! Dataset loading and one-time download caching

use super::{Dataset, DatasetRecord};
use crate::config::DatasetConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to access {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Failed to download {url}: {message}")]
    Download { url: String, message: String },

    #[error("Invalid dataset record at line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },

    #[error("No cache directory available for downloaded datasets")]
    NoCacheDir,
}

/// Load the configured dataset, if any
///
/// A local `path` wins over `url`. A `url` is fetched once and stored in the
/// cache directory; later runs read the cached copy.
pub async fn load_dataset(config: &DatasetConfig) -> Result<Option<Dataset>, DatasetError> {
    let content = if let Some(path) = &config.path {
        read_file(path).await?
    } else if let Some(url) = &config.url {
        let cache_path = cache_path_for(config.cache_dir.as_deref(), url)?;
        if cache_path.is_file() {
            debug!("reading cached dataset {}", cache_path.display());
            read_file(&cache_path).await?
        } else {
            let content = download(url).await?;
            store(&cache_path, &content).await?;
            content
        }
    } else {
        return Ok(None);
    };

    let dataset = parse_records(&content)?;
    info!("loaded {} dataset records", dataset.len());
    Ok(Some(dataset))
}

/// Parse a JSON array of records, or JSON Lines
pub fn parse_records(content: &str) -> Result<Dataset, DatasetError> {
    let trimmed = content.trim_start();

    if trimmed.starts_with('[') {
        let records: Vec<DatasetRecord> =
            serde_json::from_str(trimmed).map_err(|source| DatasetError::Parse { line: 1, source })?;
        return Ok(Dataset::new(records));
    }

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line)
            .map_err(|source| DatasetError::Parse { line: index + 1, source })?;
        records.push(record);
    }

    Ok(Dataset::new(records))
}

fn cache_path_for(cache_dir: Option<&Path>, url: &str) -> Result<PathBuf, DatasetError> {
    let dir = match cache_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::cache_dir().ok_or(DatasetError::NoCacheDir)?.join("telugu-bot"),
    };

    let name = url
        .split(['?', '#'])
        .next()
        .and_then(|base| base.trim_end_matches('/').rsplit('/').next())
        .unwrap_or_default();

    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();

    let file_name = if sanitized.is_empty() { "dataset.jsonl".to_string() } else { sanitized };
    Ok(dir.join("datasets").join(file_name))
}

async fn read_file(path: &Path) -> Result<String, DatasetError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })
}

async fn store(path: &Path, content: &str) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| DatasetError::Io { path: parent.to_path_buf(), source })?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|source| DatasetError::Io { path: path.to_path_buf(), source })
}

async fn download(url: &str) -> Result<String, DatasetError> {
    info!("downloading dataset from {}", url);

    let download_err = |message: String| DatasetError::Download { url: url.to_string(), message };

    let response = reqwest::get(url).await.map_err(|e| download_err(e.to_string()))?;
    if !response.status().is_success() {
        return Err(download_err(format!("HTTP {}", response.status())));
    }

    response.text().await.map_err(|e| download_err(e.to_string()))
}
