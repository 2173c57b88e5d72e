use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use storefront_core::Order;

use super::OrderRepository;
use crate::error::RepositoryError;

/// Orders stored as a pretty-printed JSON array in a single file.
///
/// A missing file reads as an empty collection. Saves go to a sibling
/// `*.tmp` file which is then renamed over the target; an interrupted save
/// leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> RepositoryError {
        RepositoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl OrderRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Order>, RepositoryError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "order file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| RepositoryError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, orders: &[Order]) -> Result<(), RepositoryError> {
        let mut body = serde_json::to_string_pretty(orders)?;
        body.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        tracing::debug!(path = %self.path.display(), count = orders.len(), "orders saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use storefront_core::OrderStatus;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("orders.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_returns_same_orders() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("orders.json");
        let mut repo = JsonFileRepository::new(&path);
        let orders = vec![
            order("ORD-2024-002", "2024-05-20", OrderStatus::InTransit),
            order("ORD-2024-001", "2024-05-02", OrderStatus::Delivered),
        ];

        repo.save(&orders).unwrap();
        assert_eq!(repo.load().unwrap(), orders);
        assert!(!repo.temp_path().exists());

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"In Transit\""));
        assert!(raw.contains("\"shippingInfo\""));
    }

    #[test]
    fn malformed_file_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.json");
        fs::write(&path, "{ not an array").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, RepositoryError::Decode { .. }));
    }

    #[test]
    fn temp_path_sits_next_to_target() {
        let repo = JsonFileRepository::new("/data/orders.json");
        assert_eq!(repo.temp_path(), PathBuf::from("/data/orders.json.tmp"));
    }
}
