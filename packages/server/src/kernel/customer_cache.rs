//! In-memory store for locally cached customer data.
//!
//! Stale customer data must not survive a failed driver authentication, so
//! the pipeline clears this cache on every resolve/authenticate failure.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use super::BaseCustomerCacheService;

#[derive(Clone, Default)]
pub struct LocalCustomerCache {
    entries: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl LocalCustomerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: impl Into<String>, value: serde_json::Value) {
        self.entries
            .write()
            .expect("customer cache lock poisoned")
            .insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.entries
            .read()
            .expect("customer cache lock poisoned")
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("customer cache lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseCustomerCacheService for LocalCustomerCache {
    async fn delete(&self) -> Result<()> {
        let mut entries = self.entries.write().expect("customer cache lock poisoned");
        let cleared = entries.len();
        entries.clear();
        info!("Cleared {} cached customer entries", cleared);
        Ok(())
    }
}
