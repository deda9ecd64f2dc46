use super::{Row, Table, TableStore, WriteMode};
use anyhow::anyhow;
use std::collections::HashMap;
use std::sync::Mutex;

/// Stockage en mémoire, utile pour les tests et l'embarqué.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Table, Vec<Row>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableStore for MemoryStore {
    fn read(&self, table: Table) -> anyhow::Result<Vec<Row>> {
        let tables = self
            .tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        Ok(tables.get(&table).cloned().unwrap_or_default())
    }

    fn write(&self, table: Table, rows: &[Row], mode: WriteMode) -> anyhow::Result<()> {
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| anyhow!("memory store lock poisoned"))?;
        let content = tables.entry(table).or_default();
        if mode == WriteMode::Replace {
            content.clear();
        }
        content.extend(rows.iter().cloned());
        Ok(())
    }
}
