use super::{Row, Table, TableStore, WriteMode};
use anyhow::Context;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Un fichier CSV par table (`<dir>/<Table>.csv`), sans en-tête implicite.
pub struct CsvDirStore {
    dir: PathBuf,
}

impl CsvDirStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path_of(&self, table: Table) -> PathBuf {
        self.dir.join(format!("{}.csv", table.name()))
    }
}

impl TableStore for CsvDirStore {
    fn read(&self, table: Table) -> anyhow::Result<Vec<Row>> {
        let path = self.path_of(table);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut out = Vec::new();
        for rec in rdr.records() {
            let rec = rec.with_context(|| format!("parsing {}", path.display()))?;
            out.push(rec.iter().map(str::to_string).collect());
        }
        Ok(out)
    }

    fn write(&self, table: Table, rows: &[Row], mode: WriteMode) -> anyhow::Result<()> {
        let path = self.path_of(table);
        match mode {
            WriteMode::Replace => {
                let tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
                let mut w = WriterBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_writer(tmp.as_file());
                for row in rows {
                    w.write_record(row)?;
                }
                w.flush()?;
                drop(w);
                tmp.as_file().sync_all()?;
                tmp.persist(&path)
                    .with_context(|| format!("atomic rename to {}", path.display()))?;
            }
            WriteMode::Append => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .with_context(|| format!("opening {}", path.display()))?;
                let mut w = WriterBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_writer(file);
                for row in rows {
                    w.write_record(row)?;
                }
                w.flush()
                    .with_context(|| format!("appending to {}", path.display()))?;
            }
        }
        Ok(())
    }
}
