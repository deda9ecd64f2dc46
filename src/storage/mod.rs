//! Stockage tabulaire externe : des tables nommées de lignes de cellules texte.

#[cfg(feature = "serde")]
mod csv_dir;
mod memory;

#[cfg(feature = "serde")]
pub use csv_dir::CsvDirStore;
pub use memory::MemoryStore;

use std::fmt;

/// Ligne de table : cellules texte ordonnées.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Doctors,
    LeaveDates,
    Schedule,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Self::Doctors => "Doctors",
            Self::LeaveDates => "LeaveDates",
            Self::Schedule => "Schedule",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Écrase toute la table (zéro ligne = table vidée).
    Replace,
    /// Ajoute à la suite du contenu existant.
    Append,
}

pub trait TableStore {
    /// Lit une table. Une table absente est vide ; un échec d'accès est une erreur.
    fn read(&self, table: Table) -> anyhow::Result<Vec<Row>>;
    /// Écrit des lignes ; en mode `Replace` l'écrasement est complet et atomique.
    fn write(&self, table: Table, rows: &[Row], mode: WriteMode) -> anyhow::Result<()>;
}
