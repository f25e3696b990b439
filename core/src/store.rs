//! Read-only access to the SQLite store populated by the ingestion layer.
//!
//! Every call opens its own connection and drops it before returning, so no
//! handle outlives a single lookup or scan.

// SQLite stores integers as i64; counts are never negative.
#![allow(clippy::cast_sign_loss)]

use crate::error::{Error, Result};
use crate::graph::ParticipationSource;
use crate::node::{NodeKind, Participation, PersonId, WorkId};
use crate::resolver::IdentityResolver;
use crate::snapshot::StoreFingerprint;
use crate::store_config::{StoreConfig, TableSpec};
use crate::string_normalization::clean_name;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params_from_iter};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct SqliteStore {
    path: PathBuf,
    config: StoreConfig,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            path: path.into(),
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fails fast with `StoreUnavailable` if the store cannot be opened.
    pub fn check_available(&self) -> Result<()> {
        self.connect().map(drop)
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| Error::StoreUnavailable {
            path: self.path.clone(),
            source,
        })
    }

    fn category_filter(&self) -> (String, Vec<String>) {
        match &self.config.category {
            Some(category) => (
                format!("WHERE {} = ?1", self.config.participations.category_column),
                vec![category.clone()],
            ),
            None => (String::new(), Vec::new()),
        }
    }

    /// Cheap summary of the participation relation, used to detect stale
    /// snapshots.
    pub fn fingerprint(&self) -> Result<StoreFingerprint> {
        let spec = &self.config.participations;
        let (filter, params) = self.category_filter();
        let sql = format!(
            "SELECT COUNT(*), COALESCE(MAX({person}), 0), COALESCE(MAX({work}), 0)
             FROM {table} {filter}",
            person = spec.person_column,
            work = spec.work_column,
            table = spec.table,
        );

        let conn = self.connect()?;
        let fingerprint = conn.query_row(&sql, params_from_iter(params.iter()), |row| {
            Ok(StoreFingerprint {
                participations: row.get::<_, i64>(0)? as u64,
                max_person_id: row.get(1)?,
                max_work_id: row.get(2)?,
            })
        })?;

        debug!(?fingerprint, "computed store fingerprint");
        Ok(fingerprint)
    }

    fn lookup_name(&self, spec: &TableSpec, kind: NodeKind, id: i64) -> Result<String> {
        let sql = format!(
            "SELECT {name} FROM {table} WHERE {id_col} = ?1 LIMIT 1",
            name = spec.name_column,
            table = spec.table,
            id_col = spec.id_column,
        );

        let conn = self.connect()?;
        conn.query_row(&sql, [id], |row| row.get::<_, String>(0))
            .optional()?
            .ok_or(Error::NotFound { kind, id })
    }
}

impl IdentityResolver for SqliteStore {
    fn resolve_person(&self, name: &str) -> Result<Option<PersonId>> {
        let typed = name.trim();
        if typed.is_empty() {
            return Ok(None);
        }

        let spec = &self.config.people;
        let sql = format!(
            "SELECT {id_col} FROM {table}
             WHERE {name} = ?1 COLLATE NOCASE
             ORDER BY {id_col} LIMIT 1",
            id_col = spec.id_column,
            table = spec.table,
            name = spec.name_column,
        );

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let mut id = stmt
            .query_row([typed], |row| row.get::<_, i64>(0))
            .optional()?;

        // Retry with collapsed whitespace only when the name as typed misses
        let collapsed = clean_name(typed);
        if id.is_none() && collapsed != typed {
            id = stmt
                .query_row([&collapsed], |row| row.get::<_, i64>(0))
                .optional()?;
        }

        debug!(name = %typed, ?id, "resolved person");
        Ok(id.map(PersonId))
    }

    fn person_name(&self, id: PersonId) -> Result<String> {
        self.lookup_name(&self.config.people, NodeKind::Person, id.0)
    }

    fn work_name(&self, id: WorkId) -> Result<String> {
        self.lookup_name(&self.config.works, NodeKind::Work, id.0)
    }
}

impl ParticipationSource for SqliteStore {
    fn for_each_participation(&self, visit: &mut dyn FnMut(Participation)) -> Result<()> {
        let spec = &self.config.participations;
        let (filter, params) = self.category_filter();
        let sql = format!(
            "SELECT DISTINCT {person}, {work} FROM {table} {filter}",
            person = spec.person_column,
            work = spec.work_column,
            table = spec.table,
        );
        debug!(%sql, "scanning participations");

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(params.iter()))?;

        let mut scanned = 0usize;
        while let Some(row) = rows.next()? {
            visit(Participation::new(row.get(0)?, row.get(1)?));
            scanned += 1;
        }

        debug!(scanned, "participation scan complete");
        Ok(())
    }
}
