use crate::error::{Error, Result};

/// Table holding one kind of named entity
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub table: String,
    pub id_column: String,
    pub name_column: String,
}

/// Many-to-many join between people and works
#[derive(Debug, Clone)]
pub struct ParticipationSpec {
    pub table: String,
    pub person_column: String,
    pub work_column: String,
    pub category_column: String,
}

/// Where the store keeps people, works and participations, and which
/// participation role counts as an edge.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub people: TableSpec,
    pub works: TableSpec,
    pub participations: ParticipationSpec,
    /// Only participations with this role become edges (`None` keeps all)
    pub category: Option<String>,
}

impl TableSpec {
    pub fn new(table: &str, id_column: &str, name_column: &str) -> Self {
        Self {
            table: table.to_string(),
            id_column: id_column.to_string(),
            name_column: name_column.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Table and column names are spliced into SQL text, so only plain
    /// identifiers are accepted.
    pub fn validate(&self) -> Result<()> {
        let identifiers = [
            &self.people.table,
            &self.people.id_column,
            &self.people.name_column,
            &self.works.table,
            &self.works.id_column,
            &self.works.name_column,
            &self.participations.table,
            &self.participations.person_column,
            &self.participations.work_column,
            &self.participations.category_column,
        ];

        match identifiers.into_iter().find(|name| !is_plain_identifier(name)) {
            Some(bad) => Err(Error::Config(format!("invalid SQL identifier: {bad:?}"))),
            None => Ok(()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            people: TableSpec::new("name_basics", "nconst", "primaryName"),
            works: TableSpec::new("title_basics", "tconst", "primaryTitle"),
            participations: ParticipationSpec {
                table: "title_principals".to_string(),
                person_column: "nconst".to_string(),
                work_column: "tconst".to_string(),
                category_column: "category".to_string(),
            },
            category: Some("actor".to_string()),
        }
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
