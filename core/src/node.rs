use serde::{Deserialize, Serialize};
use std::fmt;

/// Store key of a person row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub i64);

/// Store key of a work row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkId(pub i64);

/// A graph key. The tag keeps the person and work key spaces apart, so the
/// same raw integer may appear on both sides without colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeId {
    Person(PersonId),
    Work(WorkId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Work,
}

/// One credited appearance of a person in a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Participation {
    pub person: PersonId,
    pub work: WorkId,
}

impl Participation {
    pub fn new(person: i64, work: i64) -> Self {
        Self {
            person: PersonId(person),
            work: WorkId(work),
        }
    }
}

impl NodeId {
    pub fn person(id: i64) -> Self {
        NodeId::Person(PersonId(id))
    }

    pub fn work(id: i64) -> Self {
        NodeId::Work(WorkId(id))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            NodeId::Person(_) => NodeKind::Person,
            NodeId::Work(_) => NodeKind::Work,
        }
    }

    pub fn raw(&self) -> i64 {
        match self {
            NodeId::Person(PersonId(id)) | NodeId::Work(WorkId(id)) => *id,
        }
    }
}

impl From<PersonId> for NodeId {
    fn from(id: PersonId) -> Self {
        NodeId::Person(id)
    }
}

impl From<WorkId> for NodeId {
    fn from(id: WorkId) -> Self {
        NodeId::Work(id)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Person => write!(f, "person"),
            NodeKind::Work => write!(f, "work"),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.raw())
    }
}
