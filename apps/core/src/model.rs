use serde::{Deserialize, Serialize};

/// One virtual machine as reported by the management CLI. The id keeps the
/// braces the CLI prints around it (`{uuid}`); the start command expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmRecord {
    pub id: String,
    pub name: String,
}

impl VmRecord {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconDescriptor {
    pub name: String,
    pub fallback: String,
}

/// Presentation metadata for one result id. Field names are part of the host
/// protocol; recomputed on every resolve request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultMeta {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: IconDescriptor,
}

impl ResultMeta {
    pub fn for_record(record: &VmRecord, icon_name: &str, icon_fallback: &str) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: format!("VirtualBox virtual machine {}", record.name),
            icon: IconDescriptor {
                name: icon_name.to_string(),
                fallback: icon_fallback.to_string(),
            },
        }
    }
}

/// Joins query terms into the single lowercase substring the parser matches
/// against. Terms are concatenated with one space, not matched independently.
pub fn joined_terms(terms: &[String]) -> String {
    terms.join(" ").to_lowercase()
}
