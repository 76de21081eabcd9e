use serde::{Deserialize, Serialize};

use crate::model::ResultMeta;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitialSearchRequest {
    pub terms: Vec<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubsearchRequest {
    pub previous: Vec<String>,
    pub terms: Vec<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolveMetasRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivateRequest {
    pub id: String,
    pub terms: Vec<String>,
    pub timestamp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchSearchRequest {
    pub terms: Vec<String>,
    pub timestamp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum ProviderRequest {
    InitialSearch(InitialSearchRequest),
    Subsearch(SubsearchRequest),
    ResolveMetas(ResolveMetasRequest),
    Activate(ActivateRequest),
    LaunchSearch(LaunchSearchRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSetResponse {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetasResponse {
    pub metas: Vec<ResultMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum ProviderResponse {
    ResultSet(ResultSetResponse),
    Metas(MetasResponse),
    Done,
}
