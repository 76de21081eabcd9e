use serde::{Deserialize, Serialize};

use crate::contract::{MetasResponse, ProviderRequest, ProviderResponse, ResultSetResponse};
use crate::provider::{ProviderError, SearchProviderPort};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    Inventory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: ProviderResponse },
    Err { error: ErrorResponse },
}

pub fn handle_request(
    provider: &mut dyn SearchProviderPort,
    request: ProviderRequest,
) -> TransportResponse {
    let result = match request {
        ProviderRequest::InitialSearch(req) => provider
            .initial_search(&req.terms, req.limit)
            .map(|ids| ProviderResponse::ResultSet(ResultSetResponse { ids })),
        ProviderRequest::Subsearch(req) => provider
            .subsearch(&req.previous, &req.terms, req.limit)
            .map(|ids| ProviderResponse::ResultSet(ResultSetResponse { ids })),
        ProviderRequest::ResolveMetas(req) => {
            let metas = provider.resolve_metas(&req.ids);
            Ok(ProviderResponse::Metas(MetasResponse { metas }))
        }
        ProviderRequest::Activate(req) => {
            provider.activate_result(&req.id, &req.terms, req.timestamp);
            Ok(ProviderResponse::Done)
        }
        ProviderRequest::LaunchSearch(req) => {
            provider.launch_search(&req.terms, req.timestamp);
            Ok(ProviderResponse::Done)
        }
    };

    match result {
        Ok(response) => TransportResponse::Ok { response },
        Err(error) => TransportResponse::Err {
            error: map_provider_error(error),
        },
    }
}

pub fn handle_json(provider: &mut dyn SearchProviderPort, payload: &str) -> String {
    let response = match serde_json::from_str::<ProviderRequest>(payload) {
        Ok(request) => handle_request(provider, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}

fn map_provider_error(error: ProviderError) -> ErrorResponse {
    match error {
        ProviderError::Inventory(message) => ErrorResponse {
            code: ErrorCode::Inventory,
            message: message.to_string(),
        },
    }
}
