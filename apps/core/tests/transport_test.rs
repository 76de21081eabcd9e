use vmsearch_core::config::Config;
use vmsearch_core::contract::{
    InitialSearchRequest, ProviderRequest, ProviderResponse, ResolveMetasRequest,
};
use vmsearch_core::inventory::{InventoryError, InventorySource, StaticInventory};
use vmsearch_core::provider::SearchProvider;
use vmsearch_core::transport::{handle_json, handle_request, ErrorCode, TransportResponse};

struct FailingInventory;

impl InventorySource for FailingInventory {
    fn fetch(&self) -> Result<String, InventoryError> {
        Err(InventoryError::EmptyCommand)
    }
}

fn fixture_provider() -> SearchProvider<StaticInventory> {
    SearchProvider::new(Config::default(), StaticInventory::deterministic_fixture())
}

#[test]
fn search_request_returns_ok_envelope_with_ids() {
    let mut provider = fixture_provider();

    let response = handle_request(
        &mut provider,
        ProviderRequest::InitialSearch(InitialSearchRequest {
            terms: vec!["win".to_string()],
            limit: None,
        }),
    );

    match response {
        TransportResponse::Ok {
            response: ProviderResponse::ResultSet(payload),
        } => assert_eq!(payload.ids, vec!["{abc-123}"]),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn resolve_metas_request_round_trips_through_json() {
    let mut provider = fixture_provider();
    handle_request(
        &mut provider,
        ProviderRequest::InitialSearch(InitialSearchRequest {
            terms: vec![],
            limit: None,
        }),
    );

    let request = ProviderRequest::ResolveMetas(ResolveMetasRequest {
        ids: vec!["{def-456}".to_string()],
    });
    let raw = handle_json(&mut provider, &serde_json::to_string(&request).unwrap());
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();

    match parsed {
        TransportResponse::Ok {
            response: ProviderResponse::Metas(payload),
        } => {
            assert_eq!(payload.metas.len(), 1);
            assert_eq!(payload.metas[0].name, "Ubuntu-Dev");
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn invalid_json_returns_typed_error_code() {
    let mut provider = fixture_provider();

    let raw = handle_json(&mut provider, "{not-json");
    let parsed: TransportResponse = serde_json::from_str(&raw).unwrap();

    match parsed {
        TransportResponse::Err { error } => assert_eq!(error.code, ErrorCode::InvalidJson),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn inventory_failure_maps_to_inventory_error_code() {
    let mut provider = SearchProvider::new(Config::default(), FailingInventory);

    let response = handle_request(
        &mut provider,
        ProviderRequest::InitialSearch(InitialSearchRequest {
            terms: vec![],
            limit: None,
        }),
    );

    match response {
        TransportResponse::Err { error } => {
            assert_eq!(error.code, ErrorCode::Inventory);
            let encoded = serde_json::to_string(&TransportResponse::Err { error }).unwrap();
            assert!(encoded.contains("\"status\":\"err\""));
            assert!(encoded.contains("\"code\":\"inventory\""));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}
