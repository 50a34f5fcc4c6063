mod utils;

use tokio;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use steamfront::models::steam::CatalogEntry;
use steamfront::Error;

async fn mount_catalog(mock: &MockServer, fixture: &str, hits: u64) {
    let response = utils::fixture(fixture);
    Mock::given(method("GET"))
        .and(path("/ISteamApps/GetAppList/v0001/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(response.as_bytes(), "application/json"),
        )
        .expect(hits)
        .mount(mock)
        .await;
}

#[tokio::test]
async fn test_client_construction_is_lazy() {
    let mock_steam = MockServer::start().await;

    let _client = utils::client(&mock_steam, Some("STEAM API KEY"));

    assert!(mock_steam.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_catalog_fetched_once_across_lookups() {
    let mock_steam = MockServer::start().await;
    mount_catalog(&mock_steam, "app-list/catalog-1.json", 1).await;

    let client = utils::client(&mock_steam, None);

    assert_eq!(client.resolve_id_by_name("Portal", true).unwrap(), 400);
    assert_eq!(client.resolve_id_by_name("Portal 2", true).unwrap(), 620);
    assert_eq!(client.fetch_catalog(false).unwrap().len(), 4);
}

#[tokio::test]
async fn test_resolve_is_case_sensitive_by_default() {
    let mock_steam = MockServer::start().await;
    mount_catalog(&mock_steam, "app-list/catalog-1.json", 1).await;

    let client = utils::client(&mock_steam, None);

    // Exact match picks the lowercase entry...
    assert_eq!(client.resolve_id_by_name("half-life", true).unwrap(), 71);
    // ...while the insensitive scan stops at the first catalog entry
    assert_eq!(client.resolve_id_by_name("half-life", false).unwrap(), 70);
}

#[tokio::test]
async fn test_resolve_unknown_name() {
    let mock_steam = MockServer::start().await;
    mount_catalog(&mock_steam, "app-list/catalog-1.json", 1).await;

    let client = utils::client(&mock_steam, None);
    let res = client.resolve_id_by_name("Ricochet", true);

    assert!(matches!(res, Err(Error::AppNotFound(ref name)) if name == "Ricochet"));
}

#[tokio::test]
async fn test_search_apps() {
    let mock_steam = MockServer::start().await;
    mount_catalog(&mock_steam, "app-list/catalog-1.json", 1).await;

    let client = utils::client(&mock_steam, None);

    let exact = client.search_apps("Portal", true, false).unwrap();
    assert_eq!(
        exact,
        vec![CatalogEntry { appid: 400, name: "Portal".to_string() }]
    );

    let insensitive = client.search_apps("portal", false, false).unwrap();
    assert_eq!(
        insensitive,
        vec![
            CatalogEntry { appid: 400, name: "Portal".to_string() },
            CatalogEntry { appid: 620, name: "Portal 2".to_string() },
        ]
    );

    assert!(client.search_apps("Portal 3", true, false).unwrap().is_empty());
}

#[tokio::test]
async fn test_refresh_replaces_the_catalog() {
    let mock_steam = MockServer::start().await;
    mount_catalog(&mock_steam, "app-list/catalog-1.json", 1).await;

    let client = utils::client(&mock_steam, None);
    assert_eq!(client.fetch_catalog(false).unwrap().len(), 4);

    // Swap what steam answers with, then force a refetch
    mock_steam.reset().await;
    mount_catalog(&mock_steam, "app-list/catalog-2.json", 1).await;

    let refreshed = client.fetch_catalog(true).unwrap();
    assert_eq!(
        refreshed,
        vec![
            CatalogEntry { appid: 440, name: "Team Fortress 2".to_string() },
            CatalogEntry { appid: 570, name: "Dota 2".to_string() },
        ]
    );

    // The old listing is gone wholesale, and no further request is made
    assert_eq!(client.fetch_catalog(false).unwrap(), refreshed);
    assert!(matches!(
        client.resolve_id_by_name("Portal", true),
        Err(Error::AppNotFound(_))
    ));
}
