//! End-to-end behaviour of the checklist workflow.

use std::time::Duration;

use apichecklist::{
    backend::{HttpBackend, MockBackend, MockFailures},
    checklist::{
        ALL_GROUPS, ChecklistController, MSG_LOAD_FAILED, NoticeKind, ToggleOutcome,
    },
    config::Settings,
    management::{IdentityManager, IdentityPrompt, PromptState},
    types::ItemKey,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PETS: &str = r#"{"Pets": [{"httpMethod":"GET","path":"/pets","description":"list pets","checked":false}]}"#;
const PET_LINKS: &str = r#"{"GET_/pets":"/pets/list"}"#;

const SHOP: &str = r#"{
    "Pets": [
        {"httpMethod":"GET","path":"/pets","description":"list pets","checked":false},
        {"httpMethod":"POST","path":"/pets","description":"add pet","checked":true,"nickname":"bob"}
    ],
    "Store": [
        {"httpMethod":"GET","path":"/store/inventory","description":"inventory","checked":false}
    ],
    "Users": [
        {"httpMethod":"DELETE","path":"/users/{name}","description":"delete user","checked":false}
    ]
}"#;

fn untracked() -> Settings {
    Settings {
        track_nickname: false,
        notice_lifetime: Duration::from_secs(3),
        ..Settings::default()
    }
}

fn texts(controller: &ChecklistController<MockBackend>) -> Vec<String> {
    controller
        .rendered()
        .entries()
        .map(|e| format!("{}: {}", e.group, e.text))
        .collect()
}

#[tokio::test]
async fn initial_render_matches_backend_data() {
    let backend = MockBackend::from_json(PETS, PET_LINKS).unwrap();
    let mut controller = ChecklistController::new(backend, untracked()).quiet();
    assert!(controller.load_groups().await);

    let list = controller.rendered();
    assert_eq!(list.groups.len(), 1);
    assert_eq!(list.groups[0].heading, "Pets");
    let entry = list.entry(1).unwrap();
    assert!(!entry.checked);
    assert_eq!(entry.css_class(), "unchecked");
    assert_eq!(entry.text, "GET | /pets - list pets");
    assert_eq!(entry.link, "/swagger-ui/index.html#/pets/list");
}

#[tokio::test]
async fn render_covers_every_item_in_order() {
    let backend = MockBackend::from_json(SHOP, "{}").unwrap();
    let mut controller = ChecklistController::new(backend, untracked()).quiet();
    controller.load_groups().await;

    assert_eq!(
        texts(&controller),
        vec![
            "Pets: GET | /pets - list pets",
            "Pets: POST | /pets - add pet",
            "Store: GET | /store/inventory - inventory",
            "Users: DELETE | /users/{name} - delete user",
        ]
    );
    let indexes: Vec<usize> = controller.rendered().entries().map(|e| e.index).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn filter_rerenders_without_fetching() {
    let backend = MockBackend::from_json(SHOP, "{}").unwrap();
    let mut controller = ChecklistController::new(backend.clone(), untracked()).quiet();
    controller.load_groups().await;

    assert_eq!(
        controller.filter().options(),
        vec![ALL_GROUPS, "Pets", "Store", "Users"]
    );

    assert!(controller.select_group("Store"));
    assert_eq!(
        texts(&controller),
        vec!["Store: GET | /store/inventory - inventory"]
    );

    assert!(controller.select_group(ALL_GROUPS));
    assert_eq!(controller.rendered().len(), 4);
    assert_eq!(backend.group_fetches(), 1);
}

#[tokio::test]
async fn filter_survives_reload_after_toggle() {
    let backend = MockBackend::from_json(SHOP, "{}").unwrap();
    let mut controller = ChecklistController::new(backend, untracked()).quiet();
    controller.load_groups().await;
    controller.select_group("Users");

    let outcome = controller.toggle_index(1).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Updated { reloaded: true });
    assert_eq!(controller.rendered().len(), 1);
    assert!(controller.entry(1).unwrap().checked);
}

#[tokio::test]
async fn failed_load_keeps_previous_snapshot() {
    let backend = MockBackend::from_json(PETS, PET_LINKS).unwrap();
    let mut controller = ChecklistController::new(backend.clone(), untracked()).quiet();
    controller.load_groups().await;
    let before = controller.rendered().clone();

    backend.set_groups(serde_json::from_str(SHOP).unwrap());
    backend.set_failures(MockFailures {
        links: true,
        ..MockFailures::default()
    });
    assert!(!controller.load_groups().await);

    // groups were fetched but never applied without their links
    assert_eq!(controller.rendered(), &before);
    assert_eq!(controller.state().group_names(), vec!["Pets".to_string()]);
    let notice = controller.notices().current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, MSG_LOAD_FAILED);
}

#[tokio::test]
async fn failed_reload_after_update_keeps_old_view() {
    let backend = MockBackend::from_json(PETS, PET_LINKS).unwrap();
    let mut controller = ChecklistController::new(backend.clone(), untracked()).quiet();
    controller.load_groups().await;

    backend.set_failures(MockFailures {
        groups: true,
        ..MockFailures::default()
    });
    let outcome = controller.toggle_index(1).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Updated { reloaded: false });
    // the checkbox keeps its provisional state until a reload confirms it
    let entry = controller.entry(1).unwrap();
    assert!(entry.control.checked);
    assert!(!entry.checked);
}

#[tokio::test]
async fn stale_load_does_not_clobber_newer_one() {
    let backend = MockBackend::from_json(PETS, "{}").unwrap();
    let mut controller = ChecklistController::new(backend.clone(), untracked()).quiet();

    let slow = controller.begin_load();
    let slow_result = controller.fetch_snapshot().await.unwrap();

    backend.set_groups(serde_json::from_str(SHOP).unwrap());
    assert!(controller.load_groups().await);
    assert_eq!(controller.rendered().len(), 4);

    let (groups, links) = slow_result;
    assert!(!controller.apply_load(slow, groups, links));
    assert_eq!(controller.rendered().len(), 4);
}

#[tokio::test]
async fn identity_prompt_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = IdentityManager::with_path(dir.path().join("identity.json"));
    let backend = MockBackend::from_json(PETS, PET_LINKS).unwrap();
    let mut controller = ChecklistController::new(backend.clone(), Settings::default())
        .quiet()
        .with_identity(IdentityPrompt::load(store.clone()).await);

    assert_eq!(controller.identity().unwrap().state(), PromptState::Prompting);
    assert!(controller.needs_identity());

    assert!(controller.submit_nickname("  ").await.is_err());
    assert_eq!(controller.identity().unwrap().state(), PromptState::Prompting);

    assert_eq!(controller.submit_nickname("Alice").await.unwrap(), "Alice");
    assert_eq!(controller.identity().unwrap().state(), PromptState::Dismissed);
    assert_eq!(store.load().await.unwrap(), Some("Alice".to_string()));

    controller.reset_identity().await.unwrap();
    assert_eq!(controller.identity().unwrap().state(), PromptState::Prompting);
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn check_and_uncheck_by_key() {
    let backend = MockBackend::from_json(SHOP, "{}").unwrap();
    let mut controller = ChecklistController::new(backend.clone(), untracked()).quiet();
    controller.load_groups().await;

    let key = ItemKey::new("POST", "/pets");
    controller.set_checked(&key, false).await.unwrap();
    assert!(!controller.rendered().find(&key).unwrap().checked);

    let missing = ItemKey::new("PUT", "/pets");
    assert!(controller.set_checked(&missing, true).await.is_err());
    assert_eq!(backend.updates().len(), 1);
}

#[tokio::test]
async fn http_round_trip_triggers_reload() {
    let server = MockServer::start().await;
    let base = "/v1/api/link/checker";

    Mock::given(method("GET"))
        .and(path(base))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PETS, "application/json"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/swagger-links", base)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PET_LINKS, "application/json"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/check", base)))
        .and(query_param("httpMethod", "GET"))
        .and(query_param("path", "/pets"))
        .and(query_param("checked", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&format!("{}{}", server.uri(), base)).unwrap();
    let mut controller = ChecklistController::new(backend, untracked()).quiet();
    assert!(controller.load_groups().await);
    assert_eq!(
        controller.entry(1).unwrap().link,
        "/swagger-ui/index.html#/pets/list"
    );

    let outcome = controller.toggle_index(1).await.unwrap();
    assert_eq!(outcome, ToggleOutcome::Updated { reloaded: true });
}
