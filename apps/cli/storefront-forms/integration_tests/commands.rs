use storefront_forms::cli::Command;
use storefront_forms::commands::run;
use storefront_forms::error::AppError;
use storefront_forms::terminal::TerminalPage;

use storefront_client::config::StorefrontConfig;
use storefront_client::page::{CredentialStore, PageLocation};
use storefront_client::storage::FileCredentialStore;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Command dispatch from the terminal host, end to end against a mock backend
// ============================================================================

struct Fixture {
    _dir: TempDir,
    config: StorefrontConfig,
    store: FileCredentialStore,
    page: TerminalPage<Vec<u8>>,
}

fn fixture(server: &MockServer) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let mut config = StorefrontConfig::default();
    config.server.base_url = format!("{}/", server.uri());
    config.server.timeout_secs = 5;

    let store = FileCredentialStore::new(dir.path().join(&config.storage.file_name));
    let page = TerminalPage::new(PageLocation::parse(&config.server.base_url).unwrap(), Vec::new());

    Fixture {
        _dir: dir,
        config,
        store,
        page,
    }
}

fn printed(page: TerminalPage<Vec<u8>>) -> String {
    String::from_utf8(page.into_output().unwrap()).unwrap()
}

/// **VALUE**: Login then add-product through the CLI dispatch shares one credential file.
///
/// **WHY THIS MATTERS**: Each CLI invocation is a new process. The token written by
/// `login` must be the one `add-product` sends on the next run.
#[tokio::test]
async fn given_login_then_add_product_when_run_then_token_flows_through_storage() {
    // GIVEN: Backend issuing and accepting a token
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Giriş başarılı", "token": "jwt-1"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/add-product"))
        .and(header("Authorization", "jwt-1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"product_id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;
    let fx = fixture(&server);

    // WHEN: Running login, then add-product
    run(
        Command::Login {
            username: "ayse".to_string(),
            password: "gizli".to_string(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await
    .unwrap();
    run(
        Command::AddProduct {
            name: "Çay".to_string(),
            price: "12".to_string(),
            description: "Rize".to_string(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await
    .unwrap();

    // THEN: Both notifications printed
    assert_eq!(
        printed(fx.page),
        "[!] Giriş başarılı\n[!] Product added!\n"
    );
}

#[tokio::test]
async fn given_no_login_when_add_product_run_then_fails_without_request() {
    let server = MockServer::start().await;
    let fx = fixture(&server);

    let result = run(
        Command::AddProduct {
            name: "Çay".to_string(),
            price: "12".to_string(),
            description: String::new(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await;

    assert!(matches!(result, Err(AppError::Core { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(
        printed(fx.page),
        "[!] Please log in before adding a product.\n"
    );
}

#[tokio::test]
async fn given_reset_link_when_reset_password_run_then_redirects_to_login_on_link_origin() {
    // GIVEN: Backend confirming the reset
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset-password"))
        .and(query_param("token", "abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Şifreniz başarıyla güncellendi."})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let fx = fixture(&server);
    let link = format!("{}/reset-password?token=abc123", server.uri());

    // WHEN: Running reset-password with the link
    run(
        Command::ResetPassword {
            page_url: link,
            new_password: "yeni".to_string(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await
    .unwrap();

    // THEN: Message, then redirect to /login on the same origin
    let visited = fx.page.visited();
    assert_eq!(visited.len(), 1);
    assert_eq!(visited[0].path(), "/login");
    let out = printed(fx.page);
    assert!(out.starts_with("[!] Şifreniz başarıyla güncellendi.\n--> "));
    assert!(out.trim_end().ends_with("/login"));
}

/// **VALUE**: A reset link from another host is posted back to that host, the same place
/// the redirect goes.
///
/// **BUG THIS CATCHES**: Would catch the reset request going to the configured base URL
/// while the redirect follows the link, leaving the password unchanged on the link's host.
#[tokio::test]
async fn given_link_on_other_host_when_reset_password_run_then_posts_and_redirects_to_link_host() {
    // GIVEN: The configured backend and a different host that issued the link
    let configured_server = MockServer::start().await;
    let link_server = MockServer::start().await;
    for server in [&configured_server, &link_server] {
        Mock::given(method("POST"))
            .and(path("/reset-password"))
            .and(query_param("token", "abc123"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Şifreniz başarıyla güncellendi."})),
            )
            .mount(server)
            .await;
    }
    let fx = fixture(&configured_server);

    // WHEN: Running reset-password with the link host's URL
    run(
        Command::ResetPassword {
            page_url: format!("{}/reset-password?token=abc123", link_server.uri()),
            new_password: "yeni".to_string(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await
    .unwrap();

    // THEN: Only the link host saw the request, and the redirect stays on it
    assert_eq!(link_server.received_requests().await.unwrap().len(), 1);
    assert!(configured_server.received_requests().await.unwrap().is_empty());
    let visited = fx.page.visited();
    assert_eq!(visited.len(), 1);
    assert_eq!(
        visited[0].as_str(),
        format!("{}/login", link_server.uri())
    );
}

#[tokio::test]
async fn given_expired_link_when_reset_password_run_then_exits_with_error_and_stays() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reset-password"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"message": "Bağlantı süresi dolmuş. Lütfen tekrar deneyin."})),
        )
        .mount(&server)
        .await;
    let fx = fixture(&server);

    let result = run(
        Command::ResetPassword {
            page_url: format!("{}/reset-password?token=old", server.uri()),
            new_password: "yeni".to_string(),
        },
        &fx.config,
        &fx.store,
        &fx.page,
    )
    .await;

    assert!(matches!(result, Err(AppError::App { .. })));
    assert!(fx.page.visited().is_empty());
    assert_eq!(
        printed(fx.page),
        "[!] Bağlantı süresi dolmuş. Lütfen tekrar deneyin.\n"
    );
}

#[tokio::test]
async fn given_stored_token_when_logout_run_then_token_removed() {
    let server = MockServer::start().await;
    let fx = fixture(&server);
    fx.store
        .set_item("token", &common::RedactedToken::new("jwt-1"))
        .unwrap();

    run(Command::Logout, &fx.config, &fx.store, &fx.page)
        .await
        .unwrap();

    assert!(fx.store.get_item("token").unwrap().is_none());
    assert_eq!(fx.page.visited().len(), 1);
}
