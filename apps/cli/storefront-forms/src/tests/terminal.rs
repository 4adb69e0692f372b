use crate::terminal::TerminalPage;

use storefront_client::page::{Navigator, Notifier, PageLocation};

fn page_at(href: &str) -> TerminalPage<Vec<u8>> {
    TerminalPage::new(PageLocation::parse(href).unwrap(), Vec::new())
}

fn output(page: TerminalPage<Vec<u8>>) -> String {
    String::from_utf8(page.into_output().unwrap()).unwrap()
}

#[test]
fn given_alerts_when_shown_then_printed_one_per_line() {
    let page = page_at("http://127.0.0.1:5000/");

    page.alert("Product added!");
    page.alert("Şifreniz başarıyla güncellendi.");

    assert_eq!(
        output(page),
        "[!] Product added!\n[!] Şifreniz başarıyla güncellendi.\n"
    );
}

/// **VALUE**: A redirect from the reset page lands on the same origin's login page.
///
/// **BUG THIS CATCHES**: Would catch navigation resolving against the wrong page (for
/// example the configured base URL instead of the reset link's host).
#[test]
fn given_reset_page_when_login_path_assigned_then_resolves_against_page_origin() {
    // GIVEN: A page opened from a reset link on another host
    let page = page_at("http://127.0.0.1:5000/");
    page.visit(PageLocation::parse("https://shop.example/reset-password?token=abc").unwrap());

    // WHEN: Navigating to the login path
    page.assign("/login");

    // THEN: Target is on the reset link's origin, and becomes the current page
    let visited = page.visited();
    assert_eq!(visited.len(), 1);
    assert_eq!(visited[0].as_str(), "https://shop.example/login");
    assert_eq!(
        page.location().unwrap().as_url().as_str(),
        "https://shop.example/login"
    );
    assert_eq!(output(page), "--> https://shop.example/login\n");
}
