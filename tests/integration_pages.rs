use reqwest::StatusCode;
use sapunoa::config::{CACHE_CONTROL_PAGE, CACHE_CONTROL_STATIC};
use sapunoa::i18n::Locale;
mod common;

#[tokio::test]
async fn test_index_renders_default_locale() {
    let app = common::TestApp::spawn().await;
    let resp = app.get("/").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("cache-control").unwrap(), CACHE_CONTROL_PAGE);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains(&Locale::En.messages().hero.title));
}

#[tokio::test]
async fn test_each_locale_renders_its_copy() {
    let app = common::TestApp::spawn().await;
    for locale in Locale::ALL {
        let resp = app.get(&format!("/{}", locale.code())).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.text().await.unwrap();
        let messages = locale.messages();
        assert!(body.contains(&tera::escape_html(&messages.hero.title)));
        for feature in &messages.features {
            assert!(body.contains(&tera::escape_html(&feature.title)));
        }
    }
}

#[tokio::test]
async fn test_class_names_are_composed() {
    let app = common::TestApp::spawn().await;
    let body = app.get("/en").await.text().await.unwrap();

    assert!(body.contains(r#"class="feature feature-highlight""#));
    assert!(body.contains(r#"class="feature""#));
    assert!(body.contains(r#"class="lang-link is-current""#));
    assert!(body.contains(r#"class="lang-link""#));
    assert!(body.contains(r#"class="btn btn-primary btn-lg""#));
}

#[tokio::test]
async fn test_unknown_locale_is_404() {
    let app = common::TestApp::spawn().await;
    let resp = app.get("/xx").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Unknown locale: xx"));
    assert!(body.contains("Request ID:"));
}

#[tokio::test]
async fn test_auth_pages() {
    let app = common::TestApp::spawn().await;

    let login = app.get("/es/login").await;
    assert_eq!(login.status(), StatusCode::OK);
    let body = login.text().await.unwrap();
    assert!(body.contains("page-auth"));
    assert!(body.contains(&tera::escape_html(&Locale::Es.messages().auth.login_title)));
    assert!(body.contains(r#"class="nav-link is-current""#));

    let register = app.get("/en/register").await;
    assert_eq!(register.status(), StatusCode::OK);
    let body = register.text().await.unwrap();
    assert!(body.contains(&Locale::En.messages().auth.register_title));
    assert!(body.contains(r#"class="btn btn-primary is-current""#));
}

#[tokio::test]
async fn test_auth_page_unknown_locale_is_404() {
    let app = common::TestApp::spawn().await;
    assert_eq!(app.get("/de/login").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_test_page() {
    let app = common::TestApp::spawn().await;
    let resp = app.get("/test").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    let copy = &Locale::En.messages().test;
    assert!(body.contains(&copy.upload_heading));
    assert!(body.contains(&copy.analysis_heading));
}

#[tokio::test]
async fn test_static_assets() {
    let app = common::TestApp::spawn().await;

    let css = app.get("/static/css/style.css").await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(css.headers().get("cache-control").unwrap(), CACHE_CONTROL_STATIC);

    let favicon = app.get("/favicon.svg").await;
    assert_eq!(favicon.status(), StatusCode::OK);

    let missing = app.get("/static/css/missing.css").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
