//! Post hydration against an in-process backend.

mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use codevalley::application::PostRepository;
use codevalley::domain::entities::RawPost;
use codevalley::domain::{AuthToken, Session};
use codevalley::infrastructure::{ClientFactory, HttpConfig, RestSnippetApi};

use common::{MockBackend, TOKEN};

fn raw_post(id: u64, code_url: Option<&str>) -> RawPost {
    RawPost {
        id,
        content: "look at this".to_string(),
        user_id: 1,
        file_id: None,
        code_url: code_url.map(str::to_string),
        username: "neo".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        avatar: None,
        likes: 3,
        user_has_liked: false,
    }
}

fn repository(base_url: &str) -> PostRepository {
    let session = Session::with_token(AuthToken::new(TOKEN).unwrap());
    let factory = ClientFactory::new(&HttpConfig::new(base_url)).unwrap();
    PostRepository::new(Arc::new(RestSnippetApi::new(&factory, &session)))
}

#[tokio::test]
async fn test_hydrate_downloads_relative_snippet() {
    let backend = MockBackend::start().await;
    let repo = repository(&backend.base_url);

    let post = repo.hydrate(raw_post(1, Some("/snippets/hello.rs"))).await.unwrap();

    assert_eq!(post.code.as_deref(), Some("fn main() {}\n"));
    assert_eq!(post.code_language.as_deref(), Some("rust"));
    assert_eq!(
        backend.authorization_for("/snippets/hello.rs").as_deref(),
        Some("Bearer T")
    );
}

#[tokio::test]
async fn test_hydrate_all_keeps_order_and_skips_posts_without_code() {
    let backend = MockBackend::start().await;
    let repo = repository(&backend.base_url);
    let absolute = format!("{}/snippets/hello.rs", backend.base_url);

    let posts = repo
        .hydrate_all(vec![raw_post(1, None), raw_post(2, Some(&absolute))])
        .await
        .unwrap();

    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(posts[0].code, None);
    assert!(posts[1].code.is_some());
    assert_eq!(backend.seen().len(), 1);
}

#[tokio::test]
async fn test_hydrate_foreign_host_gets_no_credentials() {
    let backend = MockBackend::start().await;
    let cdn = MockBackend::start().await;
    let repo = repository(&backend.base_url);
    let foreign = format!("{}/snippets/hello.rs", cdn.base_url);

    let post = repo.hydrate(raw_post(1, Some(&foreign))).await.unwrap();

    assert_eq!(post.code.as_deref(), Some("fn main() {}\n"));
    let seen = cdn.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].authorization, None);
    assert!(backend.seen().is_empty());
}

#[tokio::test]
async fn test_hydrate_missing_snippet_fails() {
    let backend = MockBackend::start().await;
    let repo = repository(&backend.base_url);

    let err = repo.hydrate(raw_post(1, Some("/snippets/gone.py"))).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
}
