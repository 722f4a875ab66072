//! End-to-end serving behavior over HTTPS.

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn served_bytes_match_disk_contents() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let res = common::client()
        .get(format!("https://{}/assets/app.js", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.bytes().await.unwrap();
    let on_disk = std::fs::read(root.path().join("assets/app.js")).unwrap();
    assert_eq!(body.as_ref(), on_disk.as_slice());

    shutdown.trigger();
}

#[tokio::test]
async fn root_serves_the_index_file() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let client = common::client();

    let via_root = client
        .get(format!("https://{}/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(via_root.status(), StatusCode::OK);
    let content_type = via_root
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    let root_body = via_root.bytes().await.unwrap();

    let explicit = client
        .get(format!("https://{}/index.html", addr))
        .send()
        .await
        .unwrap();
    let explicit_body = explicit.bytes().await.unwrap();

    assert_eq!(root_body, explicit_body);

    shutdown.trigger();
}

#[tokio::test]
async fn missing_paths_are_not_found() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let client = common::client();

    let res = client
        .get(format!("https://{}/no-such-page.html", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // A directory with no index file inside it is also a miss.
    let res = client
        .get(format!("https://{}/assets/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}

#[tokio::test]
async fn traversal_never_escapes_the_root() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let client = common::client();

    // %2F survives client-side URL normalization, so the server sees the
    // dot segments and must reject them itself.
    let res = client
        .get(format!("https://{}/..%2F..%2F..%2Fetc%2Fpasswd", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Plain dot segments collapse in the client; the server still must not
    // produce anything for the resulting path.
    let res = client
        .get(format!("https://{}/../../../etc/passwd", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}

#[tokio::test]
async fn content_types_follow_extensions() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let client = common::client();

    let res = client
        .get(format!("https://{}/index.html", addr))
        .send()
        .await
        .unwrap();
    let content_type = res.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let res = client
        .get(format!("https://{}/assets/blob.xyz", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn mime_detection_can_be_disabled() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let mut config = common::test_config(root.path(), &cert);
    config.content.mime_detection = false;
    let (addr, shutdown) = common::start_server(config).await;

    let res = common::client()
        .get(format!("https://{}/index.html", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/octet-stream"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn head_answers_without_a_body() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let res = common::client()
        .head(format!("https://{}/index.html", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let expected_len = std::fs::metadata(root.path().join("index.html"))
        .unwrap()
        .len();
    assert_eq!(
        res.headers()
            .get("content-length")
            .unwrap()
            .to_str()
            .unwrap(),
        expected_len.to_string()
    );
    assert!(res.bytes().await.unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn other_methods_are_rejected() {
    let root = common::make_doc_root();
    let (_cert_dir, cert) = common::write_combined_pem();
    let (addr, shutdown) = common::start_server(common::test_config(root.path(), &cert)).await;

    let res = common::client()
        .post(format!("https://{}/index.html", addr))
        .body("payload")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    shutdown.trigger();
}
