use super::*;

#[test]
fn detect_host_outside_browser_is_mock() {
    let host = detect_host();
    assert_eq!(host.kind(), HostKind::Mock);
}

#[tokio::test]
async fn detected_mock_resolves_context() {
    let host = detect_host();
    let ctx = host.context().await.unwrap();
    assert!(ctx.fid.is_some());
    assert!(ctx.url.is_some());
}
