use super::*;

#[test]
fn report_endpoint_formats_expected_path() {
    assert_eq!(report_endpoint("abc-123"), "/api/analyses/abc-123");
}

#[test]
fn status_404_is_not_found() {
    assert_eq!(status_error(404), ApiError::NotFound);
    assert_eq!(status_error(500), ApiError::Status(500));
}

#[test]
fn not_found_message_suggests_reupload() {
    assert!(ApiError::NotFound.to_string().contains("upload the image again"));
}

#[test]
fn fetch_report_is_unavailable_without_browser() {
    let result = block_on_ready(fetch_report("x"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that is ready on first poll.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future not immediately ready"),
    }
}
