use super::*;

// =============================================================
// CancelToken
// =============================================================

#[test]
fn new_token_is_not_cancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let handler_copy = token.clone();
    token.cancel();
    assert!(handler_copy.is_cancelled());
}

#[test]
fn independent_tokens_do_not_interfere() {
    let a = CancelToken::new();
    let b = CancelToken::new();
    a.cancel();
    assert!(!b.is_cancelled());
}
