use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn recipe_endpoints_format_expected_paths() {
    assert_eq!(recipe_endpoint("r1"), "/api/recipes/r1");
    assert_eq!(recipe_ratings_endpoint("r1"), "/api/recipes/r1/ratings");
    assert_eq!(recipe_comments_endpoint("r1"), "/api/recipes/r1/comments");
}

#[test]
fn comment_delete_endpoint_carries_user_id_query() {
    assert_eq!(
        recipe_comment_endpoint("r1", "c2", "u3"),
        "/api/recipes/r1/comments/c2?userId=u3"
    );
}

#[test]
fn user_endpoints_format_expected_paths() {
    assert_eq!(user_endpoint("u1"), "/api/users/u1");
    assert_eq!(user_password_endpoint("u1"), "/api/users/u1/password");
    assert_eq!(user_recipes_endpoint("u1"), "/api/users/u1/recipes");
    assert_eq!(user_favorites_endpoint("u1"), "/api/users/u1/favorites");
    assert_eq!(user_favorite_endpoint("u1", "r2"), "/api/users/u1/favorites/r2");
    assert_eq!(user_rating_endpoint("u1", "r2"), "/api/users/u1/ratings/r2");
}

// =============================================================
// Failure messages
// =============================================================

#[test]
fn login_failed_message_maps_unauthorized() {
    assert_eq!(login_failed_message(401), "Invalid email or password");
    assert_eq!(login_failed_message(500), "sign in failed: 500");
}

#[test]
fn register_failed_message_maps_conflict() {
    assert_eq!(
        register_failed_message(409),
        "An account with that email already exists"
    );
    assert_eq!(register_failed_message(400), "registration failed: 400");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "request failed: 502");
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
mod ssr_stubs {
    use super::super::*;

    fn block_on<T>(fut: impl Future<Output = T>) -> T {
        // The SSR stubs complete without awaiting anything; poll once.
        use std::pin::pin;
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn noop_raw_waker() -> RawWaker {
            const VTABLE: RawWakerVTable =
                RawWakerVTable::new(|_| noop_raw_waker(), |_| {}, |_| {}, |_| {});
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        match pin!(fut).poll(&mut cx) {
            Poll::Ready(value) => value,
            Poll::Pending => unreachable!("ssr stub futures resolve immediately"),
        }
    }

    #[test]
    fn reads_return_none_on_server() {
        assert!(block_on(fetch_recipes()).is_none());
        assert!(block_on(fetch_recipe("r1")).is_none());
        assert!(block_on(fetch_categories()).is_none());
        assert!(block_on(fetch_favorites("u1")).is_none());
        assert!(block_on(fetch_rating_summary("r1")).is_none());
        assert!(block_on(fetch_comments("r1")).is_none());
        assert!(block_on(fetch_public_user("u1")).is_none());
    }

    #[test]
    fn writes_error_on_server() {
        assert!(block_on(login("a@b.com", "secret1")).is_err());
        assert!(block_on(rate_recipe("u1", "r1", 5)).is_err());
        assert!(block_on(toggle_favorite("u1", "r1", false)).is_err());
        assert!(block_on(delete_recipe("r1")).is_err());
    }

    #[test]
    fn security_questions_fall_back_on_server() {
        assert_eq!(block_on(fetch_security_questions()).len(), 10);
    }
}
