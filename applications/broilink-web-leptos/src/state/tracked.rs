use std::future::Future;

use leptos::*;

use super::fetch::FetchState;
use super::sequence::{RequestSequence, Ticket};
use crate::api::{ApiClient, ApiError};

/// Share one API client (and its CSRF flag) with every page
pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

/// API client from context, or a fresh browser client outside the app root
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        log::warn!("ApiClient not provided, creating a new one");
        ApiClient::new()
    })
}

/// Run `request` for a page, applying its result only if no newer request
/// was issued on the same sequence in the meantime
pub fn spawn_tracked_fetch<T, R, Fut, M>(
    context: &'static str,
    state: RwSignal<FetchState<T>>,
    sequence: &RequestSequence,
    request: Fut,
    merge: M,
) where
    T: 'static,
    R: 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
    M: FnOnce(Option<&T>, R) -> T + 'static,
{
    let ticket = sequence.issue();
    let sequence = sequence.clone();
    state.update(FetchState::begin);
    log::debug!("{}: fetching", context);

    spawn_local(async move {
        let result = request.await;
        state.try_update(|current| {
            apply_if_current(context, &sequence, ticket, current, result, merge)
        });
    });
}

/// Settle a response into `state`; stale responses are dropped
pub fn apply_if_current<T, R, M>(
    context: &'static str,
    sequence: &RequestSequence,
    ticket: Ticket,
    state: &mut FetchState<T>,
    result: Result<R, ApiError>,
    merge: M,
) -> bool
where
    M: FnOnce(Option<&T>, R) -> T,
{
    if !sequence.is_current(ticket) {
        log::debug!("{}: discarding stale response", context);
        return false;
    }

    match &result {
        Ok(_) => log::info!("{}: loaded", context),
        Err(e) => log::error!("{}: {}", context, e),
    }
    state.resolve(result.map_err(|e| e.user_message()), merge);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(_: Option<&u32>, fresh: u32) -> u32 {
        fresh
    }

    #[test]
    fn test_slow_earlier_response_is_discarded() {
        let sequence = RequestSequence::new();
        let mut state = FetchState::with_placeholder(0);

        let slow = sequence.issue();
        let fast = sequence.issue();

        assert!(apply_if_current("test", &sequence, fast, &mut state, Ok(2), replace));
        assert!(!apply_if_current("test", &sequence, slow, &mut state, Ok(1), replace));

        assert_eq!(state, FetchState::Ready(2));
    }

    #[test]
    fn test_stale_error_does_not_raise_banner() {
        let sequence = RequestSequence::new();
        let mut state = FetchState::with_placeholder(7);

        let stale = sequence.issue();
        sequence.issue();

        let applied = apply_if_current(
            "test",
            &sequence,
            stale,
            &mut state,
            Err(ApiError::Network("offline".into())),
            replace,
        );

        assert!(!applied);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_shows_user_message_over_previous_data() {
        let sequence = RequestSequence::new();
        let mut state = FetchState::with_placeholder(35);
        let ticket = sequence.issue();

        apply_if_current(
            "owner monitoring",
            &sequence,
            ticket,
            &mut state,
            Err(ApiError::Http {
                status: 500,
                message: "Server Error".into(),
            }),
            replace,
        );

        assert_eq!(state.current(), Some(&35));
        assert_eq!(state.error(), Some("Server Error"));
    }
}
