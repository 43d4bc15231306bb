use std::mem;

/// Lifecycle of data a page fetches, keeping the last good value throughout
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading { previous: Option<T> },
    Ready(T),
    Failed { last_good: Option<T>, error: String },
}

impl<T> FetchState<T> {
    /// Loading, with placeholder data shown until the first response
    pub fn with_placeholder(placeholder: T) -> Self {
        FetchState::Loading {
            previous: Some(placeholder),
        }
    }

    /// The value to render: fresh data, or whatever was shown before
    pub fn current(&self) -> Option<&T> {
        match self {
            FetchState::Loading { previous } => previous.as_ref(),
            FetchState::Ready(data) => Some(data),
            FetchState::Failed { last_good, .. } => last_good.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    fn take_current(&mut self) -> Option<T> {
        let state = mem::replace(self, FetchState::Loading { previous: None });
        match state {
            FetchState::Loading { previous } => previous,
            FetchState::Ready(data) => Some(data),
            FetchState::Failed { last_good, .. } => last_good,
        }
    }

    /// Start a new request without dropping what is on screen
    pub fn begin(&mut self) {
        let previous = self.take_current();
        *self = FetchState::Loading { previous };
    }

    pub fn succeed(&mut self, data: T) {
        *self = FetchState::Ready(data);
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        let last_good = self.take_current();
        *self = FetchState::Failed {
            last_good,
            error: error.into(),
        };
    }

    /// Hide the error banner; nothing changes while there is no data to fall back on
    pub fn dismiss(&mut self) {
        if matches!(self, FetchState::Failed { last_good: Some(_), .. }) {
            if let Some(data) = self.take_current() {
                *self = FetchState::Ready(data);
            }
        }
    }

    /// Apply a response, merging it into the value currently shown
    pub fn resolve<R, E, M>(&mut self, result: Result<R, E>, merge: M)
    where
        E: ToString,
        M: FnOnce(Option<&T>, R) -> T,
    {
        match result {
            Ok(response) => {
                let merged = merge(self.current(), response);
                self.succeed(merged);
            }
            Err(e) => self.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_stays_visible_while_loading() {
        let state = FetchState::with_placeholder(35);
        assert!(state.is_loading());
        assert_eq!(state.current(), Some(&35));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_keeps_last_good_value() {
        let mut state = FetchState::with_placeholder(35);
        state.fail("Network error: offline");

        assert_eq!(state.current(), Some(&35));
        assert_eq!(state.error(), Some("Network error: offline"));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_refetch_after_failure_keeps_value_and_clears_error() {
        let mut state = FetchState::with_placeholder(1);
        state.succeed(2);
        state.fail("boom");
        state.begin();

        assert_eq!(state, FetchState::Loading { previous: Some(2) });
    }

    #[test]
    fn test_resolve_merges_into_current_value() {
        let mut state = FetchState::with_placeholder(vec![1, 2]);
        state.resolve(Ok::<_, String>(3), |previous, extra| {
            let mut merged = previous.cloned().unwrap_or_default();
            merged.push(extra);
            merged
        });
        assert_eq!(state, FetchState::Ready(vec![1, 2, 3]));

        state.resolve(Err::<i32, _>("HTTP error 500: down"), |_, _| Vec::new());
        assert_eq!(state.current(), Some(&vec![1, 2, 3]));
        assert_eq!(state.error(), Some("HTTP error 500: down"));
    }

    #[test]
    fn test_dismiss() {
        let mut state = FetchState::with_placeholder("mock");
        state.fail("boom");
        state.dismiss();
        assert_eq!(state, FetchState::Ready("mock"));

        let mut empty: FetchState<&str> = FetchState::Loading { previous: None };
        empty.fail("boom");
        empty.dismiss();
        assert_eq!(empty.error(), Some("boom"));
    }
}
