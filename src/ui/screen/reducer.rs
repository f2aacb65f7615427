use crate::ui::mvi::Reducer;

use super::intent::ScreenIntent;
use super::state::{Pending, ScreenState, Work};

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::Mount => ScreenState::Loading {
                pending: Pending::all(),
                queued: None,
            },
            ScreenIntent::Settled(work) => match state {
                ScreenState::Loading { pending, queued } => {
                    let pending = pending.with(work, false);
                    if !pending.is_settled() {
                        return ScreenState::Loading { pending, queued };
                    }
                    match queued {
                        Some(banner) => ScreenState::Message(banner),
                        None => ScreenState::Content,
                    }
                }
                other => other,
            },
            ScreenIntent::Raise(banner) => match state {
                ScreenState::Loading { pending, .. } => ScreenState::Loading {
                    pending,
                    queued: Some(banner),
                },
                _ => ScreenState::Message(banner),
            },
            ScreenIntent::Dismiss => match state {
                ScreenState::Message(_) => ScreenState::Loading {
                    pending: Pending::only(Work::Items),
                    queued: None,
                },
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screen::state::Banner;

    fn reduce_all(intents: Vec<ScreenIntent>) -> ScreenState {
        intents
            .into_iter()
            .fold(ScreenState::default(), ScreenReducer::reduce)
    }

    #[test]
    fn content_after_both_settle() {
        let state = reduce_all(vec![
            ScreenIntent::Mount,
            ScreenIntent::Settled(Work::Session),
        ]);
        assert!(state.is_loading());

        let state = ScreenReducer::reduce(state, ScreenIntent::Settled(Work::Items));
        assert_eq!(state, ScreenState::Content);
    }

    #[test]
    fn banner_during_loading_waits_for_all_work() {
        let state = reduce_all(vec![
            ScreenIntent::Mount,
            ScreenIntent::Raise(Banner::Error("offline".into())),
            ScreenIntent::Settled(Work::Items),
        ]);
        assert!(state.is_loading());

        let state = ScreenReducer::reduce(state, ScreenIntent::Settled(Work::Session));
        assert_eq!(state, ScreenState::Message(Banner::Error("offline".into())));
    }

    #[test]
    fn latest_queued_banner_wins() {
        let state = reduce_all(vec![
            ScreenIntent::Mount,
            ScreenIntent::Raise(Banner::Error("first".into())),
            ScreenIntent::Raise(Banner::Confirmation("second".into())),
            ScreenIntent::Settled(Work::Items),
            ScreenIntent::Settled(Work::Session),
        ]);
        assert_eq!(
            state,
            ScreenState::Message(Banner::Confirmation("second".into()))
        );
    }

    #[test]
    fn raise_on_content_shows_immediately() {
        let state = ScreenReducer::reduce(
            ScreenState::Content,
            ScreenIntent::Raise(Banner::Confirmation("Customer was successfully added!".into())),
        );
        assert_eq!(
            state.banner().map(ToString::to_string).as_deref(),
            Some("Confirmation: Customer was successfully added!")
        );
    }

    #[test]
    fn dismiss_refetches_items() {
        let state = ScreenReducer::reduce(
            ScreenState::Message(Banner::Error("x".into())),
            ScreenIntent::Dismiss,
        );
        assert_eq!(
            state,
            ScreenState::Loading {
                pending: Pending::only(Work::Items),
                queued: None,
            }
        );
        let state = ScreenReducer::reduce(state, ScreenIntent::Settled(Work::Items));
        assert_eq!(state, ScreenState::Content);
    }

    #[test]
    fn stray_settle_and_dismiss_are_ignored() {
        assert_eq!(
            ScreenReducer::reduce(ScreenState::Content, ScreenIntent::Settled(Work::Items)),
            ScreenState::Content
        );
        assert_eq!(
            ScreenReducer::reduce(ScreenState::Content, ScreenIntent::Dismiss),
            ScreenState::Content
        );
    }
}
