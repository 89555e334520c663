//! Property-based tests for session operations.
//!
//! For any sequence of open/close/focus operations, the active index must
//! be a valid index whenever the session is non-empty, and `active_tab()`
//! must report `NoActiveTab` exactly when the session is empty.

use cinder_engine::mock::RecordingEngine;
use cinder_engine::HOME_URL;
use cinder_tabs::{Session, Tab, TabError};
use proptest::prelude::*;

/// Operations that can be performed on a session.
#[derive(Debug, Clone)]
enum SessionOp {
    Open,
    Close(usize),     // index into the current tab list
    SetActive(usize), // index into the current tab list
}

/// Biased toward opens so sequences keep interesting state.
fn arb_session_ops() -> impl Strategy<Value = Vec<SessionOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(SessionOp::Open),
            2 => (0..20usize).prop_map(SessionOp::Close),
            2 => (0..20usize).prop_map(SessionOp::SetActive),
        ],
        1..60,
    )
}

fn home_tab() -> Tab {
    Tab::create(HOME_URL, Box::new(RecordingEngine::new()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn active_index_is_valid_whenever_nonempty(ops in arb_session_ops()) {
        let mut session = Session::new(home_tab());
        let mut expected_count = 1usize;

        for op in &ops {
            match op {
                SessionOp::Open => {
                    session.push(home_tab());
                    expected_count += 1;
                }
                SessionOp::Close(pick) => {
                    let ids = session.ids();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[pick % ids.len()];
                    session.close(id).unwrap();
                    expected_count -= 1;
                }
                SessionOp::SetActive(pick) => {
                    let ids = session.ids();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[pick % ids.len()];
                    session.set_active(id).unwrap();
                    prop_assert_eq!(session.active_tab().unwrap().id(), id);
                }
            }

            prop_assert_eq!(session.len(), expected_count);

            if session.is_empty() {
                prop_assert_eq!(session.active_index(), None);
                prop_assert!(matches!(session.active_tab(), Err(TabError::NoActiveTab)));
            } else {
                let index = session.active_index().expect("non-empty session has a focus");
                prop_assert!(index < session.len(), "active index {} out of {}", index, session.len());
                // The focused tab is reachable through both views.
                let focused = session.active_tab().unwrap().id();
                prop_assert_eq!(session.ids()[index], focused);
            }
        }
    }
}
