use super::*;

// =============================================================
// Like toggle alternation
// =============================================================

#[test]
fn like_turns_on_then_off() {
    let mut state = ReactionState::from_totals(5, 2);

    let update = state.toggle_like();
    assert!(state.is_liked);
    assert_eq!(state.likes, 6);
    assert_eq!(update, CounterUpdate { likes: Some(6), dislikes: None });

    let update = state.toggle_like();
    assert!(!state.is_liked);
    assert_eq!(state.likes, 5);
    assert_eq!(update, CounterUpdate { likes: Some(5), dislikes: None });
}

#[test]
fn repeated_like_clicks_alternate_with_zero_net_change() {
    let mut state = ReactionState::from_totals(10, 0);
    for round in 0..4 {
        state.toggle_like();
        assert!(state.is_liked, "round {round}: on");
        state.toggle_like();
        assert!(!state.is_liked, "round {round}: off");
    }
    assert_eq!(state.likes, 10);
}

// =============================================================
// Mutual exclusion
// =============================================================

#[test]
fn flags_never_both_true() {
    let mut state = ReactionState::from_totals(0, 0);
    // Every interleaving of 6 alternating clicks.
    for i in 0..6 {
        if i % 2 == 0 {
            state.toggle_like();
        } else {
            state.toggle_dislike();
        }
        assert!(!(state.is_liked && state.is_disliked), "after click {i}");
    }
}

#[test]
fn dislike_while_liked_moves_both_counters() {
    let mut state = ReactionState::from_totals(5, 2);
    state.toggle_like();
    assert_eq!(state.likes, 6);

    let update = state.toggle_dislike();
    assert!(!state.is_liked);
    assert!(state.is_disliked);
    assert_eq!(state.likes, 5);
    assert_eq!(state.dislikes, 3);
    // Both counters changed: one independent request each.
    assert_eq!(update, CounterUpdate { likes: Some(5), dislikes: Some(3) });
}

#[test]
fn like_while_disliked_moves_both_counters() {
    let mut state = ReactionState::from_totals(0, 1);
    state.toggle_dislike();
    assert_eq!(state.dislikes, 2);

    let update = state.toggle_like();
    assert!(state.is_liked);
    assert!(!state.is_disliked);
    assert_eq!(state.likes, 1);
    assert_eq!(state.dislikes, 1);
    assert_eq!(update, CounterUpdate { likes: Some(1), dislikes: Some(1) });
}

// =============================================================
// Plain toggles touch only their own counter
// =============================================================

#[test]
fn plain_like_does_not_touch_dislikes() {
    let mut state = ReactionState::from_totals(5, 2);
    let update = state.toggle_like();
    assert_eq!(update.dislikes, None);
    assert_eq!(state.dislikes, 2);
}

#[test]
fn plain_dislike_does_not_touch_likes() {
    let mut state = ReactionState::from_totals(5, 2);
    let update = state.toggle_dislike();
    assert_eq!(update.likes, None);
    assert_eq!(state.likes, 5);
}
