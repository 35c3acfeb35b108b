#[cfg(test)]
#[path = "reaction_test.rs"]
mod reaction_test;

/// Per-card reaction state: two independent counters plus two flags that are
/// never simultaneously true.
///
/// Initialized from the answer's server-side totals when the card mounts and
/// discarded with the card. Toggles mutate the counters locally and report
/// which counters changed so the card can send one PATCH per counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReactionState {
    pub likes: i64,
    pub dislikes: i64,
    pub is_liked: bool,
    pub is_disliked: bool,
}

/// New absolute totals for the counters a toggle changed. `None` means the
/// counter did not change and no request should be sent for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterUpdate {
    pub likes: Option<i64>,
    pub dislikes: Option<i64>,
}

impl ReactionState {
    /// Initial state from an answer's server-side totals.
    #[must_use]
    pub fn from_totals(likes: i64, dislikes: i64) -> Self {
        Self { likes, dislikes, is_liked: false, is_disliked: false }
    }

    /// Toggle the like reaction. Liking while disliked first clears the
    /// dislike as its own counter change.
    pub fn toggle_like(&mut self) -> CounterUpdate {
        let mut update = CounterUpdate::default();
        if self.is_disliked {
            self.dislikes -= 1;
            self.is_disliked = false;
            update.dislikes = Some(self.dislikes);
        }
        if self.is_liked {
            self.likes -= 1;
            self.is_liked = false;
        } else {
            self.likes += 1;
            self.is_liked = true;
        }
        update.likes = Some(self.likes);
        update
    }

    /// Toggle the dislike reaction. Disliking while liked first clears the
    /// like as its own counter change.
    pub fn toggle_dislike(&mut self) -> CounterUpdate {
        let mut update = CounterUpdate::default();
        if self.is_liked {
            self.likes -= 1;
            self.is_liked = false;
            update.likes = Some(self.likes);
        }
        if self.is_disliked {
            self.dislikes -= 1;
            self.is_disliked = false;
        } else {
            self.dislikes += 1;
            self.is_disliked = true;
        }
        update.dislikes = Some(self.dislikes);
        update
    }
}
