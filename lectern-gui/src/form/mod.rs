//! Local state of an editable form and its submission lifecycle.
//!
//! A [`FormState`] owns the draft being edited, applies per-field changes,
//! accepts an external seed at most once and tracks whether a submission is
//! in flight. Screens own one per open form and drop it on teardown.

mod submission;

pub use submission::{Outcome, SubmitPhase, Ticket};

/// An in-progress record whose fields are addressed by a closed enum.
pub trait Draft: Clone {
    type Field: Copy + std::fmt::Debug;

    /// Replaces one field, values are kept as typed.
    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Debug, Clone)]
pub struct FormState<D> {
    draft: D,
    seeded: bool,
    dirty: bool,
    phase: SubmitPhase,
}

impl<D: Draft + Default> Default for FormState<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Draft> FormState<D> {
    pub fn new(defaults: D) -> Self {
        Self {
            draft: defaults,
            seeded: false,
            dirty: false,
            phase: SubmitPhase::Idle,
        }
    }

    /// Builds the form and applies `seed` right away if there is one.
    pub fn with_seed(defaults: D, seed: Option<D>) -> Self {
        let mut form = Self::new(defaults);
        if let Some(seed) = seed {
            form.seed(seed);
        }
        form
    }

    /// Overwrites the draft with `seed`.
    ///
    /// Only the first seed is applied, and only if the user has not edited
    /// the form yet. Returns whether the draft was replaced.
    pub fn seed(&mut self, seed: D) -> bool {
        if self.seeded || self.dirty {
            return false;
        }
        self.draft = seed;
        self.seeded = true;
        true
    }

    pub fn on_change(&mut self, field: D::Field, value: String) {
        self.draft.set(field, value);
        self.dirty = true;
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting(_))
    }

    /// Enters the submitting phase. Returns `None` if a submission is already
    /// in flight, in which case nothing must be sent.
    pub fn begin_submit(&mut self) -> Option<Ticket> {
        match self.phase {
            SubmitPhase::Submitting(_) => None,
            SubmitPhase::Idle => {
                let ticket = Ticket::next();
                self.phase = SubmitPhase::Submitting(ticket);
                Some(ticket)
            }
        }
    }

    /// Returns to idle if `ticket` is the submission in flight.
    ///
    /// Returns `false` for a stale ticket, whose outcome must be discarded.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.phase == SubmitPhase::Submitting(ticket) {
            self.phase = SubmitPhase::Idle;
            true
        } else {
            false
        }
    }
}
