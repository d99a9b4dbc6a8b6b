//! # Region Content Store
//!
//! Authoritative content for one region (or one page body) and the echo
//! suppression between that content and the surface that renders it.
//!
//! ## Echo suppression
//!
//! ```text
//! surface edit ──► record_emitted(x) ──► document model
//!                        │                    │
//!                  last_emitted = x      model changes
//!                                             │
//!                  reconcile(x) ◄─────────────┘
//!                  x == last_emitted → nothing pushed
//! ```
//!
//! Pushing an edit back into the surface that produced it would reset the
//! cursor and interrupt in-progress gestures, so `reconcile` only replaces
//! surface content that actually differs.

use crate::EditingSurface;

/// What `reconcile` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Incoming content is what the surface itself last emitted
    Echo,

    /// The surface already renders the incoming content
    AlreadyRendered,

    /// No surface attached; content stored for when one appears
    Detached,

    /// Surface content replaced with change events suppressed
    Replaced,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionContentStore {
    content: String,
    last_emitted: Option<String>,
}

impl RegionContentStore {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            last_emitted: None,
        }
    }

    /// Current authoritative content
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    /// The surface reported a local change
    ///
    /// Returns `true` when the authoritative content changed and the owning
    /// model should be told.
    pub fn record_emitted(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        let changed = content != self.content;
        self.last_emitted = Some(content.clone());
        self.content = content;
        changed
    }

    /// Adopt content from the model and push it into the surface if needed
    pub fn reconcile(
        &mut self,
        incoming: &str,
        surface: Option<&mut dyn EditingSurface>,
    ) -> SyncOutcome {
        if self.last_emitted.as_deref() == Some(incoming) {
            self.content = incoming.to_string();
            return SyncOutcome::Echo;
        }

        self.content = incoming.to_string();

        let Some(surface) = surface else {
            return SyncOutcome::Detached;
        };

        if surface.content() == incoming {
            return SyncOutcome::AlreadyRendered;
        }

        surface.set_content(incoming, true);
        // The surface now shows external content; a later edit back to the
        // old emitted value must not be mistaken for an echo.
        self.last_emitted = None;
        tracing::debug!(bytes = incoming.len(), "replaced surface content");
        SyncOutcome::Replaced
    }

    /// Bring a newly attached surface up to date with the stored content
    pub fn attach(&mut self, surface: &mut dyn EditingSurface) -> SyncOutcome {
        self.last_emitted = None;
        let content = self.content.clone();
        self.reconcile(&content, Some(surface))
    }
}
