//! Modal overlay state machine.
//!
//! ```text
//!            open_for            close              finish_close(ticket)
//!   Closed ───────────▶ Open ───────────▶ Closing ─────────────────────▶ Closed
//!                        ▲                   │
//!                        └──── open_for ─────┘
//! ```
//!
//! Closing hides the modal right away but keeps its content until the close
//! transition has played out. The caller schedules [`ModalController::finish_close`]
//! with the [`ClearTicket`] returned by [`ModalController::close`]; a ticket
//! from before a reopen no longer matches and clears nothing.

use crate::view::ModalContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Proof of a particular close, redeemed once the transition ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the content is only cleared when the ticket is passed to finish_close"]
pub struct ClearTicket(u64);

/// The single modal of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalController {
    phase: ModalPhase,
    content: Option<ModalContent>,
    /// Bumped on every open; tickets carry the value at close time.
    generation: u64,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Shown to the user; background scrolling is suppressed and Escape
    /// closes it.
    pub fn is_visible(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// The modal element exists once anything was ever opened.
    pub fn is_created(&self) -> bool {
        self.generation > 0
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Show `content`, replacing whatever was shown or still fading out.
    pub fn open_for(&mut self, content: ModalContent) {
        tracing::debug!(entry = %content.id, from = ?self.phase, "Opening modal");
        self.content = Some(content);
        self.phase = ModalPhase::Open;
        self.generation += 1;
    }

    /// Hide the modal and hand out the ticket for the deferred clear.
    ///
    /// Returns `None` when the modal is not open.
    pub fn close(&mut self) -> Option<ClearTicket> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        self.phase = ModalPhase::Closing;
        Some(ClearTicket(self.generation))
    }

    /// Clear the content if the modal is still closing from the close that
    /// produced `ticket`. Returns whether anything was cleared.
    pub fn finish_close(&mut self, ticket: ClearTicket) -> bool {
        if self.phase != ModalPhase::Closing || ticket.0 != self.generation {
            tracing::debug!(phase = ?self.phase, "Skipping stale modal clear");
            return false;
        }
        self.phase = ModalPhase::Closed;
        self.content = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryId, EntryKind};

    fn content(id: u64) -> ModalContent {
        ModalContent {
            id: EntryId::from(id),
            kind: EntryKind::Video,
            title: format!("title {id}"),
            description: String::new(),
            embed_url: format!("https://streamable.com/e/{id}"),
        }
    }

    #[test]
    fn test_lazily_created() {
        let mut modal = ModalController::new();
        assert!(!modal.is_created());
        assert!(modal.close().is_none());

        modal.open_for(content(1));
        assert!(modal.is_created());
        assert!(modal.is_visible());
    }

    #[test]
    fn test_full_cycle() {
        let mut modal = ModalController::new();
        modal.open_for(content(1));

        let ticket = modal.close().unwrap();
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(!modal.is_visible());
        assert!(modal.content().is_some(), "content survives the transition");

        assert!(modal.finish_close(ticket));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(modal.content().is_none());
        assert!(modal.is_created());
    }

    #[test]
    fn test_open_replaces_content() {
        let mut modal = ModalController::new();
        modal.open_for(content(1));
        modal.open_for(content(2));
        assert_eq!(modal.content().unwrap().id, EntryId::from(2u64));
        assert!(modal.is_visible());
    }

    #[test]
    fn test_reopen_during_close_survives_stale_clear() {
        let mut modal = ModalController::new();
        modal.open_for(content(1));
        let ticket = modal.close().unwrap();

        modal.open_for(content(2));
        assert!(!modal.finish_close(ticket));
        assert!(modal.is_visible());
        assert_eq!(modal.content().unwrap().id, EntryId::from(2u64));
    }

    #[test]
    fn test_stale_ticket_after_reopen_and_second_close() {
        let mut modal = ModalController::new();
        modal.open_for(content(1));
        let first = modal.close().unwrap();
        modal.open_for(content(2));
        let second = modal.close().unwrap();

        assert!(!modal.finish_close(first));
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(modal.finish_close(second));
        assert!(modal.content().is_none());
    }

    #[test]
    fn test_double_close_is_noop() {
        let mut modal = ModalController::new();
        modal.open_for(content(1));
        let _ticket = modal.close().unwrap();
        assert!(modal.close().is_none());
    }
}
