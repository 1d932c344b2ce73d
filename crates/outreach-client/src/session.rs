use std::sync::Arc;

use outreach_core::ClientBrief;
use tokio::sync::watch;

/// The brief the user is currently working with.
///
/// Clones share one store. Writers go through [`ActiveBrief::set`] and
/// [`ActiveBrief::clear`]; readers take a snapshot with
/// [`ActiveBrief::current`] or follow changes via [`ActiveBrief::subscribe`].
#[derive(Debug, Clone)]
pub struct ActiveBrief {
    tx: Arc<watch::Sender<Option<ClientBrief>>>,
}

impl Default for ActiveBrief {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveBrief {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, brief: ClientBrief) {
        tracing::info!(brief_id = brief.id, name = %brief.name, kind = %brief.kind, "active brief updated");
        self.tx.send_replace(Some(brief));
    }

    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    #[must_use]
    pub fn current(&self) -> Option<ClientBrief> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<ClientBrief>> {
        self.tx.subscribe()
    }
}
