use smol::channel::{self, Receiver, Sender, TryRecvError};

use pocket_shared::{ObserverKey, TerminalSnapshot};

use super::{RecvError, SendError, SnapshotSender};

pub struct SnapshotChannel;

impl SnapshotChannel {
    pub fn unbounded() -> (Box<dyn SnapshotSender>, SnapshotReceiver) {
        let (snapshot_sender, snapshot_receiver) = channel::unbounded();
        let snapshot_receiver = SnapshotReceiver::new(snapshot_receiver);
        (Box::new(snapshot_sender), snapshot_receiver)
    }
}

impl SnapshotSender for Sender<(ObserverKey, TerminalSnapshot)> {
    fn send(&self, observer: &ObserverKey, snapshot: &TerminalSnapshot) -> Result<(), SendError> {
        self.try_send((*observer, snapshot.clone()))
            .map_err(|_| SendError)
    }
}

/// Draining end of a [`SnapshotChannel`], owned by whatever writes packets
/// to the wire
#[derive(Clone)]
pub struct SnapshotReceiver {
    receiver: Receiver<(ObserverKey, TerminalSnapshot)>,
}

impl SnapshotReceiver {
    fn new(receiver: Receiver<(ObserverKey, TerminalSnapshot)>) -> Self {
        Self { receiver }
    }

    /// Receives the next queued snapshot, if any
    pub fn receive(&mut self) -> Result<Option<(ObserverKey, TerminalSnapshot)>, RecvError> {
        match self.receiver.try_recv() {
            Ok(entry) => Ok(Some(entry)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(_) => Err(RecvError),
        }
    }

    /// Waits for the next snapshot
    pub async fn recv(&self) -> Result<(ObserverKey, TerminalSnapshot), RecvError> {
        self.receiver.recv().await.map_err(|_| RecvError)
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
