//! Export Worker Service
//!
//! Serves share requests from the UI over a request channel. Each request
//! carries its own one-shot reply slot, so a pending export is represented
//! by the in-flight receiver alone; there is no shared "currently sharing"
//! flag to get out of sync with the UI.
//!
//! The worker owns a handle to the store and performs the file I/O off the
//! render loop. Any failure is reported to the UI as "no payload" — from
//! the console's point of view a failed export and a cancelled one look
//! the same.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

use crate::store::{LoggerStore, ShareItems};
use crate::ExportMode;

/// A single export request with its reply slot
#[derive(Debug)]
pub struct ExportRequest {
    /// Which form to export; passed through to the store unchanged
    pub mode: ExportMode,

    /// Delivers zero-or-one payload back to the requester
    pub reply: oneshot::Sender<Option<ShareItems>>,
}

/// Spawn the export worker and return the request channel
pub fn spawn_export_worker(
    store: Arc<Mutex<LoggerStore>>,
    export_dir: PathBuf,
) -> mpsc::UnboundedSender<ExportRequest> {
    let (tx, mut rx) = mpsc::unbounded_channel::<ExportRequest>();

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let store = Arc::clone(&store);
            let dir = export_dir.clone();
            let mode = request.mode;

            // File I/O happens on the blocking pool; the store lock is held
            // only for the duration of one export.
            let payload = tokio::task::spawn_blocking(move || {
                let guard = match store.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                guard.export(mode, &dir).ok()
            })
            .await
            .ok()
            .flatten();

            // Requester may have given up; a dropped receiver is not an error
            let _ = request.reply.send(payload);
        }
    });

    tx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogLevel;

    #[tokio::test]
    async fn test_export_request_round_trip() {
        let mut inner = LoggerStore::new(1);
        inner.insert(LogLevel::Info, "test", "one message");
        let store = Arc::new(Mutex::new(inner));

        let dir = std::env::temp_dir().join("logtui-export-service-test");
        let tx = spawn_export_worker(Arc::clone(&store), dir);

        let (reply_tx, reply_rx) = oneshot::channel();
        tx.send(ExportRequest {
            mode: ExportMode::Text,
            reply: reply_tx,
        })
        .unwrap();

        let payload = reply_rx.await.unwrap().expect("payload produced");
        assert_eq!(payload.mode, ExportMode::Text);
        assert!(payload.size > 0);
        assert!(payload.path.exists());

        let _ = std::fs::remove_file(&payload.path);
    }

    #[tokio::test]
    async fn test_failed_export_reports_no_payload() {
        let store = Arc::new(Mutex::new(LoggerStore::new(1)));

        // A path that cannot be created forces the export to fail
        let dir = PathBuf::from("/dev/null/not-a-directory");
        let tx = spawn_export_worker(store, dir);

        let (reply_tx, reply_rx) = oneshot::channel();
        tx.send(ExportRequest {
            mode: ExportMode::Document,
            reply: reply_tx,
        })
        .unwrap();

        assert!(reply_rx.await.unwrap().is_none());
    }
}
