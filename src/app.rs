//! Application State
//!
//! `App` holds everything the render loop needs: the store handle, the
//! capability and configuration flags resolved at startup, the transient
//! UI state (menu, selection, toast), and the in-flight export reply slot.
//!
//! All presentation decisions are recomputed per pass from pure functions
//! in `crate::logic`; nothing here caches a decision across frames.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

use crate::config::Config;
use crate::logic::action_menu::{build_action_menu, ActionMenuPlan, MenuAction};
use crate::logic::platform::PlatformCapability;
use crate::model::{LogLevel, LogMessage, SearchCriteria};
use crate::services::ExportRequest;
use crate::store::{LoggerStore, ShareItems};
use crate::ExportMode;

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_millis(2500);

pub struct App {
    pub store: Arc<Mutex<LoggerStore>>,
    pub config: Config,
    pub capability: PlatformCapability,

    /// Scope the view to the current session
    pub session_only: bool,

    /// Quick filter: only errors and above (makes the criteria non-default)
    pub errors_only: bool,

    /// Selected row in the message list
    pub selected: Option<usize>,

    /// Open action menu: index of the highlighted entry
    pub menu_selected: Option<usize>,

    /// Reply slot of the in-flight export, if any
    pending_export: Option<oneshot::Receiver<Option<ShareItems>>>,

    /// Most recently produced share payload
    pub last_share: Option<ShareItems>,

    toast: Option<(String, Instant)>,

    pub should_quit: bool,

    export_tx: mpsc::UnboundedSender<ExportRequest>,
}

impl App {
    pub fn new(
        store: Arc<Mutex<LoggerStore>>,
        config: Config,
        capability: PlatformCapability,
        export_tx: mpsc::UnboundedSender<ExportRequest>,
    ) -> Self {
        let session_only = config.current_session_only;
        Self {
            store,
            config,
            capability,
            session_only,
            errors_only: false,
            selected: None,
            menu_selected: None,
            pending_export: None,
            last_share: None,
            toast: None,
            should_quit: false,
            export_tx,
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, LoggerStore> {
        match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Snapshot of the active search criteria for this evaluation
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            is_default: !self.errors_only,
            is_current_session_only: self.session_only,
        }
    }

    /// Messages visible under the current criteria, oldest first
    pub fn visible_messages(&self) -> Vec<LogMessage> {
        let criteria = self.criteria();
        let mut messages = self.lock_store().visible(&criteria);
        if self.errors_only {
            messages.retain(|m| m.level >= LogLevel::Error);
        }
        messages
    }

    pub fn message_count(&self) -> usize {
        self.visible_messages().len()
    }

    pub fn session(&self) -> u64 {
        self.lock_store().session()
    }

    /// Plan the toolbar actions for this pass
    pub fn menu_plan(&self) -> ActionMenuPlan {
        build_action_menu(
            self.capability,
            self.config.is_store_sharing_enabled,
            self.message_count(),
        )
    }

    // ----- action menu -----

    pub fn open_menu(&mut self) {
        if self.capability.supports_menu_affordance {
            self.menu_selected = Some(0);
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_selected = None;
    }

    pub fn menu_next(&mut self) {
        let len = self.menu_plan().entries().len();
        if let (Some(selected), true) = (self.menu_selected, len > 0) {
            self.menu_selected = Some((selected + 1) % len);
        }
    }

    pub fn menu_prev(&mut self) {
        let len = self.menu_plan().entries().len();
        if let (Some(selected), true) = (self.menu_selected, len > 0) {
            self.menu_selected = Some((selected + len - 1) % len);
        }
    }

    /// Execute the highlighted menu entry and close the menu
    ///
    /// Disabled entries are inert: the menu stays open and nothing runs.
    pub fn execute_menu_selection(&mut self) {
        let Some(index) = self.menu_selected else {
            return;
        };
        let plan = self.menu_plan();
        let Some(entry) = plan.entries().get(index).copied().copied() else {
            return;
        };
        if !entry.enabled {
            return;
        }
        self.close_menu();
        self.execute(entry.action);
    }

    /// Run the direct share action on terminals without a menu affordance
    pub fn direct_share(&mut self) {
        if let ActionMenuPlan::DirectShare { entry } = self.menu_plan() {
            self.execute(entry.action);
        }
    }

    fn execute(&mut self, action: MenuAction) {
        match action {
            MenuAction::ShareAsDocument => self.request_export(ExportMode::Document),
            MenuAction::ShareAsText => self.request_export(ExportMode::Text),
            MenuAction::RemoveAll => {
                self.lock_store().remove_all();
                self.selected = None;
                self.show_toast("Removed all messages");
            }
        }
    }

    // ----- export -----

    /// Hand the selected export mode through to the store collaborator
    ///
    /// At most one export is in flight; further requests are ignored until
    /// its reply arrives. Nothing extra is rendered while it is pending.
    fn request_export(&mut self, mode: ExportMode) {
        if self.pending_export.is_some() {
            return;
        }
        let (reply_tx, reply_rx) = oneshot::channel();
        if self
            .export_tx
            .send(ExportRequest {
                mode,
                reply: reply_tx,
            })
            .is_ok()
        {
            self.pending_export = Some(reply_rx);
        }
    }

    /// Poll the in-flight export reply slot, if any
    ///
    /// A payload becomes the presented share result; "no payload" (failure
    /// or cancellation upstream, indistinguishable here) leaves the view
    /// untouched.
    pub fn poll_export(&mut self) {
        use tokio::sync::oneshot::error::TryRecvError;

        let Some(rx) = self.pending_export.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(Some(items)) => {
                self.pending_export = None;
                self.show_toast(&format!(
                    "Exported {} to {}",
                    items.mode.as_str(),
                    items.path.display()
                ));
                self.last_share = Some(items);
            }
            Ok(None) => {
                self.pending_export = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending_export = None;
            }
        }
    }

    // ----- filters -----

    pub fn toggle_session_only(&mut self) {
        self.session_only = !self.session_only;
        self.selected = None;
    }

    pub fn toggle_errors_only(&mut self) {
        self.errors_only = !self.errors_only;
        self.selected = None;
    }

    // ----- list selection -----

    pub fn select_next(&mut self) {
        let count = self.message_count();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.message_count() == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    // ----- toast -----

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some((message.to_string(), Instant::now()));
    }

    /// Current toast text, expiring stale ones
    pub fn active_toast(&mut self) -> Option<String> {
        match &self.toast {
            Some((message, shown_at)) if shown_at.elapsed() < TOAST_DURATION => {
                Some(message.clone())
            }
            Some(_) => {
                self.toast = None;
                None
            }
            None => None,
        }
    }
}
