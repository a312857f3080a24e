//! Global Application State
//!
//! The core controller plus the signals it renders into.

use std::rc::Rc;

use accountdash::modal::EditModal;
use accountdash::{
    AccountApp, AccountClient, Alert, ApiClient, LogsView, Panel, ProfileView, StatsView, Ui,
    ViewState, ALERT_TIMEOUT_MS,
};
use leptos::*;

use crate::api::{get_api_base, GlooTransport};
use crate::state::storage::LocalStorageStore;

pub type DashApp = AccountApp<GlooTransport, LocalStorageStore, SignalUi>;

/// Rendering target: one signal per panel
#[derive(Clone, Copy)]
pub struct SignalUi {
    /// Visible alerts, newest first, tagged with an id for dismissal
    pub alerts: RwSignal<Vec<(u64, Alert)>>,
    next_alert_id: StoredValue<u64>,
    pub view: RwSignal<ViewState>,
    pub profile: RwSignal<Panel<ProfileView>>,
    pub stats: RwSignal<Panel<StatsView>>,
    pub logs: RwSignal<Panel<LogsView>>,
    pub modal: RwSignal<EditModal>,
}

impl SignalUi {
    pub fn new() -> Self {
        Self {
            alerts: create_rw_signal(Vec::new()),
            next_alert_id: store_value(0),
            view: create_rw_signal(ViewState::new()),
            profile: create_rw_signal(Panel::Loading),
            stats: create_rw_signal(Panel::Loading),
            logs: create_rw_signal(Panel::Loading),
            modal: create_rw_signal(EditModal::new()),
        }
    }

    /// Show an alert and return its id
    pub fn push_alert(&self, alert: Alert) -> u64 {
        let id = self.next_alert_id.get_value();
        self.next_alert_id.set_value(id + 1);
        self.alerts.update(|alerts| alerts.insert(0, (id, alert)));
        id
    }

    pub fn dismiss_alert(&self, id: u64) {
        self.alerts.update(|alerts| alerts.retain(|(i, _)| *i != id));
    }
}

impl Ui for SignalUi {
    fn alert(&self, alert: Alert) {
        let id = self.push_alert(alert);

        let ui = *self;
        gloo_timers::callback::Timeout::new(ALERT_TIMEOUT_MS, move || {
            ui.dismiss_alert(id);
        })
        .forget();
    }

    fn show_view(&self, view: &ViewState) {
        self.view.set(*view);
    }

    fn render_profile(&self, panel: &Panel<ProfileView>) {
        self.profile.set(panel.clone());
    }

    fn render_stats(&self, panel: &Panel<StatsView>) {
        self.stats.set(panel.clone());
    }

    fn render_logs(&self, panel: &Panel<LogsView>) {
        self.logs.set(panel.clone());
    }

    fn render_modal(&self, modal: &EditModal) {
        self.modal.set(modal.clone());
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub app: Rc<DashApp>,
}

impl GlobalState {
    pub fn ui(&self) -> SignalUi {
        *self.app.ui()
    }

    /// Run a controller operation on the browser event loop
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<DashApp>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        spawn_local(op(self.app.clone()));
    }
}

/// Build the controller and provide it to the component tree
pub fn provide_global_state() -> GlobalState {
    let api = ApiClient::new(&get_api_base(), GlooTransport);
    let client = AccountClient::new(api, LocalStorageStore);
    let state = GlobalState {
        app: Rc::new(AccountApp::new(client, SignalUi::new())),
    };

    provide_context(state.clone());
    state
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use accountdash::Section;

    #[test]
    fn test_alerts_newest_first_and_dismissed_by_id() {
        let runtime = create_runtime();
        let ui = SignalUi::new();

        let first = ui.push_alert(Alert::info("one"));
        let second = ui.push_alert(Alert::error("two"));
        let messages: Vec<String> = ui
            .alerts
            .get_untracked()
            .into_iter()
            .map(|(_, a)| a.message)
            .collect();
        assert_eq!(messages, vec!["two", "one"]);

        ui.dismiss_alert(first);
        assert_eq!(ui.alerts.get_untracked().len(), 1);
        assert_eq!(ui.alerts.get_untracked()[0].0, second);

        runtime.dispose();
    }

    #[test]
    fn test_renders_land_in_signals() {
        let runtime = create_runtime();
        let ui = SignalUi::new();

        let mut view = ViewState::new();
        view.show_dashboard();
        ui.show_view(&view);
        ui.render_logs(&Panel::Ready(LogsView::Empty));
        ui.render_stats(&Panel::Failed);

        assert!(ui.view.get_untracked().is_visible(Section::Dashboard));
        assert_eq!(ui.logs.get_untracked(), Panel::Ready(LogsView::Empty));
        assert!(ui.stats.get_untracked().is_failed());

        runtime.dispose();
    }
}
