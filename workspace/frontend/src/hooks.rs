use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::api_client::{forecast, risk_index};
use crate::common::toast::ToastContext;
use crate::presenter::failure_notice;
use crate::settings;
use crate::state::{Commit, DashboardStore, OperationKind, SelectionAction};

/// Bumped after every store mutation so context consumers re-render.
#[derive(Debug, Default, PartialEq)]
pub struct Revision(u64);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

/// Handle to the app-wide dashboard store.
///
/// Every mutation runs synchronously on the event loop, so the
/// token check and commit of a finished request can never interleave with
/// a newer trigger.
#[derive(Clone)]
pub struct DashboardHandle {
    store: Rc<RefCell<DashboardStore>>,
    revision: u64,
    redraw: UseReducerDispatcher<Revision>,
    toast: Option<ToastContext>,
}

impl PartialEq for DashboardHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.revision == other.revision
    }
}

impl DashboardHandle {
    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> DashboardStore {
        self.store.borrow().clone()
    }

    pub fn select_country(&self, country: String) {
        log::debug!("Country selected: {:?}", country);
        self.apply(SelectionAction::SetCountry(country));
    }

    pub fn select_company(&self, company: String) {
        log::debug!("Company selected: {:?}", company);
        self.apply(SelectionAction::SetCompany(company));
    }

    /// Returns `false` when the input was rejected and the day count kept.
    pub fn set_days(&self, raw: String) -> bool {
        self.apply(SelectionAction::SetDays(raw))
    }

    fn apply(&self, action: SelectionAction) -> bool {
        let accepted = self.store.borrow_mut().apply(action);
        self.redraw.dispatch(());
        accepted
    }

    pub fn trigger_forecast(&self) {
        let triggered = self.store.borrow_mut().trigger_forecast();
        let call = match triggered {
            Ok(call) => call,
            Err(err) => {
                self.warn(err.to_string());
                return;
            }
        };
        self.redraw.dispatch(());

        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = forecast::request_forecast(&call.request).await;
            let failure = outcome.as_ref().err().map(ToString::to_string);
            let commit = handle
                .store
                .borrow_mut()
                .complete_forecast(call.ticket, outcome, now());
            handle.finish(OperationKind::Forecast, commit, failure);
        });
    }

    pub fn trigger_risk_index(&self) {
        let triggered = self.store.borrow_mut().trigger_risk_index();
        let call = match triggered {
            Ok(call) => call,
            Err(err) => {
                self.warn(err.to_string());
                return;
            }
        };
        self.redraw.dispatch(());

        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = risk_index::request_risk_index(&call.company).await;
            let failure = outcome.as_ref().err().map(ToString::to_string);
            let commit = handle
                .store
                .borrow_mut()
                .complete_risk_index(call.ticket, outcome, now());
            handle.finish(OperationKind::RiskIndex, commit, failure);
        });
    }

    fn finish(&self, kind: OperationKind, commit: Commit, failure: Option<String>) {
        if commit == Commit::Discarded {
            return;
        }
        if let Some(message) = failure {
            match &self.toast {
                Some(toast) => toast.show_error(failure_notice(kind, &message)),
                None => log::error!("{}", failure_notice(kind, &message)),
            }
        }
        self.redraw.dispatch(());
    }

    fn warn(&self, message: String) {
        match &self.toast {
            Some(toast) => toast.show_warning(message),
            None => log::warn!("{}", message),
        }
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[derive(Properties, PartialEq)]
pub struct DashboardProviderProps {
    pub children: Children,
}

/// Owns the dashboard store for the whole session so selections and
/// results survive navigating away from the dashboard page.
#[function_component(DashboardProvider)]
pub fn dashboard_provider(props: &DashboardProviderProps) -> Html {
    let store = use_mut_ref(|| {
        let settings = settings::get_settings();
        DashboardStore::new(settings.days, settings.default_days)
    });
    let revision = use_reducer(Revision::default);
    let toast = use_context::<ToastContext>();

    if toast.is_none() {
        log::warn!("DashboardProvider used outside of a ToastProvider, notices go to the log");
    }

    let handle = DashboardHandle {
        store,
        revision: revision.0,
        redraw: revision.dispatcher(),
        toast,
    };

    html! {
        <ContextProvider<DashboardHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<DashboardHandle>>
    }
}

/// Dashboard store provided by the enclosing [`DashboardProvider`].
#[hook]
pub fn use_dashboard() -> Option<DashboardHandle> {
    use_context::<DashboardHandle>()
}
