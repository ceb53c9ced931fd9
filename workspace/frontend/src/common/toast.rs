use std::rc::Rc;

use yew::prelude::*;

use crate::settings;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

/// Toast list driven through a reducer so callbacks fired after an
/// `.await` never work on a stale copy of the list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Remove(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_info(&self, message: String) {
        self.add_toast.emit((message, ToastType::Info));
    }

    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastType::Success));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastType::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let remove_toast = {
        let dispatcher = toasts.dispatcher();
        use_callback((), move |id: usize, _| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let add_toast = {
        let dispatcher = toasts.dispatcher();
        let next_id = next_id.clone();
        use_callback((), move |(message, toast_type): (String, ToastType), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id += 1;
                id
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, message, toast_type }));

            // Auto-dismiss after the configured duration
            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            });
            timeout_handle.forget();
        })
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.toasts().iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
