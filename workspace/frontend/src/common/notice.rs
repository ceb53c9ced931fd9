use yew::prelude::*;

use crate::presenter::failure_notice;
use crate::state::OperationKind;

#[derive(Properties, PartialEq)]
pub struct FailureNoticeProps {
    pub kind: OperationKind,
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub retry_disabled: bool,
}

/// Inline alert for the last failed request of an operation. Rendered above
/// any previous result, which stays visible.
#[function_component(FailureNotice)]
pub fn failure_notice_view(props: &FailureNoticeProps) -> Html {
    html! {
        <div class="alert alert-error my-4" role="alert">
            <i class="fas fa-exclamation-circle text-xl"></i>
            <span class="text-sm">{failure_notice(props.kind, &props.message)}</span>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-sm"
                        disabled={props.retry_disabled}
                        onclick={Callback::from(move |_: MouseEvent| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
