use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Bottom-right banner for the outcome of a form submission.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="notification" role="status" aria-live="polite">
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        max-width: 28rem;
                        background: #fff;
                        border-left: 4px solid #22C55E;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                        padding: 1rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        animation: slideUp 0.4s ease-out;
                    }
                    .notification-icon {
                        color: #22C55E;
                        font-size: 1.5rem;
                    }
                    .notification p {
                        color: #1F2937;
                        margin: 0;
                    }
                    .notification-dismiss {
                        margin-left: auto;
                        background: none;
                        border: none;
                        color: #6B7280;
                        cursor: pointer;
                    }
                    .notification-dismiss:hover {
                        color: #374151;
                    }
                "#}
            </style>
            <span class="notification-icon">{"✔"}</span>
            <p>{&props.message}</p>
            <button class="notification-dismiss" onclick={on_dismiss} aria-label="Скрыть уведомление">{"✕"}</button>
        </div>
    }
}
