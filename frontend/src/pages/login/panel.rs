use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let cpf_input = Callback::new(move |value: String| vm.set_cpf(value));
    let password_input = Callback::new(move |value: String| vm.password.set(value));

    view! {
        <LoginForm
            cpf=vm.cpf
            password=vm.password
            error=vm.error
            pending=pending
            on_cpf_input=cpf_input
            on_password_input=password_input
            on_submit=handle_submit
        />
    }
}
