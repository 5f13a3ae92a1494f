use leptos::prelude::*;

/// Inline hint rendered under an input while the user types. Shown for
/// field-level validation only; form-level messages use [`super::Alert`].
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|text| view! { <p class="mt-2 text-sm text-red-600 dark:text-red-400">{text}</p> })
        }}
    }
}
