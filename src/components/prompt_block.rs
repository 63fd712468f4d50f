//! Prompt Block Component
//!
//! Shows a prompt as a preview with an Expand/Collapse toggle.

use leptos::prelude::*;

use crate::prompt::{needs_toggle, prompt_display};

#[component]
pub fn PromptBlock(prompt: Option<String>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let has_toggle = needs_toggle(prompt.as_deref());
    let text = move || prompt_display(prompt.as_deref(), expanded.get());

    view! {
        <div class="section">
            <h3 class="section-title">"Prompt"</h3>
            <pre class="prompt-box"><code>{text}</code></pre>
            {has_toggle.then(|| view! {
                <button class="control-btn" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "Collapse" } else { "Expand" }}
                </button>
            })}
        </div>
    }
}
