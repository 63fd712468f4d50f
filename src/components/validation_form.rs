//! Validation Form Component
//!
//! Checkbox plus comment, pre-filled from the entity's saved validation.
//! The saved record is shown alongside and follows the owner's state.

use leptos::prelude::*;

use crate::models::Validation;

fn saved_summary(saved: Option<&Validation>) -> String {
    match saved {
        None => "Not validated yet".to_string(),
        Some(v) if v.comments.is_empty() => (if v.valid { "Valid" } else { "Invalid" }).to_string(),
        Some(v) => format!("{} - {}", if v.valid { "Valid" } else { "Invalid" }, v.comments),
    }
}

#[component]
pub fn ValidationForm(
    #[prop(into)] saved: Signal<Option<Validation>>,
    #[prop(into)] on_submit: Callback<Validation>,
) -> impl IntoView {
    let initial = saved.get_untracked().unwrap_or_default();
    let (valid, set_valid) = signal(initial.valid);
    let (comments, set_comments) = signal(initial.comments);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(Validation {
            valid: valid.get_untracked(),
            comments: comments.get_untracked(),
        });
    };

    view! {
        <form class="validation-form section" on:submit=submit>
            <h3 class="section-title">"Validation"</h3>
            <p class="validation-saved">
                <strong>"Saved: "</strong>
                {move || saved.with(|v| saved_summary(v.as_ref()))}
            </p>
            <label class="validation-valid">
                <input
                    type="checkbox"
                    prop:checked=move || valid.get()
                    on:change=move |ev| set_valid.set(event_target_checked(&ev))
                />
                " Valid"
            </label>
            <textarea
                class="validation-comments"
                rows="4"
                placeholder="Comments..."
                prop:value=move || comments.get()
                on:input=move |ev| set_comments.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="submit-btn">"Save Validation"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_summary() {
        assert_eq!(saved_summary(None), "Not validated yet");
        let v = Validation { valid: true, comments: String::new() };
        assert_eq!(saved_summary(Some(&v)), "Valid");
        let v = Validation { valid: false, comments: "clicked the wrong icon".to_string() };
        assert_eq!(saved_summary(Some(&v)), "Invalid - clicked the wrong icon");
    }
}
