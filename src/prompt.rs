//! Prompt Preview
//!
//! Long prompts are shown as a fixed-length preview until expanded.

/// Characters shown while a prompt is collapsed
pub const PROMPT_PREVIEW_CHARS: usize = 100;

const MISSING: &str = "N/A";

/// Whether the prompt is long enough to need an Expand/Collapse toggle
pub fn needs_toggle(prompt: Option<&str>) -> bool {
    prompt.is_some_and(|p| p.chars().count() > PROMPT_PREVIEW_CHARS)
}

/// Text to display for a prompt in the given expansion state
pub fn prompt_display(prompt: Option<&str>, expanded: bool) -> String {
    let Some(prompt) = prompt.filter(|p| !p.is_empty()) else {
        return MISSING.to_string();
    };
    if expanded || !needs_toggle(Some(prompt)) {
        return prompt.to_string();
    }
    let mut preview: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_prompt_collapsed_and_expanded() {
        let prompt: String = "abcdefghij".repeat(15);
        assert_eq!(prompt.len(), 150);

        let collapsed = prompt_display(Some(&prompt), false);
        assert_eq!(collapsed, format!("{}...", &prompt[..100]));

        let expanded = prompt_display(Some(&prompt), true);
        assert_eq!(expanded, prompt);

        // toggling twice returns to the collapsed render
        let mut state = false;
        state = !state;
        state = !state;
        assert_eq!(prompt_display(Some(&prompt), state), collapsed);
    }

    #[test]
    fn test_short_prompt_has_no_toggle() {
        let prompt = "x".repeat(100);
        assert!(!needs_toggle(Some(&prompt)));
        assert_eq!(prompt_display(Some(&prompt), false), prompt);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let prompt = "é".repeat(101);
        assert!(needs_toggle(Some(&prompt)));
        let collapsed = prompt_display(Some(&prompt), false);
        assert_eq!(collapsed.chars().count(), 103);
    }

    #[test]
    fn test_missing_prompt() {
        assert_eq!(prompt_display(None, false), "N/A");
        assert_eq!(prompt_display(Some(""), true), "N/A");
        assert!(!needs_toggle(None));
    }
}
