//! Image Gallery Fields
//!
//! Optional image references are declared once, in display order, and
//! iterated by the gallery instead of checked one by one.

use std::collections::BTreeSet;

use crate::models::{Action, Instruction};

/// An optional field of `E` that the gallery knows how to show
pub trait RenderableField<E> {
    /// Stable key, used for expansion state and DOM keys
    fn key(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn value<'a>(&self, entity: &'a E) -> Option<&'a str>;

    fn has_value(&self, entity: &E) -> bool {
        self.value(entity).is_some_and(|v| !v.trim().is_empty())
    }
}

/// Image fields of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionImage {
    Screenshot,
    Vision,
    Yolo,
    YoloIcons,
    Annotated,
}

impl ActionImage {
    pub const ALL: [ActionImage; 5] = [
        ActionImage::Screenshot,
        ActionImage::Vision,
        ActionImage::Yolo,
        ActionImage::YoloIcons,
        ActionImage::Annotated,
    ];
}

impl RenderableField<Action> for ActionImage {
    fn key(&self) -> &'static str {
        match self {
            ActionImage::Screenshot => "screenshot",
            ActionImage::Vision => "vision",
            ActionImage::Yolo => "yolo",
            ActionImage::YoloIcons => "yolo_icons",
            ActionImage::Annotated => "annotated",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ActionImage::Screenshot => "Screenshot",
            ActionImage::Vision => "Google Vision Analysis",
            ActionImage::Yolo => "YOLO Detection",
            ActionImage::YoloIcons => "YOLO Icons",
            ActionImage::Annotated => "Annotated View",
        }
    }

    fn value<'a>(&self, action: &'a Action) -> Option<&'a str> {
        match self {
            ActionImage::Screenshot => action.screenshot_path.as_deref(),
            ActionImage::Vision => action.google_vision_plot.as_deref(),
            ActionImage::Yolo => action.yolo_plot.as_deref(),
            ActionImage::YoloIcons => action.yolo_icons_plot.as_deref(),
            ActionImage::Annotated => action.annotated_plot.as_deref(),
        }
    }
}

/// Image fields of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionImage {
    Screenshot,
}

impl InstructionImage {
    pub const ALL: [InstructionImage; 1] = [InstructionImage::Screenshot];
}

impl RenderableField<Instruction> for InstructionImage {
    fn key(&self) -> &'static str {
        "screenshot"
    }

    fn label(&self) -> &'static str {
        "Screenshot"
    }

    fn value<'a>(&self, instruction: &'a Instruction) -> Option<&'a str> {
        instruction.screenshot_path.as_deref()
    }
}

/// A populated gallery slot
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub key: &'static str,
    pub label: &'static str,
    pub path: String,
}

/// Collect the populated fields of `entity`, in declaration order
pub fn gallery_images<E, F: RenderableField<E>>(entity: &E, fields: &[F]) -> Vec<GalleryImage> {
    fields
        .iter()
        .filter(|field| field.has_value(entity))
        .filter_map(|field| {
            field.value(entity).map(|path| GalleryImage {
                key: field.key(),
                label: field.label(),
                path: path.to_string(),
            })
        })
        .collect()
}

/// First populated image path of an action, used for card thumbnails
pub fn first_image(action: &Action) -> Option<&str> {
    ActionImage::ALL
        .iter()
        .find(|field| field.has_value(action))
        .and_then(|field| field.value(action))
}

/// Independent expanded/collapsed state per gallery key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandSet {
    expanded: BTreeSet<&'static str>,
}

impl ExpandSet {
    pub fn toggle(&mut self, key: &'static str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key);
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_with_three_images() -> Action {
        serde_json::from_value(serde_json::json!({
            "action_id": "a-1",
            "screenshot_path": "/runs/a-1/screen.png",
            "yolo_plot": "/runs/a-1/yolo.png",
            "yolo_icons_plot": "",
            "annotated_plot": "/runs/a-1/annotated.png"
        }))
        .unwrap()
    }

    #[test]
    fn test_gallery_only_populated_fields_in_order() {
        let action = action_with_three_images();
        let images = gallery_images(&action, &ActionImage::ALL);

        let keys: Vec<_> = images.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec!["screenshot", "yolo", "annotated"]);
        assert_eq!(images[1].label, "YOLO Detection");
        assert_eq!(images[2].path, "/runs/a-1/annotated.png");
    }

    #[test]
    fn test_expand_toggles_are_independent() {
        let action = action_with_three_images();
        let images = gallery_images(&action, &ActionImage::ALL);
        let mut state = ExpandSet::default();

        state.toggle(images[0].key);
        assert!(state.is_expanded("screenshot"));
        assert!(!state.is_expanded("yolo"));
        assert!(!state.is_expanded("annotated"));

        state.toggle(images[2].key);
        assert!(state.is_expanded("screenshot"));
        assert!(state.is_expanded("annotated"));

        state.toggle(images[0].key);
        assert!(!state.is_expanded("screenshot"));
        assert!(state.is_expanded("annotated"));
    }

    #[test]
    fn test_first_image_skips_empty() {
        let action: Action = serde_json::from_value(serde_json::json!({
            "action_id": "a-2",
            "screenshot_path": "  ",
            "google_vision_plot": "/runs/a-2/vision.png"
        }))
        .unwrap();
        assert_eq!(first_image(&action), Some("/runs/a-2/vision.png"));
    }

    #[test]
    fn test_instruction_screenshot() {
        let instruction: Instruction = serde_json::from_value(serde_json::json!({
            "instruction_id": "i-1",
            "screenshot_path": "/runs/i-1.png"
        }))
        .unwrap();
        let images = gallery_images(&instruction, &InstructionImage::ALL);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].label, "Screenshot");
    }
}
