//! Client-Side Routes
//!
//! Typed view selection, kept in sync with the browser path.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when an ID is placed in a path segment
const SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'/').add(b'?').add(b'<').add(b'>');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Tasks,
    TaskDetails(String),
    Instructions,
    InstructionDetails(String),
    Actions,
    ActionDetails(String),
    NotFound(String),
}

/// Top-level section, for highlighting the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Tasks,
    Instructions,
    Actions,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            [list] if list == "tasks" => Route::Tasks,
            [list] if list == "instructions" => Route::Instructions,
            [list] if list == "actions" => Route::Actions,
            [list, id] if list == "tasks" => Route::TaskDetails(id.clone()),
            [list, id] if list == "instructions" => Route::InstructionDetails(id.clone()),
            [list, id] if list == "actions" => Route::ActionDetails(id.clone()),
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        let encode = |id: &str| utf8_percent_encode(id, SEGMENT).to_string();
        match self {
            Route::Home => "/".to_string(),
            Route::Tasks => "/tasks".to_string(),
            Route::TaskDetails(id) => format!("/tasks/{}", encode(id)),
            Route::Instructions => "/instructions".to_string(),
            Route::InstructionDetails(id) => format!("/instructions/{}", encode(id)),
            Route::Actions => "/actions".to_string(),
            Route::ActionDetails(id) => format!("/actions/{}", encode(id)),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Home => Some(Section::Home),
            Route::Tasks | Route::TaskDetails(_) => Some(Section::Tasks),
            Route::Instructions | Route::InstructionDetails(_) => Some(Section::Instructions),
            Route::Actions | Route::ActionDetails(_) => Some(Section::Actions),
            Route::NotFound(_) => None,
        }
    }
}
