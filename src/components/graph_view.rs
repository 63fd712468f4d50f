//! Graph Components
//!
//! Inline SVG rendering of the containment layout. The layout is a memo
//! over the input entity, so a new input replaces the whole drawing.

use leptos::prelude::*;

use crate::graph::{instruction_graph, task_graph, GraphLayout, NODE_HEIGHT, NODE_WIDTH};
use crate::models::{Instruction, Task};

/// Canvas margin around the outermost nodes
const MARGIN: f64 = 40.0;

#[component]
fn GraphCanvas(layout: Memo<GraphLayout>) -> impl IntoView {
    let view_box = move || {
        layout.with(|l| format!("0 0 {} {}", l.width() + MARGIN, l.height() + NODE_HEIGHT + MARGIN))
    };

    view! {
        <div class="graph-canvas">
            <svg viewBox=view_box width="100%" preserveAspectRatio="xMidYMin meet">
                {move || {
                    let layout = layout.get();
                    let edges = layout
                        .edges
                        .iter()
                        .filter_map(|edge| layout.edge_path(edge).map(|d| (edge.id.clone(), d)))
                        .map(|(id, d)| view! { <path id=id d=d class="graph-edge" fill="none" stroke="#555" /> })
                        .collect_view();
                    let nodes = layout
                        .nodes
                        .iter()
                        .map(|node| {
                            let text_x = (node.x + NODE_WIDTH / 2.0).to_string();
                            let text_y = (node.y + NODE_HEIGHT / 2.0 + 5.0).to_string();
                            view! {
                                <g class=node.kind.css_class() id=node.id.clone()>
                                    <rect
                                        x=node.x.to_string()
                                        y=node.y.to_string()
                                        width=NODE_WIDTH.to_string()
                                        height=NODE_HEIGHT.to_string()
                                        rx="4"
                                        stroke="#222"
                                    />
                                    <text x=text_x y=text_y text-anchor="middle">{node.label.clone()}</text>
                                </g>
                            }
                        })
                        .collect_view();
                    view! { {edges} {nodes} }
                }}
            </svg>
        </div>
    }
}

/// Task → instructions → actions
#[component]
pub fn TaskGraph(#[prop(into)] task: Signal<Option<Task>>) -> impl IntoView {
    let layout = Memo::new(move |_| task.get().map(|t| task_graph(&t)).unwrap_or_default());
    view! { <GraphCanvas layout=layout /> }
}

/// Instruction → actions
#[component]
pub fn InstructionGraph(#[prop(into)] instruction: Signal<Option<Instruction>>) -> impl IntoView {
    let layout = Memo::new(move |_| instruction.get().map(|i| instruction_graph(&i)).unwrap_or_default());
    view! { <GraphCanvas layout=layout /> }
}
