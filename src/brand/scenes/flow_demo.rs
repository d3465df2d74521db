//! Node-graph product demo: a prompt types in while the graph assembles and
//! its edges draw across the canvas.

use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::browser_window::BrowserWindow;
use crate::brand::components::flow::{FlowNode, FlowNodeKind, flow_edge};
use crate::brand::components::text_fx::fade_in;
use crate::brand::components::typewriter::Typewriter;
use crate::brand::constants::colors;
use crate::render::tree::Node;
use crate::scene::{Scene, SceneCtx};

pub struct FlowDemo {
    window: BrowserWindow,
    nodes: Vec<FlowNode>,
    prompt: Typewriter,
}

impl FlowDemo {
    pub fn new() -> Self {
        let window = BrowserWindow::new(160.0, 90.0, 1600.0, 900.0, "flow");
        let nodes = vec![
            FlowNode::new(FlowNodeKind::Llm, "Script draft", 260.0, 380.0).delay(15),
            FlowNode::new(FlowNodeKind::Image, "Key frames", 700.0, 240.0).delay(30),
            FlowNode::new(FlowNodeKind::Audio, "Voiceover", 700.0, 560.0).delay(40),
            FlowNode::new(FlowNodeKind::Video, "Final cut", 1180.0, 400.0).delay(55),
        ];
        let prompt = Typewriter::new(
            "Make it anime style, golden hour, slow dolly in",
            22.0,
            colors::TEXT,
        )
        .speed(0.9)
        .delay(10)
        .pause_after(20);
        Self {
            window,
            nodes,
            prompt,
        }
    }
}

impl Default for FlowDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FlowDemo {
    fn name(&self) -> &'static str {
        "flow-demo"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![grid_background(ctx), self.window.render(ctx)];

        // Edges under the cards.
        children.push(flow_edge(ctx, &self.nodes[0], &self.nodes[1], 45, 25));
        children.push(flow_edge(ctx, &self.nodes[0], &self.nodes[2], 55, 25));
        children.push(flow_edge(ctx, &self.nodes[1], &self.nodes[3], 70, 25));
        children.push(flow_edge(ctx, &self.nodes[2], &self.nodes[3], 80, 25));

        for node in &self.nodes {
            children.push(node.render(ctx));
        }

        // Prompt bar along the bottom of the window.
        children.push(
            Node::Rect(crate::render::tree::RectNode {
                corner_radius: 10.0,
                stroke: Some(colors::BORDER_BRIGHT),
                stroke_width: 1.0,
                ..crate::render::tree::RectNode::filled(420.0, 880.0, 1080.0, 56.0, colors::GLASS)
            })
            .with_opacity(fade_in(ctx, 5.0, 15.0)),
        );
        children.push(self.prompt.render(ctx, 450.0, 915.0));

        Node::group(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::constants::{video_canvas, video_fps};

    #[test]
    fn graph_assembles_over_time() {
        let scene = FlowDemo::new();
        let a = scene.render(&SceneCtx::new(0, video_fps(), video_canvas()));
        let b = scene.render(&SceneCtx::new(120, video_fps(), video_canvas()));
        assert_ne!(a, b);
    }
}
