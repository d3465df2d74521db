//! Node-graph mock: typed cards connected by bezier edges that draw
//! themselves in with traveling pulse dots.

use crate::animation::interp::ramp;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::path::evolve::{Connector, evolve_path};
use crate::render::tree::{EllipseNode, Node, PathNode, RectNode, Shadow, TextNode};
use crate::scene::SceneCtx;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowNodeKind {
    Image,
    Video,
    Llm,
    Audio,
}

impl FlowNodeKind {
    pub fn accent(self) -> Color {
        match self {
            FlowNodeKind::Image => colors::PRIMARY,
            FlowNodeKind::Video => colors::SECONDARY,
            FlowNodeKind::Llm => colors::WARNING,
            FlowNodeKind::Audio => colors::SUCCESS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowNodeKind::Image => "IMAGE",
            FlowNodeKind::Video => "VIDEO",
            FlowNodeKind::Llm => "LLM",
            FlowNodeKind::Audio => "AUDIO",
        }
    }
}

/// One card in the graph. Position is the card's top-left corner.
#[derive(Clone, Debug)]
pub struct FlowNode {
    pub kind: FlowNodeKind,
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub delay: u64,
}

impl FlowNode {
    pub fn new(kind: FlowNodeKind, title: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind,
            title: title.into(),
            x,
            y,
            width: 260.0,
            height: 150.0,
            delay: 0,
        }
    }

    pub fn delay(mut self, frames: u64) -> Self {
        self.delay = frames;
        self
    }

    /// Output port center, where outgoing edges attach.
    pub fn out_port(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height / 2.0)
    }

    /// Input port center.
    pub fn in_port(&self) -> (f64, f64) {
        (self.x, self.y + self.height / 2.0)
    }

    pub fn render(&self, ctx: &SceneCtx) -> Node {
        let cfg = SpringConfig {
            mass: 0.6,
            stiffness: 120.0,
            damping: 14.0,
            duration_frames: None,
        };
        let spr = spring_delayed(ctx.frame as i64, self.delay as i64, ctx.fps, &cfg);
        let scale = 0.7 + 0.3 * spr;
        let accent = self.kind.accent();

        let header_h = 36.0;
        let card = vec![
            Node::Rect(RectNode {
                corner_radius: 12.0,
                stroke: Some(colors::BORDER),
                stroke_width: 1.0,
                shadow: Some(Shadow {
                    dx: 0.0,
                    dy: 8.0,
                    blur_px: 24.0,
                    color: Color::rgba(0, 0, 0, 0.4),
                }),
                ..RectNode::filled(self.x, self.y, self.width, self.height, colors::GLASS)
            }),
            // Header strip with the type accent.
            Node::Rect(RectNode {
                corner_radius: 12.0,
                ..RectNode::filled(self.x, self.y, self.width, header_h, accent.with_alpha(0.15))
            }),
            Node::Ellipse(EllipseNode::circle(
                self.x + 18.0,
                self.y + header_h / 2.0,
                5.0,
                accent,
            )),
            Node::Text(
                TextNode::new(
                    self.x + 32.0,
                    self.y + header_h / 2.0 + 4.0,
                    self.kind.label(),
                    12.0,
                    accent,
                )
                .weight(700)
                .letter_spacing(1.5),
            ),
            Node::Text(
                TextNode::new(
                    self.x + 18.0,
                    self.y + header_h + 28.0,
                    self.title.clone(),
                    16.0,
                    colors::TEXT,
                )
                .weight(600),
            ),
            // Ports.
            Node::Ellipse(EllipseNode {
                stroke: Some(accent),
                stroke_width: 2.0,
                ..EllipseNode::circle(self.in_port().0, self.in_port().1, 6.0, colors::BG)
            }),
            Node::Ellipse(EllipseNode {
                stroke: Some(accent),
                stroke_width: 2.0,
                ..EllipseNode::circle(self.out_port().0, self.out_port().1, 6.0, colors::BG)
            }),
        ];

        Node::group(card)
            .with_transform(crate::render::tree::Transform {
                translate_x: (self.x + self.width / 2.0) * (1.0 - scale),
                translate_y: (self.y + self.height / 2.0) * (1.0 - scale),
                scale,
                ..Default::default()
            })
            .with_opacity(spr)
    }
}

/// Draw an edge from `from`'s output port to `to`'s input port, revealing it
/// over `draw_frames` starting at `delay`. A soft glow underlay, traveling
/// dots once drawn, and an arrowhead fading in near the end.
pub fn flow_edge(ctx: &SceneCtx, from: &FlowNode, to: &FlowNode, delay: u64, draw_frames: u64) -> Node {
    let (x1, y1) = from.out_port();
    let (x2, y2) = to.in_port();
    let connector = Connector::new(x1, y1, x2, y2);
    let bez = connector.to_bez_path();

    let local = ctx.frame.saturating_sub(delay) as f64;
    let progress = ramp(local, &[0.0, draw_frames.max(1) as f64], &[0.0, 1.0]);
    let evolution = evolve_path(progress, &bez);
    let color = from.kind.accent();

    let mut children = vec![
        // Glow underlay.
        Node::Path(
            PathNode {
                line_cap: crate::render::tree::LineCap::Round,
                ..PathNode::stroked(connector.to_svg(), color.with_alpha(0.3), 8.0)
            }
            .evolved(evolution),
        ),
        Node::Path(
            PathNode {
                line_cap: crate::render::tree::LineCap::Round,
                ..PathNode::stroked(connector.to_svg(), color, 2.5)
            }
            .evolved(evolution),
        ),
    ];

    // Traveling pulse dots once the edge is fully drawn.
    if progress >= 1.0 {
        for k in 0..2 {
            let t = ((local - draw_frames as f64) * 0.02 + k as f64 * 0.5) % 1.0;
            let p = connector.point_at(t);
            children.push(Node::Ellipse(EllipseNode {
                blur_px: Some(2.0),
                ..EllipseNode::circle(p.x, p.y, 4.0, color)
            }));
        }
    }

    // Arrowhead at the destination port, fading in as the edge arrives.
    let head_opacity = ramp(progress, &[0.92, 1.0], &[0.0, 1.0]);
    if head_opacity > 0.0 {
        let d = format!(
            "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
            x2 - 10.0,
            y2 - 6.0,
            x2,
            y2,
            x2 - 10.0,
            y2 + 6.0,
        );
        children.push(
            Node::Path(PathNode {
                d,
                fill: Some(color),
                ..PathNode::default()
            })
            .with_opacity(head_opacity),
        );
    }

    Node::group(children)
}
