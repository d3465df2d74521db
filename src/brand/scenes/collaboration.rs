//! Multiplayer canvas: named cursors drifting over a shared board.

use crate::animation::noise::noise2;
use crate::animation::spring::{SpringConfig, spring_delayed};
use crate::brand::components::backgrounds::grid_background;
use crate::brand::components::shapes3d::floating_diamond;
use crate::brand::components::text_fx::CharacterReveal;
use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{Node, PathNode, RectNode, TextNode, Transform};
use crate::scene::{Scene, SceneCtx};

struct Collaborator {
    name: &'static str,
    color: Color,
    base_x: f64,
    base_y: f64,
    delay: u64,
}

const COLLABORATORS: [Collaborator; 4] = [
    Collaborator { name: "Sarah", color: colors::PRIMARY, base_x: 0.3, base_y: 0.4, delay: 10 },
    Collaborator { name: "Mike", color: colors::SUCCESS, base_x: 0.65, base_y: 0.35, delay: 18 },
    Collaborator { name: "Alex", color: colors::WARNING, base_x: 0.45, base_y: 0.65, delay: 26 },
    Collaborator { name: "Nina", color: colors::ACCENT, base_x: 0.7, base_y: 0.6, delay: 34 },
];

pub struct Collaboration {
    title: CharacterReveal,
}

impl Collaboration {
    pub fn new() -> Self {
        Self {
            title: CharacterReveal::new("CREATE TOGETHER", 72.0, colors::TEXT)
                .stagger(1)
                .spacing(6.0),
        }
    }
}

impl Default for Collaboration {
    fn default() -> Self {
        Self::new()
    }
}

fn cursor(ctx: &SceneCtx, c: &Collaborator) -> Node {
    let cfg = SpringConfig {
        mass: 0.7,
        stiffness: 110.0,
        damping: 13.0,
        duration_frames: None,
    };
    let spr = spring_delayed(ctx.frame as i64, c.delay as i64, ctx.fps, &cfg);

    let t = ctx.f() * 0.012;
    let x = c.base_x * ctx.width + noise2(&format!("cursor-x-{}", c.name), t, 0.0) * 140.0;
    let y = c.base_y * ctx.height + noise2(&format!("cursor-y-{}", c.name), 0.0, t) * 90.0;

    Node::group(vec![
        // Pointer.
        Node::Path(PathNode {
            d: "M 0 0 L 0 16 L 4.5 12.5 L 7.5 19 L 10 18 L 7 11.5 L 12 11 Z".to_string(),
            fill: Some(c.color),
            ..PathNode::default()
        }),
        // Name tag.
        Node::Rect(RectNode {
            corner_radius: 6.0,
            ..RectNode::filled(14.0, 18.0, c.name.len() as f64 * 9.0 + 16.0, 24.0, c.color)
        }),
        Node::Text(
            TextNode::new(22.0, 35.0, c.name, 13.0, colors::TEXT).weight(600),
        ),
    ])
    .with_transform(Transform::translate(x, y))
    .with_opacity(spr)
}

impl Scene for Collaboration {
    fn name(&self) -> &'static str {
        "collaboration"
    }

    fn render(&self, ctx: &SceneCtx) -> Node {
        let mut children = vec![
            grid_background(ctx),
            floating_diamond(ctx, 180.0, 220.0, 70.0, colors::SECONDARY, "collab-d1"),
            floating_diamond(ctx, ctx.width - 160.0, 860.0, 50.0, colors::PRIMARY, "collab-d2"),
            self.title.render(ctx, ctx.width / 2.0, 180.0),
            // Shared board.
            Node::Rect(RectNode {
                corner_radius: 16.0,
                stroke: Some(colors::BORDER_BRIGHT),
                stroke_width: 1.5,
                ..RectNode::filled(310.0, 280.0, 1300.0, 640.0, colors::BG_SURFACE)
            }),
        ];
        for c in &COLLABORATORS {
            children.push(cursor(ctx, c));
        }
        Node::group(children)
    }
}
