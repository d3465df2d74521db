//! Mock browser chrome wrapping product UI mockups.

use crate::brand::constants::colors;
use crate::foundation::core::Color;
use crate::render::tree::{EllipseNode, Node, RectNode, Shadow, TextNode};
use crate::scene::SceneCtx;

pub const TITLE_BAR_H: f64 = 44.0;

#[derive(Clone, Debug)]
pub struct BrowserWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub dark: bool,
}

impl BrowserWindow {
    pub fn new(x: f64, y: f64, width: f64, height: f64, title: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            title: title.into(),
            dark: true,
        }
    }

    pub fn light(mut self) -> Self {
        self.dark = false;
        self
    }

    /// Top-left of the content area below the title bar.
    pub fn content_origin(&self) -> (f64, f64) {
        (self.x, self.y + TITLE_BAR_H)
    }

    pub fn content_height(&self) -> f64 {
        self.height - TITLE_BAR_H
    }

    /// Chrome only; callers layer content on top of the content area.
    pub fn render(&self, _ctx: &SceneCtx) -> Node {
        let (surface, bar, text) = if self.dark {
            (colors::BG_SURFACE, Color::rgb(0x1A, 0x1A, 0x1A), colors::TEXT_MUTED)
        } else {
            (colors::BG_WHITE, colors::BG_SURFACE_LIGHT, colors::TEXT_MUTED_DARK)
        };

        let traffic = [colors::ACCENT, colors::WARNING, colors::SUCCESS];
        let mut children = vec![
            Node::Rect(RectNode {
                corner_radius: 14.0,
                stroke: Some(if self.dark { colors::BORDER } else { colors::BORDER_DARK }),
                stroke_width: 1.0,
                shadow: Some(Shadow {
                    dx: 0.0,
                    dy: 20.0,
                    blur_px: 60.0,
                    color: Color::rgba(0, 0, 0, 0.5),
                }),
                ..RectNode::filled(self.x, self.y, self.width, self.height, surface)
            }),
            Node::Rect(RectNode {
                corner_radius: 14.0,
                ..RectNode::filled(self.x, self.y, self.width, TITLE_BAR_H, bar)
            }),
        ];

        for (i, color) in traffic.iter().enumerate() {
            children.push(Node::Ellipse(EllipseNode::circle(
                self.x + 22.0 + i as f64 * 20.0,
                self.y + TITLE_BAR_H / 2.0,
                5.5,
                *color,
            )));
        }

        // Address pill.
        let pill_w = self.width * 0.4;
        children.push(Node::Rect(RectNode {
            corner_radius: 8.0,
            ..RectNode::filled(
                self.x + (self.width - pill_w) / 2.0,
                self.y + 10.0,
                pill_w,
                TITLE_BAR_H - 20.0,
                if self.dark {
                    Color::rgba(255, 255, 255, 0.06)
                } else {
                    Color::rgba(0, 0, 0, 0.05)
                },
            )
        }));
        children.push(Node::Text(
            TextNode::new(
                self.x + self.width / 2.0,
                self.y + TITLE_BAR_H / 2.0 + 4.0,
                format!("creativly.ai / {}", self.title),
                13.0,
                text,
            )
            .align(crate::render::tree::TextAlign::Center),
        ));

        Node::group(children)
    }
}
