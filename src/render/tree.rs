//! Declarative style tree handed to the host renderer.
//!
//! This is the engine's entire output surface: plain data, serializable as
//! JSON, describing what to paint for one frame. Nothing here touches
//! pixels, fonts or files.

use crate::foundation::core::Color;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Group(GroupNode),
    Rect(RectNode),
    Ellipse(EllipseNode),
    Text(TextNode),
    Path(PathNode),
    Image(ImageNode),
}

impl Node {
    pub fn group(children: Vec<Node>) -> Node {
        Node::Group(GroupNode {
            children,
            ..GroupNode::default()
        })
    }

    pub fn empty() -> Node {
        Node::group(Vec::new())
    }

    pub fn with_opacity(self, opacity: f64) -> Node {
        match self {
            Node::Group(g) => Node::Group(GroupNode {
                opacity: g.opacity * opacity.clamp(0.0, 1.0),
                ..g
            }),
            other => Node::Group(GroupNode {
                opacity: opacity.clamp(0.0, 1.0),
                children: vec![other],
                ..GroupNode::default()
            }),
        }
    }

    pub fn with_transform(self, transform: Transform) -> Node {
        Node::Group(GroupNode {
            transform,
            children: vec![self],
            ..GroupNode::default()
        })
    }

    pub fn with_clip(self, clip: ClipShape) -> Node {
        Node::Group(GroupNode {
            clip: Some(clip),
            children: vec![self],
            ..GroupNode::default()
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupNode {
    #[serde(default, skip_serializing_if = "Transform::is_identity")]
    pub transform: Transform,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<ClipShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
    pub children: Vec<Node>,
}

impl Default for GroupNode {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            opacity: 1.0,
            clip: None,
            blur_px: None,
            children: Vec::new(),
        }
    }
}

fn one() -> f64 {
    1.0
}

/// CSS-like 2.5D transform: the host applies translate, rotate, scale and
/// the perspective-projected X/Y rotations used by flip transitions and
/// card tilts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective_px: Option<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            perspective_px: None,
        }
    }
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::default()
        }
    }

    pub fn scale(s: f64) -> Self {
        Self {
            scale: s,
            ..Self::default()
        }
    }

    pub fn rotate(deg: f64) -> Self {
        Self {
            rotate_deg: deg,
            ..Self::default()
        }
    }

    pub fn flip_y(deg: f64, perspective_px: f64) -> Self {
        Self {
            rotate_y_deg: deg,
            perspective_px: Some(perspective_px),
            ..Self::default()
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Clip region applied to a group, used by wipe and clock-wipe transitions.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ClipShape {
    /// Rectangular inset, each side a fraction of the canvas in [0, 1].
    Inset {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// Clockwise wedge from 12 o'clock, centered at (cx, cy).
    Wedge {
        cx: f64,
        cy: f64,
        sweep_deg: f64,
    },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl RectNode {
    pub fn filled(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Some(fill),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    pub angle_deg: f64,
    /// (offset in [0,1], color) pairs, ascending.
    pub stops: Vec<(f64, Color)>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shadow {
    pub dx: f64,
    pub dy: f64,
    pub blur_px: f64,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseNode {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
}

impl EllipseNode {
    pub fn circle(cx: f64, cy: f64, r: f64, fill: Color) -> Self {
        Self {
            cx,
            cy,
            rx: r,
            ry: r,
            fill: Some(fill),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size_px: f64,
    pub color: Color,
    #[serde(default = "default_font")]
    pub font_family: String,
    #[serde(default = "default_weight")]
    pub weight: u16,
    #[serde(default)]
    pub letter_spacing_px: f64,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_px: Option<f64>,
}

fn default_font() -> String {
    "Inter".to_string()
}

fn default_weight() -> u16 {
    400
}

impl TextNode {
    pub fn new(x: f64, y: f64, text: impl Into<String>, size_px: f64, color: Color) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size_px,
            color,
            font_family: default_font(),
            weight: default_weight(),
            letter_spacing_px: 0.0,
            align: TextAlign::Left,
            blur_px: None,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn letter_spacing(mut self, px: f64) -> Self {
        self.letter_spacing_px = px;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathNode {
    /// SVG path `d` attribute.
    pub d: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Color>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<f64>,
    #[serde(default)]
    pub dash_offset: f64,
    #[serde(default)]
    pub line_cap: LineCap,
}

impl PathNode {
    pub fn stroked(d: impl Into<String>, stroke: Color, width: f64) -> Self {
        Self {
            d: d.into(),
            stroke: Some(stroke),
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn evolved(mut self, evolution: crate::path::evolve::PathEvolution) -> Self {
        self.dash_array = Some(evolution.dash_array);
        self.dash_offset = evolution.dash_offset;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageNode {
    /// Source path, resolved by the host's asset layer.
    pub source: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub corner_radius: f64,
}
