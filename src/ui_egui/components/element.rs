//! Visual tree produced by the components for one render pass.
//!
//! Every component first builds an [`Element`] from its props, then hands
//! it to the painter. Keeping the tree as plain data means a component's
//! output can be inspected without a running egui context.

use std::collections::BTreeMap;

use egui::{Color32, Vec2};

use crate::ui_egui::theme::{palette, with_opacity};

/// Pass-through attributes forwarded verbatim to a pressable element.
///
/// Components never read these; the painter honours the keys it knows
/// ([`ATTR_TOOLTIP`]) and ignores the rest.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// Attribute key the painter shows as hover text
pub const ATTR_TOOLTIP: &str = "tooltip";

/// Drop shadow under a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub offset_y: f32,
    pub blur: f32,
    pub opacity: f32,
}

impl ShadowStyle {
    pub fn to_egui(self) -> egui::epaint::Shadow {
        egui::epaint::Shadow {
            offset: Vec2::new(0.0, self.offset_y),
            blur: self.blur,
            spread: 0.0,
            color: with_opacity(palette::SHADOW, self.opacity),
        }
    }
}

/// Box decoration shared by containers and pressables
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxStyle {
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Inner padding (horizontal, vertical)
    pub padding: Vec2,
    pub corner_radius: f32,
    pub background: Option<Color32>,
    pub shadow: Option<ShadowStyle>,
    /// Hairline drawn under the box across the enclosing column
    pub border_bottom: Option<Color32>,
}

impl BoxStyle {
    /// Both dimensions fixed
    pub fn fixed_size(&self) -> Option<Vec2> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Vec2::new(w, h)),
            _ => None,
        }
    }
}

/// Row or column of children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Container {
    pub style: BoxStyle,
    /// Space between consecutive children along the main axis
    pub gap: f32,
    /// Center the children along the main axis
    pub centered: bool,
    /// Take whatever space the parent row has left
    pub fill: bool,
    pub children: Vec<Element>,
}

/// One pagination dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub color: Color32,
    /// Horizontal margin on each side
    pub margin_x: f32,
    pub active: bool,
}

/// A run of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub size: f32,
    pub color: Color32,
    pub strong: bool,
    pub margin_top: f32,
}

/// An icon by name; resolution to a glyph happens at paint time
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub name: String,
    pub size: f32,
    pub color: Color32,
}

/// A region that reports activation events
#[derive(Debug, Clone, PartialEq)]
pub struct Pressable {
    pub style: BoxStyle,
    /// Opacity of the content while the pointer is held down on it
    pub active_opacity: f32,
    pub attributes: Attributes,
    pub content: Box<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Row(Container),
    Column(Container),
    Dot(Dot),
    Text(TextSpan),
    Icon(IconSpec),
    Pressable(Pressable),
}

impl Element {
    /// Direct children, empty for leaves
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Row(c) | Element::Column(c) => &c.children,
            Element::Pressable(p) => std::slice::from_ref(p.content.as_ref()),
            Element::Dot(_) | Element::Text(_) | Element::Icon(_) => &[],
        }
    }

    /// Pre-order walk over this element and all its descendants
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(element) = stack.pop() {
            out.push(element);
            stack.extend(element.children().iter().rev());
        }
        out
    }

    pub fn as_dot(&self) -> Option<&Dot> {
        match self {
            Element::Dot(dot) => Some(dot),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextSpan> {
        match self {
            Element::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconSpec> {
        match self {
            Element::Icon(icon) => Some(icon),
            _ => None,
        }
    }

    pub fn as_pressable(&self) -> Option<&Pressable> {
        match self {
            Element::Pressable(pressable) => Some(pressable),
            _ => None,
        }
    }

    /// Width this element occupies regardless of the space around it, if
    /// that is known before layout.
    pub fn intrinsic_width(&self) -> Option<f32> {
        match self {
            Element::Dot(dot) => Some(dot.width + dot.margin_x * 2.0),
            Element::Icon(icon) => Some(icon.size),
            Element::Pressable(p) => p.style.width,
            Element::Row(c) | Element::Column(c) if c.style.width.is_some() => c.style.width,
            Element::Row(c) => {
                let widths: Option<Vec<f32>> =
                    c.children.iter().map(Element::intrinsic_width).collect();
                widths.map(|widths| {
                    let gaps = c.gap * widths.len().saturating_sub(1) as f32;
                    widths.iter().sum::<f32>() + gaps + c.style.padding.x * 2.0
                })
            }
            Element::Column(_) | Element::Text(_) => None,
        }
    }

    /// Whether this element stretches to fill its parent row
    pub fn fills(&self) -> bool {
        matches!(self, Element::Row(c) | Element::Column(c) if c.fill)
    }
}
