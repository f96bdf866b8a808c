//! Square button holding a single icon.
//!
//! Callers set the icon, its size and colors, an optional [`StyleOverride`]
//! for the container, and any number of pass-through attributes. The
//! attributes end up on the pressable element untouched.

use egui::{Color32, Response, Ui, Vec2, Widget};

use super::element::{Attributes, BoxStyle, Element, IconSpec, Pressable, ShadowStyle};
use super::painter;
use crate::ui_egui::theme::palette;

pub const DEFAULT_ICON_SIZE: f32 = 20.0;
pub const DEFAULT_ICON_COLOR: Color32 = palette::TEXT_PRIMARY;
pub const DEFAULT_BACKGROUND: Color32 = palette::SURFACE;
/// Width and height of the container
pub const BUTTON_SIZE: f32 = 40.0;
const CORNER_RADIUS: f32 = 12.0;
const ACTIVE_OPACITY: f32 = 0.7;

/// Container style overrides. Unset fields keep the button's own values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverride {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub corner_radius: Option<f32>,
    pub background: Option<Color32>,
    pub padding: Option<Vec2>,
    /// `Some(false)` removes the drop shadow
    pub elevated: Option<bool>,
}

impl StyleOverride {
    /// Merge onto `base`, values set here taking precedence
    pub fn apply(&self, base: BoxStyle) -> BoxStyle {
        BoxStyle {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            padding: self.padding.unwrap_or(base.padding),
            corner_radius: self.corner_radius.unwrap_or(base.corner_radius),
            background: self.background.or(base.background),
            shadow: match self.elevated {
                Some(false) => None,
                _ => base.shadow,
            },
            border_bottom: base.border_bottom,
        }
    }
}

/// Everything the icon button renders from. All fields but `icon` have
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct IconButtonConfig {
    pub icon: String,
    pub size: f32,
    pub color: Color32,
    pub background_color: Color32,
    pub style: Option<StyleOverride>,
    pub attributes: Attributes,
}

impl IconButtonConfig {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            size: DEFAULT_ICON_SIZE,
            color: DEFAULT_ICON_COLOR,
            background_color: DEFAULT_BACKGROUND,
            style: None,
            attributes: Attributes::new(),
        }
    }

    /// Container style before overrides
    fn base_style(&self) -> BoxStyle {
        BoxStyle {
            width: Some(BUTTON_SIZE),
            height: Some(BUTTON_SIZE),
            padding: Vec2::ZERO,
            corner_radius: CORNER_RADIUS,
            background: Some(self.background_color),
            shadow: Some(ShadowStyle {
                offset_y: 1.0,
                blur: 2.0,
                opacity: 0.05,
            }),
            border_bottom: None,
        }
    }

    /// Container style with the caller's overrides applied
    pub fn resolved_style(&self) -> BoxStyle {
        let base = self.base_style();
        match &self.style {
            Some(style) => style.apply(base),
            None => base,
        }
    }
}

pub struct IconButton<'a> {
    config: IconButtonConfig,
    on_press: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> IconButton<'a> {
    pub fn new(icon: impl Into<String>) -> Self {
        Self::from_config(IconButtonConfig::new(icon))
    }

    pub fn from_config(config: IconButtonConfig) -> Self {
        Self {
            config,
            on_press: None,
        }
    }

    /// Set the activation handler
    pub fn on_press(mut self, handler: impl FnMut() + 'a) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.config.size = size;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.config.color = color;
        self
    }

    pub fn background_color(mut self, color: Color32) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn style(mut self, style: StyleOverride) -> Self {
        self.config.style = Some(style);
        self
    }

    /// Add one pass-through attribute; a repeated key replaces the earlier value
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.config.attributes.insert(key.into(), value.into());
        self
    }

    /// Add many pass-through attributes
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.config.attributes.extend(attributes);
        self
    }

    pub fn config(&self) -> &IconButtonConfig {
        &self.config
    }

    pub fn element(&self) -> Element {
        Element::Pressable(Pressable {
            style: self.config.resolved_style(),
            active_opacity: ACTIVE_OPACITY,
            attributes: self.config.attributes.clone(),
            content: Box::new(Element::Icon(IconSpec {
                name: self.config.icon.clone(),
                size: self.config.size,
                color: self.config.color,
            })),
        })
    }
}

impl Widget for IconButton<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let response = painter::paint(ui, &self.element());
        if response.clicked() {
            if let Some(on_press) = self.on_press.as_mut() {
                on_press();
            }
        }
        response
    }
}
