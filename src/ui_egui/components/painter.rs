//! Draws an [`Element`] tree into an egui `Ui`.

use egui::{
    Color32, CursorIcon, FontId, Frame, Layout, Margin, Response, Rounding, Sense, Stroke, Ui,
    Vec2,
};

use super::element::{BoxStyle, Container, Dot, Element, IconSpec, Pressable, TextSpan, ATTR_TOOLTIP};
use crate::ui_egui::icons;
use crate::ui_egui::theme::with_opacity;

/// Paint `element` and return its response.
///
/// When the element is a [`Pressable`] the response senses clicks, so
/// `response.clicked()` is the activation signal for the caller.
pub fn paint(ui: &mut Ui, element: &Element) -> Response {
    match element {
        Element::Row(container) => paint_row(ui, container),
        Element::Column(container) => paint_column(ui, container),
        Element::Dot(dot) => paint_dot(ui, dot),
        Element::Text(text) => paint_text(ui, text),
        Element::Icon(icon) => paint_icon(ui, icon),
        Element::Pressable(pressable) => paint_pressable(ui, pressable),
    }
}

/// egui frame matching a box style
pub(crate) fn frame_for(style: &BoxStyle) -> Frame {
    let mut frame = Frame::none()
        .inner_margin(Margin::symmetric(style.padding.x, style.padding.y))
        .rounding(Rounding::same(style.corner_radius));
    if let Some(background) = style.background {
        frame = frame.fill(background);
    }
    if let Some(shadow) = style.shadow {
        frame = frame.shadow(shadow.to_egui());
    }
    frame
}

fn paint_row(ui: &mut Ui, container: &Container) -> Response {
    let response = match container.style.fixed_size() {
        Some(size) => paint_fixed(ui, &container.style, size, |ui| {
            for child in &container.children {
                paint(ui, child);
            }
        }),
        None => paint_flowing_row(ui, container),
    };
    paint_border(ui, &container.style, &response);
    response
}

fn paint_flowing_row(ui: &mut Ui, container: &Container) -> Response {
    let content_width = container.centered.then(|| {
        container
            .children
            .iter()
            .map(|child| measured_width(ui, child))
            .sum::<f32>()
            + container.gap * container.children.len().saturating_sub(1) as f32
    });

    frame_for(&container.style)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = container.gap;
                if let Some(width) = content_width {
                    let lead = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.add_space(lead);
                }
                for (idx, child) in container.children.iter().enumerate() {
                    if child.fills() {
                        let reserved: f32 = container.children[idx + 1..]
                            .iter()
                            .map(|c| measured_width(ui, c) + container.gap)
                            .sum();
                        let width = (ui.available_width() - reserved).max(0.0);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            paint(ui, child);
                        });
                    } else {
                        paint(ui, child);
                    }
                }
            })
            .response
        })
        .response
}

fn paint_column(ui: &mut Ui, container: &Container) -> Response {
    let response = frame_for(&container.style)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = container.gap;
                for child in &container.children {
                    paint(ui, child);
                }
            })
            .response
        })
        .response;
    paint_border(ui, &container.style, &response);
    response
}

/// Box of a fixed outer `size` with its content centered on both axes
fn paint_fixed(
    ui: &mut Ui,
    style: &BoxStyle,
    size: Vec2,
    add_contents: impl FnOnce(&mut Ui),
) -> Response {
    frame_for(style)
        .show(ui, |ui| {
            let inner_size = (size - style.padding * 2.0).max(Vec2::ZERO);
            ui.allocate_ui_with_layout(
                inner_size,
                Layout::centered_and_justified(egui::Direction::TopDown),
                |ui| {
                    ui.set_min_size(inner_size);
                    add_contents(ui);
                },
            );
        })
        .response
}

fn paint_border(ui: &Ui, style: &BoxStyle, response: &Response) {
    if let Some(color) = style.border_bottom {
        ui.painter().hline(
            ui.max_rect().x_range(),
            response.rect.bottom(),
            Stroke::new(1.0, color),
        );
    }
}

/// Width `element` will take when painted without a width constraint.
///
/// Falls back to laying text out when the tree alone does not know.
pub(crate) fn measured_width(ui: &Ui, element: &Element) -> f32 {
    if let Some(width) = element.intrinsic_width() {
        return width;
    }
    match element {
        Element::Text(text) => {
            ui.painter()
                .layout_no_wrap(text.text.clone(), FontId::proportional(text.size), text.color)
                .size()
                .x
        }
        Element::Row(c) => {
            c.children.iter().map(|child| measured_width(ui, child)).sum::<f32>()
                + c.gap * c.children.len().saturating_sub(1) as f32
                + c.style.padding.x * 2.0
        }
        Element::Column(c) => {
            c.children
                .iter()
                .map(|child| measured_width(ui, child))
                .fold(0.0, f32::max)
                + c.style.padding.x * 2.0
        }
        Element::Pressable(p) => measured_width(ui, &p.content) + p.style.padding.x * 2.0,
        Element::Dot(_) | Element::Icon(_) => 0.0,
    }
}

fn paint_dot(ui: &mut Ui, dot: &Dot) -> Response {
    ui.add_space(dot.margin_x);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(dot.width, dot.height), Sense::hover());
    ui.painter()
        .rect_filled(rect, Rounding::same(dot.corner_radius), dot.color);
    ui.add_space(dot.margin_x);
    response
}

fn paint_text(ui: &mut Ui, text: &TextSpan) -> Response {
    if text.margin_top > 0.0 {
        ui.add_space(text.margin_top);
    }
    paint_glyphs(ui, &text.text, text.size, text.color, text.strong)
}

fn paint_icon(ui: &mut Ui, icon: &IconSpec) -> Response {
    paint_glyphs(ui, icons::glyph(&icon.name), icon.size, icon.color, false)
}

/// Lay out and draw a single line of text. Hover-only, so the enclosing
/// pressable keeps receiving the clicks.
fn paint_glyphs(ui: &mut Ui, text: &str, size: f32, color: Color32, strong: bool) -> Response {
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);
    let (rect, response) = ui.allocate_exact_size(galley.size(), Sense::hover());
    if ui.is_rect_visible(rect) {
        if strong {
            // No bold face in the default fonts; overstrike instead
            ui.painter()
                .galley(rect.min + Vec2::new(0.5, 0.0), galley.clone(), color);
        }
        ui.painter().galley(rect.min, galley, color);
    }
    response
}

fn paint_pressable(ui: &mut Ui, pressable: &Pressable) -> Response {
    let style = &pressable.style;
    let area = match style.fixed_size() {
        Some(size) => paint_fixed(ui, style, size, |ui| {
            paint(ui, &pressable.content);
        }),
        None => {
            frame_for(style)
                .show(ui, |ui| {
                    if let Some(width) = style.width {
                        ui.set_min_width((width - style.padding.x * 2.0).max(0.0));
                    }
                    paint(ui, &pressable.content);
                })
                .response
        }
    };
    paint_border(ui, style, &area);

    let mut response = area.interact(Sense::click());

    if response.is_pointer_button_down_on() {
        // Fade the content toward the backdrop while held
        let veil = with_opacity(ui.visuals().panel_fill, 1.0 - pressable.active_opacity);
        ui.painter()
            .rect_filled(response.rect, Rounding::same(style.corner_radius), veil);
    }

    if let Some(tooltip) = pressable
        .attributes
        .get(ATTR_TOOLTIP)
        .and_then(serde_json::Value::as_str)
    {
        response = response.on_hover_text(tooltip.to_owned());
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}
