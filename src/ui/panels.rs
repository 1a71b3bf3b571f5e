use egui::{Context, RichText, ScrollArea, TextEdit, Ui};

use crate::geometry::{Control, ParamBinding, ParamDomain, ShapeKind};
use crate::ui::state::UiState;
use crate::ui::theme::*;

pub struct UiActions {
    /// A different shape was picked; rebuild the generator with defaults.
    pub select_shape: Option<ShapeKind>,
    /// A parameter changed; regenerate with the current generator.
    pub regenerate: bool,
}

impl Default for UiActions {
    fn default() -> Self {
        Self {
            select_shape: None,
            regenerate: false,
        }
    }
}

pub fn draw_side_panel(
    ctx: &Context,
    state: &mut UiState,
    controls: &mut [Control<'_>],
    last_error: &Option<String>,
    fps: f32,
) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(280.0)
        .max_width(380.0)
        .default_width(310.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("Shape Viewer").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Procedural Geometry Playground")
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "SHAPE");
                egui::ComboBox::from_id_salt("shape_picker")
                    .selected_text(state.shape.label())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for kind in ShapeKind::ALL {
                            if ui
                                .selectable_label(state.shape == kind, kind.label())
                                .clicked()
                                && state.shape != kind
                            {
                                state.shape = kind;
                                actions.select_shape = Some(kind);
                            }
                        }
                    });
                ui.add_space(16.0);

                if !controls.is_empty() {
                    section_header(ui, "PARAMETERS");
                    for control in controls.iter_mut() {
                        if draw_control(ui, control) {
                            control.clamp();
                            actions.regenerate = true;
                        }
                    }
                    ui.add_space(16.0);
                }

                if let Some(err) = last_error {
                    error_frame(ui, err);
                    ui.add_space(16.0);
                }

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "VIEW");
                ui.checkbox(&mut state.show_grid, "Show Grid");
                ui.checkbox(&mut state.auto_rotate, "Auto Rotate");
                ui.add_space(16.0);

                section_header(ui, "PERFORMANCE");
                ui.horizontal(|ui| {
                    ui.checkbox(&mut state.vsync_enabled, "VSync");
                    ui.checkbox(&mut state.show_stats, "Stats");
                });

                if state.show_stats {
                    ui.add_space(8.0);
                    let fps_color = if fps >= 60.0 {
                        ACCENT_GREEN
                    } else if fps >= 30.0 {
                        ACCENT_ORANGE
                    } else {
                        ACCENT_RED
                    };
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("FPS").color(TEXT_MUTED));
                        ui.label(RichText::new(format!("{fps:.0}")).color(fps_color));
                    });
                }
            });
        });

    actions
}

/// One widget per declared parameter domain. Returns true when the value
/// was committed this frame.
fn draw_control(ui: &mut Ui, control: &mut Control<'_>) -> bool {
    let key = control.spec.key;
    match (&mut control.binding, control.spec.domain) {
        (ParamBinding::Float(value), ParamDomain::Range { min, max, step }) => {
            let slider = egui::Slider::new(&mut **value, min as f32..=max as f32)
                .text(key)
                .step_by(step);
            ui.add(slider).changed()
        }
        (ParamBinding::Int(value), ParamDomain::IntRange { min, max }) => ui
            .add(egui::Slider::new(&mut **value, min..=max).text(key))
            .changed(),
        (ParamBinding::Bool(value), ParamDomain::Toggle) => {
            ui.checkbox(&mut **value, key).changed()
        }
        (ParamBinding::Text(value), ParamDomain::Text) => {
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label(key);
                changed = ui
                    .add(TextEdit::singleline(&mut **value).desired_width(f32::INFINITY))
                    .changed();
            });
            changed
        }
        // A binding that disagrees with its declared domain draws nothing.
        _ => false,
    }
}

fn error_frame(ui: &mut Ui, err: &str) {
    egui::Frame::default()
        .fill(egui::Color32::from_rgb(40, 15, 15))
        .stroke(egui::Stroke::new(1.0, ACCENT_RED))
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(err).color(ACCENT_RED).size(11.0));
        });
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

pub fn draw_help_overlay(ctx: &Context) {
    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(egui::Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(
                        RichText::new("LMB+Drag - Orbit | RMB+Drag - Pan | Scroll - Zoom")
                            .color(TEXT_MUTED),
                    );
                });
        });
}
