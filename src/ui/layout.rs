use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

use crate::QuizApp;
use crate::model::{QuizPhase, Screen};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| match app.screen {
            Screen::Quiz => {
                if app.engine.phase() == QuizPhase::Welcome {
                    if ui.button("🛡 Admin").clicked() {
                        app.open_admin_login();
                    }
                } else if ui.button("🔄 Start over").clicked() {
                    app.play_again(ctx.input(|i| i.time));
                }
            }
            // El login de administración lleva sus propios botones.
            Screen::AdminLogin => {}
            Screen::AdminDashboard => {
                if ui.button("🔄 Refresh").clicked() {
                    app.refresh_admin_results();
                }
                if ui.button("🚪 Log out").clicked() {
                    app.admin_logout();
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado vertical y horizontalmente, con ancho máximo de contenido.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
