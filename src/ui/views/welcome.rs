use egui::{Align, Button, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let total_personality = app.engine.total_personality();
    let total_logical = app.engine.total_logical();

    centered_panel(ctx, 300.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("🔮").size(56.0));
            ui.add_space(8.0);
            ui.heading("What will YOU be when you grow up?");
            ui.add_space(10.0);
            ui.label("Answer a few fun questions and we will predict your future career!");
            ui.add_space(4.0);
            ui.label(format!(
                "{total_personality} personality questions + {total_logical} brain teasers"
            ));
            ui.add_space(20.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let start = ui.add_sized([btn_w, 44.0], Button::new("🚀 Start the adventure"));
            if start.clicked() {
                app.start_quiz(now);
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(&app.message);
            }
        });
    });
}
