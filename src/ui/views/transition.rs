use egui::{Align, Button, Context, RichText};

use crate::QuizApp;
use crate::ui::layout::centered_panel;

pub fn ui_transition(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    centered_panel(ctx, 280.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.label(RichText::new("🎉").size(56.0));
            ui.add_space(8.0);
            ui.heading("Awesome, all done!");
            ui.add_space(10.0);
            ui.label(
                "Your answers are in and your future career is taking shape. \
                 Before the big reveal, let's warm up your brain with a few quick puzzles!",
            );
            ui.add_space(20.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let go = ui.add_sized([btn_w, 44.0], Button::new("🧠 Start the brain games"));
            if go.clicked() {
                app.continue_to_logical(now);
            }
        });
    });
}
