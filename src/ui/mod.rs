pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::{QuizPhase, Screen};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge lo que hayan terminado las tareas remotas.
        self.poll_store_tasks();

        // Un repintado por segundo mientras corre el cronómetro; más corto
        // mientras hay trabajo remoto pendiente que recoger.
        if self.timer.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
        if self.store_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por pantalla y fase a las funciones de views
        match self.screen {
            Screen::AdminLogin => views::admin_login::ui_admin_login(self, ctx),
            Screen::AdminDashboard => views::admin_dashboard::ui_admin_dashboard(self, ctx),
            Screen::Quiz => match self.engine.phase() {
                QuizPhase::Welcome => views::welcome::ui_welcome(self, ctx),
                QuizPhase::Personality => views::personality::ui_personality(self, ctx),
                QuizPhase::Transition => views::transition::ui_transition(self, ctx),
                QuizPhase::Logical => views::logical::ui_logical(self, ctx),
                QuizPhase::Result => views::result::ui_result(self, ctx),
            },
        }
    }
}
