#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use career_quiz::QuizApp;

    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Career Quiz for Kids",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}

// El build WASM entra por la librería, no por este binario.
#[cfg(target_arch = "wasm32")]
fn main() {}
