use ai_quiz::QuizApp;
use dotenv::dotenv;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // .env primero, para que la clave de Gemini ya esté en el entorno
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("arrancando AI Quiz Generator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI Quiz Generator",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
