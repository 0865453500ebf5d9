use crate::QuizApp;
use crate::app::TOPIC_PRESETS;
use crate::model::Difficulty;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText, Slider, TextEdit};

pub fn ui_setup(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 430.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🧠 Generador de Quiz con IA");
            ui.add_space(4.0);
            ui.label("Elige un tema y una dificultad; las preguntas las escribe el modelo.");
        });
        ui.add_space(14.0);

        // 1) Tema: lista de presets + campo libre
        ui.label(RichText::new("Tema").strong());
        ui.add_space(4.0);
        for (i, preset) in TOPIC_PRESETS.iter().enumerate() {
            let marked = !app.use_custom_topic && app.selected_topic == i;
            if ui.radio(marked, *preset).clicked() {
                app.use_custom_topic = false;
                app.selected_topic = i;
            }
        }
        ui.horizontal(|ui| {
            if ui.radio(app.use_custom_topic, "Tema libre:").clicked() {
                app.use_custom_topic = true;
            }
            ui.add_enabled(
                app.use_custom_topic,
                TextEdit::singleline(&mut app.custom_topic).hint_text("Escribe un tema..."),
            );
        });

        ui.add_space(12.0);

        // 2) Dificultad
        ui.label(RichText::new("Dificultad").strong());
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            for difficulty in Difficulty::ALL {
                ui.radio_value(&mut app.difficulty, difficulty, difficulty.label());
            }
        });

        ui.add_space(8.0);

        // 3) Número de preguntas
        ui.add(Slider::new(&mut app.question_count, 3..=10).text("preguntas"));

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui
                .add_sized([220.0, 40.0], Button::new("⚡ Generar quiz"))
                .clicked()
            {
                app.empezar_generacion();
            }
        });

        if !app.generator.has_model() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("⚠ Sin GEMINI_API_KEY: se usarán preguntas de ejemplo.")
                        .color(egui::Color32::YELLOW),
                );
            });
        }

        // Mensaje de error / info
        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&app.message)
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            });
        }
    });
}
