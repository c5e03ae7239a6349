//! Glücksrad.
//!
//! Entscheidungsrad mit egui: Optionen pflegen, Rad drehen,
//! benannte Räder speichern und wieder laden.

use eframe::egui;
use gluecksrad::{ui, AppController, AppIntent, AppState, WheelOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Glücksrad v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 640.0])
                .with_title("Glücksrad"),
            ..Default::default()
        };

        eframe::run_native(
            "Glücksrad",
            options,
            Box::new(|_cc| Ok(Box::new(WheelApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct WheelApp {
    state: AppState,
    controller: AppController,
}

impl WheelApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = WheelOptions::config_path();
        let wheel_options = WheelOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = wheel_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for WheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        self.process_events(events);

        self.maybe_request_repaint(ctx);
    }
}

impl WheelApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_edit_panel(ctx, &mut self.state));
        events.extend(ui::collect_keyboard_intents(ctx));
        events.extend(ui::show_clear_confirm_dialog(ctx, &self.state));
        events.extend(ui::show_save_dialog(ctx, &mut self.state.ui));
        events.extend(ui::show_load_dialog(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        ui::render_wheel_view(ctx, &self.state);

        // Expliziter Animations-Treiber: solange ein Spin läuft, pro Frame
        // ein Tick mit dem monotonen Zeitstempel des Hosts. Der Controller
        // selbst besitzt keinen Timer.
        if self.state.is_spinning() {
            events.push(AppIntent::AnimationTick {
                now: ctx.input(|i| i.time),
            });
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.is_spinning()
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_clear_confirm
            || self.state.ui.save_dialog.visible
            || self.state.ui.load_dialog.visible
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
