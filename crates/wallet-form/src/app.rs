//! Main application state and update loop

use eframe::egui;
use wallet_form_adapters::FormShellConfig;
use wallet_form_core::{EngineCall, EngineCallReport, LoadOutcome};

use crate::bridge::AppBridge;
use crate::state::WalletFormUiState;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 112, 243);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const INFO_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 170, 120);

/// Button text for each engine call, reused in status lines.
fn action_label(call: EngineCall) -> &'static str {
    match call {
        EngineCall::Restore => "Create wallet",
        EngineCall::Sync => "Sync",
    }
}

/// The main application state
pub struct App {
    form: WalletFormUiState,
    bridge: AppBridge,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: FormShellConfig) -> Self {
        let mut bridge = AppBridge::from_config(&config);
        let form = match bridge.initialize() {
            LoadOutcome::Restored => WalletFormUiState::from_record(bridge.record()),
            LoadOutcome::FreshStart(e) => {
                tracing::info!("no saved form state: {e}");
                WalletFormUiState::default()
            }
        };

        Self { form, bridge }
    }

    fn dispatch(&mut self, ctx: &egui::Context, call: EngineCall) {
        self.form.clear_notice();
        self.form.in_flight = Some(call);
        let ctx = ctx.clone();
        self.bridge
            .dispatch(self.form.to_record(), call, move || ctx.request_repaint());
    }

    fn check_engine_report(&mut self) {
        if let Some(report) = self.bridge.take_report() {
            self.form.in_flight = None;
            self.apply_report(report);
        }
    }

    fn apply_report(&mut self, report: EngineCallReport) {
        let action = action_label(report.call);
        match (&report.result, &report.persist_error) {
            (Err(e), _) => self.form.set_error(format!("{action} failed: {e}")),
            (Ok(()), Some(e)) => {
                self.form
                    .set_error(format!("{action} finished, but the form was not saved: {e}"))
            }
            (Ok(()), None) => self.form.set_info(format!("{action} finished")),
        }
    }

    fn save(&mut self) {
        match self.bridge.save(self.form.to_record()) {
            Ok(()) => self.form.set_info("Form saved"),
            Err(e) => self.form.set_error(e.to_string()),
        }
    }

    fn reset(&mut self) {
        let result = self.bridge.reset_to_defaults();
        self.form.apply_record(self.bridge.record());
        match result {
            Ok(()) => self.form.set_info("Reset to defaults"),
            Err(e) => self.form.set_error(e.to_string()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_engine_report();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(egui::RichText::new("Wallet").size(22.0).color(ACCENT));
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_form(ui);
                ui.add_space(12.0);
                self.render_actions(ui, ctx);
                ui.add_space(8.0);
                self.render_notice(ui);
            });
        });
    }
}

impl App {
    fn render_form(&mut self, ui: &mut egui::Ui) {
        let editable = !self.form.is_busy();

        egui::Grid::new("wallet_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Node URL:");
                ui.add_enabled(
                    editable,
                    egui::TextEdit::singleline(&mut self.form.tendermint_url)
                        .hint_text("ws://localhost:26657/websocket")
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();

                ui.label("Wallet name:");
                ui.add_enabled(
                    editable,
                    egui::TextEdit::singleline(&mut self.form.name).desired_width(f32::INFINITY),
                );
                ui.end_row();

                ui.label("Passphrase:");
                ui.add_enabled(
                    editable,
                    egui::TextEdit::singleline(&mut self.form.passphrase)
                        .password(true)
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label("Encryption key:");
        ui.add_enabled(
            editable,
            egui::TextEdit::multiline(&mut self.form.encryption_key)
                .desired_rows(2)
                .font(egui::TextStyle::Monospace)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(8.0);
        ui.label("Mnemonics:");
        ui.add_enabled(
            editable,
            egui::TextEdit::multiline(&mut self.form.mnemonics)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
    }

    fn render_actions(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let idle = !self.form.is_busy();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(idle, egui::Button::new(action_label(EngineCall::Restore)))
                .clicked()
            {
                self.dispatch(ctx, EngineCall::Restore);
            }
            if ui
                .add_enabled(idle, egui::Button::new(action_label(EngineCall::Sync)))
                .clicked()
            {
                self.dispatch(ctx, EngineCall::Sync);
            }
            ui.separator();
            if ui.add_enabled(idle, egui::Button::new("Save")).clicked() {
                self.save();
            }
            if ui
                .add_enabled(idle, egui::Button::new("Reset to defaults"))
                .clicked()
            {
                self.reset();
            }
            if let Some(call) = self.form.in_flight {
                ui.spinner();
                ui.label(format!("{} running...", action_label(call)));
            }
        });
    }

    fn render_notice(&self, ui: &mut egui::Ui) {
        if let Some(err) = &self.form.last_error {
            ui.colored_label(ERROR_COLOR, err);
        } else if let Some(info) = &self.form.last_info {
            ui.colored_label(INFO_COLOR, info);
        }
    }
}
