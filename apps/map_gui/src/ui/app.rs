use std::{sync::Arc, time::Duration};

use client_core::{MapView, SubmissionStatus, SubmissionWorkflow};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::map_canvas::show_map;

const INPUT_PLACEHOLDER: &str =
    r#"{"points" : [{ "lat": 40.7128, "lng": -74.0060 },{ "lat": 34.0522, "lng": -118.2437 }]}"#;

pub struct MapGuiApp {
    workflow: Arc<SubmissionWorkflow>,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    input: String,
    /// Set between queueing a submit and hearing back, so the buttons lock
    /// before the backend has picked the command up.
    submit_pending: bool,
    bridge_error: Option<String>,
}

impl MapGuiApp {
    pub fn new(
        workflow: Arc<SubmissionWorkflow>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let input = workflow.input();
        Self {
            workflow,
            cmd_tx,
            ui_rx,
            input,
            submit_pending: false,
            bridge_error: None,
        }
    }

    fn busy(&self) -> bool {
        self.submit_pending || self.workflow.is_loading()
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SubmissionFinished(status) => {
                    self.submit_pending = false;
                    match &status {
                        SubmissionStatus::Failed(message) => {
                            tracing::warn!(%message, "submission failed")
                        }
                        _ => tracing::info!(?status, "submission finished"),
                    }
                }
                UiEvent::BackendFailed(message) => {
                    self.submit_pending = false;
                    tracing::error!(%message, "backend failure");
                    self.bridge_error = Some(message);
                }
            }
        }
    }

    fn submit(&mut self) {
        if !self.workflow.can_submit() {
            return;
        }
        self.submit_pending = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitInput,
            &mut self.bridge_error,
        );
    }

    fn clear(&mut self) {
        if self.workflow.clear() {
            self.input.clear();
            self.bridge_error = None;
        }
    }

    fn show_input_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("coordinates_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                let busy = self.busy();
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Paste coordinates JSON:").strong());
                ui.add_space(4.0);

                let editor = egui::TextEdit::multiline(&mut self.input)
                    .hint_text(INPUT_PLACEHOLDER)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(24);
                if ui.add_enabled(!busy, editor).changed() {
                    self.workflow.set_input(self.input.clone());
                }

                ui.add_space(6.0);
                if let Some(error) = &self.bridge_error {
                    ui.colored_label(egui::Color32::from_rgb(220, 60, 60), error.as_str());
                }
                match self.workflow.status() {
                    SubmissionStatus::Succeeded(message) => {
                        ui.colored_label(egui::Color32::from_rgb(40, 160, 80), message);
                    }
                    SubmissionStatus::Failed(message) => {
                        ui.colored_label(egui::Color32::from_rgb(220, 60, 60), message);
                    }
                    SubmissionStatus::Idle | SubmissionStatus::Loading => {}
                }

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    let clear = egui::Button::new("Clear");
                    if ui
                        .add_enabled(!busy && self.workflow.can_clear(), clear)
                        .clicked()
                    {
                        self.clear();
                    }

                    let label = if busy { "Submitting..." } else { "Submit" };
                    let submit = egui::Button::new(egui::RichText::new(label).strong());
                    if ui
                        .add_enabled(!busy && self.workflow.can_submit(), submit)
                        .clicked()
                    {
                        self.submit();
                    }
                });
            });
    }

    fn show_map_panel(&mut self, ctx: &egui::Context) {
        let view = MapView::from_state(&self.workflow.store().snapshot());
        egui::CentralPanel::default().show(ctx, |ui| show_map(ui, &view));
    }
}

impl eframe::App for MapGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_input_panel(ctx);
        self.show_map_panel(ctx);

        if self.busy() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
