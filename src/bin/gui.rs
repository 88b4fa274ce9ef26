#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 왼쪽은 액체 누출 체적, 오른쪽은 가스 누출 유량 계산기.

use chem_engineering_toolkit::{
    config, labels,
    panel::{GasPanel, SpillPanel},
    spill::SpillShape,
    CalcError,
};
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};

/// 패널 상단 그림 크기(px)
const LOGO_SIZE: u32 = 150;

fn main() -> Result<(), eframe::Error> {
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([980.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config error: {e}");
        config::Config::default()
    });
    eframe::run_native(
        labels::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

/// 작업 디렉터리와 assets/ 에서 그림 파일을 찾는다.
fn find_asset(name: &str) -> Option<String> {
    [name.to_string(), format!("assets/{name}")]
        .into_iter()
        .find(|p| Path::new(p).exists())
}

fn load_image(name: &str) -> Option<image::DynamicImage> {
    let path = find_asset(name)?;
    let bytes = fs::read(&path)
        .map_err(|e| eprintln!("Image read error ({path}): {e}"))
        .ok()?;
    image::load_from_memory(&bytes)
        .map_err(|e| eprintln!("Image decode error ({path}): {e}"))
        .ok()
}

fn load_app_icon() -> Option<egui::IconData> {
    let img = ["icon.png", "burner.png"].iter().find_map(|n| load_image(n))?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 장식용 그림을 150×150 으로 줄여 텍스처로 올린다. 파일이 없으면 None.
fn load_logo(ctx: &egui::Context, name: &str) -> Option<egui::TextureHandle> {
    let img = load_image(name)?.resize_exact(
        LOGO_SIZE,
        LOGO_SIZE,
        image::imageops::FilterType::Lanczos3,
    );
    let size = [img.width() as usize, img.height() as usize];
    let pixels = img.to_rgba8().into_raw();
    let color = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
    Some(ctx.load_texture(name, color, egui::TextureOptions::LINEAR))
}

/// 오류 대화상자 내용.
struct ErrorDialog {
    title: String,
    message: String,
}

struct GuiApp {
    config: config::Config,
    spill: SpillPanel,
    gas: GasPanel,
    spill_logo: Option<egui::TextureHandle>,
    gas_logo: Option<egui::TextureHandle>,
    logos_loaded: bool,
    error_dialog: Option<ErrorDialog>,
    show_settings: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        Self {
            spill: SpillPanel::new(config.default_shape, config.clear_inputs_on_success),
            gas: GasPanel::default(),
            config,
            spill_logo: None,
            gas_logo: None,
            logos_loaded: false,
            error_dialog: None,
            show_settings: false,
            settings_status: None,
        }
    }

    fn show_error(&mut self, err: &CalcError) {
        self.error_dialog = Some(ErrorDialog {
            title: labels::error_title(err).to_string(),
            message: err.to_string(),
        });
    }

    /// 설정 변경을 패널에 반영한다.
    fn apply_config(&mut self) {
        self.spill.clear_inputs_on_success = self.config.clear_inputs_on_success;
    }

    fn ui_spill(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                logo(ui, self.spill_logo.as_ref());
                ui.heading(labels::SPILL_TITLE);
            });
            ui.add_space(8.0);
            ui.label(labels::SPILL_SELECT_SHAPE);
            for shape in SpillShape::ALL {
                ui.radio_value(
                    &mut self.spill.form.shape,
                    shape.as_str().to_string(),
                    shape.as_str(),
                );
            }
            ui.add_space(8.0);
            egui::Grid::new("spill_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(labels::LABEL_LENGTH);
                    ui.text_edit_singleline(&mut self.spill.form.length);
                    ui.end_row();
                    ui.label(labels::LABEL_WIDTH);
                    ui.text_edit_singleline(&mut self.spill.form.width);
                    ui.end_row();
                    ui.label(labels::LABEL_DEPTH);
                    ui.text_edit_singleline(&mut self.spill.form.depth);
                    ui.end_row();
                });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(labels::BUTTON_CALCULATE).clicked() {
                    if let Err(e) = self.spill.calculate() {
                        self.show_error(&e);
                    }
                }
                if let Some(text) = &self.spill.result_text {
                    ui.label(text);
                }
            });
        });
    }

    fn ui_gas(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                logo(ui, self.gas_logo.as_ref());
                ui.heading(labels::GAS_TITLE);
            });
            ui.add_space(8.0);
            egui::Grid::new("gas_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let form = &mut self.gas.form;
                    for (label, value) in [
                        (labels::LABEL_DIAMETER, &mut form.orifice_diameter),
                        (labels::LABEL_SOURCE_PRESSURE, &mut form.source_pressure),
                        (labels::LABEL_GAS_TEMPERATURE, &mut form.gas_temperature),
                        (labels::LABEL_DISCHARGE_COEFFICIENT, &mut form.discharge_coefficient),
                    ] {
                        ui.label(label);
                        ui.text_edit_singleline(value);
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(labels::BUTTON_CALCULATE).clicked() {
                    if let Err(e) = self.gas.calculate() {
                        self.show_error(&e);
                    }
                }
                if let Some(text) = &self.gas.result_text {
                    ui.label(text);
                }
            });
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(egui::RichText::new(labels::DISCLAIMER).small());
            });
        });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings;
        let mut save_clicked = false;
        egui::Window::new(labels::SETTINGS_TITLE)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(labels::SETTINGS_DEFAULT_SHAPE);
                ui.horizontal(|ui| {
                    for shape in SpillShape::ALL {
                        ui.radio_value(&mut self.config.default_shape, shape, shape.as_str());
                    }
                });
                ui.checkbox(
                    &mut self.config.clear_inputs_on_success,
                    labels::SETTINGS_CLEAR_INPUTS,
                );
                ui.separator();
                if ui.button(labels::SETTINGS_SAVE).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings = open;
        if save_clicked {
            self.apply_config();
            self.settings_status = Some(match self.config.save() {
                Ok(()) => labels::SETTINGS_SAVED.to_string(),
                Err(e) => format!("{}: {e}", labels::ERROR_PREFIX),
            });
        }
    }

    fn ui_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = &self.error_dialog else {
            return;
        };
        let mut close = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(dialog.message.as_str());
                ui.vertical_centered(|ui| {
                    if ui.button(labels::BUTTON_OK).clicked() {
                        close = true;
                    }
                });
            });
        if close {
            self.error_dialog = None;
        }
    }
}

fn logo(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
    if let Some(tex) = texture {
        let size = egui::vec2(LOGO_SIZE as f32, LOGO_SIZE as f32);
        ui.add(egui::Image::new(egui::load::SizedTexture::new(tex.id(), size)));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 그림은 첫 프레임에 한 번만 올린다
        if !self.logos_loaded {
            self.spill_logo = load_logo(ctx, "spill.png");
            self.gas_logo = load_logo(ctx, "burner.png");
            self.logos_loaded = true;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(labels::APP_TITLE);
                ui.separator();
                if ui.button(labels::SETTINGS_TITLE).clicked() {
                    self.show_settings = true;
                    self.settings_status = None;
                }
            });
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }
        self.ui_error_dialog(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.columns(2, |cols| {
                        self.ui_spill(&mut cols[0]);
                        self.ui_gas(&mut cols[1]);
                    });
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_with_configured_shape() {
        let cfg = config::Config {
            default_shape: SpillShape::Circular,
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg);
        assert_eq!(app.spill.form.shape, "Circular");
        assert!(app.error_dialog.is_none());
    }

    #[test]
    fn calculation_error_opens_input_dialog() {
        let mut app = GuiApp::new(config::Config::default());
        let err = app.spill.calculate().unwrap_err();
        app.show_error(&err);
        let dialog = app.error_dialog.as_ref().unwrap();
        assert_eq!(dialog.title, "Input Error");
        assert_eq!(dialog.message, "Please enter length, width and depth.");
    }

    #[test]
    fn negative_temperature_dialog_names_temperature() {
        let mut app = GuiApp::new(config::Config::default());
        app.gas.form.orifice_diameter = "1".into();
        app.gas.form.source_pressure = "100".into();
        app.gas.form.gas_temperature = "-300".into();
        app.gas.form.discharge_coefficient = "0.8".into();
        let err = app.gas.calculate().unwrap_err();
        app.show_error(&err);
        let dialog = app.error_dialog.as_ref().unwrap();
        assert_eq!(dialog.title, "Calculation Error");
        assert!(dialog.message.contains("Gas temperature"), "{}", dialog.message);
        assert!(!dialog.message.contains("Source pressure"));
    }

    #[test]
    fn apply_config_updates_clear_setting() {
        let mut app = GuiApp::new(config::Config::default());
        app.config.clear_inputs_on_success = false;
        app.apply_config();
        assert!(!app.spill.clear_inputs_on_success);
    }
}
