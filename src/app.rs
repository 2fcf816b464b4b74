use eframe::{egui, App};
use std::path::PathBuf;

use crate::chart::{bar_chart, SET2_FIRST, SET2_SECOND};
use crate::dashboard::{Dashboard, Menu};
use crate::fonts::install_hangul_font;
use crate::types::collocation::WordPanel;

pub const WINDOW_TITLE: &str = "외래어 분석 도구";
const PAGE_TITLE: &str = "외래어 사용 패턴 분석 도구";
const PAGE_INTRO: &str =
    "연어 분석을 통해 외래어의 사용과 한국어의 사용이 어떠한 차이점을 가지게 되는지 알아본다";

pub struct CollocationApp {
    dashboard: Dashboard,
    menu: Menu,
    font_path: Option<PathBuf>,
    font_loaded: Option<PathBuf>,
    show_raw_records: bool,
}

impl CollocationApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dashboard: Dashboard, font_path: Option<PathBuf>) -> Self {
        let font_loaded = install_hangul_font(&cc.egui_ctx, font_path.as_deref());
        Self {
            dashboard,
            menu: Menu::default(),
            font_path,
            font_loaded,
            show_raw_records: false,
        }
    }

    fn word_selectors(&mut self, ui: &mut egui::Ui) {
        let words = self.dashboard.words().to_vec();
        let mut first = self.dashboard.first_index();
        let mut second = self.dashboard.second_index();

        ui.columns(2, |columns| {
            egui::ComboBox::from_label("첫 번째 단어 선택")
                .selected_text(self.dashboard.first_word())
                .show_index(&mut columns[0], &mut first, words.len(), |i| words[i].clone());
            egui::ComboBox::from_label("두 번째 단어 선택")
                .selected_text(self.dashboard.second_word())
                .show_index(&mut columns[1], &mut second, words.len(), |i| words[i].clone());
        });

        // The first selector wins when both change in one frame, since it
        // resets the second.
        if first != self.dashboard.first_index() {
            self.dashboard.select_first(first);
        } else if second != self.dashboard.second_index() {
            self.dashboard.select_second(second);
        }
    }

    fn collocation_page(&mut self, ui: &mut egui::Ui) {
        ui.heading("연어 분석");
        ui.add_space(4.0);
        self.word_selectors(ui);
        ui.separator();

        let comparison = self.dashboard.comparison().clone();
        ui.heading(comparison.title());
        ui.columns(2, |columns| {
            word_panel(&mut columns[0], &comparison.first, "first", SET2_FIRST);
            word_panel(&mut columns[1], &comparison.second, "second", SET2_SECOND);
        });
        ui.separator();

        ui.heading("연어 분석 해석");
        ui.label(&comparison.narrative);
        ui.separator();

        ui.collapsing("생성된 데이터 (JSON)", |ui| {
            ui.checkbox(&mut self.show_raw_records, "전체 레코드 표시");
            if self.show_raw_records {
                match serde_json::to_string_pretty(self.dashboard.records()) {
                    Ok(json) => {
                        let mut json_display = json;
                        ui.add(
                            egui::TextEdit::multiline(&mut json_display)
                                .font(egui::TextStyle::Monospace)
                                .desired_width(f32::INFINITY)
                                .interactive(false)
                                .frame(true),
                        );
                    }
                    Err(e) => {
                        ui.colored_label(egui::Color32::RED, format!("JSON serialization failed: {}", e));
                    }
                }
            }
        });
    }
}

fn word_panel(ui: &mut egui::Ui, panel: &WordPanel, id: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(panel.heading()).heading());
    egui::Grid::new(format!("collocation_table_{}", id))
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            ui.strong("연어");
            ui.strong("빈도");
            ui.end_row();
            for row in &panel.rows {
                ui.label(&row.collocate);
                ui.label(row.frequency.to_string());
                ui.end_row();
            }
        });
    ui.add_space(8.0);
    bar_chart(ui, panel, color);
}

impl App for CollocationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("side_panel_menu").min_width(180.0).show(ctx, |ui| {
            ui.heading("메뉴");
            ui.separator();
            ui.label("분석 도구 선택");
            for menu in Menu::ALL {
                ui.radio_value(&mut self.menu, menu, menu.label());
            }
            ui.separator();
            if ui.button("데이터 다시 생성").clicked() {
                self.dashboard.recompute();
            }
            ui.label(format!("생성 횟수: {}", self.dashboard.generation()));
            ui.separator();
            ui.collapsing("Font", |ui| match &self.font_loaded {
                Some(path) => {
                    ui.colored_label(egui::Color32::GREEN, path.display().to_string());
                }
                None => {
                    ui.colored_label(egui::Color32::RED, "No Hangul font found.");
                    if let Some(configured) = &self.font_path {
                        ui.label(format!("Configured: {}", configured.display()));
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(PAGE_TITLE);
                    ui.label(PAGE_INTRO);
                    ui.separator();
                    match self.menu {
                        Menu::Collocation => self.collocation_page(ui),
                    }
                });
        });
    }
}
