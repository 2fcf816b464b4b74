use egui::{Align2, Color32, FontId, Rect, Sense, Stroke};

use crate::types::collocation::WordPanel;

/// First two colours of the Set2 qualitative palette.
pub const SET2_FIRST: Color32 = Color32::from_rgb(0x66, 0xc2, 0xa5);
pub const SET2_SECOND: Color32 = Color32::from_rgb(0xfc, 0x8d, 0x62);

const CHART_HEIGHT: f32 = 260.0;
const AXIS_MARGIN: f32 = 28.0;
const LABEL_BAND: f32 = 22.0;

/// Bar heights as a fraction of the tallest bar.
pub fn bar_fractions(frequencies: &[u32]) -> Vec<f32> {
    let max = frequencies.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; frequencies.len()];
    }
    frequencies.iter().map(|&f| f as f32 / max as f32).collect()
}

/// Vertical bar chart of one panel: collocates on x, frequency on y.
pub fn bar_chart(ui: &mut egui::Ui, panel: &WordPanel, color: Color32) {
    ui.label(egui::RichText::new(panel.chart_title()).strong());
    let width = ui.available_width().max(200.0);
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let visuals = ui.visuals();
    let text_color = visuals.text_color();

    let plot = Rect::from_min_max(
        egui::pos2(rect.left() + AXIS_MARGIN, rect.top() + 8.0),
        egui::pos2(rect.right() - 4.0, rect.bottom() - LABEL_BAND),
    );
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], Stroke::new(1.0, text_color));
    painter.line_segment([plot.left_bottom(), plot.left_top()], Stroke::new(1.0, text_color));

    let max = panel.max_frequency();
    painter.text(
        plot.left_top() - egui::vec2(4.0, 0.0),
        Align2::RIGHT_TOP,
        max.to_string(),
        FontId::proportional(11.0),
        text_color,
    );

    if panel.rows.is_empty() {
        return;
    }
    let frequencies: Vec<u32> = panel.rows.iter().map(|r| r.frequency).collect();
    let slot = plot.width() / panel.rows.len() as f32;
    for (i, (row, fraction)) in panel.rows.iter().zip(bar_fractions(&frequencies)).enumerate() {
        let x0 = plot.left() + slot * i as f32 + slot * 0.15;
        let x1 = x0 + slot * 0.7;
        let top = plot.bottom() - plot.height() * fraction;
        let bar = Rect::from_min_max(egui::pos2(x0, top), egui::pos2(x1, plot.bottom()));
        painter.rect_filled(bar, 2.0, color);
        painter.text(
            egui::pos2(bar.center().x, top - 2.0),
            Align2::CENTER_BOTTOM,
            row.frequency.to_string(),
            FontId::proportional(11.0),
            text_color,
        );
        painter.text(
            egui::pos2(bar.center().x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            &row.collocate,
            FontId::proportional(12.0),
            text_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_are_relative_to_max() {
        assert_eq!(bar_fractions(&[50, 25, 0]), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn all_zero_is_flat() {
        assert_eq!(bar_fractions(&[0, 0, 0]), vec![0.0, 0.0, 0.0]);
        assert!(bar_fractions(&[]).is_empty());
    }
}
