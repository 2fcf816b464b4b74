//! Plain-text and JSON renderings of a comparison, used by the `report`
//! subcommand.

use std::fmt::Write;

use crate::error::Result;
use crate::types::collocation::{Comparison, WordPanel};

const BAR_WIDTH: usize = 30;

/// Bar lengths scaled so the largest frequency spans `width` cells.
pub fn bar_lengths(frequencies: &[u32], width: usize) -> Vec<usize> {
    let max = frequencies.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0; frequencies.len()];
    }
    frequencies
        .iter()
        .map(|&f| ((f as f64 / max as f64) * width as f64).round() as usize)
        .collect()
}

fn render_panel(out: &mut String, panel: &WordPanel) {
    let _ = writeln!(out, "### {}", panel.heading());
    let _ = writeln!(out, "{:<10}\t{:>4}", "연어", "빈도");
    for row in &panel.rows {
        let _ = writeln!(out, "{:<10}\t{:>4}", row.collocate, row.frequency);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", panel.chart_title());
    let frequencies: Vec<u32> = panel.rows.iter().map(|r| r.frequency).collect();
    for (row, len) in panel.rows.iter().zip(bar_lengths(&frequencies, BAR_WIDTH)) {
        let _ = writeln!(out, "{:<10}\t{} {}", row.collocate, "█".repeat(len), row.frequency);
    }
}

pub fn render_text(comparison: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==\n", comparison.title());
    render_panel(&mut out, &comparison.first);
    out.push('\n');
    render_panel(&mut out, &comparison.second);
    out.push('\n');
    let _ = writeln!(out, "== 연어 분석 해석 ==\n");
    out.push_str(&comparison.narrative);
    out.push('\n');
    out
}

pub fn render_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::types::collocation::CollocationRecord;

    fn records() -> Vec<CollocationRecord> {
        [("꽃", "봄", 20), ("꽃", "예쁜", 40), ("플라워", "샵", 0)]
            .into_iter()
            .map(|(w, c, f)| CollocationRecord {
                word: w.to_string(),
                collocate: c.to_string(),
                frequency: f,
            })
            .collect()
    }

    #[test]
    fn bars_scale_to_the_largest() {
        assert_eq!(bar_lengths(&[40, 20, 0], 10), vec![10, 5, 0]);
        assert_eq!(bar_lengths(&[0, 0], 10), vec![0, 0]);
        assert!(bar_lengths(&[], 10).is_empty());
    }

    #[test]
    fn text_lists_rows_in_display_order() {
        let text = render_text(&compare(&records(), "꽃", "플라워"));
        let spring = text.find("봄").unwrap();
        let pretty = text.find("예쁜").unwrap();
        assert!(pretty < spring);
        assert!(text.contains("'꽃'와(과) '플라워'의 연어 비교"));
        assert!(text.contains("연어 분석 해석"));
        assert!(text.contains("화훼 산업"));
    }

    #[test]
    fn json_round_trips_structure() {
        let comparison = compare(&records(), "꽃", "플라워");
        let json = render_json(&comparison).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["first"]["word"], "꽃");
        assert_eq!(value["first"]["rows"][0]["frequency"], 40);
        assert_eq!(value["second"]["rows"][0]["collocate"], "샵");
    }
}
