use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

const FONT_KEY: &str = "hangul";

/// Where common desktop installs keep a font with Hangul coverage.
const SYSTEM_CANDIDATES: &[&str] = &[
    "C:\\Windows\\Fonts\\malgun.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
];

pub fn font_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_CANDIDATES.iter().map(|p| PathBuf::from(*p)))
        .collect()
}

/// Registers the first readable candidate as a fallback for both font
/// families. egui's bundled fonts have no Hangul glyphs.
pub fn install_hangul_font(ctx: &egui::Context, configured: Option<&Path>) -> Option<PathBuf> {
    for path in font_candidates(configured) {
        let Ok(bytes) = fs::read(&path) else {
            continue;
        };
        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert(FONT_KEY.to_owned(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts.families.entry(family).or_default().push(FONT_KEY.to_owned());
        }
        ctx.set_fonts(fonts);
        info!(path = %path.display(), "installed Hangul font");
        return Some(path);
    }
    warn!("no Hangul font found; Korean text will render as boxes (set ui.font_path)");
    None
}
