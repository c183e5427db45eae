// Shell colors and egui style

use eframe::egui::{self, Color32, Stroke};

pub mod colors {
    use eframe::egui::Color32;

    pub const BG_DARK: Color32 = Color32::from_rgb(14, 16, 20);
    pub const BG_MID: Color32 = Color32::from_rgb(24, 27, 33);
    pub const BG_LIGHT: Color32 = Color32::from_rgb(36, 40, 48);
    pub const ACCENT: Color32 = Color32::from_rgb(80, 180, 255);
    pub const SELECTION_BG: Color32 = Color32::from_rgb(30, 70, 110);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 236);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 126, 136);
}

pub fn focus_stroke() -> Stroke {
    Stroke::new(2.0, colors::ACCENT)
}

/// Frame around a focusable region, outlined while it owns focus
pub fn region_frame(focused: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_LIGHT)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(12))
        .stroke(if focused { focus_stroke() } else { Stroke::new(1.0, Color32::TRANSPARENT) })
}

/// Dark visuals plus the phosphor icon font
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = colors::BG_MID;
    visuals.window_fill = colors::BG_DARK;
    visuals.extreme_bg_color = colors::BG_DARK;
    visuals.selection.bg_fill = colors::SELECTION_BG;
    visuals.selection.stroke = focus_stroke();
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}
