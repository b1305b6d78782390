//! Colour palette and style helpers for FrigateReview's dark theme.

use egui::Color32;

use frigate_review::core::review_segment::Severity;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background.
pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 30);

/// Panel / sheet background.
pub const BG_PANEL: Color32 = Color32::from_rgb(32, 32, 40);

/// Even rows in the review table.
pub const BG_TABLE_ROW_EVEN: Color32 = Color32::from_rgb(28, 28, 36);

/// Currently selected / highlighted row.
pub const BG_SELECTED: Color32 = Color32::from_rgb(52, 60, 92);

/// Action chip fill.
pub const CHIP_BG: Color32 = Color32::from_rgb(107, 114, 128);

/// Darkest edge of the snapshot scrims (black at 20 %).
pub const SCRIM: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 51);

// ── Text colours ────────────────────────────────────────────────────────

/// Primary text colour.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 220, 228);

/// Secondary / muted text.
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 150, 165);

/// Field captions ("Camera", "Timestamp"): primary at 40 %.
pub const TEXT_DIM: Color32 = Color32::from_rgb(105, 105, 118);

// ── Severity colours ────────────────────────────────────────────────────

pub const SEVERITY_ALERT: Color32 = Color32::from_rgb(239, 68, 68);

pub const SEVERITY_DETECTION: Color32 = Color32::from_rgb(234, 179, 8);

// ── Accent colours ──────────────────────────────────────────────────────

/// Primary accent.
pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);

/// Dimmer accent for secondary highlights.
pub const ACCENT_DIM: Color32 = Color32::from_rgb(70, 120, 190);

/// Warnings in the status bar and dialogs.
pub const WARNING: Color32 = Color32::from_rgb(224, 168, 64);

// ── Helpers ─────────────────────────────────────────────────────────────

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Alert => SEVERITY_ALERT,
        Severity::Detection => SEVERITY_DETECTION,
    }
}

/// Apply the FrigateReview dark theme to the given egui context.
///
/// Called once during initialisation.
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    // Background tones
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_TABLE_ROW_EVEN;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    // Widget resting state
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 58);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(40, 40, 52);

    // Widget hover state
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(58, 58, 74);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.widgets.active.bg_fill = Color32::from_rgb(68, 68, 88);

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    // Selection
    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(52, 52, 66));

    ctx.set_visuals(visuals);
}

/// Paint a vertical gradient from `top` to `bottom` over `rect`.
///
/// Used for the scrims over event snapshots.
pub fn paint_vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: Color32, bottom: Color32) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}
