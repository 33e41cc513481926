//! Map canvas: markers, server bounds rectangle and centroid.

use client_core::{
    view::{FIT_PADDING_PX, MapView},
    MarkerView,
};
use eframe::egui;
use shared::domain::Coordinate;

use crate::ui::projection::Projection;

const WATER: egui::Color32 = egui::Color32::from_rgb(170, 211, 223);
const MARKER_FILL: egui::Color32 = egui::Color32::from_rgb(42, 129, 203);
const BOUNDS_STROKE: egui::Color32 = egui::Color32::from_rgb(51, 136, 255);
const MARKER_RADIUS: f32 = 6.0;
const HOVER_RADIUS: f32 = 10.0;

pub fn show_map(ui: &mut egui::Ui, view: &MapView) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let rect = response.rect;
    let painter = painter.with_clip_rect(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(4), WATER);

    let projection = Projection::for_viewport(
        &view.viewport,
        f64::from(rect.width()),
        f64::from(rect.height()),
        f64::from(FIT_PADDING_PX),
    );
    let to_screen = |coordinate: &Coordinate| {
        let [dx, dy] = projection.project(coordinate);
        rect.center() + egui::vec2(dx as f32, dy as f32)
    };

    if let Some(bounds) = view.rectangle {
        let area = egui::Rect::from_two_pos(
            to_screen(&bounds.south_west()),
            to_screen(&bounds.north_east()),
        );
        painter.rect_filled(
            area,
            egui::CornerRadius::same(0),
            BOUNDS_STROKE.gamma_multiply(0.15),
        );
        painter.rect_stroke(
            area,
            egui::CornerRadius::same(0),
            egui::Stroke::new(2.0, BOUNDS_STROKE),
            egui::StrokeKind::Middle,
        );
    }

    for marker in &view.markers {
        let pos = to_screen(&marker.position);
        painter.circle_filled(pos, MARKER_RADIUS, MARKER_FILL);
        painter.circle_stroke(pos, MARKER_RADIUS, egui::Stroke::new(1.5, egui::Color32::WHITE));
    }

    if let Some(centroid) = &view.centroid {
        let pos = to_screen(&centroid.position);
        painter.circle_filled(pos, MARKER_RADIUS, egui::Color32::RED);
        painter.circle_stroke(pos, MARKER_RADIUS, egui::Stroke::new(2.0, egui::Color32::WHITE));
    }

    if let Some(pointer) = response.hover_pos() {
        let hovered = view
            .centroid
            .iter()
            .chain(view.markers.iter())
            .map(|marker| (marker, to_screen(&marker.position).distance(pointer)))
            .filter(|(_, distance)| *distance <= HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((marker, _)) = hovered {
            draw_label(&painter, to_screen(&marker.position), marker);
        }
    }

    painter.text(
        rect.left_bottom() + egui::vec2(8.0, -6.0),
        egui::Align2::LEFT_BOTTOM,
        format!(
            "zoom {:.1} · {} point(s)",
            projection.zoom(),
            view.markers.len()
        ),
        egui::FontId::proportional(12.0),
        egui::Color32::from_gray(40),
    );
}

fn draw_label(painter: &egui::Painter, anchor: egui::Pos2, marker: &MarkerView) {
    let galley = painter.layout_no_wrap(
        marker.label.clone(),
        egui::FontId::proportional(13.0),
        egui::Color32::BLACK,
    );
    let origin = anchor + egui::vec2(-galley.size().x / 2.0, -galley.size().y - 12.0);
    let frame = egui::Rect::from_min_size(origin, galley.size()).expand(4.0);
    painter.rect_filled(frame, egui::CornerRadius::same(3), egui::Color32::WHITE);
    painter.galley(origin, galley, egui::Color32::BLACK);
}
