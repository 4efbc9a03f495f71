use egui::{Context, RichText};

use super::layout::{CardNode, DashboardTree};
use super::state::ChartTextures;

/// Draw the dashboard tree into the window
pub fn draw_ui(tree: &DashboardTree, textures: &mut ChartTextures, ctx: &Context) {
    let page = &tree.page;
    let frame = egui::Frame::none()
        .fill(page.background.to_egui())
        .inner_margin(page.padding as f32);

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let heading = &page.heading;
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&heading.text)
                        .size(heading.font_size as f32)
                        .color(heading.color.to_egui()),
                );
            });
            ui.add_space(heading.margin_bottom as f32);

            if let Some(message) = &textures.error_message {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }

            let grid = &page.grid;
            let columns = grid.columns.max(1) as usize;
            let gap = grid.gap as f32;
            let content_width = ui.available_width().min(grid.max_width as f32);
            let left = (ui.available_width() - content_width) / 2.0;
            let column_width = (content_width - gap * (columns - 1) as f32) / columns as f32;

            for row in grid.cards.chunks(columns) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = gap;
                    if left > gap {
                        ui.add_space(left - gap);
                    }
                    for card in row {
                        draw_card(ui, card, column_width, textures);
                    }
                });
                ui.add_space(gap);
            }
        });
    });
}

fn draw_card(ui: &mut egui::Ui, card: &CardNode, width: f32, textures: &mut ChartTextures) {
    let style = &card.style;
    let shadow = &style.shadow;
    let padding = style.padding as f32;
    let inner_width = (width - 2.0 * padding).max(1.0);
    let inner_height = (style.height as f32 - 2.0 * padding).max(1.0);

    let frame = egui::Frame::none()
        .fill(style.background.to_egui())
        .rounding(style.corner_radius as f32)
        .stroke(egui::Stroke::new(
            style.border_width as f32,
            style.border_color.to_egui(),
        ))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(shadow.offset_x as f32, shadow.offset_y as f32),
            blur: shadow.blur as f32,
            spread: 0.0,
            color: shadow.color.to_egui(),
        })
        .inner_margin(padding);

    frame.show(ui, |ui| {
        ui.set_width(inner_width);
        ui.set_height(inner_height);

        ui.vertical(|ui| {
            let title = ui.label(
                RichText::new(&card.title)
                    .size(style.title_font_size as f32)
                    .color(card.accent.to_egui())
                    .strong(),
            );
            ui.add_space(style.title_margin_bottom as f32);

            let used = title.rect.height() + style.title_margin_bottom as f32;
            let chart_height = (inner_height - used).max(1.0);
            let pixels_per_point = ui.ctx().pixels_per_point();
            let size = (
                (inner_width * pixels_per_point).round() as u32,
                (chart_height * pixels_per_point).round() as u32,
            );

            if let Some(texture) = textures.get_or_render(ui.ctx(), &card.chart, style.background, size) {
                ui.add(
                    egui::Image::new(&texture)
                        .fit_to_exact_size(egui::vec2(inner_width, chart_height)),
                );
            } else {
                ui.spinner();
            }
        });
    });
}
