//! Grid widget.
//!
//! The grid lays out cells in pixels. This module projects those pixel
//! rectangles onto terminal cells and draws a poster card (or a table row)
//! into each one. Card output is cached per cell for the current layout
//! generation.

use super::constants::{ELLIPSIS, PROGRESS_EMPTY, PROGRESS_FILLED};
use super::styles::GridStyles;
use crate::grid::geometry::sort_key_reserves_line;
use crate::grid::{BoundingBox, LayoutInputs, LayoutMode, RenderCache, ViewportGeometry};
use crate::model::Item;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rendered content of one cell.
pub type CellLines = Vec<Line<'static>>;

/// Pixels per terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelScale {
    /// Pixels per terminal column.
    pub per_column: u32,
    /// Pixels per terminal line.
    pub per_row: u32,
}

impl PixelScale {
    /// Scale with both factors at least 1.
    pub fn new(per_column: u32, per_row: u32) -> Self {
        Self {
            per_column: per_column.max(1),
            per_row: per_row.max(1),
        }
    }

    /// Whole terminal columns covered by `pixels`.
    pub fn columns(self, pixels: u32) -> usize {
        (pixels / self.per_column) as usize
    }

    /// Whole terminal lines covered by `pixels`.
    pub fn lines(self, pixels: u32) -> usize {
        (pixels / self.per_row) as usize
    }
}

/// Where a cell lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellProjection {
    /// Visible part of the cell in terminal coordinates.
    pub rect: Rect,
    /// Lines of the cell scrolled off the top of the grid area.
    pub skip_lines: u16,
}

/// Project a cell's pixel bounds onto the grid area.
///
/// Edges are floored to whole terminal cells, so adjacent cells tile without
/// gaps or overlap. Returns `None` when no part of the cell is visible.
pub fn project_cell(
    bounds: &BoundingBox,
    scroll_offset: u64,
    area: Rect,
    scale: PixelScale,
) -> Option<CellProjection> {
    let per_column = i64::from(scale.per_column);
    let per_row = i64::from(scale.per_row);
    let x = i64::try_from(bounds.x).unwrap_or(i64::MAX);
    let y = i64::try_from(bounds.y)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(scroll_offset).unwrap_or(i64::MAX));

    let left = x.div_euclid(per_column);
    let right = x
        .saturating_add(i64::from(bounds.width))
        .div_euclid(per_column)
        .min(i64::from(area.width));
    let top = y.div_euclid(per_row);
    let bottom = y
        .saturating_add(i64::from(bounds.height))
        .div_euclid(per_row)
        .min(i64::from(area.height));
    let visible_top = top.max(0);

    if left >= right || visible_top >= bottom {
        return None;
    }

    // all four values are within the area after clipping
    let to_u16 = |v: i64| u16::try_from(v).unwrap_or(u16::MAX);
    Some(CellProjection {
        rect: Rect::new(
            area.x.saturating_add(to_u16(left)),
            area.y.saturating_add(to_u16(visible_top)),
            to_u16(right - left),
            to_u16(bottom - visible_top),
        ),
        skip_lines: to_u16(visible_top - top),
    })
}

/// Cut `text` to at most `max_width` display columns, marking the cut with
/// an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut width = 0;
    let mut truncated = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

fn progress_bar(ratio: f64, width: usize, styles: &GridStyles) -> Vec<Span<'static>> {
    let filled = ((ratio * width as f64).round() as usize).min(width);
    vec![
        Span::styled(PROGRESS_FILLED.to_string().repeat(filled), styles.progress_filled),
        Span::styled(
            PROGRESS_EMPTY.to_string().repeat(width - filled),
            styles.progress_empty,
        ),
    ]
}

fn percent(ratio: f64) -> String {
    format!("{:>3}%", (ratio * 100.0).round() as u32)
}

fn monitored_label(item: &Item) -> &'static str {
    if item.monitored {
        "● Monitored"
    } else {
        "○ Unmonitored"
    }
}

/// Lines of one poster card.
///
/// The poster frame takes whatever height is left after the detail lines, so
/// every enabled detail stays visible.
pub fn card_lines(
    item: &Item,
    inputs: &LayoutInputs,
    geometry: &ViewportGeometry,
    scale: PixelScale,
    styles: &GridStyles,
) -> CellLines {
    let options = &inputs.options;
    let padding = geometry.column_width.saturating_sub(geometry.item_width) / 2;
    let inset = " ".repeat(scale.columns(padding));
    let width = scale.columns(geometry.item_width).max(1);
    let indent = |mut spans: Vec<Span<'static>>| {
        spans.insert(0, Span::raw(inset.clone()));
        Line::from(spans)
    };

    let mut details: CellLines = Vec::new();
    if options.detailed_progress_bar && width > 5 {
        let ratio = item.progress_ratio();
        let mut spans = progress_bar(ratio, width - 5, styles);
        spans.push(Span::styled(format!(" {}", percent(ratio)), styles.detail));
        details.push(indent(spans));
    } else {
        details.push(indent(progress_bar(item.progress_ratio(), width, styles)));
    }
    if options.show_title {
        let title = truncate_to_width(item.display_title(), width);
        details.push(indent(vec![Span::styled(title, styles.title)]));
    }
    if options.show_monitored {
        let style = if item.monitored {
            styles.monitored
        } else {
            styles.unmonitored
        };
        let label = truncate_to_width(monitored_label(item), width);
        details.push(indent(vec![Span::styled(label, style)]));
    }
    if options.show_quality_profile {
        let profile = item.quality_profile.as_deref().unwrap_or("-");
        details.push(indent(vec![Span::styled(
            truncate_to_width(profile, width),
            styles.detail,
        )]));
    }
    if sort_key_reserves_line(inputs.sort_key.as_ref(), options.show_quality_profile) {
        let annotation = item.annotation(inputs.sort_key.as_ref()).unwrap_or("");
        details.push(indent(vec![Span::styled(
            truncate_to_width(annotation, width),
            styles.detail,
        )]));
    }

    let cell_lines = scale.lines(geometry.row_height);
    let poster_height = cell_lines.saturating_sub(details.len()).max(2);
    let mut lines = poster_frame(item, width, poster_height, styles)
        .into_iter()
        .map(&indent)
        .collect::<CellLines>();
    lines.extend(details);
    lines
}

fn poster_frame(
    item: &Item,
    width: usize,
    height: usize,
    styles: &GridStyles,
) -> Vec<Vec<Span<'static>>> {
    if width < 3 {
        let label = truncate_to_width(&item.sort_name, width);
        return vec![vec![Span::styled(label, styles.poster_label)]];
    }

    let inner = width - 2;
    let label_row = height / 2;
    let border = |left: char, right: char| {
        vec![Span::styled(
            format!("{left}{}{right}", "─".repeat(inner)),
            styles.poster_border,
        )]
    };

    let mut rows = vec![border('╭', '╮')];
    for row in 1..height.saturating_sub(1) {
        let body = if row == label_row {
            let label = truncate_to_width(item.display_title(), inner);
            let left = (inner - label.width()) / 2;
            let right = inner - label.width() - left;
            Span::styled(
                format!("{}{label}{}", " ".repeat(left), " ".repeat(right)),
                styles.poster_label,
            )
        } else {
            Span::raw(" ".repeat(inner))
        };
        rows.push(vec![
            Span::styled("│", styles.poster_border),
            body,
            Span::styled("│", styles.poster_border),
        ]);
    }
    rows.push(border('╰', '╯'));
    rows
}

/// One table row: monitored marker, title, optional quality profile and
/// sort-key annotation, progress.
pub fn table_lines(
    item: &Item,
    inputs: &LayoutInputs,
    geometry: &ViewportGeometry,
    scale: PixelScale,
    styles: &GridStyles,
) -> CellLines {
    let options = &inputs.options;
    let width = scale.columns(geometry.column_width);
    let marker = if item.monitored { "● " } else { "○ " };
    let marker_style = if item.monitored {
        styles.monitored
    } else {
        styles.unmonitored
    };

    let mut spans = vec![Span::styled(marker, marker_style)];
    let mut used = 2 + 5;
    let mut extras = Vec::new();
    if options.show_quality_profile {
        extras.push(item.quality_profile.as_deref().unwrap_or("-").to_string());
    }
    if let Some(annotation) = item.annotation(inputs.sort_key.as_ref()) {
        extras.push(annotation.to_string());
    }
    let extra_width = 16;
    used += extras.len() * (extra_width + 1);

    let title_width = width.saturating_sub(used).max(1);
    spans.push(Span::styled(
        pad_to_width(item.display_title(), title_width),
        styles.title,
    ));
    for extra in extras {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(pad_to_width(&extra, extra_width), styles.detail));
    }
    spans.push(Span::styled(format!(" {}", percent(item.progress_ratio())), styles.detail));

    vec![Line::from(spans)]
}

/// Draw the visible band of the grid into `area`.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    cache: &mut RenderCache<CellLines>,
    styles: &GridStyles,
) {
    let grid = state.grid();
    if grid.item_count() == 0 {
        let empty = Paragraph::new("No items")
            .style(styles.detail)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }
    if !grid.is_renderable() {
        return;
    }

    let scale = PixelScale::new(state.pixels_per_column, state.pixels_per_row);
    let inputs = grid.inputs();
    let geometry = grid.geometry();
    let items = state.items();
    let offset = grid.effective_scroll_offset();

    let cells = grid.render_cells_cached(cache, |cell| {
        let item = items.get(cell.item_index?.get())?;
        Some(match inputs.mode {
            LayoutMode::Posters => card_lines(item, inputs, &geometry, scale, styles),
            LayoutMode::Table => table_lines(item, inputs, &geometry, scale, styles),
        })
    });

    for rendered in cells {
        let Some(lines) = rendered.content else {
            continue;
        };
        let Some(projection) = project_cell(&rendered.cell.bounds, offset, area, scale) else {
            continue;
        };
        let paragraph = Paragraph::new(lines).scroll((projection.skip_lines, 0));
        frame.render_widget(paragraph, projection.rect);
    }
}

#[cfg(test)]
#[path = "grid_view_tests.rs"]
mod tests;
