//! Chart rendering.
//!
//! Pure rendering over the computed [`ChartState`]: the scatter series,
//! the regression segment and the axis bounds are all prepared ahead of
//! time, so this layer only builds widgets.

use super::ChartState;
use crate::settings::ChartStyle;
use crate::shared::{format_axis_label, format_stat_value, ThemeColors};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the regression chart.
pub fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    state: &ChartState,
    style: &ChartStyle,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0))
        .title(chart_title(state))
        .title_style(Style::default().fg(colors.yellow));

    let Some(frame) = state.frame else {
        let paragraph = Paragraph::new("Enter at least one complete point to plot")
            .style(Style::default().fg(colors.gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let segment = frame.line.map(|line| line.to_vec());

    let mut datasets = vec![Dataset::default()
        .name("points")
        .marker(style.marker.marker())
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(style.point_color.color()))
        .data(&state.points)];

    if let Some(ref segment) = segment {
        datasets.push(
            Dataset::default()
                .name("fit")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(style.line_color.color()))
                .data(segment),
        );
    }

    let x_axis = Axis::default()
        .title("X")
        .style(Style::default().fg(colors.fg1))
        .bounds(frame.x_bounds)
        .labels(axis_labels(frame.x_bounds));

    let y_axis = Axis::default()
        .title("Y")
        .style(Style::default().fg(colors.fg1))
        .bounds(frame.y_bounds)
        .labels(axis_labels(frame.y_bounds));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(bounds[0]),
        format_axis_label((bounds[0] + bounds[1]) / 2.0),
        format_axis_label(bounds[1]),
    ]
}

fn chart_title(state: &ChartState) -> String {
    match state.fit {
        Some(fit) if fit.is_finite() => {
            let sign = if fit.intercept < 0.0 { '-' } else { '+' };
            format!(
                " y = {}x {} {} ",
                format_stat_value(fit.slope),
                sign,
                format_stat_value(fit.intercept.abs())
            )
        }
        Some(_) => " Fit undefined (all x values equal) ".to_string(),
        None => " Linear Regression ".to_string(),
    }
}
