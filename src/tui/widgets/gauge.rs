//! Gauge widget
//!
//! Labeled progress bar used by the QA panel readouts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Progress gauge: optional label row above a block-character bar.
pub struct Gauge<'a> {
    /// Progress ratio (0.0 to 1.0)
    ratio: f64,
    label: Option<&'a str>,
    fill_color: Color,
    track_color: Color,
    text_color: Color,
}

impl<'a> Gauge<'a> {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            label: None,
            fill_color: Color::Rgb(0, 242, 255),
            track_color: Color::Rgb(55, 65, 81),
            text_color: Color::Rgb(230, 237, 243),
        }
    }

    /// Gauge from a percentage readout.
    pub fn from_percent(percent: u8) -> Self {
        Self::new(f64::from(percent.min(100)) / 100.0)
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    fn percent_text(&self) -> String {
        format!("{:>4.0}%", self.ratio * 100.0)
    }

    fn bar_string(&self, width: usize) -> String {
        let filled = ((width as f64) * self.ratio).round() as usize;
        let filled = filled.min(width);
        let mut bar = String::with_capacity(width);
        for _ in 0..filled {
            bar.push(BAR_FULL);
        }
        for _ in filled..width {
            bar.push(BAR_EMPTY);
        }
        bar
    }
}

impl Widget for Gauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 8 {
            return;
        }

        let percent = self.percent_text();
        let mut bar_y = area.y;

        // Label row, with the percentage right-aligned.
        if let Some(label) = self.label {
            if area.height >= 2 {
                buf.set_string(
                    area.x,
                    area.y,
                    label,
                    Style::default().fg(self.text_color),
                );
                let px = area.x + area.width.saturating_sub(percent.len() as u16);
                buf.set_string(px, area.y, &percent, Style::default().fg(self.text_color));
                bar_y = area.y + 1;
            }
        }

        let bar_width = if self.label.is_some() && area.height < 2 {
            area.width.saturating_sub(percent.len() as u16 + 1)
        } else {
            area.width
        } as usize;

        let bar = self.bar_string(bar_width);
        buf.set_string(area.x, bar_y, &bar, Style::default().fg(self.fill_color));

        // Single-row fallback keeps the percentage at the right edge.
        if self.label.is_some() && area.height < 2 {
            let px = area.x + area.width.saturating_sub(percent.len() as u16);
            buf.set_string(px, bar_y, &percent, Style::default().fg(self.text_color));
        }

        // Recolor the empty track.
        let filled_cols = ((bar_width as f64) * self.ratio).round() as usize;
        for x in filled_cols..bar_width {
            let cell_x = area.x + x as u16;
            if cell_x < area.x + area.width {
                buf[(cell_x, bar_y)].set_fg(self.track_color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(gauge: Gauge, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        gauge.render(area, &mut buffer);
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_gauge_half_fill() {
        let out = render_to_string(Gauge::new(0.5), 10, 1);
        assert!(out.contains("█████░░░░░"));
    }

    #[test]
    fn test_gauge_label_and_percent() {
        let out = render_to_string(Gauge::from_percent(78).label("Code Coverage"), 30, 2);
        assert!(out.contains("Code Coverage"));
        assert!(out.contains("78%"));
    }

    #[test]
    fn test_gauge_full_and_empty() {
        assert!(render_to_string(Gauge::new(1.0), 8, 1).contains("████████"));
        assert!(render_to_string(Gauge::new(0.0), 8, 1).contains("░░░░░░░░"));
    }
}
