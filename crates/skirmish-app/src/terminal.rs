//! Character-grid renderer on top of ratatui.
//!
//! A frame is drawn as a single [`FieldView`] widget: the field fills every
//! row but the last, which holds the status bar. ratatui keeps the previous
//! buffer and only writes the cells that changed.

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
    Terminal,
};

use skirmish_core::enums::Palette;
use skirmish_core::geometry::Viewport;
use skirmish_core::state::FrameSnapshot;

/// Anything that can show a frame.
pub trait Display {
    /// Field size in cells, the status row excluded.
    fn field_size(&self) -> (u16, u16);
    fn present(&mut self, snapshot: &FrameSnapshot, status: &str) -> anyhow::Result<()>;
}

/// Foreground and background for a palette entry.
pub fn colors(palette: Palette, space_theme: bool) -> (Color, Color) {
    let background = if space_theme { Color::Black } else { Color::Blue };
    match palette {
        Palette::Hud => (Color::Reset, Color::Reset),
        Palette::Bright => (Color::White, background),
        Palette::Sea if space_theme => (Color::White, background),
        Palette::Sea => (Color::Blue, background),
        Palette::Ember => (Color::LightRed, background),
        Palette::Flame => (Color::LightYellow, background),
        Palette::Smoke => (Color::Black, background),
    }
}

/// Complete cell style for a palette entry. Weight is always set one way
/// or the other so a sprite fully replaces whatever was under it.
pub fn style(palette: Palette, bold: bool, space_theme: bool) -> Style {
    let (fg, bg) = colors(palette, space_theme);
    let style = Style::default().fg(fg).bg(bg);
    if bold {
        style.add_modifier(Modifier::BOLD)
    } else {
        style.remove_modifier(Modifier::BOLD)
    }
}

/// The field and status bar for one frame.
pub struct FieldView<'a> {
    snapshot: &'a FrameSnapshot,
    status: &'a str,
    space_theme: bool,
}

impl<'a> FieldView<'a> {
    pub fn new(snapshot: &'a FrameSnapshot, status: &'a str, space_theme: bool) -> Self {
        Self {
            snapshot,
            status,
            space_theme,
        }
    }
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let field_rows = area.height - 1;
        let field = Rect {
            height: field_rows,
            ..area
        };
        buf.set_style(field, style(Palette::Bright, false, self.space_theme));

        let view = Viewport::new(area.width, field_rows);
        for sprite in &self.snapshot.sprites {
            let Some((x, y)) = view.project(sprite.x, sprite.row, self.snapshot.camera) else {
                continue;
            };
            let cell = &mut buf[(area.x + x, area.y + y)];
            cell.set_char(sprite.symbol);
            cell.set_style(style(sprite.color, sprite.bold, self.space_theme));
        }

        buf.set_stringn(
            area.x,
            area.y + field_rows,
            self.status,
            area.width as usize,
            style(Palette::Hud, true, self.space_theme),
        );
    }
}

/// A ratatui terminal over any backend.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    columns: u16,
    rows: u16,
    space_theme: bool,
}

impl<B: Backend> Screen<B> {
    pub fn new(backend: B, space_theme: bool) -> anyhow::Result<Self> {
        let terminal = Terminal::new(backend).context("failed to build terminal backend")?;
        let size = terminal.size().context("failed to read terminal size")?;
        Ok(Self {
            terminal,
            columns: size.width,
            rows: size.height,
            space_theme,
        })
    }
}

impl<B: Backend> Display for Screen<B> {
    fn field_size(&self) -> (u16, u16) {
        (self.columns, self.rows.saturating_sub(1).max(1))
    }

    fn present(&mut self, snapshot: &FrameSnapshot, status: &str) -> anyhow::Result<()> {
        let view = FieldView::new(snapshot, status, self.space_theme);
        self.terminal
            .draw(|frame| frame.render_widget(view, frame.area()))
            .context("failed to draw frame")?;
        Ok(())
    }
}

/// The real terminal. Raw mode and the alternate screen are held for the
/// lifetime of this value and released on drop, errors included.
pub struct TerminalScreen {
    screen: Screen<CrosstermBackend<Stdout>>,
}

impl TerminalScreen {
    pub fn enter(space_theme: bool) -> anyhow::Result<Self> {
        let screen = Screen::new(CrosstermBackend::new(io::stdout()), space_theme)?;
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut this = Self { screen };
        let terminal = &mut this.screen.terminal;
        execute!(terminal.backend_mut(), EnterAlternateScreen)
            .context("failed to enter alternate screen")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;
        Ok(this)
    }
}

impl Display for TerminalScreen {
    fn field_size(&self) -> (u16, u16) {
        self.screen.field_size()
    }

    fn present(&mut self, snapshot: &FrameSnapshot, status: &str) -> anyhow::Result<()> {
        self.screen.present(snapshot, status)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let terminal = &mut self.screen.terminal;
        if let Err(err) = terminal.show_cursor() {
            tracing::error!(?err, "failed to show cursor");
        }
        if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::error!(?err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            tracing::error!(?err, "failed to disable raw mode");
        }
    }
}
