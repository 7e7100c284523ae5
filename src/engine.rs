//! The clock display as a single owned value.
//!
//! [`DisplayEngine`] owns the matrix buffer, the refresh cache, the current
//! settings and the panel. The host calls [`DisplayEngine::tick`] at least
//! once per second with a monotonic timestamp and the current wall-clock
//! time; everything else (rotating faces, blinking the colon, repainting
//! changed columns) happens inside.
//!
//! # Example
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::Rgb565;
//! use led_matrix_clock::clock::ClockTime;
//! use led_matrix_clock::{Config, DisplayEngine, Instant};
//!
//! # fn main() -> Result<(), Infallible> {
//! let mut config = Config::default();
//! config.set_cell_size(4);
//! config.set_style(led_matrix_clock::DisplayStyle::Block);
//!
//! let mut panel: MockDisplay<Rgb565> = MockDisplay::new();
//! panel.set_allow_overdraw(true);
//! panel.set_allow_out_of_bounds_drawing(true);
//!
//! let mut engine = DisplayEngine::new(panel, config);
//! engine.tick(Instant::from_ticks(0), &ClockTime::hms(14, 7, 0))?;
//! assert_eq!(engine.mode_text().top, "2:07 PM");
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "defmt")]
use defmt::Format;
use embedded_graphics::pixelcolor::IntoStorage;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions};

use crate::clock::{ClockTime, DateFormat, TemperatureUnit, Text};
use crate::color::{LedColor, SurroundColor};
use crate::config::Config;
use crate::fonts::FONT_3X7;
use crate::layout::Layout;
use crate::matrix::MatrixBuffer;
use crate::mode::{compose, mode_text, DisplayMode, ModeState, ModeText};
use crate::refresh::{RefreshEngine, RefreshStats};
use crate::render::{DisplayStyle, PixelRenderer};
use crate::rotation::{Rotated, Rotation};
use crate::sensor::{SensorKind, SensorSample, SensorState};
use crate::{Color, Instant, MATRIX_BYTES, MATRIX_COLS, MATRIX_ROWS};

/// Read-only copy of what the matrix shows, for remote viewers.
///
/// `buffer[i]` holds column `i % 32` of module row `i / 32`; bit `b` is
/// logical row `(i / 32) * 8 + b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub struct ViewerSnapshot {
    /// Matrix contents
    pub buffer: [u8; MATRIX_BYTES],
    /// Matrix width in LEDs
    pub width: u8,
    /// Matrix height in LEDs
    pub height: u8,
    /// LED look
    pub style: DisplayStyle,
    /// Lit LED color as an RGB565 word
    pub on_color: u16,
    /// Surround ring color as an RGB565 word
    pub surround_color: u16,
    /// Cell size in panel pixels
    pub cell_size: u8,
    /// Cell spacing in panel pixels
    pub cell_spacing: u8,
}

/// Clock display engine driving a panel `D`.
pub struct DisplayEngine<D> {
    canvas: Rotated<D>,
    buffer: MatrixBuffer,
    refresh: RefreshEngine,
    renderer: PixelRenderer,
    config: Config,
    mode: ModeState,
    sensor: SensorState,
    last_time: Option<ClockTime>,
    compose_pending: bool,
}

impl<D> DisplayEngine<D>
where
    D: DrawTarget<Color = Color> + OriginDimensions,
{
    /// Creates an engine for `canvas`. Nothing is drawn until the first
    /// [`tick`](Self::tick) or [`refresh`](Self::refresh).
    pub fn new(canvas: D, config: Config) -> Self {
        let canvas = Rotated::new(canvas, config.rotation());
        let layout = Layout::new(config.layout(), canvas.size());
        Self {
            renderer: PixelRenderer::new(layout, *config.colors(), config.style()),
            canvas,
            buffer: MatrixBuffer::new(),
            refresh: RefreshEngine::new(),
            mode: ModeState::new(config.mode_interval()),
            sensor: SensorState::new(config.sensor()),
            config,
            last_time: None,
            compose_pending: true,
        }
    }

    /// Advances the clock.
    ///
    /// Rotates to the next face when its interval is over, recomposes the
    /// face when the time or any shown value changed, and repaints whatever
    /// differs on the panel. Calling it several times within one second is
    /// cheap.
    ///
    /// # Errors
    ///
    /// Returns the panel's error if drawing fails.
    pub fn tick(&mut self, now: Instant, time: &ClockTime) -> Result<RefreshStats, D::Error> {
        let switched = self.mode.tick(now);
        let time_changed = self.last_time != Some(*time);

        if switched || time_changed || self.compose_pending {
            self.last_time = Some(*time);
            self.compose_pending = false;
            compose(
                self.mode.current(),
                &mut self.buffer,
                time,
                &self.config,
                &self.sensor,
            );
            return self.refresh();
        }
        if self.refresh.full_redraw_pending() {
            return self.refresh();
        }
        Ok(RefreshStats::default())
    }

    /// Paints the current buffer contents, skipping unchanged columns.
    ///
    /// # Errors
    ///
    /// Returns the panel's error if drawing fails.
    pub fn refresh(&mut self) -> Result<RefreshStats, D::Error> {
        self.refresh.refresh_all(
            &self.buffer,
            &self.renderer,
            &mut self.canvas,
            self.config.fast_refresh(),
        )
    }

    /// Clears the panel and repaints every LED on the next refresh.
    pub fn force_full_redraw(&mut self) {
        self.refresh.request_full_redraw();
    }

    /// Centers `text` on the upper module row and paints it immediately.
    ///
    /// The message stays until the next second change recomposes the clock
    /// face. Empty text is ignored.
    ///
    /// # Errors
    ///
    /// Returns the panel's error if drawing fails.
    pub fn show_message(&mut self, text: &str) -> Result<(), D::Error> {
        if text.is_empty() {
            return Ok(());
        }
        self.buffer.clear();
        let width = FONT_3X7.string_width(text);
        let x = ((MATRIX_COLS as i32 - width) / 2).clamp(0, MATRIX_COLS as i32 - 1);
        self.buffer.draw_text(x, 0, text, &FONT_3X7);
        debug!("message at column {=i32}", x);
        self.refresh().map(|_| ())
    }

    /// Shows an IPv4 address over both module rows.
    ///
    /// `"192.168.1.123"` becomes `"IP:192.168."` on top and `"1.123"` below.
    /// Text without a second dot is shown as `"IP:<text>"` on the upper row.
    ///
    /// # Errors
    ///
    /// Returns the panel's error if drawing fails.
    pub fn show_ip_address(&mut self, ip: &str) -> Result<(), D::Error> {
        if ip.is_empty() {
            return Ok(());
        }
        self.buffer.clear();

        let mut top = Text::new();
        let _ = top.push_str("IP:");
        match ip.match_indices('.').nth(1) {
            Some((dot, _)) if dot > 0 => {
                push_truncated(&mut top, &ip[..=dot]);
                self.buffer.draw_text(0, 0, &top, &FONT_3X7);
                self.buffer.draw_text(0, 1, &ip[dot + 1..], &FONT_3X7);
            }
            _ => {
                push_truncated(&mut top, ip);
                self.buffer.draw_text(0, 0, &top, &FONT_3X7);
            }
        }
        self.refresh().map(|_| ())
    }

    /// Applies a sensor reading; the sensor line updates on the next tick.
    ///
    /// Returns `true` if a shown value changed.
    pub fn update_sensor(&mut self, sample: &SensorSample) -> bool {
        let changed = self.sensor.update(sample);
        if changed {
            self.compose_pending = true;
        }
        changed
    }

    /// Marks the sensor as missing.
    pub fn set_sensor_unavailable(&mut self) {
        if self.sensor.available() {
            self.sensor.set_unavailable();
            self.compose_pending = true;
        }
    }

    /// Declares a different sensor chip, discarding earlier readings.
    pub fn set_sensor_kind(&mut self, kind: SensorKind) {
        self.config.set_sensor(kind);
        self.sensor = SensorState::new(kind);
        self.compose_pending = true;
    }

    /// Sets the cell size, `4..=12` pixels.
    pub fn set_cell_size(&mut self, cell_size: u8) -> bool {
        let applied = self.config.set_cell_size(cell_size);
        if applied {
            self.apply_appearance();
        }
        applied
    }

    /// Sets the cell spacing, `0..=3` pixels.
    pub fn set_cell_spacing(&mut self, cell_spacing: u8) -> bool {
        let applied = self.config.set_cell_spacing(cell_spacing);
        if applied {
            self.apply_appearance();
        }
        applied
    }

    /// Selects the LED look.
    pub fn set_style(&mut self, style: DisplayStyle) {
        self.config.set_style(style);
        self.apply_appearance();
    }

    /// Sets the lit LED color; a linked surround follows.
    pub fn set_on_color(&mut self, color: Color) {
        self.config.colors_mut().set_on_color(color);
        self.apply_appearance();
    }

    /// Sets the lit LED color from the palette.
    pub fn set_led_color(&mut self, color: LedColor) {
        self.set_on_color(color.color());
    }

    /// Sets an explicit surround color, unlinking it from the LED color.
    pub fn set_surround_color(&mut self, color: Color) {
        self.config.colors_mut().set_surround_color(color);
        self.apply_appearance();
    }

    /// Sets the surround from the palette.
    pub fn set_surround(&mut self, surround: SurroundColor) {
        self.config.colors_mut().set_surround(surround);
        self.apply_appearance();
    }

    /// Turns the panel by 180 degrees or back.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.config.set_rotation(rotation);
        self.apply_appearance();
    }

    /// Selects the 24-hour clock.
    pub fn set_use_24_hour(&mut self, use_24_hour: bool) {
        self.config.set_use_24_hour(use_24_hour);
        self.compose_pending = true;
    }

    /// Zero-pads single-digit hours.
    pub fn set_leading_zero(&mut self, leading_zero: bool) {
        self.config.set_leading_zero(leading_zero);
        self.compose_pending = true;
    }

    /// Selects the date layout.
    pub fn set_date_format(&mut self, format: DateFormat) {
        self.config.set_date_format(format);
        self.compose_pending = true;
    }

    /// Selects the temperature unit.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.config.set_temperature_unit(unit);
        self.compose_pending = true;
    }

    /// Sets how long each face stays on screen, `1..=60` seconds.
    pub fn set_mode_interval_secs(&mut self, secs: u32) -> bool {
        let applied = self.config.set_mode_interval_secs(secs);
        if applied {
            self.mode.set_interval(self.config.mode_interval());
        }
        applied
    }

    /// Jumps straight to `mode`.
    pub fn select_mode(&mut self, mode: DisplayMode, now: Instant) {
        self.mode.select(mode, now);
        self.compose_pending = true;
    }

    /// Enables or disables dirty tracking.
    pub fn set_fast_refresh(&mut self, fast_refresh: bool) {
        self.config.set_fast_refresh(fast_refresh);
    }

    /// Replaces all settings at once.
    pub fn set_config(&mut self, config: Config) {
        if config.sensor() != self.config.sensor() {
            self.sensor = SensorState::new(config.sensor());
        }
        self.config = config;
        self.mode.set_interval(config.mode_interval());
        self.compose_pending = true;
        self.apply_appearance();
    }

    /// Pushes the settings into the renderer and schedules a full redraw.
    ///
    /// The layout is only recomputed when its parameters or the panel size
    /// changed.
    fn apply_appearance(&mut self) {
        self.canvas.set_rotation(self.config.rotation());
        let params = self.config.layout();
        let size = self.canvas.size();
        if self.renderer.layout().is_stale(&params, size) {
            self.renderer.set_layout(Layout::new(params, size));
        }
        self.renderer.set_colors(*self.config.colors());
        self.renderer.set_style(self.config.style());
        self.refresh.request_full_redraw();
        info!("display appearance changed, full redraw scheduled");
    }

    /// Copy of the matrix and its look for remote viewers.
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        let colors = self.config.colors();
        ViewerSnapshot {
            buffer: self.buffer.snapshot(),
            width: MATRIX_COLS as u8,
            height: MATRIX_ROWS as u8,
            style: self.config.style(),
            on_color: colors.on_color().into_storage(),
            surround_color: colors.surround_color().into_storage(),
            cell_size: self.config.cell_size(),
            cell_spacing: self.config.cell_spacing(),
        }
    }

    /// Text of the face for the last composed time.
    #[must_use]
    pub fn mode_text(&self) -> ModeText {
        let time = self.last_time.unwrap_or_default();
        mode_text(self.mode.current(), &time, &self.config, &self.sensor)
    }

    /// Current settings
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Face currently showing
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode.current()
    }

    /// Last accepted sensor values
    #[must_use]
    pub const fn sensor(&self) -> &SensorState {
        &self.sensor
    }

    /// Matrix contents
    #[must_use]
    pub const fn buffer(&self) -> &MatrixBuffer {
        &self.buffer
    }

    /// Mutable matrix access for custom content; call
    /// [`refresh`](Self::refresh) afterwards.
    pub fn buffer_mut(&mut self) -> &mut MatrixBuffer {
        &mut self.buffer
    }

    /// Layout currently used for painting
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        self.renderer.layout()
    }

    /// The panel
    #[must_use]
    pub const fn canvas(&self) -> &D {
        self.canvas.inner()
    }

    /// Gives the panel back.
    pub fn into_canvas(self) -> D {
        self.canvas.into_inner()
    }
}

/// Appends as much of `text` as fits.
fn push_truncated(out: &mut Text, text: &str) {
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}

impl<D> core::fmt::Debug for DisplayEngine<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisplayEngine")
            .field("mode", &self.mode)
            .field("config", &self.config)
            .field("refresh", &self.refresh)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::color::BACKGROUND;
    use crate::fonts::FONT_3X7;
    use crate::test_canvas::RecordingCanvas;
    use crate::Duration;
    use embedded_graphics::prelude::RgbColor;

    fn engine(config: Config) -> DisplayEngine<RecordingCanvas> {
        DisplayEngine::new(RecordingCanvas::new(), config)
    }

    fn at(secs: u64) -> Instant {
        Instant::from_ticks(secs * 1_000)
    }

    fn with_sensor(engine: &mut DisplayEngine<RecordingCanvas>) {
        engine.update_sensor(&SensorSample::new(23.0, 45.0));
    }

    #[test]
    fn test_end_to_end_time_and_sensor() {
        let mut e = engine(Config::default());
        with_sensor(&mut e);
        let stats = e.tick(at(0), &ClockTime::hms(14, 7, 0)).unwrap();
        assert!(stats.cleared);
        assert_eq!(stats.cells, 512);

        let text = e.mode_text();
        assert_eq!(text.top, "2:07 PM");
        assert_eq!(text.bottom, "T23C H45%");

        let mut expected = MatrixBuffer::new();
        expected.draw_text(0, 1, "T23C H45%", &FONT_3X7);
        for x in 0..MATRIX_COLS {
            assert_eq!(e.buffer().column(x, 1), expected.column(x, 1));
        }
    }

    #[test]
    fn test_same_second_is_idle() {
        let mut e = engine(Config::default());
        let time = ClockTime::hms(10, 0, 0);
        e.tick(at(0), &time).unwrap();

        let stats = e.tick(at(0) + Duration::millis(300), &time).unwrap();
        assert!(stats.is_idle());
    }

    #[test]
    fn test_colon_blink_repaints_only_the_colon() {
        let mut e = engine(Config::default());
        e.tick(at(0), &ClockTime::hms(14, 7, 0)).unwrap();
        let stats = e.tick(at(1), &ClockTime::hms(14, 7, 1)).unwrap();
        assert_eq!(stats.columns, 1);
        assert_eq!(stats.cells, 8);
    }

    #[test]
    fn test_faces_rotate_on_interval() {
        let mut e = engine(Config::default());
        let mut time = ClockTime::hms(12, 0, 0);
        e.tick(at(0), &time).unwrap();
        assert_eq!(e.mode(), DisplayMode::TimeAndSensor);

        time.second = 5;
        e.tick(at(5), &time).unwrap();
        assert_eq!(e.mode(), DisplayMode::LargeTime);

        assert!(e.set_mode_interval_secs(2));
        assert!(!e.set_mode_interval_secs(0));
        time.second = 7;
        e.tick(at(7), &time).unwrap();
        assert_eq!(e.mode(), DisplayMode::TimeAndDate);
    }

    #[test]
    fn test_appearance_change_forces_redraw() {
        let mut e = engine(Config::default());
        let time = ClockTime::hms(8, 30, 0);
        e.tick(at(0), &time).unwrap();

        e.set_led_color(LedColor::Green);
        assert_eq!(e.config().colors().on_color(), Color::GREEN);
        let stats = e.tick(at(0), &time).unwrap();
        assert!(stats.cleared);
        assert_eq!(stats.cells, 512);

        // Rejected values change nothing
        assert!(!e.set_cell_size(20));
        assert!(e.tick(at(0), &time).unwrap().is_idle());
    }

    #[test]
    fn test_linked_surround_follows_led_color() {
        let mut e = engine(Config::default());
        e.set_surround(SurroundColor::MatchLed);
        e.set_on_color(Color::BLUE);
        assert_eq!(e.config().colors().surround_color(), Color::BLUE);

        e.set_surround(SurroundColor::White);
        e.set_on_color(Color::GREEN);
        assert_eq!(e.config().colors().surround_color(), Color::WHITE);
    }

    #[test]
    fn test_renderer_follows_appearance_settings() {
        let mut e = engine(Config::default());
        let layout = *e.layout();

        e.set_style(DisplayStyle::Block);
        e.set_led_color(LedColor::Cyan);
        assert_eq!(*e.layout(), layout);

        let stats = e.tick(at(0), &ClockTime::hms(9, 0, 0)).unwrap();
        assert_eq!(stats.cells, 512);
        // Block cells are painted with one fill each
        assert_eq!(e.canvas().fill_calls(), 512);
        assert_eq!(e.canvas().pixel_writes(), 0);

        e.set_rotation(Rotation::LandscapeFlipped);
        assert_eq!(e.layout().params().rotation, Rotation::LandscapeFlipped);
        assert_eq!(e.layout().offset(), layout.offset());
    }

    #[test]
    fn test_cell_size_changes_layout() {
        let mut e = engine(Config::default());
        assert_eq!(e.layout().offset().x, 16);
        assert!(e.set_cell_size(12));
        assert_eq!(e.layout().offset().x, 0);
        assert!(e.set_cell_spacing(0));
        assert_eq!(e.snapshot().cell_spacing, 0);
    }

    #[test]
    fn test_truncated_date_on_large_cells() {
        let mut config = Config::default();
        config.set_cell_size(12);
        config.set_date_format(DateFormat::Iso);
        config.set_style(DisplayStyle::Block);
        let mut e = engine(config);
        e.select_mode(DisplayMode::TimeAndDate, at(0));
        let time = ClockTime::hms(12, 0, 0).with_date(28, 12, 2024);
        e.tick(at(0), &time).unwrap();

        let mut expected = MatrixBuffer::new();
        let end = expected.draw_text(2, 1, "2024-12-28", &FONT_3X7);
        assert!(end >= MATRIX_COLS as i32);
        for x in 0..MATRIX_COLS {
            assert_eq!(e.buffer().column(x, 1), expected.column(x, 1));
        }

        // The matrix is wider than the panel and pinned to its left edge
        assert_eq!(e.layout().offset().x, 0);
        assert_eq!(e.layout().matrix_width(), 384);
    }

    #[test]
    fn test_show_message_is_centered() {
        let mut e = engine(Config::default());
        e.show_message("INIT").unwrap();

        let width = FONT_3X7.string_width("INIT");
        let x = (32 - width) / 2;
        let mut expected = MatrixBuffer::new();
        expected.draw_text(x, 0, "INIT", &FONT_3X7);
        assert_eq!(*e.buffer(), expected);

        // Wider than the matrix starts at the left edge
        e.show_message("CONNECTING WIFI").unwrap();
        assert_ne!(e.buffer().column(0, 0), 0);

        // Empty text leaves the buffer alone
        let before = *e.buffer();
        e.show_message("").unwrap();
        assert_eq!(*e.buffer(), before);
    }

    #[test]
    fn test_show_ip_address() {
        let mut e = engine(Config::default());
        e.show_ip_address("192.168.1.23").unwrap();

        let mut expected = MatrixBuffer::new();
        expected.draw_text(0, 0, "IP:192.168.", &FONT_3X7);
        expected.draw_text(0, 1, "1.23", &FONT_3X7);
        assert_eq!(*e.buffer(), expected);

        // Without a second dot everything goes on the upper row
        e.show_ip_address("10.0").unwrap();
        let mut expected = MatrixBuffer::new();
        expected.draw_text(0, 0, "IP:10.0", &FONT_3X7);
        assert_eq!(*e.buffer(), expected);
    }

    #[test]
    fn test_sensor_changes_recompose() {
        let mut e = engine(Config::default());
        let time = ClockTime::hms(9, 0, 0);
        e.tick(at(0), &time).unwrap();
        assert_eq!(e.mode_text().bottom, "NO SENSOR");

        assert!(e.update_sensor(&SensorSample::new(21.0, 40.0)));
        let stats = e.tick(at(0), &time).unwrap();
        assert!(stats.cells > 0);
        assert_eq!(e.mode_text().bottom, "T21C H40%");

        e.set_temperature_unit(TemperatureUnit::Fahrenheit);
        e.tick(at(0), &time).unwrap();
        assert_eq!(e.mode_text().bottom, "T69F H40%");

        e.set_sensor_unavailable();
        e.tick(at(0), &time).unwrap();
        assert_eq!(e.mode_text().bottom, "NO SENSOR");
    }

    #[test]
    fn test_snapshot() {
        let mut e = engine(Config::default());
        e.buffer_mut().set_pixel(0, 0, true);
        e.buffer_mut().set_pixel(31, 15, true);
        let snapshot = e.snapshot();
        assert_eq!(snapshot.width, 32);
        assert_eq!(snapshot.height, 16);
        assert_eq!(snapshot.buffer.len(), 64);
        assert_eq!(snapshot.buffer[0], 0x01);
        assert_eq!(snapshot.buffer[63], 0x80);
        assert_eq!(snapshot.style, DisplayStyle::RealisticLed);
        assert_eq!(snapshot.on_color, 0xF800);
        assert_eq!(snapshot.surround_color, 0xF800);
        assert_eq!(snapshot.cell_size, 9);
    }

    #[test]
    fn test_rotation_flips_the_panel() {
        let mut config = Config::default();
        config.set_style(DisplayStyle::Block);
        let mut e = engine(config);
        e.buffer_mut().set_pixel(0, 0, true);
        e.refresh().unwrap();
        let origin = e.layout().cell_origin(0, 0);
        assert_eq!(e.canvas().pixel(origin), Some(Color::RED));

        e.set_rotation(Rotation::LandscapeFlipped);
        e.refresh().unwrap();
        assert_eq!(e.canvas().pixel(origin), Some(BACKGROUND));
        let flipped = Rotation::LandscapeFlipped.remap_point(origin, e.layout().canvas_size());
        assert_eq!(e.canvas().pixel(flipped), Some(Color::RED));
    }

    #[test]
    fn test_fast_refresh_off_repaints_each_tick() {
        let mut config = Config::default();
        config.set_fast_refresh(false);
        config.set_style(DisplayStyle::Block);
        let mut e = engine(config);
        e.tick(at(0), &ClockTime::hms(1, 2, 3)).unwrap();
        let stats = e.tick(at(1), &ClockTime::hms(1, 2, 4)).unwrap();
        assert_eq!(stats.cells, 512);
    }

    #[test]
    fn test_into_canvas() {
        let mut e = engine(Config::default());
        e.tick(at(0), &ClockTime::hms(1, 2, 3)).unwrap();
        let canvas = e.into_canvas();
        assert_eq!(canvas.clear_calls(), 1);
    }
}
