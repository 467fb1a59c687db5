use super::asset::{AssetStore, DisplaySurface};
use super::cache::SlotCache;
use super::error::FaceError;
use super::hour::display_hour;
use super::row::{render_row, RenderReport};
use super::settings::{FaceSettings, Refresh};
use super::time::ClockTime;
use super::GRID_SLOTS;

/// Row of the grid holding the hour.
pub const HOUR_ROW: usize = 0;
/// Row of the grid holding the minute.
pub const MINUTE_ROW: usize = 1;

/// Time-of-day face: the entry points the render trigger calls.
///
/// Hours go on the top row, minutes on the bottom row:
///
/// ```text
///  H H
///  M M
/// ```
///
/// # Example
///
/// ```ignore
/// let mut face = ClockFace::new(SlotCache::new(store, surface, GridGeometry::default()));
/// let settings = FaceSettings::default();
///
/// // Startup: bypass change detection.
/// face.on_tick(clock.now(), true, &settings)?;
/// // Every minute afterwards.
/// face.on_tick(clock.now(), false, &settings)?;
/// ```
pub struct ClockFace<S, D, const N: usize = GRID_SLOTS>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    cache: SlotCache<S, D, N>,
    last_time: Option<ClockTime>,
}

impl<S, D, const N: usize> ClockFace<S, D, N>
where
    S: AssetStore,
    D: DisplaySurface<S::Handle>,
{
    pub fn new(cache: SlotCache<S, D, N>) -> Self {
        Self {
            cache,
            last_time: None,
        }
    }

    pub fn cache(&self) -> &SlotCache<S, D, N> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut SlotCache<S, D, N> {
        &mut self.cache
    }

    /// Time shown by the most recent render, if any.
    pub fn last_time(&self) -> Option<ClockTime> {
        self.last_time
    }

    /// Render `time`: the display hour on the top row, the minute below.
    ///
    /// # Errors
    ///
    /// [`FaceError::InvalidPosition`] if the cache has fewer than four
    /// slots. Glyph failures are reported in the [`RenderReport`].
    pub fn display_time(
        &mut self,
        time: ClockTime,
        settings: &FaceSettings,
        force: bool,
    ) -> Result<RenderReport, FaceError> {
        let hour = display_hour(time.hour(), settings.is_24h);
        let hours = render_row(&mut self.cache, hour, HOUR_ROW, force, settings.zero_prefix)?;
        let minutes = render_row(
            &mut self.cache,
            time.minute(),
            MINUTE_ROW,
            force,
            settings.zero_prefix,
        )?;
        self.last_time = Some(time);
        Ok(hours.merge(minutes))
    }

    /// Minute tick or forced refresh from the render trigger.
    ///
    /// `forced` bypasses per-slot change detection (startup, zero-prefix
    /// change). Glyphs that could not be loaded are logged and left blank;
    /// the next tick retries them.
    pub fn on_tick(
        &mut self,
        time: ClockTime,
        forced: bool,
        settings: &FaceSettings,
    ) -> Result<RenderReport, FaceError> {
        let report = self.display_time(time, settings, forced)?;

        if !report.is_complete() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "{}:{} rendered with blank slots (mask {=u32:#b})",
                time.hour(),
                time.minute(),
                report.unavailable()
            );
        }
        Ok(report)
    }

    /// The 12/24-hour mode changed: re-render the last shown time in full.
    ///
    /// Returns `Ok(None)` if nothing has been rendered yet.
    pub fn on_hour_format_changed(
        &mut self,
        settings: &FaceSettings,
    ) -> Result<Option<RenderReport>, FaceError> {
        match self.last_time {
            Some(time) => self.on_tick(time, true, settings).map(Some),
            None => Ok(None),
        }
    }

    /// One poll of the render trigger.
    ///
    /// `applied` is the settings snapshot of the previous poll, `None` on
    /// the first one. Dispatch:
    ///
    /// | Situation | Action |
    /// |---|---|
    /// | first poll | forced tick |
    /// | 12/24-hour mode changed | [`on_hour_format_changed`](Self::on_hour_format_changed) |
    /// | zero prefix changed | forced tick |
    /// | minute changed | incremental tick |
    /// | otherwise | nothing |
    ///
    /// After an hour-format change the last shown time is re-rendered; a
    /// minute that changed in the same poll is picked up by the next one.
    ///
    /// Returns `Ok(None)` when nothing was rendered.
    pub fn on_poll(
        &mut self,
        now: ClockTime,
        applied: Option<&FaceSettings>,
        current: &FaceSettings,
    ) -> Result<Option<RenderReport>, FaceError> {
        let Some(previous) = applied else {
            return self.on_tick(now, true, current).map(Some);
        };
        match FaceSettings::refresh_between(previous, current) {
            Refresh::HourFormat => self.on_hour_format_changed(current),
            Refresh::Forced => self.on_tick(now, true, current).map(Some),
            Refresh::None if self.last_time != Some(now) => {
                self.on_tick(now, false, current).map(Some)
            }
            Refresh::None => Ok(None),
        }
    }

    /// Release every glyph. The face can be rendered again afterwards.
    pub fn teardown(&mut self) {
        self.cache.teardown();
        self.last_time = None;
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
