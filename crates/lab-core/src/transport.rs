//! Audio transport state, mirrored onto the live media element by the web
//! frontend. Everything here is pure so the coupling rules (volume/mute,
//! clamped skips, lazy analyser construction) are testable off-browser.

/// Closed set of playback speeds offered by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackRate {
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 6] = [
        PlaybackRate::Half,
        PlaybackRate::ThreeQuarters,
        PlaybackRate::Normal,
        PlaybackRate::OneAndQuarter,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    pub fn factor(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::ThreeQuarters => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndQuarter => 1.25,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| (r.factor() - factor).abs() < 1e-9)
    }
}

/// What the caller must do to honor a play request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAction {
    /// First play on this instance: build source -> analyser -> destination
    /// before starting playback. Happens at most once.
    BuildPipeline,
    /// Pipeline already exists; resume the context if suspended and play.
    ResumeOnly,
}

/// Transport state for one media element.
#[derive(Clone, Debug)]
pub struct Transport {
    pub playing: bool,
    pub position_seconds: f64,
    /// `None` until a valid positive duration has been observed, either from
    /// metadata or from the fallback poll.
    pub duration_seconds: Option<f64>,
    pub volume: f64,
    pub muted: bool,
    pub rate: PlaybackRate,
    pub looping: bool,
    analyser_ready: bool,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            playing: false,
            position_seconds: 0.0,
            duration_seconds: None,
            volume: 1.0,
            muted: false,
            rate: PlaybackRate::Normal,
            looping: false,
            analyser_ready: false,
        }
    }
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start playback. The analyser pipeline is expensive and must be built
    /// inside a user gesture, so construction is deferred to the first play
    /// and requested exactly once.
    pub fn begin_play(&mut self) -> PlayAction {
        self.playing = true;
        if self.analyser_ready {
            PlayAction::ResumeOnly
        } else {
            self.analyser_ready = true;
            PlayAction::BuildPipeline
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// The media element reached its end (and is not looping).
    pub fn ended(&mut self) {
        self.playing = false;
    }

    pub fn analyser_ready(&self) -> bool {
        self.analyser_ready
    }

    /// Set volume in `[0,1]`. Exactly zero also mutes; any other value
    /// unmutes (coupling policy of the volume slider).
    pub fn set_volume(&mut self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume = volume;
        self.muted = volume == 0.0;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn toggle_muted(&mut self) {
        self.muted = !self.muted;
    }

    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Mirror of the media `timeupdate` event.
    pub fn set_position(&mut self, position_seconds: f64) {
        self.position_seconds = position_seconds;
    }

    pub fn known_duration(&self) -> Option<f64> {
        self.duration_seconds
    }

    /// Accept a duration reported by metadata or the fallback poll. NaN,
    /// infinite and non-positive values are rejected and leave the duration
    /// unknown. Returns whether a valid duration is now known.
    pub fn metadata_duration(&mut self, duration: f64) -> bool {
        if duration.is_finite() && duration > 0.0 {
            self.duration_seconds = Some(duration);
            true
        } else {
            false
        }
    }

    /// Some media sources report their duration late or as NaN; while this
    /// is true the frontend polls the element every 500 ms.
    pub fn needs_duration_poll(&self) -> bool {
        self.duration_seconds.is_none()
    }

    /// Seek to a fraction of the known duration. The fraction comes from a
    /// click offset over the progress-bar width, so it is already in `[0,1]`;
    /// it is clamped anyway to keep this total. No-op while the duration is
    /// unknown.
    pub fn seek_fraction(&mut self, fraction: f64) {
        if let Some(duration) = self.duration_seconds {
            self.position_seconds = fraction.clamp(0.0, 1.0) * duration;
        }
    }

    /// Skip forward or back by `delta_seconds`, clamped to the valid range.
    /// No-op while the duration is unknown.
    pub fn skip(&mut self, delta_seconds: f64) {
        if let Some(duration) = self.duration_seconds {
            self.position_seconds = (self.position_seconds + delta_seconds).clamp(0.0, duration);
        }
    }

    /// Fraction of the track already played, for the progress bar.
    pub fn progress_fraction(&self) -> f64 {
        match self.duration_seconds {
            Some(d) if d > 0.0 => (self.position_seconds / d).min(1.0),
            _ => 0.0,
        }
    }
}

/// Format a position or duration as `M:SS` for the time labels.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{minutes}:{secs:02}")
}
