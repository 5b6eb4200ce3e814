// Host-side tests for the audio transport state machine.

use lab_core::{format_time, PlayAction, PlaybackRate, Transport};

#[test]
fn volume_zero_mutes_and_nonzero_unmutes() {
    let mut t = Transport::new();
    assert!(!t.muted);
    t.set_volume(0.0);
    assert!(t.muted, "volume 0 must mute");
    t.set_volume(0.5);
    assert!(!t.muted, "non-zero volume must unmute");
    assert_eq!(t.volume, 0.5);
}

#[test]
fn volume_is_clamped_to_unit_range() {
    let mut t = Transport::new();
    t.set_volume(1.5);
    assert_eq!(t.volume, 1.0);
    t.set_volume(-0.25);
    assert_eq!(t.volume, 0.0);
    assert!(t.muted, "clamped-to-zero volume still mutes");
}

#[test]
fn skip_clamps_to_track_bounds() {
    let mut t = Transport::new();
    t.metadata_duration(200.0);
    t.set_position(5.0);
    t.skip(-10.0);
    assert_eq!(t.position_seconds, 0.0, "skip below zero clamps to start");
    t.set_position(195.0);
    t.skip(10.0);
    assert_eq!(t.position_seconds, 200.0, "skip past end clamps to duration");
    t.skip(-30.0);
    assert_eq!(t.position_seconds, 170.0);
}

#[test]
fn skip_is_noop_while_duration_unknown() {
    let mut t = Transport::new();
    t.set_position(5.0);
    t.skip(-10.0);
    assert_eq!(t.position_seconds, 5.0);
    t.skip(10.0);
    assert_eq!(t.position_seconds, 5.0);
}

#[test]
fn seek_fraction_scales_known_duration() {
    let mut t = Transport::new();
    t.metadata_duration(200.0);
    t.seek_fraction(0.5);
    assert_eq!(t.position_seconds, 100.0);
    t.seek_fraction(0.0);
    assert_eq!(t.position_seconds, 0.0);
    t.seek_fraction(1.0);
    assert_eq!(t.position_seconds, 200.0);
}

#[test]
fn seek_fraction_is_noop_while_duration_unknown() {
    let mut t = Transport::new();
    t.set_position(12.0);
    t.seek_fraction(0.5);
    assert_eq!(t.position_seconds, 12.0);
}

#[test]
fn pipeline_is_built_exactly_once() {
    let mut t = Transport::new();
    assert!(!t.analyser_ready());
    assert_eq!(t.begin_play(), PlayAction::BuildPipeline);
    assert!(t.playing);
    assert!(t.analyser_ready());
    t.pause();
    assert!(!t.playing);
    // Every later play on the same instance reuses the pipeline.
    assert_eq!(t.begin_play(), PlayAction::ResumeOnly);
    t.ended();
    assert_eq!(t.begin_play(), PlayAction::ResumeOnly);
}

#[test]
fn invalid_metadata_durations_are_rejected() {
    let mut t = Transport::new();
    assert!(!t.metadata_duration(f64::NAN));
    assert!(t.needs_duration_poll());
    assert!(!t.metadata_duration(0.0));
    assert!(!t.metadata_duration(-3.0));
    assert!(!t.metadata_duration(f64::INFINITY));
    assert!(t.needs_duration_poll());
}

#[test]
fn duration_poll_stops_once_duration_is_known() {
    let mut t = Transport::new();
    assert!(t.needs_duration_poll());
    // Poll observes NaN a few times, then a real value lands.
    assert!(!t.metadata_duration(f64::NAN));
    assert!(t.needs_duration_poll());
    assert!(t.metadata_duration(184.2));
    assert!(!t.needs_duration_poll());
    assert_eq!(t.known_duration(), Some(184.2));
}

#[test]
fn ended_event_stops_playback() {
    let mut t = Transport::new();
    t.begin_play();
    assert!(t.playing);
    t.ended();
    assert!(!t.playing);
}

#[test]
fn rate_set_covers_the_fixed_table() {
    for rate in PlaybackRate::ALL {
        assert_eq!(
            PlaybackRate::from_factor(rate.factor()),
            Some(rate),
            "round trip failed for {rate:?}"
        );
    }
    assert_eq!(PlaybackRate::from_factor(1.1), None);
    assert_eq!(PlaybackRate::default().factor(), 1.0);
}

#[test]
fn mute_toggle_is_independent_of_volume() {
    let mut t = Transport::new();
    t.set_volume(0.8);
    t.toggle_muted();
    assert!(t.muted);
    assert_eq!(t.volume, 0.8, "mute must not touch the volume");
    t.toggle_muted();
    assert!(!t.muted);
}

#[test]
fn progress_fraction_tracks_position() {
    let mut t = Transport::new();
    assert_eq!(t.progress_fraction(), 0.0, "unknown duration reads as zero");
    t.metadata_duration(100.0);
    t.set_position(25.0);
    assert!((t.progress_fraction() - 0.25).abs() < 1e-9);
    t.set_position(150.0);
    assert_eq!(t.progress_fraction(), 1.0, "fraction saturates at one");
}

#[test]
fn format_time_renders_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(7.9), "0:07");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(600.0), "10:00");
}
