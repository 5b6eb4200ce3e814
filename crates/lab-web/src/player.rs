use crate::dom;
use crate::visualizer::Visualizer;
use lab_core::{
    format_time, PlayAction, PlaybackRate, Transport, DURATION_POLL_MS, FFT_SIZE, SKIP_SECONDS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The lazily-built frequency-analysis chain:
/// media source -> analyser -> destination.
pub struct AnalyserPipeline {
    pub context: web::AudioContext,
    pub analyser: web::AnalyserNode,
    _source: web::MediaElementAudioSourceNode,
}

impl AnalyserPipeline {
    fn build(element: &web::HtmlAudioElement) -> anyhow::Result<Self> {
        let context = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let analyser = context
            .create_analyser()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser.set_fft_size(FFT_SIZE);
        let source = context
            .create_media_element_source(element)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser
            .connect_with_audio_node(&context.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            context,
            analyser,
            _source: source,
        })
    }
}

/// Audio player host: mirrors a [`Transport`] onto the live media element
/// and owns the lazily-built analyser pipeline.
pub struct AudioPlayer {
    document: web::Document,
    element: web::HtmlAudioElement,
    transport: Rc<RefCell<Transport>>,
    pipeline: Rc<RefCell<Option<AnalyserPipeline>>>,
    visualizer: Visualizer,
    poll_handle: Rc<Cell<Option<i32>>>,
}

impl AudioPlayer {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let element: web::HtmlAudioElement = dom::element_by_id(document, "player-audio")?;
        let visualizer = Visualizer::attach(document, "viz-canvas")?;
        let player = Self {
            document: document.clone(),
            element,
            transport: Rc::new(RefCell::new(Transport::new())),
            pipeline: Rc::new(RefCell::new(None)),
            visualizer,
            poll_handle: Rc::new(Cell::new(None)),
        };
        apply_to_element(&player.element, &player.transport.borrow());
        player.wire_media_events();
        player.wire_play_button();
        player.wire_controls();
        player.start_duration_poll();
        Ok(player)
    }

    /// Stop the visualizer loop and the duration poll; called when the
    /// hosting view goes away.
    pub fn stop(&self) {
        self.visualizer.stop();
        if let (Some(w), Some(id)) = (web::window(), self.poll_handle.take()) {
            w.clear_interval_with_handle(id);
        }
    }

    fn wire_play_button(&self) {
        let document = self.document.clone();
        let element = self.element.clone();
        let transport = self.transport.clone();
        let pipeline = self.pipeline.clone();
        let visualizer = self.visualizer.clone();
        dom::add_click_listener(&self.document, "player-play", move || {
            if transport.borrow().playing {
                _ = element.pause();
                transport.borrow_mut().pause();
                dom::set_text(&document, "player-play", "Play");
                return;
            }
            let action = transport.borrow_mut().begin_play();
            if action == PlayAction::BuildPipeline {
                match AnalyserPipeline::build(&element) {
                    Ok(p) => {
                        log::info!("[audio] analyser pipeline built");
                        visualizer.start(p.analyser.clone());
                        *pipeline.borrow_mut() = Some(p);
                    }
                    Err(e) => log::warn!("[audio] analyser pipeline unavailable: {e}"),
                }
            }
            dom::set_text(&document, "player-play", "Pause");
            let context = pipeline.borrow().as_ref().map(|p| p.context.clone());
            let element_play = element.clone();
            spawn_local(async move {
                if let Some(ctx) = context {
                    if ctx.state() == web::AudioContextState::Suspended {
                        // A failed resume is not surfaced; playback is
                        // attempted either way.
                        if let Ok(promise) = ctx.resume() {
                            _ = JsFuture::from(promise).await;
                        }
                    }
                }
                if let Ok(promise) = element_play.play() {
                    _ = JsFuture::from(promise).await;
                }
            });
        });
    }

    fn wire_media_events(&self) {
        // timeupdate: mirror the position and refresh the progress row
        {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                let mut t = transport.borrow_mut();
                t.set_position(element.current_time());
                update_progress_ui(&document, &t);
            }) as Box<dyn FnMut(_)>);
            _ = self
                .element
                .add_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // loadedmetadata: first chance to learn the duration
        {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                let reported = element.duration();
                log::info!("[audio] metadata duration: {reported}");
                if transport.borrow_mut().metadata_duration(reported) {
                    dom::set_text(&document, "player-duration", &format_time(reported));
                }
            }) as Box<dyn FnMut(_)>);
            _ = self.element.add_event_listener_with_callback(
                "loadedmetadata",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // ended: drop back to the paused state
        {
            let document = self.document.clone();
            let transport = self.transport.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                transport.borrow_mut().ended();
                dom::set_text(&document, "player-play", "Play");
            }) as Box<dyn FnMut(_)>);
            _ = self
                .element
                .add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn wire_controls(&self) {
        // skip buttons
        for (id, delta) in [("player-back", -SKIP_SECONDS), ("player-forward", SKIP_SECONDS)] {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            dom::add_click_listener(&self.document, id, move || {
                let mut t = transport.borrow_mut();
                t.skip(delta);
                if t.known_duration().is_some() {
                    element.set_current_time(t.position_seconds);
                    update_progress_ui(&document, &t);
                }
            });
        }

        // progress-bar click seek
        if let Some(bar) = self.document.get_element_by_id("player-progress") {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            let bar_rect = bar.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                let rect = bar_rect.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return;
                }
                let fraction = (ev.client_x() as f64 - rect.left()) / rect.width();
                let mut t = transport.borrow_mut();
                t.seek_fraction(fraction);
                if t.known_duration().is_some() {
                    element.set_current_time(t.position_seconds);
                    update_progress_ui(&document, &t);
                }
            }) as Box<dyn FnMut(_)>);
            _ = bar.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // volume slider; zero mutes, anything else unmutes
        if let Ok(slider) =
            dom::element_by_id::<web::HtmlInputElement>(&self.document, "player-volume")
        {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            let slider_read = slider.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                if let Ok(v) = slider_read.value().parse::<f64>() {
                    let mut t = transport.borrow_mut();
                    t.set_volume(v);
                    apply_to_element(&element, &t);
                    update_mute_label(&document, &t);
                }
            }) as Box<dyn FnMut(_)>);
            _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // mute toggle
        {
            let document = self.document.clone();
            let element = self.element.clone();
            let transport = self.transport.clone();
            dom::add_click_listener(&self.document, "player-mute", move || {
                let mut t = transport.borrow_mut();
                t.toggle_muted();
                apply_to_element(&element, &t);
                update_mute_label(&document, &t);
            });
        }

        // playback-rate select
        if let Ok(select) =
            dom::element_by_id::<web::HtmlSelectElement>(&self.document, "player-rate")
        {
            let element = self.element.clone();
            let transport = self.transport.clone();
            let select_read = select.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                let chosen = select_read
                    .value()
                    .parse::<f64>()
                    .ok()
                    .and_then(PlaybackRate::from_factor);
                if let Some(rate) = chosen {
                    let mut t = transport.borrow_mut();
                    t.set_rate(rate);
                    apply_to_element(&element, &t);
                }
            }) as Box<dyn FnMut(_)>);
            _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // loop checkbox
        if let Ok(check) = dom::element_by_id::<web::HtmlInputElement>(&self.document, "player-loop")
        {
            let element = self.element.clone();
            let transport = self.transport.clone();
            let check_read = check.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                let mut t = transport.borrow_mut();
                t.set_loop(check_read.checked());
                apply_to_element(&element, &t);
            }) as Box<dyn FnMut(_)>);
            _ = check.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Some sources report their duration late or as NaN; poll the element
    /// until a valid value lands, then clear the interval.
    fn start_duration_poll(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let document = self.document.clone();
        let element = self.element.clone();
        let transport = self.transport.clone();
        let handle = self.poll_handle.clone();
        let handle_tick = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut t = transport.borrow_mut();
            let known = !t.needs_duration_poll() || t.metadata_duration(element.duration());
            if known {
                if let Some(d) = t.known_duration() {
                    dom::set_text(&document, "player-duration", &format_time(d));
                    log::info!("[audio] duration resolved by poll: {d:.1}s");
                }
                if let (Some(w), Some(id)) = (web::window(), handle_tick.take()) {
                    w.clear_interval_with_handle(id);
                }
            }
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            DURATION_POLL_MS,
        ) {
            Ok(id) => {
                handle.set(Some(id));
                closure.forget();
            }
            Err(e) => log::warn!("[audio] duration poll not scheduled: {e:?}"),
        }
    }
}

/// Push the whole transport state onto the media element.
fn apply_to_element(element: &web::HtmlAudioElement, t: &Transport) {
    element.set_volume(t.volume);
    element.set_muted(t.muted);
    element.set_playback_rate(t.rate.factor());
    element.set_loop(t.looping);
}

fn update_progress_ui(document: &web::Document, t: &Transport) {
    dom::set_text(document, "player-time", &format_time(t.position_seconds));
    if let Some(el) = document.get_element_by_id("player-progress-fill") {
        let pct = t.progress_fraction() * 100.0;
        _ = el.set_attribute("style", &format!("width:{pct:.1}%"));
    }
}

fn update_mute_label(document: &web::Document, t: &Transport) {
    dom::set_text(
        document,
        "player-mute",
        if t.muted { "Unmute" } else { "Mute" },
    );
}
