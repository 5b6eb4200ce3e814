use crate::dom;
use crate::frame;
use lab_core::{layout_bars, BAR_COLOR};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Frequency-bar visualizer with its own render loop, independent of the
/// particle loop. It is started only once the analyser pipeline exists, so
/// no frame is ever drawn before the frequency buffer is ready.
#[derive(Clone)]
pub struct Visualizer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    alive: Rc<Cell<bool>>,
}

impl Visualizer {
    pub fn attach(document: &web::Document, canvas_id: &str) -> anyhow::Result<Self> {
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            alive: Rc::new(Cell::new(true)),
        })
    }

    /// Begin the per-frame sample-and-draw loop against a live analyser.
    pub fn start(&self, analyser: web::AnalyserNode) {
        let canvas = self.canvas.clone();
        let ctx = self.ctx.clone();
        let mut samples = vec![0u8; analyser.frequency_bin_count() as usize];
        log::info!("[viz] sampling {} bins", samples.len());
        frame::start_raf_loop(self.alive.clone(), move || {
            analyser.get_byte_frequency_data(&mut samples);
            let (w, h) = (canvas.width() as f32, canvas.height() as f32);
            ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
            ctx.set_fill_style_str(BAR_COLOR);
            for bar in layout_bars(&samples, w, h) {
                ctx.fill_rect(bar.x as f64, bar.y as f64, bar.width as f64, bar.height as f64);
            }
        });
    }

    /// Stop the render loop; called when the hosting view goes away.
    pub fn stop(&self) {
        self.alive.set(false);
    }
}
