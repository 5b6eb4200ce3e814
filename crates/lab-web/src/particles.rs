use crate::dom;
use crate::frame;
use lab_core::{ParticleField, FIELD_CLEAR_COLOR, PARTICLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Particle canvas: owns the field state, its 2D context and the render
/// loop. The field is shared with the pointer bridge through `Rc<RefCell>`.
pub struct ParticleScene {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
    ctx: web::CanvasRenderingContext2d,
    alive: Rc<Cell<bool>>,
}

impl ParticleScene {
    /// Bind to the canvas element, size the field to the backing store and
    /// create the fixed particle set.
    pub fn attach(document: &web::Document, canvas_id: &str) -> anyhow::Result<Self> {
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let ctx = dom::context_2d(&canvas)?;
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
        let field = Rc::new(RefCell::new(ParticleField::new(
            w as f32,
            h as f32,
            PARTICLE_COUNT,
            &mut rng,
        )));
        log::info!("[field] {} particles in {w}x{h}", PARTICLE_COUNT);
        Ok(Self {
            canvas,
            field,
            ctx,
            alive: Rc::new(Cell::new(true)),
        })
    }

    /// Wire the resize listener and start the render loop.
    pub fn start(&self) {
        self.wire_resize();
        let field = self.field.clone();
        let ctx = self.ctx.clone();
        let canvas = self.canvas.clone();
        frame::start_raf_loop(self.alive.clone(), move || {
            let mut f = field.borrow_mut();
            f.tick();
            draw(&ctx, &canvas, &f);
        });
    }

    /// Stop the render loop; called when the hosting view goes away.
    pub fn stop(&self) {
        self.alive.set(false);
    }

    fn wire_resize(&self) {
        let canvas = self.canvas.clone();
        let field = self.field.clone();
        let closure = Closure::wrap(Box::new(move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            field.borrow_mut().resize(w as f32, h as f32);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn draw(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, field: &ParticleField) {
    ctx.set_fill_style_str(FIELD_CLEAR_COLOR);
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for p in &field.particles {
        ctx.begin_path();
        if ctx
            .arc(
                p.position.x as f64,
                p.position.y as f64,
                p.size as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            ctx.set_fill_style_str(&p.color());
            ctx.fill();
        }
    }
}
