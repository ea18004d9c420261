//! Iceberg Sim entry point
//!
//! On the web: sizes the canvas, wires pointer and touch input to the session
//! and drives ticks and rendering from `requestAnimationFrame`.
//! Natively: runs a headless float of a drawn rectangle and prints where it
//! settles.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use iceberg_sim::renderer::{RenderState, build_scene};
    use iceberg_sim::sim::Surface;
    use iceberg_sim::{Session, Settings};

    /// App instance holding all state
    struct App {
        session: Session,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl App {
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;
            self.session.advance(elapsed);
        }

        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(self.session.state());
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Iceberg Sim starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // 16:9 from the laid-out width, clamped to the window
        let window_height = window.inner_height()?.as_f64().unwrap_or(0.0);
        let surface = Surface::from_width(canvas.client_width() as f64, window_height);
        canvas.set_attribute(
            "style",
            &format!("width:{}px;height:{}px", surface.width, surface.height),
        )?;

        let dpr = window.device_pixel_ratio();
        let width = (surface.width * dpr) as u32;
        let height = (surface.height * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        settings.save();

        let mut session = Session::with_surface(surface, settings);
        session.start();
        let app = Rc::new(RefCell::new(App {
            session,
            render_state: None,
            last_time: 0.0,
        }));

        log::info!("Surface {}x{}", surface.width, surface.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let wgpu_surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&wgpu_surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            wgpu_surface,
            &adapter,
            width,
            height,
            (surface.width as f32, surface.height as f32),
        )
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Iceberg Sim running!");
        Ok(())
    }

    /// Client coordinates to surface-local ones
    fn local_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> DVec2 {
        let rect = canvas.get_bounding_client_rect();
        DVec2::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
    }

    fn touch_point(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<DVec2> {
        let touch = event.touches().get(0)?;
        Some(local_point(canvas, touch.client_x(), touch.client_y()))
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Mouse down - start a new shape
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = local_point(&canvas_clone, event.client_x(), event.client_y());
                app.borrow_mut().session.pointer_down(p);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - extend the lasso (ignored unless drawing)
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = local_point(&canvas_clone, event.client_x(), event.client_y());
                app.borrow_mut().session.pointer_move(p);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse up anywhere ends the gesture
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.pointer_up();
            });
            window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(p) = touch_point(&canvas_clone, &event) {
                    app.borrow_mut().session.pointer_down(p);
                }
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(p) = touch_point(&canvas_clone, &event) {
                    app.borrow_mut().session.pointer_move(p);
                }
            });
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end / cancel
        for name in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().session.pointer_up();
            });
            canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::DVec2;
    use iceberg_sim::sim::Surface;
    use iceberg_sim::{Session, Settings};

    env_logger::init();
    log::info!("Iceberg Sim (native) starting...");
    log::info!("The interactive version runs in the browser - use `trunk serve`");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_file(std::path::Path::new(&path)),
        None => Settings::default(),
    };

    let mut session = Session::with_surface(Surface::new(800.0, 450.0), settings);

    // A wide slab dropped from above the water
    let corners = [(300.0, 40.0), (500.0, 40.0), (500.0, 100.0), (300.0, 100.0)];
    session.pointer_down(DVec2::new(corners[0].0, corners[0].1));
    for &(x, y) in corners.iter().cycle().skip(1).take(corners.len()) {
        session.pointer_move(DVec2::new(x, y));
    }
    if !session.pointer_up() {
        log::error!("Demo shape was rejected");
        return;
    }

    println!("waterline y = {:.1}", session.water_level());
    for i in 0..=600 {
        let forces = session.tick();
        if i % 100 == 0 {
            if let (Some(f), Some(berg)) = (forces, session.state().iceberg()) {
                println!(
                    "tick {:>4}: submerged {:>5.1}%  vy {:>7.3}  spin {:>7.3} deg",
                    i,
                    f.submerged_ratio * 100.0,
                    berg.velocity.linear.y,
                    berg.velocity.angular
                );
            }
        }
    }
}
