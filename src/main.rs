//! Flappy entry point
//!
//! The web build runs the game loop on `requestAnimationFrame`. The native
//! build has no window; it plays one headless autopilot session and prints a
//! JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement};

    use flappy::App;
    use flappy::platform::{EventQueue, FrameEvent, Key, PerformanceClock, StartupError};
    use flappy::renderer::{Canvas, Color, FrameBuilder, RenderState, TextAnchor, TextRun, Viewport};

    /// DOM overlay that shows the frame's text runs over the canvas
    struct TextLayer {
        document: Document,
        root: HtmlElement,
        nodes: Vec<HtmlElement>,
    }

    impl TextLayer {
        fn new(document: Document, root: HtmlElement) -> Self {
            Self {
                document,
                root,
                nodes: Vec::new(),
            }
        }

        fn css_color([r, g, b, a]: Color) -> String {
            format!(
                "rgba({}, {}, {}, {})",
                (r * 255.0).round(),
                (g * 255.0).round(),
                (b * 255.0).round(),
                a
            )
        }

        /// Lay out text runs in CSS pixels
        fn update(&mut self, runs: &[TextRun], viewport: &Viewport) {
            while self.nodes.len() < runs.len() {
                let Ok(el) = self.document.create_element("div") else {
                    return;
                };
                let Ok(el) = el.dyn_into::<HtmlElement>() else {
                    return;
                };
                let style = el.style();
                let _ = style.set_property("position", "absolute");
                let _ = style.set_property("white-space", "pre");
                let _ = self.root.append_child(&el);
                self.nodes.push(el);
            }

            for (i, node) in self.nodes.iter().enumerate() {
                let style = node.style();
                let Some(run) = runs.get(i) else {
                    let _ = style.set_property("display", "none");
                    continue;
                };
                let pos = viewport.to_surface(run.pos);
                let (transform, align) = match run.anchor {
                    TextAnchor::TopLeft => ("none", "left"),
                    TextAnchor::Center => ("translate(-50%, -50%)", "center"),
                };
                let _ = style.set_property("display", "block");
                let _ = style.set_property("left", &format!("{}px", pos.x));
                let _ = style.set_property("top", &format!("{}px", pos.y));
                let _ = style.set_property("font-size", &format!("{}px", run.size * viewport.scale));
                let _ = style.set_property("color", &Self::css_color(run.color));
                let _ = style.set_property("transform", transform);
                let _ = style.set_property("text-align", align);
                if node.text_content().as_deref() != Some(run.text.as_str()) {
                    node.set_text_content(Some(&run.text));
                }
            }
        }
    }

    /// Canvas that records into a frame and submits on `present`
    struct WebCanvas<'a> {
        frame: &'a mut FrameBuilder,
        render_state: &'a mut RenderState,
        text_layer: &'a mut TextLayer,
        css_size: (f32, f32),
    }

    impl Canvas for WebCanvas<'_> {
        fn clear(&mut self, color: Color) {
            self.frame.clear(color);
        }

        fn rect(&mut self, pos: glam::Vec2, size: glam::Vec2, color: Color) {
            self.frame.rect(pos, size, color);
        }

        fn circle(&mut self, center: glam::Vec2, radius: f32, color: Color) {
            self.frame.circle(center, radius, color);
        }

        fn text(&mut self, text: &str, pos: glam::Vec2, size: f32, color: Color, anchor: TextAnchor) {
            self.frame.text(text, pos, size, color, anchor);
        }

        fn present(&mut self) {
            self.frame.present();
            match self.render_state.render(self.frame) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            let viewport = Viewport::fit(self.css_size.0, self.css_size.1);
            self.text_layer.update(&self.frame.texts, &viewport);
        }
    }

    struct Game {
        app: App,
        clock: PerformanceClock,
        events: EventQueue,
        frame: FrameBuilder,
        render_state: RenderState,
        text_layer: TextLayer,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Keep the drawing buffer matched to the element size
        fn sync_size(&mut self) {
            let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
            let width = (self.canvas.client_width() as f64 * dpr) as u32;
            let height = (self.canvas.client_height() as f64 * dpr) as u32;
            if (width, height) != self.render_state.size && width > 0 && height > 0 {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                self.render_state.resize(width, height);
            }
        }

        /// Run one frame; false once the page is going away
        fn frame(&mut self) -> bool {
            self.sync_size();
            let css_size = (
                self.canvas.client_width() as f32,
                self.canvas.client_height() as f32,
            );
            let mut canvas = WebCanvas {
                frame: &mut self.frame,
                render_state: &mut self.render_state,
                text_layer: &mut self.text_layer,
                css_size,
            };
            self.app.frame(&mut self.clock, &mut self.events, &mut canvas)
        }
    }

    fn element_by_id<T: JsCast>(
        document: &Document,
        id: &'static str,
        expected: &'static str,
    ) -> Result<T, StartupError> {
        document
            .get_element_by_id(id)
            .ok_or(StartupError::MissingElement { id })?
            .dyn_into::<T>()
            .map_err(|_| StartupError::WrongElementType { id, expected })
    }

    pub async fn run() -> Result<(), StartupError> {
        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoWindow)?;
        let performance = window.performance().ok_or(StartupError::NoWindow)?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = element_by_id(&document, "canvas", "canvas")?;
        let text_root: HtmlElement = element_by_id(&document, "text-layer", "HTML element")?;

        let dpr = window.device_pixel_ratio();
        let width = ((canvas.client_width() as f64 * dpr) as u32).max(1);
        let height = ((canvas.client_height() as f64 * dpr) as u32).max(1);
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::NoAdapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let seed = js_sys::Date::now() as u64;
        let events = EventQueue::new();
        setup_input_handlers(&events);

        let game = Rc::new(RefCell::new(Game {
            app: App::new(seed),
            clock: PerformanceClock::new(performance),
            events,
            frame: FrameBuilder::new(),
            render_state,
            text_layer: TextLayer::new(document, text_root),
            canvas,
        }));

        request_animation_frame(game);

        log::info!("Flappy running!");
        Ok(())
    }

    fn setup_input_handlers(events: &EventQueue) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let events = events.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let key = Key::from_dom_key(&event.key());
                if key == Key::Space {
                    // Keep the page from scrolling
                    event.prevent_default();
                }
                events.push(FrameEvent::KeyPressed(key));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page teardown stands in for closing the window
        {
            let events = events.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                events.push(FrameEvent::WindowClosed);
            });
            let _ = window
                .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = game.borrow_mut().frame();
        if keep_running {
            request_animation_frame(game);
        } else {
            log::info!("Frame loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Flappy starting...");
    if let Err(e) = web_game::run().await {
        log::error!("Startup failed: {}", e);
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading"))
        {
            el.set_text_content(Some(&format!("Failed to start: {e}")));
            let _ = el.set_attribute("class", "");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy::consts::TARGET_FPS;

    /// One minute of play at the target frame rate
    const MAX_FRAMES: u64 = 60 * TARGET_FPS as u64;

    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::info!("Flappy (native) starting headless autopilot run");
    log::info!("Run `trunk serve` for the playable web version");

    let summary = flappy::app::run_headless(seed, MAX_FRAMES, 1.0 / TARGET_FPS as f32);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize run summary: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
