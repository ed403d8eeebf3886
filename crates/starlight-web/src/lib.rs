pub mod canvas;
pub mod platform;
pub mod runner;
pub mod timer;

pub use canvas::Canvas2dSurface;
pub use platform::{JsRandom, PerformanceClock};
pub use runner::{start_loop, AnimationLoop, CanvasLoop, ResizeListener};
pub use timer::TimerSlot;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use starlight_engine::{FlightLayer, SkyConfig, SpawnConfig, StarField};

type FlightLoop = Rc<RefCell<CanvasLoop<FlightLayer>>>;

/// Everything a running sky owns. Dropping it stops and frees both loops,
/// detaches the resize listeners and clears the spawn timers.
struct SkyApp {
    spawn: SpawnConfig,
    stars: Rc<RefCell<CanvasLoop<StarField>>>,
    flights: FlightLoop,
    _listeners: Vec<ResizeListener>,
    _loops: Vec<AnimationLoop>,
    first_spawn: TimerSlot,
    repeat_spawn: TimerSlot,
}

impl SkyApp {
    fn start(stars_id: &str, flights_id: &str, config: SkyConfig) -> Result<Self, JsValue> {
        let window = platform::window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let clock = PerformanceClock::new(&window)?;

        let stars = Rc::new(RefCell::new(CanvasLoop::new(
            StarField::new(config.stars.clone()),
            Canvas2dSurface::from_element_id(&document, stars_id)?,
            clock.clone(),
        )));
        let flights = Rc::new(RefCell::new(CanvasLoop::new(
            FlightLayer::new(&config),
            Canvas2dSurface::from_element_id(&document, flights_id)?,
            clock,
        )));

        let listeners = vec![
            ResizeListener::attach(&window, stars.clone())?,
            ResizeListener::attach(&window, flights.clone())?,
        ];
        let loops = vec![
            start_loop(&window, stars.clone())?,
            start_loop(&window, flights.clone())?,
        ];

        let mut app = Self {
            first_spawn: TimerSlot::new(window.clone()),
            repeat_spawn: TimerSlot::new(window),
            spawn: config.spawn,
            stars,
            flights,
            _listeners: listeners,
            _loops: loops,
        };

        let flights = app.flights.clone();
        app.first_spawn
            .set_timeout(app.spawn.initial_delay_ms, move || {
                spawn_flight(&flights);
            })?;
        let interval = app.spawn.interval_ms;
        app.arm_repeat(interval)?;
        Ok(app)
    }

    /// Replace the repeating spawn timer. A non-positive or NaN period only
    /// stops it.
    fn arm_repeat(&mut self, period_ms: f64) -> Result<(), JsValue> {
        self.repeat_spawn.clear();
        self.spawn.interval_ms = period_ms;
        let Some(period_ms) = repeat_period(period_ms) else {
            log::info!("repeating spawns stopped");
            return Ok(());
        };
        let flights = self.flights.clone();
        self.repeat_spawn
            .set_interval(period_ms, move || {
                spawn_flight(&flights);
            })
    }
}

impl Drop for SkyApp {
    fn drop(&mut self) {
        self.stars.borrow_mut().stop();
        self.flights.borrow_mut().stop();
        log::debug!("sky stopped");
    }
}

/// The period to arm a repeating timer with, or `None` to leave it stopped.
fn repeat_period(ms: f64) -> Option<f64> {
    (ms > 0.0).then_some(ms)
}

fn spawn_flight(flights: &FlightLoop) -> bool {
    flights
        .borrow_mut()
        .with_layer(|layer, now, rng| layer.spawn(now, rng).is_some())
}

thread_local! {
    static SKY: RefCell<Option<SkyApp>> = RefCell::new(None);
}

fn with_sky<R>(f: impl FnOnce(&mut SkyApp) -> R) -> Result<R, JsValue> {
    SKY.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let app = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Sky not started. Call start_sky() first."))?;
        Ok(f(app))
    })
}

fn install(stars_id: &str, flights_id: &str, config: SkyConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Tear down a previous sky before taking over the canvases
    SKY.with(|cell| cell.borrow_mut().take());
    let app = SkyApp::start(stars_id, flights_id, config)?;
    SKY.with(|cell| *cell.borrow_mut() = Some(app));

    log::info!("starlight: running on #{} and #{}", stars_id, flights_id);
    Ok(())
}

/// Start both layers on the given canvases with the default configuration.
#[wasm_bindgen]
pub fn start_sky(stars_id: &str, flights_id: &str) -> Result<(), JsValue> {
    install(stars_id, flights_id, SkyConfig::default())
}

/// Start both layers with a JSON configuration. Omitted fields keep their
/// defaults.
#[wasm_bindgen]
pub fn start_sky_with_config(stars_id: &str, flights_id: &str, json: &str) -> Result<(), JsValue> {
    let config = SkyConfig::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("invalid sky config: {}", e)))?;
    install(stars_id, flights_id, config)
}

/// Replace the repeating spawn cadence. The old timer is cleared first.
#[wasm_bindgen]
pub fn set_spawn_interval(ms: f64) -> Result<(), JsValue> {
    with_sky(|app| app.arm_repeat(ms))??;
    log::info!("spawn interval set to {}ms", ms);
    Ok(())
}

/// Spawn a flight immediately. Returns false while the canvas has no area.
#[wasm_bindgen]
pub fn spawn_flight_now() -> Result<bool, JsValue> {
    with_sky(|app| spawn_flight(&app.flights))
}
