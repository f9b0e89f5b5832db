use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::UVec2;
use serde::Deserialize;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

use crate::error::EngineError;
use crate::input::EventQueue;
use crate::render::graphics::{create_graphics, Graphics, GraphicsReady};
use crate::render::{Canvas, DrawList};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Pause between the end of one frame and the next tick.
    pub tick_delay_ms: u64,
}

impl WindowConfig {
    pub fn logical_size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

/// What the engine drives once per tick.
pub trait Game {
    /// Consume pending input and advance the world by one tick.
    fn tick(&mut self, events: &mut EventQueue);

    /// Draw the current world. Must not mutate it.
    fn draw<C: Canvas>(&self, canvas: &mut C);

    /// Checked after each ticked frame has been shown.
    fn is_running(&self) -> bool;
}

enum State<G> {
    Init(Option<EventLoopProxy<GraphicsReady>>),
    Ready { graphics: Graphics, game: G },
}

/// What the driver does once a ticked frame is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterFrame {
    TickAt(Instant),
    Exit,
}

/// One pass of the loop: advance the game, draw it, present it, then decide
/// when to come back.
fn run_tick<G, P>(
    game: &mut G,
    events: &mut EventQueue,
    frame: &mut DrawList,
    present: P,
    delay: Duration,
) -> Result<AfterFrame, EngineError>
where
    G: Game,
    P: FnOnce(&DrawList) -> Result<(), EngineError>,
{
    game.tick(events);
    game.draw(frame);
    present(frame)?;
    if game.is_running() {
        Ok(AfterFrame::TickAt(Instant::now() + delay))
    } else {
        Ok(AfterFrame::Exit)
    }
}

struct App<G, F> {
    config: WindowConfig,
    state: State<G>,
    setup: Option<F>,
    events: EventQueue,
    frame: DrawList,
    /// Set once the game exists; cleared when it has finished.
    next_tick: Option<Instant>,
    error: Option<EngineError>,
}

impl<G, F> App<G, F>
where
    G: Game,
    F: FnOnce(&mut Graphics) -> Result<G, EngineError>,
{
    fn new(config: WindowConfig, event_loop: &EventLoop<GraphicsReady>, setup: F) -> Self {
        Self {
            config,
            state: State::Init(Some(event_loop.create_proxy())),
            setup: Some(setup),
            events: EventQueue::new(),
            frame: DrawList::new(),
            next_tick: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: EngineError) {
        log::error!("{error}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn wait_until(&mut self, event_loop: &ActiveEventLoop, at: Instant) {
        self.next_tick = Some(at);
        event_loop.set_control_flow(ControlFlow::WaitUntil(at));
    }

    /// Show the current world again without ticking, for redraws the OS asks for.
    fn repaint(&mut self, event_loop: &ActiveEventLoop) {
        let State::Ready { graphics, game } = &mut self.state else {
            return;
        };
        game.draw(&mut self.frame);
        if let Err(e) = graphics.present(&self.frame) {
            self.fail(event_loop, e);
        }
    }

    fn resized(&mut self, size: PhysicalSize<u32>) {
        if let State::Ready { graphics, .. } = &mut self.state {
            graphics.resize(size);
        }
    }
}

impl<G, F> ApplicationHandler<GraphicsReady> for App<G, F>
where
    G: Game,
    F: FnOnce(&mut Graphics) -> Result<G, EngineError>,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let State::Init(proxy) = &mut self.state else {
            return;
        };
        let Some(proxy) = proxy.take() else {
            return;
        };

        let win_attr = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);
        let window = match event_loop.create_window(win_attr) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        pollster::block_on(create_graphics(
            window,
            self.config.logical_size(),
            proxy,
        ));
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, ready: GraphicsReady) {
        let mut graphics = match ready {
            Ok(graphics) => graphics,
            Err(e) => return self.fail(event_loop, e),
        };
        let Some(setup) = self.setup.take() else {
            return;
        };
        match setup(&mut graphics) {
            Ok(game) => {
                self.state = State::Ready { graphics, game };
                let first = Instant::now() + self.config.tick_delay();
                self.wait_until(event_loop, first);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.error.is_some() {
            return;
        }
        match event {
            WindowEvent::Resized(size) => self.resized(size),
            WindowEvent::RedrawRequested => self.repaint(event_loop),
            WindowEvent::CloseRequested if matches!(self.state, State::Init(_)) => {
                event_loop.exit()
            }
            other => self.events.capture(&other),
        }
    }

    // Ticks run here rather than on RedrawRequested, which the OS may withhold
    // from hidden windows.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let State::Ready { graphics, game } = &mut self.state else {
            return;
        };
        let Some(at) = self.next_tick else {
            return;
        };
        if Instant::now() < at {
            event_loop.set_control_flow(ControlFlow::WaitUntil(at));
            return;
        }

        let outcome = run_tick(
            game,
            &mut self.events,
            &mut self.frame,
            |frame| graphics.present(frame),
            self.config.tick_delay(),
        );
        match outcome {
            Ok(AfterFrame::TickAt(next)) => self.wait_until(event_loop, next),
            Ok(AfterFrame::Exit) => {
                log::info!("game finished, closing");
                self.next_tick = None;
                event_loop.exit();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }
}

/// Install env_logger with `default_filter`, unless RUST_LOG overrides it.
/// Does nothing if a logger is already installed.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

pub struct EngineContext {
    config: WindowConfig,
    event_loop: EventLoop<GraphicsReady>,
}

impl EngineContext {
    pub fn new(config: WindowConfig) -> Result<Self, EngineError> {
        let event_loop = EventLoop::<GraphicsReady>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        Ok(Self { config, event_loop })
    }

    /// Open the window, build the game with `setup` and run until the game
    /// stops or something fails. Runs on the current thread.
    pub fn run<G, F>(self, setup: F) -> Result<(), EngineError>
    where
        G: Game,
        F: FnOnce(&mut Graphics) -> Result<G, EngineError>,
    {
        let mut app = App::new(self.config, &self.event_loop, setup);
        self.event_loop.run_app(&mut app)?;
        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_from_toml() {
        let config: WindowConfig = toml::from_str(
            r#"
            title = "demo"
            width = 800
            height = 600
            tick_delay_ms = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.logical_size(), UVec2::new(800, 600));
        assert_eq!(config.tick_delay(), Duration::from_millis(5));
        assert_eq!(config.title, "demo");
    }

    #[test]
    fn init_logging_can_be_called_twice() {
        init_logging("warn");
        init_logging("trace");
        log::info!("logger still usable");
    }

    use crate::input::{Key, RawEvent};
    use crate::render::{Sprite, TextureId};
    use crate::Rect;

    /// Counts ticks and stops once it sees a quit event.
    #[derive(Default)]
    struct Counter {
        ticks: u32,
        quit: bool,
        log: Vec<&'static str>,
    }

    impl Game for Counter {
        fn tick(&mut self, events: &mut EventQueue) {
            while let Some(event) = crate::input::EventSource::next_event(events) {
                if event == RawEvent::Quit {
                    self.quit = true;
                }
            }
            self.ticks += 1;
            self.log.push("tick");
        }

        fn draw<C: Canvas>(&self, canvas: &mut C) {
            canvas.clear(crate::render::Color::BLACK);
            for i in 0..self.ticks {
                canvas.blit(&Sprite::new(TextureId(0), 1, 1), Rect::new(i as i32, 0, 1, 1));
            }
        }

        fn is_running(&self) -> bool {
            !self.quit
        }
    }

    #[test]
    fn tick_draws_presents_and_reschedules() {
        let mut game = Counter::default();
        let mut events = EventQueue::new();
        events.push(RawEvent::KeyDown(Key::D));
        let mut frame = DrawList::new();
        let mut shown = Vec::new();
        let delay = Duration::from_millis(5);

        let before = Instant::now();
        let outcome = run_tick(
            &mut game,
            &mut events,
            &mut frame,
            |f| {
                shown.push(f.blits.len());
                Ok(())
            },
            delay,
        )
        .unwrap();

        assert!(events.is_empty());
        assert_eq!(shown, vec![1], "frame drawn after the tick");
        match outcome {
            AfterFrame::TickAt(at) => assert!(at >= before + delay),
            AfterFrame::Exit => panic!("game is still running"),
        }
    }

    #[test]
    fn quit_tick_is_presented_before_exit() {
        let mut game = Counter::default();
        let mut events = EventQueue::new();
        events.push(RawEvent::Quit);
        let mut frame = DrawList::new();
        let mut presented = false;

        let outcome = run_tick(
            &mut game,
            &mut events,
            &mut frame,
            |_| {
                presented = true;
                Ok(())
            },
            Duration::from_millis(5),
        )
        .unwrap();

        assert!(presented);
        assert_eq!(game.ticks, 1);
        assert_eq!(outcome, AfterFrame::Exit);
    }

    #[test]
    fn quit_is_seen_even_if_nothing_is_shown() {
        // no redraw event is involved, ticking alone reaches the queued quit
        let mut game = Counter::default();
        let mut events = EventQueue::new();
        let mut frame = DrawList::new();
        let delay = Duration::ZERO;

        for _ in 0..3 {
            let outcome = run_tick(&mut game, &mut events, &mut frame, |_| Ok(()), delay).unwrap();
            assert!(matches!(outcome, AfterFrame::TickAt(_)));
        }
        events.push(RawEvent::Quit);
        let outcome = run_tick(&mut game, &mut events, &mut frame, |_| Ok(()), delay).unwrap();
        assert_eq!(outcome, AfterFrame::Exit);
        assert_eq!(game.log.len(), 4);
    }

    #[test]
    fn present_failure_stops_the_loop() {
        let mut game = Counter::default();
        let mut events = EventQueue::new();
        let mut frame = DrawList::new();

        let outcome = run_tick(
            &mut game,
            &mut events,
            &mut frame,
            |_| Err(EngineError::UnsupportedSurface),
            Duration::from_millis(5),
        );
        assert!(matches!(outcome, Err(EngineError::UnsupportedSurface)));
        assert_eq!(game.ticks, 1);
    }
}
