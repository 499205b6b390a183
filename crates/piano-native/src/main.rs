mod helpers;
mod render;

use piano_hammer::input::{self, KeyAction, Outcome, CONTROLS_HELP};
use piano_hammer::{Scene, SceneParams, WINDOW_SIZE, WINDOW_TITLE};
use render::GpuState;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

/// Name of a key as understood by `input::classify`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        _ => None,
    }
}

fn key_action(event: &KeyEvent) -> KeyAction {
    match (event.state, event.repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("\n{CONTROLS_HELP}");

    let mut scene = Scene::new(SceneParams::default());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(WINDOW_SIZE[0], WINDOW_SIZE[1]))
        .build(&event_loop)?;
    let size = window.inner_size();
    scene.resize(size.width, size.height);

    let mut state = match pollster::block_on(GpuState::new(&window, &scene)) {
        Ok(s) => s,
        Err(e) => {
            log::error!("gpu init failed: {e:#}");
            return Err(e);
        }
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            scene.resize(size.width, size.height);
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => {
            let Some(name) = key_name(&event.logical_key) else {
                return;
            };
            if let Some(ev) = input::classify(name, key_action(&event)) {
                if input::dispatch(&mut scene, ev) == Outcome::Quit {
                    elwt.exit();
                }
            }
        }
        Event::AboutToWait => match state.render(&scene) {
            Ok(_) => {
                scene.update();
                state.window.request_redraw();
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::error!("render error: {e:?}"),
        },
        _ => {}
    })?;
    Ok(())
}
