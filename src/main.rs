use anyhow::Context;
use instant::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use aura::constants::WINDOW_TITLE;
use aura::{command_for_key, rotate_key, Settings, Stage};
use aura_core::{Choreographer, RenderBuffer};

mod render;

/// DOM-style name for a logical key, as understood by `command_for_key`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(named) => Some(match named {
            NamedKey::ArrowLeft => "ArrowLeft",
            NamedKey::ArrowRight => "ArrowRight",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::Control => "Control",
            NamedKey::Space => " ",
            NamedKey::Enter => "Enter",
            NamedKey::Tab => "Tab",
            NamedKey::F1 => "F1",
            NamedKey::F2 => "F2",
            NamedKey::F3 => "F3",
            NamedKey::Escape => "Escape",
            _ => return None,
        }),
        _ => None,
    }
}

fn handle_key(stage: &mut Stage, event: &KeyEvent) {
    let Some(name) = key_name(&event.logical_key) else {
        return;
    };
    let pressed = event.state == ElementState::Pressed;
    if let Some(dir) = rotate_key(name) {
        if pressed {
            stage.press_rotate(dir);
        } else {
            stage.release_rotate(dir);
        }
        return;
    }
    let Some(command) = command_for_key(name) else {
        return;
    };
    if !pressed {
        stage.release(command);
    } else if !event.repeat {
        stage.apply(command);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::from_env()?;
    let mut choreographer = Choreographer::new(settings.choreographer.clone())
        .context("failed to build the particle arena")?;
    let mut stage = Stage::new(settings.choreographer.shape);
    let mut frame = RenderBuffer::new(choreographer.slot_count());

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)
        .context("window")?;

    let mut gpu = pollster::block_on(render::GpuState::new(&window, choreographer.slot_count()))
        .context("gpu")?;
    let start = Instant::now();
    log::info!(
        "aura starting: {} slots, keys 1-5 shapes, a-w colours, ctrl lock, space clap, enter pinch",
        choreographer.slot_count()
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                handle_key(&mut stage, &event);
                if stage.quit_requested {
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                stage.hand.set_cursor(position.y, gpu.height());
            }
            WindowEvent::CursorLeft { .. } => stage.hand.set_present(false),
            _ => {}
        },
        Event::AboutToWait => {
            let now = start.elapsed();
            let sample = stage.hand.sample();
            stage.observe_hand(sample, now.as_secs_f64());
            stage.tick_rotation();
            stage.drive(&mut choreographer, now.as_secs_f32());

            choreographer.compose_into(&mut frame, stage.layers);
            frame.color = stage.color().value();
            frame.glow = stage.color().glow();

            match gpu.render(&frame, &stage.rotation) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
