// src/main.rs

pub mod app;
pub mod logging;
pub mod rendering_lib;

use std::sync::Arc;

use anyhow::Context as _;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use app::GasketApp;
use sierpinski_gasket::config::{self, GasketConfig};
use sierpinski_gasket::generator::GasketGenerator;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn run() {
    logging::init_logging();

    if let Err(err) = start().await {
        log::error!("{err:#}");
    }
}

async fn start() -> anyhow::Result<()> {
    let gasket = GasketConfig::default();
    if gasket.triangle.is_degenerate() {
        log::warn!("gasket vertices are collinear; points will collapse onto a line");
    }

    let points = GasketGenerator::with_thread_rng(gasket.triangle).generate(gasket.num_points);
    log::info!("generated {} gasket points", points.len());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(config::CANVAS_WIDTH, config::CANVAS_HEIGHT))
            .with_resizable(false)
            .build(&event_loop)
            .context("failed to create window")?,
    );

    #[cfg(target_arch = "wasm32")]
    attach_canvas(&window)?;

    let mut app_state = GasketApp::new(window.clone(), &gasket, &points)
        .await
        .context("WebGL isn't available")?;
    // the GPU holds its own copy from here on
    drop(points);

    window.request_redraw();

    event_loop
        .run(move |event, target: &EventLoopWindowTarget<()>| {
            target.set_control_flow(ControlFlow::Wait);

            if let Event::WindowEvent { ref event, window_id } = event {
                if window_id != window.id() {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    WindowEvent::Resized(physical_size) => {
                        app_state.resize(*physical_size);
                        window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => match app_state.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            app_state.resize(app_state.get_size());
                            window.request_redraw();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("wgpu out of memory, exiting");
                            target.exit();
                        }
                        Err(e) => log::warn!("surface error: {e:?}"),
                    },
                    _ => {}
                }
            }
        })
        .context("event loop terminated abnormally")?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn attach_canvas(window: &winit::window::Window) -> anyhow::Result<()> {
    use winit::platform::web::WindowExtWebSys;

    let canvas = window.canvas().context("window has no canvas")?;
    let document = web_sys::window()
        .and_then(|win| win.document())
        .context("no document to attach the canvas to")?;
    let parent: web_sys::Element = match document.get_element_by_id(config::CANVAS_ELEMENT_ID) {
        Some(element) => element,
        None => document.body().context("document has no body")?.into(),
    };
    parent
        .append_child(&web_sys::Element::from(canvas))
        .map_err(|_| anyhow::anyhow!("couldn't append canvas to #{}", config::CANVAS_ELEMENT_ID))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}
