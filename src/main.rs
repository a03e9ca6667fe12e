use anyhow::Result;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{EventLoop, EventLoopBuilder},
};

use quadline::{
    FrameRenderer, GlContext, InitError, QuadOutline, RenderConfig, RenderState, ShaderProgram,
    ShaderSource, ShaderStage, WindowConfig, QUAD_POINTS,
};

const VERTEX_SHADER_PATH: &str = "shaders/point.vert";
const FRAGMENT_SHADER_PATH: &str = "shaders/point.frag";

struct App {
    context: GlContext,
    renderer: FrameRenderer,
    state: RenderState,
}

impl App {
    fn new(event_loop: &EventLoop<()>) -> Result<Self> {
        let window_config = WindowConfig::default();
        let render_config = RenderConfig::default();

        let context = GlContext::new(event_loop, &window_config)?;

        let vertex = ShaderSource::load(VERTEX_SHADER_PATH, ShaderStage::Vertex)?;
        let fragment = ShaderSource::load(FRAGMENT_SHADER_PATH, ShaderStage::Fragment)?;
        let program = ShaderProgram::build(&vertex, &fragment)?;

        let quad = QuadOutline::upload(&QUAD_POINTS);
        let renderer = FrameRenderer::new(program, quad, &render_config);

        let state = RenderState::new(
            context.logical_size(),
            context.window().inner_size(),
            render_config.scale,
        );
        context.resize(context.window().inner_size());

        Ok(Self {
            context,
            renderer,
            state,
        })
    }
}

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let event_loop = EventLoopBuilder::new().build().map_err(InitError::EventLoop)?;
    let mut app = App::new(&event_loop)?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(physical) => {
                let logical = physical.to_logical::<f64>(app.context.window().scale_factor());
                app.state.handle_resize(logical, physical);
                app.context.resize(physical);
            }
            WindowEvent::RedrawRequested => {
                app.renderer.render(&app.state);
                if let Err(e) = app.context.swap_buffers() {
                    error!("Failed to present frame: {e}");
                    elwt.exit();
                }
            }
            _ => (),
        },
        Event::AboutToWait => {
            app.context.window().request_redraw();
        }
        _ => (),
    })?;

    Ok(())
}
