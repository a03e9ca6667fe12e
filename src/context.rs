use std::ffi::{c_char, CStr, CString};
use std::num::NonZeroU32;

use gl::types::*;
use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::info;
use raw_window_handle::HasRawWindowHandle;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;
use crate::error::InitError;

/// Window plus a current OpenGL 4.1 core context and its surface.
pub struct GlContext {
    window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
}

impl GlContext {
    pub fn new(event_loop: &EventLoop<()>, config: &WindowConfig) -> Result<Self, InitError> {
        let window_builder = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);

        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .unwrap()
            })
            .map_err(|e| InitError::Display(e.to_string()))?;

        let window = window.ok_or(InitError::MissingWindow)?;
        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 1))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();

        let gl_context = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };

        let gl_context = gl_context.make_current(&gl_surface)?;

        // Load OpenGL functions
        gl::load_with(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str()) as *const _
        });

        if config.vsync {
            gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))?;
        }

        let context = Self {
            window,
            gl_context,
            gl_surface,
        };
        context.log_versions();
        Ok(context)
    }

    fn log_versions(&self) {
        info!("OpenGL version: {}", gl_string(gl::VERSION));
        info!("GLSL version:   {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

        let logical = self.logical_size();
        let physical = self.window.inner_size();
        info!("window size: {}x{}", logical.width, logical.height);
        info!("framebuffer size: {}x{}", physical.width, physical.height);
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn logical_size(&self) -> LogicalSize<f64> {
        self.window
            .inner_size()
            .to_logical(self.window.scale_factor())
    }

    /// Resizes the surface and sets the viewport to the physical pixel size.
    pub fn resize(&self, physical: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (
            NonZeroU32::new(physical.width),
            NonZeroU32::new(physical.height),
        ) else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, width, height);
        unsafe {
            gl::Viewport(0, 0, physical.width as GLint, physical.height as GLint);
        }
    }

    pub fn swap_buffers(&self) -> Result<(), InitError> {
        self.gl_surface.swap_buffers(&self.gl_context)?;
        Ok(())
    }
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return String::from("unknown");
    }
    unsafe { CStr::from_ptr(ptr as *const c_char) }
        .to_string_lossy()
        .into_owned()
}
