// MIT/Apache2 License

use breadgl::{enums as gl, Gl, GlDispatch};
use glutin::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
    ContextBuilder,
};
use std::{error::Error, ffi::CStr, rc::Rc};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // create the window and make its context current
    let event_loop = EventLoop::new();
    let windowed_ctx = ContextBuilder::new()
        .with_gl_debug_flag(true)
        .build_windowed(WindowBuilder::new().with_title("breadgl"), &event_loop)?;
    let ctx = Rc::new(unsafe { windowed_ctx.make_current().map_err(|(_, e)| e)? });

    // functions are looked up the first time they are called
    let loader = ctx.clone();
    let gl = unsafe {
        Gl::load_with(move |name: &CStr| {
            loader.get_proc_address(name.to_str().unwrap_or_default())
        })
    };
    if gl.supports_extension("GL_KHR_debug")? {
        gl.enable_debug_output()?;
    }

    log::info!(
        "{} on {} ({})",
        gl.version()?,
        gl.get_string(gl::RENDERER)?,
        gl.get_string(gl::VENDOR)?
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => ctx.resize(size),
            Event::RedrawRequested(_) => {
                if let Err(e) = clear(&gl) {
                    log::error!("Failed to clear the window: {}", e);
                    *control_flow = ControlFlow::Exit;
                    return;
                }

                if let Err(e) = ctx.swap_buffers() {
                    log::error!("Failed to swap buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}

fn clear<D: GlDispatch>(gl: &Gl<D>) -> breadgl::Result {
    unsafe {
        gl.ClearColor(0.9, 0.6, 0.3, 1.0)?;
        gl.Clear(gl::COLOR_BUFFER_BIT)?;
    }
    gl.check_error()
}
