// MIT/Apache2 License

//! Lazily loaded OpenGL bindings.
//!
//! A [`Gl`] owns the entry points of one context. Each one is looked up through a [`GlDispatch`]
//! the first time it is called, then cached. The raw entry points are `unsafe` methods named
//! after the native functions (`gl.GenBuffers(..)`); the snake_case methods (`gl.gen_buffers(..)`)
//! take slices and strings instead of pointers.
//!
//! ```no_run
//! # fn platform_get_proc_address(_: &std::ffi::CStr) -> *const std::ffi::c_void { std::ptr::null() }
//! use breadgl::{enums as gl, Gl};
//!
//! # fn main() -> breadgl::Result {
//! let gl = unsafe { Gl::load_with(|name: &std::ffi::CStr| platform_get_proc_address(name)) };
//! let buffer = gl.gen_buffer()?;
//! unsafe { gl.BindBuffer(gl::ARRAY_BUFFER, buffer)? };
//! gl.buffer_data(gl::ARRAY_BUFFER, &[0.0f32, 0.5, -0.5, -0.5, 0.5, -0.5], gl::STATIC_DRAW)?;
//! gl.check_error()?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_safety_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod error;
pub mod gl;

pub(crate) mod util;

pub use error::*;
pub use gl::*;

#[doc(inline)]
pub use breadgl_enums as enums;
pub use breadgl_enums::types;
