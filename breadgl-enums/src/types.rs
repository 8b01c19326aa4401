// MIT/Apache2 License

#![allow(non_camel_case_types)]

use core::ffi::{c_char, c_double, c_float, c_int, c_short, c_uchar, c_uint, c_ushort, c_void};

pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLbitfield = c_uint;
pub type GLvoid = c_void;
pub type GLbyte = i8;
pub type GLubyte = c_uchar;
pub type GLshort = c_short;
pub type GLushort = c_ushort;
pub type GLint = c_int;
pub type GLuint = c_uint;
pub type GLsizei = c_int;
pub type GLfloat = c_float;
pub type GLclampf = c_float;
pub type GLdouble = c_double;
pub type GLclampd = c_double;
pub type GLchar = c_char;
pub type GLhalf = c_ushort;
pub type GLfixed = GLint;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;

/// Target of a [`GLsync`] pointer. It is never constructed or read.
pub enum __GLsync {}

/// A driver sync object, as the native API spells it.
pub type GLsync = *const __GLsync;

/// Callback invoked by the driver for KHR_debug messages.
pub type GLDEBUGPROC = Option<
    unsafe extern "system" fn(
        source: GLenum,
        gltype: GLenum,
        id: GLuint,
        severity: GLenum,
        length: GLsizei,
        message: *const GLchar,
        user_param: *const c_void,
    ),
>;
