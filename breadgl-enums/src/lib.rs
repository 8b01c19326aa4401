// MIT/Apache2 License

//! Scalar types and enumerants of the OpenGL API, used by the `breadgl` crate.
//!
//! The types follow the widths the Khronos registry fixes for each platform ABI: `GLenum` and
//! `GLuint` are always 32-bit unsigned, `GLsizeiptr` and `GLintptr` are pointer-sized, and
//! `GLuint64` carries timeouts and counters. Everything here is plain data, so the crate does not
//! need the standard library.

#![no_std]
#![warn(clippy::pedantic)]
#![allow(clippy::unreadable_literal)]

pub mod types;

mod constants;
pub use constants::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_contiguous() {
        assert_eq!(INVALID_ENUM, 0x0500);
        assert_eq!(INVALID_VALUE, INVALID_ENUM + 1);
        assert_eq!(INVALID_OPERATION, INVALID_ENUM + 2);
        assert_eq!(OUT_OF_MEMORY, 0x0505);
        assert_eq!(INVALID_FRAMEBUFFER_OPERATION, 0x0506);
        assert_eq!(CONTEXT_LOST, 0x0507);
    }

    #[test]
    fn special_widths() {
        assert_eq!(TIMEOUT_IGNORED, u64::MAX);
        assert_eq!(INVALID_INDEX, u32::MAX);
        assert_eq!(TRUE, 1);
        assert_eq!(FALSE, 0);
    }

    #[test]
    fn shader_stage_values() {
        assert_eq!(FRAGMENT_SHADER, 0x8B30);
        assert_eq!(VERTEX_SHADER, 0x8B31);
        assert_eq!(GEOMETRY_SHADER, 0x8DD9);
        assert_eq!(TESS_EVALUATION_SHADER, 0x8E87);
        assert_eq!(TESS_CONTROL_SHADER, 0x8E88);
        assert_eq!(COMPUTE_SHADER, 0x91B9);
    }

    #[test]
    fn type_widths() {
        use core::mem::size_of;
        use types::*;

        assert_eq!(size_of::<GLenum>(), 4);
        assert_eq!(size_of::<GLsizei>(), 4);
        assert_eq!(size_of::<GLuint64>(), 8);
        assert_eq!(size_of::<GLsizeiptr>(), size_of::<usize>());
        assert_eq!(size_of::<GLsync>(), size_of::<usize>());
        assert_eq!(size_of::<GLDEBUGPROC>(), size_of::<usize>());
    }
}
