// MIT/Apache2 License

//! Generating and deleting object names, and moving data in and out of buffers.

use super::{debug::CallKind, marshal, Gl, GlDispatch};
use breadgl_enums::types::{GLenum, GLintptr, GLsizei, GLsizeiptr, GLuint};
use std::{ffi::c_void, ptr};

macro_rules! object_names {
    ($(
        $kind: literal: $gen_many: ident, $gen_one: ident, $delete: ident => $gen: ident, $del: ident;
    )*) => {
        impl<D: GlDispatch> Gl<D> {
            $(
                #[doc = concat!("Generate `n` ", $kind, " names. Asking for none makes no call.")]
                #[inline]
                pub fn $gen_many(&self, n: usize) -> crate::Result<Vec<GLuint>> {
                    self.gen_names(concat!("gl", stringify!($gen)), n, |count, names| unsafe {
                        self.$gen(count, names)
                    })
                }

                #[doc = concat!("Generate a single ", $kind, " name.")]
                #[inline]
                pub fn $gen_one(&self) -> crate::Result<GLuint> {
                    let mut name = 0;
                    unsafe { self.$gen(1, &mut name)? };
                    self.check_after(concat!("gl", stringify!($gen)), CallKind::Command)?;
                    Ok(name)
                }

                #[doc = concat!("Delete ", $kind, " names. Zero and unknown names are ignored by the driver.")]
                #[inline]
                pub fn $delete(&self, names: &[GLuint]) -> crate::Result {
                    const FUNCTION: &str = concat!("gl", stringify!($del));
                    let count = marshal::count(FUNCTION, "names", names)?;
                    unsafe { self.$del(count, names.as_ptr())? };
                    self.check_after(FUNCTION, CallKind::Command)
                }
            )*
        }
    }
}

object_names! {
    "buffer": gen_buffers, gen_buffer, delete_buffers => GenBuffers, DeleteBuffers;
    "vertex array": gen_vertex_arrays, gen_vertex_array, delete_vertex_arrays => GenVertexArrays, DeleteVertexArrays;
    "texture": gen_textures, gen_texture, delete_textures => GenTextures, DeleteTextures;
    "framebuffer": gen_framebuffers, gen_framebuffer, delete_framebuffers => GenFramebuffers, DeleteFramebuffers;
    "renderbuffer": gen_renderbuffers, gen_renderbuffer, delete_renderbuffers => GenRenderbuffers, DeleteRenderbuffers;
    "query": gen_queries, gen_query, delete_queries => GenQueries, DeleteQueries;
    "sampler": gen_samplers, gen_sampler, delete_samplers => GenSamplers, DeleteSamplers;
}

impl<D: GlDispatch> Gl<D> {
    fn gen_names<G>(&self, function: &'static str, n: usize, gen: G) -> crate::Result<Vec<GLuint>>
    where
        G: FnOnce(GLsizei, *mut GLuint) -> crate::Result,
    {
        if n == 0 {
            return Ok(Vec::new());
        }

        let count = marshal::length(function, n)?;
        let mut names = vec![0; n];
        gen(count, names.as_mut_ptr())?;
        self.check_after(function, CallKind::Command)?;
        Ok(names)
    }

    /// Create and initialize the data store of the buffer bound to `target`.
    pub fn buffer_data<T: Copy>(&self, target: GLenum, data: &[T], usage: GLenum) -> crate::Result {
        let size = marshal::byte_size("glBufferData", "data", data)?;
        unsafe { self.BufferData(target, size, data.as_ptr().cast(), usage)? };
        self.check_after("glBufferData", CallKind::Allocation)
    }

    /// Allocate `size` bytes of uninitialized storage for the buffer bound to `target`.
    pub fn buffer_data_empty(&self, target: GLenum, size: usize, usage: GLenum) -> crate::Result {
        let size: GLsizeiptr = marshal::length("glBufferData", size)?;
        unsafe { self.BufferData(target, size, ptr::null(), usage)? };
        self.check_after("glBufferData", CallKind::Allocation)
    }

    /// Overwrite part of the buffer bound to `target`, starting `offset` bytes in.
    pub fn buffer_sub_data<T: Copy>(&self, target: GLenum, offset: usize, data: &[T]) -> crate::Result {
        let size = marshal::byte_size("glBufferSubData", "data", data)?;
        let offset: GLintptr = marshal::length("glBufferSubData", offset)?;
        unsafe { self.BufferSubData(target, offset, size, data.as_ptr().cast())? };
        self.check_after("glBufferSubData", CallKind::Command)
    }

    /// Copy bytes out of the buffer bound to `target` into `data`, which is filled completely.
    pub fn get_buffer_sub_data<T: Copy>(
        &self,
        target: GLenum,
        offset: usize,
        data: &mut [T],
    ) -> crate::Result {
        let size = marshal::byte_size("glGetBufferSubData", "data", data)?;
        let offset: GLintptr = marshal::length("glGetBufferSubData", offset)?;
        unsafe {
            self.GetBufferSubData(target, offset, size, data.as_mut_ptr().cast::<c_void>())?
        };
        self.check_after("glGetBufferSubData", CallKind::Query)
    }
}
