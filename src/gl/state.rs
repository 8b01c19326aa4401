// MIT/Apache2 License

//! State queries, context strings and pixel transfer.

use super::{debug::CallKind, marshal, Gl, GlDispatch, GlVersion};
use crate::Error;
use breadgl_enums::{
    self as gl,
    types::{GLboolean, GLenum, GLfloat, GLint, GLint64, GLsizei, GLubyte, GLuint},
};
use std::{
    convert::TryFrom,
    ffi::{c_void, CStr},
    mem, ptr,
};

/// Room for the values of any fixed-count parameter. The largest are 4x4 matrices.
pub(crate) const MAX_QUERY_VALUES: usize = 16;

/// The parameter holding the value count of a variable-count parameter.
fn count_parameter(pname: GLenum) -> Option<GLenum> {
    match pname {
        gl::COMPRESSED_TEXTURE_FORMATS => Some(gl::NUM_COMPRESSED_TEXTURE_FORMATS),
        gl::PROGRAM_BINARY_FORMATS => Some(gl::NUM_PROGRAM_BINARY_FORMATS),
        gl::SHADER_BINARY_FORMATS => Some(gl::NUM_SHADER_BINARY_FORMATS),
        _ => None,
    }
}

/// Values of the multi-valued parameters the crate knows about. Everything else has one.
fn fixed_count(pname: GLenum) -> usize {
    match pname {
        gl::VIEWPORT
        | gl::SCISSOR_BOX
        | gl::COLOR_CLEAR_VALUE
        | gl::COLOR_WRITEMASK
        | gl::BLEND_COLOR => 4,
        gl::DEPTH_RANGE
        | gl::MAX_VIEWPORT_DIMS
        | gl::POLYGON_MODE
        | gl::POINT_SIZE_RANGE
        | gl::ALIASED_POINT_SIZE_RANGE
        | gl::SMOOTH_LINE_WIDTH_RANGE
        | gl::ALIASED_LINE_WIDTH_RANGE => 2,
        _ => 1,
    }
}

/// Client memory layout set by `glPixelStorei`, for one transfer direction.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct PixelStore {
    alignment: GLint,
    row_length: GLint,
    skip_rows: GLint,
    skip_pixels: GLint,
}

/// Buffer binding, alignment, row length, skipped rows and skipped pixels.
type PixelStoreNames = [GLenum; 5];

const PACK: PixelStoreNames = [
    gl::PIXEL_PACK_BUFFER_BINDING,
    gl::PACK_ALIGNMENT,
    gl::PACK_ROW_LENGTH,
    gl::PACK_SKIP_ROWS,
    gl::PACK_SKIP_PIXELS,
];

const UNPACK: PixelStoreNames = [
    gl::PIXEL_UNPACK_BUFFER_BINDING,
    gl::UNPACK_ALIGNMENT,
    gl::UNPACK_ROW_LENGTH,
    gl::UNPACK_SKIP_ROWS,
    gl::UNPACK_SKIP_PIXELS,
];

impl<D: GlDispatch> Gl<D> {
    /// Run a query that writes one or more values and keep the first.
    ///
    /// The driver writes into scratch space big enough for any fixed-count parameter.
    fn query_first<T: Copy + Default>(
        &self,
        function: &'static str,
        pname: GLenum,
        query: impl FnOnce(*mut T) -> crate::Result,
    ) -> crate::Result<T> {
        if count_parameter(pname).is_some() {
            return Err(Error::MultiValued { function, pname });
        }

        let mut scratch = [T::default(); MAX_QUERY_VALUES];
        query(scratch.as_mut_ptr())?;
        self.check_after(function, CallKind::Query)?;
        Ok(scratch[0])
    }

    /// Query an integer parameter. Multi-valued parameters report their first value.
    ///
    /// Parameters with a variable number of values, like `GL_COMPRESSED_TEXTURE_FORMATS`, fail
    /// with [`Error::MultiValued`]; use [`Gl::get_integer_v`] for those.
    #[inline]
    pub fn get_integer(&self, pname: GLenum) -> crate::Result<GLint> {
        self.query_first("glGetIntegerv", pname, |data| unsafe {
            self.GetIntegerv(pname, data)
        })
    }

    /// Query every value of an integer parameter, such as the four of `GL_VIEWPORT`.
    ///
    /// `values` is checked against the number of values `pname` has. Parameters the crate does
    /// not know are assumed to have at most `values.len()` values, or one matrix.
    pub fn get_integer_v(&self, pname: GLenum, values: &mut [GLint]) -> crate::Result {
        const FUNCTION: &str = "glGetIntegerv";

        if values.is_empty() {
            return Err(Error::EmptyArray {
                function: FUNCTION,
                parameter: "values",
            });
        }

        let required = match count_parameter(pname) {
            Some(count) => marshal::written(self.get_integer(count)?, usize::MAX),
            None => fixed_count(pname),
        };
        if values.len() < required {
            return Err(Error::BufferTooSmall {
                function: FUNCTION,
                required: required * mem::size_of::<GLint>(),
                actual: values.len() * mem::size_of::<GLint>(),
            });
        }

        let mut scratch: Vec<GLint> = vec![0; values.len().max(MAX_QUERY_VALUES)];
        unsafe { self.GetIntegerv(pname, scratch.as_mut_ptr())? };
        values.copy_from_slice(&scratch[..values.len()]);
        self.check_after(FUNCTION, CallKind::Query)
    }

    #[inline]
    pub fn get_integer64(&self, pname: GLenum) -> crate::Result<GLint64> {
        self.query_first("glGetInteger64v", pname, |data| unsafe {
            self.GetInteger64v(pname, data)
        })
    }

    #[inline]
    pub fn get_boolean(&self, pname: GLenum) -> crate::Result<bool> {
        let value: GLboolean = self.query_first("glGetBooleanv", pname, |data| unsafe {
            self.GetBooleanv(pname, data)
        })?;
        Ok(value != gl::FALSE)
    }

    #[inline]
    pub fn get_float(&self, pname: GLenum) -> crate::Result<GLfloat> {
        self.query_first("glGetFloatv", pname, |data| unsafe {
            self.GetFloatv(pname, data)
        })
    }

    /// Query a context string such as `GL_VENDOR` or `GL_VERSION`.
    ///
    /// The driver returns null for unknown names; that is reported as the error it queued.
    pub fn get_string(&self, name: GLenum) -> crate::Result<String> {
        let s = unsafe { self.GetString(name)? };
        let s = self.context_string("glGetString", s)?;
        self.check_after("glGetString", CallKind::Query)?;
        Ok(s)
    }

    /// Query an indexed context string, such as one entry of `GL_EXTENSIONS`.
    pub fn get_string_i(&self, name: GLenum, index: GLuint) -> crate::Result<String> {
        let s = unsafe { self.GetStringi(name, index)? };
        let s = self.context_string("glGetStringi", s)?;
        self.check_after("glGetStringi", CallKind::Query)?;
        Ok(s)
    }

    fn context_string(&self, function: &'static str, s: *const GLubyte) -> crate::Result<String> {
        if s.is_null() {
            self.check_error()?;
            return Err(Error::StaticMsg("Driver returned a null string"));
        }

        // SAFETY: context strings are static and nul-terminated
        let bytes = unsafe { CStr::from_ptr(s.cast()) }.to_bytes().to_vec();
        marshal::decode(function, bytes)
    }

    /// List the extensions the context exposes.
    pub fn extensions(&self) -> crate::Result<Vec<String>> {
        let count = self.get_integer(gl::NUM_EXTENSIONS)?.max(0) as GLuint;
        let extensions = (0..count)
            .map(|i| self.get_string_i(gl::EXTENSIONS, i))
            .collect::<crate::Result<Vec<_>>>()?;

        log::debug!("Context exposes {} extensions", extensions.len());
        Ok(extensions)
    }

    /// Tell whether the context exposes an extension, such as `GL_KHR_debug`.
    pub fn supports_extension(&self, name: &str) -> crate::Result<bool> {
        Ok(self.extensions()?.iter().any(|e| e == name))
    }

    /// Query and parse `GL_VERSION`.
    pub fn version(&self) -> crate::Result<GlVersion> {
        let version = self.get_string(gl::VERSION)?;
        GlVersion::parse(&version)
            .ok_or_else(|| Error::Msg(format!("Unrecognized OpenGL version \"{}\"", version)))
    }

    /// Select the color buffers fragment outputs are written to.
    pub fn draw_buffers(&self, buffers: &[GLenum]) -> crate::Result {
        let n = marshal::count("glDrawBuffers", "buffers", buffers)?;
        unsafe { self.DrawBuffers(n, buffers.as_ptr())? };
        self.check_after("glDrawBuffers", CallKind::Command)
    }

    /// Hint that the contents of `attachments` can be discarded.
    pub fn invalidate_framebuffer(&self, target: GLenum, attachments: &[GLenum]) -> crate::Result {
        let n = marshal::count("glInvalidateFramebuffer", "attachments", attachments)?;
        unsafe { self.InvalidateFramebuffer(target, n, attachments.as_ptr())? };
        self.check_after("glInvalidateFramebuffer", CallKind::Command)
    }

    /// Read the pack or unpack state, refusing to go on while a pixel buffer is bound.
    fn pixel_store(&self, names: PixelStoreNames) -> crate::Result<PixelStore> {
        let [binding, alignment, row_length, skip_rows, skip_pixels] = names;
        if self.get_integer(binding)? != 0 {
            return Err(Error::StaticMsg(
                "A pixel buffer is bound, so client memory would not be used",
            ));
        }

        Ok(PixelStore {
            alignment: self.get_integer(alignment)?,
            row_length: self.get_integer(row_length)?,
            skip_rows: self.get_integer(skip_rows)?,
            skip_pixels: self.get_integer(skip_pixels)?,
        })
    }

    /// Read a rectangle of pixels from the read framebuffer into client memory.
    ///
    /// `pixels` is checked against the bytes the driver will write, honoring the `GL_PACK_*`
    /// alignment, row length and skip state. Formats the crate cannot size are rejected, as is a
    /// bound pixel pack buffer.
    #[allow(clippy::too_many_arguments)]
    pub fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: &mut [u8],
    ) -> crate::Result {
        const FUNCTION: &str = "glReadPixels";

        if pixels.is_empty() {
            return Err(Error::EmptyArray {
                function: FUNCTION,
                parameter: "pixels",
            });
        }

        let store = self.pixel_store(PACK)?;
        let required = image_size(FUNCTION, width, height, format, kind, store)?;
        if pixels.len() < required {
            return Err(Error::BufferTooSmall {
                function: FUNCTION,
                required,
                actual: pixels.len(),
            });
        }

        unsafe { self.ReadPixels(x, y, width, height, format, kind, pixels.as_mut_ptr().cast())? };
        self.check_after(FUNCTION, CallKind::Command)
    }

    /// Specify a two-dimensional texture image. `None` allocates storage without uploading.
    ///
    /// `pixels` is checked against the bytes the driver will read, honoring the `GL_UNPACK_*`
    /// alignment, row length and skip state. Uploading from client memory while a pixel unpack
    /// buffer is bound is rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        kind: GLenum,
        pixels: Option<&[u8]>,
    ) -> crate::Result {
        const FUNCTION: &str = "glTexImage2D";

        let data: *const c_void = match pixels {
            None => ptr::null(),
            Some(pixels) => {
                let store = self.pixel_store(UNPACK)?;
                let required = image_size(FUNCTION, width, height, format, kind, store)?;
                if pixels.len() < required {
                    return Err(Error::BufferTooSmall {
                        function: FUNCTION,
                        required,
                        actual: pixels.len(),
                    });
                }
                pixels.as_ptr().cast()
            }
        };

        unsafe {
            self.TexImage2D(
                target,
                level,
                internal_format,
                width,
                height,
                0,
                format,
                kind,
                data,
            )?
        };
        self.check_after(FUNCTION, CallKind::Allocation)
    }
}

/// Bytes per pixel for a client-side `format`/`type` pair.
fn pixel_size(format: GLenum, kind: GLenum) -> Option<usize> {
    let packed = match kind {
        gl::UNSIGNED_BYTE_3_3_2 | gl::UNSIGNED_BYTE_2_3_3_REV => Some(1),
        gl::UNSIGNED_SHORT_5_6_5
        | gl::UNSIGNED_SHORT_5_6_5_REV
        | gl::UNSIGNED_SHORT_4_4_4_4
        | gl::UNSIGNED_SHORT_4_4_4_4_REV
        | gl::UNSIGNED_SHORT_5_5_5_1
        | gl::UNSIGNED_SHORT_1_5_5_5_REV => Some(2),
        gl::UNSIGNED_INT_8_8_8_8
        | gl::UNSIGNED_INT_8_8_8_8_REV
        | gl::UNSIGNED_INT_10_10_10_2
        | gl::UNSIGNED_INT_2_10_10_10_REV
        | gl::UNSIGNED_INT_10F_11F_11F_REV
        | gl::UNSIGNED_INT_5_9_9_9_REV
        | gl::UNSIGNED_INT_24_8 => Some(4),
        gl::FLOAT_32_UNSIGNED_INT_24_8_REV => Some(8),
        _ => None,
    };
    if packed.is_some() {
        return packed;
    }

    let component = match kind {
        gl::UNSIGNED_BYTE | gl::BYTE => 1,
        gl::UNSIGNED_SHORT | gl::SHORT | gl::HALF_FLOAT => 2,
        gl::UNSIGNED_INT | gl::INT | gl::FLOAT => 4,
        _ => return None,
    };
    let components = match format {
        gl::RED | gl::RED_INTEGER | gl::DEPTH_COMPONENT | gl::STENCIL_INDEX => 1,
        gl::RG | gl::RG_INTEGER => 2,
        gl::RGB | gl::BGR | gl::RGB_INTEGER | gl::BGR_INTEGER => 3,
        gl::RGBA | gl::BGRA | gl::RGBA_INTEGER | gl::BGRA_INTEGER => 4,
        _ => return None,
    };

    Some(component * components)
}

/// Bytes of client memory a `width` by `height` transfer touches, counted from the start of the
/// buffer.
fn image_size(
    function: &'static str,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    kind: GLenum,
    store: PixelStore,
) -> crate::Result<usize> {
    let bpp = pixel_size(format, kind).ok_or(Error::StaticMsg("Unsupported pixel format"))?;
    let (width, height) = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(0), _) | (_, Ok(0)) => return Ok(0),
        (Ok(width), Ok(height)) => (width, height),
        _ => return Err(Error::Gl(super::ErrorCode::InvalidValue)),
    };

    let invalid = |_| Error::Gl(super::ErrorCode::InvalidValue);
    let alignment = usize::try_from(store.alignment).unwrap_or(1).max(1);
    let row_length = match usize::try_from(store.row_length).map_err(invalid)? {
        0 => width,
        row_length => row_length,
    };
    let skip_rows = usize::try_from(store.skip_rows).map_err(invalid)?;
    let skip_pixels = usize::try_from(store.skip_pixels).map_err(invalid)?;

    let overflow = || Error::LengthOverflow {
        function,
        length: usize::MAX,
    };
    let row = width.checked_mul(bpp).ok_or_else(overflow)?;
    let stride = row_length
        .checked_mul(bpp)
        .and_then(|s| s.checked_add(alignment - 1))
        .map(|s| s / alignment * alignment)
        .ok_or_else(overflow)?;
    let skipped = skip_rows
        .checked_mul(stride)
        .and_then(|rows| rows.checked_add(skip_pixels.checked_mul(bpp)?))
        .ok_or_else(overflow)?;

    stride
        .checked_mul(height - 1)
        .and_then(|body| body.checked_add(row))
        .and_then(|body| body.checked_add(skipped))
        .ok_or_else(overflow)
}
