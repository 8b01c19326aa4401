// MIT/Apache2 License

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(clippy::too_many_arguments)]

use super::{Gl, GlDispatch, Slot};
use breadgl_enums::types::*;
use std::ffi::c_void;

macro_rules! return_type {
    () => { () };
    ($ret: ty) => { $ret };
}

macro_rules! define_gl_functions {
    ($(
        $(#[$attr: meta])*
        $fname: ident ($($arg: ident : $argty: ty),*) $(-> $ret: ty)? $(=> [$($alias: ident),+])?;
    )*) => {
        /// Entry point names: the core name first, then its extension aliases.
        mod names {
            use crate::util::StaticCstr;

            $(
                pub(super) const $fname: &[StaticCstr] = &[
                    StaticCstr::new(concat!("gl", stringify!($fname), "\0")),
                    $($(StaticCstr::new(concat!("gl", stringify!($alias), "\0")),)+)?
                ];
            )*
        }

        /// One lazily filled slot per entry point.
        pub(crate) struct GlFunctions {
            $($fname: Slot<unsafe extern "system" fn($($argty),*) $(-> $ret)?>,)*
        }

        impl GlFunctions {
            #[inline]
            pub(crate) fn new() -> Self {
                Self {
                    $($fname: Slot::empty(),)*
                }
            }

            pub(crate) fn resolved_count(&self) -> usize {
                let mut count = 0;
                $(
                    if self.$fname.is_resolved() {
                        count += 1;
                    }
                )*
                count
            }
        }

        impl<D: GlDispatch> Gl<D> {
            $(
                $(#[$attr])*
                #[doc = concat!("Calls `gl", stringify!($fname), "`, resolving it on first use.")]
                ///
                /// # Safety
                ///
                /// The arguments are forwarded to the driver unchecked; they must satisfy the
                /// OpenGL specification for this command.
                #[inline]
                pub unsafe fn $fname(&self, $($arg: $argty),*) -> crate::Result<return_type!($($ret)?)> {
                    let entry_point = self.load(&self.functions.$fname, names::$fname)?;
                    Ok(entry_point($($arg),*))
                }
            )*

            /// Resolve every entry point in the table now.
            ///
            /// Returns the names the current context does not support. Calling one of them later
            /// fails with [`Error::NotSupported`](crate::Error::NotSupported).
            pub fn preload(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.load(&self.functions.$fname, names::$fname).is_err() {
                        missing.push(names::$fname[0].as_str());
                    }
                )*

                log::debug!(
                    "Preloaded OpenGL functions, {} resolved and {} missing",
                    self.functions.resolved_count(),
                    missing.len()
                );
                missing
            }

            /// Tell whether the context exposes the named entry point, resolving it if needed.
            ///
            /// Names outside this table are reported as unsupported; use
            /// [`Gl::get_proc_address`] for those.
            pub fn supports(&self, name: &str) -> bool {
                match name {
                    $(
                        concat!("gl", stringify!($fname)) => {
                            self.load(&self.functions.$fname, names::$fname).is_ok()
                        }
                    )*
                    _ => false,
                }
            }

            /// Tell whether the named entry point has been resolved already, without a lookup.
            pub fn is_resolved(&self, name: &str) -> bool {
                match name {
                    $(concat!("gl", stringify!($fname)) => self.functions.$fname.is_resolved(),)*
                    _ => false,
                }
            }
        }
    }
}

define_gl_functions! {
    // State queries and errors
    GetError() -> GLenum;
    GetString(name: GLenum) -> *const GLubyte;
    GetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
    GetBooleanv(pname: GLenum, data: *mut GLboolean);
    GetIntegerv(pname: GLenum, data: *mut GLint);
    GetInteger64v(pname: GLenum, data: *mut GLint64) => [GetInteger64vAPPLE];
    GetIntegeri_v(target: GLenum, index: GLuint, data: *mut GLint) => [GetIntegerIndexedvEXT];
    GetInteger64i_v(target: GLenum, index: GLuint, data: *mut GLint64);
    GetFloatv(pname: GLenum, data: *mut GLfloat);
    GetDoublev(pname: GLenum, data: *mut GLdouble);
    GetPointerv(pname: GLenum, params: *mut *mut c_void) => [GetPointervEXT, GetPointervKHR];
    Enable(cap: GLenum);
    Disable(cap: GLenum);
    Enablei(target: GLenum, index: GLuint) => [EnableIndexedEXT, EnableiEXT, EnableiNV, EnableiOES];
    Disablei(target: GLenum, index: GLuint) => [DisableIndexedEXT, DisableiEXT, DisableiNV, DisableiOES];
    IsEnabled(cap: GLenum) -> GLboolean;
    IsEnabledi(target: GLenum, index: GLuint) -> GLboolean => [IsEnabledIndexedEXT, IsEnablediEXT, IsEnablediNV, IsEnablediOES];
    Hint(target: GLenum, mode: GLenum);
    Finish();
    Flush();

    // Rasterization and per-fragment state
    Viewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    Scissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    ClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    ClearDepth(depth: GLdouble);
    ClearDepthf(d: GLfloat) => [ClearDepthfOES];
    ClearStencil(s: GLint);
    Clear(mask: GLbitfield);
    ClearBufferfv(buffer: GLenum, drawbuffer: GLint, value: *const GLfloat);
    ClearBufferiv(buffer: GLenum, drawbuffer: GLint, value: *const GLint);
    ClearBufferuiv(buffer: GLenum, drawbuffer: GLint, value: *const GLuint);
    ClearBufferfi(buffer: GLenum, drawbuffer: GLint, depth: GLfloat, stencil: GLint);
    ColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    ColorMaski(index: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean) => [ColorMaskIndexedEXT, ColorMaskiEXT, ColorMaskiOES];
    DepthFunc(func: GLenum);
    DepthMask(flag: GLboolean);
    DepthRange(n: GLdouble, f: GLdouble);
    DepthRangef(n: GLfloat, f: GLfloat) => [DepthRangefOES];
    BlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) => [BlendColorEXT];
    BlendEquation(mode: GLenum) => [BlendEquationEXT];
    BlendEquationSeparate(mode_rgb: GLenum, mode_alpha: GLenum) => [BlendEquationSeparateEXT];
    BlendFunc(sfactor: GLenum, dfactor: GLenum);
    BlendFuncSeparate(sfactor_rgb: GLenum, dfactor_rgb: GLenum, sfactor_alpha: GLenum, dfactor_alpha: GLenum) => [BlendFuncSeparateEXT, BlendFuncSeparateINGR];
    CullFace(mode: GLenum);
    FrontFace(mode: GLenum);
    LineWidth(width: GLfloat);
    PointSize(size: GLfloat);
    PolygonMode(face: GLenum, mode: GLenum) => [PolygonModeNV];
    PolygonOffset(factor: GLfloat, units: GLfloat);
    LogicOp(opcode: GLenum);
    ProvokingVertex(mode: GLenum) => [ProvokingVertexEXT];
    PrimitiveRestartIndex(index: GLuint);
    SampleCoverage(value: GLfloat, invert: GLboolean) => [SampleCoverageARB];
    SampleMaski(mask_number: GLuint, mask: GLbitfield);
    StencilFunc(func: GLenum, ref_: GLint, mask: GLuint);
    StencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint);
    StencilMask(mask: GLuint);
    StencilMaskSeparate(face: GLenum, mask: GLuint);
    StencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    StencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) => [StencilOpSeparateATI];
    PixelStoref(pname: GLenum, param: GLfloat);
    PixelStorei(pname: GLenum, param: GLint);
    ReadBuffer(src: GLenum);
    ReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
    DrawBuffer(buf: GLenum);
    DrawBuffers(n: GLsizei, bufs: *const GLenum) => [DrawBuffersARB, DrawBuffersATI, DrawBuffersEXT];

    // Buffer objects
    GenBuffers(n: GLsizei, buffers: *mut GLuint) => [GenBuffersARB];
    DeleteBuffers(n: GLsizei, buffers: *const GLuint) => [DeleteBuffersARB];
    IsBuffer(buffer: GLuint) -> GLboolean => [IsBufferARB];
    BindBuffer(target: GLenum, buffer: GLuint) => [BindBufferARB];
    BindBufferBase(target: GLenum, index: GLuint, buffer: GLuint) => [BindBufferBaseEXT, BindBufferBaseNV];
    BindBufferRange(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr) => [BindBufferRangeEXT, BindBufferRangeNV];
    BufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) => [BufferDataARB];
    BufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) => [BufferSubDataARB];
    BufferStorage(target: GLenum, size: GLsizeiptr, data: *const c_void, flags: GLbitfield) => [BufferStorageEXT];
    CopyBufferSubData(read_target: GLenum, write_target: GLenum, read_offset: GLintptr, write_offset: GLintptr, size: GLsizeiptr) => [CopyBufferSubDataNV];
    GetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) => [GetBufferParameterivARB];
    GetBufferParameteri64v(target: GLenum, pname: GLenum, params: *mut GLint64);
    GetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void) => [GetBufferSubDataARB];
    MapBuffer(target: GLenum, access: GLenum) -> *mut c_void => [MapBufferARB, MapBufferOES];
    MapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut c_void => [MapBufferRangeEXT];
    FlushMappedBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr) => [FlushMappedBufferRangeAPPLE, FlushMappedBufferRangeEXT];
    UnmapBuffer(target: GLenum) -> GLboolean => [UnmapBufferARB, UnmapBufferOES];
    InvalidateBufferData(buffer: GLuint);
    InvalidateBufferSubData(buffer: GLuint, offset: GLintptr, length: GLsizeiptr);

    // Vertex arrays
    GenVertexArrays(n: GLsizei, arrays: *mut GLuint) => [GenVertexArraysAPPLE, GenVertexArraysOES];
    DeleteVertexArrays(n: GLsizei, arrays: *const GLuint) => [DeleteVertexArraysAPPLE, DeleteVertexArraysOES];
    IsVertexArray(array: GLuint) -> GLboolean => [IsVertexArrayAPPLE, IsVertexArrayOES];
    BindVertexArray(array: GLuint) => [BindVertexArrayOES];
    EnableVertexAttribArray(index: GLuint) => [EnableVertexAttribArrayARB];
    DisableVertexAttribArray(index: GLuint) => [DisableVertexAttribArrayARB];
    VertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void) => [VertexAttribPointerARB];
    VertexAttribIPointer(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) => [VertexAttribIPointerEXT];
    VertexAttribDivisor(index: GLuint, divisor: GLuint) => [VertexAttribDivisorANGLE, VertexAttribDivisorARB, VertexAttribDivisorEXT, VertexAttribDivisorNV];
    VertexAttribFormat(attribindex: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, relativeoffset: GLuint);
    VertexAttribIFormat(attribindex: GLuint, size: GLint, type_: GLenum, relativeoffset: GLuint);
    VertexAttribBinding(attribindex: GLuint, bindingindex: GLuint);
    BindVertexBuffer(bindingindex: GLuint, buffer: GLuint, offset: GLintptr, stride: GLsizei);
    VertexBindingDivisor(bindingindex: GLuint, divisor: GLuint);
    VertexAttrib1f(index: GLuint, x: GLfloat) => [VertexAttrib1fARB, VertexAttrib1fNV];
    VertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) => [VertexAttrib4fARB, VertexAttrib4fNV];
    VertexAttrib4fv(index: GLuint, v: *const GLfloat) => [VertexAttrib4fvARB, VertexAttrib4fvNV];
    GetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint) => [GetVertexAttribivARB, GetVertexAttribivNV];
    GetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat) => [GetVertexAttribfvARB, GetVertexAttribfvNV];
    GetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void) => [GetVertexAttribPointervARB, GetVertexAttribPointervNV];

    // Drawing
    DrawArrays(mode: GLenum, first: GLint, count: GLsizei) => [DrawArraysEXT];
    DrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei) => [DrawArraysInstancedANGLE, DrawArraysInstancedARB, DrawArraysInstancedEXT, DrawArraysInstancedNV];
    DrawArraysIndirect(mode: GLenum, indirect: *const c_void);
    DrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
    DrawElementsInstanced(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei) => [DrawElementsInstancedANGLE, DrawElementsInstancedARB, DrawElementsInstancedEXT, DrawElementsInstancedNV];
    DrawElementsBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, basevertex: GLint) => [DrawElementsBaseVertexEXT, DrawElementsBaseVertexOES];
    DrawElementsInstancedBaseVertex(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, instancecount: GLsizei, basevertex: GLint) => [DrawElementsInstancedBaseVertexEXT, DrawElementsInstancedBaseVertexOES];
    DrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void);
    DrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void) => [DrawRangeElementsEXT];
    MultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei) => [MultiDrawArraysEXT];
    MultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei) => [MultiDrawElementsEXT];
    DispatchCompute(num_groups_x: GLuint, num_groups_y: GLuint, num_groups_z: GLuint);
    DispatchComputeIndirect(indirect: GLintptr);
    MemoryBarrier(barriers: GLbitfield) => [MemoryBarrierEXT];

    // Shaders
    CreateShader(type_: GLenum) -> GLuint;
    DeleteShader(shader: GLuint);
    IsShader(shader: GLuint) -> GLboolean;
    ShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint) => [ShaderSourceARB];
    CompileShader(shader: GLuint) => [CompileShaderARB];
    GetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
    GetShaderInfoLog(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    GetShaderSource(shader: GLuint, buf_size: GLsizei, length: *mut GLsizei, source: *mut GLchar) => [GetShaderSourceARB];
    GetShaderPrecisionFormat(shadertype: GLenum, precisiontype: GLenum, range: *mut GLint, precision: *mut GLint);
    ShaderBinary(count: GLsizei, shaders: *const GLuint, binaryformat: GLenum, binary: *const c_void, length: GLsizei);
    ReleaseShaderCompiler();

    // Programs
    CreateProgram() -> GLuint;
    DeleteProgram(program: GLuint);
    IsProgram(program: GLuint) -> GLboolean;
    AttachShader(program: GLuint, shader: GLuint);
    DetachShader(program: GLuint, shader: GLuint);
    GetAttachedShaders(program: GLuint, max_count: GLsizei, count: *mut GLsizei, shaders: *mut GLuint);
    LinkProgram(program: GLuint) => [LinkProgramARB];
    ValidateProgram(program: GLuint) => [ValidateProgramARB];
    UseProgram(program: GLuint);
    GetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
    GetProgramInfoLog(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, info_log: *mut GLchar);
    GetProgramBinary(program: GLuint, buf_size: GLsizei, length: *mut GLsizei, binary_format: *mut GLenum, binary: *mut c_void) => [GetProgramBinaryOES];
    ProgramBinary(program: GLuint, binary_format: GLenum, binary: *const c_void, length: GLsizei) => [ProgramBinaryOES];
    ProgramParameteri(program: GLuint, pname: GLenum, value: GLint) => [ProgramParameteriARB, ProgramParameteriEXT];
    BindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) => [BindAttribLocationARB];
    GetAttribLocation(program: GLuint, name: *const GLchar) -> GLint => [GetAttribLocationARB];
    BindFragDataLocation(program: GLuint, color: GLuint, name: *const GLchar) => [BindFragDataLocationEXT];
    GetFragDataLocation(program: GLuint, name: *const GLchar) -> GLint => [GetFragDataLocationEXT];
    GetActiveAttrib(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) => [GetActiveAttribARB];
    GetActiveUniform(program: GLuint, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) => [GetActiveUniformARB];
    GetUniformLocation(program: GLuint, name: *const GLchar) -> GLint => [GetUniformLocationARB];
    GetUniformBlockIndex(program: GLuint, uniform_block_name: *const GLchar) -> GLuint;
    UniformBlockBinding(program: GLuint, uniform_block_index: GLuint, uniform_block_binding: GLuint);
    GetActiveUniformBlockiv(program: GLuint, uniform_block_index: GLuint, pname: GLenum, params: *mut GLint);
    GetActiveUniformBlockName(program: GLuint, uniform_block_index: GLuint, buf_size: GLsizei, length: *mut GLsizei, uniform_block_name: *mut GLchar);
    GetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat) => [GetUniformfvARB];
    GetUniformiv(program: GLuint, location: GLint, params: *mut GLint) => [GetUniformivARB];
    ShaderStorageBlockBinding(program: GLuint, storage_block_index: GLuint, storage_block_binding: GLuint);
    TransformFeedbackVaryings(program: GLuint, count: GLsizei, varyings: *const *const GLchar, buffer_mode: GLenum) => [TransformFeedbackVaryingsEXT];
    GetProgramResourceIndex(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLuint;
    GetProgramResourceName(program: GLuint, program_interface: GLenum, index: GLuint, buf_size: GLsizei, length: *mut GLsizei, name: *mut GLchar);
    GetProgramResourceLocation(program: GLuint, program_interface: GLenum, name: *const GLchar) -> GLint;
    CreateShaderProgramv(type_: GLenum, count: GLsizei, strings: *const *const GLchar) -> GLuint;
    GenProgramPipelines(n: GLsizei, pipelines: *mut GLuint);
    DeleteProgramPipelines(n: GLsizei, pipelines: *const GLuint);
    BindProgramPipeline(pipeline: GLuint);
    UseProgramStages(pipeline: GLuint, stages: GLbitfield, program: GLuint);

    // Uniforms
    Uniform1f(location: GLint, v0: GLfloat) => [Uniform1fARB];
    Uniform2f(location: GLint, v0: GLfloat, v1: GLfloat) => [Uniform2fARB];
    Uniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) => [Uniform3fARB];
    Uniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) => [Uniform4fARB];
    Uniform1i(location: GLint, v0: GLint) => [Uniform1iARB];
    Uniform2i(location: GLint, v0: GLint, v1: GLint) => [Uniform2iARB];
    Uniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) => [Uniform3iARB];
    Uniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) => [Uniform4iARB];
    Uniform1ui(location: GLint, v0: GLuint) => [Uniform1uiEXT];
    Uniform1fv(location: GLint, count: GLsizei, value: *const GLfloat) => [Uniform1fvARB];
    Uniform2fv(location: GLint, count: GLsizei, value: *const GLfloat) => [Uniform2fvARB];
    Uniform3fv(location: GLint, count: GLsizei, value: *const GLfloat) => [Uniform3fvARB];
    Uniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) => [Uniform4fvARB];
    Uniform1iv(location: GLint, count: GLsizei, value: *const GLint) => [Uniform1ivARB];
    Uniform2iv(location: GLint, count: GLsizei, value: *const GLint) => [Uniform2ivARB];
    Uniform3iv(location: GLint, count: GLsizei, value: *const GLint) => [Uniform3ivARB];
    Uniform4iv(location: GLint, count: GLsizei, value: *const GLint) => [Uniform4ivARB];
    UniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) => [UniformMatrix2fvARB];
    UniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) => [UniformMatrix3fvARB];
    UniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) => [UniformMatrix4fvARB];
    ProgramUniform1i(program: GLuint, location: GLint, v0: GLint) => [ProgramUniform1iEXT];
    ProgramUniform1f(program: GLuint, location: GLint, v0: GLfloat) => [ProgramUniform1fEXT];
    ProgramUniform4fv(program: GLuint, location: GLint, count: GLsizei, value: *const GLfloat) => [ProgramUniform4fvEXT];
    ProgramUniformMatrix4fv(program: GLuint, location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) => [ProgramUniformMatrix4fvEXT];

    // Textures
    GenTextures(n: GLsizei, textures: *mut GLuint);
    DeleteTextures(n: GLsizei, textures: *const GLuint);
    IsTexture(texture: GLuint) -> GLboolean;
    BindTexture(target: GLenum, texture: GLuint) => [BindTextureEXT];
    ActiveTexture(texture: GLenum) => [ActiveTextureARB];
    TexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    TexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) => [TexImage3DEXT];
    TexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) => [TexSubImage2DEXT];
    TexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) => [TexSubImage3DEXT];
    TexStorage2D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) => [TexStorage2DEXT];
    TexStorage3D(target: GLenum, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei) => [TexStorage3DEXT];
    TexStorage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    TexImage2DMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei, fixedsamplelocations: GLboolean);
    CompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, image_size: GLsizei, data: *const c_void) => [CompressedTexImage2DARB];
    CompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, image_size: GLsizei, data: *const c_void) => [CompressedTexSubImage2DARB];
    CopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint) => [CopyTexImage2DEXT];
    CopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) => [CopyTexSubImage2DEXT];
    TexParameteri(target: GLenum, pname: GLenum, param: GLint);
    TexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    TexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
    TexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    GetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    GetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    GetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
    GenerateMipmap(target: GLenum) => [GenerateMipmapEXT];
    TexBuffer(target: GLenum, internalformat: GLenum, buffer: GLuint) => [TexBufferARB, TexBufferEXT, TexBufferOES];
    BindImageTexture(unit: GLuint, texture: GLuint, level: GLint, layered: GLboolean, layer: GLint, access: GLenum, format: GLenum);
    CopyImageSubData(src_name: GLuint, src_target: GLenum, src_level: GLint, src_x: GLint, src_y: GLint, src_z: GLint, dst_name: GLuint, dst_target: GLenum, dst_level: GLint, dst_x: GLint, dst_y: GLint, dst_z: GLint, src_width: GLsizei, src_height: GLsizei, src_depth: GLsizei) => [CopyImageSubDataEXT, CopyImageSubDataOES];
    InvalidateTexImage(texture: GLuint, level: GLint);

    // Samplers
    GenSamplers(count: GLsizei, samplers: *mut GLuint);
    DeleteSamplers(count: GLsizei, samplers: *const GLuint);
    IsSampler(sampler: GLuint) -> GLboolean;
    BindSampler(unit: GLuint, sampler: GLuint);
    SamplerParameteri(sampler: GLuint, pname: GLenum, param: GLint);
    SamplerParameterf(sampler: GLuint, pname: GLenum, param: GLfloat);
    SamplerParameterfv(sampler: GLuint, pname: GLenum, param: *const GLfloat);

    // Framebuffers and renderbuffers
    GenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) => [GenFramebuffersEXT];
    DeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) => [DeleteFramebuffersEXT];
    IsFramebuffer(framebuffer: GLuint) -> GLboolean => [IsFramebufferEXT];
    BindFramebuffer(target: GLenum, framebuffer: GLuint);
    CheckFramebufferStatus(target: GLenum) -> GLenum => [CheckFramebufferStatusEXT];
    FramebufferTexture(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint) => [FramebufferTextureARB, FramebufferTextureEXT, FramebufferTextureOES];
    FramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) => [FramebufferTexture2DEXT];
    FramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint) => [FramebufferTextureLayerARB, FramebufferTextureLayerEXT];
    FramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint) => [FramebufferRenderbufferEXT];
    GetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint) => [GetFramebufferAttachmentParameterivEXT];
    BlitFramebuffer(src_x0: GLint, src_y0: GLint, src_x1: GLint, src_y1: GLint, dst_x0: GLint, dst_y0: GLint, dst_x1: GLint, dst_y1: GLint, mask: GLbitfield, filter: GLenum) => [BlitFramebufferEXT, BlitFramebufferNV];
    InvalidateFramebuffer(target: GLenum, num_attachments: GLsizei, attachments: *const GLenum);
    GenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) => [GenRenderbuffersEXT];
    DeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) => [DeleteRenderbuffersEXT];
    IsRenderbuffer(renderbuffer: GLuint) -> GLboolean => [IsRenderbufferEXT];
    BindRenderbuffer(target: GLenum, renderbuffer: GLuint);
    RenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei) => [RenderbufferStorageEXT];
    RenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) => [RenderbufferStorageMultisampleEXT, RenderbufferStorageMultisampleNV];
    GetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) => [GetRenderbufferParameterivEXT];

    // Queries
    GenQueries(n: GLsizei, ids: *mut GLuint) => [GenQueriesARB];
    DeleteQueries(n: GLsizei, ids: *const GLuint) => [DeleteQueriesARB];
    IsQuery(id: GLuint) -> GLboolean => [IsQueryARB];
    BeginQuery(target: GLenum, id: GLuint) => [BeginQueryARB];
    EndQuery(target: GLenum) => [EndQueryARB];
    GetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint) => [GetQueryivARB];
    GetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint) => [GetQueryObjectivARB, GetQueryObjectivEXT];
    GetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint) => [GetQueryObjectuivARB];
    GetQueryObjecti64v(id: GLuint, pname: GLenum, params: *mut GLint64) => [GetQueryObjecti64vEXT];
    GetQueryObjectui64v(id: GLuint, pname: GLenum, params: *mut GLuint64) => [GetQueryObjectui64vEXT];
    QueryCounter(id: GLuint, target: GLenum) => [QueryCounterEXT];
    BeginConditionalRender(id: GLuint, mode: GLenum) => [BeginConditionalRenderNV];
    EndConditionalRender() => [EndConditionalRenderNV, EndConditionalRenderNVX];

    // Transform feedback
    GenTransformFeedbacks(n: GLsizei, ids: *mut GLuint) => [GenTransformFeedbacksNV];
    DeleteTransformFeedbacks(n: GLsizei, ids: *const GLuint) => [DeleteTransformFeedbacksNV];
    BindTransformFeedback(target: GLenum, id: GLuint);
    BeginTransformFeedback(primitive_mode: GLenum) => [BeginTransformFeedbackEXT, BeginTransformFeedbackNV];
    EndTransformFeedback() => [EndTransformFeedbackEXT, EndTransformFeedbackNV];
    PauseTransformFeedback() => [PauseTransformFeedbackNV];
    ResumeTransformFeedback() => [ResumeTransformFeedbackNV];

    // Sync objects
    FenceSync(condition: GLenum, flags: GLbitfield) -> GLsync => [FenceSyncAPPLE];
    ClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum => [ClientWaitSyncAPPLE];
    WaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) => [WaitSyncAPPLE];
    DeleteSync(sync: GLsync) => [DeleteSyncAPPLE];
    IsSync(sync: GLsync) -> GLboolean => [IsSyncAPPLE];
    GetSynciv(sync: GLsync, pname: GLenum, buf_size: GLsizei, length: *mut GLsizei, values: *mut GLint) => [GetSyncivAPPLE];

    // Debug output
    DebugMessageCallback(callback: GLDEBUGPROC, user_param: *const c_void) => [DebugMessageCallbackARB, DebugMessageCallbackKHR];
    DebugMessageControl(source: GLenum, type_: GLenum, severity: GLenum, count: GLsizei, ids: *const GLuint, enabled: GLboolean) => [DebugMessageControlARB, DebugMessageControlKHR];
    DebugMessageInsert(source: GLenum, type_: GLenum, id: GLuint, severity: GLenum, length: GLsizei, buf: *const GLchar) => [DebugMessageInsertARB, DebugMessageInsertKHR];
    GetDebugMessageLog(count: GLuint, buf_size: GLsizei, sources: *mut GLenum, types: *mut GLenum, ids: *mut GLuint, severities: *mut GLenum, lengths: *mut GLsizei, message_log: *mut GLchar) -> GLuint => [GetDebugMessageLogARB, GetDebugMessageLogKHR];
    PushDebugGroup(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar) => [PushDebugGroupKHR];
    PopDebugGroup() => [PopDebugGroupKHR];
    ObjectLabel(identifier: GLenum, name: GLuint, length: GLsizei, label: *const GLchar) => [ObjectLabelKHR];
    GetObjectLabel(identifier: GLenum, name: GLuint, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar) => [GetObjectLabelKHR];
    ObjectPtrLabel(ptr: *const c_void, length: GLsizei, label: *const GLchar) => [ObjectPtrLabelKHR];
    GetObjectPtrLabel(ptr: *const c_void, buf_size: GLsizei, length: *mut GLsizei, label: *mut GLchar) => [GetObjectPtrLabelKHR];

    // Direct state access, indirect drawing and texture clears (4.3 and up)
    CreateBuffers(n: GLsizei, buffers: *mut GLuint);
    NamedBufferData(buffer: GLuint, size: GLsizeiptr, data: *const c_void, usage: GLenum);
    NamedBufferSubData(buffer: GLuint, offset: GLintptr, size: GLsizeiptr, data: *const c_void);
    NamedBufferStorage(buffer: GLuint, size: GLsizeiptr, data: *const c_void, flags: GLbitfield);
    CreateVertexArrays(n: GLsizei, arrays: *mut GLuint);
    CreateTextures(target: GLenum, n: GLsizei, textures: *mut GLuint);
    TextureStorage2D(texture: GLuint, levels: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei);
    TextureSubImage2D(texture: GLuint, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    BindTextureUnit(unit: GLuint, texture: GLuint);
    CreateFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
    ClearTexImage(texture: GLuint, level: GLint, format: GLenum, type_: GLenum, data: *const c_void);
    MultiDrawArraysIndirect(mode: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei) => [MultiDrawArraysIndirectAMD, MultiDrawArraysIndirectEXT];
    MultiDrawElementsIndirect(mode: GLenum, type_: GLenum, indirect: *const c_void, drawcount: GLsizei, stride: GLsizei) => [MultiDrawElementsIndirectAMD, MultiDrawElementsIndirectEXT];
}
