// MIT/Apache2 License

//! Shader and program wrappers.

use super::{debug::CallKind, marshal, state::MAX_QUERY_VALUES, Gl, GlDispatch};
use breadgl_enums::{
    self as gl,
    types::{GLchar, GLenum, GLfloat, GLint, GLsizei, GLuint},
};
use std::ffi::c_void;

/// A uniform or attribute reported by `glGetActiveUniform` or `glGetActiveAttrib`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub name: String,
    /// Array length, or 1 for non-arrays.
    pub size: GLint,
    /// The GLSL type, such as `GL_FLOAT_VEC4`.
    pub kind: GLenum,
}

/// A linked program's binary, as returned by `glGetProgramBinary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBinary {
    pub format: GLenum,
    pub data: Vec<u8>,
}

impl<D: GlDispatch> Gl<D> {
    /// Replace the source of `shader` with the concatenation of `sources`.
    pub fn shader_source(&self, shader: GLuint, sources: &[&str]) -> crate::Result {
        let list = marshal::SourceList::new("glShaderSource", sources)?;
        unsafe {
            self.ShaderSource(
                shader,
                list.count("glShaderSource")?,
                list.pointers(),
                list.lengths(),
            )?
        };
        self.check_after("glShaderSource", CallKind::Command)
    }

    #[inline]
    pub fn get_shader_iv(&self, shader: GLuint, pname: GLenum) -> crate::Result<GLint> {
        let mut value: [GLint; MAX_QUERY_VALUES] = [0; MAX_QUERY_VALUES];
        unsafe { self.GetShaderiv(shader, pname, value.as_mut_ptr())? };
        self.check_after("glGetShaderiv", CallKind::Query)?;
        Ok(value[0])
    }

    /// Query a program parameter. `GL_COMPUTE_WORK_GROUP_SIZE` reports its first value.
    #[inline]
    pub fn get_program_iv(&self, program: GLuint, pname: GLenum) -> crate::Result<GLint> {
        let mut value: [GLint; MAX_QUERY_VALUES] = [0; MAX_QUERY_VALUES];
        unsafe { self.GetProgramiv(program, pname, value.as_mut_ptr())? };
        self.check_after("glGetProgramiv", CallKind::Query)?;
        Ok(value[0])
    }

    fn read_text<W>(&self, function: &'static str, capacity: usize, write: W) -> crate::Result<String>
    where
        W: FnOnce(GLsizei, *mut GLsizei, *mut GLchar) -> crate::Result,
    {
        let text = marshal::read_string(function, capacity, write)?;
        self.check_after(function, CallKind::Query)?;
        Ok(text)
    }

    pub fn get_shader_info_log(&self, shader: GLuint) -> crate::Result<String> {
        let capacity = marshal::written(
            self.get_shader_iv(shader, gl::INFO_LOG_LENGTH)?,
            usize::MAX,
        );
        self.read_text("glGetShaderInfoLog", capacity, |buf_size, length, log| unsafe {
            self.GetShaderInfoLog(shader, buf_size, length, log)
        })
    }

    pub fn get_program_info_log(&self, program: GLuint) -> crate::Result<String> {
        let capacity = marshal::written(
            self.get_program_iv(program, gl::INFO_LOG_LENGTH)?,
            usize::MAX,
        );
        self.read_text("glGetProgramInfoLog", capacity, |buf_size, length, log| unsafe {
            self.GetProgramInfoLog(program, buf_size, length, log)
        })
    }

    /// Read back the concatenated source of `shader`.
    pub fn get_shader_source(&self, shader: GLuint) -> crate::Result<String> {
        let capacity = marshal::written(
            self.get_shader_iv(shader, gl::SHADER_SOURCE_LENGTH)?,
            usize::MAX,
        );
        self.read_text("glGetShaderSource", capacity, |buf_size, length, source| unsafe {
            self.GetShaderSource(shader, buf_size, length, source)
        })
    }

    /// Location of a uniform, or `None` if the program has no active uniform by that name.
    pub fn get_uniform_location(&self, program: GLuint, name: &str) -> crate::Result<Option<GLint>> {
        let name = marshal::c_string("glGetUniformLocation", name)?;
        let location = unsafe { self.GetUniformLocation(program, name.as_ptr())? };
        self.check_after("glGetUniformLocation", CallKind::Query)?;
        Ok(if location < 0 { None } else { Some(location) })
    }

    /// Location of a vertex attribute, or `None` if the program has no active attribute by that
    /// name.
    pub fn get_attrib_location(&self, program: GLuint, name: &str) -> crate::Result<Option<GLuint>> {
        let name = marshal::c_string("glGetAttribLocation", name)?;
        let location = unsafe { self.GetAttribLocation(program, name.as_ptr())? };
        self.check_after("glGetAttribLocation", CallKind::Query)?;
        Ok(if location < 0 {
            None
        } else {
            Some(location as GLuint)
        })
    }

    /// Bind an attribute name to a location. Takes effect at the next link.
    pub fn bind_attrib_location(&self, program: GLuint, index: GLuint, name: &str) -> crate::Result {
        let name = marshal::c_string("glBindAttribLocation", name)?;
        unsafe { self.BindAttribLocation(program, index, name.as_ptr())? };
        self.check_after("glBindAttribLocation", CallKind::Command)
    }

    pub fn get_uniform_block_index(&self, program: GLuint, name: &str) -> crate::Result<Option<GLuint>> {
        let name = marshal::c_string("glGetUniformBlockIndex", name)?;
        let index = unsafe { self.GetUniformBlockIndex(program, name.as_ptr())? };
        self.check_after("glGetUniformBlockIndex", CallKind::Query)?;
        Ok(if index == gl::INVALID_INDEX {
            None
        } else {
            Some(index)
        })
    }

    pub fn get_active_uniform(&self, program: GLuint, index: GLuint) -> crate::Result<ActiveVariable> {
        let capacity = marshal::written(
            self.get_program_iv(program, gl::ACTIVE_UNIFORM_MAX_LENGTH)?,
            usize::MAX,
        );
        let (mut size, mut kind): (GLint, GLenum) = (0, 0);
        let name = self.read_text("glGetActiveUniform", capacity, |buf_size, length, name| unsafe {
            self.GetActiveUniform(program, index, buf_size, length, &mut size, &mut kind, name)
        })?;

        Ok(ActiveVariable { name, size, kind })
    }

    pub fn get_active_attrib(&self, program: GLuint, index: GLuint) -> crate::Result<ActiveVariable> {
        let capacity = marshal::written(
            self.get_program_iv(program, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH)?,
            usize::MAX,
        );
        let (mut size, mut kind): (GLint, GLenum) = (0, 0);
        let name = self.read_text("glGetActiveAttrib", capacity, |buf_size, length, name| unsafe {
            self.GetActiveAttrib(program, index, buf_size, length, &mut size, &mut kind, name)
        })?;

        Ok(ActiveVariable { name, size, kind })
    }

    /// Choose the outputs captured by transform feedback. Takes effect at the next link.
    pub fn transform_feedback_varyings(
        &self,
        program: GLuint,
        varyings: &[&str],
        buffer_mode: GLenum,
    ) -> crate::Result {
        const FUNCTION: &str = "glTransformFeedbackVaryings";

        let count: GLsizei = marshal::count(FUNCTION, "varyings", varyings)?;
        let names = varyings
            .iter()
            .map(|v| marshal::c_string(FUNCTION, v))
            .collect::<crate::Result<Vec<_>>>()?;
        let pointers: Vec<*const GLchar> = names.iter().map(|n| n.as_ptr()).collect();

        unsafe { self.TransformFeedbackVaryings(program, count, pointers.as_ptr(), buffer_mode)? };
        self.check_after(FUNCTION, CallKind::Command)
    }

    /// Fetch the binary of a linked program, to be restored later with [`Gl::program_binary`].
    pub fn get_program_binary(&self, program: GLuint) -> crate::Result<ProgramBinary> {
        const FUNCTION: &str = "glGetProgramBinary";

        let capacity = marshal::written(
            self.get_program_iv(program, gl::PROGRAM_BINARY_LENGTH)?,
            usize::MAX,
        );
        let mut data = vec![0u8; capacity];
        let mut length: GLsizei = 0;
        let mut format: GLenum = 0;

        if capacity > 0 {
            unsafe {
                self.GetProgramBinary(
                    program,
                    marshal::length(FUNCTION, capacity)?,
                    &mut length,
                    &mut format,
                    data.as_mut_ptr().cast::<c_void>(),
                )?
            };
        }

        data.truncate(marshal::written(length, capacity));
        self.check_after(FUNCTION, CallKind::Query)?;
        Ok(ProgramBinary { format, data })
    }

    pub fn program_binary(&self, program: GLuint, format: GLenum, binary: &[u8]) -> crate::Result {
        let length = marshal::count("glProgramBinary", "binary", binary)?;
        unsafe { self.ProgramBinary(program, format, binary.as_ptr().cast(), length)? };
        self.check_after("glProgramBinary", CallKind::Command)
    }

    pub fn uniform_1iv(&self, location: GLint, values: &[GLint]) -> crate::Result {
        let count = marshal::count("glUniform1iv", "values", values)?;
        unsafe { self.Uniform1iv(location, count, values.as_ptr())? };
        self.check_after("glUniform1iv", CallKind::Command)
    }

    pub fn uniform_4fv(&self, location: GLint, values: &[[GLfloat; 4]]) -> crate::Result {
        let count = marshal::count("glUniform4fv", "values", values)?;
        unsafe { self.Uniform4fv(location, count, values.as_ptr().cast())? };
        self.check_after("glUniform4fv", CallKind::Command)
    }

    /// Upload 4x4 matrices. Each matrix is column-major unless `transpose` is set.
    pub fn uniform_matrix_4fv(
        &self,
        location: GLint,
        transpose: bool,
        values: &[[GLfloat; 16]],
    ) -> crate::Result {
        let count = marshal::count("glUniformMatrix4fv", "values", values)?;
        let transpose = if transpose { gl::TRUE } else { gl::FALSE };
        unsafe { self.UniformMatrix4fv(location, count, transpose, values.as_ptr().cast())? };
        self.check_after("glUniformMatrix4fv", CallKind::Command)
    }
}
