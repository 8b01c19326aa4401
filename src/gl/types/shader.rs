// MIT/Apache2 License

use crate::{
    gl::{Gl, GlDispatch},
    Error,
};
use breadgl_enums::{
    self as gl,
    types::{GLenum, GLuint},
};
use std::{fmt, rc::Rc};

/// The program that a GL pipeline uses to run. Deleted on drop.
pub struct Program<D: GlDispatch> {
    id: GLuint,
    gl: Rc<Gl<D>>,
}

impl<D: GlDispatch> Program<D> {
    /// Link `shaders` into a new program.
    ///
    /// On failure the program is deleted and the info log is returned in
    /// [`Error::ProgramFail`].
    pub fn new(gl: Rc<Gl<D>>, shaders: &[&Shader<D>]) -> crate::Result<Self> {
        let id = unsafe { gl.CreateProgram()? };
        if id == 0 {
            gl.check_error()?;
            return Err(Error::StaticMsg("glCreateProgram returned 0"));
        }
        let program = Self { id, gl };
        let gl = &program.gl;

        // attach shaders to our program
        for shader in shaders {
            unsafe { gl.AttachShader(id, shader.id())? };
        }

        // link the program together, the shaders are no longer needed after
        unsafe { gl.LinkProgram(id)? };
        for shader in shaders {
            unsafe { gl.DetachShader(id, shader.id())? };
        }

        if gl.get_program_iv(id, gl::LINK_STATUS)? == 0 {
            let log = gl.get_program_info_log(id)?;
            log::error!("Failed to link program {}: {}", id, log);
            return Err(Error::ProgramFail(log));
        }

        log::debug!("Linked program {} from {} shaders", id, shaders.len());
        Ok(program)
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn gl(&self) -> &Rc<Gl<D>> {
        &self.gl
    }

    /// Make this the current program.
    #[inline]
    pub fn bind(&self) -> crate::Result {
        unsafe { self.gl.UseProgram(self.id) }
    }
}

impl<D: GlDispatch> Drop for Program<D> {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = unsafe { self.gl.DeleteProgram(self.id) } {
            log::error!("Failed to delete program {}: {}", self.id, e);
        }
    }
}

impl<D: GlDispatch> fmt::Debug for Program<D> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program").field("id", &self.id).finish()
    }
}

/// The shaders that make up a GL program. Deleted on drop.
pub struct Shader<D: GlDispatch> {
    id: GLuint,
    gl: Rc<Gl<D>>,
}

impl<D: GlDispatch> Shader<D> {
    /// Create a shader of the given type from source code and compile it.
    ///
    /// `sources` are concatenated. On failure the shader is deleted and the info log is
    /// returned in [`Error::ShaderFail`].
    pub fn new(gl: Rc<Gl<D>>, kind: GLenum, sources: &[&str]) -> crate::Result<Self> {
        let id = unsafe { gl.CreateShader(kind)? };
        if id == 0 {
            gl.check_error()?;
            return Err(Error::StaticMsg("glCreateShader returned 0"));
        }
        let shader = Self { id, gl };
        let gl = &shader.gl;

        // set the shader's source and then compile it
        gl.shader_source(id, sources)?;
        unsafe { gl.CompileShader(id)? };

        // tell if we succeeded
        if gl.get_shader_iv(id, gl::COMPILE_STATUS)? == 0 {
            let log = gl.get_shader_info_log(id)?;
            log::error!("Failed to compile shader {}: {}", id, log);
            return Err(Error::ShaderFail(log));
        }

        Ok(shader)
    }

    #[inline]
    pub fn id(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn gl(&self) -> &Rc<Gl<D>> {
        &self.gl
    }
}

impl<D: GlDispatch> Drop for Shader<D> {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = unsafe { self.gl.DeleteShader(self.id) } {
            log::error!("Failed to delete shader {}: {}", self.id, e);
        }
    }
}

impl<D: GlDispatch> fmt::Debug for Shader<D> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shader").field("id", &self.id).finish()
    }
}
