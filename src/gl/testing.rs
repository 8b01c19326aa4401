// MIT/Apache2 License

//! A fake driver for unit tests.
//!
//! Entry points resolve to `extern "system"` stubs that act on a thread-local [`Driver`] and
//! record how they were called. Every test gets a fresh driver from [`mock_gl`].

use super::{Gl, GlDispatch, GlOptions};
use breadgl_enums::{self as gl, types::*};
use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    ffi::{c_void, CStr, CString},
    ptr, slice,
};

#[derive(Debug, Default, Clone)]
pub(crate) struct MockShader {
    pub(crate) source: Vec<u8>,
    pub(crate) compiled: bool,
    pub(crate) info_log: String,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct MockProgram {
    pub(crate) shaders: Vec<GLuint>,
    pub(crate) linked: bool,
    pub(crate) info_log: String,
    pub(crate) binary_format: GLenum,
    pub(crate) binary: Vec<u8>,
}

pub(crate) struct Driver {
    /// Every name the dispatcher was asked for, in order.
    pub(crate) lookups: Vec<String>,
    /// Names the dispatcher answers with null.
    pub(crate) unsupported: Vec<&'static str>,
    /// Calls recorded by stubs that take array or string arguments.
    pub(crate) calls: Vec<String>,

    pub(crate) errors: VecDeque<GLenum>,
    /// Reported forever once the queue is empty, like a driver without a current context.
    pub(crate) sticky_error: Option<GLenum>,

    pub(crate) integers: HashMap<GLenum, Vec<GLint>>,
    pub(crate) integer64s: HashMap<GLenum, GLint64>,
    pub(crate) floats: HashMap<GLenum, GLfloat>,
    pub(crate) enabled: Vec<GLenum>,
    pub(crate) strings: HashMap<GLenum, CString>,
    pub(crate) extensions: Vec<CString>,

    next_name: GLuint,
    pub(crate) deleted: Vec<GLuint>,
    pub(crate) buffer: Vec<u8>,

    pub(crate) shaders: HashMap<GLuint, MockShader>,
    pub(crate) programs: HashMap<GLuint, MockProgram>,
    pub(crate) deleted_shaders: Vec<GLuint>,
    pub(crate) deleted_programs: Vec<GLuint>,
    pub(crate) uniforms: Vec<(String, GLint, GLenum)>,
    pub(crate) attributes: Vec<(String, GLint, GLenum)>,

    pub(crate) label: Vec<u8>,
    pub(crate) debug_callback: GLDEBUGPROC,
    pub(crate) debug_messages: Vec<String>,
    pub(crate) debug_log: Vec<(GLenum, GLenum, GLuint, GLenum, String)>,

    pub(crate) syncs: Vec<usize>,
    pub(crate) signaled: bool,
    pub(crate) wait_result: GLenum,
    pub(crate) last_timeout: GLuint64,
}

impl Default for Driver {
    fn default() -> Self {
        let strings = [
            (gl::VENDOR, "breadgl"),
            (gl::RENDERER, "mock"),
            (gl::VERSION, "4.6.0 Mock 1.0"),
            (gl::SHADING_LANGUAGE_VERSION, "4.60"),
        ]
        .iter()
        .map(|&(name, s)| (name, CString::new(s).unwrap()))
        .collect();

        let integers = [
            (gl::MAX_LABEL_LENGTH, 256),
            (gl::MAX_DEBUG_MESSAGE_LENGTH, 256),
            (gl::PACK_ALIGNMENT, 4),
            (gl::UNPACK_ALIGNMENT, 4),
            (gl::PACK_ROW_LENGTH, 0),
            (gl::PACK_SKIP_ROWS, 0),
            (gl::PACK_SKIP_PIXELS, 0),
            (gl::UNPACK_ROW_LENGTH, 0),
            (gl::UNPACK_SKIP_ROWS, 0),
            (gl::UNPACK_SKIP_PIXELS, 0),
            (gl::PIXEL_PACK_BUFFER_BINDING, 0),
            (gl::PIXEL_UNPACK_BUFFER_BINDING, 0),
            (gl::MAJOR_VERSION, 4),
            (gl::MINOR_VERSION, 6),
        ]
        .iter()
        .map(|&(pname, value)| (pname, vec![value]))
        .collect();

        let mut integer64s = HashMap::new();
        integer64s.insert(gl::MAX_SERVER_WAIT_TIMEOUT, 1 << 40);

        Self {
            lookups: Vec::new(),
            unsupported: Vec::new(),
            calls: Vec::new(),
            errors: VecDeque::new(),
            sticky_error: None,
            integers,
            integer64s,
            floats: HashMap::new(),
            enabled: Vec::new(),
            strings,
            extensions: vec![
                CString::new("GL_KHR_debug").unwrap(),
                CString::new("GL_ARB_buffer_storage").unwrap(),
            ],
            next_name: 0,
            deleted: Vec::new(),
            buffer: Vec::new(),
            shaders: HashMap::new(),
            programs: HashMap::new(),
            deleted_shaders: Vec::new(),
            deleted_programs: Vec::new(),
            uniforms: Vec::new(),
            attributes: Vec::new(),
            label: Vec::new(),
            debug_callback: None,
            debug_messages: Vec::new(),
            debug_log: Vec::new(),
            syncs: Vec::new(),
            signaled: false,
            wait_result: gl::ALREADY_SIGNALED,
            last_timeout: 0,
        }
    }
}

impl Driver {
    fn name(&mut self) -> GLuint {
        self.next_name += 1;
        self.next_name
    }
}

thread_local! {
    static DRIVER: RefCell<Driver> = RefCell::new(Driver::default());
}

/// Run `f` on this thread's driver.
pub(crate) fn with_driver<R, F: FnOnce(&mut Driver) -> R>(f: F) -> R {
    DRIVER.with(|d| f(&mut d.borrow_mut()))
}

/// Dispatcher that hands out the stubs below and records every lookup.
#[derive(Debug, Default)]
pub(crate) struct MockDispatch;

unsafe impl GlDispatch for MockDispatch {
    fn get_proc_address(&mut self, name: &CStr) -> *const c_void {
        let name = name.to_str().unwrap_or_default();
        with_driver(|d| {
            d.lookups.push(name.to_string());
            if d.unsupported.iter().any(|u| *u == name) {
                return ptr::null();
            }

            let addr = stub(name);
            if addr.is_null() {
                stub(base_name(name))
            } else {
                addr
            }
        })
    }
}

/// A table over a fresh driver, with logging set up for tests.
pub(crate) fn mock_gl() -> Gl<MockDispatch> {
    mock_gl_with(GlOptions::default())
}

pub(crate) fn mock_gl_with(options: GlOptions) -> Gl<MockDispatch> {
    let _ = env_logger::builder().is_test(true).try_init();
    with_driver(|d| *d = Driver::default());
    Gl::with_options(MockDispatch, options)
}

/// Strip a vendor suffix, so aliases resolve to the same stub as the core name.
fn base_name(name: &str) -> &str {
    ["EXT", "ARB", "KHR", "OES", "APPLE"]
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

fn stub(name: &str) -> *const c_void {
    match name {
        "glGetError" => get_error as *const c_void,
        "glGetIntegerv" => get_integerv as *const c_void,
        "glGetInteger64v" => get_integer64v as *const c_void,
        "glGetBooleanv" => get_booleanv as *const c_void,
        "glGetFloatv" => get_floatv as *const c_void,
        "glGetString" => get_string as *const c_void,
        "glGetStringi" => get_stringi as *const c_void,
        "glEnable" => enable as *const c_void,
        "glPixelStorei" => pixel_storei as *const c_void,
        "glGenBuffers" | "glGenVertexArrays" | "glGenTextures" | "glGenFramebuffers"
        | "glGenRenderbuffers" | "glGenQueries" | "glGenSamplers" => gen_names as *const c_void,
        "glDeleteBuffers" | "glDeleteVertexArrays" | "glDeleteTextures"
        | "glDeleteFramebuffers" | "glDeleteRenderbuffers" | "glDeleteQueries"
        | "glDeleteSamplers" => delete_names as *const c_void,
        "glBufferData" => buffer_data as *const c_void,
        "glBufferSubData" => buffer_sub_data as *const c_void,
        "glGetBufferSubData" => get_buffer_sub_data as *const c_void,
        "glCreateShader" => create_shader as *const c_void,
        "glShaderSource" => shader_source as *const c_void,
        "glCompileShader" => compile_shader as *const c_void,
        "glGetShaderiv" => get_shaderiv as *const c_void,
        "glGetShaderInfoLog" => get_shader_info_log as *const c_void,
        "glGetShaderSource" => get_shader_source as *const c_void,
        "glDeleteShader" => delete_shader as *const c_void,
        "glCreateProgram" => create_program as *const c_void,
        "glAttachShader" => attach_shader as *const c_void,
        "glDetachShader" => detach_shader as *const c_void,
        "glLinkProgram" => link_program as *const c_void,
        "glUseProgram" => use_program as *const c_void,
        "glGetProgramiv" => get_programiv as *const c_void,
        "glGetProgramInfoLog" => get_program_info_log as *const c_void,
        "glDeleteProgram" => delete_program as *const c_void,
        "glGetProgramBinary" => get_program_binary as *const c_void,
        "glProgramBinary" => program_binary as *const c_void,
        "glGetUniformLocation" => get_uniform_location as *const c_void,
        "glGetAttribLocation" => get_attrib_location as *const c_void,
        "glBindAttribLocation" => bind_attrib_location as *const c_void,
        "glGetUniformBlockIndex" => get_uniform_block_index as *const c_void,
        "glGetActiveUniform" => get_active_uniform as *const c_void,
        "glGetActiveAttrib" => get_active_attrib as *const c_void,
        "glTransformFeedbackVaryings" => transform_feedback_varyings as *const c_void,
        "glUniform1iv" => uniform_1iv as *const c_void,
        "glUniform4fv" => uniform_4fv as *const c_void,
        "glUniformMatrix4fv" => uniform_matrix_4fv as *const c_void,
        "glDrawBuffers" => draw_buffers as *const c_void,
        "glInvalidateFramebuffer" => invalidate_framebuffer as *const c_void,
        "glReadPixels" => read_pixels as *const c_void,
        "glTexImage2D" => tex_image_2d as *const c_void,
        "glFenceSync" => fence_sync as *const c_void,
        "glClientWaitSync" => client_wait_sync as *const c_void,
        "glWaitSync" => wait_sync as *const c_void,
        "glIsSync" => is_sync as *const c_void,
        "glDeleteSync" => delete_sync as *const c_void,
        "glGetSynciv" => get_synciv as *const c_void,
        "glDebugMessageCallback" => debug_message_callback as *const c_void,
        "glDebugMessageInsert" => debug_message_insert as *const c_void,
        "glPushDebugGroup" => push_debug_group as *const c_void,
        "glPopDebugGroup" => pop_debug_group as *const c_void,
        "glObjectLabel" => object_label as *const c_void,
        "glGetObjectLabel" => get_object_label as *const c_void,
        "glGetDebugMessageLog" => get_debug_message_log as *const c_void,
        _ => ptr::null(),
    }
}

/// Write `text` the way GL does: at most `buf_size - 1` bytes plus a terminator, and the
/// length without the terminator.
unsafe fn write_text(text: &[u8], buf_size: GLsizei, length: *mut GLsizei, out: *mut GLchar) {
    let n = if buf_size > 0 {
        let n = text.len().min(buf_size as usize - 1);
        ptr::copy_nonoverlapping(text.as_ptr(), out.cast::<u8>(), n);
        *out.add(n) = 0;
        n
    } else {
        0
    };

    if !length.is_null() {
        *length = n as GLsizei;
    }
}

/// Read a string given with an explicit length, or nul-terminated if the length is negative.
unsafe fn read_text(text: *const GLchar, length: GLsizei) -> Vec<u8> {
    if length < 0 {
        CStr::from_ptr(text).to_bytes().to_vec()
    } else {
        slice::from_raw_parts(text.cast::<u8>(), length as usize).to_vec()
    }
}

fn push_error(code: GLenum) {
    with_driver(|d| d.errors.push_back(code));
}

unsafe extern "system" fn get_error() -> GLenum {
    with_driver(|d| {
        d.errors
            .pop_front()
            .or(d.sticky_error)
            .unwrap_or(gl::NO_ERROR)
    })
}

unsafe extern "system" fn get_integerv(pname: GLenum, data: *mut GLint) {
    let values = with_driver(|d| match pname {
        gl::NUM_EXTENSIONS => Some(vec![d.extensions.len() as GLint]),
        _ => d.integers.get(&pname).cloned(),
    });

    match values {
        Some(values) => ptr::copy_nonoverlapping(values.as_ptr(), data, values.len()),
        None => push_error(gl::INVALID_ENUM),
    }
}

unsafe extern "system" fn get_integer64v(pname: GLenum, data: *mut GLint64) {
    match with_driver(|d| d.integer64s.get(&pname).copied()) {
        Some(value) => *data = value,
        None => push_error(gl::INVALID_ENUM),
    }
}

unsafe extern "system" fn get_booleanv(pname: GLenum, data: *mut GLboolean) {
    let enabled = with_driver(|d| d.enabled.contains(&pname));
    *data = if enabled { gl::TRUE } else { gl::FALSE };
}

unsafe extern "system" fn get_floatv(pname: GLenum, data: *mut GLfloat) {
    match with_driver(|d| d.floats.get(&pname).copied()) {
        Some(value) => *data = value,
        None => push_error(gl::INVALID_ENUM),
    }
}

unsafe extern "system" fn get_string(name: GLenum) -> *const GLubyte {
    match with_driver(|d| d.strings.get(&name).map(|s| s.as_ptr())) {
        Some(s) => s.cast(),
        None => {
            push_error(gl::INVALID_ENUM);
            ptr::null()
        }
    }
}

unsafe extern "system" fn get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    let s = with_driver(|d| match name {
        gl::EXTENSIONS => d.extensions.get(index as usize).map(|s| s.as_ptr()),
        _ => None,
    });

    match s {
        Some(s) => s.cast(),
        None => {
            push_error(gl::INVALID_VALUE);
            ptr::null()
        }
    }
}

unsafe extern "system" fn enable(cap: GLenum) {
    with_driver(|d| {
        if !d.enabled.contains(&cap) {
            d.enabled.push(cap);
        }
    });
}

unsafe extern "system" fn pixel_storei(pname: GLenum, param: GLint) {
    with_driver(|d| match d.integers.get_mut(&pname) {
        Some(values) if param >= 0 => values[0] = param,
        _ => d.errors.push_back(gl::INVALID_ENUM),
    });
}

unsafe extern "system" fn gen_names(n: GLsizei, names: *mut GLuint) {
    with_driver(|d| {
        for i in 0..n as usize {
            *names.add(i) = d.name();
        }
    });
}

unsafe extern "system" fn delete_names(n: GLsizei, names: *const GLuint) {
    let names = slice::from_raw_parts(names, n as usize);
    with_driver(|d| {
        d.deleted.extend_from_slice(names);
        d.calls.push(format!("glDelete({}, {:?})", n, names));
    });
}

unsafe extern "system" fn buffer_data(
    target: GLenum,
    size: GLsizeiptr,
    data: *const c_void,
    usage: GLenum,
) {
    with_driver(|d| {
        d.buffer = if data.is_null() {
            vec![0; size as usize]
        } else {
            slice::from_raw_parts(data.cast::<u8>(), size as usize).to_vec()
        };
        d.calls.push(format!(
            "glBufferData({:#x}, {}, {}, {:#x})",
            target,
            size,
            if data.is_null() { "null" } else { "data" },
            usage
        ));
    });
}

unsafe extern "system" fn buffer_sub_data(
    _target: GLenum,
    offset: GLintptr,
    size: GLsizeiptr,
    data: *const c_void,
) {
    let (offset, size) = (offset as usize, size as usize);
    with_driver(|d| {
        if d.buffer.len() < offset + size {
            d.buffer.resize(offset + size, 0);
        }
        ptr::copy_nonoverlapping(data.cast::<u8>(), d.buffer[offset..].as_mut_ptr(), size);
    });
}

unsafe extern "system" fn get_buffer_sub_data(
    _target: GLenum,
    offset: GLintptr,
    size: GLsizeiptr,
    data: *mut c_void,
) {
    let (offset, size) = (offset as usize, size as usize);
    with_driver(|d| match d.buffer.get(offset..offset + size) {
        Some(src) => ptr::copy_nonoverlapping(src.as_ptr(), data.cast::<u8>(), size),
        None => d.errors.push_back(gl::INVALID_VALUE),
    });
}

unsafe extern "system" fn create_shader(_type: GLenum) -> GLuint {
    with_driver(|d| {
        let id = d.name();
        d.shaders.insert(id, MockShader::default());
        id
    })
}

unsafe extern "system" fn shader_source(
    shader: GLuint,
    count: GLsizei,
    strings: *const *const GLchar,
    lengths: *const GLint,
) {
    let mut source = Vec::new();
    for i in 0..count as usize {
        let length = if lengths.is_null() { -1 } else { *lengths.add(i) };
        source.extend(read_text(*strings.add(i), length));
    }

    with_driver(|d| d.shaders.entry(shader).or_default().source = source);
}

unsafe extern "system" fn compile_shader(shader: GLuint) {
    with_driver(|d| {
        if let Some(shader) = d.shaders.get_mut(&shader) {
            shader.compiled = !contains(&shader.source, b"#error");
            if !shader.compiled {
                shader.info_log = "0:2(1): error: #error nope".into();
            }
        }
    });
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Length of a text value as GL reports it: including the terminator, or zero when empty.
fn text_length(text: &[u8]) -> GLint {
    if text.is_empty() {
        0
    } else {
        text.len() as GLint + 1
    }
}

unsafe extern "system" fn get_shaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) {
    let value = with_driver(|d| {
        let shader = d.shaders.get(&shader)?;
        match pname {
            gl::COMPILE_STATUS => Some(shader.compiled as GLint),
            gl::INFO_LOG_LENGTH => Some(text_length(shader.info_log.as_bytes())),
            gl::SHADER_SOURCE_LENGTH => Some(text_length(&shader.source)),
            _ => None,
        }
    });

    match value {
        Some(value) => *params = value,
        None => push_error(gl::INVALID_VALUE),
    }
}

unsafe extern "system" fn get_shader_info_log(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    let log = with_driver(|d| d.shaders.get(&shader).map(|s| s.info_log.clone()));
    write_text(log.unwrap_or_default().as_bytes(), buf_size, length, info_log);
}

unsafe extern "system" fn get_shader_source(
    shader: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    source: *mut GLchar,
) {
    let text = with_driver(|d| d.shaders.get(&shader).map(|s| s.source.clone()));
    write_text(&text.unwrap_or_default(), buf_size, length, source);
}

unsafe extern "system" fn delete_shader(shader: GLuint) {
    with_driver(|d| {
        d.shaders.remove(&shader);
        d.deleted_shaders.push(shader);
    });
}

unsafe extern "system" fn create_program() -> GLuint {
    with_driver(|d| {
        let id = d.name();
        d.programs.insert(id, MockProgram::default());
        id
    })
}

unsafe extern "system" fn attach_shader(program: GLuint, shader: GLuint) {
    with_driver(|d| d.programs.entry(program).or_default().shaders.push(shader));
}

unsafe extern "system" fn detach_shader(program: GLuint, shader: GLuint) {
    with_driver(|d| {
        if let Some(program) = d.programs.get_mut(&program) {
            program.shaders.retain(|s| *s != shader);
        }
    });
}

unsafe extern "system" fn link_program(program: GLuint) {
    with_driver(|d| {
        let compiled = {
            let shaders = &d.shaders;
            d.programs.get(&program).map(|p| {
                !p.shaders.is_empty()
                    && p
                        .shaders
                        .iter()
                        .all(|s| shaders.get(s).map_or(false, |s| s.compiled))
            })
        };

        if let Some(linked) = compiled {
            let program = d.programs.entry(program).or_default();
            program.linked = linked;
            program.info_log = if linked {
                String::new()
            } else if program.shaders.is_empty() {
                "error: no shaders attached".into()
            } else {
                "error: linking with uncompiled shader".into()
            };
        }
    });
}

unsafe extern "system" fn use_program(program: GLuint) {
    with_driver(|d| d.calls.push(format!("glUseProgram({})", program)));
}

unsafe extern "system" fn get_programiv(program: GLuint, pname: GLenum, params: *mut GLint) {
    let max_name = |vars: &[(String, GLint, GLenum)]| {
        vars.iter()
            .map(|(name, _, _)| text_length(name.as_bytes()))
            .max()
            .unwrap_or(0)
    };

    let value = with_driver(|d| {
        let p = d.programs.get(&program).cloned().unwrap_or_default();
        match pname {
            gl::LINK_STATUS => Some(p.linked as GLint),
            gl::INFO_LOG_LENGTH => Some(text_length(p.info_log.as_bytes())),
            gl::PROGRAM_BINARY_LENGTH => Some(p.binary.len() as GLint),
            gl::ACTIVE_UNIFORM_MAX_LENGTH => Some(max_name(&d.uniforms)),
            gl::ACTIVE_ATTRIBUTE_MAX_LENGTH => Some(max_name(&d.attributes)),
            _ => None,
        }
    });

    match value {
        Some(value) => *params = value,
        None => push_error(gl::INVALID_ENUM),
    }
}

unsafe extern "system" fn get_program_info_log(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    info_log: *mut GLchar,
) {
    let log = with_driver(|d| d.programs.get(&program).map(|p| p.info_log.clone()));
    write_text(log.unwrap_or_default().as_bytes(), buf_size, length, info_log);
}

unsafe extern "system" fn delete_program(program: GLuint) {
    with_driver(|d| {
        d.programs.remove(&program);
        d.deleted_programs.push(program);
    });
}

unsafe extern "system" fn get_program_binary(
    program: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    binary_format: *mut GLenum,
    binary: *mut c_void,
) {
    let p = with_driver(|d| d.programs.get(&program).cloned().unwrap_or_default());
    let n = p.binary.len().min(buf_size.max(0) as usize);
    ptr::copy_nonoverlapping(p.binary.as_ptr(), binary.cast::<u8>(), n);
    *binary_format = p.binary_format;
    if !length.is_null() {
        *length = n as GLsizei;
    }
}

unsafe extern "system" fn program_binary(
    program: GLuint,
    binary_format: GLenum,
    binary: *const c_void,
    length: GLsizei,
) {
    let data = slice::from_raw_parts(binary.cast::<u8>(), length as usize).to_vec();
    with_driver(|d| {
        let p = d.programs.entry(program).or_default();
        p.binary_format = binary_format;
        p.binary = data;
        p.linked = true;
    });
}

fn location_of(vars: &[(String, GLint, GLenum)], name: *const GLchar) -> GLint {
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy();
    vars.iter()
        .position(|(n, _, _)| *n == name)
        .map_or(-1, |i| i as GLint)
}

unsafe extern "system" fn get_uniform_location(_program: GLuint, name: *const GLchar) -> GLint {
    with_driver(|d| location_of(&d.uniforms, name))
}

unsafe extern "system" fn get_attrib_location(_program: GLuint, name: *const GLchar) -> GLint {
    with_driver(|d| location_of(&d.attributes, name))
}

unsafe extern "system" fn bind_attrib_location(program: GLuint, index: GLuint, name: *const GLchar) {
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();
    with_driver(|d| {
        d.calls
            .push(format!("glBindAttribLocation({}, {}, {:?})", program, index, name))
    });
}

unsafe extern "system" fn get_uniform_block_index(_program: GLuint, _name: *const GLchar) -> GLuint {
    gl::INVALID_INDEX
}

unsafe fn write_active(
    var: Option<(String, GLint, GLenum)>,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    type_: *mut GLenum,
    name: *mut GLchar,
) {
    match var {
        Some((var_name, var_size, var_type)) => {
            write_text(var_name.as_bytes(), buf_size, length, name);
            *size = var_size;
            *type_ = var_type;
        }
        None => push_error(gl::INVALID_VALUE),
    }
}

unsafe extern "system" fn get_active_uniform(
    _program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    type_: *mut GLenum,
    name: *mut GLchar,
) {
    let var = with_driver(|d| d.uniforms.get(index as usize).cloned());
    write_active(var, buf_size, length, size, type_, name);
}

unsafe extern "system" fn get_active_attrib(
    _program: GLuint,
    index: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    size: *mut GLint,
    type_: *mut GLenum,
    name: *mut GLchar,
) {
    let var = with_driver(|d| d.attributes.get(index as usize).cloned());
    write_active(var, buf_size, length, size, type_, name);
}

unsafe extern "system" fn transform_feedback_varyings(
    program: GLuint,
    count: GLsizei,
    varyings: *const *const GLchar,
    buffer_mode: GLenum,
) {
    let names: Vec<String> = slice::from_raw_parts(varyings, count as usize)
        .iter()
        .map(|&v| CStr::from_ptr(v).to_string_lossy().into_owned())
        .collect();
    with_driver(|d| {
        d.calls.push(format!(
            "glTransformFeedbackVaryings({}, {:?}, {:#x})",
            program, names, buffer_mode
        ))
    });
}

unsafe extern "system" fn uniform_1iv(location: GLint, count: GLsizei, value: *const GLint) {
    let values = slice::from_raw_parts(value, count as usize);
    with_driver(|d| {
        d.calls
            .push(format!("glUniform1iv({}, {}, {:?})", location, count, values))
    });
}

unsafe extern "system" fn uniform_4fv(location: GLint, count: GLsizei, value: *const GLfloat) {
    let values = slice::from_raw_parts(value, count as usize * 4);
    with_driver(|d| {
        d.calls
            .push(format!("glUniform4fv({}, {}, {:?})", location, count, values))
    });
}

unsafe extern "system" fn uniform_matrix_4fv(
    location: GLint,
    count: GLsizei,
    transpose: GLboolean,
    value: *const GLfloat,
) {
    let values = slice::from_raw_parts(value, count as usize * 16);
    with_driver(|d| {
        d.calls.push(format!(
            "glUniformMatrix4fv({}, {}, {}, {:?})",
            location, count, transpose, values
        ))
    });
}

unsafe extern "system" fn draw_buffers(n: GLsizei, bufs: *const GLenum) {
    let bufs = slice::from_raw_parts(bufs, n as usize);
    with_driver(|d| d.calls.push(format!("glDrawBuffers({}, {:?})", n, bufs)));
}

unsafe extern "system" fn invalidate_framebuffer(
    target: GLenum,
    num_attachments: GLsizei,
    attachments: *const GLenum,
) {
    let attachments = slice::from_raw_parts(attachments, num_attachments as usize);
    with_driver(|d| {
        d.calls.push(format!(
            "glInvalidateFramebuffer({:#x}, {}, {:?})",
            target, num_attachments, attachments
        ))
    });
}

/// Fills the rectangle with `0xAB`, laid out by the pack state. Assumes 4 bytes per pixel and an
/// alignment of at most 4.
unsafe extern "system" fn read_pixels(
    _x: GLint,
    _y: GLint,
    width: GLsizei,
    height: GLsizei,
    _format: GLenum,
    _type: GLenum,
    pixels: *mut c_void,
) {
    let (row_length, skip_rows, skip_pixels) = with_driver(|d| {
        let get = |pname: GLenum| d.integers.get(&pname).map_or(0, |v| v[0]) as usize;
        (
            get(gl::PACK_ROW_LENGTH),
            get(gl::PACK_SKIP_ROWS),
            get(gl::PACK_SKIP_PIXELS),
        )
    });

    let (width, height) = (width as usize, height as usize);
    let stride = if row_length > 0 { row_length } else { width } * 4;
    let start = pixels.cast::<u8>().add(skip_rows * stride + skip_pixels * 4);
    for row in 0..height {
        ptr::write_bytes(start.add(row * stride), 0xAB, width * 4);
    }
}

unsafe extern "system" fn tex_image_2d(
    target: GLenum,
    level: GLint,
    internalformat: GLint,
    width: GLsizei,
    height: GLsizei,
    border: GLint,
    format: GLenum,
    type_: GLenum,
    pixels: *const c_void,
) {
    with_driver(|d| {
        d.calls.push(format!(
            "glTexImage2D({:#x}, {}, {}, {}, {}, {}, {:#x}, {:#x}, {})",
            target,
            level,
            internalformat,
            width,
            height,
            border,
            format,
            type_,
            if pixels.is_null() { "null" } else { "data" }
        ))
    });
}

unsafe extern "system" fn fence_sync(_condition: GLenum, _flags: GLbitfield) -> GLsync {
    with_driver(|d| {
        let addr = 0x1000 * d.name() as usize;
        d.syncs.push(addr);
        addr as GLsync
    })
}

unsafe extern "system" fn client_wait_sync(_sync: GLsync, _flags: GLbitfield, timeout: GLuint64) -> GLenum {
    with_driver(|d| {
        d.last_timeout = timeout;
        d.wait_result
    })
}

unsafe extern "system" fn wait_sync(_sync: GLsync, _flags: GLbitfield, timeout: GLuint64) {
    with_driver(|d| d.last_timeout = timeout);
}

unsafe extern "system" fn is_sync(sync: GLsync) -> GLboolean {
    if with_driver(|d| d.syncs.contains(&(sync as usize))) {
        gl::TRUE
    } else {
        gl::FALSE
    }
}

unsafe extern "system" fn delete_sync(sync: GLsync) {
    with_driver(|d| d.syncs.retain(|s| *s != sync as usize));
}

unsafe extern "system" fn get_synciv(
    _sync: GLsync,
    pname: GLenum,
    _buf_size: GLsizei,
    length: *mut GLsizei,
    values: *mut GLint,
) {
    match pname {
        gl::SYNC_STATUS => {
            let signaled = with_driver(|d| d.signaled);
            *values = (if signaled { gl::SIGNALED } else { gl::UNSIGNALED }) as GLint;
            if !length.is_null() {
                *length = 1;
            }
        }
        _ => push_error(gl::INVALID_ENUM),
    }
}

unsafe extern "system" fn debug_message_callback(callback: GLDEBUGPROC, _user_param: *const c_void) {
    with_driver(|d| d.debug_callback = callback);
}

unsafe extern "system" fn debug_message_insert(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    buf: *const GLchar,
) {
    let text = read_text(buf, length);
    let callback = with_driver(|d| {
        d.debug_messages
            .push(String::from_utf8_lossy(&text).into_owned());
        d.debug_callback
    });

    // outside the borrow, the callback may log
    if let Some(callback) = callback {
        callback(
            source,
            type_,
            id,
            severity,
            text.len() as GLsizei,
            text.as_ptr().cast(),
            ptr::null(),
        );
    }
}

unsafe extern "system" fn push_debug_group(source: GLenum, id: GLuint, length: GLsizei, message: *const GLchar) {
    let message = String::from_utf8_lossy(&read_text(message, length)).into_owned();
    with_driver(|d| {
        d.calls
            .push(format!("glPushDebugGroup({:#x}, {}, {:?})", source, id, message))
    });
}

unsafe extern "system" fn pop_debug_group() {
    with_driver(|d| d.calls.push("glPopDebugGroup()".into()));
}

unsafe extern "system" fn object_label(_identifier: GLenum, _name: GLuint, length: GLsizei, label: *const GLchar) {
    let label = read_text(label, length);
    with_driver(|d| d.label = label);
}

unsafe extern "system" fn get_object_label(
    _identifier: GLenum,
    _name: GLuint,
    buf_size: GLsizei,
    length: *mut GLsizei,
    label: *mut GLchar,
) {
    let text = with_driver(|d| d.label.clone());
    write_text(&text, buf_size, length, label);
}

/// Packs messages back to back, each with its terminator, and removes them from the log.
unsafe extern "system" fn get_debug_message_log(
    count: GLuint,
    buf_size: GLsizei,
    sources: *mut GLenum,
    types: *mut GLenum,
    ids: *mut GLuint,
    severities: *mut GLenum,
    lengths: *mut GLsizei,
    message_log: *mut GLchar,
) -> GLuint {
    with_driver(|d| {
        let mut offset = 0;
        let mut fetched = 0;

        while fetched < count as usize && fetched < d.debug_log.len() {
            let (source, kind, id, severity, ref text) = d.debug_log[fetched];
            let len = text.len() + 1;
            if offset + len > buf_size as usize {
                break;
            }

            ptr::copy_nonoverlapping(text.as_ptr(), message_log.cast::<u8>().add(offset), text.len());
            *message_log.add(offset + text.len()) = 0;
            *sources.add(fetched) = source;
            *types.add(fetched) = kind;
            *ids.add(fetched) = id;
            *severities.add(fetched) = severity;
            *lengths.add(fetched) = len as GLsizei;

            offset += len;
            fetched += 1;
        }

        d.debug_log.drain(..fetched);
        fetched as GLuint
    })
}
