// MIT/Apache2 License

//! Enumerant values, copied from the Khronos OpenGL registry.
//!
//! Bitfield masks share the `GLenum` type, matching how the registry declares them. Values are
//! never derived; they have to agree with what the driver was built against.

use crate::types::{GLboolean, GLenum, GLuint, GLuint64};

pub const ACCUM: GLenum = 0x0100;
pub const ACCUM_ALPHA_BITS: GLenum = 0x0D5B;
pub const ACCUM_BLUE_BITS: GLenum = 0x0D5A;
pub const ACCUM_BUFFER_BIT: GLenum = 0x00000200;
pub const ACCUM_CLEAR_VALUE: GLenum = 0x0B80;
pub const ACCUM_GREEN_BITS: GLenum = 0x0D59;
pub const ACCUM_RED_BITS: GLenum = 0x0D58;
pub const ACTIVE_ATOMIC_COUNTER_BUFFERS: GLenum = 0x92D9;
pub const ACTIVE_ATTRIBUTES: GLenum = 0x8B89;
pub const ACTIVE_ATTRIBUTE_MAX_LENGTH: GLenum = 0x8B8A;
pub const ACTIVE_PROGRAM: GLenum = 0x8259;
pub const ACTIVE_RESOURCES: GLenum = 0x92F5;
pub const ACTIVE_TEXTURE: GLenum = 0x84E0;
pub const ACTIVE_UNIFORMS: GLenum = 0x8B86;
pub const ACTIVE_UNIFORM_BLOCKS: GLenum = 0x8A36;
pub const ACTIVE_UNIFORM_BLOCK_MAX_NAME_LENGTH: GLenum = 0x8A35;
pub const ACTIVE_UNIFORM_MAX_LENGTH: GLenum = 0x8B87;
pub const ACTIVE_VARIABLES: GLenum = 0x9305;
pub const ADD: GLenum = 0x0104;
pub const ADD_SIGNED: GLenum = 0x8574;
pub const ALIASED_LINE_WIDTH_RANGE: GLenum = 0x846E;
pub const ALIASED_POINT_SIZE_RANGE: GLenum = 0x846D;
pub const ALL_ATTRIB_BITS: GLenum = 0xFFFFFFFF;
pub const ALL_BARRIER_BITS: GLenum = 0xFFFFFFFF;
pub const ALL_SHADER_BITS: GLenum = 0xFFFFFFFF;
pub const ALPHA: GLenum = 0x1906;
pub const ALPHA12: GLenum = 0x803D;
pub const ALPHA16: GLenum = 0x803E;
pub const ALPHA4: GLenum = 0x803B;
pub const ALPHA8: GLenum = 0x803C;
pub const ALPHA_BIAS: GLenum = 0x0D1D;
pub const ALPHA_BITS: GLenum = 0x0D55;
pub const ALPHA_INTEGER: GLenum = 0x8D97;
pub const ALPHA_SCALE: GLenum = 0x0D1C;
pub const ALPHA_TEST: GLenum = 0x0BC0;
pub const ALPHA_TEST_FUNC: GLenum = 0x0BC1;
pub const ALPHA_TEST_REF: GLenum = 0x0BC2;
pub const ALREADY_SIGNALED: GLenum = 0x911A;
pub const ALWAYS: GLenum = 0x0207;
pub const AMBIENT: GLenum = 0x1200;
pub const AMBIENT_AND_DIFFUSE: GLenum = 0x1602;
pub const AND: GLenum = 0x1501;
pub const AND_INVERTED: GLenum = 0x1504;
pub const AND_REVERSE: GLenum = 0x1502;
pub const ANY_SAMPLES_PASSED: GLenum = 0x8C2F;
pub const ANY_SAMPLES_PASSED_CONSERVATIVE: GLenum = 0x8D6A;
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ARRAY_BUFFER_BINDING: GLenum = 0x8894;
pub const ARRAY_SIZE: GLenum = 0x92FB;
pub const ARRAY_STRIDE: GLenum = 0x92FE;
pub const ATOMIC_COUNTER_BARRIER_BIT: GLenum = 0x00001000;
pub const ATOMIC_COUNTER_BUFFER: GLenum = 0x92C0;
pub const ATOMIC_COUNTER_BUFFER_BINDING: GLenum = 0x92C1;
pub const ATOMIC_COUNTER_BUFFER_INDEX: GLenum = 0x9301;
pub const ATOMIC_COUNTER_BUFFER_SIZE: GLenum = 0x92C3;
pub const ATOMIC_COUNTER_BUFFER_START: GLenum = 0x92C2;
pub const ATTACHED_SHADERS: GLenum = 0x8B85;
pub const ATTRIB_STACK_DEPTH: GLenum = 0x0BB0;
pub const AUTO_NORMAL: GLenum = 0x0D80;
pub const AUX0: GLenum = 0x0409;
pub const AUX1: GLenum = 0x040A;
pub const AUX2: GLenum = 0x040B;
pub const AUX3: GLenum = 0x040C;
pub const AUX_BUFFERS: GLenum = 0x0C00;
pub const BACK: GLenum = 0x0405;
pub const BACK_LEFT: GLenum = 0x0402;
pub const BACK_RIGHT: GLenum = 0x0403;
pub const BGR: GLenum = 0x80E0;
pub const BGRA: GLenum = 0x80E1;
pub const BGRA_INTEGER: GLenum = 0x8D9B;
pub const BGR_INTEGER: GLenum = 0x8D9A;
pub const BITMAP: GLenum = 0x1A00;
pub const BITMAP_TOKEN: GLenum = 0x0704;
pub const BLEND: GLenum = 0x0BE2;
pub const BLEND_COLOR: GLenum = 0x8005;
pub const BLEND_DST: GLenum = 0x0BE0;
pub const BLEND_DST_ALPHA: GLenum = 0x80CA;
pub const BLEND_DST_RGB: GLenum = 0x80C8;
pub const BLEND_EQUATION: GLenum = 0x8009;
pub const BLEND_EQUATION_ALPHA: GLenum = 0x883D;
pub const BLEND_EQUATION_RGB: GLenum = 0x8009;
pub const BLEND_SRC: GLenum = 0x0BE1;
pub const BLEND_SRC_ALPHA: GLenum = 0x80CB;
pub const BLEND_SRC_RGB: GLenum = 0x80C9;
pub const BLOCK_INDEX: GLenum = 0x92FD;
pub const BLUE: GLenum = 0x1905;
pub const BLUE_BIAS: GLenum = 0x0D1B;
pub const BLUE_BITS: GLenum = 0x0D54;
pub const BLUE_INTEGER: GLenum = 0x8D96;
pub const BLUE_SCALE: GLenum = 0x0D1A;
pub const BOOL: GLenum = 0x8B56;
pub const BOOL_VEC2: GLenum = 0x8B57;
pub const BOOL_VEC3: GLenum = 0x8B58;
pub const BOOL_VEC4: GLenum = 0x8B59;
pub const BUFFER: GLenum = 0x82E0;
pub const BUFFER_ACCESS: GLenum = 0x88BB;
pub const BUFFER_ACCESS_FLAGS: GLenum = 0x911F;
pub const BUFFER_BINDING: GLenum = 0x9302;
pub const BUFFER_DATA_SIZE: GLenum = 0x9303;
pub const BUFFER_IMMUTABLE_STORAGE: GLenum = 0x821F;
pub const BUFFER_MAPPED: GLenum = 0x88BC;
pub const BUFFER_MAP_LENGTH: GLenum = 0x9120;
pub const BUFFER_MAP_OFFSET: GLenum = 0x9121;
pub const BUFFER_MAP_POINTER: GLenum = 0x88BD;
pub const BUFFER_SIZE: GLenum = 0x8764;
pub const BUFFER_STORAGE_FLAGS: GLenum = 0x8220;
pub const BUFFER_UPDATE_BARRIER_BIT: GLenum = 0x00000200;
pub const BUFFER_USAGE: GLenum = 0x8765;
pub const BUFFER_VARIABLE: GLenum = 0x92E5;
pub const BYTE: GLenum = 0x1400;
pub const C3F_V3F: GLenum = 0x2A24;
pub const C4F_N3F_V3F: GLenum = 0x2A26;
pub const C4UB_V2F: GLenum = 0x2A22;
pub const C4UB_V3F: GLenum = 0x2A23;
pub const CCW: GLenum = 0x0901;
pub const CLAMP: GLenum = 0x2900;
pub const CLAMP_FRAGMENT_COLOR: GLenum = 0x891B;
pub const CLAMP_READ_COLOR: GLenum = 0x891C;
pub const CLAMP_TO_BORDER: GLenum = 0x812D;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;
pub const CLAMP_VERTEX_COLOR: GLenum = 0x891A;
pub const CLEAR: GLenum = 0x1500;
pub const CLIENT_ACTIVE_TEXTURE: GLenum = 0x84E1;
pub const CLIENT_ALL_ATTRIB_BITS: GLenum = 0xFFFFFFFF;
pub const CLIENT_ATTRIB_STACK_DEPTH: GLenum = 0x0BB1;
pub const CLIENT_MAPPED_BUFFER_BARRIER_BIT: GLenum = 0x00004000;
pub const CLIENT_PIXEL_STORE_BIT: GLenum = 0x00000001;
pub const CLIENT_STORAGE_BIT: GLenum = 0x0200;
pub const CLIENT_VERTEX_ARRAY_BIT: GLenum = 0x00000002;
pub const CLIP_DEPTH_MODE: GLenum = 0x935D;
pub const CLIP_DISTANCE0: GLenum = 0x3000;
pub const CLIP_DISTANCE1: GLenum = 0x3001;
pub const CLIP_DISTANCE2: GLenum = 0x3002;
pub const CLIP_DISTANCE3: GLenum = 0x3003;
pub const CLIP_DISTANCE4: GLenum = 0x3004;
pub const CLIP_DISTANCE5: GLenum = 0x3005;
pub const CLIP_DISTANCE6: GLenum = 0x3006;
pub const CLIP_DISTANCE7: GLenum = 0x3007;
pub const CLIP_ORIGIN: GLenum = 0x935C;
pub const CLIP_PLANE0: GLenum = 0x3000;
pub const CLIP_PLANE1: GLenum = 0x3001;
pub const CLIP_PLANE2: GLenum = 0x3002;
pub const CLIP_PLANE3: GLenum = 0x3003;
pub const CLIP_PLANE4: GLenum = 0x3004;
pub const CLIP_PLANE5: GLenum = 0x3005;
pub const COEFF: GLenum = 0x0A00;
pub const COLOR: GLenum = 0x1800;
pub const COLOR_ARRAY: GLenum = 0x8076;
pub const COLOR_ARRAY_BUFFER_BINDING: GLenum = 0x8898;
pub const COLOR_ARRAY_POINTER: GLenum = 0x8090;
pub const COLOR_ARRAY_SIZE: GLenum = 0x8081;
pub const COLOR_ARRAY_STRIDE: GLenum = 0x8083;
pub const COLOR_ARRAY_TYPE: GLenum = 0x8082;
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const COLOR_ATTACHMENT1: GLenum = 0x8CE1;
pub const COLOR_ATTACHMENT10: GLenum = 0x8CEA;
pub const COLOR_ATTACHMENT11: GLenum = 0x8CEB;
pub const COLOR_ATTACHMENT12: GLenum = 0x8CEC;
pub const COLOR_ATTACHMENT13: GLenum = 0x8CED;
pub const COLOR_ATTACHMENT14: GLenum = 0x8CEE;
pub const COLOR_ATTACHMENT15: GLenum = 0x8CEF;
pub const COLOR_ATTACHMENT16: GLenum = 0x8CF0;
pub const COLOR_ATTACHMENT17: GLenum = 0x8CF1;
pub const COLOR_ATTACHMENT18: GLenum = 0x8CF2;
pub const COLOR_ATTACHMENT19: GLenum = 0x8CF3;
pub const COLOR_ATTACHMENT2: GLenum = 0x8CE2;
pub const COLOR_ATTACHMENT20: GLenum = 0x8CF4;
pub const COLOR_ATTACHMENT21: GLenum = 0x8CF5;
pub const COLOR_ATTACHMENT22: GLenum = 0x8CF6;
pub const COLOR_ATTACHMENT23: GLenum = 0x8CF7;
pub const COLOR_ATTACHMENT24: GLenum = 0x8CF8;
pub const COLOR_ATTACHMENT25: GLenum = 0x8CF9;
pub const COLOR_ATTACHMENT26: GLenum = 0x8CFA;
pub const COLOR_ATTACHMENT27: GLenum = 0x8CFB;
pub const COLOR_ATTACHMENT28: GLenum = 0x8CFC;
pub const COLOR_ATTACHMENT29: GLenum = 0x8CFD;
pub const COLOR_ATTACHMENT3: GLenum = 0x8CE3;
pub const COLOR_ATTACHMENT30: GLenum = 0x8CFE;
pub const COLOR_ATTACHMENT31: GLenum = 0x8CFF;
pub const COLOR_ATTACHMENT4: GLenum = 0x8CE4;
pub const COLOR_ATTACHMENT5: GLenum = 0x8CE5;
pub const COLOR_ATTACHMENT6: GLenum = 0x8CE6;
pub const COLOR_ATTACHMENT7: GLenum = 0x8CE7;
pub const COLOR_ATTACHMENT8: GLenum = 0x8CE8;
pub const COLOR_ATTACHMENT9: GLenum = 0x8CE9;
pub const COLOR_BUFFER_BIT: GLenum = 0x00004000;
pub const COLOR_CLEAR_VALUE: GLenum = 0x0C22;
pub const COLOR_INDEX: GLenum = 0x1900;
pub const COLOR_INDEXES: GLenum = 0x1603;
pub const COLOR_LOGIC_OP: GLenum = 0x0BF2;
pub const COLOR_MATERIAL: GLenum = 0x0B57;
pub const COLOR_MATERIAL_FACE: GLenum = 0x0B55;
pub const COLOR_MATERIAL_PARAMETER: GLenum = 0x0B56;
pub const COLOR_SUM: GLenum = 0x8458;
pub const COLOR_WRITEMASK: GLenum = 0x0C23;
pub const COMBINE: GLenum = 0x8570;
pub const COMBINE_ALPHA: GLenum = 0x8572;
pub const COMBINE_RGB: GLenum = 0x8571;
pub const COMMAND_BARRIER_BIT: GLenum = 0x00000040;
pub const COMPARE_REF_TO_TEXTURE: GLenum = 0x884E;
pub const COMPARE_R_TO_TEXTURE: GLenum = 0x884E;
pub const COMPILE: GLenum = 0x1300;
pub const COMPILE_AND_EXECUTE: GLenum = 0x1301;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const COMPRESSED_ALPHA: GLenum = 0x84E9;
pub const COMPRESSED_INTENSITY: GLenum = 0x84EC;
pub const COMPRESSED_LUMINANCE: GLenum = 0x84EA;
pub const COMPRESSED_LUMINANCE_ALPHA: GLenum = 0x84EB;
pub const COMPRESSED_R11_EAC: GLenum = 0x9270;
pub const COMPRESSED_RED: GLenum = 0x8225;
pub const COMPRESSED_RED_RGTC1: GLenum = 0x8DBB;
pub const COMPRESSED_RG: GLenum = 0x8226;
pub const COMPRESSED_RG11_EAC: GLenum = 0x9272;
pub const COMPRESSED_RGB: GLenum = 0x84ED;
pub const COMPRESSED_RGB8_ETC2: GLenum = 0x9274;
pub const COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9276;
pub const COMPRESSED_RGBA: GLenum = 0x84EE;
pub const COMPRESSED_RGBA8_ETC2_EAC: GLenum = 0x9278;
pub const COMPRESSED_RG_RGTC2: GLenum = 0x8DBD;
pub const COMPRESSED_SIGNED_R11_EAC: GLenum = 0x9271;
pub const COMPRESSED_SIGNED_RED_RGTC1: GLenum = 0x8DBC;
pub const COMPRESSED_SIGNED_RG11_EAC: GLenum = 0x9273;
pub const COMPRESSED_SIGNED_RG_RGTC2: GLenum = 0x8DBE;
pub const COMPRESSED_SLUMINANCE: GLenum = 0x8C4A;
pub const COMPRESSED_SLUMINANCE_ALPHA: GLenum = 0x8C4B;
pub const COMPRESSED_SRGB: GLenum = 0x8C48;
pub const COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: GLenum = 0x9279;
pub const COMPRESSED_SRGB8_ETC2: GLenum = 0x9275;
pub const COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2: GLenum = 0x9277;
pub const COMPRESSED_SRGB_ALPHA: GLenum = 0x8C49;
pub const COMPRESSED_TEXTURE_FORMATS: GLenum = 0x86A3;
pub const COMPUTE_SHADER: GLenum = 0x91B9;
pub const COMPUTE_SHADER_BIT: GLenum = 0x00000020;
pub const COMPUTE_WORK_GROUP_SIZE: GLenum = 0x8267;
pub const CONDITION_SATISFIED: GLenum = 0x911C;
pub const CONSTANT: GLenum = 0x8576;
pub const CONSTANT_ALPHA: GLenum = 0x8003;
pub const CONSTANT_ATTENUATION: GLenum = 0x1207;
pub const CONSTANT_COLOR: GLenum = 0x8001;
pub const CONTEXT_COMPATIBILITY_PROFILE_BIT: GLenum = 0x00000002;
pub const CONTEXT_CORE_PROFILE_BIT: GLenum = 0x00000001;
pub const CONTEXT_FLAGS: GLenum = 0x821E;
pub const CONTEXT_FLAG_DEBUG_BIT: GLenum = 0x00000002;
pub const CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT: GLenum = 0x00000001;
pub const CONTEXT_FLAG_NO_ERROR_BIT: GLenum = 0x00000008;
pub const CONTEXT_FLAG_ROBUST_ACCESS_BIT: GLenum = 0x00000004;
pub const CONTEXT_LOST: GLenum = 0x0507;
pub const CONTEXT_PROFILE_MASK: GLenum = 0x9126;
pub const COORD_REPLACE: GLenum = 0x8862;
pub const COPY: GLenum = 0x1503;
pub const COPY_INVERTED: GLenum = 0x150C;
pub const COPY_PIXEL_TOKEN: GLenum = 0x0706;
pub const COPY_READ_BUFFER: GLenum = 0x8F36;
pub const COPY_READ_BUFFER_BINDING: GLenum = 0x8F36;
pub const COPY_WRITE_BUFFER: GLenum = 0x8F37;
pub const COPY_WRITE_BUFFER_BINDING: GLenum = 0x8F37;
pub const CULL_FACE: GLenum = 0x0B44;
pub const CULL_FACE_MODE: GLenum = 0x0B45;
pub const CURRENT_BIT: GLenum = 0x00000001;
pub const CURRENT_COLOR: GLenum = 0x0B00;
pub const CURRENT_FOG_COORD: GLenum = 0x8453;
pub const CURRENT_FOG_COORDINATE: GLenum = 0x8453;
pub const CURRENT_INDEX: GLenum = 0x0B01;
pub const CURRENT_NORMAL: GLenum = 0x0B02;
pub const CURRENT_PROGRAM: GLenum = 0x8B8D;
pub const CURRENT_QUERY: GLenum = 0x8865;
pub const CURRENT_RASTER_COLOR: GLenum = 0x0B04;
pub const CURRENT_RASTER_DISTANCE: GLenum = 0x0B09;
pub const CURRENT_RASTER_INDEX: GLenum = 0x0B05;
pub const CURRENT_RASTER_POSITION: GLenum = 0x0B07;
pub const CURRENT_RASTER_POSITION_VALID: GLenum = 0x0B08;
pub const CURRENT_RASTER_SECONDARY_COLOR: GLenum = 0x845F;
pub const CURRENT_RASTER_TEXTURE_COORDS: GLenum = 0x0B06;
pub const CURRENT_SECONDARY_COLOR: GLenum = 0x8459;
pub const CURRENT_TEXTURE_COORDS: GLenum = 0x0B03;
pub const CURRENT_VERTEX_ATTRIB: GLenum = 0x8626;
pub const CW: GLenum = 0x0900;
pub const DEBUG_CALLBACK_FUNCTION: GLenum = 0x8244;
pub const DEBUG_CALLBACK_USER_PARAM: GLenum = 0x8245;
pub const DEBUG_GROUP_STACK_DEPTH: GLenum = 0x826D;
pub const DEBUG_LOGGED_MESSAGES: GLenum = 0x9145;
pub const DEBUG_NEXT_LOGGED_MESSAGE_LENGTH: GLenum = 0x8243;
pub const DEBUG_OUTPUT: GLenum = 0x92E0;
pub const DEBUG_OUTPUT_SYNCHRONOUS: GLenum = 0x8242;
pub const DEBUG_SEVERITY_HIGH: GLenum = 0x9146;
pub const DEBUG_SEVERITY_LOW: GLenum = 0x9148;
pub const DEBUG_SEVERITY_MEDIUM: GLenum = 0x9147;
pub const DEBUG_SEVERITY_NOTIFICATION: GLenum = 0x826B;
pub const DEBUG_SOURCE_API: GLenum = 0x8246;
pub const DEBUG_SOURCE_APPLICATION: GLenum = 0x824A;
pub const DEBUG_SOURCE_OTHER: GLenum = 0x824B;
pub const DEBUG_SOURCE_SHADER_COMPILER: GLenum = 0x8248;
pub const DEBUG_SOURCE_THIRD_PARTY: GLenum = 0x8249;
pub const DEBUG_SOURCE_WINDOW_SYSTEM: GLenum = 0x8247;
pub const DEBUG_TYPE_DEPRECATED_BEHAVIOR: GLenum = 0x824D;
pub const DEBUG_TYPE_ERROR: GLenum = 0x824C;
pub const DEBUG_TYPE_MARKER: GLenum = 0x8268;
pub const DEBUG_TYPE_OTHER: GLenum = 0x8251;
pub const DEBUG_TYPE_PERFORMANCE: GLenum = 0x8250;
pub const DEBUG_TYPE_POP_GROUP: GLenum = 0x826A;
pub const DEBUG_TYPE_PORTABILITY: GLenum = 0x824F;
pub const DEBUG_TYPE_PUSH_GROUP: GLenum = 0x8269;
pub const DEBUG_TYPE_UNDEFINED_BEHAVIOR: GLenum = 0x824E;
pub const DECAL: GLenum = 0x2101;
pub const DECR: GLenum = 0x1E03;
pub const DECR_WRAP: GLenum = 0x8508;
pub const DELETE_STATUS: GLenum = 0x8B80;
pub const DEPTH: GLenum = 0x1801;
pub const DEPTH24_STENCIL8: GLenum = 0x88F0;
pub const DEPTH32F_STENCIL8: GLenum = 0x8CAD;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const DEPTH_BIAS: GLenum = 0x0D1F;
pub const DEPTH_BITS: GLenum = 0x0D56;
pub const DEPTH_BUFFER_BIT: GLenum = 0x00000100;
pub const DEPTH_CLAMP: GLenum = 0x864F;
pub const DEPTH_CLEAR_VALUE: GLenum = 0x0B73;
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const DEPTH_COMPONENT16: GLenum = 0x81A5;
pub const DEPTH_COMPONENT24: GLenum = 0x81A6;
pub const DEPTH_COMPONENT32: GLenum = 0x81A7;
pub const DEPTH_COMPONENT32F: GLenum = 0x8CAC;
pub const DEPTH_FUNC: GLenum = 0x0B74;
pub const DEPTH_RANGE: GLenum = 0x0B70;
pub const DEPTH_SCALE: GLenum = 0x0D1E;
pub const DEPTH_STENCIL: GLenum = 0x84F9;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const DEPTH_STENCIL_TEXTURE_MODE: GLenum = 0x90EA;
pub const DEPTH_TEST: GLenum = 0x0B71;
pub const DEPTH_TEXTURE_MODE: GLenum = 0x884B;
pub const DEPTH_WRITEMASK: GLenum = 0x0B72;
pub const DIFFUSE: GLenum = 0x1201;
pub const DISPATCH_INDIRECT_BUFFER: GLenum = 0x90EE;
pub const DISPATCH_INDIRECT_BUFFER_BINDING: GLenum = 0x90EF;
pub const DISPLAY_LIST: GLenum = 0x82E7;
pub const DITHER: GLenum = 0x0BD0;
pub const DOMAIN: GLenum = 0x0A02;
pub const DONT_CARE: GLenum = 0x1100;
pub const DOT3_RGB: GLenum = 0x86AE;
pub const DOT3_RGBA: GLenum = 0x86AF;
pub const DOUBLE: GLenum = 0x140A;
pub const DOUBLEBUFFER: GLenum = 0x0C32;
pub const DRAW_BUFFER: GLenum = 0x0C01;
pub const DRAW_BUFFER0: GLenum = 0x8825;
pub const DRAW_BUFFER1: GLenum = 0x8826;
pub const DRAW_BUFFER10: GLenum = 0x882F;
pub const DRAW_BUFFER11: GLenum = 0x8830;
pub const DRAW_BUFFER12: GLenum = 0x8831;
pub const DRAW_BUFFER13: GLenum = 0x8832;
pub const DRAW_BUFFER14: GLenum = 0x8833;
pub const DRAW_BUFFER15: GLenum = 0x8834;
pub const DRAW_BUFFER2: GLenum = 0x8827;
pub const DRAW_BUFFER3: GLenum = 0x8828;
pub const DRAW_BUFFER4: GLenum = 0x8829;
pub const DRAW_BUFFER5: GLenum = 0x882A;
pub const DRAW_BUFFER6: GLenum = 0x882B;
pub const DRAW_BUFFER7: GLenum = 0x882C;
pub const DRAW_BUFFER8: GLenum = 0x882D;
pub const DRAW_BUFFER9: GLenum = 0x882E;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const DRAW_FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const DRAW_INDIRECT_BUFFER: GLenum = 0x8F3F;
pub const DRAW_INDIRECT_BUFFER_BINDING: GLenum = 0x8F43;
pub const DRAW_PIXEL_TOKEN: GLenum = 0x0705;
pub const DST_ALPHA: GLenum = 0x0304;
pub const DST_COLOR: GLenum = 0x0306;
pub const DYNAMIC_COPY: GLenum = 0x88EA;
pub const DYNAMIC_DRAW: GLenum = 0x88E8;
pub const DYNAMIC_READ: GLenum = 0x88E9;
pub const DYNAMIC_STORAGE_BIT: GLenum = 0x0100;
pub const EDGE_FLAG: GLenum = 0x0B43;
pub const EDGE_FLAG_ARRAY: GLenum = 0x8079;
pub const EDGE_FLAG_ARRAY_BUFFER_BINDING: GLenum = 0x889B;
pub const EDGE_FLAG_ARRAY_POINTER: GLenum = 0x8093;
pub const EDGE_FLAG_ARRAY_STRIDE: GLenum = 0x808C;
pub const ELEMENT_ARRAY_BARRIER_BIT: GLenum = 0x00000002;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const ELEMENT_ARRAY_BUFFER_BINDING: GLenum = 0x8895;
pub const EMISSION: GLenum = 0x1600;
pub const ENABLE_BIT: GLenum = 0x00002000;
pub const EQUAL: GLenum = 0x0202;
pub const EQUIV: GLenum = 0x1509;
pub const EVAL_BIT: GLenum = 0x00010000;
pub const EXP: GLenum = 0x0800;
pub const EXP2: GLenum = 0x0801;
pub const EXTENSIONS: GLenum = 0x1F03;
pub const EYE_LINEAR: GLenum = 0x2400;
pub const EYE_PLANE: GLenum = 0x2502;
pub const FALSE: GLboolean = 0;
pub const FASTEST: GLenum = 0x1101;
pub const FEEDBACK: GLenum = 0x1C01;
pub const FEEDBACK_BUFFER_POINTER: GLenum = 0x0DF0;
pub const FEEDBACK_BUFFER_SIZE: GLenum = 0x0DF1;
pub const FEEDBACK_BUFFER_TYPE: GLenum = 0x0DF2;
pub const FILL: GLenum = 0x1B02;
pub const FIRST_VERTEX_CONVENTION: GLenum = 0x8E4D;
pub const FIXED: GLenum = 0x140C;
pub const FIXED_ONLY: GLenum = 0x891D;
pub const FLAT: GLenum = 0x1D00;
pub const FLOAT: GLenum = 0x1406;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV: GLenum = 0x8DAD;
pub const FLOAT_MAT2: GLenum = 0x8B5A;
pub const FLOAT_MAT2x3: GLenum = 0x8B65;
pub const FLOAT_MAT2x4: GLenum = 0x8B66;
pub const FLOAT_MAT3: GLenum = 0x8B5B;
pub const FLOAT_MAT3x2: GLenum = 0x8B67;
pub const FLOAT_MAT3x4: GLenum = 0x8B68;
pub const FLOAT_MAT4: GLenum = 0x8B5C;
pub const FLOAT_MAT4x2: GLenum = 0x8B69;
pub const FLOAT_MAT4x3: GLenum = 0x8B6A;
pub const FLOAT_VEC2: GLenum = 0x8B50;
pub const FLOAT_VEC3: GLenum = 0x8B51;
pub const FLOAT_VEC4: GLenum = 0x8B52;
pub const FOG: GLenum = 0x0B60;
pub const FOG_BIT: GLenum = 0x00000080;
pub const FOG_COLOR: GLenum = 0x0B66;
pub const FOG_COORD: GLenum = 0x8451;
pub const FOG_COORDINATE: GLenum = 0x8451;
pub const FOG_COORDINATE_ARRAY: GLenum = 0x8457;
pub const FOG_COORDINATE_ARRAY_BUFFER_BINDING: GLenum = 0x889D;
pub const FOG_COORDINATE_ARRAY_POINTER: GLenum = 0x8456;
pub const FOG_COORDINATE_ARRAY_STRIDE: GLenum = 0x8455;
pub const FOG_COORDINATE_ARRAY_TYPE: GLenum = 0x8454;
pub const FOG_COORDINATE_SOURCE: GLenum = 0x8450;
pub const FOG_COORD_ARRAY: GLenum = 0x8457;
pub const FOG_COORD_ARRAY_BUFFER_BINDING: GLenum = 0x889D;
pub const FOG_COORD_ARRAY_POINTER: GLenum = 0x8456;
pub const FOG_COORD_ARRAY_STRIDE: GLenum = 0x8455;
pub const FOG_COORD_ARRAY_TYPE: GLenum = 0x8454;
pub const FOG_COORD_SRC: GLenum = 0x8450;
pub const FOG_DENSITY: GLenum = 0x0B62;
pub const FOG_END: GLenum = 0x0B64;
pub const FOG_HINT: GLenum = 0x0C54;
pub const FOG_INDEX: GLenum = 0x0B61;
pub const FOG_MODE: GLenum = 0x0B65;
pub const FOG_START: GLenum = 0x0B63;
pub const FRAGMENT_DEPTH: GLenum = 0x8452;
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const FRAGMENT_SHADER_BIT: GLenum = 0x00000002;
pub const FRAGMENT_SHADER_DERIVATIVE_HINT: GLenum = 0x8B8B;
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const FRAMEBUFFER_ATTACHMENT_ALPHA_SIZE: GLenum = 0x8215;
pub const FRAMEBUFFER_ATTACHMENT_BLUE_SIZE: GLenum = 0x8214;
pub const FRAMEBUFFER_ATTACHMENT_COLOR_ENCODING: GLenum = 0x8210;
pub const FRAMEBUFFER_ATTACHMENT_COMPONENT_TYPE: GLenum = 0x8211;
pub const FRAMEBUFFER_ATTACHMENT_DEPTH_SIZE: GLenum = 0x8216;
pub const FRAMEBUFFER_ATTACHMENT_GREEN_SIZE: GLenum = 0x8213;
pub const FRAMEBUFFER_ATTACHMENT_LAYERED: GLenum = 0x8DA7;
pub const FRAMEBUFFER_ATTACHMENT_OBJECT_NAME: GLenum = 0x8CD1;
pub const FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE: GLenum = 0x8CD0;
pub const FRAMEBUFFER_ATTACHMENT_RED_SIZE: GLenum = 0x8212;
pub const FRAMEBUFFER_ATTACHMENT_STENCIL_SIZE: GLenum = 0x8217;
pub const FRAMEBUFFER_ATTACHMENT_TEXTURE_CUBE_MAP_FACE: GLenum = 0x8CD3;
pub const FRAMEBUFFER_ATTACHMENT_TEXTURE_LAYER: GLenum = 0x8CD4;
pub const FRAMEBUFFER_ATTACHMENT_TEXTURE_LEVEL: GLenum = 0x8CD2;
pub const FRAMEBUFFER_BARRIER_BIT: GLenum = 0x00000400;
pub const FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const FRAMEBUFFER_DEFAULT: GLenum = 0x8218;
pub const FRAMEBUFFER_DEFAULT_FIXED_SAMPLE_LOCATIONS: GLenum = 0x9314;
pub const FRAMEBUFFER_DEFAULT_HEIGHT: GLenum = 0x9311;
pub const FRAMEBUFFER_DEFAULT_SAMPLES: GLenum = 0x9313;
pub const FRAMEBUFFER_DEFAULT_WIDTH: GLenum = 0x9310;
pub const FRAMEBUFFER_INCOMPLETE_ATTACHMENT: GLenum = 0x8CD6;
pub const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: GLenum = 0x8CD9;
pub const FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER: GLenum = 0x8CDB;
pub const FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS: GLenum = 0x8DA8;
pub const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: GLenum = 0x8CD7;
pub const FRAMEBUFFER_INCOMPLETE_MULTISAMPLE: GLenum = 0x8D56;
pub const FRAMEBUFFER_INCOMPLETE_READ_BUFFER: GLenum = 0x8CDC;
pub const FRAMEBUFFER_SRGB: GLenum = 0x8DB9;
pub const FRAMEBUFFER_UNDEFINED: GLenum = 0x8219;
pub const FRAMEBUFFER_UNSUPPORTED: GLenum = 0x8CDD;
pub const FRONT: GLenum = 0x0404;
pub const FRONT_AND_BACK: GLenum = 0x0408;
pub const FRONT_FACE: GLenum = 0x0B46;
pub const FRONT_LEFT: GLenum = 0x0400;
pub const FRONT_RIGHT: GLenum = 0x0401;
pub const FUNC_ADD: GLenum = 0x8006;
pub const FUNC_REVERSE_SUBTRACT: GLenum = 0x800B;
pub const FUNC_SUBTRACT: GLenum = 0x800A;
pub const GENERATE_MIPMAP: GLenum = 0x8191;
pub const GENERATE_MIPMAP_HINT: GLenum = 0x8192;
pub const GEOMETRY_INPUT_TYPE: GLenum = 0x8917;
pub const GEOMETRY_OUTPUT_TYPE: GLenum = 0x8918;
pub const GEOMETRY_SHADER: GLenum = 0x8DD9;
pub const GEOMETRY_VERTICES_OUT: GLenum = 0x8916;
pub const GEQUAL: GLenum = 0x0206;
pub const GREATER: GLenum = 0x0204;
pub const GREEN: GLenum = 0x1904;
pub const GREEN_BIAS: GLenum = 0x0D19;
pub const GREEN_BITS: GLenum = 0x0D53;
pub const GREEN_INTEGER: GLenum = 0x8D95;
pub const GREEN_SCALE: GLenum = 0x0D18;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const HIGH_FLOAT: GLenum = 0x8DF2;
pub const HIGH_INT: GLenum = 0x8DF5;
pub const HINT_BIT: GLenum = 0x00008000;
pub const IMAGE_2D: GLenum = 0x904D;
pub const IMAGE_2D_ARRAY: GLenum = 0x9053;
pub const IMAGE_3D: GLenum = 0x904E;
pub const IMAGE_BINDING_ACCESS: GLenum = 0x8F3E;
pub const IMAGE_BINDING_FORMAT: GLenum = 0x906E;
pub const IMAGE_BINDING_LAYER: GLenum = 0x8F3D;
pub const IMAGE_BINDING_LAYERED: GLenum = 0x8F3C;
pub const IMAGE_BINDING_LEVEL: GLenum = 0x8F3B;
pub const IMAGE_BINDING_NAME: GLenum = 0x8F3A;
pub const IMAGE_CUBE: GLenum = 0x9050;
pub const IMAGE_FORMAT_COMPATIBILITY_BY_CLASS: GLenum = 0x90C9;
pub const IMAGE_FORMAT_COMPATIBILITY_BY_SIZE: GLenum = 0x90C8;
pub const IMAGE_FORMAT_COMPATIBILITY_TYPE: GLenum = 0x90C7;
pub const IMPLEMENTATION_COLOR_READ_FORMAT: GLenum = 0x8B9B;
pub const IMPLEMENTATION_COLOR_READ_TYPE: GLenum = 0x8B9A;
pub const INCR: GLenum = 0x1E02;
pub const INCR_WRAP: GLenum = 0x8507;
pub const INDEX: GLenum = 0x8222;
pub const INDEX_ARRAY: GLenum = 0x8077;
pub const INDEX_ARRAY_BUFFER_BINDING: GLenum = 0x8899;
pub const INDEX_ARRAY_POINTER: GLenum = 0x8091;
pub const INDEX_ARRAY_STRIDE: GLenum = 0x8086;
pub const INDEX_ARRAY_TYPE: GLenum = 0x8085;
pub const INDEX_BITS: GLenum = 0x0D51;
pub const INDEX_CLEAR_VALUE: GLenum = 0x0C20;
pub const INDEX_LOGIC_OP: GLenum = 0x0BF1;
pub const INDEX_MODE: GLenum = 0x0C30;
pub const INDEX_OFFSET: GLenum = 0x0D13;
pub const INDEX_SHIFT: GLenum = 0x0D12;
pub const INDEX_WRITEMASK: GLenum = 0x0C21;
pub const INFO_LOG_LENGTH: GLenum = 0x8B84;
pub const INT: GLenum = 0x1404;
pub const INTENSITY: GLenum = 0x8049;
pub const INTENSITY12: GLenum = 0x804C;
pub const INTENSITY16: GLenum = 0x804D;
pub const INTENSITY4: GLenum = 0x804A;
pub const INTENSITY8: GLenum = 0x804B;
pub const INTERLEAVED_ATTRIBS: GLenum = 0x8C8C;
pub const INTERPOLATE: GLenum = 0x8575;
pub const INT_2_10_10_10_REV: GLenum = 0x8D9F;
pub const INT_IMAGE_2D: GLenum = 0x9058;
pub const INT_IMAGE_2D_ARRAY: GLenum = 0x905E;
pub const INT_IMAGE_3D: GLenum = 0x9059;
pub const INT_IMAGE_CUBE: GLenum = 0x905B;
pub const INT_SAMPLER_1D: GLenum = 0x8DC9;
pub const INT_SAMPLER_1D_ARRAY: GLenum = 0x8DCE;
pub const INT_SAMPLER_2D: GLenum = 0x8DCA;
pub const INT_SAMPLER_2D_ARRAY: GLenum = 0x8DCF;
pub const INT_SAMPLER_2D_MULTISAMPLE: GLenum = 0x9109;
pub const INT_SAMPLER_2D_MULTISAMPLE_ARRAY: GLenum = 0x910C;
pub const INT_SAMPLER_2D_RECT: GLenum = 0x8DCD;
pub const INT_SAMPLER_3D: GLenum = 0x8DCB;
pub const INT_SAMPLER_BUFFER: GLenum = 0x8DD0;
pub const INT_SAMPLER_CUBE: GLenum = 0x8DCC;
pub const INT_VEC2: GLenum = 0x8B53;
pub const INT_VEC3: GLenum = 0x8B54;
pub const INT_VEC4: GLenum = 0x8B55;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_FRAMEBUFFER_OPERATION: GLenum = 0x0506;
pub const INVALID_INDEX: GLuint = 0xFFFFFFFF;
pub const INVALID_OPERATION: GLenum = 0x0502;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVERT: GLenum = 0x150A;
pub const IS_ROW_MAJOR: GLenum = 0x9300;
pub const KEEP: GLenum = 0x1E00;
pub const LAST_VERTEX_CONVENTION: GLenum = 0x8E4E;
pub const LEFT: GLenum = 0x0406;
pub const LEQUAL: GLenum = 0x0203;
pub const LESS: GLenum = 0x0201;
pub const LIGHT0: GLenum = 0x4000;
pub const LIGHT1: GLenum = 0x4001;
pub const LIGHT2: GLenum = 0x4002;
pub const LIGHT3: GLenum = 0x4003;
pub const LIGHT4: GLenum = 0x4004;
pub const LIGHT5: GLenum = 0x4005;
pub const LIGHT6: GLenum = 0x4006;
pub const LIGHT7: GLenum = 0x4007;
pub const LIGHTING: GLenum = 0x0B50;
pub const LIGHTING_BIT: GLenum = 0x00000040;
pub const LIGHT_MODEL_AMBIENT: GLenum = 0x0B53;
pub const LIGHT_MODEL_COLOR_CONTROL: GLenum = 0x81F8;
pub const LIGHT_MODEL_LOCAL_VIEWER: GLenum = 0x0B51;
pub const LIGHT_MODEL_TWO_SIDE: GLenum = 0x0B52;
pub const LINE: GLenum = 0x1B01;
pub const LINEAR: GLenum = 0x2601;
pub const LINEAR_ATTENUATION: GLenum = 0x1208;
pub const LINEAR_MIPMAP_LINEAR: GLenum = 0x2703;
pub const LINEAR_MIPMAP_NEAREST: GLenum = 0x2701;
pub const LINES: GLenum = 0x0001;
pub const LINES_ADJACENCY: GLenum = 0x000A;
pub const LINE_BIT: GLenum = 0x00000004;
pub const LINE_LOOP: GLenum = 0x0002;
pub const LINE_RESET_TOKEN: GLenum = 0x0707;
pub const LINE_SMOOTH: GLenum = 0x0B20;
pub const LINE_SMOOTH_HINT: GLenum = 0x0C52;
pub const LINE_STIPPLE: GLenum = 0x0B24;
pub const LINE_STIPPLE_PATTERN: GLenum = 0x0B25;
pub const LINE_STIPPLE_REPEAT: GLenum = 0x0B26;
pub const LINE_STRIP: GLenum = 0x0003;
pub const LINE_STRIP_ADJACENCY: GLenum = 0x000B;
pub const LINE_TOKEN: GLenum = 0x0702;
pub const LINE_WIDTH: GLenum = 0x0B21;
pub const LINE_WIDTH_GRANULARITY: GLenum = 0x0B23;
pub const LINE_WIDTH_RANGE: GLenum = 0x0B22;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const LIST_BASE: GLenum = 0x0B32;
pub const LIST_BIT: GLenum = 0x00020000;
pub const LIST_INDEX: GLenum = 0x0B33;
pub const LIST_MODE: GLenum = 0x0B30;
pub const LOAD: GLenum = 0x0101;
pub const LOCATION: GLenum = 0x930E;
pub const LOGIC_OP: GLenum = 0x0BF1;
pub const LOGIC_OP_MODE: GLenum = 0x0BF0;
pub const LOWER_LEFT: GLenum = 0x8CA1;
pub const LOW_FLOAT: GLenum = 0x8DF0;
pub const LOW_INT: GLenum = 0x8DF3;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE12: GLenum = 0x8041;
pub const LUMINANCE12_ALPHA12: GLenum = 0x8047;
pub const LUMINANCE12_ALPHA4: GLenum = 0x8046;
pub const LUMINANCE16: GLenum = 0x8042;
pub const LUMINANCE16_ALPHA16: GLenum = 0x8048;
pub const LUMINANCE4: GLenum = 0x803F;
pub const LUMINANCE4_ALPHA4: GLenum = 0x8043;
pub const LUMINANCE6_ALPHA2: GLenum = 0x8044;
pub const LUMINANCE8: GLenum = 0x8040;
pub const LUMINANCE8_ALPHA8: GLenum = 0x8045;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;
pub const MAJOR_VERSION: GLenum = 0x821B;
pub const MAP1_COLOR_4: GLenum = 0x0D90;
pub const MAP1_GRID_DOMAIN: GLenum = 0x0DD0;
pub const MAP1_GRID_SEGMENTS: GLenum = 0x0DD1;
pub const MAP1_INDEX: GLenum = 0x0D91;
pub const MAP1_NORMAL: GLenum = 0x0D92;
pub const MAP1_TEXTURE_COORD_1: GLenum = 0x0D93;
pub const MAP1_TEXTURE_COORD_2: GLenum = 0x0D94;
pub const MAP1_TEXTURE_COORD_3: GLenum = 0x0D95;
pub const MAP1_TEXTURE_COORD_4: GLenum = 0x0D96;
pub const MAP1_VERTEX_3: GLenum = 0x0D97;
pub const MAP1_VERTEX_4: GLenum = 0x0D98;
pub const MAP2_COLOR_4: GLenum = 0x0DB0;
pub const MAP2_GRID_DOMAIN: GLenum = 0x0DD2;
pub const MAP2_GRID_SEGMENTS: GLenum = 0x0DD3;
pub const MAP2_INDEX: GLenum = 0x0DB1;
pub const MAP2_NORMAL: GLenum = 0x0DB2;
pub const MAP2_TEXTURE_COORD_1: GLenum = 0x0DB3;
pub const MAP2_TEXTURE_COORD_2: GLenum = 0x0DB4;
pub const MAP2_TEXTURE_COORD_3: GLenum = 0x0DB5;
pub const MAP2_TEXTURE_COORD_4: GLenum = 0x0DB6;
pub const MAP2_VERTEX_3: GLenum = 0x0DB7;
pub const MAP2_VERTEX_4: GLenum = 0x0DB8;
pub const MAP_COHERENT_BIT: GLenum = 0x0080;
pub const MAP_COLOR: GLenum = 0x0D10;
pub const MAP_FLUSH_EXPLICIT_BIT: GLenum = 0x0010;
pub const MAP_INVALIDATE_BUFFER_BIT: GLenum = 0x0008;
pub const MAP_INVALIDATE_RANGE_BIT: GLenum = 0x0004;
pub const MAP_PERSISTENT_BIT: GLenum = 0x0040;
pub const MAP_READ_BIT: GLenum = 0x0001;
pub const MAP_STENCIL: GLenum = 0x0D11;
pub const MAP_UNSYNCHRONIZED_BIT: GLenum = 0x0020;
pub const MAP_WRITE_BIT: GLenum = 0x0002;
pub const MATRIX_MODE: GLenum = 0x0BA0;
pub const MATRIX_STRIDE: GLenum = 0x92FF;
pub const MAX: GLenum = 0x8008;
pub const MAX_3D_TEXTURE_SIZE: GLenum = 0x8073;
pub const MAX_ARRAY_TEXTURE_LAYERS: GLenum = 0x88FF;
pub const MAX_ATOMIC_COUNTER_BUFFER_BINDINGS: GLenum = 0x92DC;
pub const MAX_ATOMIC_COUNTER_BUFFER_SIZE: GLenum = 0x92D8;
pub const MAX_ATTRIB_STACK_DEPTH: GLenum = 0x0D35;
pub const MAX_CLIENT_ATTRIB_STACK_DEPTH: GLenum = 0x0D3B;
pub const MAX_CLIP_DISTANCES: GLenum = 0x0D32;
pub const MAX_CLIP_PLANES: GLenum = 0x0D32;
pub const MAX_COLOR_ATTACHMENTS: GLenum = 0x8CDF;
pub const MAX_COLOR_TEXTURE_SAMPLES: GLenum = 0x910E;
pub const MAX_COMBINED_ATOMIC_COUNTERS: GLenum = 0x92D7;
pub const MAX_COMBINED_ATOMIC_COUNTER_BUFFERS: GLenum = 0x92D1;
pub const MAX_COMBINED_COMPUTE_UNIFORM_COMPONENTS: GLenum = 0x8266;
pub const MAX_COMBINED_FRAGMENT_UNIFORM_COMPONENTS: GLenum = 0x8A33;
pub const MAX_COMBINED_GEOMETRY_UNIFORM_COMPONENTS: GLenum = 0x8A32;
pub const MAX_COMBINED_IMAGE_UNIFORMS: GLenum = 0x90CF;
pub const MAX_COMBINED_IMAGE_UNITS_AND_FRAGMENT_OUTPUTS: GLenum = 0x8F39;
pub const MAX_COMBINED_SHADER_OUTPUT_RESOURCES: GLenum = 0x8F39;
pub const MAX_COMBINED_SHADER_STORAGE_BLOCKS: GLenum = 0x90DC;
pub const MAX_COMBINED_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4D;
pub const MAX_COMBINED_UNIFORM_BLOCKS: GLenum = 0x8A2E;
pub const MAX_COMBINED_VERTEX_UNIFORM_COMPONENTS: GLenum = 0x8A31;
pub const MAX_COMPUTE_ATOMIC_COUNTERS: GLenum = 0x8265;
pub const MAX_COMPUTE_ATOMIC_COUNTER_BUFFERS: GLenum = 0x8264;
pub const MAX_COMPUTE_IMAGE_UNIFORMS: GLenum = 0x91BD;
pub const MAX_COMPUTE_SHADER_STORAGE_BLOCKS: GLenum = 0x90DB;
pub const MAX_COMPUTE_SHARED_MEMORY_SIZE: GLenum = 0x8262;
pub const MAX_COMPUTE_TEXTURE_IMAGE_UNITS: GLenum = 0x91BC;
pub const MAX_COMPUTE_UNIFORM_BLOCKS: GLenum = 0x91BB;
pub const MAX_COMPUTE_UNIFORM_COMPONENTS: GLenum = 0x8263;
pub const MAX_COMPUTE_WORK_GROUP_COUNT: GLenum = 0x91BE;
pub const MAX_COMPUTE_WORK_GROUP_INVOCATIONS: GLenum = 0x90EB;
pub const MAX_COMPUTE_WORK_GROUP_SIZE: GLenum = 0x91BF;
pub const MAX_CUBE_MAP_TEXTURE_SIZE: GLenum = 0x851C;
pub const MAX_DEBUG_GROUP_STACK_DEPTH: GLenum = 0x826C;
pub const MAX_DEBUG_LOGGED_MESSAGES: GLenum = 0x9144;
pub const MAX_DEBUG_MESSAGE_LENGTH: GLenum = 0x9143;
pub const MAX_DEPTH_TEXTURE_SAMPLES: GLenum = 0x910F;
pub const MAX_DRAW_BUFFERS: GLenum = 0x8824;
pub const MAX_DUAL_SOURCE_DRAW_BUFFERS: GLenum = 0x88FC;
pub const MAX_ELEMENTS_INDICES: GLenum = 0x80E9;
pub const MAX_ELEMENTS_VERTICES: GLenum = 0x80E8;
pub const MAX_ELEMENT_INDEX: GLenum = 0x8D6B;
pub const MAX_EVAL_ORDER: GLenum = 0x0D30;
pub const MAX_FRAGMENT_ATOMIC_COUNTERS: GLenum = 0x92D6;
pub const MAX_FRAGMENT_ATOMIC_COUNTER_BUFFERS: GLenum = 0x92D0;
pub const MAX_FRAGMENT_IMAGE_UNIFORMS: GLenum = 0x90CE;
pub const MAX_FRAGMENT_INPUT_COMPONENTS: GLenum = 0x9125;
pub const MAX_FRAGMENT_SHADER_STORAGE_BLOCKS: GLenum = 0x90DA;
pub const MAX_FRAGMENT_UNIFORM_BLOCKS: GLenum = 0x8A2D;
pub const MAX_FRAGMENT_UNIFORM_COMPONENTS: GLenum = 0x8B49;
pub const MAX_FRAGMENT_UNIFORM_VECTORS: GLenum = 0x8DFD;
pub const MAX_FRAMEBUFFER_HEIGHT: GLenum = 0x9316;
pub const MAX_FRAMEBUFFER_SAMPLES: GLenum = 0x9318;
pub const MAX_FRAMEBUFFER_WIDTH: GLenum = 0x9315;
pub const MAX_GEOMETRY_INPUT_COMPONENTS: GLenum = 0x9123;
pub const MAX_GEOMETRY_OUTPUT_COMPONENTS: GLenum = 0x9124;
pub const MAX_GEOMETRY_OUTPUT_VERTICES: GLenum = 0x8DE0;
pub const MAX_GEOMETRY_SHADER_STORAGE_BLOCKS: GLenum = 0x90D7;
pub const MAX_GEOMETRY_TEXTURE_IMAGE_UNITS: GLenum = 0x8C29;
pub const MAX_GEOMETRY_TOTAL_OUTPUT_COMPONENTS: GLenum = 0x8DE1;
pub const MAX_GEOMETRY_UNIFORM_BLOCKS: GLenum = 0x8A2C;
pub const MAX_GEOMETRY_UNIFORM_COMPONENTS: GLenum = 0x8DDF;
pub const MAX_IMAGE_UNITS: GLenum = 0x8F38;
pub const MAX_INTEGER_SAMPLES: GLenum = 0x9110;
pub const MAX_LABEL_LENGTH: GLenum = 0x82E8;
pub const MAX_LIGHTS: GLenum = 0x0D31;
pub const MAX_LIST_NESTING: GLenum = 0x0B31;
pub const MAX_MODELVIEW_STACK_DEPTH: GLenum = 0x0D36;
pub const MAX_NAME_LENGTH: GLenum = 0x92F6;
pub const MAX_NAME_STACK_DEPTH: GLenum = 0x0D37;
pub const MAX_NUM_ACTIVE_VARIABLES: GLenum = 0x92F7;
pub const MAX_PIXEL_MAP_TABLE: GLenum = 0x0D34;
pub const MAX_PROGRAM_TEXEL_OFFSET: GLenum = 0x8905;
pub const MAX_PROGRAM_TEXTURE_GATHER_OFFSET: GLenum = 0x8E5F;
pub const MAX_PROJECTION_STACK_DEPTH: GLenum = 0x0D38;
pub const MAX_RECTANGLE_TEXTURE_SIZE: GLenum = 0x84F8;
pub const MAX_RENDERBUFFER_SIZE: GLenum = 0x84E8;
pub const MAX_SAMPLES: GLenum = 0x8D57;
pub const MAX_SAMPLE_MASK_WORDS: GLenum = 0x8E59;
pub const MAX_SERVER_WAIT_TIMEOUT: GLenum = 0x9111;
pub const MAX_SHADER_STORAGE_BLOCK_SIZE: GLenum = 0x90DE;
pub const MAX_SHADER_STORAGE_BUFFER_BINDINGS: GLenum = 0x90DD;
pub const MAX_TESS_CONTROL_SHADER_STORAGE_BLOCKS: GLenum = 0x90D8;
pub const MAX_TESS_EVALUATION_SHADER_STORAGE_BLOCKS: GLenum = 0x90D9;
pub const MAX_TEXTURE_BUFFER_SIZE: GLenum = 0x8C2B;
pub const MAX_TEXTURE_COORDS: GLenum = 0x8871;
pub const MAX_TEXTURE_IMAGE_UNITS: GLenum = 0x8872;
pub const MAX_TEXTURE_LOD_BIAS: GLenum = 0x84FD;
pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const MAX_TEXTURE_STACK_DEPTH: GLenum = 0x0D39;
pub const MAX_TEXTURE_UNITS: GLenum = 0x84E2;
pub const MAX_TRANSFORM_FEEDBACK_INTERLEAVED_COMPONENTS: GLenum = 0x8C8A;
pub const MAX_TRANSFORM_FEEDBACK_SEPARATE_ATTRIBS: GLenum = 0x8C8B;
pub const MAX_TRANSFORM_FEEDBACK_SEPARATE_COMPONENTS: GLenum = 0x8C80;
pub const MAX_UNIFORM_BLOCK_SIZE: GLenum = 0x8A30;
pub const MAX_UNIFORM_BUFFER_BINDINGS: GLenum = 0x8A2F;
pub const MAX_UNIFORM_LOCATIONS: GLenum = 0x826E;
pub const MAX_VARYING_COMPONENTS: GLenum = 0x8B4B;
pub const MAX_VARYING_FLOATS: GLenum = 0x8B4B;
pub const MAX_VARYING_VECTORS: GLenum = 0x8DFC;
pub const MAX_VERTEX_ATOMIC_COUNTERS: GLenum = 0x92D2;
pub const MAX_VERTEX_ATOMIC_COUNTER_BUFFERS: GLenum = 0x92CC;
pub const MAX_VERTEX_ATTRIBS: GLenum = 0x8869;
pub const MAX_VERTEX_ATTRIB_BINDINGS: GLenum = 0x82DA;
pub const MAX_VERTEX_ATTRIB_RELATIVE_OFFSET: GLenum = 0x82D9;
pub const MAX_VERTEX_ATTRIB_STRIDE: GLenum = 0x82E5;
pub const MAX_VERTEX_IMAGE_UNIFORMS: GLenum = 0x90CA;
pub const MAX_VERTEX_OUTPUT_COMPONENTS: GLenum = 0x9122;
pub const MAX_VERTEX_SHADER_STORAGE_BLOCKS: GLenum = 0x90D6;
pub const MAX_VERTEX_TEXTURE_IMAGE_UNITS: GLenum = 0x8B4C;
pub const MAX_VERTEX_UNIFORM_BLOCKS: GLenum = 0x8A2B;
pub const MAX_VERTEX_UNIFORM_COMPONENTS: GLenum = 0x8B4A;
pub const MAX_VERTEX_UNIFORM_VECTORS: GLenum = 0x8DFB;
pub const MAX_VIEWPORT_DIMS: GLenum = 0x0D3A;
pub const MEDIUM_FLOAT: GLenum = 0x8DF1;
pub const MEDIUM_INT: GLenum = 0x8DF4;
pub const MIN: GLenum = 0x8007;
pub const MINOR_VERSION: GLenum = 0x821C;
pub const MIN_PROGRAM_TEXEL_OFFSET: GLenum = 0x8904;
pub const MIN_PROGRAM_TEXTURE_GATHER_OFFSET: GLenum = 0x8E5E;
pub const MIRRORED_REPEAT: GLenum = 0x8370;
pub const MODELVIEW: GLenum = 0x1700;
pub const MODELVIEW_MATRIX: GLenum = 0x0BA6;
pub const MODELVIEW_STACK_DEPTH: GLenum = 0x0BA3;
pub const MODULATE: GLenum = 0x2100;
pub const MULT: GLenum = 0x0103;
pub const MULTISAMPLE: GLenum = 0x809D;
pub const MULTISAMPLE_BIT: GLenum = 0x20000000;
pub const N3F_V3F: GLenum = 0x2A25;
pub const NAME_LENGTH: GLenum = 0x92F9;
pub const NAME_STACK_DEPTH: GLenum = 0x0D70;
pub const NAND: GLenum = 0x150E;
pub const NEAREST: GLenum = 0x2600;
pub const NEAREST_MIPMAP_LINEAR: GLenum = 0x2702;
pub const NEAREST_MIPMAP_NEAREST: GLenum = 0x2700;
pub const NEGATIVE_ONE_TO_ONE: GLenum = 0x935E;
pub const NEVER: GLenum = 0x0200;
pub const NICEST: GLenum = 0x1102;
pub const NONE: GLenum = 0;
pub const NOOP: GLenum = 0x1505;
pub const NOR: GLenum = 0x1508;
pub const NORMALIZE: GLenum = 0x0BA1;
pub const NORMAL_ARRAY: GLenum = 0x8075;
pub const NORMAL_ARRAY_BUFFER_BINDING: GLenum = 0x8897;
pub const NORMAL_ARRAY_POINTER: GLenum = 0x808F;
pub const NORMAL_ARRAY_STRIDE: GLenum = 0x807F;
pub const NORMAL_ARRAY_TYPE: GLenum = 0x807E;
pub const NORMAL_MAP: GLenum = 0x8511;
pub const NOTEQUAL: GLenum = 0x0205;
pub const NO_ERROR: GLenum = 0;
pub const NUM_ACTIVE_VARIABLES: GLenum = 0x9304;
pub const NUM_COMPRESSED_TEXTURE_FORMATS: GLenum = 0x86A2;
pub const NUM_EXTENSIONS: GLenum = 0x821D;
pub const NUM_PROGRAM_BINARY_FORMATS: GLenum = 0x87FE;
pub const NUM_SAMPLE_COUNTS: GLenum = 0x9380;
pub const NUM_SHADER_BINARY_FORMATS: GLenum = 0x8DF9;
pub const OBJECT_LINEAR: GLenum = 0x2401;
pub const OBJECT_PLANE: GLenum = 0x2501;
pub const OBJECT_TYPE: GLenum = 0x9112;
pub const OFFSET: GLenum = 0x92FC;
pub const ONE: GLenum = 1;
pub const ONE_MINUS_CONSTANT_ALPHA: GLenum = 0x8004;
pub const ONE_MINUS_CONSTANT_COLOR: GLenum = 0x8002;
pub const ONE_MINUS_DST_ALPHA: GLenum = 0x0305;
pub const ONE_MINUS_DST_COLOR: GLenum = 0x0307;
pub const ONE_MINUS_SRC1_ALPHA: GLenum = 0x88FB;
pub const ONE_MINUS_SRC1_COLOR: GLenum = 0x88FA;
pub const ONE_MINUS_SRC_ALPHA: GLenum = 0x0303;
pub const ONE_MINUS_SRC_COLOR: GLenum = 0x0301;
pub const OPERAND0_ALPHA: GLenum = 0x8598;
pub const OPERAND0_RGB: GLenum = 0x8590;
pub const OPERAND1_ALPHA: GLenum = 0x8599;
pub const OPERAND1_RGB: GLenum = 0x8591;
pub const OPERAND2_ALPHA: GLenum = 0x859A;
pub const OPERAND2_RGB: GLenum = 0x8592;
pub const OR: GLenum = 0x1507;
pub const ORDER: GLenum = 0x0A01;
pub const OR_INVERTED: GLenum = 0x150D;
pub const OR_REVERSE: GLenum = 0x150B;
pub const OUT_OF_MEMORY: GLenum = 0x0505;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;
pub const PACK_IMAGE_HEIGHT: GLenum = 0x806C;
pub const PACK_LSB_FIRST: GLenum = 0x0D01;
pub const PACK_ROW_LENGTH: GLenum = 0x0D02;
pub const PACK_SKIP_IMAGES: GLenum = 0x806B;
pub const PACK_SKIP_PIXELS: GLenum = 0x0D04;
pub const PACK_SKIP_ROWS: GLenum = 0x0D03;
pub const PACK_SWAP_BYTES: GLenum = 0x0D00;
pub const PASS_THROUGH_TOKEN: GLenum = 0x0700;
pub const PATCHES: GLenum = 0x000E;
pub const PATCH_VERTICES: GLenum = 0x8E72;
pub const PERSPECTIVE_CORRECTION_HINT: GLenum = 0x0C50;
pub const PIXEL_BUFFER_BARRIER_BIT: GLenum = 0x00000080;
pub const PIXEL_MAP_A_TO_A: GLenum = 0x0C79;
pub const PIXEL_MAP_A_TO_A_SIZE: GLenum = 0x0CB9;
pub const PIXEL_MAP_B_TO_B: GLenum = 0x0C78;
pub const PIXEL_MAP_B_TO_B_SIZE: GLenum = 0x0CB8;
pub const PIXEL_MAP_G_TO_G: GLenum = 0x0C77;
pub const PIXEL_MAP_G_TO_G_SIZE: GLenum = 0x0CB7;
pub const PIXEL_MAP_I_TO_A: GLenum = 0x0C75;
pub const PIXEL_MAP_I_TO_A_SIZE: GLenum = 0x0CB5;
pub const PIXEL_MAP_I_TO_B: GLenum = 0x0C74;
pub const PIXEL_MAP_I_TO_B_SIZE: GLenum = 0x0CB4;
pub const PIXEL_MAP_I_TO_G: GLenum = 0x0C73;
pub const PIXEL_MAP_I_TO_G_SIZE: GLenum = 0x0CB3;
pub const PIXEL_MAP_I_TO_I: GLenum = 0x0C70;
pub const PIXEL_MAP_I_TO_I_SIZE: GLenum = 0x0CB0;
pub const PIXEL_MAP_I_TO_R: GLenum = 0x0C72;
pub const PIXEL_MAP_I_TO_R_SIZE: GLenum = 0x0CB2;
pub const PIXEL_MAP_R_TO_R: GLenum = 0x0C76;
pub const PIXEL_MAP_R_TO_R_SIZE: GLenum = 0x0CB6;
pub const PIXEL_MAP_S_TO_S: GLenum = 0x0C71;
pub const PIXEL_MAP_S_TO_S_SIZE: GLenum = 0x0CB1;
pub const PIXEL_MODE_BIT: GLenum = 0x00000020;
pub const PIXEL_PACK_BUFFER: GLenum = 0x88EB;
pub const PIXEL_PACK_BUFFER_BINDING: GLenum = 0x88ED;
pub const PIXEL_UNPACK_BUFFER: GLenum = 0x88EC;
pub const PIXEL_UNPACK_BUFFER_BINDING: GLenum = 0x88EF;
pub const POINT: GLenum = 0x1B00;
pub const POINTS: GLenum = 0x0000;
pub const POINT_BIT: GLenum = 0x00000002;
pub const POINT_DISTANCE_ATTENUATION: GLenum = 0x8129;
pub const POINT_FADE_THRESHOLD_SIZE: GLenum = 0x8128;
pub const POINT_SIZE: GLenum = 0x0B11;
pub const POINT_SIZE_GRANULARITY: GLenum = 0x0B13;
pub const POINT_SIZE_MAX: GLenum = 0x8127;
pub const POINT_SIZE_MIN: GLenum = 0x8126;
pub const POINT_SIZE_RANGE: GLenum = 0x0B12;
pub const POINT_SMOOTH: GLenum = 0x0B10;
pub const POINT_SMOOTH_HINT: GLenum = 0x0C51;
pub const POINT_SPRITE: GLenum = 0x8861;
pub const POINT_SPRITE_COORD_ORIGIN: GLenum = 0x8CA0;
pub const POINT_TOKEN: GLenum = 0x0701;
pub const POLYGON: GLenum = 0x0009;
pub const POLYGON_BIT: GLenum = 0x00000008;
pub const POLYGON_MODE: GLenum = 0x0B40;
pub const POLYGON_OFFSET_FACTOR: GLenum = 0x8038;
pub const POLYGON_OFFSET_FILL: GLenum = 0x8037;
pub const POLYGON_OFFSET_LINE: GLenum = 0x2A02;
pub const POLYGON_OFFSET_POINT: GLenum = 0x2A01;
pub const POLYGON_OFFSET_UNITS: GLenum = 0x2A00;
pub const POLYGON_SMOOTH: GLenum = 0x0B41;
pub const POLYGON_SMOOTH_HINT: GLenum = 0x0C53;
pub const POLYGON_STIPPLE: GLenum = 0x0B42;
pub const POLYGON_STIPPLE_BIT: GLenum = 0x00000010;
pub const POLYGON_TOKEN: GLenum = 0x0703;
pub const POSITION: GLenum = 0x1203;
pub const PREVIOUS: GLenum = 0x8578;
pub const PRIMARY_COLOR: GLenum = 0x8577;
pub const PRIMITIVES_GENERATED: GLenum = 0x8C87;
pub const PRIMITIVE_RESTART: GLenum = 0x8F9D;
pub const PRIMITIVE_RESTART_FIXED_INDEX: GLenum = 0x8D69;
pub const PRIMITIVE_RESTART_INDEX: GLenum = 0x8F9E;
pub const PROGRAM: GLenum = 0x82E2;
pub const PROGRAM_BINARY_FORMATS: GLenum = 0x87FF;
pub const PROGRAM_BINARY_LENGTH: GLenum = 0x8741;
pub const PROGRAM_BINARY_RETRIEVABLE_HINT: GLenum = 0x8257;
pub const PROGRAM_INPUT: GLenum = 0x92E3;
pub const PROGRAM_OUTPUT: GLenum = 0x92E4;
pub const PROGRAM_PIPELINE: GLenum = 0x82E4;
pub const PROGRAM_PIPELINE_BINDING: GLenum = 0x825A;
pub const PROGRAM_POINT_SIZE: GLenum = 0x8642;
pub const PROGRAM_SEPARABLE: GLenum = 0x8258;
pub const PROJECTION: GLenum = 0x1701;
pub const PROJECTION_MATRIX: GLenum = 0x0BA7;
pub const PROJECTION_STACK_DEPTH: GLenum = 0x0BA4;
pub const PROVOKING_VERTEX: GLenum = 0x8E4F;
pub const PROXY_TEXTURE_1D: GLenum = 0x8063;
pub const PROXY_TEXTURE_1D_ARRAY: GLenum = 0x8C19;
pub const PROXY_TEXTURE_2D: GLenum = 0x8064;
pub const PROXY_TEXTURE_2D_ARRAY: GLenum = 0x8C1B;
pub const PROXY_TEXTURE_2D_MULTISAMPLE: GLenum = 0x9101;
pub const PROXY_TEXTURE_2D_MULTISAMPLE_ARRAY: GLenum = 0x9103;
pub const PROXY_TEXTURE_3D: GLenum = 0x8070;
pub const PROXY_TEXTURE_CUBE_MAP: GLenum = 0x851B;
pub const PROXY_TEXTURE_RECTANGLE: GLenum = 0x84F7;
pub const Q: GLenum = 0x2003;
pub const QUADRATIC_ATTENUATION: GLenum = 0x1209;
pub const QUADS: GLenum = 0x0007;
pub const QUADS_FOLLOW_PROVOKING_VERTEX_CONVENTION: GLenum = 0x8E4C;
pub const QUAD_STRIP: GLenum = 0x0008;
pub const QUERY: GLenum = 0x82E3;
pub const QUERY_BY_REGION_NO_WAIT: GLenum = 0x8E16;
pub const QUERY_BY_REGION_WAIT: GLenum = 0x8E15;
pub const QUERY_COUNTER_BITS: GLenum = 0x8864;
pub const QUERY_NO_WAIT: GLenum = 0x8E14;
pub const QUERY_RESULT: GLenum = 0x8866;
pub const QUERY_RESULT_AVAILABLE: GLenum = 0x8867;
pub const QUERY_TARGET: GLenum = 0x82EA;
pub const QUERY_WAIT: GLenum = 0x8E13;
pub const R: GLenum = 0x2002;
pub const R11F_G11F_B10F: GLenum = 0x8C3A;
pub const R16: GLenum = 0x822A;
pub const R16F: GLenum = 0x822D;
pub const R16I: GLenum = 0x8233;
pub const R16UI: GLenum = 0x8234;
pub const R16_SNORM: GLenum = 0x8F98;
pub const R32F: GLenum = 0x822E;
pub const R32I: GLenum = 0x8235;
pub const R32UI: GLenum = 0x8236;
pub const R3_G3_B2: GLenum = 0x2A10;
pub const R8: GLenum = 0x8229;
pub const R8I: GLenum = 0x8231;
pub const R8UI: GLenum = 0x8232;
pub const R8_SNORM: GLenum = 0x8F94;
pub const RASTERIZER_DISCARD: GLenum = 0x8C89;
pub const READ_BUFFER: GLenum = 0x0C02;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const READ_FRAMEBUFFER_BINDING: GLenum = 0x8CAA;
pub const READ_ONLY: GLenum = 0x88B8;
pub const READ_WRITE: GLenum = 0x88BA;
pub const RED: GLenum = 0x1903;
pub const RED_BIAS: GLenum = 0x0D15;
pub const RED_BITS: GLenum = 0x0D52;
pub const RED_INTEGER: GLenum = 0x8D94;
pub const RED_SCALE: GLenum = 0x0D14;
pub const REFERENCED_BY_COMPUTE_SHADER: GLenum = 0x930B;
pub const REFERENCED_BY_FRAGMENT_SHADER: GLenum = 0x930A;
pub const REFERENCED_BY_VERTEX_SHADER: GLenum = 0x9306;
pub const REFLECTION_MAP: GLenum = 0x8512;
pub const RENDER: GLenum = 0x1C00;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const RENDERBUFFER_ALPHA_SIZE: GLenum = 0x8D53;
pub const RENDERBUFFER_BINDING: GLenum = 0x8CA7;
pub const RENDERBUFFER_BLUE_SIZE: GLenum = 0x8D52;
pub const RENDERBUFFER_DEPTH_SIZE: GLenum = 0x8D54;
pub const RENDERBUFFER_GREEN_SIZE: GLenum = 0x8D51;
pub const RENDERBUFFER_HEIGHT: GLenum = 0x8D43;
pub const RENDERBUFFER_INTERNAL_FORMAT: GLenum = 0x8D44;
pub const RENDERBUFFER_RED_SIZE: GLenum = 0x8D50;
pub const RENDERBUFFER_SAMPLES: GLenum = 0x8CAB;
pub const RENDERBUFFER_STENCIL_SIZE: GLenum = 0x8D55;
pub const RENDERBUFFER_WIDTH: GLenum = 0x8D42;
pub const RENDERER: GLenum = 0x1F01;
pub const RENDER_MODE: GLenum = 0x0C40;
pub const REPEAT: GLenum = 0x2901;
pub const REPLACE: GLenum = 0x1E01;
pub const RESCALE_NORMAL: GLenum = 0x803A;
pub const RETURN: GLenum = 0x0102;
pub const RG: GLenum = 0x8227;
pub const RG16: GLenum = 0x822C;
pub const RG16F: GLenum = 0x822F;
pub const RG16I: GLenum = 0x8239;
pub const RG16UI: GLenum = 0x823A;
pub const RG16_SNORM: GLenum = 0x8F99;
pub const RG32F: GLenum = 0x8230;
pub const RG32I: GLenum = 0x823B;
pub const RG32UI: GLenum = 0x823C;
pub const RG8: GLenum = 0x822B;
pub const RG8I: GLenum = 0x8237;
pub const RG8UI: GLenum = 0x8238;
pub const RG8_SNORM: GLenum = 0x8F95;
pub const RGB: GLenum = 0x1907;
pub const RGB10: GLenum = 0x8052;
pub const RGB10_A2: GLenum = 0x8059;
pub const RGB10_A2UI: GLenum = 0x906F;
pub const RGB12: GLenum = 0x8053;
pub const RGB16: GLenum = 0x8054;
pub const RGB16F: GLenum = 0x881B;
pub const RGB16I: GLenum = 0x8D89;
pub const RGB16UI: GLenum = 0x8D77;
pub const RGB16_SNORM: GLenum = 0x8F9A;
pub const RGB32F: GLenum = 0x8815;
pub const RGB32I: GLenum = 0x8D83;
pub const RGB32UI: GLenum = 0x8D71;
pub const RGB4: GLenum = 0x804F;
pub const RGB5: GLenum = 0x8050;
pub const RGB565: GLenum = 0x8D62;
pub const RGB5_A1: GLenum = 0x8057;
pub const RGB8: GLenum = 0x8051;
pub const RGB8I: GLenum = 0x8D8F;
pub const RGB8UI: GLenum = 0x8D7D;
pub const RGB8_SNORM: GLenum = 0x8F96;
pub const RGB9_E5: GLenum = 0x8C3D;
pub const RGBA: GLenum = 0x1908;
pub const RGBA12: GLenum = 0x805A;
pub const RGBA16: GLenum = 0x805B;
pub const RGBA16F: GLenum = 0x881A;
pub const RGBA16I: GLenum = 0x8D88;
pub const RGBA16UI: GLenum = 0x8D76;
pub const RGBA16_SNORM: GLenum = 0x8F9B;
pub const RGBA2: GLenum = 0x8055;
pub const RGBA32F: GLenum = 0x8814;
pub const RGBA32I: GLenum = 0x8D82;
pub const RGBA32UI: GLenum = 0x8D70;
pub const RGBA4: GLenum = 0x8056;
pub const RGBA8: GLenum = 0x8058;
pub const RGBA8I: GLenum = 0x8D8E;
pub const RGBA8UI: GLenum = 0x8D7C;
pub const RGBA8_SNORM: GLenum = 0x8F97;
pub const RGBA_INTEGER: GLenum = 0x8D99;
pub const RGBA_MODE: GLenum = 0x0C31;
pub const RGB_INTEGER: GLenum = 0x8D98;
pub const RGB_SCALE: GLenum = 0x8573;
pub const RG_INTEGER: GLenum = 0x8228;
pub const RIGHT: GLenum = 0x0407;
pub const S: GLenum = 0x2000;
pub const SAMPLER: GLenum = 0x82E6;
pub const SAMPLER_1D: GLenum = 0x8B5D;
pub const SAMPLER_1D_ARRAY: GLenum = 0x8DC0;
pub const SAMPLER_1D_ARRAY_SHADOW: GLenum = 0x8DC3;
pub const SAMPLER_1D_SHADOW: GLenum = 0x8B61;
pub const SAMPLER_2D: GLenum = 0x8B5E;
pub const SAMPLER_2D_ARRAY: GLenum = 0x8DC1;
pub const SAMPLER_2D_ARRAY_SHADOW: GLenum = 0x8DC4;
pub const SAMPLER_2D_MULTISAMPLE: GLenum = 0x9108;
pub const SAMPLER_2D_MULTISAMPLE_ARRAY: GLenum = 0x910B;
pub const SAMPLER_2D_RECT: GLenum = 0x8B63;
pub const SAMPLER_2D_RECT_SHADOW: GLenum = 0x8B64;
pub const SAMPLER_2D_SHADOW: GLenum = 0x8B62;
pub const SAMPLER_3D: GLenum = 0x8B5F;
pub const SAMPLER_BINDING: GLenum = 0x8919;
pub const SAMPLER_BUFFER: GLenum = 0x8DC2;
pub const SAMPLER_CUBE: GLenum = 0x8B60;
pub const SAMPLER_CUBE_SHADOW: GLenum = 0x8DC5;
pub const SAMPLES: GLenum = 0x80A9;
pub const SAMPLES_PASSED: GLenum = 0x8914;
pub const SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809E;
pub const SAMPLE_ALPHA_TO_ONE: GLenum = 0x809F;
pub const SAMPLE_BUFFERS: GLenum = 0x80A8;
pub const SAMPLE_COVERAGE: GLenum = 0x80A0;
pub const SAMPLE_COVERAGE_INVERT: GLenum = 0x80AB;
pub const SAMPLE_COVERAGE_VALUE: GLenum = 0x80AA;
pub const SAMPLE_MASK: GLenum = 0x8E51;
pub const SAMPLE_MASK_VALUE: GLenum = 0x8E52;
pub const SAMPLE_POSITION: GLenum = 0x8E50;
pub const SCISSOR_BIT: GLenum = 0x00080000;
pub const SCISSOR_BOX: GLenum = 0x0C10;
pub const SCISSOR_TEST: GLenum = 0x0C11;
pub const SECONDARY_COLOR_ARRAY: GLenum = 0x845E;
pub const SECONDARY_COLOR_ARRAY_BUFFER_BINDING: GLenum = 0x889C;
pub const SECONDARY_COLOR_ARRAY_POINTER: GLenum = 0x845D;
pub const SECONDARY_COLOR_ARRAY_SIZE: GLenum = 0x845A;
pub const SECONDARY_COLOR_ARRAY_STRIDE: GLenum = 0x845C;
pub const SECONDARY_COLOR_ARRAY_TYPE: GLenum = 0x845B;
pub const SELECT: GLenum = 0x1C02;
pub const SELECTION_BUFFER_POINTER: GLenum = 0x0DF3;
pub const SELECTION_BUFFER_SIZE: GLenum = 0x0DF4;
pub const SEPARATE_ATTRIBS: GLenum = 0x8C8D;
pub const SEPARATE_SPECULAR_COLOR: GLenum = 0x81FA;
pub const SET: GLenum = 0x150F;
pub const SHADER: GLenum = 0x82E1;
pub const SHADER_BINARY_FORMATS: GLenum = 0x8DF8;
pub const SHADER_BINARY_FORMAT_SPIR_V: GLenum = 0x9551;
pub const SHADER_COMPILER: GLenum = 0x8DFA;
pub const SHADER_IMAGE_ACCESS_BARRIER_BIT: GLenum = 0x00000020;
pub const SHADER_SOURCE_LENGTH: GLenum = 0x8B88;
pub const SHADER_STORAGE_BARRIER_BIT: GLenum = 0x00002000;
pub const SHADER_STORAGE_BLOCK: GLenum = 0x92E6;
pub const SHADER_STORAGE_BUFFER: GLenum = 0x90D2;
pub const SHADER_STORAGE_BUFFER_BINDING: GLenum = 0x90D3;
pub const SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT: GLenum = 0x90DF;
pub const SHADER_STORAGE_BUFFER_SIZE: GLenum = 0x90D5;
pub const SHADER_STORAGE_BUFFER_START: GLenum = 0x90D4;
pub const SHADER_TYPE: GLenum = 0x8B4F;
pub const SHADE_MODEL: GLenum = 0x0B54;
pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;
pub const SHININESS: GLenum = 0x1601;
pub const SHORT: GLenum = 0x1402;
pub const SIGNALED: GLenum = 0x9119;
pub const SIGNED_NORMALIZED: GLenum = 0x8F9C;
pub const SINGLE_COLOR: GLenum = 0x81F9;
pub const SLUMINANCE: GLenum = 0x8C46;
pub const SLUMINANCE8: GLenum = 0x8C47;
pub const SLUMINANCE8_ALPHA8: GLenum = 0x8C45;
pub const SLUMINANCE_ALPHA: GLenum = 0x8C44;
pub const SMOOTH: GLenum = 0x1D01;
pub const SMOOTH_LINE_WIDTH_GRANULARITY: GLenum = 0x0B23;
pub const SMOOTH_LINE_WIDTH_RANGE: GLenum = 0x0B22;
pub const SMOOTH_POINT_SIZE_GRANULARITY: GLenum = 0x0B13;
pub const SMOOTH_POINT_SIZE_RANGE: GLenum = 0x0B12;
pub const SOURCE0_ALPHA: GLenum = 0x8588;
pub const SOURCE0_RGB: GLenum = 0x8580;
pub const SOURCE1_ALPHA: GLenum = 0x8589;
pub const SOURCE1_RGB: GLenum = 0x8581;
pub const SOURCE2_ALPHA: GLenum = 0x858A;
pub const SOURCE2_RGB: GLenum = 0x8582;
pub const SPECULAR: GLenum = 0x1202;
pub const SPHERE_MAP: GLenum = 0x2402;
pub const SPIR_V_BINARY: GLenum = 0x9552;
pub const SPOT_CUTOFF: GLenum = 0x1206;
pub const SPOT_DIRECTION: GLenum = 0x1204;
pub const SPOT_EXPONENT: GLenum = 0x1205;
pub const SRC0_ALPHA: GLenum = 0x8588;
pub const SRC0_RGB: GLenum = 0x8580;
pub const SRC1_ALPHA: GLenum = 0x8589;
pub const SRC1_COLOR: GLenum = 0x88F9;
pub const SRC1_RGB: GLenum = 0x8581;
pub const SRC2_ALPHA: GLenum = 0x858A;
pub const SRC2_RGB: GLenum = 0x8582;
pub const SRC_ALPHA: GLenum = 0x0302;
pub const SRC_ALPHA_SATURATE: GLenum = 0x0308;
pub const SRC_COLOR: GLenum = 0x0300;
pub const SRGB: GLenum = 0x8C40;
pub const SRGB8: GLenum = 0x8C41;
pub const SRGB8_ALPHA8: GLenum = 0x8C43;
pub const SRGB_ALPHA: GLenum = 0x8C42;
pub const STACK_OVERFLOW: GLenum = 0x0503;
pub const STACK_UNDERFLOW: GLenum = 0x0504;
pub const STATIC_COPY: GLenum = 0x88E6;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const STATIC_READ: GLenum = 0x88E5;
pub const STENCIL: GLenum = 0x1802;
pub const STENCIL_ATTACHMENT: GLenum = 0x8D20;
pub const STENCIL_BACK_FAIL: GLenum = 0x8801;
pub const STENCIL_BACK_FUNC: GLenum = 0x8800;
pub const STENCIL_BACK_PASS_DEPTH_FAIL: GLenum = 0x8802;
pub const STENCIL_BACK_PASS_DEPTH_PASS: GLenum = 0x8803;
pub const STENCIL_BACK_REF: GLenum = 0x8CA3;
pub const STENCIL_BACK_VALUE_MASK: GLenum = 0x8CA4;
pub const STENCIL_BACK_WRITEMASK: GLenum = 0x8CA5;
pub const STENCIL_BITS: GLenum = 0x0D57;
pub const STENCIL_BUFFER_BIT: GLenum = 0x00000400;
pub const STENCIL_CLEAR_VALUE: GLenum = 0x0B91;
pub const STENCIL_FAIL: GLenum = 0x0B94;
pub const STENCIL_FUNC: GLenum = 0x0B92;
pub const STENCIL_INDEX: GLenum = 0x1901;
pub const STENCIL_INDEX1: GLenum = 0x8D46;
pub const STENCIL_INDEX16: GLenum = 0x8D49;
pub const STENCIL_INDEX4: GLenum = 0x8D47;
pub const STENCIL_INDEX8: GLenum = 0x8D48;
pub const STENCIL_PASS_DEPTH_FAIL: GLenum = 0x0B95;
pub const STENCIL_PASS_DEPTH_PASS: GLenum = 0x0B96;
pub const STENCIL_REF: GLenum = 0x0B97;
pub const STENCIL_TEST: GLenum = 0x0B90;
pub const STENCIL_VALUE_MASK: GLenum = 0x0B93;
pub const STENCIL_WRITEMASK: GLenum = 0x0B98;
pub const STEREO: GLenum = 0x0C33;
pub const STREAM_COPY: GLenum = 0x88E2;
pub const STREAM_DRAW: GLenum = 0x88E0;
pub const STREAM_READ: GLenum = 0x88E1;
pub const SUBPIXEL_BITS: GLenum = 0x0D50;
pub const SUBTRACT: GLenum = 0x84E7;
pub const SYNC_CONDITION: GLenum = 0x9113;
pub const SYNC_FENCE: GLenum = 0x9116;
pub const SYNC_FLAGS: GLenum = 0x9115;
pub const SYNC_FLUSH_COMMANDS_BIT: GLenum = 0x00000001;
pub const SYNC_GPU_COMMANDS_COMPLETE: GLenum = 0x9117;
pub const SYNC_STATUS: GLenum = 0x9114;
pub const T: GLenum = 0x2001;
pub const T2F_C3F_V3F: GLenum = 0x2A2A;
pub const T2F_C4F_N3F_V3F: GLenum = 0x2A2C;
pub const T2F_C4UB_V3F: GLenum = 0x2A29;
pub const T2F_N3F_V3F: GLenum = 0x2A2B;
pub const T2F_V3F: GLenum = 0x2A27;
pub const T4F_C4F_N3F_V4F: GLenum = 0x2A2D;
pub const T4F_V4F: GLenum = 0x2A28;
pub const TESS_CONTROL_SHADER: GLenum = 0x8E88;
pub const TESS_CONTROL_SHADER_BIT: GLenum = 0x00000008;
pub const TESS_EVALUATION_SHADER: GLenum = 0x8E87;
pub const TESS_EVALUATION_SHADER_BIT: GLenum = 0x00000010;
pub const TEXTURE: GLenum = 0x1702;
pub const TEXTURE0: GLenum = 0x84C0;
pub const TEXTURE1: GLenum = 0x84C1;
pub const TEXTURE10: GLenum = 0x84CA;
pub const TEXTURE11: GLenum = 0x84CB;
pub const TEXTURE12: GLenum = 0x84CC;
pub const TEXTURE13: GLenum = 0x84CD;
pub const TEXTURE14: GLenum = 0x84CE;
pub const TEXTURE15: GLenum = 0x84CF;
pub const TEXTURE16: GLenum = 0x84D0;
pub const TEXTURE17: GLenum = 0x84D1;
pub const TEXTURE18: GLenum = 0x84D2;
pub const TEXTURE19: GLenum = 0x84D3;
pub const TEXTURE2: GLenum = 0x84C2;
pub const TEXTURE20: GLenum = 0x84D4;
pub const TEXTURE21: GLenum = 0x84D5;
pub const TEXTURE22: GLenum = 0x84D6;
pub const TEXTURE23: GLenum = 0x84D7;
pub const TEXTURE24: GLenum = 0x84D8;
pub const TEXTURE25: GLenum = 0x84D9;
pub const TEXTURE26: GLenum = 0x84DA;
pub const TEXTURE27: GLenum = 0x84DB;
pub const TEXTURE28: GLenum = 0x84DC;
pub const TEXTURE29: GLenum = 0x84DD;
pub const TEXTURE3: GLenum = 0x84C3;
pub const TEXTURE30: GLenum = 0x84DE;
pub const TEXTURE31: GLenum = 0x84DF;
pub const TEXTURE4: GLenum = 0x84C4;
pub const TEXTURE5: GLenum = 0x84C5;
pub const TEXTURE6: GLenum = 0x84C6;
pub const TEXTURE7: GLenum = 0x84C7;
pub const TEXTURE8: GLenum = 0x84C8;
pub const TEXTURE9: GLenum = 0x84C9;
pub const TEXTURE_1D: GLenum = 0x0DE0;
pub const TEXTURE_1D_ARRAY: GLenum = 0x8C18;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8C1A;
pub const TEXTURE_2D_MULTISAMPLE: GLenum = 0x9100;
pub const TEXTURE_2D_MULTISAMPLE_ARRAY: GLenum = 0x9102;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_ALPHA_SIZE: GLenum = 0x805F;
pub const TEXTURE_ALPHA_TYPE: GLenum = 0x8C13;
pub const TEXTURE_BASE_LEVEL: GLenum = 0x813C;
pub const TEXTURE_BINDING_1D: GLenum = 0x8068;
pub const TEXTURE_BINDING_1D_ARRAY: GLenum = 0x8C1C;
pub const TEXTURE_BINDING_2D: GLenum = 0x8069;
pub const TEXTURE_BINDING_2D_ARRAY: GLenum = 0x8C1D;
pub const TEXTURE_BINDING_2D_MULTISAMPLE: GLenum = 0x9104;
pub const TEXTURE_BINDING_2D_MULTISAMPLE_ARRAY: GLenum = 0x9105;
pub const TEXTURE_BINDING_3D: GLenum = 0x806A;
pub const TEXTURE_BINDING_BUFFER: GLenum = 0x8C2C;
pub const TEXTURE_BINDING_CUBE_MAP: GLenum = 0x8514;
pub const TEXTURE_BINDING_RECTANGLE: GLenum = 0x84F6;
pub const TEXTURE_BIT: GLenum = 0x00040000;
pub const TEXTURE_BLUE_SIZE: GLenum = 0x805E;
pub const TEXTURE_BLUE_TYPE: GLenum = 0x8C12;
pub const TEXTURE_BORDER: GLenum = 0x1005;
pub const TEXTURE_BORDER_COLOR: GLenum = 0x1004;
pub const TEXTURE_BUFFER: GLenum = 0x8C2A;
pub const TEXTURE_BUFFER_DATA_STORE_BINDING: GLenum = 0x8C2D;
pub const TEXTURE_COMPARE_FUNC: GLenum = 0x884D;
pub const TEXTURE_COMPARE_MODE: GLenum = 0x884C;
pub const TEXTURE_COMPONENTS: GLenum = 0x1003;
pub const TEXTURE_COMPRESSED: GLenum = 0x86A1;
pub const TEXTURE_COMPRESSED_IMAGE_SIZE: GLenum = 0x86A0;
pub const TEXTURE_COMPRESSION_HINT: GLenum = 0x84EF;
pub const TEXTURE_COORD_ARRAY: GLenum = 0x8078;
pub const TEXTURE_COORD_ARRAY_BUFFER_BINDING: GLenum = 0x889A;
pub const TEXTURE_COORD_ARRAY_POINTER: GLenum = 0x8092;
pub const TEXTURE_COORD_ARRAY_SIZE: GLenum = 0x8088;
pub const TEXTURE_COORD_ARRAY_STRIDE: GLenum = 0x808A;
pub const TEXTURE_COORD_ARRAY_TYPE: GLenum = 0x8089;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_CUBE_MAP_NEGATIVE_X: GLenum = 0x8516;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Y: GLenum = 0x8518;
pub const TEXTURE_CUBE_MAP_NEGATIVE_Z: GLenum = 0x851A;
pub const TEXTURE_CUBE_MAP_POSITIVE_X: GLenum = 0x8515;
pub const TEXTURE_CUBE_MAP_POSITIVE_Y: GLenum = 0x8517;
pub const TEXTURE_CUBE_MAP_POSITIVE_Z: GLenum = 0x8519;
pub const TEXTURE_CUBE_MAP_SEAMLESS: GLenum = 0x884F;
pub const TEXTURE_DEPTH: GLenum = 0x8071;
pub const TEXTURE_DEPTH_SIZE: GLenum = 0x884A;
pub const TEXTURE_DEPTH_TYPE: GLenum = 0x8C16;
pub const TEXTURE_ENV: GLenum = 0x2300;
pub const TEXTURE_ENV_COLOR: GLenum = 0x2201;
pub const TEXTURE_ENV_MODE: GLenum = 0x2200;
pub const TEXTURE_FETCH_BARRIER_BIT: GLenum = 0x00000008;
pub const TEXTURE_FILTER_CONTROL: GLenum = 0x8500;
pub const TEXTURE_FIXED_SAMPLE_LOCATIONS: GLenum = 0x9107;
pub const TEXTURE_GEN_MODE: GLenum = 0x2500;
pub const TEXTURE_GEN_Q: GLenum = 0x0C63;
pub const TEXTURE_GEN_R: GLenum = 0x0C62;
pub const TEXTURE_GEN_S: GLenum = 0x0C60;
pub const TEXTURE_GEN_T: GLenum = 0x0C61;
pub const TEXTURE_GREEN_SIZE: GLenum = 0x805D;
pub const TEXTURE_GREEN_TYPE: GLenum = 0x8C11;
pub const TEXTURE_HEIGHT: GLenum = 0x1001;
pub const TEXTURE_IMMUTABLE_FORMAT: GLenum = 0x912F;
pub const TEXTURE_IMMUTABLE_LEVELS: GLenum = 0x82DF;
pub const TEXTURE_INTENSITY_SIZE: GLenum = 0x8061;
pub const TEXTURE_INTENSITY_TYPE: GLenum = 0x8C15;
pub const TEXTURE_INTERNAL_FORMAT: GLenum = 0x1003;
pub const TEXTURE_LOD_BIAS: GLenum = 0x8501;
pub const TEXTURE_LUMINANCE_SIZE: GLenum = 0x8060;
pub const TEXTURE_LUMINANCE_TYPE: GLenum = 0x8C14;
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MATRIX: GLenum = 0x0BA8;
pub const TEXTURE_MAX_LEVEL: GLenum = 0x813D;
pub const TEXTURE_MAX_LOD: GLenum = 0x813B;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_MIN_LOD: GLenum = 0x813A;
pub const TEXTURE_PRIORITY: GLenum = 0x8066;
pub const TEXTURE_RECTANGLE: GLenum = 0x84F5;
pub const TEXTURE_RED_SIZE: GLenum = 0x805C;
pub const TEXTURE_RED_TYPE: GLenum = 0x8C10;
pub const TEXTURE_RESIDENT: GLenum = 0x8067;
pub const TEXTURE_SAMPLES: GLenum = 0x9106;
pub const TEXTURE_SHARED_SIZE: GLenum = 0x8C3F;
pub const TEXTURE_STACK_DEPTH: GLenum = 0x0BA5;
pub const TEXTURE_STENCIL_SIZE: GLenum = 0x88F1;
pub const TEXTURE_SWIZZLE_A: GLenum = 0x8E45;
pub const TEXTURE_SWIZZLE_B: GLenum = 0x8E44;
pub const TEXTURE_SWIZZLE_G: GLenum = 0x8E43;
pub const TEXTURE_SWIZZLE_R: GLenum = 0x8E42;
pub const TEXTURE_SWIZZLE_RGBA: GLenum = 0x8E46;
pub const TEXTURE_TARGET: GLenum = 0x1006;
pub const TEXTURE_UPDATE_BARRIER_BIT: GLenum = 0x00000100;
pub const TEXTURE_WIDTH: GLenum = 0x1000;
pub const TEXTURE_WRAP_R: GLenum = 0x8072;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const TIMEOUT_EXPIRED: GLenum = 0x911B;
pub const TIMEOUT_IGNORED: GLuint64 = 0xFFFFFFFFFFFFFFFF;
pub const TIMESTAMP: GLenum = 0x8E28;
pub const TIME_ELAPSED: GLenum = 0x88BF;
pub const TOP_LEVEL_ARRAY_SIZE: GLenum = 0x930C;
pub const TOP_LEVEL_ARRAY_STRIDE: GLenum = 0x930D;
pub const TRANSFORM_BIT: GLenum = 0x00001000;
pub const TRANSFORM_FEEDBACK: GLenum = 0x8E22;
pub const TRANSFORM_FEEDBACK_ACTIVE: GLenum = 0x8E24;
pub const TRANSFORM_FEEDBACK_BARRIER_BIT: GLenum = 0x00000800;
pub const TRANSFORM_FEEDBACK_BINDING: GLenum = 0x8E25;
pub const TRANSFORM_FEEDBACK_BUFFER: GLenum = 0x8C8E;
pub const TRANSFORM_FEEDBACK_BUFFER_BINDING: GLenum = 0x8C8F;
pub const TRANSFORM_FEEDBACK_BUFFER_MODE: GLenum = 0x8C7F;
pub const TRANSFORM_FEEDBACK_BUFFER_SIZE: GLenum = 0x8C85;
pub const TRANSFORM_FEEDBACK_BUFFER_START: GLenum = 0x8C84;
pub const TRANSFORM_FEEDBACK_PAUSED: GLenum = 0x8E23;
pub const TRANSFORM_FEEDBACK_PRIMITIVES_WRITTEN: GLenum = 0x8C88;
pub const TRANSFORM_FEEDBACK_VARYING: GLenum = 0x92F4;
pub const TRANSFORM_FEEDBACK_VARYINGS: GLenum = 0x8C83;
pub const TRANSFORM_FEEDBACK_VARYING_MAX_LENGTH: GLenum = 0x8C76;
pub const TRANSPOSE_COLOR_MATRIX: GLenum = 0x84E6;
pub const TRANSPOSE_MODELVIEW_MATRIX: GLenum = 0x84E3;
pub const TRANSPOSE_PROJECTION_MATRIX: GLenum = 0x84E4;
pub const TRANSPOSE_TEXTURE_MATRIX: GLenum = 0x84E5;
pub const TRIANGLES: GLenum = 0x0004;
pub const TRIANGLES_ADJACENCY: GLenum = 0x000C;
pub const TRIANGLE_FAN: GLenum = 0x0006;
pub const TRIANGLE_STRIP: GLenum = 0x0005;
pub const TRIANGLE_STRIP_ADJACENCY: GLenum = 0x000D;
pub const TRUE: GLboolean = 1;
pub const TYPE: GLenum = 0x92FA;
pub const UNIFORM: GLenum = 0x92E1;
pub const UNIFORM_ARRAY_STRIDE: GLenum = 0x8A3C;
pub const UNIFORM_BARRIER_BIT: GLenum = 0x00000004;
pub const UNIFORM_BLOCK: GLenum = 0x92E2;
pub const UNIFORM_BLOCK_ACTIVE_UNIFORMS: GLenum = 0x8A42;
pub const UNIFORM_BLOCK_ACTIVE_UNIFORM_INDICES: GLenum = 0x8A43;
pub const UNIFORM_BLOCK_BINDING: GLenum = 0x8A3F;
pub const UNIFORM_BLOCK_DATA_SIZE: GLenum = 0x8A40;
pub const UNIFORM_BLOCK_INDEX: GLenum = 0x8A3A;
pub const UNIFORM_BLOCK_NAME_LENGTH: GLenum = 0x8A41;
pub const UNIFORM_BLOCK_REFERENCED_BY_FRAGMENT_SHADER: GLenum = 0x8A46;
pub const UNIFORM_BLOCK_REFERENCED_BY_GEOMETRY_SHADER: GLenum = 0x8A45;
pub const UNIFORM_BLOCK_REFERENCED_BY_VERTEX_SHADER: GLenum = 0x8A44;
pub const UNIFORM_BUFFER: GLenum = 0x8A11;
pub const UNIFORM_BUFFER_BINDING: GLenum = 0x8A28;
pub const UNIFORM_BUFFER_OFFSET_ALIGNMENT: GLenum = 0x8A34;
pub const UNIFORM_BUFFER_SIZE: GLenum = 0x8A2A;
pub const UNIFORM_BUFFER_START: GLenum = 0x8A29;
pub const UNIFORM_IS_ROW_MAJOR: GLenum = 0x8A3E;
pub const UNIFORM_MATRIX_STRIDE: GLenum = 0x8A3D;
pub const UNIFORM_NAME_LENGTH: GLenum = 0x8A39;
pub const UNIFORM_OFFSET: GLenum = 0x8A3B;
pub const UNIFORM_SIZE: GLenum = 0x8A38;
pub const UNIFORM_TYPE: GLenum = 0x8A37;
pub const UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const UNPACK_IMAGE_HEIGHT: GLenum = 0x806E;
pub const UNPACK_LSB_FIRST: GLenum = 0x0CF1;
pub const UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const UNPACK_SKIP_IMAGES: GLenum = 0x806D;
pub const UNPACK_SKIP_PIXELS: GLenum = 0x0CF4;
pub const UNPACK_SKIP_ROWS: GLenum = 0x0CF3;
pub const UNPACK_SWAP_BYTES: GLenum = 0x0CF0;
pub const UNSIGNALED: GLenum = 0x9118;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const UNSIGNED_BYTE_2_3_3_REV: GLenum = 0x8362;
pub const UNSIGNED_BYTE_3_3_2: GLenum = 0x8032;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const UNSIGNED_INT_10F_11F_11F_REV: GLenum = 0x8C3B;
pub const UNSIGNED_INT_10_10_10_2: GLenum = 0x8036;
pub const UNSIGNED_INT_24_8: GLenum = 0x84FA;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;
pub const UNSIGNED_INT_5_9_9_9_REV: GLenum = 0x8C3E;
pub const UNSIGNED_INT_8_8_8_8: GLenum = 0x8035;
pub const UNSIGNED_INT_8_8_8_8_REV: GLenum = 0x8367;
pub const UNSIGNED_INT_ATOMIC_COUNTER: GLenum = 0x92DB;
pub const UNSIGNED_INT_IMAGE_2D: GLenum = 0x9063;
pub const UNSIGNED_INT_IMAGE_2D_ARRAY: GLenum = 0x9069;
pub const UNSIGNED_INT_IMAGE_3D: GLenum = 0x9064;
pub const UNSIGNED_INT_IMAGE_CUBE: GLenum = 0x9066;
pub const UNSIGNED_INT_SAMPLER_1D: GLenum = 0x8DD1;
pub const UNSIGNED_INT_SAMPLER_1D_ARRAY: GLenum = 0x8DD6;
pub const UNSIGNED_INT_SAMPLER_2D: GLenum = 0x8DD2;
pub const UNSIGNED_INT_SAMPLER_2D_ARRAY: GLenum = 0x8DD7;
pub const UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE: GLenum = 0x910A;
pub const UNSIGNED_INT_SAMPLER_2D_MULTISAMPLE_ARRAY: GLenum = 0x910D;
pub const UNSIGNED_INT_SAMPLER_2D_RECT: GLenum = 0x8DD5;
pub const UNSIGNED_INT_SAMPLER_3D: GLenum = 0x8DD3;
pub const UNSIGNED_INT_SAMPLER_BUFFER: GLenum = 0x8DD8;
pub const UNSIGNED_INT_SAMPLER_CUBE: GLenum = 0x8DD4;
pub const UNSIGNED_INT_VEC2: GLenum = 0x8DC6;
pub const UNSIGNED_INT_VEC3: GLenum = 0x8DC7;
pub const UNSIGNED_INT_VEC4: GLenum = 0x8DC8;
pub const UNSIGNED_NORMALIZED: GLenum = 0x8C17;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const UNSIGNED_SHORT_1_5_5_5_REV: GLenum = 0x8366;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_4_4_4_4_REV: GLenum = 0x8365;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;
pub const UNSIGNED_SHORT_5_6_5_REV: GLenum = 0x8364;
pub const UPPER_LEFT: GLenum = 0x8CA2;
pub const V2F: GLenum = 0x2A20;
pub const V3F: GLenum = 0x2A21;
pub const VALIDATE_STATUS: GLenum = 0x8B83;
pub const VENDOR: GLenum = 0x1F00;
pub const VERSION: GLenum = 0x1F02;
pub const VERTEX_ARRAY: GLenum = 0x8074;
pub const VERTEX_ARRAY_BINDING: GLenum = 0x85B5;
pub const VERTEX_ARRAY_BUFFER_BINDING: GLenum = 0x8896;
pub const VERTEX_ARRAY_POINTER: GLenum = 0x808E;
pub const VERTEX_ARRAY_SIZE: GLenum = 0x807A;
pub const VERTEX_ARRAY_STRIDE: GLenum = 0x807C;
pub const VERTEX_ARRAY_TYPE: GLenum = 0x807B;
pub const VERTEX_ATTRIB_ARRAY_BARRIER_BIT: GLenum = 0x00000001;
pub const VERTEX_ATTRIB_ARRAY_BUFFER_BINDING: GLenum = 0x889F;
pub const VERTEX_ATTRIB_ARRAY_DIVISOR: GLenum = 0x88FE;
pub const VERTEX_ATTRIB_ARRAY_ENABLED: GLenum = 0x8622;
pub const VERTEX_ATTRIB_ARRAY_INTEGER: GLenum = 0x88FD;
pub const VERTEX_ATTRIB_ARRAY_NORMALIZED: GLenum = 0x886A;
pub const VERTEX_ATTRIB_ARRAY_POINTER: GLenum = 0x8645;
pub const VERTEX_ATTRIB_ARRAY_SIZE: GLenum = 0x8623;
pub const VERTEX_ATTRIB_ARRAY_STRIDE: GLenum = 0x8624;
pub const VERTEX_ATTRIB_ARRAY_TYPE: GLenum = 0x8625;
pub const VERTEX_ATTRIB_BINDING: GLenum = 0x82D4;
pub const VERTEX_ATTRIB_RELATIVE_OFFSET: GLenum = 0x82D5;
pub const VERTEX_BINDING_BUFFER: GLenum = 0x8F4F;
pub const VERTEX_BINDING_DIVISOR: GLenum = 0x82D6;
pub const VERTEX_BINDING_OFFSET: GLenum = 0x82D7;
pub const VERTEX_BINDING_STRIDE: GLenum = 0x82D8;
pub const VERTEX_PROGRAM_POINT_SIZE: GLenum = 0x8642;
pub const VERTEX_PROGRAM_TWO_SIDE: GLenum = 0x8643;
pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const VERTEX_SHADER_BIT: GLenum = 0x00000001;
pub const VIEWPORT: GLenum = 0x0BA2;
pub const VIEWPORT_BIT: GLenum = 0x00000800;
pub const WAIT_FAILED: GLenum = 0x911D;
pub const WEIGHT_ARRAY_BUFFER_BINDING: GLenum = 0x889E;
pub const WRITE_ONLY: GLenum = 0x88B9;
pub const XOR: GLenum = 0x1506;
pub const ZERO: GLenum = 0;
pub const ZERO_TO_ONE: GLenum = 0x935F;
pub const ZOOM_X: GLenum = 0x0D16;
pub const ZOOM_Y: GLenum = 0x0D17;
