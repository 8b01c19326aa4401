// MIT/Apache2 License

mod shader;

pub use shader::*;
