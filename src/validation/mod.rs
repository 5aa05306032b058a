mod validator;

pub use validator::*;
