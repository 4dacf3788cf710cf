pub mod eval;
pub mod functions;
pub mod lowered;
pub mod surface;
pub mod verifier;
