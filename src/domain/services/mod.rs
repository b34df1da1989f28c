//! Domain Services
//!
//! Pure transformations over domain entities.

pub mod descriptor_compiler;

pub use descriptor_compiler::{
    compile, compile_with_report, database_service, effective_environment_names, Compilation,
};
