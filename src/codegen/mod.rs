/// Code generation module - turns a scanned template into a program
///
/// ## Module Structure
/// - `api`: Public API functions for generating and writing programs
/// - `backend`: Trait for target-language backends
/// - `csharp`: The C# backend
mod api;
mod backend;
mod csharp;

// Re-export public API
pub use api::{generate_program, write_program};
pub use backend::ProgramBackend;
pub use csharp::{escape_verbatim, CSharpBackend};
