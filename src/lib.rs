// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod api;
pub mod ffi;
mod trace_init;

pub use api::{handle, Mode, Request, Response};
pub use limbu_core::{gloss, script, table, tokenizer, translit};
pub use trace_init::init_tracing;
