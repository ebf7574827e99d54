//! C API over the request handler and the gloss lookup.
//!
//! Every string handed out is owned by Rust and must come back through the
//! matching `*_free` function.

use std::ffi::{c_char, CStr, CString};

mod translit;


pub use translit::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Copy `s` into a heap C string. Interior NULs truncate the copy.
pub(crate) fn to_cstring(s: &str) -> CString {
    let end = s.find('\0').unwrap_or(s.len());
    // No NUL is left in s[..end], so this cannot fail.
    CString::new(&s[..end]).unwrap_or_default()
}

/// Validate one or more C string arguments and bind them as `&str`,
/// returning `$on_err` from the calling function if any is null or not UTF-8.
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;
