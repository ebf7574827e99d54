use std::ffi::{c_char, CString};
use std::ptr;

use limbu_core::gloss_lookup;

use super::{ffi_guard, to_cstring};
use crate::api::{handle, Request};

// --- Transliteration FFI ---

/// Output and newline-joined diagnostics of one conversion.
#[repr(C)]
pub struct LimbuResult {
    pub output: *const c_char,
    pub debug_log: *const c_char,
    _owned: *mut [CString; 2],
}

impl LimbuResult {
    fn empty() -> Self {
        Self {
            output: ptr::null(),
            debug_log: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }

    fn pack(output: &str, debug_log: &str) -> Self {
        let owned = Box::new([to_cstring(output), to_cstring(debug_log)]);
        let output = owned[0].as_ptr();
        let debug_log = owned[1].as_ptr();
        Self {
            output,
            debug_log,
            _owned: Box::into_raw(owned),
        }
    }
}

#[no_mangle]
pub extern "C" fn limbu_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Convert `text` with the mode named by `mode` (e.g. `"limbu_to_roman"`).
///
/// Null or non-UTF-8 arguments give a result with null pointers.
#[no_mangle]
pub extern "C" fn limbu_transliterate(mode: *const c_char, text: *const c_char) -> LimbuResult {
    ffi_guard!(LimbuResult::empty();
        str: mode_str = mode,
        str: text_str = text,
    );
    let response = handle(&Request::new(mode_str, text_str));
    LimbuResult::pack(&response.output_text, &response.debug_log())
}

#[no_mangle]
pub extern "C" fn limbu_result_free(result: LimbuResult) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}

// --- Gloss FFI ---

/// English gloss of a Devanagari month word, or a "not found" message.
/// Returns null for null or non-UTF-8 input. Free with [`limbu_string_free`].
#[no_mangle]
pub extern "C" fn limbu_gloss_lookup(word: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: word_str = word,
    );
    to_cstring(&gloss_lookup(word_str)).into_raw()
}

#[no_mangle]
pub extern "C" fn limbu_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
