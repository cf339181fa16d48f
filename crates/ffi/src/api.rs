//! C FFI API functions.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use palletizer_core::{Config, Error, Solver};
use palletizer_layer::{MultiTypeAllocator, SingleBoxSolver};

/// Error codes.
pub const PALLETIZER_OK: i32 = 0;
pub const PALLETIZER_ERR_NULL_PTR: i32 = -1;
pub const PALLETIZER_ERR_INVALID_JSON: i32 = -2;
pub const PALLETIZER_ERR_VALIDATION: i32 = -3;
pub const PALLETIZER_ERR_UNKNOWN: i32 = -99;

/// Solves a single-box request from JSON input.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `palletizer_free_string`
#[no_mangle]
pub unsafe extern "C" fn palletizer_solve_single(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    run(request_json, result_ptr, |json| {
        Ok(solve_single_internal(json))
    })
}

/// Allocates a multi-type request from JSON input.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `palletizer_free_string`
#[no_mangle]
pub unsafe extern "C" fn palletizer_allocate_multi(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    run(request_json, result_ptr, |json| {
        Ok(allocate_multi_internal(json))
    })
}

/// Dispatches on the request's `"mode"` (`"single"` or `"multi"`, default
/// single) and solves.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `palletizer_free_string`
#[no_mangle]
pub unsafe extern "C" fn palletizer_solve(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    run(request_json, result_ptr, solve_auto_internal)
}

/// Frees a string allocated by this library.
///
/// # Safety
/// - `ptr` must have been allocated by a `palletizer_*` function
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn palletizer_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the API version from Cargo.toml.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn palletizer_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

/// Shared pointer checks, UTF-8 decoding and response encoding.
///
/// `solve` returns `Err` only when the request is not JSON at all; the code is
/// then [`PALLETIZER_ERR_INVALID_JSON`] and a rejection response is still
/// written.
unsafe fn run<F>(request_json: *const c_char, result_ptr: *mut *mut c_char, solve: F) -> i32
where
    F: FnOnce(&str) -> Result<SolveResponse, SolveResponse>,
{
    if request_json.is_null() || result_ptr.is_null() {
        return PALLETIZER_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return PALLETIZER_ERR_INVALID_JSON,
    };

    let (response, code) = match solve(json_str) {
        Ok(response) if response.success => (response, PALLETIZER_OK),
        Ok(response) if response.result.is_none() => (response, PALLETIZER_ERR_INVALID_JSON),
        Ok(response) => (response, PALLETIZER_ERR_VALIDATION),
        Err(response) => (response, PALLETIZER_ERR_INVALID_JSON),
    };

    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return PALLETIZER_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            code
        }
        Err(_) => PALLETIZER_ERR_UNKNOWN,
    }
}

fn solve_auto_internal(json_str: &str) -> Result<SolveResponse, SolveResponse> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| invalid_request(format!("malformed JSON: {}", e)))?;

    let mode = match value.get("mode") {
        None | Some(serde_json::Value::Null) => Mode::default(),
        Some(mode) => serde_json::from_value(mode.clone())
            .map_err(|e| invalid_request(format!("unknown mode: {}", e)))?,
    };

    Ok(match mode {
        Mode::Single => solve_single_internal(json_str),
        Mode::Multi => allocate_multi_internal(json_str),
    })
}

fn solve_single_internal(json_str: &str) -> SolveResponse {
    let request: SingleRequest = match serde_json::from_str(json_str) {
        Ok(r) => r,
        Err(e) => return invalid_request(format!("malformed JSON: {}", e)),
    };

    let solver = SingleBoxSolver::new();
    let result = solver.solve(&request.input);
    log::debug!(
        "ffi single: {} box(es), {} error(s)",
        result.total_boxes,
        result.errors.len()
    );

    if request.include_instances {
        let instances = solver.instantiate(&request.input, &result);
        SolveResponse::from(result).with_instances(instances)
    } else {
        SolveResponse::from(result)
    }
}

fn allocate_multi_internal(json_str: &str) -> SolveResponse {
    let request: MultiRequest = match serde_json::from_str(json_str) {
        Ok(r) => r,
        Err(e) => return invalid_request(format!("malformed JSON: {}", e)),
    };

    let allocator = MultiTypeAllocator::new(build_config(request.palette));
    let result = allocator.solve(&request.input);
    log::debug!(
        "ffi multi: {} of {} unit(s) placed",
        result.placed_total,
        result.requested_total
    );

    SolveResponse::from(result)
}

fn invalid_request(message: String) -> SolveResponse {
    SolveResponse::rejected(Error::InvalidRequest(message).to_string())
}

fn build_config(palette: Option<Vec<String>>) -> Config {
    match palette {
        Some(palette) => Config::default().with_palette(palette),
        None => Config::default(),
    }
}
