//! C API layer for the longvec core types
//!
//! This module exposes the vector hash functions and checked lane access to C
//! callers. The `repr(C)` vector structs are passed by value; lane lookups
//! write through an out-pointer and report failures as status codes, with a
//! message retrievable through [`longvec_get_last_error`].

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_longlong, c_ulonglong};
use std::ptr;

use tracing::{debug, warn};

use crate::long2::Long2;
use crate::long3::Long3;
use crate::long4::Long4;
use crate::status::{LongVecError, Result};
use crate::unsigned_vector::{ULong2, ULong3, ULong4};

/// Status codes for C API
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(non_camel_case_types)]
pub enum longvec_status_t {
    #[default]
    LONGVEC_STATUS_OK = 0,
    LONGVEC_STATUS_ERROR = -1,
    LONGVEC_STATUS_INVALID_PARAMETER = -2,
    LONGVEC_STATUS_INDEX_OUT_OF_RANGE = -3,
}

impl From<&LongVecError> for longvec_status_t {
    fn from(error: &LongVecError) -> Self {
        match error {
            LongVecError::IndexOutOfRange { .. } => longvec_status_t::LONGVEC_STATUS_INDEX_OUT_OF_RANGE,
            LongVecError::InvalidParameter(_) => longvec_status_t::LONGVEC_STATUS_INVALID_PARAMETER,
            LongVecError::FloatConversion { .. } => longvec_status_t::LONGVEC_STATUS_ERROR,
        }
    }
}

// ===== Hash C API =====

/// Narrow hash of a 2-lane vector
#[no_mangle]
pub extern "C" fn longvec_long2_hash(v: Long2) -> c_ulonglong {
    v.hash()
}

/// Wide hash of a 2-lane vector
#[no_mangle]
pub extern "C" fn longvec_long2_hash_wide(v: Long2) -> ULong2 {
    v.hash_wide()
}

/// Narrow hash of a 3-lane vector
#[no_mangle]
pub extern "C" fn longvec_long3_hash(v: Long3) -> c_ulonglong {
    v.hash()
}

/// Wide hash of a 3-lane vector
#[no_mangle]
pub extern "C" fn longvec_long3_hash_wide(v: Long3) -> ULong3 {
    v.hash_wide()
}

/// Narrow hash of a 4-lane vector
#[no_mangle]
pub extern "C" fn longvec_long4_hash(v: Long4) -> c_ulonglong {
    v.hash()
}

/// Wide hash of a 4-lane vector
#[no_mangle]
pub extern "C" fn longvec_long4_hash_wide(v: Long4) -> ULong4 {
    v.hash_wide()
}

// ===== Lane Access C API =====

/// Writes lane `index` of `*v` into `*out`
///
/// # Safety
/// `v` must be null or point to a valid `Long2`; `out` must be null or point
/// to writable memory for one `long long`.
#[no_mangle]
pub unsafe extern "C" fn longvec_long2_get(
    v: *const Long2,
    index: usize,
    out: *mut c_longlong,
) -> longvec_status_t {
    read_lane(v.as_ref(), out.as_mut(), |v| v.try_get(index))
}

/// Writes lane `index` of `*v` into `*out`
///
/// # Safety
/// Same contract as [`longvec_long2_get`] for a `Long3`.
#[no_mangle]
pub unsafe extern "C" fn longvec_long3_get(
    v: *const Long3,
    index: usize,
    out: *mut c_longlong,
) -> longvec_status_t {
    read_lane(v.as_ref(), out.as_mut(), |v| v.try_get(index))
}

/// Writes lane `index` of `*v` into `*out`
///
/// # Safety
/// Same contract as [`longvec_long2_get`] for a `Long4`.
#[no_mangle]
pub unsafe extern "C" fn longvec_long4_get(
    v: *const Long4,
    index: usize,
    out: *mut c_longlong,
) -> longvec_status_t {
    read_lane(v.as_ref(), out.as_mut(), |v| v.try_get(index))
}

fn read_lane<V>(
    v: Option<&V>,
    out: Option<&mut c_longlong>,
    lookup: impl FnOnce(&V) -> Result<i64>,
) -> longvec_status_t {
    let (v, out) = match (v, out) {
        (Some(v), Some(out)) => (v, out),
        _ => {
            return report_error(LongVecError::InvalidParameter(
                "vector or output pointer is null".into(),
            ))
        }
    };

    match lookup(v) {
        Ok(lane) => {
            *out = lane;
            longvec_status_t::LONGVEC_STATUS_OK
        }
        Err(error) => report_error(error),
    }
}

/// Records `error` as the last error and returns its status code
fn report_error(error: LongVecError) -> longvec_status_t {
    warn!(%error, "lane lookup failed");
    let status = longvec_status_t::from(&error);
    set_last_error(&error.to_string());
    status
}

// ===== Error Handling C API =====

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = RefCell::new(None);
}

/// Gets the last error message recorded on this thread
///
/// The returned string is owned by the library and stays valid until the
/// next failing call or [`longvec_clear_error`] on the same thread. Returns
/// null when no error is recorded.
#[no_mangle]
pub extern "C" fn longvec_get_last_error() -> *const c_char {
    LAST_ERROR.with(|error| match error.borrow().as_ref() {
        Some(msg) => msg.as_ptr(),
        None => ptr::null(),
    })
}

/// Clears the last error message
#[no_mangle]
pub extern "C" fn longvec_clear_error() {
    debug!("clearing last error");
    LAST_ERROR.with(|error| {
        *error.borrow_mut() = None;
    });
}

/// Sets the last error message
fn set_last_error(error_msg: &str) {
    // Interior NULs cannot cross the C boundary.
    let msg = CString::new(error_msg.replace('\0', " ")).ok();
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = msg;
    });
}

// ===== Version Information C API =====

static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

/// Returns the version of the longvec core library
#[no_mangle]
pub extern "C" fn longvec_version() -> *const c_char {
    match CStr::from_bytes_with_nul(VERSION) {
        Ok(version) => version.as_ptr(),
        Err(_) => ptr::null(),
    }
}
