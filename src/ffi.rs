//! FFI interface for C/C++ hosts
//!
//! The host passes the page configuration as JSON and gets the rendered
//! `<head>` markup back as an owned C string.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use serde::Deserialize;

use crate::error::Result;
use crate::page::PageMetadata;
use crate::request::RequestContext;
use crate::video::normalize;

/// Result struct returned to the host
/// Both pointers are owned by Rust and must be freed via free_meta_result
#[repr(C)]
pub struct MetaResultFFI {
    /// Rendered markup or JSON payload (null-terminated), or null on failure
    pub output_ptr: *mut c_char,
    /// Error message if composition failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// JSON request accepted by `compose_meta_tags`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComposeRequest {
    pub page: PageMetadata,
    /// Current request, used to infer the page URL
    pub request: Option<RequestContext>,
    /// Absolute request URL; alternative to `request`
    pub request_url: Option<String>,
}

impl ComposeRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn render(&self) -> Result<String> {
        let context = match (&self.request, &self.request_url) {
            (Some(ctx), _) => Some(ctx.clone()),
            (None, Some(url)) => Some(RequestContext::from_url(url)?),
            (None, None) => None,
        };
        Ok(self.page.render(context.as_ref()))
    }
}

/// Render meta tags for the page described by `request_json`.
///
/// # Arguments
/// * `request_json` - JSON-serialized ComposeRequest (null-terminated)
///
/// # Returns
/// MetaResultFFI with either output_ptr set (success) or error_ptr set (failure)
///
/// # Safety
/// - `request_json` must be a valid null-terminated C string
/// - Caller must free the result via `free_meta_result`
#[no_mangle]
pub unsafe extern "C" fn compose_meta_tags(request_json: *const c_char) -> MetaResultFFI {
    let request_str = match read_c_str(request_json, "Request JSON") {
        Ok(s) => s,
        Err(msg) => return make_error_result(&msg),
    };

    let request = match ComposeRequest::from_json(request_str) {
        Ok(r) => r,
        Err(e) => return make_error_result(&format!("Failed to parse request: {}", e)),
    };

    match request.render() {
        Ok(html) => make_output_result(html),
        Err(e) => make_error_result(&e.to_string()),
    }
}

/// Normalize a video URL (convenience function)
///
/// Returns the embed descriptor as JSON, or JSON `null` when no provider
/// matches.
///
/// # Safety
/// Same as compose_meta_tags
#[no_mangle]
pub unsafe extern "C" fn normalize_video_ffi(video_url: *const c_char) -> MetaResultFFI {
    let url = match read_c_str(video_url, "Video URL") {
        Ok(s) => s,
        Err(msg) => return make_error_result(&msg),
    };

    match serde_json::to_string(&normalize(Some(url))) {
        Ok(json) => make_output_result(json),
        Err(e) => make_error_result(&format!("Serialize error: {}", e)),
    }
}

/// Free a MetaResultFFI returned by this module
///
/// # Safety
/// - `result` must have been returned by a function in this module
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_meta_result(result: MetaResultFFI) {
    if !result.output_ptr.is_null() {
        drop(CString::from_raw(result.output_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

unsafe fn read_c_str<'a>(ptr: *const c_char, what: &str) -> std::result::Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{} is null", what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| format!("Invalid UTF-8 in {}", what))
}

fn make_output_result(output: String) -> MetaResultFFI {
    match CString::new(output) {
        Ok(cstr) => MetaResultFFI {
            output_ptr: cstr.into_raw(),
            error_ptr: ptr::null_mut(),
        },
        Err(_) => make_error_result("Output contains null bytes"),
    }
}

// Helper to create error result
fn make_error_result(msg: &str) -> MetaResultFFI {
    let error_cstr = CString::new(msg.replace('\0', "")).unwrap_or_default();
    MetaResultFFI {
        output_ptr: ptr::null_mut(),
        error_ptr: error_cstr.into_raw(),
    }
}
