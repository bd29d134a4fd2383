//! Reference advertisement of a detached remote, read through libgit2 directly
//!
//! `git2::RemoteConnection::list` turns the advertisement into a slice
//! without checking its base pointer, and libgit2 leaves that pointer null
//! when the remote has no refs at all. Listing an empty repository through
//! git2 therefore aborts the process, so this module talks to `git_remote_ls`
//! itself and treats a null base as an empty advertisement.

use std::ffi::{c_char, c_int, c_uint, c_void, CStr, CString};
use std::{mem, ptr, slice};

use git2::{Error, Oid};
use libgit2_sys as raw;

/// libgit2 asks again after a rejected credential; stop after this many tries.
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

const DEFAULT_SSH_USER: &[u8] = b"git\0";

/// One `<oid> <refname>` line of the advertisement
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AdvertisedRef {
    pub name: String,
    pub oid: Oid,
}

#[derive(Debug, Default)]
struct CredentialState {
    attempts: usize,
}

/// Owned `git_remote` that is not attached to any local repository
pub(super) struct DetachedRemote {
    raw: *mut raw::git_remote,
    // Handed to libgit2 as the callback payload, so it lives as long as the remote.
    credentials: Box<CredentialState>,
}

impl DetachedRemote {
    pub fn create(url: &str) -> Result<Self, Error> {
        raw::init();
        let url = CString::new(url).map_err(|_| Error::from_str("remote URL contains a NUL byte"))?;

        let mut remote = ptr::null_mut();
        check(unsafe { raw::git_remote_create_detached(&mut remote, url.as_ptr()) })?;

        Ok(Self {
            raw: remote,
            credentials: Box::default(),
        })
    }

    /// Open a fetch connection, authenticating through the ssh-agent
    pub fn connect(&mut self) -> Result<(), Error> {
        let mut callbacks: raw::git_remote_callbacks = unsafe { mem::zeroed() };
        check(unsafe {
            raw::git_remote_init_callbacks(&mut callbacks, raw::GIT_REMOTE_CALLBACKS_VERSION)
        })?;
        callbacks.credentials = Some(acquire_credentials);
        callbacks.payload = &mut *self.credentials as *mut CredentialState as *mut c_void;

        check(unsafe {
            raw::git_remote_connect(
                self.raw,
                raw::GIT_DIRECTION_FETCH,
                &callbacks,
                ptr::null(),
                ptr::null(),
            )
        })
    }

    /// Every ref the server advertised, in advertisement order
    pub fn advertised_refs(&self) -> Result<Vec<AdvertisedRef>, Error> {
        let mut base = ptr::null_mut();
        let mut size = 0;
        check(unsafe { raw::git_remote_ls(&mut base, &mut size, self.raw) })?;

        if base.is_null() || size == 0 {
            return Ok(Vec::new());
        }

        let heads = unsafe { slice::from_raw_parts(base as *const *const raw::git_remote_head, size) };
        heads
            .iter()
            .filter(|head| !head.is_null())
            .map(|&head| {
                let head = unsafe { &*head };
                if head.name.is_null() {
                    return Err(Error::from_str("remote advertised a ref without a name"));
                }
                let name = unsafe { CStr::from_ptr(head.name) }
                    .to_string_lossy()
                    .into_owned();
                let oid = Oid::from_bytes(&head.oid.id)?;
                Ok(AdvertisedRef { name, oid })
            })
            .collect()
    }
}

impl Drop for DetachedRemote {
    fn drop(&mut self) {
        // Freeing also disconnects.
        unsafe { raw::git_remote_free(self.raw) }
    }
}

fn check(code: c_int) -> Result<(), Error> {
    if code < 0 {
        Err(Error::last_error(code).unwrap_or_else(|| Error::from_str("unknown libgit2 error")))
    } else {
        Ok(())
    }
}

fn refuse(message: &'static [u8]) -> c_int {
    unsafe {
        raw::git_error_set_str(raw::GIT_ERROR_CALLBACK as c_int, message.as_ptr() as *const c_char);
    }
    -1
}

extern "C" fn acquire_credentials(
    out: *mut *mut raw::git_cred,
    _url: *const c_char,
    username_from_url: *const c_char,
    allowed_types: c_uint,
    payload: *mut c_void,
) -> c_int {
    if payload.is_null() {
        return refuse(b"missing credential state\0");
    }
    let state = unsafe { &mut *(payload as *mut CredentialState) };
    state.attempts += 1;
    if state.attempts > MAX_CREDENTIAL_ATTEMPTS {
        return refuse(b"Authentication failed\0");
    }

    let username = if username_from_url.is_null() {
        DEFAULT_SSH_USER.as_ptr() as *const c_char
    } else {
        username_from_url
    };
    let allows = |kind: raw::git_credtype_t| (allowed_types & kind as c_uint) != 0;

    unsafe {
        if allows(raw::GIT_CREDTYPE_USERNAME) {
            raw::git_cred_username_new(out, username)
        } else if allows(raw::GIT_CREDTYPE_SSH_KEY) {
            raw::git_cred_ssh_key_from_agent(out, username)
        } else if allows(raw::GIT_CREDTYPE_DEFAULT) {
            raw::git_cred_default_new(out)
        } else {
            refuse(b"Authentication not supported\0")
        }
    }
}
