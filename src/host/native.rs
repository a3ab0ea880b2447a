//! Real host implementation.
//!
//! On Windows this talks to the registry and Win32 message boxes and spawns
//! children with a hidden console. Elsewhere the registry is simply absent
//! and the dialogs degrade to stderr plus a stdin yes/no prompt, which keeps
//! the launcher usable (and its end-to-end tests runnable) on developer
//! machines.

use std::io;
use std::path::Path;

use log::debug;

use super::{machine, Host};

/// Host implementation backed by the actual operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl NativeHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Host for NativeHost {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    fn set_env_var(&self, name: &str, value: &str) -> io::Result<()> {
        std::env::set_var(name, value);
        Ok(())
    }

    fn registry_string(&self, subkey: &str) -> Option<String> {
        platform::registry_string(subkey)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn binary_is_64bit(&self, path: &Path) -> bool {
        machine::is_64bit_executable(path)
    }

    fn spawn_and_wait(&self, command: &[String], hide_window: bool) -> io::Result<i32> {
        debug!("spawning child: {command:?} (hide_window: {hide_window})");
        platform::spawn_and_wait(command, hide_window)
    }

    fn show_error(&self, title: &str, message: &str) {
        platform::show_error(title, message);
    }

    fn confirm(&self, title: &str, message: &str) -> bool {
        platform::confirm(title, message)
    }
}

#[cfg(windows)]
mod platform {
    use std::ffi::OsStr;
    use std::io;
    use std::os::windows::ffi::OsStrExt;
    use std::os::windows::process::CommandExt;
    use std::process::Command;
    use std::ptr;

    use windows_sys::Win32::Foundation::ERROR_SUCCESS;
    use windows_sys::Win32::System::Registry::{
        RegGetValueW, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ,
    };
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        MessageBoxW, IDYES, MB_ICONERROR, MB_ICONQUESTION, MB_OK, MB_YESNO,
    };

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    fn wide(value: &str) -> Vec<u16> {
        OsStr::new(value).encode_wide().chain(Some(0)).collect()
    }

    /// Read the default REG_SZ value of `subkey` under HKLM. The buffer is
    /// sized by asking the registry first, so long values are never
    /// truncated.
    pub(super) fn registry_string(subkey: &str) -> Option<String> {
        let subkey = wide(subkey);
        let mut size: u32 = 0;
        // SAFETY: all pointers are valid for the duration of each call; the
        // first call only queries the value size.
        let ret = unsafe {
            RegGetValueW(
                HKEY_LOCAL_MACHINE,
                subkey.as_ptr(),
                ptr::null(),
                RRF_RT_REG_SZ,
                ptr::null_mut(),
                ptr::null_mut(),
                &mut size,
            )
        };
        if ret != ERROR_SUCCESS || size == 0 {
            return None;
        }

        let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
        // SAFETY: `buffer` holds at least `size` bytes.
        let ret = unsafe {
            RegGetValueW(
                HKEY_LOCAL_MACHINE,
                subkey.as_ptr(),
                ptr::null(),
                RRF_RT_REG_SZ,
                ptr::null_mut(),
                buffer.as_mut_ptr().cast(),
                &mut size,
            )
        };
        if ret != ERROR_SUCCESS {
            return None;
        }

        let end = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
        Some(String::from_utf16_lossy(&buffer[..end]))
    }

    pub(super) fn spawn_and_wait(command: &[String], hide_window: bool) -> io::Result<i32> {
        let (executable, args) = command
            .split_first()
            .ok_or_else(|| io::Error::other("empty command"))?;

        let mut child = Command::new(executable);
        // Arguments are wrapped in quotes and joined with spaces, without
        // escaping embedded quote characters. Install scripts depend on this
        // exact command line, so it is kept as-is.
        for arg in args {
            child.raw_arg(format!("\"{arg}\""));
        }
        if hide_window {
            child.creation_flags(CREATE_NO_WINDOW);
        }
        let status = child.status()?;
        Ok(status.code().unwrap_or(1))
    }

    pub(super) fn show_error(title: &str, message: &str) {
        let title = wide(title);
        let message = wide(message);
        // SAFETY: both strings are NUL-terminated and outlive the call.
        unsafe {
            MessageBoxW(
                ptr::null_mut(),
                message.as_ptr(),
                title.as_ptr(),
                MB_OK | MB_ICONERROR,
            );
        }
    }

    pub(super) fn confirm(title: &str, message: &str) -> bool {
        let title = wide(title);
        let message = wide(message);
        // SAFETY: both strings are NUL-terminated and outlive the call.
        let answer = unsafe {
            MessageBoxW(
                ptr::null_mut(),
                message.as_ptr(),
                title.as_ptr(),
                MB_YESNO | MB_ICONQUESTION,
            )
        };
        answer == IDYES
    }
}

#[cfg(not(windows))]
mod platform {
    use std::io::{self, BufRead, Write};
    use std::process::Command;

    /// There is no registry off Windows; the registry candidate is simply
    /// never produced.
    pub(super) fn registry_string(_subkey: &str) -> Option<String> {
        None
    }

    pub(super) fn spawn_and_wait(command: &[String], _hide_window: bool) -> io::Result<i32> {
        let (executable, args) = command
            .split_first()
            .ok_or_else(|| io::Error::other("empty command"))?;
        let status = Command::new(executable).args(args).status()?;
        Ok(status.code().unwrap_or(1))
    }

    pub(super) fn show_error(title: &str, message: &str) {
        eprintln!("{title}\n{message}");
    }

    pub(super) fn confirm(title: &str, message: &str) -> bool {
        eprint!("{title}\n{message} [y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        let answer = answer.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }
}
