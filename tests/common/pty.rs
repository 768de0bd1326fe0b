//! PTY (pseudo-terminal) harness for E2E testing.
//!
//! Spawns the `kilo` binary on the slave side of a real pseudo-terminal,
//! types into the master side and captures everything the editor prints.

// PTY operations require unsafe libc FFI calls
#![allow(dead_code, unsafe_code)]

use std::ffi::CString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::os::fd::FromRawFd;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of running the editor under a PTY.
#[derive(Clone, Debug)]
pub struct PtyResult {
    /// Exit status code (None if the process did not exit cleanly).
    pub exit_code: Option<i32>,
    /// Captured output.
    pub output: Vec<u8>,
    /// Terminal attributes of the slave after the child exited.
    pub lflag_after: libc::tcflag_t,
    /// Terminal attributes of the slave before the child started.
    pub lflag_before: libc::tcflag_t,
}

impl PtyResult {
    /// Check if output contains a byte sequence.
    pub fn contains_sequence(&self, seq: &[u8]) -> bool {
        self.output.windows(seq.len()).any(|window| window == seq)
    }
}

/// Configuration for a PTY run.
#[derive(Clone, Debug)]
pub struct PtyConfig {
    /// Path to the binary to run.
    pub binary: PathBuf,
    /// Arguments to pass.
    pub args: Vec<String>,
    /// Bytes typed once the first frame has been drawn.
    pub keys: Vec<u8>,
    /// Maximum time to wait for the process to exit.
    pub timeout: Duration,
    /// Terminal size (rows, columns).
    pub size: (u16, u16),
}

impl Default for PtyConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(env!("CARGO_BIN_EXE_kilo")),
            args: Vec::new(),
            keys: vec![0x18],
            timeout: Duration::from_secs(10),
            size: (24, 80),
        }
    }
}

fn lflag(fd: libc::c_int) -> io::Result<libc::tcflag_t> {
    // SAFETY: termios is plain data and tcgetattr fills it on success
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(termios.c_lflag)
}

/// Spawn the binary under a PTY, type `config.keys` after the first frame
/// and collect output until it exits or the timeout passes.
pub fn spawn_pty(config: &PtyConfig) -> io::Result<PtyResult> {
    let mut master_fd: libc::c_int = 0;
    let mut slave_fd: libc::c_int = 0;

    // SAFETY: openpty is a standard POSIX function
    let ret = unsafe {
        libc::openpty(
            std::ptr::from_mut(&mut master_fd),
            std::ptr::from_mut(&mut slave_fd),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            std::ptr::null_mut(),
        )
    };
    if ret != 0 {
        return Err(io::Error::last_os_error());
    }

    let winsize = libc::winsize {
        ws_row: config.size.0,
        ws_col: config.size.1,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: ioctl with TIOCSWINSZ is safe on a valid fd
    unsafe {
        libc::ioctl(slave_fd, libc::TIOCSWINSZ, &winsize);
    }
    let lflag_before = lflag(slave_fd)?;

    // Prepare exec arguments before forking
    let binary_c = CString::new(config.binary.to_string_lossy().as_ref())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut args_c = vec![binary_c.clone()];
    for arg in &config.args {
        args_c.push(
            CString::new(arg.as_str()).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?,
        );
    }
    let args_ptrs: Vec<*const libc::c_char> = args_c
        .iter()
        .map(|s| s.as_ptr())
        .chain(std::iter::once(std::ptr::null()))
        .collect();

    // SAFETY: fork is a standard POSIX function
    let pid = unsafe { libc::fork() };
    if pid < 0 {
        return Err(io::Error::last_os_error());
    }

    if pid == 0 {
        // SAFETY: standard POSIX operations in a forked child
        unsafe {
            libc::setsid();
            libc::ioctl(slave_fd, libc::TIOCSCTTY, 0);
            libc::dup2(slave_fd, 0);
            libc::dup2(slave_fd, 1);
            libc::dup2(slave_fd, 2);
            libc::close(master_fd);
            libc::execv(binary_c.as_ptr(), args_ptrs.as_ptr());
            libc::_exit(127);
        }
    }

    // Keep the slave open in the parent so its attributes stay readable.
    // SAFETY: fcntl is safe on a valid fd
    unsafe {
        let flags = libc::fcntl(master_fd, libc::F_GETFL);
        libc::fcntl(master_fd, libc::F_SETFL, flags | libc::O_NONBLOCK);
    }
    // SAFETY: File::from_raw_fd takes ownership of the fd
    let mut master = unsafe { File::from_raw_fd(master_fd) };

    let mut output = Vec::new();
    let mut buf = [0u8; 4096];
    let mut typed = false;
    let deadline = Instant::now() + config.timeout;
    let mut exit_code = None;

    loop {
        match master.read(&mut buf) {
            Ok(n) if n > 0 => output.extend_from_slice(&buf[..n]),
            _ => {}
        }

        if !typed && output.windows(6).any(|w| w == b"\x1b[?25h") {
            master.write_all(&config.keys)?;
            typed = true;
        }

        let mut status: libc::c_int = 0;
        // SAFETY: waitpid with WNOHANG is safe
        let wait_result =
            unsafe { libc::waitpid(pid, std::ptr::from_mut(&mut status), libc::WNOHANG) };
        if wait_result == pid {
            while let Ok(n) = master.read(&mut buf) {
                if n == 0 {
                    break;
                }
                output.extend_from_slice(&buf[..n]);
            }
            if libc::WIFEXITED(status) {
                exit_code = Some(libc::WEXITSTATUS(status));
            }
            break;
        }

        if Instant::now() > deadline {
            // SAFETY: kill is safe with a valid pid
            unsafe {
                libc::kill(pid, libc::SIGKILL);
                libc::waitpid(pid, std::ptr::from_mut(&mut status), 0);
            }
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    let lflag_after = lflag(slave_fd)?;
    // SAFETY: close is safe on a valid fd
    unsafe {
        libc::close(slave_fd);
    }

    Ok(PtyResult {
        exit_code,
        output,
        lflag_after,
        lflag_before,
    })
}
