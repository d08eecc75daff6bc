use tracing::debug;

use crate::error::{Error, Result};

/// Default executable name of the game client
pub const DEFAULT_PROCESS_NAME: &str = "ffxiv_dx11.exe";

/// Handle to the running game process, opened for memory reads
pub struct ProcessHandle {
    pub pid: u32,
    pub name: String,
    #[cfg(target_os = "windows")]
    handle: windows::Win32::Foundation::HANDLE,
}

#[cfg(target_os = "windows")]
impl ProcessHandle {
    /// Find the process by executable name and open it with read access
    pub fn find_and_open(process_name: &str) -> Result<Self> {
        use windows::Win32::Foundation::FALSE;
        use windows::Win32::System::Threading::{
            OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_VM_READ,
        };

        let pid = find_process_id(process_name)?;
        let handle = unsafe {
            OpenProcess(
                PROCESS_VM_READ | PROCESS_QUERY_LIMITED_INFORMATION,
                FALSE,
                pid,
            )
        }
        .map_err(|e| Error::ProcessOpenFailed(format!("{} (pid {}): {}", process_name, pid, e)))?;

        debug!("Opened {} (pid {})", process_name, pid);
        Ok(Self {
            pid,
            name: process_name.to_string(),
            handle,
        })
    }

    pub fn read_memory(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;

        let mut buffer = vec![0u8; size];
        let mut bytes_read = 0usize;
        unsafe {
            ReadProcessMemory(
                self.handle,
                address as *const std::ffi::c_void,
                buffer.as_mut_ptr().cast(),
                size,
                Some(&mut bytes_read as *mut usize),
            )
        }
        .map_err(|e| Error::MemoryReadFailed {
            address,
            message: e.to_string(),
        })?;

        if bytes_read != size {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!("partial read: {} of {} bytes", bytes_read, size),
            });
        }
        Ok(buffer)
    }
}

#[cfg(target_os = "windows")]
impl Drop for ProcessHandle {
    fn drop(&mut self) {
        use windows::Win32::Foundation::CloseHandle;

        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

#[cfg(target_os = "windows")]
fn find_process_id(process_name: &str) -> Result<u32> {
    use windows::Win32::Foundation::CloseHandle;
    use windows::Win32::System::Diagnostics::ToolHelp::{
        CreateToolhelp32Snapshot, PROCESSENTRY32W, Process32FirstW, Process32NextW,
        TH32CS_SNAPPROCESS,
    };

    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
        .map_err(|e| Error::ProcessNotFound(format!("{}: {}", process_name, e)))?;

    let mut entry = PROCESSENTRY32W {
        dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    let mut found = None;
    let mut more = unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok();
    while more {
        let len = entry
            .szExeFile
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(entry.szExeFile.len());
        let exe = String::from_utf16_lossy(&entry.szExeFile[..len]);
        if exe.eq_ignore_ascii_case(process_name) {
            found = Some(entry.th32ProcessID);
            break;
        }
        more = unsafe { Process32NextW(snapshot, &mut entry) }.is_ok();
    }

    unsafe {
        let _ = CloseHandle(snapshot);
    }

    found.ok_or_else(|| Error::ProcessNotFound(process_name.to_string()))
}

#[cfg(not(target_os = "windows"))]
impl ProcessHandle {
    /// Process memory access is only implemented for Windows
    pub fn find_and_open(process_name: &str) -> Result<Self> {
        debug!("Process lookup for {} is unsupported on this platform", process_name);
        Err(Error::ProcessNotFound(format!(
            "{} (process memory access requires Windows)",
            process_name
        )))
    }

    pub fn read_memory(&self, address: u64, _size: usize) -> Result<Vec<u8>> {
        Err(Error::MemoryReadFailed {
            address,
            message: "process memory access requires Windows".to_string(),
        })
    }
}
