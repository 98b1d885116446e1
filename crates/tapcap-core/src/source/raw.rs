use std::ffi::CString;
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};

use super::{ANY_INTERFACE, FrameSource, MAX_FRAME_LEN, RawFrame, SourceError};

const ETH_P_ALL: u16 = 0x0003;

/// Blocking AF_PACKET capture source bound to one interface.
///
/// The socket sees every link-layer frame on the interface (`ETH_P_ALL`),
/// or on all interfaces for the `any` sentinel (ifindex 0). Reads block
/// until a frame arrives; an interrupting signal surfaces as `Ok(None)`
/// so the capture loop can re-check its stop flag.
#[derive(Debug)]
pub struct RawSocketSource {
    fd: libc::c_int,
    buffer: Vec<u8>,
}

impl RawSocketSource {
    /// Open a raw capture socket on the named interface.
    pub fn open(interface: &str) -> Result<Self, SourceError> {
        let fd = unsafe {
            libc::socket(
                libc::AF_PACKET,
                libc::SOCK_RAW,
                ETH_P_ALL.to_be() as libc::c_int,
            )
        };
        if fd < 0 {
            let err = io::Error::last_os_error();
            return Err(match err.raw_os_error() {
                Some(libc::EPERM) | Some(libc::EACCES) => SourceError::Privilege(err),
                _ => SourceError::Io(err),
            });
        }

        let source = Self {
            fd,
            buffer: vec![0u8; MAX_FRAME_LEN],
        };

        let ifindex = if interface == ANY_INTERFACE {
            0
        } else {
            let name = CString::new(interface).map_err(|_| SourceError::NoSuchInterface {
                name: interface.to_string(),
            })?;
            let index = unsafe { libc::if_nametoindex(name.as_ptr()) };
            if index == 0 {
                return Err(SourceError::NoSuchInterface {
                    name: interface.to_string(),
                });
            }
            index as libc::c_int
        };

        source.bind_interface(ifindex)?;
        log::info!("capturing on interface {interface}");
        Ok(source)
    }

    fn bind_interface(&self, ifindex: libc::c_int) -> Result<(), SourceError> {
        let mut sockaddr: libc::sockaddr_ll = unsafe { std::mem::zeroed() };
        sockaddr.sll_family = libc::AF_PACKET as u16;
        sockaddr.sll_protocol = ETH_P_ALL.to_be();
        sockaddr.sll_ifindex = ifindex;

        let res = unsafe {
            libc::bind(
                self.fd,
                &sockaddr as *const libc::sockaddr_ll as *const libc::sockaddr,
                std::mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };
        if res < 0 {
            return Err(SourceError::Io(io::Error::last_os_error()));
        }
        Ok(())
    }
}

impl AsRawFd for RawSocketSource {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl FrameSource for RawSocketSource {
    fn next_frame(&mut self) -> Result<Option<RawFrame>, SourceError> {
        let len = unsafe {
            libc::recv(
                self.fd,
                self.buffer.as_mut_ptr() as *mut libc::c_void,
                self.buffer.len(),
                0,
            )
        };
        if len < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                return Ok(None);
            }
            return Err(SourceError::Io(err));
        }

        Ok(Some(RawFrame::now(self.buffer[..len as usize].to_vec())))
    }
}

impl Drop for RawSocketSource {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}
