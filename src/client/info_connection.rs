//! TCP transport for the text info protocol
//!
//! Each query is a fresh connect/send/read exchange; there is no pooling
//! and no shared connection state between polls.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use super::InfoTransport;
use crate::utils::TransportError;

/// One-shot TCP info client.
///
/// Holds only the endpoint and timeout; a `TcpStream` lives for exactly
/// one query.
pub struct InfoConnection {
    host: String,
    port: u16,
    timeout: Duration,
}

impl InfoConnection {
    pub fn new(host: &str, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.to_string(),
            port,
            timeout,
        }
    }

    fn connect(&self) -> Result<TcpStream, TransportError> {
        let addr_str = format!("{}:{}", self.host, self.port);

        // Resolve hostname to socket address
        let addr = addr_str
            .to_socket_addrs()
            .map_err(|e| TransportError::ConnectFailed {
                host: self.host.clone(),
                port: self.port,
                source: e,
            })?
            .next()
            .ok_or_else(|| TransportError::ConnectFailed {
                host: self.host.clone(),
                port: self.port,
                source: io::Error::new(io::ErrorKind::NotFound, "No addresses found"),
            })?;

        let stream = TcpStream::connect_timeout(&addr, self.timeout).map_err(|e| {
            TransportError::ConnectFailed {
                host: self.host.clone(),
                port: self.port,
                source: e,
            }
        })?;

        stream.set_nodelay(true).ok();
        stream.set_read_timeout(Some(self.timeout)).ok();
        stream.set_write_timeout(Some(self.timeout)).ok();
        Ok(stream)
    }
}

impl InfoTransport for InfoConnection {
    fn query(&mut self, request: &str) -> Result<String, TransportError> {
        debug!(request, host = %self.host, port = self.port, "info query");
        let stream = self.connect()?;

        let mut writer = stream.try_clone().map_err(TransportError::Io)?;
        writer.write_all(request.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        let n = reader.read_line(&mut line).map_err(|e| {
            if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut {
                TransportError::Timeout(self.timeout.as_millis() as u64)
            } else if e.kind() == io::ErrorKind::InvalidData {
                TransportError::InvalidPayload
            } else {
                TransportError::Io(e)
            }
        })?;
        if n == 0 {
            return Err(TransportError::Closed);
        }

        // Responses are one line; strip the terminator
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_query_round_trip() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request = String::new();
            reader.read_line(&mut request).unwrap();
            assert_eq!(request.trim_end(), "statistics");

            let mut writer = stream;
            writer.write_all(b"objects=42;uptime=10\n").unwrap();
        });

        let mut conn = InfoConnection::new("127.0.0.1", port, Duration::from_secs(5));
        let response = conn.query("statistics").unwrap();
        assert_eq!(response, "objects=42;uptime=10");

        server.join().unwrap();
    }

    #[test]
    fn test_connect_failure_is_sentinel() {
        // Port 1 is essentially never listening on loopback
        let mut conn = InfoConnection::new("127.0.0.1", 1, Duration::from_millis(200));
        assert!(matches!(
            conn.query("statistics"),
            Err(TransportError::ConnectFailed { .. })
        ));
    }

    #[test]
    fn test_closed_before_response() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            drop(stream);
        });

        let mut conn = InfoConnection::new("127.0.0.1", port, Duration::from_secs(5));
        // EOF surfaces as Closed; an RST from the peer may surface as Io
        assert!(matches!(
            conn.query("statistics"),
            Err(TransportError::Closed) | Err(TransportError::Io(_))
        ));

        server.join().unwrap();
    }
}
