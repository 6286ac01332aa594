// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::error::ScrapeError;

/// One client per team-fetch batch. HTTP/1.0 with `Connection: close`,
/// so each GET is its own connection; the client only carries the host.
pub struct Client {
    host: String,
}

impl Client {
    pub fn new(host: &str) -> Self {
        Self { host: s!(host) }
    }

    pub fn get(&self, path: &str) -> Result<String, ScrapeError> {
        let url = join!("http://", &self.host, path);
        let net = |source| ScrapeError::Net { url: url.clone(), source };

        let mut s = TcpStream::connect((self.host.as_str(), 80)).map_err(net)?;
        s.set_read_timeout(Some(Duration::from_secs(15))).map_err(net)?;
        s.set_write_timeout(Some(Duration::from_secs(15))).map_err(net)?;

        let req = format!(
            "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: fpl_tally/0.2\r\nConnection: close\r\n\r\n",
            path, self.host
        );
        s.write_all(req.as_bytes()).map_err(net)?;
        s.flush().map_err(net)?;

        let mut buf = Vec::new();
        s.read_to_end(&mut buf).map_err(net)?;
        let resp = String::from_utf8_lossy(&buf);

        let status = resp.split("\r\n").next().unwrap_or("");
        if !status.contains("200") {
            let status = s!(status);
            return Err(ScrapeError::Http { status, url });
        }
        let body_idx = match resp.find("\r\n\r\n") {
            Some(i) => i + 4,
            None => return Err(ScrapeError::MalformedResponse { url }),
        };
        Ok(resp[body_idx..].to_string())
    }
}
