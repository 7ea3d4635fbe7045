//! I/O doubles for driving the interaction loop in tests.

use std::io::{self, Read, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

/// A cloneable in-memory writer whose contents can be read back.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A reader whose every read fails.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
    }
}

/// A reader that panics on first use, taking its thread down with it.
pub struct PanickingReader;

impl Read for PanickingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        panic!("reader blew up");
    }
}

/// A writer whose every write fails.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }
}

/// Serves `data`, then blocks forever, like a user who stops typing.
///
/// `stalled` receives a message the first time the reader runs dry, which
/// is after every line in `data` has been consumed and scored.
pub struct StallingReader {
    data: io::Cursor<Vec<u8>>,
    stalled_tx: Option<mpsc::Sender<()>>,
    // Held so `park_rx.recv()` never returns.
    _park_tx: mpsc::Sender<()>,
    park_rx: mpsc::Receiver<()>,
}

impl StallingReader {
    pub fn new(data: &str) -> (Self, mpsc::Receiver<()>) {
        let (stalled_tx, stalled_rx) = mpsc::channel();
        let (park_tx, park_rx) = mpsc::channel();
        let reader = Self {
            data: io::Cursor::new(data.as_bytes().to_vec()),
            stalled_tx: Some(stalled_tx),
            _park_tx: park_tx,
            park_rx,
        };
        (reader, stalled_rx)
    }
}

impl Read for StallingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n > 0 {
            return Ok(n);
        }
        if let Some(tx) = self.stalled_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.park_rx.recv();
        unreachable!("stalling reader woke up");
    }
}
