use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// Routes formatted log lines to the devtools console.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserConsole;

/// Buffers one formatted event and emits it as a single console entry on drop.
#[derive(Debug, Default)]
pub(crate) struct ConsoleLine {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&line.trim_end().into());
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

impl<'a> MakeWriter<'a> for BrowserConsole {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::default()
    }
}
