use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// Runs `f` under a thread-local subscriber and returns the formatted events it emitted.
pub fn capture_logs(f: impl FnOnce()) -> String {
  let buffer = Buffer::default();
  let writer = buffer.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .with_max_level(tracing::Level::TRACE)
    .finish();

  tracing::subscriber::with_default(subscriber, f);

  let bytes = buffer.0.lock().unwrap().clone();
  String::from_utf8(bytes).unwrap()
}
