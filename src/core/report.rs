//! The reporting channel.
//!
//! Every transition and every rejection produces exactly one human-readable
//! line. Where that line goes is up to the `Report` a context was built with.

/// Sink for report lines.
pub trait Report {
    fn line(&mut self, message: &str);
}

/// Prints each line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console;

impl Report for Console {
    fn line(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps a transcript.
impl Report for Vec<String> {
    fn line(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Discards everything.
impl Report for () {
    fn line(&mut self, _message: &str) {}
}
