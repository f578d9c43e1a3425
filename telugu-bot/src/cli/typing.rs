//! Word-by-word reply rendering

use std::io::Write;
use std::time::Duration;

/// Prints text one word at a time, pausing between words
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay: Duration::from_millis(delay_ms) }
    }

    pub fn instant() -> Self {
        Self { delay: Duration::ZERO }
    }

    pub async fn print(&self, text: &str) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();

        if self.delay.is_zero() {
            writeln!(stdout, "{text}")?;
            return stdout.flush();
        }

        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                writeln!(stdout)?;
            }
            for (position, word) in line.split(' ').enumerate() {
                if position > 0 {
                    write!(stdout, " ")?;
                }
                write!(stdout, "{word}")?;
                stdout.flush()?;
                tokio::time::sleep(self.delay).await;
            }
        }
        writeln!(stdout)?;
        stdout.flush()
    }
}
