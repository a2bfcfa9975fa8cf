//! Timed answer capture: a blocking line read raced against a deadline.

use std::io::BufRead;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

/// Captures one answer per question, giving up when the deadline fires.
///
/// Lines arrive over a channel from a single long-lived reader task, so an
/// attempt abandoned at one deadline can never leak its value into a later
/// question: each capture drains stale lines before listening.
pub struct AnswerCapture {
    lines: mpsc::UnboundedReceiver<String>,
}

impl AnswerCapture {
    /// Capture from the process's stdin. Spawns one blocking reader task
    /// that lives until stdin closes; it is the only reader of stdin from
    /// this point on.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::task::spawn_blocking(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }

    /// Capture from an arbitrary line source. Lets tests script input with
    /// precise timing.
    pub fn from_lines(lines: mpsc::UnboundedReceiver<String>) -> Self {
        Self { lines }
    }

    /// Wait up to `deadline` for a valid selection among `option_count`
    /// numbered options. Returns the zero-based option index, or `None` if
    /// the deadline fired first.
    ///
    /// Input that does not parse as an in-range number is not an error; it
    /// is silently ignored and the wait continues. On a photo finish the
    /// deadline wins: the select is biased with the timer polled first, so
    /// the outcome is deterministic.
    pub async fn capture(&mut self, option_count: usize, deadline: Duration) -> Option<usize> {
        // Drop anything typed after a previous question's deadline fired.
        while self.lines.try_recv().is_ok() {}

        let timer = time::sleep(deadline);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                biased;
                _ = &mut timer => return None,
                line = self.lines.recv() => match line {
                    Some(line) => {
                        if let Some(choice) = parse_selection(&line, option_count) {
                            return Some(choice);
                        }
                        // Invalid input: no re-prompt, keep waiting.
                    }
                    None => {
                        // Input closed; nothing can arrive, run out the clock.
                        timer.as_mut().await;
                        return None;
                    }
                },
            }
        }
    }
}

/// Accept a 1-based selection in `[1, option_count]`, returned zero-based.
fn parse_selection(input: &str, option_count: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=option_count).contains(&n) {
        Some(n - 1)
    } else {
        None
    }
}
