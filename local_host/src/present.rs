//! Stock presentation surfaces

use game_core::{Presenter, Snapshot};
use std::io::{self, Write};

/// Logs score changes at `info` and a position line every `every` ticks at `debug`
#[derive(Debug, Clone)]
pub struct LogPresenter {
    every: u64,
    last_score: Option<(u32, u32)>,
}

impl LogPresenter {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            last_score: None,
        }
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        let score = (snapshot.human_score, snapshot.opponent_score);
        if self.last_score != Some(score) {
            log::info!(
                "Score {}-{} at tick {}",
                score.0,
                score.1,
                snapshot.tick
            );
            self.last_score = Some(score);
        } else if self.every > 0 && snapshot.tick % self.every == 0 {
            log::debug!(
                "tick={} ball=({:.1}, {:.1}) paddles=({:.1}, {:.1})",
                snapshot.tick,
                snapshot.ball_x,
                snapshot.ball_y,
                snapshot.human_paddle_y,
                snapshot.opponent_paddle_y
            );
        }
    }
}

/// Writes one JSON object per snapshot, newline separated.
///
/// The first write error is logged and all later output is dropped.
pub struct JsonLinesPresenter<W: Write> {
    out: W,
    failed: bool,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: false }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot) {
        if self.failed {
            return;
        }
        if let Err(e) = self.write_line(snapshot) {
            log::warn!("Snapshot output failed, dropping further snapshots: {e}");
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(tick: u64) -> Snapshot {
        Snapshot {
            tick,
            ball_x: 400.0,
            ball_y: 240.0,
            human_paddle_y: 160.0,
            opponent_paddle_y: 168.0,
            human_score: 2,
            opponent_score: 1,
        }
    }

    struct BrokenPipe {
        attempts: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_lines_one_object_per_snapshot() {
        let mut presenter = JsonLinesPresenter::new(Vec::new());
        presenter.present(&snapshot(1));
        presenter.present(&snapshot(2));

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let decoded: Snapshot = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(decoded, snapshot(2));
        assert!(lines[0].contains("\"human_score\":2"));
    }

    #[test]
    fn test_json_lines_stops_after_write_error() {
        let mut presenter = JsonLinesPresenter::new(BrokenPipe { attempts: 0 });
        presenter.present(&snapshot(1));
        assert!(presenter.has_failed());

        presenter.present(&snapshot(2));
        presenter.present(&snapshot(3));
        assert_eq!(
            presenter.into_inner().attempts,
            1,
            "No writes after the first failure"
        );
    }

    #[test]
    fn test_log_presenter_tracks_score_changes() {
        let mut presenter = LogPresenter::new(60);
        presenter.present(&snapshot(0));
        assert_eq!(presenter.last_score, Some((2, 1)));

        let mut next = snapshot(1);
        next.human_score = 3;
        presenter.present(&next);
        assert_eq!(presenter.last_score, Some((3, 1)));
    }
}
