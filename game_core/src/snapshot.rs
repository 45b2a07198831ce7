use serde::{Deserialize, Serialize};

/// Everything a presentation surface needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub human_paddle_y: f32,
    pub opponent_paddle_y: f32,
    pub human_score: u32,
    pub opponent_score: u32,
}

/// Sink for engine snapshots. Rendering is entirely up to the implementor.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Discards every snapshot
impl Presenter for () {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Records every snapshot in order
impl Presenter for Vec<Snapshot> {
    fn present(&mut self, snapshot: &Snapshot) {
        self.push(*snapshot);
    }
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn present(&mut self, snapshot: &Snapshot) {
        (**self).present(snapshot);
    }
}
