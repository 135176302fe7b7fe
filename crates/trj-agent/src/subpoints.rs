//! Per-frame padded subpoint storage.
//!
//! Each frame owns one dense block of `max_agents × width(frame)` values,
//! where `width(frame)` is the largest subpoint count of any agent in that
//! frame.  A frame of point-like agents therefore costs nothing, and one
//! long fiber in frame 0 does not widen every later frame.

/// Variable-length numeric payload for every agent slot.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubpointTable {
    max_agents: usize,
    widths:     Vec<usize>,
    offsets:    Vec<usize>,
    values:     Vec<f64>,
}

impl SubpointTable {
    /// A table of `total_steps` frames, all of width zero.
    pub fn new(total_steps: usize, max_agents: usize) -> Self {
        Self::with_widths(max_agents, &vec![0; total_steps])
    }

    /// Allocate zero-filled blocks with the given per-frame widths.
    pub fn with_widths(max_agents: usize, widths: &[usize]) -> Self {
        let mut offsets = Vec::with_capacity(widths.len());
        let mut total = 0;
        for &w in widths {
            offsets.push(total);
            total += w * max_agents;
        }
        Self {
            max_agents,
            widths: widths.to_vec(),
            offsets,
            values: vec![0.0; total],
        }
    }

    #[inline]
    pub fn total_steps(&self) -> usize {
        self.widths.len()
    }

    /// Padded subpoint width of `frame`.
    #[inline]
    pub fn width(&self, frame: usize) -> usize {
        self.widths[frame]
    }

    /// Per-frame widths, one per frame.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Largest width over all frames.
    pub fn max_width(&self) -> usize {
        self.widths.iter().copied().max().unwrap_or(0)
    }

    /// The full padded slot of one agent (length `width(frame)`).
    #[inline]
    pub fn slot(&self, frame: usize, agent: usize) -> &[f64] {
        let w = self.widths[frame];
        let start = self.offsets[frame] + agent * w;
        &self.values[start..start + w]
    }

    #[inline]
    pub fn slot_mut(&mut self, frame: usize, agent: usize) -> &mut [f64] {
        let w = self.widths[frame];
        let start = self.offsets[frame] + agent * w;
        &mut self.values[start..start + w]
    }

    /// The whole padded block of `frame`, agent-major.
    pub fn frame(&self, frame: usize) -> &[f64] {
        let start = self.offsets[frame];
        &self.values[start..start + self.widths[frame] * self.max_agents]
    }
}
