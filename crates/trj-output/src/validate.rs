//! Per-frame unique-id check on an encoded bundle.

use std::collections::HashSet;

use crate::record::unique_ids;
use crate::{OutputError, OutputResult, TrajectoryBuffer};

/// Fail if any frame of `buffer` carries the same unique id twice.
///
/// Reads the encoded records, so it checks exactly what would be written.
/// Does not modify `buffer`; repeated calls give the same answer.
pub fn check_unique_ids_per_frame(buffer: &TrajectoryBuffer) -> OutputResult<()> {
    let mut seen = HashSet::new();
    for frame in &buffer.spatial_data.bundle_data {
        seen.clear();
        for id in unique_ids(&frame.data)? {
            if !seen.insert(id) {
                return Err(OutputError::DuplicateUniqueId {
                    frame:     frame.frame_number,
                    unique_id: id,
                });
            }
        }
    }
    Ok(())
}
