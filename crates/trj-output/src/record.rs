//! Flat per-agent records.
//!
//! Every live agent in a frame contributes
//!
//! ```text
//! viz_type, unique_id, type_index, x, y, z, rx, ry, rz, radius,
//! subpoint_count, subpoint_0 … subpoint_{count-1}
//! ```
//!
//! to that frame's `data` array, in slot order.  [`unpack_frame`] is the
//! exact inverse of [`encode_frame`].

use trj_agent::{AgentData, TypeMapping};
use trj_core::{TypeIndex, UniqueId, Vec3, VizType};

use crate::{OutputError, OutputResult};

/// Fixed fields preceding the subpoints of each record.
pub const HEADER_LEN: usize = 11;

/// Append the records of every live agent of `frame` to `out`.
pub fn encode_frame(
    data: &AgentData,
    mapping: &TypeMapping,
    frame: usize,
    out: &mut Vec<f64>,
) -> OutputResult<()> {
    for view in data.live(frame) {
        let type_index = mapping.index_of(view.type_name).ok_or_else(|| {
            OutputError::UnmappedType { frame, name: view.type_name.to_owned() }
        })?;
        out.reserve(HEADER_LEN + view.subpoints.len());
        out.extend_from_slice(&[
            view.viz_type.as_f64(),
            view.unique_id.as_f64(),
            type_index.as_f64(),
        ]);
        out.extend_from_slice(&view.position);
        out.extend_from_slice(&view.rotation);
        out.push(view.radius);
        out.push(view.subpoints.len() as f64);
        out.extend_from_slice(view.subpoints);
    }
    Ok(())
}

/// One agent recovered from a frame's flat data.
#[derive(Clone, Debug, PartialEq)]
pub struct UnpackedAgent {
    pub viz_type:   VizType,
    pub unique_id:  UniqueId,
    pub type_index: TypeIndex,
    pub position:   Vec3,
    pub rotation:   Vec3,
    pub radius:     f64,
    pub subpoints:  Vec<f64>,
}

/// Split a frame's `data` array back into agent records.
///
/// Fails on a truncated header, a negative or fractional count field, an id
/// field too large for its type, or a subpoint count running past the end of
/// the buffer.
pub fn unpack_frame(data: &[f64]) -> OutputResult<Vec<UnpackedAgent>> {
    let mut agents = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let header = data.get(offset..offset + HEADER_LEN).ok_or(OutputError::MalformedRecord {
            offset,
            reason: "truncated record header",
        })?;
        let count = as_count(header[10], offset, "subpoint count is not a non-negative integer")?;
        let start = offset + HEADER_LEN;
        let subpoints = start
            .checked_add(count)
            .and_then(|end| data.get(start..end))
            .ok_or(OutputError::MalformedRecord {
                offset,
                reason: "subpoint count runs past the end of the frame",
            })?;

        agents.push(UnpackedAgent {
            viz_type:   VizType(as_field(header[0], offset, "invalid viz type")?),
            unique_id:  UniqueId(as_field(header[1], offset, "invalid unique id")?),
            type_index: TypeIndex(as_field(header[2], offset, "invalid type index")?),
            position:   [header[3], header[4], header[5]],
            rotation:   [header[6], header[7], header[8]],
            radius:     header[9],
            subpoints:  subpoints.to_vec(),
        });
        offset = start + count;
    }
    Ok(agents)
}

/// Unique IDs of every record in a frame, without copying subpoints.
pub(crate) fn unique_ids(data: &[f64]) -> OutputResult<Vec<u64>> {
    let mut ids = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        let header = data.get(offset..offset + HEADER_LEN).ok_or(OutputError::MalformedRecord {
            offset,
            reason: "truncated record header",
        })?;
        ids.push(as_count(header[1], offset, "invalid unique id")? as u64);
        let count = as_count(header[10], offset, "subpoint count is not a non-negative integer")?;
        offset = match (offset + HEADER_LEN).checked_add(count) {
            Some(end) if end <= data.len() => end,
            _ => {
                return Err(OutputError::MalformedRecord {
                    offset,
                    reason: "subpoint count runs past the end of the frame",
                });
            }
        };
    }
    Ok(ids)
}

/// A whole, non-negative header value that fits `T`.
fn as_field<T: TryFrom<usize>>(value: f64, offset: usize, reason: &'static str) -> OutputResult<T> {
    T::try_from(as_count(value, offset, reason)?)
        .map_err(|_| OutputError::MalformedRecord { offset, reason })
}

fn as_count(value: f64, offset: usize, reason: &'static str) -> OutputResult<usize> {
    if value >= 0.0 && value.fract() == 0.0 && value < usize::MAX as f64 {
        Ok(value as usize)
    } else {
        Err(OutputError::MalformedRecord { offset, reason })
    }
}
