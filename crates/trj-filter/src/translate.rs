//! `TranslateFilter` — shift agents of selected types.

use std::collections::{BTreeMap, HashMap};

use trj_agent::TrajectoryData;
use trj_core::{TypeIndex, Vec3, vec3};

use crate::{Filter, FilterError, FilterResult};

const NAME: &str = "TranslateFilter";

/// Adds a fixed offset to every live agent of the configured types, in every
/// frame.
///
/// Keys are resolved against the trajectory's own type mapping (the same
/// first-seen order the encoder uses).  When several keys match an agent,
/// the most specific wins: type name, then type index, then the default.
///
/// Fiber agents have every subpoint vertex shifted as well as their
/// position.
#[derive(Clone, Debug, Default)]
pub struct TranslateFilter {
    per_type_index: BTreeMap<TypeIndex, Vec3>,
    per_type_name:  BTreeMap<String, Vec3>,
    default:        Option<Vec3>,
}

impl TranslateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate every agent by `offset`.
    pub fn all(offset: Vec3) -> Self {
        Self::new().with_default(offset)
    }

    pub fn with_type_index(mut self, index: u32, offset: Vec3) -> Self {
        self.per_type_index.insert(TypeIndex(index), offset);
        self
    }

    pub fn with_type_name(mut self, name: impl Into<String>, offset: Vec3) -> Self {
        self.per_type_name.insert(name.into(), offset);
        self
    }

    pub fn with_default(mut self, offset: Vec3) -> Self {
        self.default = Some(offset);
        self
    }

    /// Offset per type name, after checking every key exists.
    fn resolve(&self, data: &TrajectoryData) -> FilterResult<HashMap<String, Vec3>> {
        let mapping = data.type_mapping()?;
        let mut offsets = HashMap::new();

        if let Some(default) = self.default {
            for (_, name) in mapping.iter() {
                offsets.insert(name.to_owned(), default);
            }
        }
        for (&index, &offset) in &self.per_type_index {
            let name = mapping
                .name(index)
                .ok_or(FilterError::UnknownTypeIndex { filter: NAME, index })?;
            offsets.insert(name.to_owned(), offset);
        }
        for (name, &offset) in &self.per_type_name {
            if mapping.index_of(name).is_none() {
                return Err(FilterError::UnknownTypeName { filter: NAME, name: name.clone() });
            }
            offsets.insert(name.clone(), offset);
        }
        Ok(offsets)
    }
}

impl Filter for TranslateFilter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, data: &TrajectoryData) -> FilterResult<TrajectoryData> {
        data.agent_data.validate()?;
        let offsets = self.resolve(data)?;
        let mut agents = data.agent_data.clone();
        let mut moved = 0usize;

        for frame in 0..agents.total_steps() {
            for slot in 0..agents.n_agents[frame] {
                let Some(&offset) = offsets.get(&agents.types[frame][slot]) else {
                    continue;
                };
                let position = agents.positions.get(frame, slot);
                agents.positions.set(frame, slot, vec3::add(position, offset));

                if agents.viz_types.get(frame, slot).is_fiber() {
                    let count = agents.n_subpoints.get(frame, slot);
                    if count % 3 != 0 {
                        return Err(FilterError::RaggedFiber {
                            filter: NAME,
                            frame,
                            unique_id: agents.unique_ids.get(frame, slot),
                            count,
                        });
                    }
                    let slot_values = &mut agents.subpoints.slot_mut(frame, slot)[..count];
                    for vertex in slot_values.chunks_exact_mut(3) {
                        vertex[0] += offset[0];
                        vertex[1] += offset[1];
                        vertex[2] += offset[2];
                    }
                }
                moved += 1;
            }
        }

        tracing::debug!(filter = NAME, moved, "translated agents");
        Ok(data.with_agent_data(agents))
    }
}
