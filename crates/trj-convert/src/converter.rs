//! `TrajectoryConverter` — owns one built trajectory, runs filter pipelines
//! over it, and hands results to an output backend.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use trj_agent::TrajectoryData;
use trj_filter::Filter;
use trj_output::{JsonWriter, OutputWriter};

use crate::{ConvertError, ConvertResult, TrajectorySource};

/// The unfiltered trajectory plus everything you can do with it.
///
/// The stored data never changes after construction; every filter pipeline
/// starts from it again.
#[derive(Clone, Debug)]
pub struct TrajectoryConverter {
    data: TrajectoryData,
}

impl TrajectoryConverter {
    /// Wrap already-built data, checking its structural invariants.
    pub fn new(data: TrajectoryData) -> ConvertResult<Self> {
        data.agent_data.validate()?;
        Ok(Self { data })
    }

    /// Build the trajectory from `source`.
    pub fn from_source<S: TrajectorySource + ?Sized>(source: &S) -> ConvertResult<Self> {
        let data = source.produce()?;
        info!(
            source = source.name(),
            frames = data.agent_data.total_steps(),
            agents = data.agent_data.total_agents(),
            "trajectory converted"
        );
        Self::new(data)
    }

    /// The unfiltered trajectory.
    pub fn data(&self) -> &TrajectoryData {
        &self.data
    }

    pub fn into_data(self) -> TrajectoryData {
        self.data
    }

    /// Run `filters` in order over a copy of the stored data.
    ///
    /// The first failing filter aborts the pipeline; its position and name
    /// are carried in [`ConvertError::Filter`].
    pub fn filter_data(&self, filters: &[&dyn Filter]) -> ConvertResult<TrajectoryData> {
        let mut current = self.data.clone();
        for (index, filter) in filters.iter().enumerate() {
            debug!(index, filter = filter.name(), "applying filter");
            current = filter.apply(&current).map_err(|source| ConvertError::Filter {
                index,
                name: filter.name(),
                source,
            })?;
        }
        Ok(current)
    }

    /// Encode the unfiltered data into `writer`.
    pub fn write<W: OutputWriter + ?Sized>(&self, writer: &mut W) -> ConvertResult<()> {
        writer.write_trajectory(&self.data)?;
        Ok(())
    }

    /// Filter, then encode the result into `writer`.
    pub fn write_filtered<W: OutputWriter + ?Sized>(
        &self,
        filters: &[&dyn Filter],
        writer: &mut W,
    ) -> ConvertResult<()> {
        let filtered = self.filter_data(filters)?;
        writer.write_trajectory(&filtered)?;
        Ok(())
    }

    /// Write the unfiltered data to `<path>.simularium`.
    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        let mut writer = JsonWriter::create(path)?;
        self.write(&mut writer)?;
        writer.finish()?;
        Ok(())
    }
}

/// Convert each source and save it to its paired path.
///
/// Jobs are independent; with the `parallel` feature they run on the rayon
/// pool.  Returns the first error encountered.
pub fn convert_many<S: TrajectorySource + Sync>(jobs: &[(S, PathBuf)]) -> ConvertResult<()> {
    let run = |(source, path): &(S, PathBuf)| {
        TrajectoryConverter::from_source(source)?.save(path)
    };

    #[cfg(not(feature = "parallel"))]
    {
        jobs.iter().try_for_each(run)
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        jobs.par_iter().try_for_each(run)
    }
}
