use std::collections::HashMap;

use bevy::prelude::*;
use thiserror::Error;

/// Faults after the first are only logged once per this many repeats.
const REPEAT_LOG_INTERVAL: u32 = 600;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameFault {
    #[error("primary window is missing")]
    MissingWindow,
    #[error("scene camera is missing")]
    MissingCamera,
    #[error("featured index {index} is outside {count} records")]
    FeaturedOutOfRange { index: usize, count: usize },
    #[error("info card nodes are missing")]
    MissingCardNodes,
}

impl FrameFault {
    fn kind(&self) -> &'static str {
        match self {
            Self::MissingWindow => "missing_window",
            Self::MissingCamera => "missing_camera",
            Self::FeaturedOutOfRange { .. } => "featured_out_of_range",
            Self::MissingCardNodes => "missing_card_nodes",
        }
    }
}

/// How a fault occurrence should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaultReport {
    First,
    Repeated(u32),
    Quiet,
}

/// Occurrence counts per fault kind.
#[derive(Default)]
pub struct FaultCounts(HashMap<&'static str, u32>);

impl FaultCounts {
    fn note(&mut self, fault: &FrameFault) -> FaultReport {
        let count = self.0.entry(fault.kind()).or_default();
        *count += 1;
        if *count == 1 {
            FaultReport::First
        } else if *count % REPEAT_LOG_INTERVAL == 0 {
            FaultReport::Repeated(*count)
        } else {
            FaultReport::Quiet
        }
    }
}

/// Log a frame system's fault and let the next frame run.
pub fn contain_frame_fault(In(result): In<Result<(), FrameFault>>, mut counts: Local<FaultCounts>) {
    let Err(fault) = result else {
        return;
    };

    match counts.note(&fault) {
        FaultReport::First => error!("Frame fault: {fault}"),
        FaultReport::Repeated(count) => warn!("Frame fault repeated {count} times: {fault}"),
        FaultReport::Quiet => {}
    }
}
