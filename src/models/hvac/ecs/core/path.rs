use crate::support::psychro::{AirState, Incidence, ProcessPath};

use super::{Solution, Stage};

/// Chart nodes: turbine exit plus one per stage.
pub const NODES: usize = 5;

/// Chart processes: mixing box, heating coil, humidifier, thermal zone.
pub const PROCESSES: usize = 4;

/// Node labels in path order.
pub const NODE_LABELS: [&str; NODES] = ["turbine", "MX", "HC", "VH", "TZ"];

/// Process connectivity of the ECS loop.
///
/// The mixing box draws from both the turbine exit and the recirculated
/// zone air, so its row has two inlets.
pub const INCIDENCE: Incidence<PROCESSES, NODES> = Incidence::new([
    [-1, 1, 0, 0, -1], // MX
    [0, -1, 1, 0, 0],  // HC
    [0, 0, -1, 1, 0],  // VH
    [0, 0, 0, -1, 1],  // TZ
]);

pub(super) fn process_path(turbine: AirState, solution: &Solution) -> ProcessPath<NODES> {
    let [mixing, heating, humidifying, zone] = Stage::ALL.map(|stage| solution.state(stage));
    ProcessPath::new([turbine, mixing, heating, humidifying, zone])
}
