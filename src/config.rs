use crate::ranges::Span;

/// Immutable per-reset record the track consumes. Built fresh from the
/// current inputs every time the player hits start.
#[derive(Clone, Debug)]
pub struct Config {
    /// Second-denominated ranges, in input order.
    pub ranges: Vec<Span>,
    /// Seconds, applied uniformly to every range before note construction.
    pub offset: f32,
    /// Pixels per second, must be positive.
    pub scroll_speed: f32,
    /// true keeps the full track width, false reserves the trailing margin.
    pub gutter: bool,
}

pub struct Preset {
    pub name: &'static str,
    pub frames: &'static str,
}

pub const PRESETS: [Preset; 6] = [
    Preset { name: "Terrapins", frames: "4000-4003, 4254-4257, 4530-4533, 4708-4711" },
    Preset { name: "KG/GG", frames: "998-1001, 1651-1654, 2098-2101, 2470-2473, 2747-2750" },
    Preset { name: "Calamari", frames: "669-672, 1430-1433, 2277-2280, 2685-2688, 4012-4015, 4394-4397" },
    Preset { name: "Nimbus", frames: "2918-2921" },
    Preset { name: "Shocker (Yarid)", frames: "176-179" },
    Preset { name: "Shocker (Smithy)", frames: "163-166" },
];
