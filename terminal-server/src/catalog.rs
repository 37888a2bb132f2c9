//! Destination catalog for the terminal's departure board.
//!
//! GDS location identifiers are opaque numeric codes from the provider's
//! own catalog. The board always runs from the Santiago terminal to the
//! fixed set of served destinations below; the aggregator consumes only
//! the ids, the display names are for the dashboard.

use serde::Serialize;

/// GDS location id of the terminal this dashboard serves (Santiago).
pub const ORIGIN_ID: u32 = 1646;

/// A served destination in the GDS location catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
}

/// Every destination the board covers, in board order.
///
/// The origin itself appears here (the dashboard lists it); the
/// aggregator skips it when fanning out.
pub const DESTINATIONS: &[Destination] = &[
    Destination { id: 2070, name: "Viña del Mar" },
    Destination { id: 2058, name: "Valparaíso" },
    Destination { id: 1760, name: "El Tabo" },
    Destination { id: 1757, name: "El Quisco" },
    Destination { id: 1652, name: "Algarrobo" },
    Destination { id: 2007, name: "San Antonio" },
    Destination { id: 1643, name: "Quillota" },
    Destination { id: 1641, name: "Limache" },
    Destination { id: 2063, name: "Villa Alemana" },
    Destination { id: 1981, name: "Quilpué" },
    Destination { id: 2013, name: "San Felipe" },
    Destination { id: 1856, name: "Los Andes" },
    Destination { id: 1688, name: "Cartagena" },
    Destination { id: 1725, name: "Concón" },
    Destination { id: 1904, name: "Olmué" },
    Destination { id: 1986, name: "Rancagua" },
    Destination { id: 1646, name: "Santiago" },
    Destination { id: 1642, name: "Llay Llay" },
];

/// The destination ids in board order.
pub fn destination_ids() -> Vec<u32> {
    DESTINATIONS.iter().map(|d| d.id).collect()
}

/// Look up the display name for a GDS location id.
pub fn name_of(id: u32) -> Option<&'static str> {
    DESTINATIONS.iter().find(|d| d.id == id).map(|d| d.name)
}
