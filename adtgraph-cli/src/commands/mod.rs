pub mod common;
pub mod cycles;
pub mod dot;
pub mod info;
pub mod topo;
pub mod traverse;
