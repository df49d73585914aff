//! Compile-time build information, printed by the simulator banner.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
