//! Build metadata captured at compile time by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));
