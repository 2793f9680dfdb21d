mod helpers;

mod determinism;
mod multiplex_equivalence;
mod video_system;
