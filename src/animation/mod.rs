pub(crate) mod animator;
pub(crate) mod ease;
pub(crate) mod frame_loop;
