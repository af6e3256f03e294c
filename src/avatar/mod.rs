//! The avatar animation interpreter: a frame-stepped virtual machine that
//! drives skeletal-rig channels to spell words letter by letter, or to play
//! whole-word gestures when the library has one.

pub mod animator;
