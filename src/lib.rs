//! # alnview - Terminal MSA Viewer
//!
//! A terminal-based viewer for multiple sequence alignments using ratatui.
//!
//! ## Architecture
//!
//! The viewer renders all alignment content into off-screen surfaces once
//! at startup; navigation and resize only change which window of those
//! surfaces is blitted to the screen.
//!
//! - `model`: sequences, the alignment, alphabet detection
//! - `fasta`: FASTA parsing and rectangularity validation
//! - `gaps`: gap-run re-segmentation for display
//! - `tracks`: per-column gap-density heatmap and position ruler
//! - `surface`: off-screen character surfaces
//! - `layout`: panel geometry for the current terminal size
//! - `color`: colour schemes and symbol-to-style resolution
//! - `viewer`: scroll state and navigation operations
//! - `event`: key decoding and dispatch
//! - `ui`: the render pass
//! - `controller`: terminal lifecycle and event loop

pub mod color;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod gaps;
pub mod layout;
pub mod model;
pub mod surface;
pub mod tracks;
pub mod ui;
pub mod viewer;
