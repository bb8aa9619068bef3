//! bitblick – human-readable binary rendering of numeric literals.
//!
//! Wandelt dezimale, oktale, binaere und hexadezimale Literale in
//! ausgerichtete Bit-Zeilen um: optional gruppiert, nummeriert und mit
//! hervorgehobenen Laeufen gesetzter oder geloeschter Bits.
//!
//! # Beispiel
//!
//! ```
//! use bitblick::{render, GroupSpec, RenderOptions};
//!
//! let opts = RenderOptions::default()
//!     .with_width(Some(8))
//!     .with_group(GroupSpec::uniform(4));
//!
//! let lines = render(&opts, &["42"]).unwrap();
//! assert_eq!(lines, ["0010 1010"]);
//! ```

pub mod error;
pub mod group;
pub mod highlight;
pub mod literal;
pub mod options;
pub mod render;
pub mod ruler;
pub mod width;

pub use error::{Error, Result};

// Public API: Werte und Konfiguration
pub use group::{Field, GroupSpec};
pub use literal::{parse_literal, ParsedValue};
pub use options::RenderOptions;

// Public API: Rendering
pub use highlight::{highlight_runs, Emphasis, CLEAR_BITS, SET_BITS};
pub use render::render;
pub use ruler::ruler_lines;
pub use width::{resolve_width, WIDTH_LADDER};
