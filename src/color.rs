//! Colour schemes and symbol-to-style resolution.
//!
//! Residue letters are case-sensitive: lower-case residues (masked or
//! low-confidence regions) take the same hue as their upper-case form but
//! dimmed. Gap characters and unrecognized symbols get their own muted
//! attributes. The active scheme is an explicit value held by the viewer
//! and consulted at blit time — never a process-wide table.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Alphabet;

/// What the terminal can do, probed once at startup and passed down.
#[derive(Debug, Clone, Copy)]
pub struct TermCaps {
    /// Terminal supports colour at all
    pub supports_colour: bool,
    /// Terminal supports 24-bit colour, allowing the tuned palettes
    pub supports_rgb: bool,
}

impl TermCaps {
    /// Probes capabilities from the environment. `NO_COLOR` disables
    /// colour entirely; `COLORTERM=truecolor|24bit` enables the RGB
    /// palettes.
    pub fn detect() -> Self {
        let no_colour = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let rgb = std::env::var("COLORTERM")
            .map(|v| v == "truecolor" || v == "24bit")
            .unwrap_or(false);
        Self {
            supports_colour: !no_colour,
            supports_rgb: !no_colour && rgb,
        }
    }
}

/// The five selectable schemes, on keys 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Coloured residues on the terminal's dark background
    Dark,
    /// Dark text on coloured cells
    DarkInverse,
    /// Coloured residues for light backgrounds (startup default)
    Light,
    /// Light text on coloured cells
    LightInverse,
    /// No colour
    Mono,
}

impl Scheme {
    /// Maps a number key to a scheme.
    pub fn from_key(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Dark),
            2 => Some(Self::DarkInverse),
            3 => Some(Self::Light),
            4 => Some(Self::LightInverse),
            5 => Some(Self::Mono),
            _ => None,
        }
    }
}

/// Resolves symbols to display styles for one scheme and alphabet.
#[derive(Debug, Clone, Copy)]
pub struct ColourResolver {
    pub scheme: Scheme,
    pub alphabet: Alphabet,
    pub caps: TermCaps,
}

impl ColourResolver {
    pub fn new(scheme: Scheme, alphabet: Alphabet, caps: TermCaps) -> Self {
        Self {
            scheme,
            alphabet,
            caps,
        }
    }

    /// Resolves one symbol to its display style. Never fails; symbols
    /// outside the alphabet take the fallback attribute.
    pub fn resolve(&self, c: char) -> Style {
        if !self.caps.supports_colour || self.scheme == Scheme::Mono {
            return Style::default();
        }
        if c == '-' || c == '.' {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
        }
        let Some(hue) = self.residue_colour(c.to_ascii_uppercase()) else {
            return Style::default().fg(Color::DarkGray);
        };
        let style = match self.scheme {
            Scheme::Dark | Scheme::Light => Style::default().fg(hue),
            Scheme::DarkInverse => Style::default().fg(Color::Black).bg(hue),
            Scheme::LightInverse => Style::default().fg(Color::White).bg(hue),
            Scheme::Mono => unreachable!(),
        };
        if c.is_ascii_lowercase() {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    /// Base hue for a recognized upper-case residue, or None for symbols
    /// outside the alphabet.
    fn residue_colour(&self, c: char) -> Option<Color> {
        match self.alphabet {
            Alphabet::Nucleotide => self.nucleotide_colour(c),
            Alphabet::AminoAcid => self.amino_acid_colour(c),
        }
    }

    fn nucleotide_colour(&self, c: char) -> Option<Color> {
        if self.caps.supports_rgb {
            return match c {
                'A' => Some(Color::Rgb(204, 51, 44)),
                'C' => Some(Color::Rgb(42, 145, 53)),
                'G' => Some(Color::Rgb(196, 155, 23)),
                'T' | 'U' => Some(Color::Rgb(41, 84, 204)),
                'N' => Some(Color::Rgb(120, 120, 120)),
                _ => None,
            };
        }
        match c {
            'A' => Some(Color::Red),
            'C' => Some(Color::Green),
            'G' => Some(Color::Yellow),
            'T' | 'U' => Some(Color::Blue),
            'N' => Some(Color::Gray),
            _ => None,
        }
    }

    /// Physicochemical grouping: hydrophobic, polar, positive, negative.
    fn amino_acid_colour(&self, c: char) -> Option<Color> {
        if self.caps.supports_rgb {
            return match c {
                'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Some(Color::Rgb(176, 141, 23)),
                'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' | 'U' => Some(Color::Rgb(34, 139, 78)),
                'K' | 'R' | 'H' => Some(Color::Rgb(46, 92, 196)),
                'D' | 'E' => Some(Color::Rgb(199, 62, 29)),
                'X' | 'B' | 'Z' => Some(Color::Rgb(120, 120, 120)),
                _ => None,
            };
        }
        match c {
            'A' | 'V' | 'I' | 'L' | 'M' | 'F' | 'W' | 'P' => Some(Color::Yellow),
            'S' | 'T' | 'N' | 'Q' | 'C' | 'G' | 'Y' | 'U' => Some(Color::Green),
            'K' | 'R' | 'H' => Some(Color::Blue),
            'D' | 'E' => Some(Color::Red),
            'X' | 'B' | 'Z' => Some(Color::Gray),
            _ => None,
        }
    }

    /// Style for the id-label panel.
    pub fn id_style(&self) -> Style {
        if !self.caps.supports_colour || self.scheme == Scheme::Mono {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Black).bg(Color::White)
        }
    }

    /// Style for the ruler and density tracks.
    pub fn track_style(&self) -> Style {
        if !self.caps.supports_colour || self.scheme == Scheme::Mono {
            Style::default()
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// Style for the status bar.
    pub fn status_style(&self) -> Style {
        if !self.caps.supports_colour || self.scheme == Scheme::Mono {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOUR_CAPS: TermCaps = TermCaps {
        supports_colour: true,
        supports_rgb: false,
    };

    #[test]
    fn test_nucleotide_colours() {
        let r = ColourResolver::new(Scheme::Dark, Alphabet::Nucleotide, COLOUR_CAPS);
        assert_eq!(r.resolve('A').fg, Some(Color::Red));
        assert_eq!(r.resolve('C').fg, Some(Color::Green));
        assert_eq!(r.resolve('G').fg, Some(Color::Yellow));
        assert_eq!(r.resolve('T').fg, Some(Color::Blue));
        assert_eq!(r.resolve('U').fg, Some(Color::Blue));
    }

    #[test]
    fn test_lowercase_is_dimmed_same_hue() {
        let r = ColourResolver::new(Scheme::Dark, Alphabet::Nucleotide, COLOUR_CAPS);
        let upper = r.resolve('A');
        let lower = r.resolve('a');
        assert_eq!(upper.fg, lower.fg);
        assert!(lower.add_modifier.contains(Modifier::DIM));
        assert!(!upper.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_unrecognized_symbol_fallback() {
        let r = ColourResolver::new(Scheme::Dark, Alphabet::Nucleotide, COLOUR_CAPS);
        assert_eq!(r.resolve('?').fg, Some(Color::DarkGray));
        assert_eq!(r.resolve('J').fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_gap_attribute() {
        let r = ColourResolver::new(Scheme::DarkInverse, Alphabet::AminoAcid, COLOUR_CAPS);
        let gap = r.resolve('.');
        assert_eq!(gap.fg, Some(Color::DarkGray));
        assert_eq!(gap.bg, None);
    }

    #[test]
    fn test_inverse_scheme_sets_background() {
        let r = ColourResolver::new(Scheme::DarkInverse, Alphabet::AminoAcid, COLOUR_CAPS);
        let s = r.resolve('K');
        assert_eq!(s.fg, Some(Color::Black));
        assert_eq!(s.bg, Some(Color::Blue));
    }

    #[test]
    fn test_mono_and_no_colour_are_plain() {
        let mono = ColourResolver::new(Scheme::Mono, Alphabet::AminoAcid, COLOUR_CAPS);
        assert_eq!(mono.resolve('K'), Style::default());
        let no_colour = ColourResolver::new(
            Scheme::Dark,
            Alphabet::AminoAcid,
            TermCaps {
                supports_colour: false,
                supports_rgb: false,
            },
        );
        assert_eq!(no_colour.resolve('K'), Style::default());
    }

    #[test]
    fn test_scheme_from_key() {
        assert_eq!(Scheme::from_key(1), Some(Scheme::Dark));
        assert_eq!(Scheme::from_key(3), Some(Scheme::Light));
        assert_eq!(Scheme::from_key(5), Some(Scheme::Mono));
        assert_eq!(Scheme::from_key(6), None);
        assert_eq!(Scheme::from_key(0), None);
    }
}
