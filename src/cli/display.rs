// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for the carta CLI.
//!
//! Colors are picked by role (dish name, score tier, muted detail...) from a
//! OneDark or One Light palette. `CARTA_THEME` wins if set, then the
//! background slot of `COLORFGBG`, then dark. Nothing is colored under
//! `NO_COLOR` or when stdout is not a TTY, so piping into `grep` stays clean.
//!
//! Panels are rendered into a `String` and printed by the caller.

use carta::{Attributes, FieldKind};

/// Width between │ and │.
pub const PANEL_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Dark,
    Light,
}

impl Background {
    pub fn detect() -> Self {
        let explicit = std::env::var("CARTA_THEME").ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::from_env(explicit.as_deref(), colorfgbg.as_deref())
    }

    fn from_env(explicit: Option<&str>, colorfgbg: Option<&str>) -> Self {
        match explicit.map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Background::Light,
            Some("dark" | "d") => return Background::Dark,
            _ => {}
        }

        // "fg;bg": slot 7 and up is a light background, except 8 (dark gray)
        let slot = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.parse::<u8>().ok());
        match slot {
            Some(n) if n >= 7 && n != 8 => Background::Light,
            _ => Background::Dark,
        }
    }
}

/// What a piece of text is, not what color it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Dish,
    Query,
    Strong,
    Good,
    Fair,
    Muted,
    Alert,
}

impl Role {
    fn rgb(self, background: Background) -> (u8, u8, u8) {
        match background {
            // OneDark
            Background::Dark => match self {
                Role::Heading => (86, 182, 194),
                Role::Dish => (97, 175, 239),
                Role::Query => (229, 192, 123),
                Role::Strong => (166, 226, 46),
                Role::Good => (152, 195, 121),
                Role::Fair => (229, 192, 123),
                Role::Muted => (92, 99, 112),
                Role::Alert => (224, 108, 117),
            },
            // One Light
            Background::Light => match self {
                Role::Heading => (1, 132, 188),
                Role::Dish => (64, 120, 242),
                Role::Query => (193, 132, 1),
                Role::Strong => (68, 140, 39),
                Role::Good => (80, 161, 79),
                Role::Fair => (193, 132, 1),
                Role::Muted => (160, 161, 167),
                Role::Alert => (228, 86, 73),
            },
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, Role::Heading | Role::Dish | Role::Query | Role::Alert)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTER
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
    background: Background,
}

impl Painter {
    /// Colors only on a TTY, and never under `NO_COLOR`.
    pub fn for_stdout() -> Self {
        if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
            return Painter::plain();
        }
        Painter {
            enabled: true,
            background: Background::detect(),
        }
    }

    pub fn plain() -> Self {
        Painter {
            enabled: false,
            background: Background::Dark,
        }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let (r, g, b) = role.rgb(self.background);
        let weight = if role.is_bold() { BOLD } else { "" };
        format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
    }

    /// "Why this matched", colored by how strong the field is.
    pub fn field(&self, field: FieldKind) -> String {
        let role = match field {
            FieldKind::Primary => Role::Strong,
            FieldKind::Secondary => Role::Good,
            FieldKind::NameWord => Role::Fair,
            FieldKind::BodyWord => Role::Muted,
        };
        self.paint(role, field.as_str())
    }

    /// Exact primary matches land around 1.2 and up.
    pub fn score(&self, score: f64) -> String {
        let role = if score >= 1.2 {
            Role::Strong
        } else if score >= 0.6 {
            Role::Good
        } else if score >= 0.3 {
            Role::Fair
        } else {
            Role::Muted
        };
        self.paint(role, &format!("{:>6.3}", score))
    }

    pub fn micros(&self, micros: f64) -> String {
        let role = match micros {
            m if m < 1_000.0 => Role::Good,
            m if m < 10_000.0 => Role::Fair,
            _ => Role::Alert,
        };
        self.paint(role, &format!("{:.1} µs", micros))
    }

    /// Short dietary badges, e.g. `[veg] [gf]`.
    pub fn badges(&self, attributes: &Attributes) -> String {
        let flags = [
            (attributes.vegan, "vegan"),
            (attributes.vegetarian && !attributes.vegan, "veg"),
            (attributes.gluten_free, "gf"),
            (attributes.contains_pork, "pork"),
            (attributes.contains_dairy, "dairy"),
            (attributes.contains_nuts, "nuts"),
            (attributes.contains_seafood, "seafood"),
            (attributes.spicy, "spicy"),
        ];
        flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| self.paint(Role::Muted, &format!("[{}]", name)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TEXT WIDTH
// ═══════════════════════════════════════════════════════════════════════════

/// Width on screen: chars outside `ESC ... m` sequences.
pub fn visible_width(s: &str) -> usize {
    s.split('\x1b')
        .enumerate()
        .map(|(i, chunk)| match i {
            0 => chunk.chars().count(),
            _ => chunk.split_once('m').map_or(0, |(_, rest)| rest.chars().count()),
        })
        .sum()
}

pub fn pad_to(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(missing))
}

/// Cut plain text to `max` chars, ending in "…" when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// PANELS
// ═══════════════════════════════════════════════════════════════════════════

/// A boxed block of titled sections.
///
/// ```text
/// ┌─ SEARCH ─────────┐
/// │ query  paela     │
/// ├─ RESULTS ────────┤
/// │  1. Paella       │
/// └──────────────────┘
/// ```
pub struct Panel<'a> {
    painter: &'a Painter,
    lines: Vec<String>,
}

impl<'a> Panel<'a> {
    pub fn new(painter: &'a Painter, title: &str) -> Self {
        let mut panel = Panel {
            painter,
            lines: Vec::new(),
        };
        panel.rule('┌', '┐', title);
        panel
    }

    pub fn line(&mut self, content: &str) -> &mut Self {
        let edge = self.painter.paint(Role::Muted, "│");
        let body = pad_to(content, PANEL_WIDTH);
        self.lines.push(format!("{}{}{}", edge, body, edge));
        self
    }

    pub fn section(&mut self, title: &str) -> &mut Self {
        self.rule('├', '┤', title);
        self
    }

    pub fn finish(mut self) -> String {
        let bottom = format!("└{}┘", "─".repeat(PANEL_WIDTH));
        self.lines.push(self.painter.paint(Role::Muted, &bottom));
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn rule(&mut self, left: char, right: char, title: &str) {
        let label = format!(" {} ", self.painter.paint(Role::Heading, title));
        let fill = PANEL_WIDTH.saturating_sub(visible_width(&label) + 1);
        self.lines.push(format!(
            "{}{}{}",
            self.painter.paint(Role::Muted, &format!("{}─", left)),
            label,
            self.painter.paint(Role::Muted, &format!("{}{}", "─".repeat(fill), right)),
        ));
    }
}
