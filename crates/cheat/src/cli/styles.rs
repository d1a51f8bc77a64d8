use console::{Style, Term};

/// Named styles for rendered output. With `use_color` false every style is plain.
pub struct Palette {
    pub heading: Style,
    pub section: Style,
    pub index: Style,
    pub matched: Style,
    pub marker: Style,
    pub dim: Style,
    pub code: Style,
    pub missing: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

impl Palette {
    pub fn new(use_color: bool) -> Self {
        let s = |style: Style| style.force_styling(use_color);
        Self {
            heading: s(Style::new().bold()),
            section: s(Style::new().bold().cyan()),
            index: s(Style::new().yellow()),
            matched: s(Style::new().bold().yellow()),
            marker: s(Style::new().magenta()),
            dim: s(Style::new().dim()),
            code: s(Style::new().color256(250)),
            missing: s(Style::new().red()),
            info: s(Style::new().dim()),
            success: s(Style::new().green()),
            warning: s(Style::new().yellow()),
            error: s(Style::new().red()),
        }
    }

    /// Colors when stdout supports them.
    pub fn detect() -> Self {
        Self::new(Term::stdout().features().colors_supported())
    }
}
