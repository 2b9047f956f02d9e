use batchgen_core::{AppViewModel, ColorScheme, ResultRowView, ThemePreference, Visibility};

/// ANSI styling for the text view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    heading: &'static str,
    error: &'static str,
    muted: &'static str,
    reset: &'static str,
}

impl Palette {
    pub(crate) fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                heading: "\x1b[1;34m",
                error: "\x1b[31m",
                muted: "\x1b[90m",
                reset: "\x1b[0m",
            },
            ColorScheme::Dark => Self {
                heading: "\x1b[1;96m",
                error: "\x1b[91m",
                muted: "\x1b[37m",
                reset: "\x1b[0m",
            },
        }
    }

    pub(crate) fn plain() -> Self {
        Self {
            heading: "",
            error: "",
            muted: "",
            reset: "",
        }
    }
}

pub(crate) fn render(view: &AppViewModel, palette: Palette) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{}== batchgen =={} theme: {} | lines: {} | submit: {}",
        palette.heading,
        palette.reset,
        theme_label(view.theme, view.color_scheme),
        view.batch_line_count,
        if view.submit_enabled { "ready" } else { "busy" }
    ));

    if view.loading {
        lines.push(format!("{}[loading]{}", palette.muted, palette.reset));
    }
    if let Some(notice) = &view.notice {
        lines.push(format!("{}{}{}", palette.error, notice, palette.reset));
    }
    if let Some(error) = &view.error {
        lines.push(format!("{}Error: {}{}", palette.error, error, palette.reset));
    }
    if let Some(placeholder) = view.placeholder {
        lines.push(format!("{}{}{}", palette.muted, placeholder, palette.reset));
    }

    for row in &view.items {
        render_row(&mut lines, row, palette);
    }

    if !view.items.is_empty() || view.placeholder.is_some() {
        lines.push(format!(
            "{}[toggle-all: {}]{}",
            palette.muted,
            if view.toggle_all_enabled {
                "enabled"
            } else {
                "disabled"
            },
            palette.reset
        ));
    }

    lines
}

fn render_row(lines: &mut Vec<String>, row: &ResultRowView, palette: Palette) {
    lines.push(format!(
        "{}[{}] {}{} ({})",
        palette.heading,
        row.index + 1,
        row.input,
        palette.reset,
        row.toggle_label
    ));
    match row.visibility {
        Visibility::Visible => {
            lines.extend(row.output.lines().map(|line| format!("    {line}")));
        }
        Visibility::Hidden => {
            lines.push(format!("    {}…{}", palette.muted, palette.reset));
        }
    }
}

fn theme_label(theme: ThemePreference, scheme: ColorScheme) -> String {
    let scheme = match scheme {
        ColorScheme::Light => "light",
        ColorScheme::Dark => "dark",
    };
    match theme {
        ThemePreference::System => format!("system ({scheme})"),
        other => other.as_str().to_string(),
    }
}
