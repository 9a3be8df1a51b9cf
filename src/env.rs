use std::env;

/// User signals read once from the process environment at startup.
///
/// Construct with [`Environment::detect`] at the application root and
/// pass the value down; nothing in this crate re-reads the environment
/// after that.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Locale tags in priority order, e.g. `["de_CH.UTF-8"]`.
    pub locales: Vec<String>,
    /// Whether the surroundings hint at a dark color scheme.
    pub prefers_dark: bool,
}

impl Environment {
    /// Probe the environment. `LANGUAGE` carries a colon-separated
    /// priority list; the `LC_*`/`LANG` variables a single tag.
    pub fn detect() -> Self {
        let mut locales = Vec::new();
        if let Ok(list) = env::var("LANGUAGE") {
            locales.extend(
                list.split(':')
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string),
            );
        }
        for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(tag) = env::var(key) {
                if !tag.is_empty() {
                    locales.push(tag);
                }
            }
        }

        Self {
            locales,
            prefers_dark: prefers_dark_from(env::var("COLORFGBG").ok().as_deref()),
        }
    }
}

/// Primary language subtag of a locale tag: `de_CH.UTF-8` -> `de`.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split(['_', '-', '.', '@']).next().unwrap_or(tag)
}

// COLORFGBG is "<fg>;<bg>"; background colors 0-6 and 8 mean a dark
// palette.
fn prefers_dark_from(colorfgbg: Option<&str>) -> bool {
    match colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
    {
        Some(bg) => bg <= 6 || bg == 8,
        None => false,
    }
}
