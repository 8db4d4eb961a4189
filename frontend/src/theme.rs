use std::str::FromStr;

/// Visual skin of the sign-in screen. Behaviour is identical across themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTheme {
    #[default]
    Aurora,
    Circuit,
    Minimal,
}

/// Tailwind class bundles used by the sign-in components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub card: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub input: &'static str,
    pub help: &'static str,
    pub role_active: &'static str,
    pub role_idle: &'static str,
    pub submit: &'static str,
    pub link: &'static str,
    pub footer: &'static str,
}

static AURORA: Palette = Palette {
    page: "min-h-screen relative overflow-hidden bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900 flex items-center justify-center p-4",
    card: "backdrop-blur-xl bg-white/10 rounded-2xl shadow-2xl border border-white/20 p-8 relative overflow-hidden",
    title: "text-3xl font-bold mb-2 bg-gradient-to-r from-white to-blue-200 bg-clip-text text-transparent",
    subtitle: "text-blue-200/80 text-lg font-medium",
    label: "block text-sm font-medium text-white/90 mb-2",
    input: "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-xl focus:ring-2 focus:ring-blue-400 focus:border-transparent text-white placeholder-white/50 backdrop-blur-sm transition-all duration-300",
    help: "text-xs text-blue-300/80 mt-2 flex items-center space-x-1",
    role_active: "bg-gradient-to-r from-blue-500 to-purple-600 text-white shadow-lg transform scale-105",
    role_idle: "text-white/70 hover:text-white hover:bg-white/10",
    submit: "w-full bg-gradient-to-r from-blue-500 to-purple-600 text-white py-3 rounded-xl font-medium hover:from-blue-600 hover:to-purple-700 disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300",
    link: "text-blue-300 hover:text-white font-medium transition-colors duration-300",
    footer: "text-white/60 text-sm",
};

static CIRCUIT: Palette = Palette {
    page: "min-h-screen relative overflow-hidden bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900 flex items-center justify-center p-4",
    card: "backdrop-blur-xl bg-white/10 rounded-3xl shadow-2xl border border-white/20 p-8 relative overflow-hidden group hover:bg-white/15 transition-all duration-500",
    title: "text-4xl font-bold mb-2 bg-gradient-to-r from-white via-blue-200 to-purple-200 bg-clip-text text-transparent animate-gradient-x",
    subtitle: "text-blue-200/90 text-lg font-medium mb-4",
    label: "block text-sm font-medium text-white/90 mb-2 flex items-center space-x-2",
    input: "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-2xl focus:ring-2 focus:ring-cyan-400 focus:border-transparent text-white placeholder-white/50 backdrop-blur-sm transition-all duration-500",
    help: "text-xs text-cyan-300/80 mt-2 flex items-center space-x-1",
    role_active: "bg-gradient-to-r from-blue-500 to-purple-600 text-white shadow-lg transform scale-105 shadow-blue-500/25",
    role_idle: "text-white/70 hover:text-white hover:bg-white/10 hover:scale-105",
    submit: "w-full bg-gradient-to-r from-blue-500 via-purple-600 to-pink-500 text-white py-3 rounded-2xl font-medium disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-500",
    link: "text-cyan-300 hover:text-white font-medium transition-colors duration-300",
    footer: "text-white/60 text-sm",
};

static MINIMAL: Palette = Palette {
    page: "min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8",
    card: "bg-white rounded-md shadow p-8",
    title: "text-3xl font-extrabold text-gray-900 mb-2",
    subtitle: "text-sm text-gray-600",
    label: "block text-sm font-medium text-gray-700 mb-1",
    input: "appearance-none rounded-md block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm",
    help: "text-xs text-gray-500 mt-1",
    role_active: "bg-blue-600 text-white",
    role_idle: "text-gray-600 hover:bg-gray-100",
    submit: "w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50",
    link: "text-blue-600 hover:text-blue-800 font-medium",
    footer: "text-gray-400 text-sm",
};

impl AuthTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTheme::Aurora => "aurora",
            AuthTheme::Circuit => "circuit",
            AuthTheme::Minimal => "minimal",
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            AuthTheme::Aurora => &AURORA,
            AuthTheme::Circuit => &CIRCUIT,
            AuthTheme::Minimal => &MINIMAL,
        }
    }

    pub fn is_animated(&self) -> bool {
        !matches!(self, AuthTheme::Minimal)
    }

    /// Unknown names fall back to the default theme.
    pub fn from_config(raw: Option<&str>) -> Self {
        match raw {
            None => Self::default(),
            Some(name) => name.parse().unwrap_or_else(|err: String| {
                log::warn!("{}; using {}", err, Self::default().as_str());
                Self::default()
            }),
        }
    }
}

impl FromStr for AuthTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aurora" => Ok(AuthTheme::Aurora),
            "circuit" => Ok(AuthTheme::Circuit),
            "minimal" => Ok(AuthTheme::Minimal),
            other => Err(format!("unknown auth theme '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_theme_names_case_insensitively() {
        assert_eq!("Aurora".parse::<AuthTheme>(), Ok(AuthTheme::Aurora));
        assert_eq!(" CIRCUIT ".parse::<AuthTheme>(), Ok(AuthTheme::Circuit));
        assert_eq!("minimal".parse::<AuthTheme>(), Ok(AuthTheme::Minimal));
        assert!("neon".parse::<AuthTheme>().is_err());
    }

    #[test]
    fn unknown_or_missing_config_uses_default() {
        assert_eq!(AuthTheme::from_config(None), AuthTheme::Aurora);
        assert_eq!(AuthTheme::from_config(Some("neon")), AuthTheme::Aurora);
        assert_eq!(AuthTheme::from_config(Some("minimal")), AuthTheme::Minimal);
    }

    #[test]
    fn only_minimal_skips_the_animated_backdrop() {
        assert!(AuthTheme::Aurora.is_animated());
        assert!(AuthTheme::Circuit.is_animated());
        assert!(!AuthTheme::Minimal.is_animated());
        assert_ne!(AuthTheme::Aurora.palette(), AuthTheme::Circuit.palette());
    }
}
