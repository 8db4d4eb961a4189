use leptos::*;

/// Outline icons drawn on a 24x24 grid with `currentColor` strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Book,
    Eye,
    EyeOff,
    User,
    UserCheck,
    Sparkles,
    Zap,
    Star,
    Cpu,
    Wifi,
    Globe,
}

impl IconKind {
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Book => &["M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20"],
            IconKind::Eye => &[
                "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z",
                "M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z",
            ],
            IconKind::EyeOff => &[
                "M9.88 9.88a3 3 0 1 0 4.24 4.24",
                "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68",
                "M6.61 6.61A13.53 13.53 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61",
                "M2 2l20 20",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0Z",
            ],
            IconKind::UserCheck => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0Z",
                "M16 11l2 2 4-4",
            ],
            IconKind::Sparkles => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0Z",
            ],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8Z"],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01Z",
            ],
            IconKind::Cpu => &[
                "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "M9 9h6v6H9Z",
                "M9 1v3M15 1v3M9 20v3M15 20v3M20 9h3M20 14h3M1 9h3M1 14h3",
            ],
            IconKind::Wifi => &[
                "M5 12.55a11 11 0 0 1 14.08 0",
                "M1.42 9a16 16 0 0 1 21.16 0",
                "M8.53 16.11a6 6 0 0 1 6.95 0",
                "M12 20h.01",
            ],
            IconKind::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10Z",
            ],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d={*d}></path> }).collect_view()}
        </svg>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn icon_renders_every_path() {
        let html = render_to_string(|| view! { <Icon kind=IconKind::EyeOff class="h-5 w-5"/> });
        assert_eq!(html.matches("<path").count(), IconKind::EyeOff.paths().len());
        assert!(html.contains("h-5 w-5"));
    }
}
