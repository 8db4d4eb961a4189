use super::icons::{Icon, IconKind};
use crate::theme::AuthTheme;
use leptos::*;

const PARTICLE_COUNT: usize = 20;

/// Spreads particles over the viewport without randomness so server and
/// client renders agree.
pub fn particle_style(index: usize) -> String {
    let left = (index * 37 + 11) % 100;
    let top = (index * 53 + 7) % 100;
    let delay = (index * 13 % 50) as f32 / 10.0;
    format!("left: {}%; top: {}%; animation-delay: {:.1}s;", left, top, delay)
}

#[component]
fn AuroraBackdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden" data-backdrop="aurora">
            <div class="absolute top-1/4 left-1/4 w-64 h-64 bg-blue-500/20 rounded-full blur-3xl animate-pulse"></div>
            <div class="absolute top-3/4 right-1/4 w-96 h-96 bg-purple-500/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
            <div class="absolute bottom-1/4 left-1/3 w-80 h-80 bg-pink-500/20 rounded-full blur-3xl animate-pulse delay-2000"></div>

            <div class="absolute top-10 left-10 w-4 h-4 bg-white/30 rotate-45 animate-bounce delay-300"></div>
            <div class="absolute top-20 right-20 w-6 h-6 bg-blue-400/40 rounded-full animate-ping delay-700"></div>
            <div class="absolute bottom-20 left-20 w-3 h-3 bg-purple-400/50 animate-pulse delay-1500"></div>
            <div class="absolute bottom-32 right-32 w-5 h-5 bg-pink-400/40 rotate-45 animate-spin delay-2000"></div>

            <div class="absolute top-1/3 left-1/6 animate-float">
                <Icon kind=IconKind::Sparkles class="h-8 w-8 text-white/20"/>
            </div>
            <div class="absolute top-2/3 right-1/6 animate-float-delayed">
                <Icon kind=IconKind::Zap class="h-6 w-6 text-blue-300/30"/>
            </div>
            <div class="absolute top-1/2 left-1/12 animate-float-slow">
                <Icon kind=IconKind::Star class="h-5 w-5 text-purple-300/25"/>
            </div>

            <div class="absolute inset-0 bg-grid-pattern opacity-5"></div>
            <div class="absolute inset-0 bg-gradient-to-t from-black/20 via-transparent to-transparent"></div>
        </div>
    }
}

#[component]
fn CircuitBackdrop() -> impl IntoView {
    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            view! {
                <div
                    class={format!("absolute w-1 h-1 bg-white/30 rounded-full animate-particle-{}", i % 4)}
                    style={particle_style(i)}
                ></div>
            }
        })
        .collect_view();

    view! {
        <div class="absolute inset-0 overflow-hidden" data-backdrop="circuit">
            <div class="absolute -top-40 -left-40 w-80 h-80 bg-gradient-to-r from-blue-500/30 to-purple-500/30 rounded-full blur-3xl animate-float-slow"></div>
            <div class="absolute -top-20 -right-20 w-96 h-96 bg-gradient-to-r from-purple-500/20 to-pink-500/20 rounded-full blur-3xl animate-float-delayed"></div>
            <div class="absolute -bottom-40 -left-20 w-72 h-72 bg-gradient-to-r from-cyan-500/25 to-blue-500/25 rounded-full blur-3xl animate-float"></div>
            <div class="absolute -bottom-20 -right-40 w-64 h-64 bg-gradient-to-r from-pink-500/30 to-purple-500/30 rounded-full blur-3xl animate-float-slow"></div>

            <div class="absolute top-1/4 left-1/6 animate-orbit">
                <div class="w-3 h-3 bg-blue-400 rounded-full shadow-lg shadow-blue-400/50"></div>
            </div>
            <div class="absolute top-1/3 right-1/4 animate-orbit-reverse">
                <div class="w-2 h-2 bg-purple-400 rounded-full shadow-lg shadow-purple-400/50"></div>
            </div>
            <div class="absolute bottom-1/3 left-1/3 animate-orbit-slow">
                <div class="w-4 h-4 bg-cyan-400 rounded-full shadow-lg shadow-cyan-400/50"></div>
            </div>

            <div class="absolute top-20 left-20 animate-float text-blue-400/30">
                <Icon kind=IconKind::Cpu class="h-8 w-8"/>
            </div>
            <div class="absolute top-32 right-32 animate-float-delayed text-purple-400/30">
                <Icon kind=IconKind::Wifi class="h-6 w-6"/>
            </div>
            <div class="absolute bottom-32 left-32 animate-float-slow text-cyan-400/30">
                <Icon kind=IconKind::Globe class="h-7 w-7"/>
            </div>
            <div class="absolute bottom-20 right-20 animate-float text-pink-400/30">
                <Icon kind=IconKind::Zap class="h-5 w-5"/>
            </div>

            <svg class="absolute inset-0 w-full h-full pointer-events-none opacity-20">
                <defs>
                    <linearGradient id="lineGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#3B82F6" stop-opacity="0.6"></stop>
                        <stop offset="50%" stop-color="#8B5CF6" stop-opacity="0.4"></stop>
                        <stop offset="100%" stop-color="#EC4899" stop-opacity="0.6"></stop>
                    </linearGradient>
                </defs>
                <path
                    d="M100,200 Q300,100 500,200 T900,200"
                    stroke="url(#lineGradient)"
                    stroke-width="2"
                    fill="none"
                    class="animate-draw-line"
                ></path>
                <path
                    d="M200,400 Q400,300 600,400 T1000,400"
                    stroke="url(#lineGradient)"
                    stroke-width="2"
                    fill="none"
                    class="animate-draw-line-delayed"
                ></path>
            </svg>

            {particles}

            <div class="absolute inset-0 bg-grid-pattern opacity-5"></div>
        </div>
    }
}

#[component]
pub fn AnimatedBackdrop(theme: AuthTheme) -> impl IntoView {
    match theme {
        AuthTheme::Aurora => view! { <AuroraBackdrop/> }.into_view(),
        AuthTheme::Circuit => view! { <CircuitBackdrop/> }.into_view(),
        AuthTheme::Minimal => ().into_view(),
    }
}
