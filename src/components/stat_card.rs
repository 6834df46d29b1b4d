//! Stat Card Component
//!
//! Summary tile showing a labelled count with an optional trend.

use leptos::*;

/// Signed percentage trend shown under the value.
#[derive(Clone, Copy, PartialEq)]
pub struct Trend {
    pub value: i32,
    pub is_positive: bool,
}

/// Stat tile, purely a function of its inputs.
#[component]
pub fn StatCard(
    title: &'static str,
    /// Reactive count displayed as the headline value
    #[prop(into)]
    value: Signal<usize>,
    description: &'static str,
    icon: &'static str,
    #[prop(optional)]
    trend: Option<Trend>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-all duration-300">
            <div class="flex items-start justify-between">
                <div class="space-y-2">
                    <p class="text-sm font-medium text-gray-400">{title}</p>
                    <p class="text-3xl font-bold">{move || value.get()}</p>
                    <p class="text-sm text-gray-400">{description}</p>
                    {trend.map(|t| {
                        let (arrow, color) = if t.is_positive {
                            ("↗", "text-green-400")
                        } else {
                            ("↘", "text-yellow-400")
                        };
                        view! {
                            <div class=format!("text-sm flex items-center gap-1 {}", color)>
                                <span>{arrow}</span>
                                <span>{format!("{}%", t.value.abs())}</span>
                            </div>
                        }
                    })}
                </div>

                // Icon chip
                <div class="w-12 h-12 rounded-lg bg-gray-700 flex items-center justify-center text-2xl">
                    {icon}
                </div>
            </div>
        </div>
    }
}
